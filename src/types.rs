use std::path::Path;

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    #[value(name = "csv")]
    Csv,
    #[value(name = "tsv")]
    Tsv,
    #[value(name = "fastq")]
    Fastq,
}

const COMPRESSION_SUFFIXES: [&str; 4] = ["gz", "bz2", "xz", "zst"];

impl InputFormat {
    /// Guess the format from a file name, looking past a compression suffix
    /// such as `reads.tsv.gz`.
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_str()?.to_ascii_lowercase();
        let mut parts: Vec<&str> = name.split('.').skip(1).collect();
        if let Some(last) = parts.last() {
            if COMPRESSION_SUFFIXES.contains(last) {
                parts.pop();
            }
        }

        match parts.last().copied()? {
            "csv" => Some(InputFormat::Csv),
            "tsv" | "tab" | "txt" => Some(InputFormat::Tsv),
            "fastq" | "fq" => Some(InputFormat::Fastq),
            _ => None,
        }
    }

    pub fn delimiter(&self) -> Option<u8> {
        match self {
            InputFormat::Csv => Some(b','),
            InputFormat::Tsv => Some(b'\t'),
            InputFormat::Fastq => None,
        }
    }
}

/// One read: an identifier and its Phred-encoded quality string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityRead {
    pub id: String,
    pub quality: String,
}

impl QualityRead {
    pub fn new(id: impl Into<String>, quality: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            quality: quality.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePoint {
    pub position: usize,
    pub score: u8,
}

/// Decoded quality scores in read order. Positions start at zero and are
/// contiguous.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreSeries {
    points: Vec<ScorePoint>,
}

impl ScoreSeries {
    pub fn from_scores(scores: impl IntoIterator<Item = u8>) -> Self {
        let points = scores
            .into_iter()
            .enumerate()
            .map(|(position, score)| ScorePoint { position, score })
            .collect();
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[ScorePoint] {
        &self.points
    }

    pub fn scores(&self) -> Vec<u8> {
        self.points.iter().map(|p| p.score).collect()
    }
}
