mod fastq;
mod table;

use crate::error::{Error, Result};
use crate::types::{InputFormat, QualityRead};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Which table columns hold the quality string and, optionally, the read id.
#[derive(Clone, Debug)]
pub struct ReadColumns {
    pub quality_column: String,
    pub id_column: Option<String>,
}

impl Default for ReadColumns {
    fn default() -> Self {
        Self {
            quality_column: "quals".to_string(),
            id_column: None,
        }
    }
}

/// Reads in input order, addressable by row index.
#[derive(Debug, Clone, Default)]
pub struct ReadCollection {
    reads: Vec<QualityRead>,
}

impl ReadCollection {
    pub fn new(reads: Vec<QualityRead>) -> Self {
        Self { reads }
    }

    /// Loads reads from a CSV/TSV table or a FASTQ file. Compressed input is
    /// detected from its magic bytes. Without an explicit `format` the file
    /// extension decides.
    pub fn from_path(
        path: &Path,
        format: Option<InputFormat>,
        columns: &ReadColumns,
    ) -> Result<Self> {
        let format = match format.or_else(|| InputFormat::from_path(path)) {
            Some(format) => format,
            None => {
                return Err(Error::Input(format!(
                    "cannot tell the format of {} from its name; pass --format",
                    path.display()
                )))
            }
        };

        let file = File::open(path).map_err(|e| {
            Error::Io(std::io::Error::new(
                e.kind(),
                format!("{}: {}", path.display(), e),
            ))
        })?;
        let (reader, compression) = niffler::get_reader(Box::new(file))?;
        log::debug!(
            "Reading {} as {:?} ({:?} compression)",
            path.display(),
            format,
            compression
        );

        Self::from_reader(reader, format, columns)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: InputFormat,
        columns: &ReadColumns,
    ) -> Result<Self> {
        let reads = match format.delimiter() {
            Some(delimiter) => table::read_table(reader, delimiter, columns)?,
            None => fastq::read_fastq(reader)?,
        };
        Ok(Self { reads })
    }

    pub fn len(&self) -> usize {
        self.reads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reads.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&QualityRead> {
        self.reads.get(index)
    }
}

impl FromIterator<QualityRead> for ReadCollection {
    fn from_iter<I: IntoIterator<Item = QualityRead>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
