use crate::error::LookupError;
use crate::types::ScoreSeries;

/// Quality character to Phred score. Covers scores 0 through 40; newline and
/// tab decode to 0.
pub const PHRED_TABLE: [(char, u8); 43] = [
    ('!', 0),
    ('"', 1),
    ('#', 2),
    ('$', 3),
    ('%', 4),
    ('&', 5),
    ('\'', 6),
    ('(', 7),
    (')', 8),
    ('*', 9),
    ('+', 10),
    (',', 11),
    ('-', 12),
    ('.', 13),
    ('/', 14),
    ('0', 15),
    ('1', 16),
    ('2', 17),
    ('3', 18),
    ('4', 19),
    ('5', 20),
    ('6', 21),
    ('7', 22),
    ('8', 23),
    ('9', 24),
    (':', 25),
    (';', 26),
    ('<', 27),
    ('=', 28),
    ('>', 29),
    ('?', 30),
    ('@', 31),
    ('A', 32),
    ('B', 33),
    ('C', 34),
    ('D', 35),
    ('E', 36),
    ('F', 37),
    ('G', 38),
    ('H', 39),
    ('I', 40),
    ('\n', 0),
    ('\t', 0),
];

pub fn lookup_score(character: char) -> Option<u8> {
    PHRED_TABLE
        .iter()
        .find(|(key, _)| *key == character)
        .map(|&(_, score)| score)
}

/// Decodes a quality string into a position/score series. The first
/// character missing from [`PHRED_TABLE`] aborts decoding.
pub fn decode_quality(quality: &str) -> Result<ScoreSeries, LookupError> {
    let mut scores = Vec::with_capacity(quality.len());
    for (position, character) in quality.chars().enumerate() {
        match lookup_score(character) {
            Some(score) => scores.push(score),
            None => return Err(LookupError { character, position }),
        }
    }
    Ok(ScoreSeries::from_scores(scores))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_phred33_offsets() {
        for &(character, score) in PHRED_TABLE.iter().take(41) {
            assert_eq!(character as u32 - 33, score as u32, "entry for {:?}", character);
        }
        assert_eq!(lookup_score('\n'), Some(0));
        assert_eq!(lookup_score('\t'), Some(0));
    }

    #[test]
    fn test_decode_every_table_character() {
        let quality: String = PHRED_TABLE.iter().map(|(c, _)| *c).collect();
        let series = decode_quality(&quality).unwrap();
        let expected: Vec<u8> = PHRED_TABLE.iter().map(|(_, s)| *s).collect();
        assert_eq!(series.len(), quality.chars().count());
        assert_eq!(series.scores(), expected);
    }

    #[test]
    fn test_decode_known_strings() {
        assert_eq!(decode_quality("!!II").unwrap().scores(), vec![0, 0, 40, 40]);
        assert_eq!(decode_quality("\t\n").unwrap().scores(), vec![0, 0]);
        assert_eq!(decode_quality("012").unwrap().scores(), vec![15, 16, 17]);
        assert_eq!(
            decode_quality("#</</BBFFFBF<").unwrap().scores(),
            vec![2, 27, 14, 27, 14, 33, 33, 37, 37, 37, 33, 37, 27]
        );
    }

    #[test]
    fn test_decode_empty() {
        assert!(decode_quality("").unwrap().is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_characters() {
        assert_eq!(
            decode_quality("!!I J"),
            Err(LookupError { character: ' ', position: 3 })
        );
        // 'J' is Phred 41, beyond the table
        assert_eq!(
            decode_quality("IJ"),
            Err(LookupError { character: 'J', position: 1 })
        );
        assert_eq!(
            decode_quality("é!"),
            Err(LookupError { character: 'é', position: 0 })
        );
        assert_eq!(
            decode_quality("!!\r"),
            Err(LookupError { character: '\r', position: 2 })
        );
    }
}
