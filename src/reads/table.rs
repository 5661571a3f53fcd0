use super::ReadColumns;
use crate::error::{Error, Result};
use crate::types::QualityRead;
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

fn column_index(headers: &StringRecord, name: &str) -> Result<usize> {
    headers.iter().position(|h| h == name).ok_or_else(|| {
        let available: Vec<&str> = headers.iter().collect();
        Error::Input(format!(
            "no column named '{}' (found: {})",
            name,
            available.join(", ")
        ))
    })
}

/// Reads a delimited table with a header row. Tab-separated input is read
/// without quote handling, since `"` is itself a quality character.
///
/// Comma-separated input keeps standard CSV quoting because `,` is also a
/// quality character, so a quality field that starts with `"` must be
/// quoted, with inner quotes doubled (`"""12"` for `"12`).
pub(crate) fn read_table<R: Read>(
    reader: R,
    delimiter: u8,
    columns: &ReadColumns,
) -> Result<Vec<QualityRead>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .quoting(delimiter != b'\t')
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let quality_idx = column_index(&headers, &columns.quality_column)?;
    let id_idx = columns
        .id_column
        .as_deref()
        .map(|name| column_index(&headers, name))
        .transpose()?;

    let mut reads = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        let quality = record.get(quality_idx).ok_or_else(|| {
            Error::Input(format!(
                "row {} has no '{}' field",
                index, columns.quality_column
            ))
        })?;
        let id = match id_idx.and_then(|i| record.get(i)) {
            Some(id) => id.to_string(),
            None => index.to_string(),
        };
        reads.push(QualityRead::new(id, quality));
    }

    Ok(reads)
}
