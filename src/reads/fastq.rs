use crate::error::{Error, Result};
use crate::types::QualityRead;
use bio::io::fastq;
use std::io::{BufReader, Read};

pub(crate) fn read_fastq<R: Read>(reader: R) -> Result<Vec<QualityRead>> {
    let reader = fastq::Reader::new(BufReader::with_capacity(1024 * 1024, reader));
    let mut reads = Vec::new();

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|e| Error::Input(format!("FASTQ record {}: {}", index, e)))?;
        record
            .check()
            .map_err(|e| Error::Input(format!("FASTQ record {}: {}", index, e)))?;
        let quality = std::str::from_utf8(record.qual()).map_err(|_| {
            Error::Input(format!("FASTQ record {} has a non-UTF-8 quality line", index))
        })?;
        reads.push(QualityRead::new(record.id(), quality));
    }

    Ok(reads)
}
