use crate::quality::decode_quality;
use anyhow::{Context, Result};
use std::io::{self, Write};

pub fn run(quality: String) -> Result<()> {
    let series = decode_quality(&quality).context("Failed to decode quality string")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "position\tscore")?;
    for point in series.points() {
        writeln!(out, "{}\t{}", point.position, point.score)?;
    }
    Ok(())
}
