use crate::config::Config;
use crate::quality::decode_quality;
use crate::reads::ReadCollection;
use crate::types::{InputFormat, QualityRead};
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use crate::utils::scatter_plotter::ScatterPlotter;
use anyhow::{Context, Result};
use indicatif::ProgressBar;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Where each read's plot goes.
///
/// A plain path is shared by every read, so each plot replaces the previous
/// one and only the last read survives. A path containing `{index}` or `{id}`
/// is expanded per read instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Single(PathBuf),
    Template(String),
}

impl OutputTarget {
    pub fn parse(output: &str) -> Self {
        if output.contains("{index}") || output.contains("{id}") {
            OutputTarget::Template(output.to_string())
        } else {
            OutputTarget::Single(PathBuf::from(output))
        }
    }

    pub fn is_template(&self) -> bool {
        matches!(self, OutputTarget::Template(_))
    }

    pub fn resolve(&self, index: usize, read: &QualityRead) -> PathBuf {
        match self {
            OutputTarget::Single(path) => path.clone(),
            OutputTarget::Template(template) => PathBuf::from(
                template
                    .replace("{index}", &index.to_string())
                    .replace("{id}", &file_safe(&read.id)),
            ),
        }
    }
}

fn file_safe(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Decodes and plots each selected read in order, returning the path written
/// for every read. The first failure stops the loop.
pub fn plot_reads(
    reads: &ReadCollection,
    row: Option<usize>,
    target: &OutputTarget,
    plotter: &ScatterPlotter,
    progress: &ProgressBar,
) -> Result<Vec<PathBuf>> {
    let indices: Vec<usize> = match row {
        Some(index) if index >= reads.len() => anyhow::bail!(
            "Row {} is out of range: the input has {} read(s)",
            index,
            reads.len()
        ),
        Some(index) => vec![index],
        None => (0..reads.len()).collect(),
    };

    let mut written = Vec::with_capacity(indices.len());
    for index in indices {
        let read = reads
            .get(index)
            .with_context(|| format!("Row {} is missing", index))?;

        let series = decode_quality(&read.quality).with_context(|| {
            format!("Failed to decode quality string of row {} ({})", index, read.id)
        })?;

        let path = target.resolve(index, read);
        plotter
            .render(&series, Some(&read.id), &path)
            .with_context(|| {
                format!(
                    "Failed to plot row {} ({}) to {}",
                    index,
                    read.id,
                    path.display()
                )
            })?;

        log::debug!("Row {} ({}): {} scores -> {}", index, read.id, series.len(), path.display());
        written.push(path);
        progress.inc(1);
    }

    Ok(written)
}

pub fn run(
    input: PathBuf,
    output: String,
    format: Option<InputFormat>,
    row: Option<usize>,
    config: &Config,
) -> Result<()> {
    let reads = ReadCollection::from_path(&input, format, &config.columns())
        .with_context(|| format!("Failed to load reads from {}", input.display()))?;
    log::info!("Loaded {} read(s) from {}", reads.len(), input.display());

    let target = OutputTarget::parse(&output);
    if !target.is_template() && row.is_none() && reads.len() > 1 {
        log::warn!(
            "All {} reads are plotted to {}; only the last one will remain (use {{index}} or {{id}} in --output for one file per read)",
            reads.len(),
            output
        );
    }

    let total = if row.is_some() { 1 } else { reads.len() as u64 };
    let progress = ProgressBarBuilder::new("Plotting reads")
        .with_template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .with_length(total)
        .build()?;

    let written = plot_reads(&reads, row, &target, &config.plotter(), &progress)?;
    progress.finish_and_clear();

    let files: BTreeSet<&PathBuf> = written.iter().collect();
    println!("\nPlotting completed:");
    println!("Reads plotted: {}", written.len());
    println!("Files written: {}", files.len());
    for file in files {
        println!("  {}", file.display());
    }

    Ok(())
}
