use crate::types::InputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Config file to use instead of the user config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plot quality score against position for each read in a table or FASTQ file
    Plot {
        /// Path to the TSV, CSV or FASTQ file containing your reads
        #[arg(short = 'i', long = "input")]
        input: PathBuf,

        /// Path to write the plot file; the extension picks the image format.
        /// Use {index} or {id} to write one file per read.
        #[arg(short = 'o', long = "output")]
        output: String,

        /// Input format (default: guessed from the file extension)
        #[arg(long, value_enum)]
        format: Option<InputFormat>,

        /// Table column holding the quality strings (default: quals)
        #[arg(long)]
        quality_column: Option<String>,

        /// Table column holding the read ids (default: row index)
        #[arg(long)]
        id_column: Option<String>,

        /// Plot only this zero-based row
        #[arg(long)]
        row: Option<usize>,

        /// Plot width in pixels
        #[arg(long)]
        width: Option<u32>,

        /// Plot height in pixels
        #[arg(long)]
        height: Option<u32>,

        /// Point radius in pixels
        #[arg(long)]
        point_size: Option<u32>,
    },

    /// Print the per-position scores of a single quality string
    Decode {
        /// Phred+33 quality string
        quality: String,
    },

    /// Write the default config file
    InitConfig,
}
