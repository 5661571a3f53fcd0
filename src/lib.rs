pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod quality;
pub mod reads;
pub mod types;
pub mod utils;

pub use error::{Error, LookupError, Result};
pub use quality::decode_quality;
pub use reads::ReadCollection;
pub use types::{QualityRead, ScoreSeries};
pub use utils::scatter_plotter::{plot_scores, ScatterPlotter};
