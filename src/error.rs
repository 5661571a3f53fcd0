use std::path::PathBuf;
use thiserror::Error;

/// A quality character with no entry in the Phred lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized quality character {character:?} at position {position}")]
pub struct LookupError {
    pub character: char,
    pub position: usize,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Unsupported plot format for {}: expected .svg, .png, .jpg, .jpeg or .bmp", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Input(err.to_string())
    }
}

impl From<niffler::Error> for Error {
    fn from(err: niffler::Error) -> Self {
        Error::Input(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
