use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Cutoff frequency {0} is outside the open interval (0, 0.5)")]
    InvalidCutoff(f64),

    #[error("Tap count must be positive (got {0})")]
    InvalidTapCount(usize),

    #[error("Bit width {0} is not supported (expected 2..=32)")]
    InvalidBitWidth(u32),

    #[error("Coefficient count mismatch: expected {expected}, found {found}")]
    CoefficientCountMismatch { expected: usize, found: usize },

    #[error("Missing file: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("Malformed value {text:?} at {}:{line}", path.display())]
    MalformedLine {
        path: PathBuf,
        line: usize,
        text: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HarnessError>;
