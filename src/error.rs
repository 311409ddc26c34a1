use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong multiplying, loading or generating matrices.
#[derive(Error, Debug)]
pub enum StrassenError {
    /// The two operands are square matrices of different sizes.
    #[error("dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },
    /// Input data is missing entries, has a non-integer entry, or has the
    /// wrong length for the dimension.
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// A dimension, crossover or sweep range is outside what the operation accepts.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Reading or writing a matrix file failed.
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StrassenError>;
