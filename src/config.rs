//! Run configuration passed explicitly into [`crate::multiply`].

use std::fmt;

use crate::error::{Result, StrassenError};
use crate::matrix::Matrix;

/// Crossover used when none is given.
pub const DEFAULT_CROSSOVER: usize = 64;

/// Which algorithm computes the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Classical triple loop only.
    Standard,
    /// Strassen recursion down to the crossover, classical below it.
    #[default]
    Strassen,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Standard => write!(f, "standard"),
            Mode::Strassen => write!(f, "strassen"),
        }
    }
}

/// Everything that controls one multiplication.
///
/// ```
/// use strassen::{Config, Mode};
///
/// let cfg = Config::default().with_crossover(16);
/// assert_eq!(cfg.mode, Mode::Strassen);
/// assert!(cfg.validate().is_ok());
/// assert!(Config::default().with_crossover(0).validate().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub mode: Mode,
    /// Dimension at or below which the recursion switches to the classical
    /// algorithm. Must be at least 1.
    pub crossover: usize,
    /// Print inputs, the full product and timings instead of the diagonal.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: Mode::default(),
            crossover: DEFAULT_CROSSOVER,
            verbose: false,
        }
    }
}

impl Config {
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_crossover(mut self, crossover: usize) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.crossover == 0 {
            return Err(StrassenError::InvalidParameter(
                "crossover must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Rejects a zero requested dimension, or one whose matrix couldn't be
/// addressed.
pub fn check_dimension(n: usize) -> Result<()> {
    if n == 0 {
        return Err(StrassenError::InvalidParameter(
            "dimension must be positive".to_string(),
        ));
    }
    Matrix::cell_count(n)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.mode, Mode::Strassen);
        assert_eq!(cfg.crossover, 64);
        assert!(!cfg.verbose);
    }

    #[test]
    fn test_builders() {
        let cfg = Config::default()
            .with_mode(Mode::Standard)
            .with_crossover(8)
            .with_verbose(true);
        assert_eq!(cfg.mode, Mode::Standard);
        assert_eq!(cfg.crossover, 8);
        assert!(cfg.verbose);
    }

    #[test]
    fn test_zero_crossover_rejected() {
        let err = Config::default().with_crossover(0).validate().unwrap_err();
        assert!(matches!(err, StrassenError::InvalidParameter(_)));
    }

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension(1).is_ok());
        assert!(check_dimension(0).is_err());
        assert!(matches!(
            check_dimension(usize::MAX),
            Err(StrassenError::InvalidParameter(_))
        ));
    }
}
