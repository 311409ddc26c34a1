//! Strassen matrix multiplication with a tunable crossover.
//!
//! I built this to find out where Strassen's O(n^2.81) recursion actually
//! starts beating the plain O(n³) triple loop once you pay for all the
//! temporary matrices. The answer depends on the crossover: the size at
//! which the recursion stops and hands the block to the classical
//! algorithm. This crate implements both, plus the sweep that times every
//! crossover.
//!
//! ## Usage
//!
//! ```
//! use strassen::{Config, Matrix, multiply};
//!
//! let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
//! let b = Matrix::identity(3);
//!
//! // 3x3 is padded to 4x4, multiplied, then trimmed back
//! let c = multiply(&a, &b, &Config::default().with_crossover(1)).unwrap();
//! assert_eq!(c, a);
//! ```
//!
//! To time every crossover on one input:
//!
//! ```
//! use strassen::benchmark::crossover_sweep;
//! use strassen::input::synthetic_pair;
//!
//! let (x, y) = synthetic_pair(32);
//! let report = crossover_sweep(&x, &y).unwrap();
//! assert!(report.consistent);
//! for r in &report.results {
//!     if let Some(crossover) = r.crossover {
//!         println!("crossover {:>3}: {} ms", crossover, r.elapsed_millis());
//!     }
//! }
//! ```
//!
//! ## What's inside
//!
//! - Quadrant extraction and offset add/subtract that skip the copy
//! - Seven-product Strassen recursion with a classical base case
//! - Power-of-two zero padding with exact integer rounding
//! - Crossover and dimension sweeps with per-run timing

pub mod benchmark;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod matrix;

pub use config::{Config, DEFAULT_CROSSOVER, Mode};
pub use engine::strassen_multiply;
pub use error::{Result, StrassenError};
pub use matrix::naive::{multiply_standard, standard_multiply};
pub use matrix::padding::{next_power_of_two, pad, trim};
pub use matrix::quadrant::{add, subtract};
pub use matrix::{Element, Matrix};

use tracing::debug;

/// Matrix multiply: `A * B` with the algorithm `config` selects.
///
/// In Strassen mode both inputs are zero-padded to the next power of two,
/// multiplied recursively with `config.crossover` as the base-case size,
/// and the product is trimmed back to the input dimension.
///
/// # Errors
///
/// - [`StrassenError::DimensionMismatch`] if `a` and `b` differ in size
/// - [`StrassenError::InvalidParameter`] if the crossover is zero
pub fn multiply(a: &Matrix, b: &Matrix, config: &Config) -> Result<Matrix> {
    config.validate()?;
    if a.dim() != b.dim() {
        return Err(StrassenError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }

    let n = a.dim();
    match config.mode {
        Mode::Standard => {
            debug!(dimension = n, mode = %config.mode, "multiplying");
            Ok(standard_multiply(a, b))
        }
        Mode::Strassen => {
            let padded_a = pad(a);
            let padded_b = pad(b);
            debug!(
                dimension = n,
                padded = padded_a.dim(),
                mode = %config.mode,
                crossover = config.crossover,
                "multiplying"
            );
            let product = strassen_multiply(&padded_a, &padded_b, config.crossover);
            trim(&product, n)
        }
    }
}
