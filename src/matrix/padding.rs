//! Zero-padding to a power-of-two dimension and trimming back.
//!
//! Strassen halves the matrix at every level, so the dimension has to be a
//! power of two all the way down. Padding with zeros doesn't change the
//! top-left block of the product, which [`trim`] then recovers.

use std::borrow::Cow;

use super::dense::Matrix;
use crate::error::{Result, StrassenError};

/// Smallest power of two `>= n`. Zero maps to zero.
///
/// Exact integer arithmetic, no logarithms.
///
/// ```
/// use strassen::matrix::padding::next_power_of_two;
///
/// assert_eq!(next_power_of_two(1), 1);
/// assert_eq!(next_power_of_two(3), 4);
/// assert_eq!(next_power_of_two(64), 64);
/// assert_eq!(next_power_of_two(65), 128);
/// ```
pub fn next_power_of_two(n: usize) -> usize {
    if n == 0 { 0 } else { n.next_power_of_two() }
}

/// Zero-extends `m` to the next power-of-two dimension.
///
/// Returns the input borrowed when its dimension is already a power of two
/// (or zero), so the common case costs nothing.
pub fn pad(m: &Matrix) -> Cow<'_, Matrix> {
    let n = m.dim();
    let target = next_power_of_two(n);
    if target == n {
        return Cow::Borrowed(m);
    }

    let mut out = Matrix::zeros(target);
    let dst = out.data_mut();
    for row in 0..n {
        dst[row * target..row * target + n].copy_from_slice(m.row(row));
    }
    Cow::Owned(out)
}

/// Top-left `d × d` block of `m`.
pub fn trim(m: &Matrix, d: usize) -> Result<Matrix> {
    let n = m.dim();
    if d > n {
        return Err(StrassenError::InvalidParameter(format!(
            "cannot trim a {}x{} matrix to {}x{}",
            n, n, d, d
        )));
    }
    if d == n {
        return Ok(m.clone());
    }

    let mut out = Matrix::zeros(d);
    let dst = out.data_mut();
    for row in 0..d {
        dst[row * d..(row + 1) * d].copy_from_slice(&m.row(row)[..d]);
    }
    Ok(out)
}
