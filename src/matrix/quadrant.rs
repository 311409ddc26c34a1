//! Quadrant extraction and element-wise addition/subtraction.
//!
//! A quadrant is the `n/2 × n/2` block of an `n × n` matrix starting at
//! `(row_start, col_start)`, where both offsets are `0` or `n/2`. Quadrants
//! are never a type of their own: they are either copied out with
//! [`extract_quadrant`] or read in place by the offset variants
//! [`add_quadrants`] and [`subtract_quadrants`], which save one allocation
//! per operand.

use super::dense::{Element, Matrix};
use crate::error::{Result, StrassenError};

/// Copies the `dim/2 × dim/2` block of `m` starting at
/// `(row_start, col_start)` into a new matrix.
///
/// `m.dim()` must be even; an odd dimension silently drops the last
/// row and column.
pub fn extract_quadrant(m: &Matrix, row_start: usize, col_start: usize) -> Matrix {
    let n = m.dim();
    let half = n / 2;
    let src = m.as_slice();

    let mut out = Matrix::zeros(half);
    let dst = out.data_mut();
    for row in 0..half {
        let from = (row_start + row) * n + col_start;
        dst[row * half..(row + 1) * half].copy_from_slice(&src[from..from + half]);
    }
    out
}

/// Element-wise `a + b`.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_dim(a, b)?;
    Ok(sum(a, b))
}

/// Element-wise `a - b`.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    check_same_dim(a, b)?;
    Ok(difference(a, b))
}

/// Unchecked [`add`] for operands the caller already knows are equal-sized.
#[inline]
pub(crate) fn sum(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.dim(), b.dim());
    elementwise(a, b, |x, y| x + y)
}

/// Unchecked [`subtract`].
#[inline]
pub(crate) fn difference(a: &Matrix, b: &Matrix) -> Matrix {
    debug_assert_eq!(a.dim(), b.dim());
    elementwise(a, b, |x, y| x - y)
}

/// Adds a quadrant of `a` to a quadrant of `b` without copying either out.
///
/// The result has dimension `a.dim() / 2`. `a` and `b` may be the same
/// matrix.
pub fn add_quadrants(
    a: &Matrix,
    a_row_start: usize,
    a_col_start: usize,
    b: &Matrix,
    b_row_start: usize,
    b_col_start: usize,
) -> Matrix {
    quadrant_op(
        a,
        (a_row_start, a_col_start),
        b,
        (b_row_start, b_col_start),
        |x, y| x + y,
    )
}

/// Subtracts a quadrant of `b` from a quadrant of `a` without copying
/// either out.
pub fn subtract_quadrants(
    a: &Matrix,
    a_row_start: usize,
    a_col_start: usize,
    b: &Matrix,
    b_row_start: usize,
    b_col_start: usize,
) -> Matrix {
    quadrant_op(
        a,
        (a_row_start, a_col_start),
        b,
        (b_row_start, b_col_start),
        |x, y| x - y,
    )
}

/// Writes `sub` into `dst` at `(row_start, col_start)`.
///
/// This is the one place a matrix is mutated after creation: assembling a
/// recursion frame's result from its four quadrant products.
pub(crate) fn assign_quadrant(dst: &mut Matrix, row_start: usize, col_start: usize, sub: &Matrix) {
    let n = dst.dim();
    let half = sub.dim();
    debug_assert!(row_start + half <= n && col_start + half <= n);

    let src = sub.as_slice();
    let out = dst.data_mut();
    for row in 0..half {
        let to = (row_start + row) * n + col_start;
        out[to..to + half].copy_from_slice(&src[row * half..(row + 1) * half]);
    }
}

fn check_same_dim(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.dim() != b.dim() {
        return Err(StrassenError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(())
}

fn elementwise<F>(a: &Matrix, b: &Matrix, op: F) -> Matrix
where
    F: Fn(Element, Element) -> Element,
{
    let mut out = Matrix::zeros(a.dim());
    for ((res, &x), &y) in out
        .data_mut()
        .iter_mut()
        .zip(a.as_slice())
        .zip(b.as_slice())
    {
        *res = op(x, y);
    }
    out
}

fn quadrant_op<F>(
    a: &Matrix,
    (a_row, a_col): (usize, usize),
    b: &Matrix,
    (b_row, b_col): (usize, usize),
    op: F,
) -> Matrix
where
    F: Fn(Element, Element) -> Element,
{
    let half = a.dim() / 2;
    let (na, nb) = (a.dim(), b.dim());
    let (sa, sb) = (a.as_slice(), b.as_slice());
    debug_assert!(b_row + half <= nb && b_col + half <= nb);

    let mut out = Matrix::zeros(half);
    let dst = out.data_mut();
    for row in 0..half {
        let ra = &sa[(a_row + row) * na + a_col..][..half];
        let rb = &sb[(b_row + row) * nb + b_col..][..half];
        for (col, (&x, &y)) in ra.iter().zip(rb).enumerate() {
            dst[row * half + col] = op(x, y);
        }
    }
    out
}
