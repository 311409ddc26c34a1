//! Standard triple-loop multiplication.

use super::dense::Matrix;
use crate::error::{Result, StrassenError};

/// Classical O(n³) multiplication: `C[i][j] = Σ_k A[i][k] * B[k][j]`.
///
/// Uses i-k-j loop order so the innermost loop walks both a row of B and
/// a row of C sequentially. The dimension is taken from `b`; both operands
/// must have the same dimension. This is the trusted base case of the
/// Strassen recursion, so it does not check that. Use
/// [`multiply_standard`] at API boundaries.
pub fn standard_multiply(a: &Matrix, b: &Matrix) -> Matrix {
    let n = b.dim();
    let (sa, sb) = (a.as_slice(), b.as_slice());

    let mut c = Matrix::zeros(n);
    let sc = c.data_mut();
    for i in 0..n {
        let c_row = &mut sc[i * n..(i + 1) * n];
        for p in 0..n {
            let a_ip = sa[i * n + p];
            if a_ip == 0 {
                continue;
            }
            let b_row = &sb[p * n..(p + 1) * n];
            for (c_ij, &b_pj) in c_row.iter_mut().zip(b_row) {
                *c_ij += a_ip * b_pj;
            }
        }
    }
    c
}

/// [`standard_multiply`] with the equal-dimension check.
///
/// # Example
///
/// ```
/// use strassen::{Matrix, multiply_standard};
///
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
///
/// let c = multiply_standard(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19, 22, 43, 50]);
/// ```
pub fn multiply_standard(a: &Matrix, b: &Matrix) -> Result<Matrix> {
    if a.dim() != b.dim() {
        return Err(StrassenError::DimensionMismatch {
            left: a.dim(),
            right: b.dim(),
        });
    }
    Ok(standard_multiply(a, b))
}
