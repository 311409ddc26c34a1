//! Dense square integer matrix.

use std::fmt;
use std::ops::Index;

use crate::error::{Result, StrassenError};

/// Scalar type stored in every [`Matrix`].
///
/// Arithmetic is the host's native signed integer arithmetic; nothing
/// guards against overflow.
pub type Element = i64;

/// Square matrix stored row-major in a single `Vec`.
///
/// Element `[row][col]` lives at `data[row * n + col]`. The only shape this
/// type can represent is `n × n`, so every operation on it can assume the
/// operand is square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    n: usize,
    data: Vec<Element>,
}

impl Matrix {
    /// Number of entries in an `n × n` matrix, or `InvalidParameter` if
    /// `n²` doesn't fit in a `usize`.
    pub fn cell_count(n: usize) -> Result<usize> {
        n.checked_mul(n).ok_or_else(|| {
            StrassenError::InvalidParameter(format!("dimension {} is too large", n))
        })
    }

    /// `n × n` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `n²` overflows `usize`. Check untrusted dimensions with
    /// [`Matrix::cell_count`] first.
    pub fn zeros(n: usize) -> Self {
        let cells = n
            .checked_mul(n)
            .unwrap_or_else(|| panic!("{}x{} matrix is too large", n, n));
        Matrix {
            n,
            data: vec![0; cells],
        }
    }

    /// `n × n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Matrix::zeros(n);
        for i in 0..n {
            m.data[i * n + i] = 1;
        }
        m
    }

    /// Wraps a row-major buffer of exactly `n * n` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use strassen::Matrix;
    ///
    /// let m = Matrix::from_vec(2, vec![1, 2,
    ///                                  3, 4]).unwrap();
    /// assert_eq!(m[(1, 0)], 3);
    /// ```
    pub fn from_vec(n: usize, data: Vec<Element>) -> Result<Self> {
        let cells = Matrix::cell_count(n)?;
        if data.len() != cells {
            return Err(StrassenError::MalformedInput(format!(
                "expected {}x{}={} elements, got {}",
                n,
                n,
                cells,
                data.len()
            )));
        }
        Ok(Matrix { n, data })
    }

    /// Builds a matrix from nested rows. Every row must be as long as there
    /// are rows.
    pub fn from_rows(rows: Vec<Vec<Element>>) -> Result<Self> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|r| r.len() != n) {
            return Err(StrassenError::DimensionMismatch {
                left: n,
                right: bad.len(),
            });
        }
        Ok(Matrix {
            n,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Element> {
        if row >= self.n || col >= self.n {
            return None;
        }
        Some(self.data[row * self.n + col])
    }

    pub fn row(&self, row: usize) -> &[Element] {
        &self.data[row * self.n..(row + 1) * self.n]
    }

    pub fn as_slice(&self) -> &[Element] {
        &self.data
    }

    /// Entries `[i][i]` from top-left to bottom-right.
    pub fn diagonal(&self) -> Vec<Element> {
        (0..self.n).map(|i| self.data[i * self.n + i]).collect()
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [Element] {
        &mut self.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Element;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of bounds for {}x{} matrix",
            row,
            col,
            self.n,
            self.n
        );
        &self.data[row * self.n + col]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            write!(f, " [ ")?;
            for value in self.row(i) {
                write!(f, "{} ", value)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
