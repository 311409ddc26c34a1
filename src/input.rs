//! Sources of input matrices: text files, the fixed synthetic pattern used
//! for benchmarking, and random data files.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use rand::Rng;

use crate::error::{Result, StrassenError};
use crate::matrix::{Element, Matrix};

/// Cycle the synthetic benchmark data is drawn from.
pub const SYNTHETIC_CYCLE: [Element; 18] = [0, 1, 2, 0, 2, 1, 1, 0, 2, 1, 2, 0, 2, 1, 0, 2, 0, 1];

/// Reads X and Y from a file holding one integer per line: all `n²`
/// entries of X row by row, then all of Y. Lines after the first `2n²`
/// are ignored.
pub fn read_matrices(path: &Path, n: usize) -> Result<(Matrix, Matrix)> {
    let text = fs::read_to_string(path).map_err(|source| StrassenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_matrices(&text, n)
}

/// [`read_matrices`] over text already in memory.
///
/// ```
/// use strassen::input::parse_matrices;
///
/// let (x, y) = parse_matrices("1\n2\n3\n4\n5\n6\n7\n8\n", 2).unwrap();
/// assert_eq!(x.as_slice(), &[1, 2, 3, 4]);
/// assert_eq!(y.as_slice(), &[5, 6, 7, 8]);
/// ```
pub fn parse_matrices(text: &str, n: usize) -> Result<(Matrix, Matrix)> {
    let cells = Matrix::cell_count(n)?;
    let expected = cells.checked_mul(2).ok_or_else(|| {
        StrassenError::InvalidParameter(format!("dimension {} is too large", n))
    })?;

    // Grows with the text, not with the requested dimension: a short file
    // must fail as malformed rather than allocate for entries it lacks.
    let mut values = Vec::new();
    for (idx, line) in text.lines().take(expected).enumerate() {
        let trimmed = line.trim();
        let value = trimmed.parse::<Element>().map_err(|_| {
            StrassenError::MalformedInput(format!(
                "line {}: expected an integer, got {:?}",
                idx + 1,
                trimmed
            ))
        })?;
        values.push(value);
    }

    if values.len() < expected {
        return Err(StrassenError::MalformedInput(format!(
            "expected {} entries for two {}x{} matrices, found {}",
            expected,
            n,
            n,
            values.len()
        )));
    }

    let y = values.split_off(cells);
    Ok((Matrix::from_vec(n, values)?, Matrix::from_vec(n, y)?))
}

/// Deterministic `n × n` pair for benchmarking.
///
/// Entries walk [`SYNTHETIC_CYCLE`] row-major through X and carry on where
/// X stopped for Y, so the two matrices differ whenever `n²` isn't a
/// multiple of the cycle length.
pub fn synthetic_pair(n: usize) -> (Matrix, Matrix) {
    let mut cycle = SYNTHETIC_CYCLE.iter().copied().cycle();
    let mut x = Matrix::zeros(n);
    let mut y = Matrix::zeros(n);
    for (dst, v) in x.data_mut().iter_mut().zip(cycle.by_ref()) {
        *dst = v;
    }
    for (dst, v) in y.data_mut().iter_mut().zip(cycle) {
        *dst = v;
    }
    (x, y)
}

/// Value range for [`generate_random_values`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RandomKind {
    /// 0 or 1
    Binary,
    /// 0, 1 or 2
    Ternary,
    /// -1, 0 or 1
    Signed,
}

impl RandomKind {
    /// Inclusive bounds.
    pub fn range(self) -> (Element, Element) {
        match self {
            RandomKind::Binary => (0, 1),
            RandomKind::Ternary => (0, 2),
            RandomKind::Signed => (-1, 1),
        }
    }
}

/// `2n²` random entries: enough for one X/Y pair in the file format
/// [`read_matrices`] expects.
pub fn generate_random_values<R: Rng + ?Sized>(
    kind: RandomKind,
    n: usize,
    rng: &mut R,
) -> Vec<Element> {
    let (lo, hi) = kind.range();
    let cells = n * n;
    (0..cells)
        .chain(0..cells)
        .map(|_| rng.gen_range(lo..=hi))
        .collect()
}

/// Writes one value per line.
pub fn write_values(path: &Path, values: &[Element]) -> Result<()> {
    let io_err = |source: std::io::Error| StrassenError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = fs::File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    for v in values {
        writeln!(out, "{}", v).map_err(io_err)?;
    }
    out.flush().map_err(io_err)
}
