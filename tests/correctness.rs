use strassen::benchmark::{crossover_sweep, crossover_values, single_run};
use strassen::input::{read_matrices, synthetic_pair};
use strassen::{
    Config, Matrix, Mode, StrassenError, add, multiply, multiply_standard, pad,
    standard_multiply, strassen_multiply, subtract, trim,
};

fn patterned(n: usize, modulus: i64, shift: i64) -> Matrix {
    Matrix::from_vec(
        n,
        (0..(n * n) as i64).map(|i| i % modulus - shift).collect(),
    )
    .unwrap()
}

/// Textbook i-j-k product, independent of everything in the crate.
fn brute_force(a: &Matrix, b: &Matrix) -> Matrix {
    let n = a.dim();
    let mut rows = vec![vec![0; n]; n];
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                rows[i][j] += a[(i, k)] * b[(k, j)];
            }
        }
    }
    Matrix::from_rows(rows).unwrap()
}

fn strassen_config(crossover: usize) -> Config {
    Config::default()
        .with_mode(Mode::Strassen)
        .with_crossover(crossover)
}

/// 1, 2, 4, ... up to and including the first power of two >= n.
fn all_crossovers(n: usize) -> Vec<usize> {
    let mut out = vec![1];
    while *out.last().unwrap() < n {
        let next = out.last().unwrap() * 2;
        out.push(next);
    }
    out
}

// ============================================================
// Concrete scenarios
// ============================================================

#[test]
fn test_2x2_multiply() {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
    let b = Matrix::from_rows(vec![vec![5, 6], vec![7, 8]]).unwrap();
    let expected = Matrix::from_rows(vec![vec![19, 22], vec![43, 50]]).unwrap();

    let standard = multiply(&a, &b, &Config::default().with_mode(Mode::Standard)).unwrap();
    let strassen = multiply(&a, &b, &strassen_config(1)).unwrap();

    assert_eq!(standard, expected);
    assert_eq!(strassen, expected);
}

#[test]
fn test_3x3_pads_to_4x4() {
    let a = Matrix::from_rows(vec![vec![1, -2, 3], vec![0, 4, -1], vec![5, 2, 2]]).unwrap();
    let b = Matrix::from_rows(vec![vec![2, 0, 1], vec![-3, 1, 4], vec![1, 1, -2]]).unwrap();

    assert_eq!(pad(&a).dim(), 4);

    let padded = strassen_multiply(&pad(&a), &pad(&b), 1);
    assert_eq!(padded.dim(), 4);

    let c = trim(&padded, 3).unwrap();
    assert_eq!(c.dim(), 3);
    assert_eq!(c, brute_force(&a, &b));
    assert_eq!(multiply(&a, &b, &strassen_config(1)).unwrap(), c);
}

// ============================================================
// Strassen vs standard over many sizes and crossovers
// ============================================================

#[test]
fn test_strassen_matches_standard_all_crossovers() {
    let test_sizes = [1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 33];

    for size in test_sizes {
        let a = patterned(size, 10, 4);
        let b = patterned(size, 7, 3);
        let expected = standard_multiply(&a, &b);
        assert_eq!(expected, brute_force(&a, &b), "standard size {}", size);

        for crossover in all_crossovers(size) {
            let c = multiply(&a, &b, &strassen_config(crossover)).unwrap();
            assert_eq!(c, expected, "size {} crossover {}", size, crossover);
        }
    }
}

#[test]
fn test_padded_engine_then_trim_matches_standard() {
    for size in [6, 10, 12, 20] {
        let a = patterned(size, 13, 6);
        let b = patterned(size, 11, 5);
        let expected = standard_multiply(&a, &b);

        for crossover in all_crossovers(size) {
            let z = strassen_multiply(&pad(&a), &pad(&b), crossover);
            assert_eq!(
                trim(&z, size).unwrap(),
                expected,
                "size {} crossover {}",
                size,
                crossover
            );
        }
    }
}

#[test]
fn test_larger_synthetic() {
    let (x, y) = synthetic_pair(100);
    let expected = standard_multiply(&x, &y);
    for crossover in [4, 16, 64] {
        let z = multiply(&x, &y, &strassen_config(crossover)).unwrap();
        assert_eq!(z, expected, "crossover {}", crossover);
    }
}

// ============================================================
// Identity and zero
// ============================================================

#[test]
fn test_multiply_by_zero() {
    for size in [1, 3, 4, 6] {
        let a = patterned(size, 9, 4);
        let zero = Matrix::zeros(size);
        let c = multiply(&a, &zero, &strassen_config(1)).unwrap();
        assert_eq!(c, Matrix::zeros(size), "size {}", size);
        let c = multiply(&zero, &a, &strassen_config(2)).unwrap();
        assert_eq!(c, Matrix::zeros(size), "size {}", size);
    }
}

#[test]
fn test_multiply_by_identity() {
    for size in [1, 2, 5, 8, 11] {
        let a = patterned(size, 17, 8);
        let id = Matrix::identity(size);
        assert_eq!(multiply(&a, &id, &strassen_config(1)).unwrap(), a);
        assert_eq!(multiply(&id, &a, &strassen_config(2)).unwrap(), a);
        assert_eq!(multiply_standard(&id, &a).unwrap(), a);
    }
}

#[test]
fn test_empty_matrices() {
    let e = Matrix::zeros(0);
    assert_eq!(multiply(&e, &e, &Config::default()).unwrap().dim(), 0);
    assert_eq!(
        multiply(&e, &e, &Config::default().with_mode(Mode::Standard))
            .unwrap()
            .dim(),
        0
    );
}

// ============================================================
// Padding, trimming, add/subtract
// ============================================================

#[test]
fn test_pad_idempotent_and_trim_recovers() {
    for size in [1, 2, 3, 7, 8, 9, 13] {
        let m = patterned(size, 6, 2);
        let once = pad(&m).into_owned();
        assert!(once.dim().is_power_of_two());
        assert_eq!(*pad(&once), once);
        assert_eq!(trim(&once, size).unwrap(), m);
    }
}

#[test]
fn test_subtract_undoes_add() {
    for size in [1, 4, 7] {
        let a = patterned(size, 9, 4);
        let b = patterned(size, 5, 1);
        let sum = add(&a, &b).unwrap();
        assert_eq!(subtract(&sum, &b).unwrap(), a);
    }
}

// ============================================================
// Errors
// ============================================================

#[test]
fn test_dimension_mismatch() {
    let a = Matrix::zeros(2);
    let b = Matrix::zeros(3);

    for cfg in [Config::default(), Config::default().with_mode(Mode::Standard)] {
        let err = multiply(&a, &b, &cfg).unwrap_err();
        assert!(matches!(
            err,
            StrassenError::DimensionMismatch { left: 2, right: 3 }
        ));
    }
    assert!(add(&a, &b).is_err());
    assert!(subtract(&a, &b).is_err());
    assert!(multiply_standard(&a, &b).is_err());
}

#[test]
fn test_zero_crossover_rejected() {
    let a = Matrix::identity(4);
    let err = multiply(&a, &a, &strassen_config(0)).unwrap_err();
    assert!(matches!(err, StrassenError::InvalidParameter(_)));
}

#[test]
fn test_malformed_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("short.txt");
    std::fs::write(&path, "1\n2\n3\n").unwrap();

    let err = read_matrices(&path, 2).unwrap_err();
    assert!(matches!(err, StrassenError::MalformedInput(_)));
}

#[test]
fn test_file_round_trip_through_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matrices.txt");
    let lines: Vec<String> = [1, 2, 3, 4, 5, 6, 7, 8].iter().map(|v| v.to_string()).collect();
    std::fs::write(&path, lines.join("\n")).unwrap();

    let (x, y) = read_matrices(&path, 2).unwrap();
    let (z, result) = single_run(&x, &y, &Config::default()).unwrap();
    assert_eq!(z.diagonal(), vec![19, 50]);
    assert_eq!(result.dimension, 2);
    assert_eq!(result.crossover, Some(64));

    let standard = Config::default().with_mode(Mode::Standard);
    let (_, result) = single_run(&x, &y, &standard).unwrap();
    assert_eq!(result.crossover, None);
}

// ============================================================
// Crossover sweep
// ============================================================

#[test]
fn test_sweep_results_independent_of_crossover() {
    let (x, y) = synthetic_pair(48);
    let report = crossover_sweep(&x, &y).unwrap();

    assert!(report.consistent);
    assert_eq!(report.results.len(), crossover_values(48).len());
    assert_eq!(report.product, standard_multiply(&x, &y));

    for r in &report.results {
        let crossover = r.crossover.unwrap();
        let z = multiply(&x, &y, &strassen_config(crossover)).unwrap();
        assert_eq!(z, report.product, "crossover {}", crossover);
    }
}
