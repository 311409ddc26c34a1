//! Timing harness for locating the fastest crossover.
//!
//! Nothing here feeds back into the multiplication: the sweeps only run
//! the pipeline under different configurations and record how long each
//! run took. The engine never sees a clock.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::{Config, Mode};
use crate::error::{Result, StrassenError};
use crate::matrix::Matrix;

/// One timed configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub dimension: usize,
    /// `None` for standard-mode runs, which never recurse.
    pub crossover: Option<usize>,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Products and timings of one crossover sweep over a fixed input pair.
#[derive(Debug, Clone)]
pub struct SweepReport {
    /// Product from the first configuration.
    pub product: Matrix,
    pub results: Vec<BenchmarkResult>,
    /// Whether every configuration produced the same product.
    pub consistent: bool,
}

/// Runs `f` once and returns its output with the wall-clock time it took.
pub fn time_run<T, F>(f: F) -> (T, Duration)
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

/// Full pipeline (validate, pad, multiply, trim) under `config`, timed.
pub fn single_run(x: &Matrix, y: &Matrix, config: &Config) -> Result<(Matrix, BenchmarkResult)> {
    let (product, elapsed) = time_run(|| crate::multiply(x, y, config));
    let product = product?;
    let result = BenchmarkResult {
        dimension: x.dim(),
        crossover: match config.mode {
            Mode::Standard => None,
            Mode::Strassen => Some(config.crossover),
        },
        elapsed,
    };
    Ok((product, result))
}

/// Crossovers tried by a sweep over an `n × n` input: `2, 4, 8, …` up to
/// and including `n`.
///
/// ```
/// use strassen::benchmark::crossover_values;
///
/// assert_eq!(crossover_values(16), vec![2, 4, 8, 16]);
/// assert_eq!(crossover_values(12), vec![2, 4, 8]);
/// assert!(crossover_values(1).is_empty());
/// ```
pub fn crossover_values(n: usize) -> Vec<usize> {
    std::iter::successors(Some(2usize), |c| c.checked_mul(2))
        .take_while(|&c| c <= n)
        .collect()
}

/// Dimensions visited by [`dimension_sweep`]: `min, 2·min, 4·min, …` while
/// not above `max`. `min` must be at least 2, the smallest dimension with a
/// crossover to sweep.
pub fn dimension_values(min: usize, max: usize) -> Result<Vec<usize>> {
    if min < 2 {
        return Err(StrassenError::InvalidParameter(format!(
            "a crossover sweep needs dimension >= 2, got minimum {}",
            min
        )));
    }
    if min > max {
        return Err(StrassenError::InvalidParameter(format!(
            "minimum sweep dimension {} exceeds maximum {}",
            min, max
        )));
    }
    Ok(std::iter::successors(Some(min), |d| d.checked_mul(2))
        .take_while(|&d| d <= max)
        .collect())
}

/// [`crossover_sweep_with`] without a per-result callback.
pub fn crossover_sweep(x: &Matrix, y: &Matrix) -> Result<SweepReport> {
    crossover_sweep_with(x, y, |_| {})
}

/// Runs the Strassen pipeline on `x · y` once per crossover in
/// [`crossover_values`], calling `observe` after each run.
///
/// Padding happens inside every timed run, so each measurement covers the
/// whole pipeline.
pub fn crossover_sweep_with<F>(x: &Matrix, y: &Matrix, mut observe: F) -> Result<SweepReport>
where
    F: FnMut(&BenchmarkResult),
{
    let n = x.dim();
    let crossovers = crossover_values(n);
    if crossovers.is_empty() {
        return Err(StrassenError::InvalidParameter(format!(
            "a crossover sweep needs dimension >= 2, got {}",
            n
        )));
    }

    let mut product: Option<Matrix> = None;
    let mut results = Vec::with_capacity(crossovers.len());
    let mut consistent = true;

    for crossover in crossovers {
        debug!(dimension = n, crossover, "starting sweep run");
        let config = Config::default()
            .with_mode(Mode::Strassen)
            .with_crossover(crossover);
        let (z, result) = single_run(x, y, &config)?;
        info!(
            dimension = n,
            crossover,
            elapsed_ms = result.elapsed_millis() as u64,
            "sweep run finished"
        );

        if let Some(first) = &product {
            if *first != z {
                warn!(dimension = n, crossover, "product differs from first sweep run");
                consistent = false;
            }
        } else {
            product = Some(z);
        }

        observe(&result);
        results.push(result);
    }

    Ok(SweepReport {
        // crossovers was non-empty, so the loop stored a product
        product: product.unwrap_or_else(|| Matrix::zeros(n)),
        results,
        consistent,
    })
}

/// Crossover sweep at every dimension from [`dimension_values`], with
/// fresh input from `generate` at each one.
///
/// Products are dropped after each dimension; only the timings are kept.
pub fn dimension_sweep<G, F>(
    min: usize,
    max: usize,
    mut generate: G,
    mut observe: F,
) -> Result<Vec<BenchmarkResult>>
where
    G: FnMut(usize) -> (Matrix, Matrix),
    F: FnMut(&BenchmarkResult),
{
    let mut all = Vec::new();
    for dimension in dimension_values(min, max)? {
        debug!(dimension, "generating sweep input");
        let (x, y) = generate(dimension);
        let report = crossover_sweep_with(&x, &y, &mut observe)?;
        if !report.consistent {
            warn!(dimension, "crossover sweep produced differing products");
        }
        all.extend(report.results);
    }
    Ok(all)
}

/// Fastest result for each dimension, in the order dimensions first appear.
pub fn best_crossover(results: &[BenchmarkResult]) -> Vec<BenchmarkResult> {
    let mut best: Vec<BenchmarkResult> = Vec::new();
    for r in results {
        match best.iter_mut().find(|b| b.dimension == r.dimension) {
            Some(b) if r.elapsed < b.elapsed => *b = *r,
            Some(_) => {}
            None => best.push(*r),
        }
    }
    best
}
