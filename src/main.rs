//! Command-line runner: multiply two matrices from a file, sweep crossovers
//! on synthetic data, or write a random input file.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use strassen::benchmark::{self, BenchmarkResult};
use strassen::config::check_dimension;
use strassen::input::{self, RandomKind};
use strassen::{Config, DEFAULT_CROSSOVER, Matrix, Mode};

#[derive(Parser, Debug)]
#[command(name = "strassen")]
#[command(about = "Strassen matrix multiplication and crossover benchmarking")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Multiply two matrices read from a file
    ///
    /// The file holds one integer per line: X row by row, then Y.
    Run {
        /// Dimension of both matrices
        dimension: usize,

        /// Input file
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = ModeArg::Strassen)]
        mode: ModeArg,

        /// Size at or below which the recursion switches to the triple loop
        #[arg(short, long, default_value_t = DEFAULT_CROSSOVER, value_name = "N")]
        crossover: usize,

        /// Print the inputs, the full product and the timing instead of
        /// just the diagonal
        #[arg(short, long)]
        verbose: bool,
    },

    /// Time every crossover on synthetic data, for doubling dimensions
    Sweep {
        #[arg(long, default_value_t = 128, value_name = "N")]
        min_dimension: usize,

        #[arg(long, default_value_t = 1024, value_name = "N")]
        max_dimension: usize,

        /// Also time the standard algorithm at each dimension
        #[arg(long)]
        baseline: bool,
    },

    /// Write 2·n² random integers, one per line, for `run`
    Gen {
        kind: KindArg,

        dimension: usize,

        #[arg(short, long, default_value = "random_matrices.txt", value_name = "PATH")]
        output: PathBuf,

        /// Seed for reproducible files
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ModeArg {
    Standard,
    Strassen,
}

impl From<ModeArg> for Mode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Standard => Mode::Standard,
            ModeArg::Strassen => Mode::Strassen,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum KindArg {
    /// 0 or 1
    Binary,
    /// 0 to 2
    Ternary,
    /// -1 to 1
    Signed,
}

impl From<KindArg> for RandomKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Binary => RandomKind::Binary,
            KindArg::Ternary => RandomKind::Ternary,
            KindArg::Signed => RandomKind::Signed,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let verbose = matches!(cli.command, Command::Run { verbose: true, .. });
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), verbose))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Run {
            dimension,
            input,
            mode,
            crossover,
            verbose,
        } => {
            let config = Config::default()
                .with_mode(mode.into())
                .with_crossover(crossover)
                .with_verbose(verbose);
            run(dimension, &input, &config)
        }
        Command::Sweep {
            min_dimension,
            max_dimension,
            baseline,
        } => sweep(min_dimension, max_dimension, baseline),
        Command::Gen {
            kind,
            dimension,
            output,
            seed,
        } => generate(kind.into(), dimension, &output, seed),
    }
}

/// `RUST_LOG` when it is set and parses, otherwise `info` (`debug` with
/// `--verbose`).
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

fn run(dimension: usize, path: &Path, config: &Config) -> Result<()> {
    check_dimension(dimension)?;
    config.validate()?;

    let (x, y) = input::read_matrices(path, dimension)
        .with_context(|| format!("reading {}x{} matrices", dimension, dimension))?;

    if config.verbose {
        println!("\n##### Reading Matrices X and Y from file ######\n");
        print_matrix(&x, "X");
        print_matrix(&y, "Y");
    }

    let (z, result) = benchmark::single_run(&x, &y, config)?;

    if config.verbose {
        let label = match config.mode {
            Mode::Standard => "Standard Product",
            Mode::Strassen => "Strassen Product",
        };
        print_times(label, &result);
        print_matrix(&z, "Z");
    } else {
        for v in z.diagonal() {
            println!("{}", v);
        }
    }
    Ok(())
}

fn sweep(min_dimension: usize, max_dimension: usize, baseline: bool) -> Result<()> {
    println!("=== Strassen Crossover Sweep ===\n");

    let results = benchmark::dimension_sweep(
        min_dimension,
        max_dimension,
        input::synthetic_pair,
        |r| print_times("Strassen Product", r),
    )?;

    let mut standard_times = Vec::new();
    if baseline {
        for dimension in benchmark::dimension_values(min_dimension, max_dimension)? {
            let (x, y) = input::synthetic_pair(dimension);
            let config = Config::default().with_mode(Mode::Standard);
            let (_, r) = benchmark::single_run(&x, &y, &config)?;
            print_times("Standard Product", &r);
            standard_times.push((dimension, r.elapsed));
        }
    }

    print_summary_table(&benchmark::best_crossover(&results), &standard_times);
    Ok(())
}

fn generate(kind: RandomKind, dimension: usize, output: &Path, seed: Option<u64>) -> Result<()> {
    check_dimension(dimension)?;

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };
    let values = input::generate_random_values(kind, dimension, &mut rng);
    input::write_values(output, &values)
        .with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(
        "wrote {} values for two {}x{} matrices to {}",
        values.len(),
        dimension,
        dimension,
        output.display()
    );
    Ok(())
}

fn print_matrix(m: &Matrix, name: &str) {
    println!("Printing matrix {}", name);
    println!("{}", m);
}

fn print_times(label: &str, r: &BenchmarkResult) {
    let ms = r.elapsed_millis();
    match r.crossover {
        Some(crossover) => println!("{} Crossover = {}", label, crossover),
        None => println!("{}", label),
    }
    println!(
        "Finished Matrix Multiplication of {} dimensions in {} milliseconds, or {:.2} minutes",
        r.dimension,
        ms,
        ms as f64 / 60.0 / 1000.0
    );
    println!();
}

fn print_summary_table(best: &[BenchmarkResult], standard: &[(usize, Duration)]) {
    println!("\n{}", "=".repeat(70));
    println!("SUMMARY");
    println!("{}", "=".repeat(70));

    println!(
        "\n{:<12} {:>16} {:>14} {:>14} {:>10}",
        "Dimension", "Best crossover", "Strassen", "Standard", "Speedup"
    );
    println!("{}", "-".repeat(70));

    for r in best {
        let standard_time = standard
            .iter()
            .find(|(d, _)| *d == r.dimension)
            .map(|(_, t)| *t);
        let crossover = r.crossover.map_or_else(|| "-".to_string(), |c| c.to_string());
        let strassen_ms = r.elapsed.as_secs_f64() * 1000.0;

        match standard_time {
            Some(t) => {
                let standard_ms = t.as_secs_f64() * 1000.0;
                println!(
                    "{:<12} {:>16} {:>11.2} ms {:>11.2} ms {:>9.2}×",
                    r.dimension,
                    crossover,
                    strassen_ms,
                    standard_ms,
                    standard_ms / strassen_ms.max(f64::EPSILON)
                );
            }
            None => println!(
                "{:<12} {:>16} {:>11.2} ms {:>14} {:>10}",
                r.dimension, crossover, strassen_ms, "-", "-"
            ),
        }
    }

    println!("{}", "=".repeat(70));
    println!("\nSpeedup is standard time over the best Strassen time. Higher is better.\n");
}
