use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use strassen::input::synthetic_pair;
use strassen::{Config, Mode, multiply};

fn bench_standard_vs_strassen(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_vs_strassen");
    group.sample_size(10);

    for size in [64, 128, 256] {
        let (x, y) = synthetic_pair(size);

        let standard = Config::default().with_mode(Mode::Standard);
        group.bench_with_input(BenchmarkId::new("standard", size), &size, |b, _| {
            b.iter(|| black_box(multiply(black_box(&x), black_box(&y), &standard).unwrap()))
        });

        let strassen = Config::default();
        group.bench_with_input(BenchmarkId::new("strassen_64", size), &size, |b, _| {
            b.iter(|| black_box(multiply(black_box(&x), black_box(&y), &strassen).unwrap()))
        });
    }
    group.finish();
}

fn bench_crossover(c: &mut Criterion) {
    let size = 256;
    let (x, y) = synthetic_pair(size);

    let mut group = c.benchmark_group("crossover_256");
    group.sample_size(10);
    for crossover in [8, 16, 32, 64, 128] {
        let cfg = Config::default().with_crossover(crossover);
        group.bench_with_input(BenchmarkId::from_parameter(crossover), &cfg, |b, cfg| {
            b.iter(|| black_box(multiply(black_box(&x), black_box(&y), cfg).unwrap()))
        });
    }
    group.finish();
}

fn bench_non_power_of_two(c: &mut Criterion) {
    // 200 pads to 256
    let (x, y) = synthetic_pair(200);
    let cfg = Config::default();
    c.bench_function("strassen_200_padded", |b| {
        b.iter(|| black_box(multiply(black_box(&x), black_box(&y), &cfg).unwrap()))
    });
}

criterion_group!(
    benches,
    bench_standard_vs_strassen,
    bench_crossover,
    bench_non_power_of_two
);
criterion_main!(benches);
