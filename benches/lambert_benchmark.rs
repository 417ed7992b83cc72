//! Benchmarks for the universal-variable Lambert solver.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use talos::constants::TAU;
use talos::{body, solve, solve_series, BodyId, LambertConfig};

fn quarter_transfer() -> ([f64; 3], [f64; 3], f64) {
    let mu = body(BodyId::Sun).mu;
    let r0 = [1.496e8, 0.0, 0.0];
    let r1 = [0.0, 1.496e8, 0.0];
    let dt = TAU / 4.0 * (1.496e8_f64.powi(3) / mu).sqrt();
    (r0, r1, dt)
}

fn bench_single_solve(c: &mut Criterion) {
    let (r0, r1, dt) = quarter_transfer();
    let config = LambertConfig::default();

    c.bench_function("solve_quarter_heliocentric", |b| {
        b.iter(|| solve(black_box(&r0), black_box(&r1), black_box(dt), &config).unwrap())
    });
}

fn bench_tof_sweep(c: &mut Criterion) {
    let (r0, r1, dt) = quarter_transfer();
    let config = LambertConfig::default();
    let tofs: Vec<f64> = (0..256).map(|k| dt * (0.7 + 0.003 * k as f64)).collect();

    c.bench_function("solve_series_256_tofs", |b| {
        b.iter(|| solve_series(black_box(&r0), black_box(&r1), black_box(&tofs), &config))
    });
}

criterion_group!(benches, bench_single_solve, bench_tof_sweep);
criterion_main!(benches);
