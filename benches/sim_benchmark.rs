//! Benchmarks for the simulator and the search operators.

#![allow(missing_docs)] // Benchmark macros generate undocumented functions

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use lumen::{execute, mutate, search, BitRng, Program, SearchConfig};

fn bench_execute(c: &mut Criterion) {
    let program: Program = "1L^LFR21R2__FFF^L^^_^^FF*L^L"
        .parse()
        .expect("fixture decodes");

    c.bench_function("execute_fixture", |b| {
        b.iter(|| black_box(execute(black_box(&program))));
    });
}

fn bench_random_fill(c: &mut Criterion) {
    let mut rng = BitRng::new();

    c.bench_function("random_fill", |b| {
        b.iter(|| black_box(Program::random(&mut rng)));
    });
}

fn bench_mutate(c: &mut Criterion) {
    let mut rng = BitRng::new();
    let mut program = Program::random(&mut rng);

    c.bench_function("mutate", |b| {
        b.iter(|| mutate(&mut program, &mut rng));
    });
}

fn bench_search(c: &mut Criterion) {
    c.bench_function("search_small_budgets", |b| {
        b.iter(|| {
            let config = SearchConfig {
                restart_budget: 20,
                mutation_budget: 10,
            };
            let mut rng = BitRng::new();
            black_box(search(config, &mut rng, |_, _| {}))
        });
    });
}

criterion_group!(
    benches,
    bench_execute,
    bench_random_fill,
    bench_mutate,
    bench_search
);
criterion_main!(benches);
