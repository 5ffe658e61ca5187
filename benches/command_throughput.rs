//! Throughput of the core mutation/report operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use relindex::Engine;
use std::hint::black_box;

fn seeded_engine(n: usize) -> Engine {
    let mut engine = Engine::new();
    for i in 0..n {
        engine.addent(format!("e{i}").as_bytes());
    }
    for i in 0..n {
        let from = format!("e{i}");
        let to = format!("e{}", (i + 1) % n);
        engine.addrel(from.as_bytes(), to.as_bytes(), b"rel");
    }
    engine
}

fn bench_addrel(c: &mut Criterion) {
    let mut group = c.benchmark_group("addrel");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || {
                    let mut engine = Engine::new();
                    for i in 0..n {
                        engine.addent(format!("e{i}").as_bytes());
                    }
                    engine
                },
                |mut engine| {
                    for i in 0..n {
                        let from = format!("e{i}");
                        let to = format!("e{}", (i + 1) % n);
                        black_box(engine.addrel(from.as_bytes(), to.as_bytes(), b"rel"));
                    }
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    for &n in &[100usize, 1_000, 10_000] {
        let engine = seeded_engine(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &engine, |b, engine| {
            b.iter(|| {
                let mut out = Vec::new();
                engine.report(&mut out).expect("writing to a Vec cannot fail");
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_delent_cascade(c: &mut Criterion) {
    let mut group = c.benchmark_group("delent");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || seeded_engine(n),
                |mut engine| {
                    black_box(engine.delent(b"e0"));
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_addrel, bench_report, bench_delent_cascade);
criterion_main!(benches);
