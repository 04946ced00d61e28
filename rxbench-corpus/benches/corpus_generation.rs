//! Throughput of corpus generation
//!
//! Run with: cargo bench -p rxbench-corpus --bench corpus_generation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rxbench_corpus::{CorpusBuilder, LineSynthesizer, Shape, DEFAULT_SEED};
use std::hint::black_box;
use std::time::Duration;

const SIZES: &[usize] = &[64 * 1024, 1024 * 1024, 6 * 1024 * 1024];

fn configure_criterion() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_secs(1))
        .measurement_time(Duration::from_secs(3))
        .sample_size(20)
        .noise_threshold(0.05)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("corpus_build");

    for &size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}k", size / 1024)),
            &size,
            |b, &size| {
                b.iter(|| {
                    let corpus = CorpusBuilder::seeded(DEFAULT_SEED).build(black_box(size));
                    black_box(corpus.len())
                });
            },
        );
    }

    group.finish();
}

fn bench_render_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_shape");

    for shape in Shape::ALL {
        group.bench_function(BenchmarkId::from_parameter(shape), |b| {
            let mut synth = LineSynthesizer::seeded(DEFAULT_SEED);
            let mut line = String::with_capacity(256);
            b.iter(|| {
                line.clear();
                synth.render_into(black_box(shape), &mut line);
                black_box(line.len())
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = configure_criterion();
    targets = bench_build, bench_render_shapes
}
criterion_main!(benches);
