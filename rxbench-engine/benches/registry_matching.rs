//! Criterion view of the registry: repeated samples per pattern and engine
//!
//! The `rxbench` binary takes a single sample per pattern; this bench is for
//! engine work where variance matters.
//!
//! Run with: cargo bench -p rxbench-engine --bench registry_matching

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rxbench_corpus::{CorpusBuilder, DEFAULT_SEED};
use rxbench_engine::adapters::{PikeVmEngine, RegexEngine};
use rxbench_engine::{EngineAdapter, PATTERN_REGISTRY};
use std::hint::black_box;
use std::time::Duration;

fn bench_engine(c: &mut Criterion, engine: &dyn EngineAdapter, corpus_bytes: usize) {
    let corpus = CorpusBuilder::seeded(DEFAULT_SEED).build(corpus_bytes);
    let haystack = corpus.as_bytes();

    let mut group = c.benchmark_group(format!("find_all/{}", engine.name()));
    group.throughput(Throughput::Bytes(haystack.len() as u64));
    group.measurement_time(Duration::from_secs(3));

    for entry in PATTERN_REGISTRY {
        let compiled = engine
            .compile(entry.source)
            .expect("registry patterns compile");
        group.bench_with_input(
            BenchmarkId::from_parameter(entry.name),
            haystack,
            |b, haystack| {
                b.iter(|| black_box(compiled.find_all_non_overlapping(black_box(haystack)).len()))
            },
        );
    }

    group.finish();
}

fn bench_regex(c: &mut Criterion) {
    bench_engine(c, &RegexEngine, 1024 * 1024);
}

fn bench_pikevm(c: &mut Criterion) {
    bench_engine(c, &PikeVmEngine, 64 * 1024);
}

fn bench_compile(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile");
    let engines: [&dyn EngineAdapter; 2] = [&RegexEngine, &PikeVmEngine];

    for engine in engines {
        for entry in PATTERN_REGISTRY {
            group.bench_with_input(
                BenchmarkId::new(engine.name(), entry.name),
                entry.source,
                |b, source| b.iter(|| black_box(engine.compile(black_box(source)).is_ok())),
            );
        }
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench_regex, bench_pikevm, bench_compile
}
criterion_main!(benches);
