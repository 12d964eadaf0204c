//! Cycle diagnostics benchmarks: the scheduler's early exit against full
//! component enumeration.
#![allow(clippy::expect_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use levelsort_bench::{GeneratorConfig, SizeTier, generate_layered};
use levelsort_core::{find_cycles, is_acyclic, level};

fn cyclic(tier: SizeTier) -> GeneratorConfig {
    GeneratorConfig {
        inject_cycles: 5,
        ..tier.config(42)
    }
}

fn bench_cycle_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle_detection");

    for (name, tier) in [
        ("S", SizeTier::Small),
        ("M", SizeTier::Medium),
        ("L", SizeTier::Large),
    ] {
        let acyclic = generate_layered(&tier.config(42));
        let cycles = generate_layered(&cyclic(tier));

        group.bench_function(BenchmarkId::new("level_witness", name), |b| {
            b.iter(|| level(black_box(&cycles.graph)).expect_err("cyclic"));
        });

        group.bench_function(BenchmarkId::new("find_cycles", name), |b| {
            b.iter(|| find_cycles(black_box(&cycles.graph)));
        });

        group.bench_function(BenchmarkId::new("is_acyclic_clean", name), |b| {
            b.iter(|| is_acyclic(black_box(&acyclic.graph)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_cycle_detection);
criterion_main!(benches);
