//! Criterion benchmarks for full driver runs.

use std::hint::black_box;

use artbench_bench::{reference_profile, reference_workload, stress_profile};
use artbench_engine::Harness;
use artbench_hooks::HookKind;
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_reference_10k(c: &mut Criterion) {
    let mut harness = Harness::new(reference_profile(42)).unwrap();
    let mut hook = reference_workload();

    c.bench_function("run_10k_simple_state", |b| {
        b.iter(|| {
            let report = harness.run(&mut hook);
            black_box(report.sum());
        });
    });
}

fn bench_each_kind_10k(c: &mut Criterion) {
    let mut group = c.benchmark_group("run_10k_by_hook");
    for kind in HookKind::ALL {
        let mut harness = Harness::new(reference_profile(42)).unwrap();
        let mut hook = kind.build();
        group.bench_function(kind.name(), |b| {
            b.iter(|| {
                let report = harness.run(&mut hook);
                black_box(report.sum());
            });
        });
    }
    group.finish();
}

fn bench_stress_1m(c: &mut Criterion) {
    let mut harness = Harness::new(stress_profile(42)).unwrap();
    let mut hook = reference_workload();

    let mut group = c.benchmark_group("stress");
    group.sample_size(10);
    group.bench_function("run_1m_simple_state", |b| {
        b.iter(|| {
            let report = harness.run(&mut hook);
            black_box(report.sum());
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_reference_10k,
    bench_each_kind_10k,
    bench_stress_1m
);
criterion_main!(benches);
