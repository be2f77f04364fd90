//! Criterion micro-benchmarks for the transport and divergence kernels.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lodestone_bench::{profile_2d, profile_3d};
use lodestone_engine::{TransportConfig, TransportStep};
use lodestone_kernels::{compute_emfs, flux_ct, max_divb, EmfSet};
use lodestone_mesh::{CellField, UniformGeometry};
use lodestone_test_utils::fill_random_field;

/// Benchmark: full transport step (split kernels) on a 256x256 block.
fn bench_transport_2d(c: &mut Criterion) {
    let (block, fluxes) = profile_2d(42);
    let step = TransportStep::default();

    c.bench_function("transport_2d_256", |b| {
        b.iter(|| {
            let mut f = fluxes.clone();
            let status = step.run(&block, &mut f);
            black_box((status, &f));
        });
    });
}

/// Benchmark: EMF phase alone on a 64^3 block.
fn bench_emf_3d(c: &mut Criterion) {
    let (block, fluxes) = profile_3d(42);
    let mut emf = EmfSet::new(&block);

    c.bench_function("emf_3d_64", |b| {
        b.iter(|| {
            let status = compute_emfs(&block, &fluxes, &mut emf);
            black_box((status, &emf));
        });
    });
}

/// Benchmark: split vs fused rewrite on a 64^3 block.
fn bench_rewrite_3d(c: &mut Criterion) {
    let (block, fluxes) = profile_3d(42);
    let mut emf = EmfSet::new(&block);
    compute_emfs(&block, &fluxes, &mut emf);

    c.bench_function("rewrite_3d_64_split", |b| {
        b.iter(|| {
            let mut f = fluxes.clone();
            black_box(flux_ct(&block, &emf, &mut f, false));
        });
    });
    c.bench_function("rewrite_3d_64_fused", |b| {
        b.iter(|| {
            let mut f = fluxes.clone();
            black_box(flux_ct(&block, &emf, &mut f, true));
        });
    });
}

/// Benchmark: fused full step on a 64^3 block.
fn bench_transport_3d(c: &mut Criterion) {
    let (block, fluxes) = profile_3d(42);
    let step = TransportStep::new(TransportConfig {
        fused_ct: true,
        ..TransportConfig::default()
    });

    c.bench_function("transport_3d_64_fused", |b| {
        b.iter(|| {
            let mut f = fluxes.clone();
            black_box(step.run(&block, &mut f));
        });
    });
}

/// Benchmark: corner-divergence reduction on a 64^3 block.
fn bench_max_divb_3d(c: &mut Criterion) {
    let (block, _) = profile_3d(42);
    let mut b_u = CellField::new(&block, 3);
    fill_random_field(&mut b_u, 7);
    let geom = UniformGeometry::unit();

    c.bench_function("max_divb_3d_64", |b| {
        b.iter(|| {
            black_box(max_divb(&block, &geom, &b_u));
        });
    });
}

criterion_group!(
    benches,
    bench_transport_2d,
    bench_emf_3d,
    bench_rewrite_3d,
    bench_transport_3d,
    bench_max_divb_3d
);
criterion_main!(benches);
