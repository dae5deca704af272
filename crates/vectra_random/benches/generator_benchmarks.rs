//! Criterion benchmarks for the random sampling surface.
//!
//! Measures raw draw throughput plus the cost of range mapping, vector
//! composition, and direction sampling relative to the underlying step.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vectra_random::Random;

fn bench_scalar_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_draws");

    let mut rng = Random::new(0x6E62_4EB7).unwrap();
    group.bench_function("next_uint", |b| b.iter(|| black_box(rng.next_uint())));
    group.bench_function("next_float", |b| b.iter(|| black_box(rng.next_float())));
    group.bench_function("next_double", |b| b.iter(|| black_box(rng.next_double())));
    group.bench_function("next_int_max_17", |b| {
        b.iter(|| black_box(rng.next_int_max(black_box(17)).unwrap()))
    });
    group.bench_function("next_int_range_full_width", |b| {
        b.iter(|| black_box(rng.next_int_range(i32::MIN, i32::MAX).unwrap()))
    });

    group.finish();
}

fn bench_vector_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_draws");

    let mut rng = Random::new(0x6E62_4EB7).unwrap();
    group.bench_function("next_float2", |b| b.iter(|| black_box(rng.next_float2())));
    group.bench_function("next_float4", |b| b.iter(|| black_box(rng.next_float4())));
    group.bench_function("next_int4_max", |b| {
        b.iter(|| black_box(rng.next_int4_max(black_box(1000)).unwrap()))
    });

    group.finish();
}

fn bench_direction_draws(c: &mut Criterion) {
    let mut group = c.benchmark_group("direction_draws");

    let mut rng = Random::new(0x6E62_4EB7).unwrap();
    group.bench_function("next_float2_direction", |b| {
        b.iter(|| black_box(rng.next_float2_direction()))
    });
    group.bench_function("next_float3_direction", |b| {
        b.iter(|| black_box(rng.next_float3_direction()))
    });
    group.bench_function("next_double3_direction", |b| {
        b.iter(|| black_box(rng.next_double3_direction()))
    });

    group.finish();
}

fn bench_bulk_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_fill");

    let mut rng = Random::new(0x6E62_4EB7).unwrap();
    let mut buffer = vec![0.0f32; 4096];
    group.bench_function("fill_4096_floats", |b| {
        b.iter(|| {
            for slot in buffer.iter_mut() {
                *slot = rng.next_float();
            }
            black_box(&buffer);
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalar_draws,
    bench_vector_draws,
    bench_direction_draws,
    bench_bulk_fill
);
criterion_main!(benches);
