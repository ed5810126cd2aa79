//! Criterion benchmarks for the wire codec.

use alsvid_types::{BitString, Counts};
use alsvid_wire::{pack_counts, pack_gradients, unpack_counts, unpack_gradients};
use criterion::{criterion_group, criterion_main, Criterion};
use ndarray::Array2;
use std::hint::black_box;

/// A 16-bit histogram with 1024 distinct outcomes.
fn sample_counts() -> Counts {
    let mut counts = Counts::new(16);
    for i in 0..1024u64 {
        let key = BitString::from_basis_index(i * 37 % 65_536, 16).unwrap();
        counts.add(key, (i % 97 + 1) as u32).unwrap();
    }
    counts
}

fn bench_counts_codec(c: &mut Criterion) {
    let counts = sample_counts();
    let buf = pack_counts(&counts);

    c.bench_function("pack_counts/1024x16bit", |b| {
        b.iter(|| pack_counts(black_box(&counts)))
    });
    c.bench_function("unpack_counts/1024x16bit", |b| {
        b.iter(|| unpack_counts(black_box(&buf)).unwrap())
    });
}

fn bench_gradient_codec(c: &mut Criterion) {
    let gradients =
        Array2::from_shape_fn((32, 256), |(i, j)| (i as f64 - j as f64) * 1e-3);
    let buf = pack_gradients(&gradients);

    c.bench_function("pack_gradients/32x256", |b| {
        b.iter(|| pack_gradients(black_box(&gradients)))
    });
    c.bench_function("unpack_gradients/32x256", |b| {
        b.iter(|| unpack_gradients(black_box(&buf)).unwrap())
    });
}

criterion_group!(benches, bench_counts_codec, bench_gradient_codec);
criterion_main!(benches);
