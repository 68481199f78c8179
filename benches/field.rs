use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use sss_gf256::{Gf256, Polynomial};

fn bench_multiply(c: &mut Criterion) {
    c.bench_function("gf256 multiply all pairs", |b| {
        b.iter(|| {
            let mut acc = Gf256::ZERO;
            for x in 0..=255u8 {
                for y in 0..=255u8 {
                    acc += black_box(Gf256::new(x)) * black_box(Gf256::new(y));
                }
            }
            acc
        })
    });
}

fn bench_interpolate(c: &mut Criterion) {
    let poly = Polynomial::from_bytes(&(0..16u8).collect::<Vec<_>>());
    let points: Vec<(Gf256, Gf256)> = (1..=16u8)
        .map(|x| (Gf256::new(x), poly.evaluate(Gf256::new(x))))
        .collect();

    c.bench_function("interpolate 16 points", |b| {
        b.iter(|| Polynomial::interpolate(black_box(&points), Gf256::ZERO).unwrap())
    });
}

criterion_group!(benches, bench_multiply, bench_interpolate);
criterion_main!(benches);
