//! Benchmarks for multiplication, long division and root finding.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use realroot::poly::Polynomial;
use realroot::solve::find_all_real_zeros;

/// Generates a dense polynomial with small integer coefficients.
fn sample_poly(degree: usize) -> Polynomial {
    let coeffs: Vec<f64> = (0..=degree)
        .map(|i| f64::from(u8::try_from(i % 100).unwrap_or(0)) - 50.0)
        .map(|c| if c == 0.0 { 1.0 } else { c })
        .collect();
    Polynomial::from_coefficients(&coeffs)
}

/// `(x - 1)(x - 2)...(x - n)`.
fn from_roots(n: u32) -> Polynomial {
    (1..=n)
        .map(|r| Polynomial::from_coefficients(&[1.0, -f64::from(r)]))
        .fold(Polynomial::constant(1.0), |acc, f| &acc * &f)
}

fn bench_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_mul");

    for size in [8, 32, 128, 256] {
        let p = sample_poly(size);
        let q = sample_poly(size);

        group.bench_with_input(BenchmarkId::new("schoolbook", size), &size, |b, _| {
            b.iter(|| black_box(&p * &q));
        });
    }

    group.finish();
}

fn bench_long_division(c: &mut Criterion) {
    let mut group = c.benchmark_group("poly_long_div");

    for size in [8, 32, 128] {
        let divisor = sample_poly(size / 4 + 1);
        let numerator = &sample_poly(size) * &divisor;

        group.bench_with_input(BenchmarkId::new("exact", size), &size, |b, _| {
            b.iter(|| black_box(numerator.long_div(&divisor)));
        });
    }

    group.finish();
}

fn bench_root_finding(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_all_real_zeros");

    for degree in [3, 5, 8] {
        let p = from_roots(degree);

        group.bench_with_input(BenchmarkId::new("distinct", degree), &degree, |b, _| {
            b.iter(|| black_box(find_all_real_zeros(&p)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_multiplication,
    bench_long_division,
    bench_root_finding
);
criterion_main!(benches);
