use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use isclose::{Closeness, Method, Tolerance};

fn bench_kind<T>(c: &mut Criterion, name: &str, a: T, b: T, rel_tol: T::Real)
where
    T: Closeness,
{
    let mut group = c.benchmark_group(name);
    for &method in Method::ALL.iter() {
        let tolerance = Tolerance::new().rel_tol(rel_tol.clone()).method(method);
        group.bench_with_input(BenchmarkId::new("is_close", method), &(&a, &b), |bencher, (a, b)| {
            bencher.iter(|| tolerance.is_close(black_box(*a), black_box(*b)))
        });
    }
    group.finish();
}

fn floats(c: &mut Criterion) {
    bench_kind(c, "f64", 1e8_f64, 1e8 + 1., 1e-8);
    bench_kind(c, "f32", 1e4_f32, 1e4 + 1., 1e-4);
}

fn integers(c: &mut Criterion) {
    bench_kind(c, "i64", 100_000_001_i64, 100_000_000, 1e-8);
}

#[cfg(feature = "complex")]
fn complex(c: &mut Criterion) {
    use num_complex::Complex64;

    bench_kind(
        c,
        "Complex64",
        Complex64::new(1., 1.),
        Complex64::new(1.000000000001, 1.),
        1e-12,
    );
}

#[cfg(feature = "decimal")]
fn decimal(c: &mut Criterion) {
    use bigdecimal::BigDecimal;
    use std::str::FromStr;

    let dec = |s: &str| BigDecimal::from_str(s).unwrap();
    bench_kind(c, "BigDecimal", dec("1.00000001e-100"), dec("1.0e-100"), dec("1e-8"));
}

#[cfg(feature = "rational")]
fn rational(c: &mut Criterion) {
    use num_rational::{BigRational, Rational64};

    bench_kind(
        c,
        "Rational64",
        Rational64::new(100_000_001, 100_000_000),
        Rational64::from_integer(1),
        Rational64::new(1, 100_000_000),
    );
    bench_kind(
        c,
        "BigRational",
        BigRational::new(100_000_001.into(), 100_000_000.into()),
        BigRational::from_integer(1.into()),
        BigRational::new(1.into(), 100_000_000.into()),
    );
}

criterion_group!(benches, floats, integers);
#[cfg(feature = "complex")]
criterion_group!(complex_benches, complex);
#[cfg(feature = "decimal")]
criterion_group!(decimal_benches, decimal);
#[cfg(feature = "rational")]
criterion_group!(rational_benches, rational);

#[cfg(all(feature = "complex", feature = "decimal", feature = "rational"))]
criterion_main!(benches, complex_benches, decimal_benches, rational_benches);
#[cfg(not(all(feature = "complex", feature = "decimal", feature = "rational")))]
criterion_main!(benches);
