use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nurbs_poly::{curve::knots::linspace, Poly64, RationalCurve, RootStrategy};

criterion_main!(micro_benches, realistic_benches);
criterion_group!(micro_benches, eigenvalue_roots, laguerre_roots, eval);

fn test_poly(n: usize) -> Poly64 {
    Poly64::from_roots(&linspace(-1.0, 1.0, n))
}

pub fn eigenvalue_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("eigenvalue roots");
    for n in [4, 8, 16, 32] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).roots(RootStrategy::Eigenvalue)))
        });
    }
    group.finish();
}

pub fn laguerre_roots(c: &mut Criterion) {
    let mut group = c.benchmark_group("laguerre roots");
    for n in [4, 8, 16, 32] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| black_box(black_box(&p).roots(RootStrategy::Laguerre)))
        });
    }
    group.finish();
}

pub fn eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("eval");
    for n in [4, 16, 64] {
        let p = test_poly(n);
        group.bench_function(BenchmarkId::new("horner", n), |b| {
            b.iter(|| black_box(black_box(&p).eval(black_box(0.3))))
        });
        group.bench_function(BenchmarkId::new("compensated", n), |b| {
            b.iter(|| black_box(black_box(&p).eval_compensated(black_box(0.3))))
        });
    }
    group.finish();
}

criterion_group!(realistic_benches, curve_construction, curve_area);

fn wave(n: usize) -> (Vec<f64>, Vec<[f64; 2]>) {
    let points = linspace(0.0f64, 10.0, n)
        .into_iter()
        .map(|x| [x, x.sin()])
        .collect();
    (linspace(1.0, 2.0, n), points)
}

pub fn curve_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve construction");
    for n in [8, 32, 128] {
        let (weights, points) = wave(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| {
                black_box(RationalCurve::with_uniform_knots(
                    3,
                    weights.clone(),
                    points.clone(),
                ))
            })
        });
    }
    group.finish();
}

pub fn curve_area(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve area");
    for n in [8, 32, 128] {
        let (weights, points) = wave(n);
        let curve = RationalCurve::with_uniform_knots(3, weights, points).unwrap();
        group.bench_function(BenchmarkId::new("analytic", n), |b| {
            b.iter(|| black_box(curve.area_integral(0.0, 1.0, RootStrategy::default())))
        });
        group.bench_function(BenchmarkId::new("cubed", n), |b| {
            b.iter(|| black_box(curve.area_integral_cubed(0.0, 1.0, RootStrategy::default())))
        });
        group.bench_function(BenchmarkId::new("gauss-legendre", n), |b| {
            b.iter(|| black_box(curve.numerical_area_integral(0.0, 1.0, 8)))
        });
    }
    group.finish();
}
