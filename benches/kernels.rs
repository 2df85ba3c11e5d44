use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use geonum::interp::{natural_cubic_spline, spline_eval, BSplineCurve, CardinalKind, CardinalSpline};
use geonum::linalg::{det, jacobi_eigen, solve, JacobiSettings};
use geonum::quad::{gauss_legendre, integrate, romberg, GaussLegendreSettings, RombergSettings};
use geonum::simplify::{ramer_douglas_peucker, visvalingam_whyatt};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn dominant(n: usize) -> Vec<Vec<f64>> {
    (0..n)
        .map(|i| {
            (0..n)
                .map(|j| ((i + 1) * (j + 1)) as f64 * 0.1 + if i == j { n as f64 } else { 0.0 })
                .collect()
        })
        .collect()
}

fn wiggle(n: usize) -> Vec<[f64; 2]> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 0.05;
            [x, x.sin() + 0.1 * (7.0 * x).cos()]
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Linear algebra
// ---------------------------------------------------------------------------

fn linalg(c: &mut Criterion) {
    let mut g = c.benchmark_group("linalg");

    for n in [4, 8, 16] {
        let a = dominant(n);
        let b: Vec<f64> = (0..n).map(|i| i as f64).collect();
        g.bench_function(format!("solve_{n}"), |bn| {
            bn.iter(|| solve(black_box(&a), black_box(&b)))
        });
        g.bench_function(format!("det_{n}"), |bn| bn.iter(|| det(black_box(&a))));
    }

    let sym = dominant(6);
    g.bench_function("jacobi_6", |bn| {
        bn.iter(|| jacobi_eigen(black_box(&sym), &JacobiSettings::default()))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Quadrature
// ---------------------------------------------------------------------------

fn quadrature(c: &mut Criterion) {
    let mut g = c.benchmark_group("quad");
    let f = |x: f64| (x * x).sin() * (-x).exp();

    g.bench_function("integrate", |b| b.iter(|| integrate(0.0, black_box(5.0), f)));
    g.bench_function("romberg", |b| {
        b.iter(|| romberg(0.0, black_box(5.0), f, &RombergSettings::default()))
    });
    g.bench_function("gauss_legendre_18", |b| {
        b.iter(|| gauss_legendre(0.0, black_box(5.0), f, &GaussLegendreSettings { n: 18 }))
    });

    g.finish();
}

// ---------------------------------------------------------------------------
// Curves
// ---------------------------------------------------------------------------

fn curves(c: &mut Criterion) {
    let mut g = c.benchmark_group("interp");
    let pts = wiggle(64);
    let (xs, ys): (Vec<f64>, Vec<f64>) = pts.iter().map(|p| (p[0], p[1])).unzip();

    g.bench_function("natural_cubic_spline_64", |b| {
        b.iter(|| {
            let (mut x, mut y) = (xs.clone(), ys.clone());
            natural_cubic_spline(&mut x, &mut y)
        })
    });

    let (mut x, mut y) = (xs.clone(), ys.clone());
    if let Ok(f2) = natural_cubic_spline(&mut x, &mut y) {
        g.bench_function("spline_eval", |b| {
            b.iter(|| spline_eval(black_box(1.234), &x, &y, &f2))
        });
    }

    if let Ok(spline) = CardinalSpline::catmull_rom(pts.clone(), CardinalKind::Centripetal) {
        g.bench_function("catmull_rom_eval", |b| b.iter(|| spline.eval(black_box(31.4))));
    }

    if let Ok(curve) = BSplineCurve::new(pts.clone(), 4) {
        g.bench_function("bspline_eval", |b| b.iter(|| curve.eval(black_box(31.4))));
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// Simplification
// ---------------------------------------------------------------------------

fn simplification(c: &mut Criterion) {
    let mut g = c.benchmark_group("simplify");
    let pts = wiggle(2000);

    g.bench_function("rdp_2000", |b| {
        b.iter(|| ramer_douglas_peucker(black_box(&pts), 0.01))
    });
    g.bench_function("vw_2000", |b| {
        b.iter(|| visvalingam_whyatt(black_box(&pts), 200))
    });

    g.finish();
}

criterion_group!(benches, linalg, quadrature, curves, simplification);
criterion_main!(benches);
