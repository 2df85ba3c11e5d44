use super::*;

use crate::traits::{ParametricCurve, PlanePoint};
use std::cell::Cell;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

/// A point the test can move after a curve has been built over it.
struct Movable {
    x: Cell<f64>,
    y: Cell<f64>,
}

impl Movable {
    fn new(x: f64, y: f64) -> Self {
        Self {
            x: Cell::new(x),
            y: Cell::new(y),
        }
    }
}

impl PlanePoint for Movable {
    fn x(&self) -> f64 {
        self.x.get()
    }

    fn y(&self) -> f64 {
        self.y.get()
    }
}

// ═══════════════════════════════════════════════════════════════════
// Term strings
// ═══════════════════════════════════════════════════════════════════

#[test]
fn term_formatting() {
    assert_eq!(polynomial_term(&[0.0, 12345.0], 1, "t", 3), "(1.23e+4)*t + (0.00)");
    assert_eq!(polynomial_term(&[1e-7], 0, "x", 3), "(1.00e-7)");
    // missing coefficients print as zero
    assert_eq!(polynomial_term(&[5.0], 2, "x", 1), "(0)*x^2 + (0)*x + (5)");
}

// ═══════════════════════════════════════════════════════════════════
// Neville and Lagrange
// ═══════════════════════════════════════════════════════════════════

#[test]
fn neville_reproduces_nodes_and_parabola() {
    let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0], [3.0, 9.0]];
    let curve = NevilleCurve::new(pts.clone()).unwrap();
    for (i, p) in pts.iter().enumerate() {
        assert_eq!(curve.eval(i as f64), *p);
    }
    let [x, y] = curve.eval(2.5);
    assert_near(x, 2.5, 1e-12, "x");
    assert_near(y, 6.25, 1e-12, "y");
    assert_eq!(curve.domain(), (0.0, 3.0));
    assert!(curve.eval(f64::NAN)[0].is_nan());
}

#[test]
fn neville_single_point_and_empty() {
    let curve = NevilleCurve::new(vec![(2.0, 3.0)]).unwrap();
    assert_eq!(curve.eval(0.0), [2.0, 3.0]);
    let [x, y] = curve.eval(0.7);
    assert_near(x, 2.0, 1e-15, "x");
    assert_near(y, 3.0, 1e-15, "y");
    assert_eq!(curve.domain(), (0.0, 0.0));
    assert!(NevilleCurve::<[f64; 2]>::new(vec![]).is_err());
}

#[test]
fn neville_follows_moved_points() {
    let a = Movable::new(0.0, 0.0);
    let b = Movable::new(1.0, 1.0);
    let mut curve = NevilleCurve::new(vec![&a, &b]).unwrap();
    assert_eq!(curve.eval(0.5), [0.5, 0.5]);
    b.y.set(3.0);
    // not yet re-read
    assert_eq!(curve.eval(0.5), [0.5, 0.5]);
    curve.update();
    assert_eq!(curve.eval(0.5), [0.5, 1.5]);
}

#[test]
fn lagrange_cubic() {
    let f = |x: f64| 2.0 * x * x * x - x + 4.0;
    let pts: Vec<[f64; 2]> = [-1.0, 0.5, 2.0, 3.0].iter().map(|&x| [x, f(x)]).collect();
    let p = LagrangePolynomial::new(pts).unwrap();
    for x in [-2.0, 0.0, 1.3, 4.0] {
        assert_near(p.eval(x), f(x), 1e-10, "eval");
    }
    assert_eq!(p.eval(0.5), f(0.5));
    assert_eq!(p.domain(), (-1.0, 3.0));

    let c = p.coefficients();
    for (got, want) in c.iter().zip([4.0, -1.0, 0.0, 2.0]) {
        assert_near(*got, want, 1e-12, "coefficient");
    }
    assert_eq!(c.len(), 4);
}

#[test]
fn lagrange_duplicate_nodes() {
    let r = LagrangePolynomial::new(vec![[1.0, 0.0], [2.0, 1.0], [1.0, 2.0]]);
    assert_eq!(r.unwrap_err(), InterpError::DuplicateNodes);

    let a = Movable::new(0.0, 0.0);
    let b = Movable::new(1.0, 1.0);
    let mut p = LagrangePolynomial::new(vec![&a, &b]).unwrap();
    b.x.set(0.0);
    assert_eq!(p.update(), Err(InterpError::DuplicateNodes));
}

#[test]
fn lagrange_term() {
    let p = LagrangePolynomial::new(vec![[0.0, 2.0], [1.0, 0.5]]).unwrap();
    assert_eq!(p.term(2), "(-1.5)*x + (2.0)");
}

// ═══════════════════════════════════════════════════════════════════
// Natural cubic spline
// ═══════════════════════════════════════════════════════════════════

#[test]
fn spline_hits_every_knot() {
    let mut x = vec![0.0, 0.7, 1.5, 2.0, 3.1, 4.0];
    let mut y = vec![1.0, -0.3, 2.2, 0.0, 1.7, -1.0];
    let (x0, y0) = (x.clone(), y.clone());
    let f2 = natural_cubic_spline(&mut x, &mut y).unwrap();
    assert_eq!((x, y.clone()), (x0.clone(), y0));
    for (xi, yi) in x0.iter().zip(&y) {
        assert_eq!(spline_eval(*xi, &x0, &y, &f2), *yi);
    }
    assert_eq!((f2[0], f2[5]), (0.0, 0.0));
}

#[test]
fn spline_of_line_is_line() {
    let s = NaturalCubicSpline::new(&[0.0, 1.0, 3.0, 4.0], &[1.0, 3.0, 7.0, 9.0]).unwrap();
    for &f in s.second_derivatives() {
        assert!(f.abs() < 1e-12);
    }
    assert_near(s.eval(2.2), 5.4, 1e-12, "line");
}

#[test]
fn spline_sorts_input() {
    let mut x = [3.0, 1.0, 2.0, 0.0];
    let mut y = [9.0, 1.0, 4.0, 0.0];
    natural_cubic_spline(&mut x, &mut y).unwrap();
    assert_eq!(x, [0.0, 1.0, 2.0, 3.0]);
    assert_eq!(y, [0.0, 1.0, 4.0, 9.0]);

    let a = NaturalCubicSpline::new(&[3.0, 1.0, 2.0, 0.0], &[9.0, 1.0, 4.0, 0.0]).unwrap();
    let b = NaturalCubicSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 4.0, 9.0]).unwrap();
    assert_eq!(a.eval(1.7), b.eval(1.7));
    assert_eq!(a.knots(), b.knots());
}

#[test]
fn spline_outside_domain_is_nan() {
    let s = NaturalCubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    let v = s.eval_many(&[-0.1, 0.5, 2.1, f64::NAN]);
    assert!(v[0].is_nan());
    assert_near(v[1], 0.6875, 1e-14, "inside");
    assert!(v[2].is_nan());
    assert!(v[3].is_nan());
    assert_eq!(s.domain(), (0.0, 2.0));
}

#[test]
fn spline_symmetric_data() {
    let s = NaturalCubicSpline::new(&[-2.0, -1.0, 0.0, 1.0, 2.0], &[0.0, 1.0, 3.0, 1.0, 0.0]).unwrap();
    for t in [0.3, 0.9, 1.6] {
        assert_near(s.eval(t), s.eval(-t), 1e-12, "mirror");
    }
}

#[test]
fn spline_two_points_and_errors() {
    let mut x = [1.0, 0.0];
    let mut y = [2.0, 0.0];
    assert_eq!(natural_cubic_spline(&mut x, &mut y).unwrap(), vec![0.0, 0.0]);
    assert_eq!(spline_eval(0.25, &x, &y, &[0.0, 0.0]), 0.5);

    assert_eq!(
        natural_cubic_spline(&mut [0.0, 1.0], &mut [0.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(natural_cubic_spline(&mut [0.0], &mut [0.0]).unwrap_err(), InterpError::TooFewPoints);
    assert_eq!(
        NaturalCubicSpline::new(&[0.0, 1.0, 1.0], &[0.0, 1.0, 2.0]).unwrap_err(),
        InterpError::DuplicateNodes
    );
}

// ═══════════════════════════════════════════════════════════════════
// Cardinal splines
// ═══════════════════════════════════════════════════════════════════

#[test]
fn cardinal_interpolates_points() {
    let pts = vec![[0.0, 0.0], [1.0, 2.0], [3.0, 1.0], [4.0, 3.0], [6.0, 0.0]];
    for kind in [CardinalKind::Uniform, CardinalKind::Centripetal] {
        let s = CardinalSpline::catmull_rom(pts.clone(), kind).unwrap();
        for (i, p) in pts.iter().enumerate() {
            assert_eq!(s.eval(i as f64), *p);
            // continuous from the left at every knot
            if i > 0 {
                let [x, y] = s.eval(i as f64 - 1e-9);
                assert_near(x, p[0], 1e-7, "left x");
                assert_near(y, p[1], 1e-7, "left y");
            }
        }
        assert_eq!(s.eval(-3.0), pts[0]);
        assert_eq!(s.eval(10.0), pts[4]);
        assert!(s.eval(f64::NAN)[1].is_nan());
        assert_eq!(s.kind(), kind);
    }
}

#[test]
fn catmull_rom_straight_on_collinear_points() {
    let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [3.0, 3.0]];
    let s = CardinalSpline::catmull_rom(pts.clone(), CardinalKind::Uniform).unwrap();
    assert_eq!(s.eval(1.25), [1.25, 1.25]);

    // centripetal tangents are shorter but the segment stays symmetric
    let c = CardinalSpline::catmull_rom(pts, CardinalKind::Centripetal).unwrap();
    let [x, y] = c.eval(1.5);
    assert_near(x, 1.5, 1e-12, "midpoint x");
    assert_near(y, 1.5, 1e-12, "midpoint y");
}

#[test]
fn cardinal_two_points_is_segment() {
    let s = CardinalSpline::new(vec![[0.0, 0.0], [2.0, 4.0]], 0.5, CardinalKind::Uniform).unwrap();
    assert_eq!(s.eval(0.5), [1.0, 2.0]);
    assert_eq!(s.domain(), (0.0, 1.0));
    assert_eq!(
        CardinalSpline::new(vec![[0.0, 0.0]], 0.5, CardinalKind::Uniform).unwrap_err(),
        InterpError::TooFewPoints
    );
}

#[test]
fn cardinal_live_tension() {
    let tau = Cell::new(0.5);
    let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];
    let mut s = CardinalSpline::new(pts, Param::live(|| tau.get()), CardinalKind::Uniform).unwrap();
    let before = s.eval(0.5);
    tau.set(0.0);
    s.update();
    // zero tension: straight segments
    assert_eq!(s.eval(0.5), [0.5, 0.5]);
    assert!(before[1] != 0.5);
}

// ═══════════════════════════════════════════════════════════════════
// Bezier and B-spline
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bezier_segments_share_endpoints() {
    let pts = vec![
        [0.0, 0.0],
        [1.0, 2.0],
        [2.0, 2.0],
        [3.0, 0.0],
        [4.0, -2.0],
        [5.0, -2.0],
        [6.0, 0.0],
        [9.0, 9.0], // incomplete segment, ignored
    ];
    let b = BezierCurve::new(pts).unwrap();
    assert_eq!(b.domain(), (0.0, 2.0));
    assert_eq!(b.eval(0.0), [0.0, 0.0]);
    assert_eq!(b.eval(1.0), [3.0, 0.0]);
    assert_eq!(b.eval(2.0), [6.0, 0.0]);
    assert_eq!(b.eval(7.0), [6.0, 0.0]);
    assert_eq!(b.eval(-0.5), [0.0, 0.0]);
    let [x, y] = b.eval(0.5);
    assert_near(x, 1.5, 1e-15, "x");
    assert_near(y, 1.5, 1e-15, "y");
    let [x, y] = b.eval(1.5);
    assert_near(x, 4.5, 1e-15, "x");
    assert_near(y, -1.5, 1e-15, "y");
}

#[test]
fn bezier_short_input() {
    let b = BezierCurve::new(vec![[1.0, 1.0], [2.0, 2.0]]).unwrap();
    assert_eq!(b.domain(), (0.0, 0.0));
    assert_eq!(b.eval(0.3), [1.0, 1.0]);
    assert!(b.eval(f64::NAN)[0].is_nan());
    assert!(BezierCurve::<[f64; 2]>::new(vec![]).is_err());
}

#[test]
fn bspline_cubic_values() {
    let pts = vec![[0.0, 0.0], [1.0, 3.0], [2.0, -1.0], [3.0, 2.0], [4.0, 0.0], [5.0, 1.0]];
    let b = BSplineCurve::new(pts, 4).unwrap();
    assert_eq!(b.knots(), &[0.0, 0.0, 0.0, 0.0, 1.0, 2.0, 3.0, 3.0, 3.0, 3.0]);
    assert_eq!(b.domain(), (0.0, 3.0));
    let [x, y] = b.eval(1.5);
    assert_near(x, 2.5, 1e-14, "x(1.5)");
    assert_near(y, 0.5625, 1e-14, "y(1.5)");
    let [x, y] = b.eval(1.0);
    assert_near(x, 23.0 / 12.0, 1e-14, "x(1)");
    assert_near(y, 0.5, 1e-14, "y(1)");
    assert_eq!(b.eval(3.0), [5.0, 1.0]);
    assert_eq!(b.eval(0.0), [0.0, 0.0]);
}

#[test]
fn bspline_low_orders() {
    let pts = vec![[0.0, 0.0], [1.0, 3.0], [2.0, -1.0], [3.0, 2.0]];
    // order 2 is the polyline
    let lin = BSplineCurve::new(pts.clone(), 2).unwrap();
    assert_eq!(lin.domain(), (0.0, 3.0));
    let [x, y] = lin.eval(1.25);
    assert_near(x, 1.25, 1e-15, "x");
    assert_near(y, 2.0, 1e-15, "y");
    // order 1 steps between control points
    let step = BSplineCurve::new(pts, 1).unwrap();
    assert_eq!(step.eval(2.5), [2.0, -1.0]);
}

#[test]
fn bspline_order_reduced() {
    let b = BSplineCurve::new(vec![[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]], 7).unwrap();
    assert_eq!(b.order(), 3);
    assert_eq!(b.domain(), (0.0, 1.0));
    let [x, y] = b.eval(0.5);
    assert_near(x, 1.0, 1e-15, "x");
    assert_near(y, 1.0, 1e-15, "y");
    assert_eq!(
        BSplineCurve::new(vec![[0.0, 0.0]], 3).unwrap_err(),
        InterpError::TooFewPoints
    );
}

// ═══════════════════════════════════════════════════════════════════
// Regression
// ═══════════════════════════════════════════════════════════════════

#[test]
fn regression_recovers_quadratic() {
    let xs: Vec<f64> = (0..8).map(|i| i as f64 * 0.5).collect();
    let ys: Vec<f64> = xs.iter().map(|x| 0.5 * x * x - 2.0 * x + 1.0).collect();
    let fit = RegressionPolynomial::from_xy(2.0, &xs, &ys).unwrap();
    assert_eq!(fit.degree(), 2);
    for (got, want) in fit.coefficients().iter().zip([1.0, -2.0, 0.5]) {
        assert_near(*got, want, 1e-9, "coefficient");
    }
    assert_near(fit.eval(5.0), 3.5, 1e-8, "eval");
}

#[test]
fn regression_least_squares_line() {
    // slope Sxy/Sxx = 3/5 through the centroid (1.5, 1.5)
    let pts = vec![[0.0, 1.0], [1.0, 0.0], [2.0, 3.0], [3.0, 2.0]];
    let fit = RegressionPolynomial::new(1.0, pts).unwrap();
    let c = fit.coefficients();
    assert_near(c[0], 0.6, 1e-12, "intercept");
    assert_near(c[1], 0.6, 1e-12, "slope");
}

#[test]
fn regression_live_degree() {
    let degree = Cell::new(0.9);
    let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0], [3.0, 9.0]];
    let mut fit = RegressionPolynomial::new(Param::live(|| degree.get()), pts).unwrap();
    // floor(0.9) = 0: the mean
    assert_eq!(fit.degree(), 0);
    assert_near(fit.eval(100.0), 3.5, 1e-12, "mean");
    assert_eq!(fit.term(), "(3.50)");

    degree.set(2.0);
    fit.update().unwrap();
    assert_near(fit.eval(4.0), 16.0, 1e-9, "parabola");
}

#[test]
fn regression_errors() {
    assert_eq!(
        RegressionPolynomial::from_xy(2.0, &[0.0, 1.0], &[0.0, 1.0]).unwrap_err(),
        InterpError::Singular
    );
    assert_eq!(
        RegressionPolynomial::from_xy(1.0, &[0.0, 1.0], &[0.0]).unwrap_err(),
        InterpError::LengthMismatch
    );
    assert_eq!(
        RegressionPolynomial::from_xy(1.0, &[], &[]).unwrap_err(),
        InterpError::TooFewPoints
    );
    // a negative degree is a constant fit
    let fit = RegressionPolynomial::from_xy(-3.0, &[0.0, 1.0], &[2.0, 4.0]).unwrap();
    assert_eq!(fit.degree(), 0);
}

// ═══════════════════════════════════════════════════════════════════
// Curves as parametric curves
// ═══════════════════════════════════════════════════════════════════

#[test]
fn curves_expose_coordinates() {
    let spline = NaturalCubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
    assert_eq!(ParametricCurve::x(&spline, 0.5), 0.5);
    assert_eq!(ParametricCurve::y(&spline, 1.0), 1.0);

    let bez = BezierCurve::new(vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
    assert_eq!((bez.x(0.5), bez.y(0.5)), (0.5, 0.75));
}

#[cfg(feature = "optim")]
#[test]
fn intersect_interpolated_curve_with_line() {
    let parabola = NevilleCurve::new(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]]).unwrap();
    let level = (|s: f64| s, |_s: f64| 2.0);
    let hit = crate::optim::generalized_newton(&parabola, &level, 1.2, 1.2);
    assert!(hit.converged);
    assert_near(hit.x, 2.0_f64.sqrt(), 1e-3, "x");
    assert_near(hit.y, 2.0, 1e-3, "y");
}
