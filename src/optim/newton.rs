use super::RootResult;
use crate::diff::derivative;
use crate::traits::ParametricCurve;
use crate::EPS;

const NEWTON_MAX_ITER: usize = 50;
const INTERSECT_MAX_ITER: usize = 10;

/// Newton's method from `x0` with a difference-quotient derivative.
///
/// Iterates `x ← x - f(x)/f'(x)` until `|f(x)| <= EPS`, for at most 50
/// steps. Where `|f'(x)| <= EPS` the iterate is kicked by a random amount
/// in `[-1, -0.8)` to leave the flat spot.
///
/// ```
/// use geonum::optim::newton;
///
/// let r = newton(|x| x * x - 2.0, 1.0);
/// assert!(r.converged);
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-6);
/// ```
pub fn newton<F: Fn(f64) -> f64>(f: F, x0: f64) -> RootResult {
    let mut x = x0;
    let mut fx = f(x);
    let mut evals = 1;
    let mut iterations = 0;

    while iterations < NEWTON_MAX_ITER && fx.abs() > EPS {
        let df = derivative(&f, x);
        evals += 2;
        if df.abs() > EPS {
            x -= fx / df;
        } else {
            x += rand::random::<f64>() * 0.2 - 1.0;
        }
        fx = f(x);
        evals += 1;
        iterations += 1;
    }

    let converged = fx.abs() <= EPS;
    if !converged {
        log::warn!("newton: no convergence after {iterations} iterations, x = {x}, f(x) = {fx}");
    }
    RootResult {
        x,
        fx,
        iterations,
        evals,
        converged,
    }
}

/// Intersection point of two curves with the parameters that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    pub x: f64,
    pub y: f64,
    /// Parameter on the first curve.
    pub t1: f64,
    /// Parameter on the second curve.
    pub t2: f64,
    /// Squared distance `|c1(t1) - c2(t2)|²` at exit.
    pub residual: f64,
    pub converged: bool,
}

/// Intersect two parametric curves by Newton's method in `(t1, t2)`.
///
/// Solves `c1(t1) - c2(t2) = 0` starting from `(t1, t2)`, with the 2×2
/// Jacobian `[[x1', -x2'], [y1', -y2']]` from symmetric differences. Stops
/// when the squared distance is at most `EPS`, after 10 steps, or when the
/// Jacobian becomes singular. The returned point lies on `c1`.
///
/// Feed `t1`, `t2` of the result back in as start values when tracking an
/// intersection of moving curves.
///
/// ```
/// use geonum::optim::generalized_newton;
///
/// // unit circle against the line y = x
/// let circle = (f64::cos, f64::sin);
/// let line = (|s: f64| s, |s: f64| s);
/// let p = generalized_newton(&circle, &line, 0.5, 0.5);
/// assert!(p.converged);
/// assert!((p.x - 0.5_f64.sqrt()).abs() < 1e-3);
/// ```
pub fn generalized_newton<C1, C2>(c1: &C1, c2: &C2, t1: f64, t2: f64) -> Intersection
where
    C1: ParametricCurve + ?Sized,
    C2: ParametricCurve + ?Sized,
{
    let (mut t1, mut t2) = (t1, t2);
    let residual = |t1: f64, t2: f64| (c1.x(t1) - c2.x(t2), c1.y(t1) - c2.y(t2));
    let (mut e, mut f) = residual(t1, t2);
    let mut iter = 0;

    while e * e + f * f > EPS && iter < INTERSECT_MAX_ITER {
        let a = derivative(|t| c1.x(t), t1);
        let b = -derivative(|t| c2.x(t), t2);
        let c = derivative(|t| c1.y(t), t1);
        let d = -derivative(|t| c2.y(t), t2);
        let disc = a * d - b * c;
        if disc == 0.0 || !disc.is_finite() {
            log::debug!("generalized_newton: singular Jacobian at ({t1}, {t2})");
            break;
        }
        t1 -= (d * e - b * f) / disc;
        t2 -= (a * f - c * e) / disc;
        (e, f) = residual(t1, t2);
        iter += 1;
    }

    let dist2 = e * e + f * f;
    Intersection {
        x: c1.x(t1),
        y: c1.y(t1),
        t1,
        t2,
        residual: dist2,
        converged: dist2 <= EPS,
    }
}
