use super::bracket::{start, Start};
use super::{Guess, OptimError, RootResult, RootSettings};

/// Chandrupatla's method for scalar root finding.
///
/// Works on the bracket `[x1, x2]` plus the discarded point `x3`. The next
/// point is `x1 + t·(x2 - x1)`, where `t` comes from inverse quadratic
/// interpolation through the three points if
/// `1 - √(1 - ξ) < φ < √ξ` (`ξ`, `φ` the relative position and relative
/// value of `x1`), and `t = 1/2` otherwise. `t` is kept at least the
/// tolerance away from both ends. The best estimate is whichever of `x1`,
/// `x2` has the smaller `|f|`.
///
/// Converges when the bracket is narrower than twice
/// `2·eps·|x| + eps/2`, or `f(x)` is exactly zero. This is the method
/// behind [`super::root`].
///
/// # Errors
///
/// Returns [`OptimError::InvalidInterval`] for a non-finite start.
///
/// # Example
///
/// ```
/// use geonum::optim::{chandrupatla, RootSettings};
///
/// // start point: the bracket [1, 2] is found first
/// let r = chandrupatla(|x| x.powi(3) - x - 1.0, 1.0, &RootSettings::default()).unwrap();
/// assert!(r.converged);
/// assert!((r.x - 1.324_717_957_244_746).abs() < 1e-10);
/// ```
pub fn chandrupatla<F: Fn(f64) -> f64>(
    f: F,
    x0: impl Into<Guess>,
    settings: &RootSettings,
) -> Result<RootResult, OptimError> {
    let (br, mut evals) = match start(&f, x0.into(), "chandrupatla")? {
        Start::Bracketed { bracket, evals } => (bracket, evals),
        Start::Fallback(r) => return Ok(r),
    };

    let eps = settings.eps;
    let (mut x1, mut f1) = (br.a, br.fa);
    let (mut x2, mut f2) = (br.b, br.fb);
    let (mut xm, mut fm) = if f1.abs() < f2.abs() { (x1, f1) } else { (x2, f2) };
    let mut t = 0.5;

    if fm == 0.0 {
        return Ok(RootResult {
            x: xm,
            fx: fm,
            iterations: 0,
            evals,
            converged: true,
        });
    }

    for iter in 0..settings.max_iter {
        let x = x1 + t * (x2 - x1);
        let y = f(x);
        evals += 1;

        // [x2, x1] stays a bracket; x3 is the point that dropped out
        let (x3, f3) = if y.signum() == f1.signum() {
            (x1, f1)
        } else {
            let dropped = (x2, f2);
            x2 = x1;
            f2 = f1;
            dropped
        };
        x1 = x;
        f1 = y;

        (xm, fm) = if f2.abs() < f1.abs() { (x2, f2) } else { (x1, f1) };

        let tol = 2.0 * eps * xm.abs() + 0.5 * eps;
        let tl = tol / (x2 - x1).abs();
        if tl > 0.5 || fm == 0.0 {
            return Ok(RootResult {
                x: xm,
                fx: fm,
                iterations: iter + 1,
                evals,
                converged: true,
            });
        }

        let xi = (x1 - x2) / (x3 - x2);
        let phi = (f1 - f2) / (f3 - f2);
        t = if 1.0 - (1.0 - xi).sqrt() < phi && phi < xi.sqrt() {
            let al = (x3 - x1) / (x2 - x1);
            let a = f1 / (f2 - f1);
            let b = f3 / (f2 - f3);
            let c = f1 / (f3 - f1);
            let d = f2 / (f3 - f2);
            a * b + c * d * al
        } else {
            0.5
        };
        t = t.max(tl).min(1.0 - tl);
    }

    log::warn!(
        "chandrupatla: no convergence after {} iterations, x = {xm}",
        settings.max_iter
    );
    Ok(RootResult {
        x: xm,
        fx: fm,
        iterations: settings.max_iter,
        evals,
        converged: false,
    })
}
