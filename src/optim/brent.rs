use super::bracket::{start, Start};
use super::{Guess, OptimError, RootResult, RootSettings};

/// Brent's method for scalar root finding.
///
/// Keeps three points `a`, `b`, `c` with `b` the best estimate and `[b, c]`
/// enclosing the root. Each step tries linear or inverse quadratic
/// interpolation and falls back to bisection whenever the interpolated
/// point would leave `[b, c]` or shrink the bracket too slowly. Stops when
/// the half-width of `[b, c]` is below `2·eps·|b| + eps/2` or `|f(b)| <= eps`.
///
/// A start point is bracketed first (see [`super::find_bracket`]); see the
/// [module docs](super) for the fallbacks when no sign change is found.
///
/// # Errors
///
/// Returns [`OptimError::InvalidInterval`] for a non-finite start.
///
/// # Example
///
/// ```
/// use geonum::optim::{fzero, RootSettings};
///
/// let r = fzero(|x| x * x - 2.0, [0.0, 2.0], &RootSettings::default()).unwrap();
/// assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn fzero<F: Fn(f64) -> f64>(
    f: F,
    x0: impl Into<Guess>,
    settings: &RootSettings,
) -> Result<RootResult, OptimError> {
    let (br, mut evals) = match start(&f, x0.into(), "fzero")? {
        Start::Bracketed { bracket, evals } => (bracket, evals),
        Start::Fallback(r) => return Ok(r),
    };

    let eps = settings.eps;
    let (mut a, mut fa) = (br.a, br.fa);
    let (mut b, mut fb) = (br.b, br.fb);
    let (mut c, mut fc) = (a, fa);

    for iter in 0..settings.max_iter {
        let prev_step = b - a;

        // b is the best estimate
        if fc.abs() < fb.abs() {
            a = b;
            b = c;
            c = a;
            fa = fb;
            fb = fc;
            fc = fa;
        }

        let tol_act = 2.0 * eps * b.abs() + 0.5 * eps;
        let mut new_step = 0.5 * (c - b);

        if new_step.abs() <= tol_act || fb.abs() <= eps {
            return Ok(RootResult {
                x: b,
                fx: fb,
                iterations: iter,
                evals,
                converged: true,
            });
        }

        // Interpolate only if the previous step was large enough and went
        // the right way.
        if prev_step.abs() >= tol_act && fa.abs() > fb.abs() {
            let cb = c - b;
            let mut p;
            let mut q;
            if a == c {
                // two distinct points: secant
                let t1 = fb / fa;
                p = cb * t1;
                q = 1.0 - t1;
            } else {
                // inverse quadratic
                let qa = fa / fc;
                let t1 = fb / fc;
                let t2 = fb / fa;
                p = t2 * (cb * qa * (qa - t1) - (b - a) * (t1 - 1.0));
                q = (qa - 1.0) * (t1 - 1.0) * (t2 - 1.0);
            }
            if p > 0.0 {
                q = -q;
            } else {
                p = -p;
            }

            if p < 0.75 * cb * q - (tol_act * q).abs() * 0.5 && p < (prev_step * q * 0.5).abs() {
                new_step = p / q;
            }
        }

        if new_step.abs() < tol_act {
            new_step = tol_act.copysign(new_step);
        }

        a = b;
        fa = fb;
        b += new_step;
        fb = f(b);
        evals += 1;

        // keep the root between b and c
        if (fb > 0.0 && fc > 0.0) || (fb < 0.0 && fc < 0.0) {
            c = a;
            fc = fa;
        }
    }

    log::warn!("fzero: no convergence after {} iterations, x = {b}", settings.max_iter);
    Ok(RootResult {
        x: b,
        fx: fb,
        iterations: settings.max_iter,
        evals,
        converged: false,
    })
}
