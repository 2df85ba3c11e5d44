use super::{check_interval, find_domain, MinimizeResult, MinimizeSettings, OptimError};

/// Brent's derivative-free minimizer on `[a, b]`.
///
/// Combines golden-section steps with parabolic interpolation through the
/// three best points seen so far. An interpolated step is taken only if it
/// lands inside the current interval, not too close to its ends, and is
/// shorter than half the step before last. Stops when
/// `|x - m| + (b - a)/2 <= 2·tol_act` with `m` the midpoint and
/// `tol_act = rel_tol·|x| + tol/3`.
///
/// Endpoints where `f` is NaN are first moved towards the defined region
/// ([`find_domain`] with `outer == true`). The interval may be given in
/// either order. Finds a local minimum only; see [`super::glomin`].
///
/// # Errors
///
/// Returns [`OptimError::InvalidInterval`] if `a` or `b` is not finite.
///
/// # Example
///
/// ```
/// use geonum::optim::{fminbr, MinimizeSettings};
///
/// let m = fminbr(f64::cos, 2.0, 4.0, &MinimizeSettings::default()).unwrap();
/// assert!((m.x - core::f64::consts::PI).abs() < 1e-7);
/// assert!((m.fx + 1.0).abs() < 1e-14);
/// ```
pub fn fminbr<F: Fn(f64) -> f64>(
    f: F,
    a: f64,
    b: f64,
    settings: &MinimizeSettings,
) -> Result<MinimizeResult, OptimError> {
    check_interval(a, b)?;
    let (a, b) = if a <= b { (a, b) } else { (b, a) };
    let (mut a, mut b) = find_domain(&f, a, b, true);

    // golden-section ratio (3 - √5) / 2
    let r = 0.5 * (3.0 - 5.0_f64.sqrt());

    let mut v = a + r * (b - a);
    let mut fv = f(v);
    let mut evals = 1;
    let (mut w, mut fw) = (v, fv);
    let (mut x, mut fx) = (v, fv);

    for iter in 0..settings.max_iter {
        let range = b - a;
        let middle = 0.5 * (a + b);
        let tol_act = settings.rel_tol * x.abs() + settings.tol / 3.0;

        if (x - middle).abs() + 0.5 * range <= 2.0 * tol_act {
            return Ok(MinimizeResult {
                x,
                fx,
                iterations: iter,
                evals,
                converged: true,
            });
        }

        let mut new_step = r * if x < middle { b - x } else { a - x };

        // x and w distinct: try a parabola
        if (x - w).abs() >= tol_act {
            let t = (x - w) * (fx - fv);
            let mut q = (x - v) * (fx - fw);
            let mut p = (x - v) * q - (x - w) * t;
            q = 2.0 * (q - t);
            if q > 0.0 {
                p = -p;
            } else {
                q = -q;
            }
            if p.abs() < (new_step * q).abs()
                && p > q * (a - x + 2.0 * tol_act)
                && p < q * (b - x - 2.0 * tol_act)
            {
                new_step = p / q;
            }
        }

        if new_step.abs() < tol_act {
            new_step = tol_act.copysign(new_step);
        }

        let t = x + new_step;
        let ft = f(t);
        evals += 1;

        if ft <= fx {
            if t < x {
                b = x;
            } else {
                a = x;
            }
            v = w;
            w = x;
            x = t;
            fv = fw;
            fw = fx;
            fx = ft;
        } else {
            if t < x {
                a = t;
            } else {
                b = t;
            }
            if ft <= fw || w == x {
                v = w;
                w = t;
                fv = fw;
                fw = ft;
            } else if ft <= fv || v == x || v == w {
                v = t;
                fv = ft;
            }
        }
    }

    log::warn!("fminbr: no convergence after {} iterations, x = {x}", settings.max_iter);
    Ok(MinimizeResult {
        x,
        fx,
        iterations: settings.max_iter,
        evals,
        converged: false,
    })
}
