use super::{check_interval, MinimizeResult, OptimError};
use crate::EPS;

/// Assumed bound on `|f''|`.
const CURVATURE_BOUND: f64 = 1e7;
const MACHEP: f64 = f64::EPSILON;
/// Outer iteration cap. Each pass moves the sweep point strictly right.
const MAX_PASSES: usize = 1_000_000;

/// Global minimum of `f` on `[a, b]`.
///
/// Brent's `glomin`: assumes `|f''| <= M` with `M = 1e7` and sweeps the
/// interval from left to right, using the curvature bound to skip the parts
/// that provably cannot undercut the best value found so far. Random probes
/// from the sequence `k ← 1611·k mod 2²⁰` test the region ahead of the sweep.
/// The sweep starts from `a`, `b` and the midpoint; `f` is assumed accurate
/// to `EPS` and the minimum is wanted to within `EPS`.
///
/// The bound is large, so the sweep takes small steps near low values and
/// can need tens of thousands of evaluations; use [`super::fminbr`] when a
/// local minimum suffices.
///
/// # Errors
///
/// Returns [`OptimError::InvalidInterval`] if `a` or `b` is not finite.
///
/// # Example
///
/// ```
/// use geonum::optim::glomin;
///
/// // two wells; the deeper one is on the left
/// let m = glomin(|x: f64| x.powi(4) - 3.0 * x * x + x, -3.0, 3.0).unwrap();
/// assert!((m.x + 1.300_839_566).abs() < 1e-5);
/// ```
pub fn glomin<F: Fn(f64) -> f64>(f: F, a: f64, b: f64) -> Result<MinimizeResult, OptimError> {
    check_interval(a, b)?;
    let (a, b) = if a <= b { (a, b) } else { (b, a) };

    let m = CURVATURE_BOUND;
    let (e, t) = (EPS, EPS);
    let mut evals = 0usize;
    let mut eval = |x: f64| {
        evals += 1;
        f(x)
    };

    let mut a0 = b;
    let mut a2 = a;
    let mut y0 = eval(b);
    let yb = y0;
    let mut y2 = eval(a);
    let (mut x, mut y) = if y0 < y2 { (b, y0) } else { (a, y2) };

    if a == b {
        return Ok(MinimizeResult {
            x,
            fx: y,
            iterations: 0,
            evals,
            converged: true,
        });
    }

    let m2 = 0.5 * (1.0 + 16.0 * MACHEP) * m;
    let mut sc = 0.5 * (a + b);
    let mut y1 = eval(sc);
    let mut k: u64 = 3;
    let mut d0 = a2 - sc;
    let mut h = 9.0 / 11.0;
    if y1 < y {
        x = sc;
        y = y1;
    }

    let next_k = |k: &mut u64| -> f64 {
        *k = (1611 * *k) % 1_048_576;
        (b - a) * 0.00001 * *k as f64
    };

    for pass in 0..MAX_PASSES {
        let d1 = a2 - a0;
        let d2 = sc - a0;
        let z2 = b - a2;
        let z0 = y2 - y1;
        let z1 = y2 - y0;
        let mut r = d1 * d1 * z0 - d0 * d0 * z1;
        let mut p = r;
        let qs = 2.0 * (d0 * z1 - d1 * z0);
        let mut q = qs;

        // random probes ahead of the sweep point a2
        let mut first = k < 1_000_000 || y2 <= y;
        if !first {
            r = next_k(&mut k);
            q = 1.0;
        }
        while first || r < z2 {
            if q * (r * (yb - y2) + z2 * q * ((y2 - y) + t)) < z2 * m2 * r * (z2 * q - r) {
                let a3 = a2 + r / q;
                let y3 = eval(a3);
                if y3 < y {
                    x = a3;
                    y = y3;
                }
            }
            r = next_k(&mut k);
            q = 1.0;
            first = false;
        }

        // advance the sweep as far as the curvature bound allows
        r = m2 * d0 * d1 * d2;
        let s = (((y2 - y) + t) / m2).sqrt();
        h = 0.5 * (1.0 + h);
        p = h * (p + 2.0 * r * s);
        q += 0.5 * qs;
        r = -0.5 * (d0 + (z0 + 2.01 * e) / (d0 * m2));
        r = if r < s || d0 < 0.0 { a2 + s } else { a2 + r };

        let mut a3 = if p * q > 0.0 { a2 + p / q } else { r };
        let mut y3;
        loop {
            a3 = a3.max(r);
            if b <= a3 {
                a3 = b;
                y3 = yb;
            } else {
                y3 = eval(a3);
            }
            if y3 < y {
                x = a3;
                y = y3;
            }
            d0 = a3 - a2;
            if a3 <= r {
                break;
            }
            let p = 2.0 * (y2 - y3) / (m * d0);
            if (1.0 + 9.0 * MACHEP) * d0 <= p.abs() {
                break;
            }
            if 0.5 * m2 * (d0 * d0 + p * p) <= (y2 - y) + (y3 - y) + 2.0 * t {
                break;
            }
            a3 = 0.5 * (a2 + a3);
            h *= 0.9;
        }

        if b <= a3 {
            return Ok(MinimizeResult {
                x,
                fx: y,
                iterations: pass + 1,
                evals,
                converged: true,
            });
        }

        a0 = sc;
        sc = a2;
        a2 = a3;
        y0 = y1;
        y1 = y2;
        y2 = y3;
    }

    log::warn!("glomin: sweep did not reach {b} after {MAX_PASSES} passes, x = {x}");
    Ok(MinimizeResult {
        x,
        fx: y,
        iterations: MAX_PASSES,
        evals,
        converged: false,
    })
}
