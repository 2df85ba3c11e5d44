use core::f64::consts::TAU;

use num_complex::Complex;

use super::{PolyError, PolyRootSettings, PolyRoots};

/// Evaluate `Σ coeffs[i]·z^i` by Horner's scheme.
pub fn eval<C: Into<Complex<f64>> + Copy>(coeffs: &[C], z: Complex<f64>) -> Complex<f64> {
    coeffs.iter().rev().fold(Complex::new(0.0, 0.0), |p, &c| {
        let c: Complex<f64> = c.into();
        p * z + c
    })
}

/// All complex roots of `Σ coeffs[i]·x^i`, sorted by ascending real part.
///
/// Coefficients may be real (`f64`) or complex (`Complex<f64>`).
///
/// Before iterating, zero coefficients at the low end are split off as
/// exact roots at the origin and high-order coefficients that vanish
/// relative to the largest one are dropped, so a polynomial of nominal
/// degree `n` may yield fewer than `n` roots. Starting values lie on a
/// circle around the centroid of the roots, `c = -a_{n-1} / (n·a_n)`, with
/// radius `|p(c) / a_n|^(1/n)` (Ozawa).
///
/// An estimate `z` is accepted once `|p(z)| ≤ tol·Σ (4i + 1)·|a_i|·|z|^i`,
/// which tracks the rounding error of evaluating `p` near `z` (Bini). For
/// `|z| > 1` both sides are evaluated on the reversed polynomial in `1/z`,
/// which keeps powers of `z` from overflowing. If some estimates are still
/// unaccepted after `max_iter` sweeps, the current estimates are returned
/// with `converged == false` and a warning is logged.
///
/// A constant or identically zero polynomial has no roots to report.
///
/// # Errors
///
/// [`PolyError::GuessCount`] if `initial_guesses` does not match the
/// reduced degree.
///
/// # Example
///
/// ```
/// use geonum::poly::{find_roots, PolyRootSettings};
///
/// // (x - 1)(x - 2)(x - 3)
/// let res = find_roots(&[-6.0, 11.0, -6.0, 1.0], &PolyRootSettings::default()).unwrap();
/// assert!(res.converged);
/// for (z, want) in res.roots.iter().zip([1.0, 2.0, 3.0]) {
///     assert!((z.re - want).abs() < 1e-12 && z.im.abs() < 1e-12);
/// }
/// ```
pub fn find_roots<C: Into<Complex<f64>> + Copy>(
    coeffs: &[C],
    settings: &PolyRootSettings,
) -> Result<PolyRoots, PolyError> {
    let end = match settings.degree {
        Some(d) => (d + 1).min(coeffs.len()),
        None => coeffs.len(),
    };
    let coeffs: Vec<Complex<f64>> = coeffs[..end].iter().map(|&c| c.into()).collect();

    // roots at the origin
    let zero = Complex::new(0.0, 0.0);
    let zeros = coeffs.iter().take_while(|&&c| c == zero).count();
    if zeros == coeffs.len() {
        return Ok(PolyRoots {
            roots: Vec::new(),
            iterations: 0,
            converged: true,
        });
    }
    let mut a = &coeffs[zeros..];

    let scale = a.iter().fold(0.0_f64, |m, c| m.max(c.norm()));
    while a.len() > 1 && a[a.len() - 1].norm() <= f64::EPSILON * scale {
        a = &a[..a.len() - 1];
    }
    let n = a.len().saturating_sub(1);

    let mut roots = match &settings.initial_guesses {
        Some(g) if g.len() != n => {
            return Err(PolyError::GuessCount {
                expected: n,
                got: g.len(),
            })
        }
        Some(g) => g.clone(),
        None => ozawa_guesses(a),
    };

    let (iterations, converged) = if n > 0 {
        aberth(a, &mut roots, settings)
    } else {
        (0, true)
    };

    roots.extend(core::iter::repeat(zero).take(zeros));
    roots.sort_by(|z, w| z.re.total_cmp(&w.re).then(z.im.total_cmp(&w.im)));
    Ok(PolyRoots {
        roots,
        iterations,
        converged,
    })
}

/// `n` points on a circle around the centroid of the roots.
fn ozawa_guesses(a: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = a.len().saturating_sub(1);
    if n == 0 {
        return Vec::new();
    }
    let lead = a[n];
    let centre = -a[n - 1] / (lead * n as f64);
    let mut radius = (eval(a, centre) / lead).norm().powf(1.0 / n as f64);
    if !(radius > 0.0 && radius.is_finite()) {
        radius = 1.0;
    }
    // the angular offset keeps guesses off the real axis
    (0..n)
        .map(|k| centre + Complex::from_polar(radius, (TAU * k as f64 + 1.5) / n as f64))
        .collect()
}

/// Sweeps performed, and whether every estimate was accepted.
fn aberth(a: &[Complex<f64>], z: &mut [Complex<f64>], settings: &PolyRootSettings) -> (usize, bool) {
    let n = z.len();
    let mut done = vec![false; n];

    for sweep in 1..=settings.max_iter {
        for i in 0..n {
            if done[i] {
                continue;
            }
            let step = newton_step(a, z[i]);
            if step.residual <= settings.tol * step.bound {
                done[i] = true;
                continue;
            }
            let Some(ratio) = step.ratio else { continue };
            let repulsion: Complex<f64> = (0..n).filter(|&j| j != i).map(|j| (z[i] - z[j]).inv()).sum();
            z[i] -= ratio / (1.0 - ratio * repulsion);
        }
        if done.iter().all(|&d| d) {
            return (sweep, true);
        }
    }

    let open = done.iter().filter(|&&d| !d).count();
    log::warn!(
        "find_roots: {open} of {n} roots not converged after {} iterations",
        settings.max_iter
    );
    (settings.max_iter, false)
}

struct NewtonStep {
    /// `p(z) / p'(z)`, `None` where the derivative vanishes.
    ratio: Option<Complex<f64>>,
    /// `|p(z)|`, scaled by `|z|^-n` when `|z| > 1`.
    residual: f64,
    /// Rounding bound for `residual`, on the same scale.
    bound: f64,
}

fn newton_step(a: &[Complex<f64>], z: Complex<f64>) -> NewtonStep {
    let n = a.len() - 1;
    if z.norm() <= 1.0 {
        let (p, dp) = horner_with_derivative(a.iter().rev(), z);
        let r = z.norm();
        let bound = a
            .iter()
            .enumerate()
            .rev()
            .fold(0.0, |s, (i, c)| s * r + c.norm() * (4 * i + 1) as f64);
        NewtonStep {
            ratio: nonzero(dp).map(|dp| p / dp),
            residual: p.norm(),
            bound,
        }
    } else {
        // p(z) = z^n·q(w) with q the reversed polynomial and w = 1/z
        let w = z.inv();
        let (q, dq) = horner_with_derivative(a.iter(), w);
        let r = w.norm();
        let bound = a
            .iter()
            .enumerate()
            .fold(0.0, |s, (i, c)| s * r + c.norm() * (4 * i + 1) as f64);
        let den = q * n as f64 - w * dq;
        NewtonStep {
            ratio: nonzero(den).map(|den| z * q / den),
            residual: q.norm(),
            bound,
        }
    }
}

/// Value and derivative of the polynomial whose coefficients are yielded
/// highest power first.
fn horner_with_derivative<'a>(
    coeffs: impl Iterator<Item = &'a Complex<f64>>,
    z: Complex<f64>,
) -> (Complex<f64>, Complex<f64>) {
    let zero = Complex::new(0.0, 0.0);
    coeffs.fold((zero, zero), |(p, dp), &c| (p * z + c, dp * z + p))
}

fn nonzero(v: Complex<f64>) -> Option<Complex<f64>> {
    if v.re == 0.0 && v.im == 0.0 {
        None
    } else {
        Some(v)
    }
}
