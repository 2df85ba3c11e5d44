use core::cell::Cell;

use super::{check_interval, fminbr, newton, Guess, MinimizeSettings, OptimError, RootResult};

/// An interval `[a, b]`, `a <= b`, with `f(a)·f(b) <= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    pub a: f64,
    pub fa: f64,
    pub b: f64,
    pub fb: f64,
}

/// Search for a sign change of `f` around `x0`.
///
/// Probes `0.9a, 1.1a, a-1, a+1, 0.5a, 1.5a, -a, 2a, -10a, 10a, -100a, 100a`
/// with `a = x0` (or `a = 1` when `x0 == 0`) and stops at the first probe
/// `b` with `f(x0)·f(b) <= 0`. This is a heuristic: `None` means no probe
/// changed sign, not that `f` has no root.
///
/// ```
/// use geonum::optim::find_bracket;
///
/// let br = find_bracket(|x| x - 3.0, 2.0).unwrap();
/// assert_eq!((br.a, br.b), (2.0, 3.0));
/// assert!(find_bracket(|x| x * x + 1.0, 1.0).is_none());
/// ```
pub fn find_bracket<F: Fn(f64) -> f64>(f: F, x0: f64) -> Option<Bracket> {
    let fa = f(x0);
    let a = if x0 == 0.0 { 1.0 } else { x0 };
    let probes = [
        0.9 * a,
        1.1 * a,
        a - 1.0,
        a + 1.0,
        0.5 * a,
        1.5 * a,
        -a,
        2.0 * a,
        -10.0 * a,
        10.0 * a,
        -100.0 * a,
        100.0 * a,
    ];

    probes.into_iter().find_map(|b| {
        let fb = f(b);
        if fa * fb > 0.0 || fa.is_nan() || fb.is_nan() {
            return None;
        }
        Some(if b < x0 {
            Bracket { a: b, fa: fb, b: x0, fb: fa }
        } else {
            Bracket { a: x0, fa, b, fb }
        })
    })
}

/// Golden-section split ratio `1 - 1/φ`.
const GOLDEN: f64 = 0.381_966_011_250_105_2;
const DOMAIN_STEPS: usize = 20;
const DOMAIN_TOL: f64 = 1e-3;

/// Shrink `[a, b]` away from endpoints where `f` is NaN.
///
/// For each endpoint at which `f` returns NaN, the boundary between the
/// undefined and the defined part is located by golden-section bisection
/// (at most 20 steps, stopping once the search interval is below `0.001`).
/// With `outer == true` the endpoint is moved to the last undefined point
/// found, so the interval still covers the whole defined region. With
/// `outer == false` it is moved to the last defined point, so `f` can be
/// evaluated at both returned endpoints. Endpoints where `f` is defined are
/// left alone.
///
/// ```
/// use geonum::optim::find_domain;
///
/// let (a, b) = find_domain(f64::sqrt, -1.0, 4.0, false);
/// assert!(a >= 0.0 && a < 0.01);
/// assert_eq!(b, 4.0);
/// ```
pub fn find_domain<F: Fn(f64) -> f64>(f: F, a: f64, b: f64, outer: bool) -> (f64, f64) {
    let (mut lo, mut hi) = (a, b);

    if f(lo).is_nan() {
        let (mut nan, mut ok) = (lo, hi);
        let mut steps = 0;
        while ok - nan > DOMAIN_TOL && steps < DOMAIN_STEPS {
            let c = nan + (ok - nan) * GOLDEN;
            if f(c).is_nan() {
                nan = c;
            } else {
                ok = c;
            }
            steps += 1;
        }
        lo = if outer { nan } else { ok };
        log::debug!("find_domain: lower end {a} -> {lo}");
    }

    if f(hi).is_nan() {
        let (mut ok, mut nan) = (lo, hi);
        let mut steps = 0;
        while nan - ok > DOMAIN_TOL && steps < DOMAIN_STEPS {
            let c = nan - (nan - ok) * GOLDEN;
            if f(c).is_nan() {
                nan = c;
            } else {
                ok = c;
            }
            steps += 1;
        }
        hi = if outer { nan } else { ok };
        log::debug!("find_domain: upper end {b} -> {hi}");
    }

    (lo, hi)
}

/// How a bracketing root finder starts.
pub(crate) enum Start {
    Bracketed { bracket: Bracket, evals: usize },
    Fallback(RootResult),
}

/// Shared preamble of [`super::fzero`] and [`super::chandrupatla`].
///
/// Intervals are clipped with [`find_domain`] and used as they are; points
/// are bracketed with [`find_bracket`]. Without a sign change the search
/// falls back to [`newton`] from the point, or to minimizing `|f|` over the
/// interval.
pub(crate) fn start<F: Fn(f64) -> f64>(f: &F, guess: Guess, who: &str) -> Result<Start, OptimError> {
    let calls = Cell::new(0usize);
    let g = |x: f64| {
        calls.set(calls.get() + 1);
        f(x)
    };

    match guess {
        Guess::Interval(a, b) => {
            check_interval(a, b)?;
            let (a, b) = if a <= b { (a, b) } else { (b, a) };
            let (a, b) = find_domain(g, a, b, false);
            let (fa, fb) = (g(a), g(b));
            if fa * fb <= 0.0 {
                return Ok(Start::Bracketed {
                    bracket: Bracket { a, fa, b, fb },
                    evals: calls.get(),
                });
            }
            log::debug!("{who}: no sign change on [{a}, {b}], minimizing |f|");
            let m = fminbr(|x| g(x).abs(), a, b, &MinimizeSettings::default())?;
            let fx = g(m.x);
            Ok(Start::Fallback(RootResult {
                x: m.x,
                fx,
                iterations: m.iterations,
                evals: calls.get(),
                converged: fx.abs() <= crate::EPS,
            }))
        }
        Guess::Point(x0) => {
            check_interval(x0, x0)?;
            match find_bracket(g, x0) {
                Some(bracket) => Ok(Start::Bracketed {
                    bracket,
                    evals: calls.get(),
                }),
                None => {
                    log::debug!("{who}: no bracket around {x0}, using Newton");
                    let mut r = newton(f, x0);
                    r.evals += calls.get();
                    Ok(Start::Fallback(r))
                }
            }
        }
    }
}
