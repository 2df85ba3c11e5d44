//! Scalar root finding, 1-D minimization and curve intersection.
//!
//! Every finder accepts either a start point or a start interval through
//! [`Guess`]. Intervals are first clipped to the part where `f` is defined
//! ([`find_domain`]); start points are turned into a bracket by probing
//! ([`find_bracket`]). If no sign change can be found the finders degrade
//! instead of failing: a point falls back to [`newton`], an interval to
//! minimizing `|f|` with [`fminbr`].
//!
//! # Root finding
//!
//! - [`chandrupatla`] — inverse quadratic interpolation guarded by bisection;
//!   [`root`] is the default entry point and delegates here
//! - [`fzero`] — Brent's method (bisection, secant, inverse quadratic)
//! - [`newton`] — Newton's method with a difference-quotient derivative
//!
//! # Minimization
//!
//! - [`fminbr`] — Brent's golden-section / parabolic minimizer
//! - [`glomin`] — Brent's global minimizer for functions with bounded `f''`
//!
//! # Curves
//!
//! - [`generalized_newton`] — intersection of two parametric curves
//!
//! Running out of iterations is not an error: the best estimate comes back
//! with `converged == false` and a warning is logged.
//!
//! # Example
//!
//! ```
//! use geonum::optim::{chandrupatla, fminbr, root, MinimizeSettings, RootSettings};
//!
//! let r = chandrupatla(|x| x * x - 2.0, [0.0, 2.0], &RootSettings::default()).unwrap();
//! assert!(r.converged);
//! assert!((r.x - core::f64::consts::SQRT_2).abs() < 1e-10);
//!
//! // start point only: a bracket is searched for
//! let x = root(f64::cos, 1.0);
//! assert!((x - core::f64::consts::FRAC_PI_2).abs() < 1e-10);
//!
//! let m = fminbr(|x| (x - 1.0) * (x - 1.0), 0.0, 3.0, &MinimizeSettings::default()).unwrap();
//! assert!((m.x - 1.0).abs() < 1e-7);
//! ```

mod bracket;
mod brent;
mod chandrupatla;
mod fminbr;
mod glomin;
mod newton;

#[cfg(test)]
mod tests;

pub use bracket::{find_bracket, find_domain, Bracket};
pub use brent::fzero;
pub use chandrupatla::chandrupatla;
pub use fminbr::fminbr;
pub use glomin::glomin;
pub use newton::{generalized_newton, newton, Intersection};

use core::fmt;

/// Errors from root finding and minimization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OptimError {
    /// A start point or interval endpoint is NaN or infinite.
    InvalidInterval,
}

impl fmt::Display for OptimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptimError::InvalidInterval => write!(f, "start value or interval is not finite"),
        }
    }
}

impl std::error::Error for OptimError {}

/// Where a root search starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Guess {
    /// A single start value; a bracket is searched around it.
    Point(f64),
    /// An interval expected to enclose the root.
    Interval(f64, f64),
}

impl From<f64> for Guess {
    fn from(x: f64) -> Self {
        Guess::Point(x)
    }
}

impl From<[f64; 2]> for Guess {
    fn from([a, b]: [f64; 2]) -> Self {
        Guess::Interval(a, b)
    }
}

impl From<(f64, f64)> for Guess {
    fn from((a, b): (f64, f64)) -> Self {
        Guess::Interval(a, b)
    }
}

/// Result of a scalar root-finding algorithm.
#[derive(Debug, Clone, Copy)]
pub struct RootResult {
    /// Approximate root.
    pub x: f64,
    /// Function value at the root: `f(x)`.
    pub fx: f64,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Number of function evaluations.
    pub evals: usize,
    /// `false` if the iteration cap was hit or a fallback could not reach
    /// `|f(x)| <= EPS`.
    pub converged: bool,
}

/// Result of a 1-D minimization.
#[derive(Debug, Clone, Copy)]
pub struct MinimizeResult {
    /// Approximate minimizer.
    pub x: f64,
    /// Function value at the minimizer.
    pub fx: f64,
    pub iterations: usize,
    pub evals: usize,
    pub converged: bool,
}

/// Settings for [`fzero`] and [`chandrupatla`].
#[derive(Debug, Clone, Copy)]
pub struct RootSettings {
    /// Absolute tolerance; the bracket tolerance is `2·eps·|x| + eps/2`.
    pub eps: f64,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for RootSettings {
    fn default() -> Self {
        Self {
            eps: 1e-12,
            max_iter: 80,
        }
    }
}

/// Settings for [`fminbr`].
#[derive(Debug, Clone, Copy)]
pub struct MinimizeSettings {
    /// Absolute tolerance on the minimizer.
    pub tol: f64,
    /// Relative tolerance; the working tolerance is `rel_tol·|x| + tol/3`.
    pub rel_tol: f64,
    /// Maximum number of iterations.
    pub max_iter: usize,
}

impl Default for MinimizeSettings {
    fn default() -> Self {
        Self {
            tol: 1e-12,
            rel_tol: 1.5e-8,
            max_iter: 500,
        }
    }
}

/// Root of `f` near `x0` (a point or an interval) with default settings.
///
/// Delegates to [`chandrupatla`]. Returns NaN for a non-finite start.
pub fn root<F: Fn(f64) -> f64>(f: F, x0: impl Into<Guess>) -> f64 {
    let x0 = x0.into();
    match chandrupatla(f, x0, &RootSettings::default()) {
        Ok(r) => r.x,
        Err(e) => {
            log::debug!("root: {e} ({x0:?})");
            f64::NAN
        }
    }
}

pub(crate) fn check_interval(a: f64, b: f64) -> Result<(), OptimError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(OptimError::InvalidInterval)
    }
}
