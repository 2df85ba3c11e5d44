//! Numerical integration of `f: ℝ → ℝ` over a finite interval.
//!
//! # Fixed-order rules
//!
//! - [`newton_cotes`] — composite trapezoid, Simpson or Milne rule
//! - [`romberg`] — Richardson extrapolation of the trapezoid rule
//! - [`gauss_legendre`] — `n`-point Gauss-Legendre rule, `2 ≤ n ≤ 18`
//! - [`riemann`], [`riemann_sum`] — Riemann sums and their rectangle outlines
//!
//! # Adaptive
//!
//! [`qag`] bisects the subinterval with the largest error estimate until the
//! total error estimate meets `max(epsabs, epsrel·|I|)`, using a
//! Gauss-Kronrod pair ([`KronrodRule`]) on every piece. Non-convergence is
//! reported through [`QuadStatus`], never as an error.
//!
//! [`integrate`] is the default integrator: `qag` with the 15-point rule and
//! `1e-7` tolerances.
//!
//! # Example
//!
//! ```
//! use geonum::quad::{integrate, qag, QagSettings};
//!
//! let area = integrate(0.0, core::f64::consts::PI, f64::sin);
//! assert!((area - 2.0).abs() < 1e-10);
//!
//! let res = qag(0.0, 1.0, |x| 1.0 / (1.0 + x * x), &QagSettings::default()).unwrap();
//! assert!(res.status.is_converged());
//! assert!((res.value - core::f64::consts::FRAC_PI_4).abs() < 1e-9);
//! ```

mod gauss_legendre;
mod kronrod;
mod newton_cotes;
mod qag;
mod riemann;
mod romberg;


pub use gauss_legendre::{gauss_legendre, legendre_nodes, GaussLegendreSettings};
pub use kronrod::{qk, KronrodEstimate, KronrodRule};
pub use newton_cotes::{newton_cotes, NewtonCotesRule, NewtonCotesSettings};
pub use qag::{qag, qag_with_workspace, QagSettings, QuadWorkspace};
pub use riemann::{riemann, riemann_sum, RiemannKind, RiemannSum};
pub use romberg::{romberg, RombergSettings};

use core::fmt;

/// Errors from quadrature routines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuadError {
    /// Settings cannot be used as given (node count not divisible as the
    /// rule requires, zero subdivision limit, unreachable tolerance).
    InvalidConfig,
    /// An interval endpoint is NaN or infinite.
    InvalidInterval,
}

impl fmt::Display for QuadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig => write!(f, "invalid quadrature configuration"),
            Self::InvalidInterval => write!(f, "integration interval is not finite"),
        }
    }
}

impl std::error::Error for QuadError {}

/// Outcome of an iterative integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadStatus {
    /// Requested accuracy reached.
    Converged,
    /// Iteration or subdivision limit reached first.
    MaxIterations,
    /// Round-off error prevents reaching the tolerance.
    Roundoff,
    /// A subinterval shrank to machine precision; the integrand probably
    /// has a singularity.
    BadIntegrand,
}

impl QuadStatus {
    pub fn is_converged(self) -> bool {
        self == Self::Converged
    }
}

impl fmt::Display for QuadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Converged => write!(f, "converged"),
            Self::MaxIterations => write!(f, "maximum number of subdivisions reached"),
            Self::Roundoff => write!(f, "roundoff error prevents tolerance from being achieved"),
            Self::BadIntegrand => write!(f, "bad integrand behavior found in the integration interval"),
        }
    }
}

/// Result of an iterative integration.
#[derive(Debug, Clone, Copy)]
pub struct QuadResult {
    /// Approximate integral.
    pub value: f64,
    /// Estimated absolute error.
    pub abs_error: f64,
    /// Number of integrand evaluations.
    pub evals: usize,
    /// Romberg levels, or subintervals for [`qag`].
    pub iterations: usize,
    pub status: QuadStatus,
}

/// Integral of `f` over `[a, b]` with the default adaptive integrator.
///
/// Equivalent to [`qag`] with [`QagSettings::default()`]. Returns the best
/// estimate even if the tolerance was not met (a warning is logged), and
/// NaN for a non-finite interval.
pub fn integrate<F: Fn(f64) -> f64>(a: f64, b: f64, f: F) -> f64 {
    match qag(a, b, f, &QagSettings::default()) {
        Ok(res) => res.value,
        Err(e) => {
            log::debug!("integrate: {e} on [{a}, {b}]");
            f64::NAN
        }
    }
}

#[inline]
pub(crate) fn check_interval(a: f64, b: f64) -> Result<(), QuadError> {
    if a.is_finite() && b.is_finite() {
        Ok(())
    } else {
        Err(QuadError::InvalidInterval)
    }
}
