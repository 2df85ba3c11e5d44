//! Complex roots of real polynomials.
//!
//! [`find_roots`] runs the Aberth–Ehrlich simultaneous iteration: every root
//! estimate takes a Newton step corrected for the repulsion of all the other
//! estimates, which converges cubically to simple roots and does not need
//! deflation. Requires the `complex` feature.
//!
//! Coefficients are given lowest power first, `coeffs[i]` multiplying `x^i`,
//! as `f64` or as `Complex<f64>`.
//!
//! # Example
//!
//! ```
//! use geonum::poly::{find_roots, PolyRootSettings};
//! use geonum::Complex;
//!
//! // x² + 1
//! let res = find_roots(&[1.0, 0.0, 1.0], &PolyRootSettings::default()).unwrap();
//! assert!(res.converged);
//! assert_eq!(res.roots.len(), 2);
//! for z in &res.roots {
//!     assert!(z.re.abs() < 1e-12);
//!     assert!((z.im.abs() - 1.0).abs() < 1e-12);
//! }
//!
//! // x - 2i
//! let res = find_roots(&[Complex::new(0.0, -2.0), Complex::new(1.0, 0.0)], &PolyRootSettings::default())
//!     .unwrap();
//! assert!((res.roots[0] - Complex::new(0.0, 2.0)).norm() < 1e-12);
//! ```

mod aberth;

#[cfg(test)]
mod tests;

pub use aberth::{eval, find_roots};

use core::fmt;
use num_complex::Complex;

/// Errors from polynomial root finding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolyError {
    /// The number of initial guesses differs from the degree left after
    /// removing roots at the origin and vanishing leading coefficients.
    GuessCount { expected: usize, got: usize },
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::GuessCount { expected, got } => {
                write!(f, "expected {expected} initial guesses, got {got}")
            }
        }
    }
}

impl std::error::Error for PolyError {}

/// Roots found by [`find_roots`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolyRoots {
    /// Roots, sorted by ascending real part, then imaginary part.
    pub roots: Vec<Complex<f64>>,
    /// Number of sweeps over all estimates.
    pub iterations: usize,
    /// `false` if some estimate was still unaccepted at `max_iter`.
    pub converged: bool,
}

/// Settings for [`find_roots`].
#[derive(Debug, Clone, PartialEq)]
pub struct PolyRootSettings {
    /// Use only `coeffs[..=degree]`. `None` uses the whole slice.
    pub degree: Option<usize>,
    /// Relative accuracy of the residual test. Default: `f64::EPSILON`.
    pub tol: f64,
    /// Maximum number of sweeps over all estimates. Default: 100.
    pub max_iter: usize,
    /// Starting estimates; Ozawa's circle is used when `None`.
    pub initial_guesses: Option<Vec<Complex<f64>>>,
}

impl Default for PolyRootSettings {
    fn default() -> Self {
        Self {
            degree: None,
            tol: f64::EPSILON,
            max_iter: 100,
            initial_guesses: None,
        }
    }
}
