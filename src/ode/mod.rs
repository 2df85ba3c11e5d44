//! Fixed-step explicit Runge-Kutta integration.
//!
//! A method is described by its [`ButcherTableau`]. Three presets are
//! provided as read-only statics and can also be looked up by name with
//! [`ButcherTableau::preset`]:
//!
//! | Preset    | Name      | Stages | Order |
//! |-----------|-----------|--------|-------|
//! | [`EULER`] | `"euler"` |      1 | 1     |
//! | [`HEUN`]  | `"heun"`  |      2 | 2     |
//! | [`RK4`]   | `"rk4"`   |      4 | 4     |
//!
//! Any other explicit method can be supplied as a tableau over caller-owned
//! coefficients.
//!
//! # Example
//!
//! ```
//! use geonum::ode::{runge_kutta, RK4};
//!
//! // harmonic oscillator x'' = -x as [x, x']
//! let tau = 2.0 * core::f64::consts::PI;
//! let path = runge_kutta(&RK4, &[1.0, 0.0], [0.0, tau], 1000, |_t, x| vec![x[1], -x[0]]).unwrap();
//! let end = &path[1000];
//! assert!((end[0] - 1.0).abs() < 1e-9);
//! assert!(end[1].abs() < 1e-9);
//! ```

mod butcher;
mod runge_kutta;


pub use butcher::{ButcherTableau, EULER, HEUN, RK4};
pub use runge_kutta::runge_kutta;

use core::fmt;

/// Errors from ODE integration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OdeError {
    /// Tableau is not square, not strictly lower triangular, or its weights
    /// do not sum to 1.
    InvalidTableau,
    /// The right-hand side returned a vector of the wrong length.
    DimensionMismatch,
}

impl fmt::Display for OdeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTableau => write!(f, "Butcher tableau does not describe an explicit method"),
            Self::DimensionMismatch => write!(f, "derivative length does not match state length"),
        }
    }
}

impl std::error::Error for OdeError {}
