//! Numerical differentiation by symmetric differences.
//!
//! The step is fixed at `h = 1e-5`, which balances truncation and
//! cancellation error for functions of moderate scale. Both [`crate::optim::newton`]
//! and [`crate::optim::generalized_newton`] differentiate through here.
//!
//! ```
//! use geonum::diff::{derivative, differentiate};
//!
//! let d = derivative(f64::sin, 0.0);
//! assert!((d - 1.0).abs() < 1e-9);
//!
//! let dcube = differentiate(|x: f64| x * x * x);
//! assert!((dcube(2.0) - 12.0).abs() < 1e-8);
//! ```

/// Difference step.
pub const STEP: f64 = 1e-5;

/// Symmetric difference quotient `(f(x + h) - f(x - h)) / 2h`.
#[inline]
pub fn derivative<F: Fn(f64) -> f64>(f: F, x: f64) -> f64 {
    (f(x + STEP) - f(x - STEP)) * (0.5 / STEP)
}

/// The derivative of `f` as a new function.
pub fn differentiate<F: Fn(f64) -> f64>(f: F) -> impl Fn(f64) -> f64 {
    move |x| derivative(&f, x)
}
