//! # geonum
//!
//! Numerical kernel for interactive geometry and function plotting. Every
//! routine works on plain numbers, slices and closures `f(x) -> f64`, runs
//! to completion on the calling thread, and signals structural misuse
//! through `Result` while reporting non-convergence as a best-effort value
//! plus a `log::warn!` diagnostic.
//!
//! ## Quick start
//!
//! ```
//! use geonum::linalg::solve;
//! use geonum::quad::integrate;
//!
//! // 2x +  y = 5
//! //  x + 3y = 10
//! let a = vec![vec![2.0_f64, 1.0], vec![1.0, 3.0]];
//! let x = solve(&a, &[5.0, 10.0]).unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-12 && (x[1] - 3.0).abs() < 1e-12);
//!
//! let area = integrate(0.0, 1.0, |x| x * x);
//! assert!((area - 1.0 / 3.0).abs() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Heap-allocated row-major `Matrix<T>` with runtime
//!   dimensions, multiplication and convenience `solve` / `det` /
//!   `jacobi_eigen` methods.
//!
//! - [`linalg`] — Gaussian elimination with back-substitution, Bareiss
//!   fraction-free determinants, and the cyclic Jacobi eigensolver for
//!   symmetric matrices. Free functions accept anything implementing
//!   [`MatrixRef`] / [`MatrixMut`], including `Vec<Vec<T>>` row arrays.
//!
//! - [`quad`] — Newton-Cotes, Romberg, Gauss-Legendre, Riemann sums and
//!   adaptive Gauss-Kronrod quadrature.
//!
//! - [`diff`] — Symmetric-difference derivatives.
//!
//! - [`optim`] — Bracketing, Newton, Brent and Chandrupatla root finding,
//!   Brent's local and global minimizers, and Newton intersection of two
//!   parametric curves. Requires `optim` feature.
//!
//! - [`ode`] — Explicit Runge-Kutta integration driven by a Butcher
//!   tableau, with Euler, Heun and RK4 presets. Requires `ode` feature.
//!
//! - [`interp`] — Lagrange, natural cubic spline, cardinal spline, Bezier
//!   and B-spline curves through points, and least-squares regression
//!   polynomials.
//!
//! - [`poly`] — Complex roots of real or complex polynomials by the Aberth–Ehrlich
//!   iteration. Requires `complex` feature.
//!
//! - [`simplify`] — Ramer–Douglas–Peucker and Visvalingam–Whyatt polyline
//!   simplification.
//!
//! - [`traits`] — Element and accessor traits:
//!   - [`Scalar`] / [`FloatScalar`] — matrix elements
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!   - [`PlanePoint`] — read-only 2D points consumed by curve builders
//!   - [`ParametricCurve`] — curves `t ↦ (x(t), y(t))`
//!
//! ## Cargo features
//!
//! | Feature   | Default | Description |
//! |-----------|---------|-------------|
//! | `ode`     | yes     | Runge-Kutta integration |
//! | `optim`   | yes     | Root finding, minimization, curve intersection |
//! | `complex` | yes     | Polynomial roots via `num-complex` |
//! | `all`     | no      | All of the above |

pub mod diff;
pub mod interp;
pub mod linalg;
pub mod matrix;
#[cfg(feature = "ode")]
pub mod ode;
#[cfg(feature = "optim")]
pub mod optim;
#[cfg(feature = "complex")]
pub mod poly;
pub mod quad;
pub mod simplify;
pub mod traits;

pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, ParametricCurve, PlanePoint, Scalar};

#[cfg(feature = "complex")]
pub use num_complex::Complex;

/// Default geometric tolerance.
///
/// Stopping threshold of curve intersection and of Newton's method,
/// degenerate-chord guard in polyline simplification and centripetal
/// splines, and the accuracy a root found by minimizing `|f|` must reach to
/// count as converged.
pub const EPS: f64 = 1e-6;
