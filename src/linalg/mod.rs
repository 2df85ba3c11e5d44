//! Dense linear algebra for small systems.
//!
//! Gauss-Jordan solve with on-demand pivoting, back-substitution, the
//! fraction-free Gauss-Bareiss determinant and the cyclic Jacobi
//! eigen-solver for symmetric matrices.
//!
//! Every routine is generic over [`MatrixRef`](crate::traits::MatrixRef) /
//! [`MatrixMut`](crate::traits::MatrixMut), so it accepts a
//! [`Matrix`](crate::Matrix) as well as a plain `Vec<Vec<T>>` of rows.
//!
//! Routines ending in `_in_place` overwrite their arguments. The other entry
//! points work on copies and leave the inputs untouched.

pub(crate) mod bareiss;
pub(crate) mod gauss;
pub(crate) mod jacobi;

pub use bareiss::{det, gauss_bareiss};
pub use gauss::{back_substitute, back_substitute_in_place, solve, solve_in_place};
pub use jacobi::{jacobi_eigen, JacobiEigen, JacobiSettings};

use crate::traits::FloatScalar;

/// Errors from linear algebra operations.
///
/// ```
/// use geonum::linalg::{solve, LinalgError};
///
/// let singular = vec![vec![1.0_f64, 2.0], vec![2.0, 4.0]];
/// assert_eq!(solve(&singular, &[1.0, 2.0]).unwrap_err(), LinalgError::Singular);
///
/// let square = vec![vec![1.0_f64, 0.0], vec![0.0, 1.0]];
/// assert_eq!(
///     solve(&square, &[1.0, 2.0, 3.0]).unwrap_err(),
///     LinalgError::DimensionMismatch
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is not square or the right-hand side has the wrong length.
    DimensionMismatch,
    /// No usable pivot was found in some column.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::DimensionMismatch => write!(f, "matrix and vector dimensions do not match"),
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl std::error::Error for LinalgError {}

/// Pivot tolerance for an elimination on entries of magnitude up to `scale`.
///
/// `1e-12` relative for `f64`; a few ulps relative for `f32`.
#[inline]
pub(crate) fn pivot_tol<T: FloatScalar>(scale: T) -> T {
    let floor = T::from(1e-12).unwrap_or_else(T::epsilon);
    let ulps = T::epsilon() * T::from(16.0).unwrap_or_else(T::one);
    scale * if ulps > floor { ulps } else { floor }
}
