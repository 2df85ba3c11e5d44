use crate::linalg::{self, JacobiEigen, JacobiSettings, LinalgError};
use crate::traits::FloatScalar;

use super::Matrix;

// ── Convenience methods ─────────────────────────────────────────────

impl<T: FloatScalar> Matrix<T> {
    /// Solve `self · x = b`. See [`linalg::solve`].
    ///
    /// ```
    /// use geonum::Matrix;
    ///
    /// let a = Matrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
    /// let x = a.solve(&[4.0, 11.0]).unwrap();
    /// assert!((x[0] - 1.0).abs() < 1e-12);
    /// assert!((x[1] - 2.0).abs() < 1e-12);
    /// ```
    pub fn solve(&self, b: &[T]) -> Result<Vec<T>, LinalgError> {
        linalg::solve(self, b)
    }

    /// Determinant. See [`linalg::det`].
    pub fn det(&self) -> T {
        linalg::det(self)
    }

    /// Jacobi eigen-decomposition with default settings.
    /// See [`linalg::jacobi_eigen`].
    pub fn jacobi_eigen(&self) -> Result<JacobiEigen<T>, LinalgError> {
        linalg::jacobi_eigen(self, &JacobiSettings::default())
    }
}
