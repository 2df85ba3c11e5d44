use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixRef};
use crate::Matrix;

/// Settings for [`jacobi_eigen`].
#[derive(Debug, Clone, Copy)]
pub struct JacobiSettings {
    /// Convergence threshold. Sweeping stops once the sum of absolute
    /// off-diagonal entries, relative to the mean absolute entry of the
    /// input, drops to `eps²`.
    pub eps: f64,
    /// Maximum number of full sweeps.
    pub max_sweeps: usize,
}

impl Default for JacobiSettings {
    fn default() -> Self {
        Self {
            eps: 1e-6,
            max_sweeps: 2000,
        }
    }
}

/// Eigen-decomposition `A = V D Vᵀ` of a symmetric matrix.
#[derive(Debug, Clone)]
pub struct JacobiEigen<T> {
    /// Rotated matrix; its diagonal holds the eigenvalues.
    pub d: Matrix<T>,
    /// Orthogonal matrix whose columns are the eigenvectors.
    pub v: Matrix<T>,
    /// Number of sweeps performed.
    pub sweeps: usize,
    /// Whether the off-diagonal residual reached the threshold.
    pub converged: bool,
}

impl<T: FloatScalar> JacobiEigen<T> {
    /// Eigenvalues, in the order of the columns of `v`.
    pub fn eigenvalues(&self) -> Vec<T> {
        (0..self.d.nrows()).map(|i| self.d[(i, i)]).collect()
    }

    /// Eigenvector for `eigenvalues()[i]`.
    pub fn eigenvector(&self, i: usize) -> Vec<T> {
        self.v.col(i)
    }
}

/// Cyclic Jacobi eigen-decomposition of a small symmetric matrix.
///
/// Each sweep visits every pair `(i, j)` above the diagonal and zeroes
/// `A[i][j]` with the plane rotation of angle
/// `atan2(2 A[i][j], A[i][i] - A[j][j]) / 2`, applied from both sides and
/// accumulated into `V`. Only the upper triangle of the input is read.
///
/// A `1 x 1` or all-zero matrix is returned as is with `V = I`. Hitting
/// `max_sweeps` is not an error: the current decomposition is returned with
/// `converged == false` and a warning is logged.
///
/// ```
/// use geonum::linalg::{jacobi_eigen, JacobiSettings};
///
/// let a = vec![vec![2.0_f64, 1.0], vec![1.0, 2.0]];
/// let eig = jacobi_eigen(&a, &JacobiSettings::default()).unwrap();
/// let mut ev = eig.eigenvalues();
/// ev.sort_by(|a, b| a.total_cmp(b));
/// assert!((ev[0] - 1.0).abs() < 1e-10);
/// assert!((ev[1] - 3.0).abs() < 1e-10);
/// ```
pub fn jacobi_eigen<T: FloatScalar>(
    a: &impl MatrixRef<T>,
    settings: &JacobiSettings,
) -> Result<JacobiEigen<T>, LinalgError> {
    let n = a.nrows();
    if a.ncols() != n || !a.is_rectangular() {
        return Err(LinalgError::DimensionMismatch);
    }

    // symmetric copy from the upper triangle
    let mut d = Matrix::from_fn(n, n, |i, j| if i <= j { *a.get(i, j) } else { *a.get(j, i) });
    let mut v = Matrix::eye(n);

    let mut total = T::zero();
    for &x in d.as_slice() {
        total = total + x.abs();
    }

    if n <= 1 || total <= T::zero() {
        return Ok(JacobiEigen {
            d,
            v,
            sweeps: 0,
            converged: true,
        });
    }

    let nn = T::from(n * n).unwrap_or_else(T::one);
    let mean = total / nn;
    let eps = T::from(settings.eps).unwrap_or_else(T::epsilon);
    let tol = eps * eps;
    // below this no rotation can matter for the stopping test
    let skip = tol * mean / nn;
    let half = T::from(0.5).unwrap_or_else(T::one);
    let two = T::one() + T::one();

    let mut sweeps = 0;
    let mut converged = false;

    while sweeps < settings.max_sweeps {
        let mut off = T::zero();
        for j in 1..n {
            for i in 0..j {
                let aij = d[(i, j)];
                off = off + aij.abs();
                if aij.abs() <= skip {
                    continue;
                }

                let theta = (two * aij).atan2(d[(i, i)] - d[(j, j)]) * half;
                let (s, c) = theta.sin_cos();

                // columns i and j
                for k in 0..n {
                    let dki = d[(k, i)];
                    let dkj = d[(k, j)];
                    d[(k, i)] = c * dki + s * dkj;
                    d[(k, j)] = c * dkj - s * dki;

                    let vki = v[(k, i)];
                    let vkj = v[(k, j)];
                    v[(k, i)] = c * vki + s * vkj;
                    v[(k, j)] = c * vkj - s * vki;
                }
                // rows i and j
                for k in 0..n {
                    let dik = d[(i, k)];
                    let djk = d[(j, k)];
                    d[(i, k)] = c * dik + s * djk;
                    d[(j, k)] = c * djk - s * dik;
                }
                d[(i, j)] = T::zero();
                d[(j, i)] = T::zero();
            }
        }
        sweeps += 1;

        if off / mean <= tol {
            converged = true;
            break;
        }
    }

    if !converged {
        log::warn!(
            "jacobi_eigen: off-diagonal residual above {:e} after {} sweeps",
            settings.eps * settings.eps,
            sweeps
        );
    }

    Ok(JacobiEigen {
        d,
        v,
        sweeps,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_decomposition(a: &[Vec<f64>], eig: &JacobiEigen<f64>, tol: f64) {
        let n = a.len();
        for col in 0..n {
            let lambda = eig.d[(col, col)];
            let vc = eig.eigenvector(col);
            for row in 0..n {
                let av: f64 = (0..n).map(|k| a[row][k] * vc[k]).sum();
                assert!(
                    (av - lambda * vc[row]).abs() < tol,
                    "A v != lambda v in column {col}, row {row}: {av} vs {}",
                    lambda * vc[row]
                );
            }
        }
        let vtv = &eig.v.transpose() * &eig.v;
        for i in 0..n {
            for j in 0..n {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((vtv[(i, j)] - expected).abs() < tol);
            }
        }
    }

    #[test]
    fn symmetric_3x3() {
        let a = vec![
            vec![4.0_f64, 1.0, -2.0],
            vec![1.0, 2.0, 0.0],
            vec![-2.0, 0.0, 3.0],
        ];
        let eig = jacobi_eigen(&a, &JacobiSettings::default()).unwrap();
        assert!(eig.converged);
        let trace: f64 = eig.eigenvalues().iter().sum();
        assert!((trace - 9.0).abs() < 1e-10);
        check_decomposition(&a, &eig, 1e-8);
    }

    #[test]
    fn already_diagonal() {
        let a = vec![
            vec![5.0_f64, 0.0, 0.0],
            vec![0.0, -1.0, 0.0],
            vec![0.0, 0.0, 2.0],
        ];
        let eig = jacobi_eigen(&a, &JacobiSettings::default()).unwrap();
        assert_eq!(eig.eigenvalues(), vec![5.0, -1.0, 2.0]);
        assert_eq!(eig.v, Matrix::eye(3));
        assert_eq!(eig.sweeps, 1);
    }

    #[test]
    fn trivial_inputs() {
        let one = vec![vec![7.0_f64]];
        let eig = jacobi_eigen(&one, &JacobiSettings::default()).unwrap();
        assert_eq!(eig.eigenvalues(), vec![7.0]);
        assert_eq!(eig.sweeps, 0);

        let zero = Matrix::<f64>::zeros(3, 3);
        let eig = jacobi_eigen(&zero, &JacobiSettings::default()).unwrap();
        assert_eq!(eig.v, Matrix::eye(3));
        assert!(eig.converged);
        assert_eq!(eig.sweeps, 0);
    }

    #[test]
    fn larger_matrix() {
        // Hilbert-like symmetric 5x5
        let a: Vec<Vec<f64>> = (0..5)
            .map(|i| (0..5).map(|j| 1.0 / (i + j + 1) as f64).collect())
            .collect();
        let eig = jacobi_eigen(&a, &JacobiSettings::default()).unwrap();
        assert!(eig.converged);
        check_decomposition(&a, &eig, 1e-8);
    }

    #[test]
    fn sweep_cap_reports_non_convergence() {
        let a = vec![
            vec![1.0_f64, 2.0, 3.0],
            vec![2.0, 4.0, 5.0],
            vec![3.0, 5.0, 6.0],
        ];
        let settings = JacobiSettings {
            eps: 1e-6,
            max_sweeps: 1,
        };
        let eig = jacobi_eigen(&a, &settings).unwrap();
        assert_eq!(eig.sweeps, 1);
        assert!(!eig.converged);
    }

    #[test]
    fn not_square() {
        let a = vec![vec![1.0_f64, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            jacobi_eigen(&a, &JacobiSettings::default()).unwrap_err(),
            LinalgError::DimensionMismatch
        );
    }

    #[test]
    fn ragged_rows_rejected() {
        let a = vec![
            vec![1.0_f64, 2.0, 3.0],
            vec![2.0, 4.0],
            vec![3.0, 5.0, 6.0],
        ];
        assert_eq!(
            jacobi_eigen(&a, &JacobiSettings::default()).unwrap_err(),
            LinalgError::DimensionMismatch
        );
    }
}
