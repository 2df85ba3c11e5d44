use core::ops::Mul;

use crate::traits::Scalar;

use super::Matrix;

// ── Matrix multiply ─────────────────────────────────────────────────

impl<T: Scalar> Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: &Matrix<T>) -> Matrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let mut out = Matrix::zeros(self.nrows, rhs.ncols);
        for i in 0..self.nrows {
            for k in 0..self.ncols {
                let a = self[(i, k)];
                for j in 0..rhs.ncols {
                    out[(i, j)] = out[(i, j)] + a * rhs[(k, j)];
                }
            }
        }
        out
    }
}

impl<T: Scalar> Mul for Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: Matrix<T>) -> Matrix<T> {
        &self * &rhs
    }
}

// ── Matrix * vector ─────────────────────────────────────────────────

impl<T: Scalar> Matrix<T> {
    /// Matrix-vector product `A·v`.
    ///
    /// ```
    /// use geonum::Matrix;
    /// let a = Matrix::from_rows(2, 2, &[1.0_f64, 2.0, 3.0, 4.0]);
    /// assert_eq!(a.mul_vec(&[1.0, 1.0]), vec![3.0, 7.0]);
    /// ```
    pub fn mul_vec(&self, v: &[T]) -> Vec<T> {
        assert_eq!(
            self.ncols,
            v.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows,
            self.ncols,
            v.len(),
        );
        (0..self.nrows)
            .map(|i| {
                self.row(i)
                    .iter()
                    .zip(v)
                    .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matmul() {
        let a = Matrix::from_rows(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Matrix::from_rows(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0]);
        let c = &a * &b;
        assert_eq!(c.nrows(), 2);
        assert_eq!(c.ncols(), 2);
        assert_eq!(c.as_slice(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn matmul_identity() {
        let a = Matrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let c = a.clone() * Matrix::eye(2);
        assert_eq!(c, a);
    }

    #[test]
    #[should_panic(expected = "dimension mismatch")]
    fn matmul_mismatch() {
        let a = Matrix::<f64>::zeros(2, 3);
        let b = Matrix::<f64>::zeros(2, 3);
        let _ = &a * &b;
    }

    #[test]
    fn mul_vec() {
        let a = Matrix::from_rows(2, 3, &[1.0, 0.0, 2.0, 0.0, 3.0, 1.0]);
        assert_eq!(a.mul_vec(&[1.0, 2.0, 3.0]), vec![7.0, 9.0]);
    }
}
