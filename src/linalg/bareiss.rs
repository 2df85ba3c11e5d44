use crate::linalg::pivot_tol;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Determinant by fraction-free Gauss-Bareiss elimination.
///
/// Works on the leading `n x n` block, `n = min(nrows, ncols)`, of a copy of
/// `m`. A numerically zero pivot is replaced by swapping in the next row
/// with a usable entry in that column, flipping the sign. If the whole
/// remaining column is zero the matrix is singular and `0` is returned.
/// The empty matrix has determinant `0`; a row array with rows of unequal
/// length has no determinant and yields NaN.
///
/// Reference: H. Cohen, *A Course in Computational Algebraic Number
/// Theory*, Algorithm 2.2.6.
pub fn gauss_bareiss<T: FloatScalar>(m: &impl MatrixRef<T>) -> T {
    if !m.is_rectangular() {
        return T::nan();
    }
    let n = m.nrows().min(m.ncols());
    if n == 0 {
        return T::zero();
    }

    let mut w = Matrix::from_fn(n, n, |i, j| *m.get(i, j));
    let mut scale = T::zero();
    for &v in w.as_slice() {
        if v.abs() > scale {
            scale = v.abs();
        }
    }
    let eps = pivot_tol(scale);

    let mut c = T::one();
    let mut sign = T::one();

    for k in 0..n - 1 {
        let mut p = w[(k, k)];

        if p.abs() < eps {
            let Some(i) = ((k + 1)..n).find(|&i| w[(i, k)].abs() >= eps) else {
                return T::zero();
            };
            // columns left of k are no longer read
            for j in k..n {
                let t = w[(i, j)];
                w[(i, j)] = w[(k, j)];
                w[(k, j)] = t;
            }
            sign = -sign;
            p = w[(k, k)];
        }

        for i in (k + 1)..n {
            for j in (k + 1)..n {
                let t = p * w[(i, j)] - w[(i, k)] * w[(k, j)];
                *w.get_mut(i, j) = t / c;
            }
        }
        c = p;
    }

    sign * w[(n - 1, n - 1)]
}

/// Determinant of a square matrix.
///
/// `2 x 2` matrices use the closed form `ad - bc`; everything else goes
/// through [`gauss_bareiss`]. A singular matrix yields `0`, never an error;
/// a ragged row array yields NaN.
///
/// ```
/// use geonum::linalg::det;
///
/// let m = vec![vec![3.0_f64, 8.0], vec![4.0, 6.0]];
/// assert_eq!(det(&m), -14.0);
///
/// let m = vec![
///     vec![6.0_f64, 1.0, 1.0],
///     vec![4.0, -2.0, 5.0],
///     vec![2.0, 8.0, 7.0],
/// ];
/// assert!((det(&m) + 306.0).abs() < 1e-9);
/// ```
pub fn det<T: FloatScalar>(m: &impl MatrixRef<T>) -> T {
    if m.nrows() == 2 && m.ncols() == 2 && m.is_rectangular() {
        return *m.get(0, 0) * *m.get(1, 1) - *m.get(1, 0) * *m.get(0, 1);
    }
    gauss_bareiss(m)
}
