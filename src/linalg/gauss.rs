use crate::linalg::{pivot_tol, LinalgError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Solve `A x = b` by Gaussian elimination followed by back-substitution.
///
/// `A` and `b` are copied; neither is modified. See [`solve_in_place`] for
/// the algorithm.
///
/// ```
/// use geonum::linalg::solve;
///
/// // 3x + 2y = 7
/// //  x + 4y = 9
/// let a = vec![vec![3.0_f64, 2.0], vec![1.0, 4.0]];
/// let x = solve(&a, &[7.0, 9.0]).unwrap();
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
pub fn solve<T: FloatScalar>(a: &impl MatrixRef<T>, b: &[T]) -> Result<Vec<T>, LinalgError> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n || !a.is_rectangular() {
        return Err(LinalgError::DimensionMismatch);
    }
    let mut work = Matrix::from_fn(n, n, |i, j| *a.get(i, j));
    let mut x = b.to_vec();
    solve_in_place(&mut work, &mut x)?;
    Ok(x)
}

/// Solve `A x = b` in place.
///
/// Column by column, entries below the diagonal are eliminated from the
/// bottom row upwards. Rows are exchanged only when the current pivot is
/// numerically zero, in which case the row holding the entry being
/// eliminated takes its place. A column whose pivot stays below the
/// tolerance (about `1e-12` relative to the largest entry) is reported as
/// [`LinalgError::Singular`].
///
/// On success `b` holds the solution and `a` holds the upper triangle `U`
/// with the elimination multipliers below the diagonal. On error both are
/// left in a partially-eliminated state.
pub fn solve_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    b: &mut [T],
) -> Result<(), LinalgError> {
    let n = a.nrows();
    if a.ncols() != n || b.len() != n || !a.is_rectangular() {
        return Err(LinalgError::DimensionMismatch);
    }

    let mut scale = T::zero();
    for i in 0..n {
        for j in 0..n {
            let v = a.get(i, j).abs();
            if v > scale {
                scale = v;
            }
        }
    }
    let eps = pivot_tol(scale);

    for j in 0..n {
        for i in ((j + 1)..n).rev() {
            if a.get(i, j).abs() <= eps {
                continue;
            }
            if a.get(j, j).abs() < eps {
                a.swap_rows(i, j);
                b.swap(i, j);
            } else {
                let factor = *a.get(i, j) / *a.get(j, j);
                *a.get_mut(i, j) = factor;
                b[i] = b[i] - factor * b[j];
                for k in (j + 1)..n {
                    let ajk = *a.get(j, k);
                    let aik = a.get_mut(i, k);
                    *aik = *aik - factor * ajk;
                }
            }
        }

        // everything below the diagonal in column j is now negligible
        if a.get(j, j).abs() < eps {
            return Err(LinalgError::Singular);
        }
    }

    back_substitute_in_place(a, b)
}

/// Solve the upper-triangular system `R x = b`.
///
/// Entries of `R` below the diagonal are ignored. `b` is copied.
///
/// ```
/// use geonum::linalg::back_substitute;
///
/// let r = vec![vec![2.0_f64, 1.0], vec![0.0, 4.0]];
/// let x = back_substitute(&r, &[5.0, 8.0]).unwrap();
/// assert_eq!(x, vec![1.5, 2.0]);
/// ```
pub fn back_substitute<T: FloatScalar>(
    r: &impl MatrixRef<T>,
    b: &[T],
) -> Result<Vec<T>, LinalgError> {
    let mut x = b.to_vec();
    back_substitute_in_place(r, &mut x)?;
    Ok(x)
}

/// Solve the upper-triangular system `R x = b`, overwriting `b` with `x`.
///
/// `R` may have more columns than rows only if `b` is long enough to cover
/// them; the trailing unknowns are then taken as already known.
pub fn back_substitute_in_place<T: FloatScalar>(
    r: &impl MatrixRef<T>,
    b: &mut [T],
) -> Result<(), LinalgError> {
    let m = r.nrows();
    let n = r.ncols();
    if m > n || b.len() < n || !r.is_rectangular() {
        return Err(LinalgError::DimensionMismatch);
    }

    for i in (0..m).rev() {
        let mut xi = b[i];
        for j in ((i + 1)..n).rev() {
            xi = xi - *r.get(i, j) * b[j];
        }
        let d = *r.get(i, i);
        if d == T::zero() {
            return Err(LinalgError::Singular);
        }
        b[i] = xi / d;
    }
    Ok(())
}
