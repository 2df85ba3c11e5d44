use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by the elimination and rotation routines in [`crate::linalg`],
/// which need `abs`, `sqrt` and the trigonometric functions.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Lets the linear algebra routines run on [`crate::Matrix`] as well as on
/// plain arrays of rows.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;

    /// Whether every row holds exactly `ncols()` entries.
    #[inline]
    fn is_rectangular(&self) -> bool {
        true
    }
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access and row swaps, enabling
/// the in-place elimination routines to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;

    /// Swap two rows in place.
    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        if a == b {
            return;
        }
        for j in 0..self.ncols() {
            let tmp = *self.get(a, j);
            *self.get_mut(a, j) = *self.get(b, j);
            *self.get_mut(b, j) = tmp;
        }
    }
}

/// Row arrays: `m[i][j]` is row `i`, column `j`.
///
/// The column count is taken from the first row. Ragged arrays report
/// `is_rectangular() == false` and are rejected by the routines in
/// [`crate::linalg`].
impl<T> MatrixRef<T> for Vec<Vec<T>> {
    #[inline]
    fn nrows(&self) -> usize {
        self.len()
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.first().map_or(0, Vec::len)
    }

    #[inline]
    fn get(&self, row: usize, col: usize) -> &T {
        &self[row][col]
    }

    fn is_rectangular(&self) -> bool {
        let n = self.ncols();
        self.iter().all(|row| row.len() == n)
    }
}

impl<T> MatrixMut<T> for Vec<Vec<T>> {
    #[inline]
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T {
        &mut self[row][col]
    }

    fn swap_rows(&mut self, a: usize, b: usize)
    where
        T: Copy,
    {
        self.swap(a, b);
    }
}

/// A point in the plane whose coordinates are read through accessors.
///
/// The curve builders in [`crate::interp`] only ever read points; a point
/// that moves between two `update` calls is picked up on the next update.
pub trait PlanePoint {
    fn x(&self) -> f64;
    fn y(&self) -> f64;

    /// Euclidean distance to another point.
    fn dist<P: PlanePoint + ?Sized>(&self, other: &P) -> f64 {
        let dx = self.x() - other.x();
        let dy = self.y() - other.y();
        (dx * dx + dy * dy).sqrt()
    }
}

impl PlanePoint for [f64; 2] {
    #[inline]
    fn x(&self) -> f64 {
        self[0]
    }

    #[inline]
    fn y(&self) -> f64 {
        self[1]
    }
}

impl PlanePoint for (f64, f64) {
    #[inline]
    fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    fn y(&self) -> f64 {
        self.1
    }
}

impl<P: PlanePoint + ?Sized> PlanePoint for &P {
    #[inline]
    fn x(&self) -> f64 {
        (**self).x()
    }

    #[inline]
    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// A plane curve given by coordinate functions of one parameter.
pub trait ParametricCurve {
    fn x(&self, t: f64) -> f64;
    fn y(&self, t: f64) -> f64;
}

/// A pair of closures `(x(t), y(t))` is a curve.
impl<FX, FY> ParametricCurve for (FX, FY)
where
    FX: Fn(f64) -> f64,
    FY: Fn(f64) -> f64,
{
    #[inline]
    fn x(&self, t: f64) -> f64 {
        (self.0)(t)
    }

    #[inline]
    fn y(&self, t: f64) -> f64 {
        (self.1)(t)
    }
}
