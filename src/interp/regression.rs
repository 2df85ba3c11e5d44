use crate::linalg::{self, LinalgError};
use crate::traits::{ParametricCurve, PlanePoint};
use crate::Matrix;

use super::{polynomial_term, InterpError, Param};

/// Least-squares polynomial fit `y ≈ c_0 + c_1·x + … + c_d·x^d`.
///
/// The degree is a [`Param`]: `floor` of its current value is used, negative
/// values mean degree 0. [`update`](Self::update) re-reads the data and the
/// degree, builds the Vandermonde matrix `M` and solves the normal equations
/// `(MᵀM)·c = Mᵀy`.
///
/// # Example
///
/// ```
/// use geonum::interp::RegressionPolynomial;
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [1.0, 3.0, 5.0, 7.0];
/// let fit = RegressionPolynomial::from_xy(1.0, &xs, &ys).unwrap();
/// assert!((fit.eval(10.0) - 21.0).abs() < 1e-10);
/// assert_eq!(fit.term(), "(2.00)*x + (1.00)");
/// ```
#[derive(Debug)]
pub struct RegressionPolynomial<'a, P> {
    degree: Param<'a>,
    points: Vec<P>,
    deg: usize,
    coeffs: Vec<f64>,
}

impl<'a> RegressionPolynomial<'a, [f64; 2]> {
    /// Fit to separate coordinate arrays.
    pub fn from_xy(degree: impl Into<Param<'a>>, xs: &[f64], ys: &[f64]) -> Result<Self, InterpError> {
        if xs.len() != ys.len() {
            return Err(InterpError::LengthMismatch);
        }
        let points = xs.iter().zip(ys).map(|(&x, &y)| [x, y]).collect();
        Self::new(degree, points)
    }
}

impl<'a, P: PlanePoint> RegressionPolynomial<'a, P> {
    /// Fit to a point list.
    ///
    /// # Errors
    ///
    /// [`InterpError::TooFewPoints`] on an empty list,
    /// [`InterpError::Singular`] if the normal equations cannot be solved,
    /// which happens when there are fewer distinct abscissae than
    /// coefficients.
    pub fn new(degree: impl Into<Param<'a>>, points: Vec<P>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        let mut fit = Self {
            degree: degree.into(),
            points,
            deg: 0,
            coeffs: Vec::new(),
        };
        fit.update()?;
        Ok(fit)
    }

    /// Re-read the data and the degree and refit.
    pub fn update(&mut self) -> Result<(), InterpError> {
        let d = self.degree.value().floor().max(0.0) as usize;
        let xs: Vec<f64> = self.points.iter().map(PlanePoint::x).collect();
        let ys: Vec<f64> = self.points.iter().map(PlanePoint::y).collect();

        let m = Matrix::from_fn(xs.len(), d + 1, |j, i| xs[j].powi(i as i32));
        let mt = m.transpose();
        let normal = &mt * &m;
        let rhs = mt.mul_vec(&ys);
        self.coeffs = linalg::solve(&normal, &rhs).map_err(|e| match e {
            LinalgError::Singular | LinalgError::DimensionMismatch => InterpError::Singular,
        })?;
        self.deg = d;
        Ok(())
    }

    /// Value of the fitted polynomial at `x` (Horner's scheme).
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().rev().fold(0.0, |s, &c| s * x + c)
    }

    /// Degree of the current fit.
    pub fn degree(&self) -> usize {
        self.deg
    }

    /// Coefficients, constant term first.
    pub fn coefficients(&self) -> &[f64] {
        &self.coeffs
    }

    /// The fit as a term string with three significant digits.
    pub fn term(&self) -> String {
        polynomial_term(&self.coeffs, self.deg, "x", 3)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

/// The graph `(t, p(t))`.
impl<P: PlanePoint> ParametricCurve for RegressionPolynomial<'_, P> {
    fn x(&self, t: f64) -> f64 {
        t
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)
    }
}
