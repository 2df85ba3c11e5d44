//! Curve interpolation and approximation through plane points.
//!
//! - [`NevilleCurve`] — parametric Lagrange curve through points at parameter
//!   nodes `0, 1, …, n-1`
//! - [`LagrangePolynomial`] — interpolating polynomial `y(x)` in barycentric
//!   form, with monomial [`coefficients`](LagrangePolynomial::coefficients)
//!   for display
//! - [`natural_cubic_spline`] / [`spline_eval`] — second-derivative solve and
//!   per-segment evaluation of a natural cubic spline, also bundled as
//!   [`NaturalCubicSpline`]
//! - [`CardinalSpline`] — Hermite segments with tension `tau`, uniform or
//!   centripetal tangents; `tau = 0.5` is Catmull-Rom
//! - [`BezierCurve`] — piecewise cubic Bezier, consecutive segments share an
//!   endpoint
//! - [`BSplineCurve`] — B-spline of a given order over a clamped knot vector
//! - [`RegressionPolynomial`] — least-squares polynomial fit
//!
//! Curve builders hold their points and a table of precomputed coefficients.
//! Points are only read, through [`PlanePoint`]; calling `update()` re-reads
//! them and rebuilds the table, so a builder over references to movable
//! points follows the points. Every curve implements
//! [`ParametricCurve`](crate::ParametricCurve) and can be handed to the
//! curve intersection routine.
//!
//! # Example
//!
//! ```
//! use geonum::interp::{CardinalKind, CardinalSpline};
//!
//! let pts = [[0.0, 0.0], [1.0, 2.0], [3.0, 1.0], [4.0, 3.0]];
//! let spline = CardinalSpline::catmull_rom(pts.to_vec(), CardinalKind::Uniform).unwrap();
//!
//! assert_eq!(spline.domain(), (0.0, 3.0));
//! assert_eq!(spline.eval(1.0), [1.0, 2.0]);
//! let [x, _y] = spline.eval(1.5);
//! assert!(x > 1.0 && x < 3.0);
//! ```

mod bezier;
mod bspline;
mod cardinal;
mod lagrange;
mod regression;
mod spline;

#[cfg(test)]
mod tests;

pub use bezier::BezierCurve;
pub use bspline::BSplineCurve;
pub use cardinal::{CardinalKind, CardinalSpline};
pub use lagrange::{LagrangePolynomial, NevilleCurve};
pub use regression::RegressionPolynomial;
pub use spline::{natural_cubic_spline, spline_eval, spline_eval_many, NaturalCubicSpline};

use crate::traits::PlanePoint;
use core::fmt;

/// Errors from curve construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InterpError {
    /// Not enough points for the method.
    TooFewPoints,
    /// Coordinate arrays have different lengths.
    LengthMismatch,
    /// Two interpolation nodes share an abscissa.
    DuplicateNodes,
    /// The least-squares normal equations are singular.
    Singular,
}

impl fmt::Display for InterpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpError::TooFewPoints => write!(f, "not enough points for interpolation"),
            InterpError::LengthMismatch => write!(f, "x and y arrays must have the same length"),
            InterpError::DuplicateNodes => write!(f, "interpolation nodes must have distinct x values"),
            InterpError::Singular => write!(f, "regression normal equations are singular"),
        }
    }
}

impl std::error::Error for InterpError {}

/// A scalar curve parameter that is either fixed or read on every update.
///
/// Used for the tension of a [`CardinalSpline`] and the degree of a
/// [`RegressionPolynomial`], which may follow a slider in the host
/// application.
///
/// ```
/// use std::cell::Cell;
/// use geonum::interp::Param;
///
/// let slider = Cell::new(2.0);
/// let degree = Param::live(|| slider.get());
/// assert_eq!(degree.value(), 2.0);
/// slider.set(3.0);
/// assert_eq!(degree.value(), 3.0);
/// assert_eq!(Param::from(0.5).value(), 0.5);
/// ```
pub enum Param<'a> {
    Fixed(f64),
    Live(Box<dyn Fn() -> f64 + 'a>),
}

impl<'a> Param<'a> {
    /// A parameter read from `f` each time it is needed.
    pub fn live(f: impl Fn() -> f64 + 'a) -> Self {
        Param::Live(Box::new(f))
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        match self {
            Param::Fixed(v) => *v,
            Param::Live(f) => f(),
        }
    }
}

impl From<f64> for Param<'_> {
    fn from(v: f64) -> Self {
        Param::Fixed(v)
    }
}

impl fmt::Debug for Param<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Param::Live(_) => f.debug_tuple("Live").field(&self.value()).finish(),
        }
    }
}

/// Render a polynomial as a term string, highest power first.
///
/// `coeffs[i]` is the coefficient of `var^i`; coefficients beyond the end of
/// the slice are written as zero. Each coefficient is printed with `prec`
/// significant digits, in parentheses:
///
/// ```
/// use geonum::interp::polynomial_term;
///
/// assert_eq!(polynomial_term(&[1.0, -2.5, 0.125], 2, "x", 3), "(0.125)*x^2 + (-2.50)*x + (1.00)");
/// ```
pub fn polynomial_term(coeffs: &[f64], deg: usize, var: &str, prec: usize) -> String {
    let mut term = String::new();
    for i in (0..=deg).rev() {
        let c = coeffs.get(i).copied().unwrap_or(0.0);
        term.push('(');
        term.push_str(&to_precision(c, prec));
        term.push(')');
        match i {
            0 => {}
            1 => {
                term.push('*');
                term.push_str(var);
                term.push_str(" + ");
            }
            _ => {
                term.push('*');
                term.push_str(var);
                term.push('^');
                term.push_str(&i.to_string());
                term.push_str(" + ");
            }
        }
    }
    term
}

/// Format `v` with `prec` significant digits, switching to exponent
/// notation for very large or very small magnitudes.
fn to_precision(v: f64, prec: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    let prec = prec.max(1);
    let sci = format!("{:.*e}", prec - 1, v);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => return sci,
    };
    if exp < -6 || exp >= prec as i32 {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{}", exp.abs())
    } else {
        let decimals = (prec as i32 - 1 - exp).max(0) as usize;
        format!("{v:.decimals$}")
    }
}

/// Read the current coordinates of every point.
fn snapshot<P: PlanePoint>(points: &[P]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x(), p.y()]).collect()
}
