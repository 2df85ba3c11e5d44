use crate::traits::{ParametricCurve, PlanePoint};

use super::{polynomial_term, snapshot, InterpError};

/// Parametric Lagrange curve through `n` points.
///
/// Point `i` sits at parameter `t = i`, and both coordinates are interpolated
/// by the polynomial of degree `n - 1` through those nodes. With equidistant
/// nodes the barycentric weights reduce to `(-1)^i·C(n-1, i)`, so no
/// divisions are needed to build them.
///
/// # Example
///
/// ```
/// use geonum::interp::NevilleCurve;
///
/// // x = t, y = t² through three samples
/// let curve = NevilleCurve::new(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]]).unwrap();
/// let [x, y] = curve.eval(0.5);
/// assert!((x - 0.5).abs() < 1e-14);
/// assert!((y - 0.25).abs() < 1e-14);
/// assert_eq!(curve.domain(), (0.0, 2.0));
/// ```
#[derive(Debug, Clone)]
pub struct NevilleCurve<P> {
    points: Vec<P>,
    nodes: Vec<[f64; 2]>,
    weights: Vec<f64>,
}

impl<P: PlanePoint> NevilleCurve<P> {
    /// Build the curve; fails with [`InterpError::TooFewPoints`] on an empty
    /// point list.
    pub fn new(points: Vec<P>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        let mut curve = Self {
            points,
            nodes: Vec::new(),
            weights: Vec::new(),
        };
        curve.update();
        Ok(curve)
    }

    /// Re-read the points.
    pub fn update(&mut self) {
        let n = self.points.len();
        self.nodes = snapshot(&self.points);
        self.weights.clear();
        let mut w = 1.0;
        for i in 0..n {
            self.weights.push(w);
            // C(n-1, i+1) = C(n-1, i)·(n-1-i)/(i+1), alternating sign
            w = -w * (n - 1 - i) as f64 / (i + 1) as f64;
        }
    }

    /// Point on the curve at parameter `t`.
    pub fn eval(&self, t: f64) -> [f64; 2] {
        let mut num = [0.0, 0.0];
        let mut den = 0.0;
        let mut d = t;
        for (node, w) in self.nodes.iter().zip(&self.weights) {
            if d == 0.0 {
                return *node;
            }
            let s = w / d;
            d -= 1.0;
            num[0] += node[0] * s;
            num[1] += node[1] * s;
            den += s;
        }
        [num[0] / den, num[1] / den]
    }

    /// Parameter range `[0, n-1]`.
    pub fn domain(&self) -> (f64, f64) {
        (0.0, (self.nodes.len() - 1) as f64)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P: PlanePoint> ParametricCurve for NevilleCurve<P> {
    fn x(&self, t: f64) -> f64 {
        self.eval(t)[0]
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)[1]
    }
}

/// Interpolating polynomial `y(x)` through points with distinct abscissae.
///
/// Evaluation uses the barycentric formula with weights
/// `w_i = 1 / ∏_{k≠i} (x_i - x_k)`; evaluating exactly at a node returns
/// that node's ordinate. [`coefficients`](Self::coefficients) expands the
/// same polynomial in the monomial basis. The expansion loses accuracy much
/// sooner than barycentric evaluation and is meant for display.
///
/// # Example
///
/// ```
/// use geonum::interp::LagrangePolynomial;
///
/// let p = LagrangePolynomial::new(vec![(0.0, 1.0), (1.0, 3.0), (2.0, 7.0)]).unwrap();
/// assert!((p.eval(3.0) - 13.0).abs() < 1e-12);
/// assert_eq!(p.term(3), "(1.00)*x^2 + (1.00)*x + (1.00)");
/// ```
#[derive(Debug, Clone)]
pub struct LagrangePolynomial<P> {
    points: Vec<P>,
    xs: Vec<f64>,
    ys: Vec<f64>,
    weights: Vec<f64>,
}

impl<P: PlanePoint> LagrangePolynomial<P> {
    /// Build the interpolant.
    ///
    /// # Errors
    ///
    /// [`InterpError::TooFewPoints`] for an empty point list,
    /// [`InterpError::DuplicateNodes`] if two points share an x value.
    pub fn new(points: Vec<P>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        let mut poly = Self {
            points,
            xs: Vec::new(),
            ys: Vec::new(),
            weights: Vec::new(),
        };
        poly.update()?;
        Ok(poly)
    }

    /// Re-read the points and recompute the barycentric weights.
    pub fn update(&mut self) -> Result<(), InterpError> {
        self.xs = self.points.iter().map(PlanePoint::x).collect();
        self.ys = self.points.iter().map(PlanePoint::y).collect();
        self.weights.clear();
        for (i, &xi) in self.xs.iter().enumerate() {
            let mut prod = 1.0;
            for (k, &xk) in self.xs.iter().enumerate() {
                if k != i {
                    prod *= xi - xk;
                }
            }
            if prod == 0.0 {
                return Err(InterpError::DuplicateNodes);
            }
            self.weights.push(1.0 / prod);
        }
        Ok(())
    }

    /// Value of the polynomial at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        let mut num = 0.0;
        let mut den = 0.0;
        for ((&xi, &yi), &wi) in self.xs.iter().zip(&self.ys).zip(&self.weights) {
            if x == xi {
                return yi;
            }
            let s = wi / (x - xi);
            num += yi * s;
            den += s;
        }
        num / den
    }

    /// Monomial coefficients, constant term first; `n` entries for `n`
    /// points.
    pub fn coefficients(&self) -> Vec<f64> {
        let n = self.xs.len();

        // ∏_k (x - x_k), constant term first
        let mut full = vec![0.0; n + 1];
        full[0] = 1.0;
        for (deg, &xk) in self.xs.iter().enumerate() {
            for j in (1..=deg + 1).rev() {
                full[j] = full[j - 1] - xk * full[j];
            }
            full[0] *= -xk;
        }

        let mut coeffs = vec![0.0; n];
        let mut quotient = vec![0.0; n];
        for ((&xi, &yi), &wi) in self.xs.iter().zip(&self.ys).zip(&self.weights) {
            // divide out (x - x_i)
            quotient[n - 1] = full[n];
            for j in (1..n).rev() {
                quotient[j - 1] = full[j] + xi * quotient[j];
            }
            let scale = yi * wi;
            for (c, q) in coeffs.iter_mut().zip(&quotient) {
                *c += scale * q;
            }
        }
        coeffs
    }

    /// The polynomial as a term string with `prec` significant digits.
    pub fn term(&self, prec: usize) -> String {
        polynomial_term(&self.coefficients(), self.xs.len() - 1, "x", prec)
    }

    /// Range of the node abscissae.
    pub fn domain(&self) -> (f64, f64) {
        let lo = self.xs.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = self.xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        (lo, hi)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

/// The graph `(t, p(t))`.
impl<P: PlanePoint> ParametricCurve for LagrangePolynomial<P> {
    fn x(&self, t: f64) -> f64 {
        t
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)
    }
}
