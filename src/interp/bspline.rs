use crate::traits::{ParametricCurve, PlanePoint};

use super::{snapshot, InterpError};

/// B-spline curve of order `k` (degree `k - 1`) over a clamped uniform knot
/// vector.
///
/// With `n + 1` control points the knots are `k` zeros, then
/// `1, 2, …, n - k + 1`, then `k` copies of `n - k + 2`, so the curve starts
/// at the first control point, ends at the last one, and runs over
/// `t ∈ [0, n - k + 2]`. An order larger than the number of control points
/// is reduced to it; order 1 gives the control points as a step function.
///
/// # Example
///
/// ```
/// use geonum::interp::BSplineCurve;
///
/// let pts = vec![[0.0, 0.0], [1.0, 2.0], [2.0, 0.0]];
/// let quad = BSplineCurve::new(pts, 3).unwrap();
/// assert_eq!(quad.domain(), (0.0, 1.0));
/// let [x, y] = quad.eval(0.5);
/// assert!((x - 1.0).abs() < 1e-15 && (y - 1.0).abs() < 1e-15);
/// ```
#[derive(Debug, Clone)]
pub struct BSplineCurve<P> {
    points: Vec<P>,
    order: usize,
    nodes: Vec<[f64; 2]>,
    knots: Vec<f64>,
    k: usize,
}

impl<P: PlanePoint> BSplineCurve<P> {
    /// Build the curve; needs at least two control points.
    pub fn new(points: Vec<P>, order: usize) -> Result<Self, InterpError> {
        if points.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        let mut curve = Self {
            points,
            order,
            nodes: Vec::new(),
            knots: Vec::new(),
            k: 0,
        };
        curve.update();
        Ok(curve)
    }

    /// Re-read the control points and rebuild the knot vector.
    pub fn update(&mut self) {
        self.nodes = snapshot(&self.points);
        let n = self.nodes.len() - 1;
        let k = self.order.clamp(1, n + 1);
        self.k = k;
        self.knots = (0..n + k + 1)
            .map(|j| {
                if j < k {
                    0.0
                } else if j <= n {
                    (j + 1 - k) as f64
                } else {
                    (n + 2 - k) as f64
                }
            })
            .collect();
    }

    /// Order in use after reduction.
    pub fn order(&self) -> usize {
        self.k
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    /// Point on the curve at parameter `t`, clamped to the end control
    /// points outside the domain.
    pub fn eval(&self, t: f64) -> [f64; 2] {
        let n = self.nodes.len() - 1;
        let k = self.k;
        if t.is_nan() {
            return [f64::NAN, f64::NAN];
        }
        if t <= 0.0 {
            return self.nodes[0];
        }
        if t >= (n + 2 - k) as f64 {
            return self.nodes[n];
        }

        // knot span: knots[s] <= t < knots[s + 1]
        let s = t.floor() as usize + k - 1;
        let basis = self.basis(t, s);
        let mut out = [0.0; 2];
        for (r, b) in basis.iter().enumerate() {
            let p = self.nodes[s + 1 - k + r];
            out[0] += b * p[0];
            out[1] += b * p[1];
        }
        out
    }

    /// The `k` nonzero basis functions `N_{s-k+1}, …, N_s` at `t`, built up
    /// order by order with the Cox–de Boor recurrence.
    fn basis(&self, t: f64, s: usize) -> Vec<f64> {
        let k = self.k;
        let kn = &self.knots;
        let mut basis = vec![0.0; k];
        let mut left = vec![0.0; k];
        let mut right = vec![0.0; k];
        basis[0] = 1.0;
        for j in 1..k {
            left[j] = t - kn[s + 1 - j];
            right[j] = kn[s + j] - t;
            let mut saved = 0.0;
            for r in 0..j {
                let tmp = basis[r] / (right[r + 1] + left[j - r]);
                basis[r] = saved + right[r + 1] * tmp;
                saved = left[j - r] * tmp;
            }
            basis[j] = saved;
        }
        basis
    }

    /// Parameter range `[0, n - k + 2]`.
    pub fn domain(&self) -> (f64, f64) {
        let n = self.nodes.len() - 1;
        (0.0, (n + 2 - self.k) as f64)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P: PlanePoint> ParametricCurve for BSplineCurve<P> {
    fn x(&self, t: f64) -> f64 {
        self.eval(t)[0]
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)[1]
    }
}
