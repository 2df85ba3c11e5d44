use crate::traits::{ParametricCurve, PlanePoint};

use super::{snapshot, InterpError};

/// Piecewise cubic Bezier curve.
///
/// Points `3k` are the curve's knots and points `3k+1`, `3k+2` the control
/// points between them, so `3m + 1` points describe `m` segments and
/// consecutive segments share an endpoint. Trailing points that do not
/// complete a segment are ignored. Segment `k` covers the parameter range
/// `[k, k + 1]`.
///
/// # Example
///
/// ```
/// use geonum::interp::BezierCurve;
///
/// let arch = BezierCurve::new(vec![[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]).unwrap();
/// assert_eq!(arch.domain(), (0.0, 1.0));
/// assert_eq!(arch.eval(0.5), [0.5, 0.75]);
/// ```
#[derive(Debug, Clone)]
pub struct BezierCurve<P> {
    points: Vec<P>,
    nodes: Vec<[f64; 2]>,
    segments: usize,
}

impl<P: PlanePoint> BezierCurve<P> {
    /// Build the curve; fails on an empty point list.
    pub fn new(points: Vec<P>) -> Result<Self, InterpError> {
        if points.is_empty() {
            return Err(InterpError::TooFewPoints);
        }
        let mut curve = Self {
            points,
            nodes: Vec::new(),
            segments: 0,
        };
        curve.update();
        Ok(curve)
    }

    /// Re-read the points.
    pub fn update(&mut self) {
        self.nodes = snapshot(&self.points);
        self.segments = (self.nodes.len() - 1) / 3;
    }

    /// Point on the curve at parameter `t`, clamped to the end knots
    /// outside the domain.
    pub fn eval(&self, t: f64) -> [f64; 2] {
        if t.is_nan() {
            return [f64::NAN, f64::NAN];
        }
        if t < 0.0 {
            return self.nodes[0];
        }
        if t >= self.segments as f64 {
            return self.nodes[3 * self.segments];
        }
        let s = t.floor();
        let z = 3 * s as usize;
        let t0 = t - s;
        let t1 = 1.0 - t0;
        let p = &self.nodes[z..z + 4];
        let mut out = [0.0; 2];
        for (c, v) in out.iter_mut().enumerate() {
            *v = t1 * t1 * (t1 * p[0][c] + 3.0 * t0 * p[1][c]) + (3.0 * t1 * p[2][c] + t0 * p[3][c]) * t0 * t0;
        }
        out
    }

    /// Parameter range `[0, m]` for `m` complete segments.
    pub fn domain(&self) -> (f64, f64) {
        (0.0, self.segments as f64)
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P: PlanePoint> ParametricCurve for BezierCurve<P> {
    fn x(&self, t: f64) -> f64 {
        self.eval(t)[0]
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)[1]
    }
}
