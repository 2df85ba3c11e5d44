use crate::traits::{ParametricCurve, PlanePoint};
use crate::EPS;

use super::{snapshot, InterpError, Param};

/// Tangent rule of a [`CardinalSpline`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardinalKind {
    /// Tangent at `P_i` is `tau·(P_{i+1} - P_{i-1})`.
    #[default]
    Uniform,
    /// Tangents weighted by square-root chord lengths, which avoids cusps
    /// and self-intersections when neighbouring points are unevenly spaced.
    Centripetal,
}

/// Cubic Hermite spline through a point sequence with tension `tau`.
///
/// Segment `s` runs from point `s` to point `s + 1` over the parameter range
/// `[s, s + 1]`. Tangents are built from the neighbouring points; the two
/// ends use synthetic neighbours `2P_0 - P_1` and `2P_{n-1} - P_{n-2}`.
/// `tau = 0.5` gives the Catmull-Rom spline. The tension is a [`Param`], so
/// it can follow a slider and is re-read by [`update`](Self::update).
///
/// # Example
///
/// ```
/// use geonum::interp::{CardinalKind, CardinalSpline};
///
/// let pts = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.0]];
/// let spline = CardinalSpline::new(pts, 0.5, CardinalKind::Centripetal).unwrap();
/// assert_eq!(spline.eval(-1.0), [0.0, 0.0]);
/// assert_eq!(spline.eval(2.0), [2.0, 0.0]);
/// ```
#[derive(Debug)]
pub struct CardinalSpline<'a, P> {
    points: Vec<P>,
    tau: Param<'a>,
    kind: CardinalKind,
    nodes: Vec<[f64; 2]>,
    // per segment, per coordinate: cubic coefficients, constant term first
    coeffs: Vec<[[f64; 4]; 2]>,
}

impl<'a, P: PlanePoint> CardinalSpline<'a, P> {
    /// Build the spline; needs at least two points.
    pub fn new(points: Vec<P>, tau: impl Into<Param<'a>>, kind: CardinalKind) -> Result<Self, InterpError> {
        if points.len() < 2 {
            return Err(InterpError::TooFewPoints);
        }
        let mut spline = Self {
            points,
            tau: tau.into(),
            kind,
            nodes: Vec::new(),
            coeffs: Vec::new(),
        };
        spline.update();
        Ok(spline)
    }

    /// Catmull-Rom spline: tension 0.5.
    pub fn catmull_rom(points: Vec<P>, kind: CardinalKind) -> Result<Self, InterpError> {
        Self::new(points, 0.5, kind)
    }

    /// Re-read the points and the tension and rebuild the segments.
    pub fn update(&mut self) {
        let tau = self.tau.value();
        self.nodes = snapshot(&self.points);
        let n = self.nodes.len();

        let mut ext = Vec::with_capacity(n + 2);
        ext.push(reflect(self.nodes[0], self.nodes[1]));
        ext.extend_from_slice(&self.nodes);
        ext.push(reflect(self.nodes[n - 1], self.nodes[n - 2]));

        self.coeffs.clear();
        for w in ext.windows(4) {
            let [p0, p1, p2, p3] = [w[0], w[1], w[2], w[3]];
            let (t1, t2) = match self.kind {
                CardinalKind::Uniform => (sub(p2, p0), sub(p3, p1)),
                CardinalKind::Centripetal => centripetal_tangents(p0, p1, p2, p3),
            };
            let mut seg = [[0.0; 4]; 2];
            for (c, coord) in seg.iter_mut().enumerate() {
                *coord = hermite(p1[c], p2[c], tau * t1[c], tau * t2[c]);
            }
            self.coeffs.push(seg);
        }
    }

    /// Point on the spline at parameter `t`.
    ///
    /// Clamps to the first and last point outside the domain; NaN in, NaN
    /// out.
    pub fn eval(&self, t: f64) -> [f64; 2] {
        let n = self.nodes.len();
        if t.is_nan() {
            return [f64::NAN, f64::NAN];
        }
        if t <= 0.0 {
            return self.nodes[0];
        }
        if t >= (n - 1) as f64 {
            return self.nodes[n - 1];
        }
        let s = t.floor();
        let i = s as usize;
        if s == t {
            return self.nodes[i];
        }
        let u = t - s;
        let [cx, cy] = &self.coeffs[i];
        [horner(cx, u), horner(cy, u)]
    }

    /// Parameter range `[0, n-1]`.
    pub fn domain(&self) -> (f64, f64) {
        (0.0, (self.nodes.len() - 1) as f64)
    }

    pub fn kind(&self) -> CardinalKind {
        self.kind
    }

    pub fn points(&self) -> &[P] {
        &self.points
    }
}

impl<P: PlanePoint> ParametricCurve for CardinalSpline<'_, P> {
    fn x(&self, t: f64) -> f64 {
        self.eval(t)[0]
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)[1]
    }
}

/// Point mirror of `q` through `p`.
fn reflect(p: [f64; 2], q: [f64; 2]) -> [f64; 2] {
    [2.0 * p[0] - q[0], 2.0 * p[1] - q[1]]
}

fn sub(a: [f64; 2], b: [f64; 2]) -> [f64; 2] {
    [a[0] - b[0], a[1] - b[1]]
}

fn centripetal_tangents(p0: [f64; 2], p1: [f64; 2], p2: [f64; 2], p3: [f64; 2]) -> ([f64; 2], [f64; 2]) {
    let mut dt0 = p0.dist(&p1).sqrt();
    let mut dt1 = p1.dist(&p2).sqrt();
    let mut dt2 = p2.dist(&p3).sqrt();
    if dt1 < EPS {
        dt1 = 1.0;
    }
    if dt0 < EPS {
        dt0 = dt1;
    }
    if dt2 < EPS {
        dt2 = dt1;
    }

    let mut t1 = [0.0; 2];
    let mut t2 = [0.0; 2];
    for c in 0..2 {
        t1[c] = (p1[c] - p0[c]) / dt0 - (p2[c] - p0[c]) / (dt0 + dt1) + (p2[c] - p1[c]) / dt1;
        t2[c] = (p2[c] - p1[c]) / dt1 - (p3[c] - p1[c]) / (dt1 + dt2) + (p3[c] - p2[c]) / dt2;
        t1[c] *= dt1;
        t2[c] *= dt1;
    }
    (t1, t2)
}

/// Cubic on `[0, 1]` from `x1` to `x2` with end tangents `t1`, `t2`.
fn hermite(x1: f64, x2: f64, t1: f64, t2: f64) -> [f64; 4] {
    [
        x1,
        t1,
        -3.0 * x1 + 3.0 * x2 - 2.0 * t1 - t2,
        2.0 * x1 - 2.0 * x2 + t1 + t2,
    ]
}

fn horner(c: &[f64; 4], u: f64) -> f64 {
    ((c[3] * u + c[2]) * u + c[1]) * u + c[0]
}
