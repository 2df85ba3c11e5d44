use crate::traits::{ParametricCurve, PlanePoint};

use super::InterpError;

/// Second derivatives of the natural cubic spline through `(x[i], y[i])`.
///
/// Both slices are sorted in place by `x` first (pairs move together), so
/// afterwards they line up with the returned vector and can be passed
/// straight to [`spline_eval`]. The interior second derivatives solve the
/// tridiagonal system
///
/// ```text
/// Δx_{i}·F_{i} + 2(Δx_{i} + Δx_{i+1})·F_{i+1} + Δx_{i+1}·F_{i+2}
///     = 6(y_{i+2} - y_{i+1})/Δx_{i+1} - 6(y_{i+1} - y_{i})/Δx_{i}
/// ```
///
/// by the Thomas algorithm, with the natural boundary `F[0] = F[n-1] = 0`.
/// Two points give the straight line, `[0, 0]`.
///
/// # Errors
///
/// - [`InterpError::LengthMismatch`] if the slices differ in length.
/// - [`InterpError::TooFewPoints`] for fewer than two points.
/// - [`InterpError::DuplicateNodes`] if two knots share an x value.
///
/// # Example
///
/// ```
/// use geonum::interp::{natural_cubic_spline, spline_eval};
///
/// let mut x = [2.0, 0.0, 1.0];
/// let mut y = [0.0, 0.0, 1.0];
/// let f2 = natural_cubic_spline(&mut x, &mut y).unwrap();
/// assert_eq!(x, [0.0, 1.0, 2.0]);
/// assert_eq!(f2, vec![0.0, -3.0, 0.0]);
/// assert!((spline_eval(0.5, &x, &y, &f2) - 0.6875).abs() < 1e-14);
/// ```
pub fn natural_cubic_spline(x: &mut [f64], y: &mut [f64]) -> Result<Vec<f64>, InterpError> {
    if x.len() != y.len() {
        return Err(InterpError::LengthMismatch);
    }
    let n = x.len();
    if n < 2 {
        return Err(InterpError::TooFewPoints);
    }

    let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));
    for (i, (px, py)) in pairs.into_iter().enumerate() {
        x[i] = px;
        y[i] = py;
    }

    let dx: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
    if dx.iter().any(|&h| h == 0.0) {
        return Err(InterpError::DuplicateNodes);
    }
    if n == 2 {
        return Ok(vec![0.0, 0.0]);
    }

    let delta: Vec<f64> = (0..n - 2)
        .map(|i| 6.0 * (y[i + 2] - y[i + 1]) / dx[i + 1] - 6.0 * (y[i + 1] - y[i]) / dx[i])
        .collect();

    // forward sweep
    let mut diag = Vec::with_capacity(n - 2);
    let mut z = Vec::with_capacity(n - 2);
    diag.push(2.0 * (dx[0] + dx[1]));
    z.push(delta[0]);
    for i in 0..n - 3 {
        let l = dx[i + 1] / diag[i];
        diag.push(2.0 * (dx[i + 1] + dx[i + 2]) - l * dx[i + 1]);
        z.push(delta[i + 1] - l * z[i]);
    }

    // back substitution, interior unknowns land at 1..n-1
    let mut f2 = vec![0.0; n];
    f2[n - 2] = z[n - 3] / diag[n - 3];
    for i in (0..n - 3).rev() {
        f2[i + 1] = (z[i] - dx[i + 1] * f2[i + 2]) / diag[i];
    }
    Ok(f2)
}

/// Evaluate a natural cubic spline at `x0`.
///
/// `x` must be sorted and `f2` must come from [`natural_cubic_spline`] on the
/// same knots. Returns NaN outside `[x[0], x[n-1]]`, for a NaN argument, or
/// when the slices are inconsistent.
pub fn spline_eval(x0: f64, x: &[f64], y: &[f64], f2: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 || y.len() != n || f2.len() != n {
        return f64::NAN;
    }
    if !(x0 >= x[0] && x0 <= x[n - 1]) {
        return f64::NAN;
    }

    if x0 == x[n - 1] {
        return y[n - 1];
    }

    // segment j with x[j] <= x0 < x[j+1], so knots evaluate exactly
    let j = x[1..n - 1].partition_point(|&xi| xi <= x0);
    let h = x[j + 1] - x[j];
    let a = y[j];
    let b = (y[j + 1] - y[j]) / h - h / 6.0 * (f2[j + 1] + 2.0 * f2[j]);
    let c = f2[j] / 2.0;
    let d = (f2[j + 1] - f2[j]) / (6.0 * h);
    let u = x0 - x[j];
    a + (b + (c + d * u) * u) * u
}

/// [`spline_eval`] at each of `xs`.
pub fn spline_eval_many(xs: &[f64], x: &[f64], y: &[f64], f2: &[f64]) -> Vec<f64> {
    xs.iter().map(|&x0| spline_eval(x0, x, y, f2)).collect()
}

/// Natural cubic spline owning its sorted knots and second derivatives.
///
/// # Example
///
/// ```
/// use geonum::interp::NaturalCubicSpline;
///
/// let s = NaturalCubicSpline::new(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(s.eval(2.0), 0.0);
/// assert!(s.eval(3.5).is_nan());
/// ```
#[derive(Debug, Clone)]
pub struct NaturalCubicSpline {
    x: Vec<f64>,
    y: Vec<f64>,
    f2: Vec<f64>,
}

impl NaturalCubicSpline {
    /// Copy, sort and solve; errors as for [`natural_cubic_spline`].
    pub fn new(x: &[f64], y: &[f64]) -> Result<Self, InterpError> {
        let mut x = x.to_vec();
        let mut y = y.to_vec();
        let f2 = natural_cubic_spline(&mut x, &mut y)?;
        Ok(Self { x, y, f2 })
    }

    /// Spline through the current positions of `points`.
    pub fn from_points<P: PlanePoint>(points: &[P]) -> Result<Self, InterpError> {
        let x: Vec<f64> = points.iter().map(PlanePoint::x).collect();
        let y: Vec<f64> = points.iter().map(PlanePoint::y).collect();
        Self::new(&x, &y)
    }

    pub fn eval(&self, x0: f64) -> f64 {
        spline_eval(x0, &self.x, &self.y, &self.f2)
    }

    pub fn eval_many(&self, xs: &[f64]) -> Vec<f64> {
        spline_eval_many(xs, &self.x, &self.y, &self.f2)
    }

    /// Range of the knots.
    pub fn domain(&self) -> (f64, f64) {
        (self.x[0], self.x[self.x.len() - 1])
    }

    /// Sorted knots.
    pub fn knots(&self) -> (&[f64], &[f64]) {
        (&self.x, &self.y)
    }

    pub fn second_derivatives(&self) -> &[f64] {
        &self.f2
    }
}

/// The graph `(t, s(t))`.
impl ParametricCurve for NaturalCubicSpline {
    fn x(&self, t: f64) -> f64 {
        t
    }

    fn y(&self, t: f64) -> f64 {
        self.eval(t)
    }
}
