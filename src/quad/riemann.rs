/// How the height of each Riemann rectangle is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiemannKind {
    /// `f` at the left end.
    Left,
    /// `f` at the right end.
    Right,
    /// `f` at the midpoint.
    Middle,
    /// Smallest of 101 samples across the strip.
    Lower,
    /// Largest of 101 samples across the strip.
    Upper,
    /// `f` at a uniformly random point of the strip.
    Random,
    /// Simpson average `(f(l) + 4 f(m) + f(r)) / 6`.
    Simpson,
    /// Trapezoid through `f(l)` and `f(r)`.
    Trapezoidal,
}

/// Riemann sum together with the outline of its rectangles.
#[derive(Debug, Clone, Default)]
pub struct RiemannSum {
    /// x-coordinates of the outline.
    pub xs: Vec<f64>,
    /// y-coordinates of the outline.
    pub ys: Vec<f64>,
    /// Signed area.
    pub sum: f64,
}

const SAMPLES: usize = 100;

/// Left and right heights of the strip `[x, x + delta]`.
fn strip<F: Fn(f64) -> f64>(f: &F, kind: RiemannKind, x: f64, delta: f64) -> (f64, f64) {
    let extreme = |pick: fn(f64, f64) -> f64| {
        let step = delta / SAMPLES as f64;
        (1..=SAMPLES).fold(f(x), |acc, k| pick(acc, f(x + k as f64 * step)))
    };
    let y = match kind {
        RiemannKind::Left => f(x),
        RiemannKind::Right => f(x + delta),
        RiemannKind::Middle => f(x + 0.5 * delta),
        RiemannKind::Lower => extreme(f64::min),
        RiemannKind::Upper => extreme(f64::max),
        RiemannKind::Random => f(x + delta * rand::random::<f64>()),
        RiemannKind::Simpson => (f(x) + 4.0 * f(x + 0.5 * delta) + f(x + delta)) / 6.0,
        RiemannKind::Trapezoidal => return (f(x), f(x + delta)),
    };
    (y, y)
}

/// Riemann sum of `f` over `[a, b]` with `n` strips, plus the polyline
/// outlining the strips.
///
/// The outline starts at `(a, 0)` and visits, for every strip, the top-left
/// corner, the top-right corner and the foot of its right edge. For
/// [`RiemannKind::Trapezoidal`] the top edge is the slanted chord. `n == 0`
/// gives the single point `(a, 0)` and sum `0`.
///
/// ```
/// use geonum::quad::{riemann, RiemannKind};
///
/// let r = riemann(|x| x, 2, RiemannKind::Left, 0.0, 1.0);
/// assert_eq!(r.xs, vec![0.0, 0.0, 0.5, 0.5, 0.5, 1.0, 1.0]);
/// assert_eq!(r.ys, vec![0.0, 0.0, 0.0, 0.0, 0.5, 0.5, 0.0]);
/// assert_eq!(r.sum, 0.25);
/// ```
pub fn riemann<F: Fn(f64) -> f64>(f: F, n: usize, kind: RiemannKind, a: f64, b: f64) -> RiemannSum {
    let mut out = RiemannSum {
        xs: Vec::with_capacity(3 * n + 1),
        ys: Vec::with_capacity(3 * n + 1),
        sum: 0.0,
    };
    out.xs.push(a);
    out.ys.push(0.0);
    if n == 0 {
        return out;
    }

    let delta = (b - a) / n as f64;
    for i in 0..n {
        let x = a + i as f64 * delta;
        let x1 = if i + 1 == n { b } else { x + delta };
        let (yl, yr) = strip(&f, kind, x, delta);
        out.xs.extend_from_slice(&[x, x1, x1]);
        out.ys.extend_from_slice(&[yl, yr, 0.0]);
        out.sum += 0.5 * (yl + yr) * delta;
    }
    out
}

/// Riemann sum of `f` over `[a, b]` with `n` strips.
///
/// Same heights as [`riemann`], without building the outline.
///
/// ```
/// use geonum::quad::{riemann_sum, RiemannKind};
///
/// let s = riemann_sum(|x| x * x, 4, RiemannKind::Simpson, 0.0, 1.0);
/// assert!((s - 1.0 / 3.0).abs() < 1e-15);
/// ```
pub fn riemann_sum<F: Fn(f64) -> f64>(f: F, n: usize, kind: RiemannKind, a: f64, b: f64) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let delta = (b - a) / n as f64;
    (0..n)
        .map(|i| {
            let (yl, yr) = strip(&f, kind, a + i as f64 * delta, delta);
            0.5 * (yl + yr) * delta
        })
        .sum()
}
