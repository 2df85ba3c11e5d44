use crate::traits::PlanePoint;
use crate::EPS;

/// Simplify a polyline by the Ramer–Douglas–Peucker algorithm.
///
/// Within a run of points the one farthest from the segment joining the
/// run's ends is kept if its distance exceeds `eps`, and both halves are
/// simplified in turn; otherwise all interior points are dropped. The ends of
/// every run are always kept.
///
/// Points with a non-finite coordinate mark gaps. Each gap between two runs
/// is kept as a single marker point (its first point), so the output can
/// still be drawn as separate pieces; gaps at either end of the input are
/// dropped.
///
/// # Example
///
/// ```
/// use geonum::simplify::ramer_douglas_peucker;
///
/// let pts = [[0.0, 0.0], [1.0, 0.1], [2.0, 0.0], [f64::NAN, f64::NAN], [5.0, 5.0], [6.0, 6.0], [7.0, 7.0]];
/// let kept = ramer_douglas_peucker(&pts, 0.5);
/// assert_eq!(kept.len(), 5);
/// assert!(kept[2][0].is_nan());
/// assert_eq!(kept[4], [7.0, 7.0]);
/// ```
pub fn ramer_douglas_peucker<P: PlanePoint + Clone>(points: &[P], eps: f64) -> Vec<P> {
    let finite = |p: &P| p.x().is_finite() && p.y().is_finite();
    let mut keep = vec![false; points.len()];

    let mut i = 0;
    while i < points.len() {
        if !finite(&points[i]) {
            i += 1;
            continue;
        }
        let start = i;
        while i < points.len() && finite(&points[i]) {
            i += 1;
        }
        simplify_run(points, start, i - 1, eps, &mut keep);
        // gap marker, unless the gap runs to the end
        if points[i..].iter().any(|p| finite(p)) {
            keep[i] = true;
        }
    }

    points
        .iter()
        .zip(&keep)
        .filter(|(_, &k)| k)
        .map(|(p, _)| p.clone())
        .collect()
}

/// Mark the points of `points[first..=last]` that survive simplification.
fn simplify_run<P: PlanePoint>(points: &[P], first: usize, last: usize, eps: f64, keep: &mut [bool]) {
    keep[first] = true;
    keep[last] = true;
    let mut stack = vec![(first, last)];
    while let Some((i, j)) = stack.pop() {
        if j - i < 2 {
            continue;
        }
        let (dist, k) = farthest(points, i, j);
        if dist > eps && k > i {
            keep[k] = true;
            stack.push((k, j));
            stack.push((i, k));
        }
    }
}

/// Interior point of `points[i..=j]` farthest from the segment `p_i p_j`,
/// with its distance.
fn farthest<P: PlanePoint>(points: &[P], i: usize, j: usize) -> (f64, usize) {
    let (xi, yi) = (points[i].x(), points[i].y());
    let x1 = points[j].x() - xi;
    let y1 = points[j].y() - yi;
    let den = x1 * x1 + y1 * y1;

    let mut best = (0.0, i);
    for (k, p) in points.iter().enumerate().take(j).skip(i + 1) {
        let mut x0 = p.x() - xi;
        let mut y0 = p.y() - yi;
        // degenerate chord: distance to its start
        if den >= EPS {
            let lambda = ((x0 * x1 + y0 * y1) / den).max(0.0).min(1.0);
            x0 -= lambda * x1;
            y0 -= lambda * y1;
        }
        let d = x0 * x0 + y0 * y0;
        if d > best.0 {
            best = (d, k);
        }
    }
    (best.0.sqrt(), best.1)
}
