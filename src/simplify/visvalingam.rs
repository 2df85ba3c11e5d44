use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::traits::PlanePoint;

/// Heap entry: the effective area of point `index` when it was queued.
#[derive(Debug, PartialEq)]
struct Candidate {
    area: f64,
    index: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for a min-heap; ties go to the earlier point
        other
            .area
            .total_cmp(&self.area)
            .then_with(|| other.index.cmp(&self.index))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Simplify a polyline to `target` interior points by the
/// Visvalingam–Whyatt algorithm.
///
/// Each interior point is weighted by the area of the triangle it spans with
/// its current neighbours. The point of smallest weight is removed and its
/// neighbours are re-weighted, never below the weight just removed, so the
/// removal order follows the effective area. The first and last point are
/// never removed. Returns `target + 2` points, or the whole input when it
/// already has at most that many.
///
/// # Example
///
/// ```
/// use geonum::simplify::visvalingam_whyatt;
///
/// let pts = [[0.0, 0.0], [1.0, 0.1], [2.0, 3.0], [3.0, 0.0], [4.0, 0.0]];
/// assert_eq!(visvalingam_whyatt(&pts, 1), vec![[0.0, 0.0], [2.0, 3.0], [4.0, 0.0]]);
/// ```
pub fn visvalingam_whyatt<P: PlanePoint + Clone>(points: &[P], target: usize) -> Vec<P> {
    let n = points.len();
    if n <= target + 2 {
        return points.to_vec();
    }

    let mut prev: Vec<usize> = (0..n).map(|i| i.saturating_sub(1)).collect();
    let mut next: Vec<usize> = (1..=n).collect();
    let mut area = vec![f64::INFINITY; n];
    let mut removed = vec![false; n];
    let mut heap = BinaryHeap::with_capacity(n);

    for i in 1..n - 1 {
        area[i] = triangle_area(&points[i - 1], &points[i], &points[i + 1]);
        heap.push(Candidate { area: area[i], index: i });
    }

    let mut interior = n - 2;
    while interior > target {
        let Some(Candidate { area: a, index: i }) = heap.pop() else {
            break;
        };
        // stale entry from before a re-weighting
        if removed[i] || a != area[i] {
            continue;
        }
        removed[i] = true;
        interior -= 1;

        let (p, q) = (prev[i], next[i]);
        next[p] = q;
        prev[q] = p;
        for j in [p, q] {
            if j == 0 || j == n - 1 {
                continue;
            }
            let w = triangle_area(&points[prev[j]], &points[j], &points[next[j]]).max(a);
            area[j] = w;
            heap.push(Candidate { area: w, index: j });
        }
    }

    points
        .iter()
        .zip(&removed)
        .filter(|(_, &r)| !r)
        .map(|(p, _)| p.clone())
        .collect()
}

fn triangle_area<P: PlanePoint>(a: &P, b: &P, c: &P) -> f64 {
    0.5 * ((b.x() - a.x()) * (c.y() - a.y()) - (c.x() - a.x()) * (b.y() - a.y())).abs()
}
