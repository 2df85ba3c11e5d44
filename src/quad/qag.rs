use super::kronrod::{qk, KronrodRule};
use super::{check_interval, QuadError, QuadResult, QuadStatus};

/// Settings for [`qag`].
#[derive(Debug, Clone, Copy)]
pub struct QagSettings {
    /// Maximum number of subintervals (default: 15).
    pub limit: usize,
    /// Relative tolerance (default: 1e-7).
    pub epsrel: f64,
    /// Absolute tolerance (default: 1e-7).
    pub epsabs: f64,
    /// Kronrod rule applied on each subinterval (default: 15 points).
    pub rule: KronrodRule,
}

impl Default for QagSettings {
    fn default() -> Self {
        Self {
            limit: 15,
            epsrel: 1e-7,
            epsabs: 1e-7,
            rule: KronrodRule::Gk15,
        }
    }
}

/// Subinterval bookkeeping for adaptive integration.
///
/// Parallel arrays of bounds, partial results and error estimates for up to
/// `limit` subintervals, plus the `order` list that keeps subinterval
/// indices sorted by decreasing error (down to the depth still reachable
/// before `limit` is hit). `order[0]` is always the subinterval bisected
/// next.
#[derive(Debug, Clone)]
pub struct QuadWorkspace {
    limit: usize,
    size: usize,
    nrmax: usize,
    i: usize,
    maximum_level: usize,
    alist: Vec<f64>,
    blist: Vec<f64>,
    rlist: Vec<f64>,
    elist: Vec<f64>,
    order: Vec<usize>,
    level: Vec<usize>,
}

impl QuadWorkspace {
    /// Workspace for at most `limit` subintervals.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            size: 0,
            nrmax: 0,
            i: 0,
            maximum_level: 0,
            alist: vec![0.0; limit],
            blist: vec![0.0; limit],
            rlist: vec![0.0; limit],
            elist: vec![0.0; limit],
            order: vec![0; limit],
            level: vec![0; limit],
        }
    }

    /// Capacity in subintervals.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of active subintervals.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Deepest bisection level reached.
    pub fn maximum_level(&self) -> usize {
        self.maximum_level
    }

    /// Active subintervals as `(a, b, result, error)`, in storage order.
    pub fn intervals(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        (0..self.size).map(|k| (self.alist[k], self.blist[k], self.rlist[k], self.elist[k]))
    }

    /// Index of the subinterval with the largest error estimate.
    pub fn largest_error_index(&self) -> usize {
        self.order[0]
    }

    fn initialise(&mut self, a: f64, b: f64) {
        self.size = 0;
        self.nrmax = 0;
        self.i = 0;
        self.maximum_level = 0;
        self.alist[0] = a;
        self.blist[0] = b;
        self.rlist[0] = 0.0;
        self.elist[0] = 0.0;
        self.order[0] = 0;
        self.level[0] = 0;
    }

    fn set_initial_result(&mut self, result: f64, error: f64) {
        self.size = 1;
        self.rlist[0] = result;
        self.elist[0] = error;
    }

    /// Bounds, result and error of the subinterval to bisect next.
    fn retrieve(&self) -> (f64, f64, f64, f64) {
        let i = self.i;
        (self.alist[i], self.blist[i], self.rlist[i], self.elist[i])
    }

    /// Replace the current subinterval by its two halves.
    #[allow(clippy::too_many_arguments)]
    fn update(
        &mut self,
        a1: f64,
        b1: f64,
        area1: f64,
        error1: f64,
        a2: f64,
        b2: f64,
        area2: f64,
        error2: f64,
    ) {
        let i_max = self.i;
        let i_new = self.size;
        let new_level = self.level[i_max] + 1;

        // the half with the larger error keeps the old slot
        if error2 > error1 {
            self.alist[i_max] = a2;
            self.rlist[i_max] = area2;
            self.elist[i_max] = error2;
            self.level[i_max] = new_level;

            self.alist[i_new] = a1;
            self.blist[i_new] = b1;
            self.rlist[i_new] = area1;
            self.elist[i_new] = error1;
            self.level[i_new] = new_level;
        } else {
            self.blist[i_max] = b1;
            self.rlist[i_max] = area1;
            self.elist[i_max] = error1;
            self.level[i_max] = new_level;

            self.alist[i_new] = a2;
            self.blist[i_new] = b2;
            self.rlist[i_new] = area2;
            self.elist[i_new] = error2;
            self.level[i_new] = new_level;
        }

        self.size += 1;
        if new_level > self.maximum_level {
            self.maximum_level = new_level;
        }
        self.sort_errors();
    }

    /// Re-establish the descending-error `order` after an update
    /// (QUADPACK `qpsrt`).
    fn sort_errors(&mut self) {
        let last = self.size - 1;
        let mut nrmax = self.nrmax;
        let i_nrmax = self.order[nrmax];

        if last < 2 {
            self.order[0] = 0;
            self.order[1] = 1;
            self.i = i_nrmax;
            return;
        }

        let errmax = self.elist[i_nrmax];

        // the bisected interval may have dropped in the ranking; move the
        // larger entries ahead of it
        while nrmax > 0 && errmax > self.elist[self.order[nrmax - 1]] {
            self.order[nrmax] = self.order[nrmax - 1];
            nrmax -= 1;
        }

        // only the top `limit - last` positions can still be bisected
        let top = if last < self.limit / 2 + 2 {
            last
        } else {
            self.limit - last + 1
        };

        let mut i = nrmax + 1;
        while i < top && errmax < self.elist[self.order[i]] {
            self.order[i - 1] = self.order[i];
            i += 1;
        }
        self.order[i - 1] = i_nrmax;

        let errmin = self.elist[last];
        let mut k = top as isize - 1;
        while k > i as isize - 2 && errmin >= self.elist[self.order[k as usize]] {
            self.order[(k + 1) as usize] = self.order[k as usize];
            k -= 1;
        }
        self.order[(k + 1) as usize] = last;

        self.i = self.order[nrmax];
        self.nrmax = nrmax;
    }

    fn sum_results(&self) -> f64 {
        self.rlist[..self.size].iter().sum()
    }
}

/// Whether `[a1, b2]` split at `a2` is no longer resolvable in `f64`.
fn subinterval_too_small(a1: f64, a2: f64, b2: f64) -> bool {
    let tmp = (1.0 + 100.0 * f64::EPSILON) * (a2.abs() + 1000.0 * f64::MIN_POSITIVE);
    a1.abs() <= tmp && b2.abs() <= tmp
}

/// Adaptive Gauss-Kronrod integration of `f` over `[a, b]`.
///
/// Allocates a [`QuadWorkspace`] of `settings.limit` subintervals and calls
/// [`qag_with_workspace`].
pub fn qag<F: Fn(f64) -> f64>(
    a: f64,
    b: f64,
    f: F,
    settings: &QagSettings,
) -> Result<QuadResult, QuadError> {
    let mut workspace = QuadWorkspace::new(settings.limit);
    qag_with_workspace(&mut workspace, a, b, f, settings)
}

/// Adaptive Gauss-Kronrod integration in a caller-supplied workspace.
///
/// Starting from one rule application on `[a, b]`, repeatedly bisects the
/// subinterval with the largest error estimate until the summed error is
/// at most `max(epsabs, epsrel·|I|)`. Iteration stops early, with the best
/// estimate and a non-converged [`QuadStatus`], when
///
/// - `settings.limit` subintervals are in use,
/// - round-off is detected: a bisection barely changed the area while the
///   error did not shrink (6 times), or the error grew after the 10th
///   iteration (20 times),
/// - a subinterval shrank to machine precision.
///
/// Fails with [`QuadError::InvalidConfig`] for a zero limit, a limit larger
/// than the workspace, or tolerances that cannot be met in `f64`.
pub fn qag_with_workspace<F: Fn(f64) -> f64>(
    workspace: &mut QuadWorkspace,
    a: f64,
    b: f64,
    f: F,
    settings: &QagSettings,
) -> Result<QuadResult, QuadError> {
    check_interval(a, b)?;
    let limit = settings.limit;
    if limit == 0 || limit > workspace.limit {
        return Err(QuadError::InvalidConfig);
    }
    if settings.epsabs <= 0.0 && settings.epsrel < 50.0 * f64::EPSILON {
        return Err(QuadError::InvalidConfig);
    }

    let rule = settings.rule;
    let mut evals = rule.points();

    workspace.initialise(a, b);
    let first = qk(rule, a, b, &f);
    workspace.set_initial_result(first.result, first.abs_error);

    let mut tolerance = settings.epsabs.max(settings.epsrel * first.result.abs());
    let round_off = 50.0 * f64::EPSILON * first.resabs;

    let finish = |value: f64,
                  abs_error: f64,
                  evals: usize,
                  iterations: usize,
                  status: QuadStatus|
     -> Result<QuadResult, QuadError> {
        if !status.is_converged() {
            log::warn!("qag: {status} on [{a}, {b}], estimate {value} +/- {abs_error:e}");
        }
        Ok(QuadResult {
            value,
            abs_error,
            evals,
            iterations,
            status,
        })
    };

    if first.abs_error <= round_off && first.abs_error > tolerance {
        return finish(first.result, first.abs_error, evals, 1, QuadStatus::Roundoff);
    }
    if (first.abs_error <= tolerance && first.abs_error != first.resasc) || first.abs_error == 0.0 {
        return finish(first.result, first.abs_error, evals, 1, QuadStatus::Converged);
    }
    if limit == 1 {
        return finish(first.result, first.abs_error, evals, 1, QuadStatus::MaxIterations);
    }

    let mut area = first.result;
    let mut errsum = first.abs_error;
    let mut roundoff_type1 = 0;
    let mut roundoff_type2 = 0;
    let mut failure = None;
    let mut iteration = 1;

    loop {
        let (a_i, b_i, r_i, e_i) = workspace.retrieve();

        let a1 = a_i;
        let b1 = 0.5 * (a_i + b_i);
        let a2 = b1;
        let b2 = b_i;

        let left = qk(rule, a1, b1, &f);
        let right = qk(rule, a2, b2, &f);
        evals += 2 * rule.points();

        let area12 = left.result + right.result;
        let error12 = left.abs_error + right.abs_error;

        errsum += error12 - e_i;
        area += area12 - r_i;

        if left.resasc != left.abs_error && right.resasc != right.abs_error {
            let delta = r_i - area12;
            if delta.abs() <= 1e-5 * area12.abs() && error12 >= 0.99 * e_i {
                roundoff_type1 += 1;
            }
            if iteration >= 10 && error12 > e_i {
                roundoff_type2 += 1;
            }
        }

        tolerance = settings.epsabs.max(settings.epsrel * area.abs());

        if errsum > tolerance {
            if roundoff_type1 >= 6 || roundoff_type2 >= 20 {
                failure = Some(QuadStatus::Roundoff);
            }
            if subinterval_too_small(a1, a2, b2) {
                failure = Some(QuadStatus::BadIntegrand);
            }
        }

        workspace.update(
            a1,
            b1,
            left.result,
            left.abs_error,
            a2,
            b2,
            right.result,
            right.abs_error,
        );

        iteration += 1;
        if iteration >= limit || failure.is_some() || errsum <= tolerance {
            break;
        }
    }

    let value = workspace.sum_results();
    let status = if errsum <= tolerance {
        QuadStatus::Converged
    } else if let Some(status) = failure {
        status
    } else {
        QuadStatus::MaxIterations
    };
    finish(value, errsum, evals, workspace.size, status)
}
