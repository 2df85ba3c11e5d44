use super::{check_interval, QuadError, QuadResult, QuadStatus};

/// Settings for [`romberg`].
#[derive(Debug, Clone, Copy)]
pub struct RombergSettings {
    /// Maximum number of interval halvings (default: 20).
    pub max_iterations: usize,
    /// Relative tolerance between successive extrapolated values
    /// (default: 1e-7).
    pub eps: f64,
}

impl Default for RombergSettings {
    fn default() -> Self {
        Self {
            max_iterations: 20,
            eps: 1e-7,
        }
    }
}

/// Romberg integration of `f` over `[a, b]`.
///
/// Halves the trapezoid step up to `max_iterations` times, extrapolating
/// each new trapezoid value to the limit. Stops once two consecutive
/// extrapolated values agree to `eps` relative.
///
/// ```
/// use geonum::quad::{romberg, RombergSettings};
///
/// let res = romberg(0.0, 1.0, f64::exp, &RombergSettings::default()).unwrap();
/// assert!(res.status.is_converged());
/// assert!((res.value - (core::f64::consts::E - 1.0)).abs() < 1e-10);
/// ```
pub fn romberg<F: Fn(f64) -> f64>(
    a: f64,
    b: f64,
    f: F,
    settings: &RombergSettings,
) -> Result<QuadResult, QuadError> {
    check_interval(a, b)?;
    // 2^k panels; beyond 2^30 the step is far below useful precision
    let levels = settings.max_iterations.min(30);
    if levels == 0 {
        return Err(QuadError::InvalidConfig);
    }

    let mut h = b - a;
    let mut evals = 2;
    // row[j] holds the j-times extrapolated value of the current level
    let mut row = Vec::with_capacity(levels + 1);
    row.push(0.5 * h * (f(a) + f(b)));
    let mut last = f64::INFINITY;
    let mut value = row[0];

    for k in 1..=levels {
        h *= 0.5;
        let fresh = 1usize << (k - 1);
        let s: f64 = (0..fresh).map(|i| f(a + (2 * i + 1) as f64 * h)).sum();
        evals += fresh;

        let mut prev = row[0];
        row[0] = 0.5 * row[0] + s * h;
        let mut q = 1.0;
        for j in 1..k {
            q *= 4.0;
            let next = row[j - 1] + (row[j - 1] - prev) / (q - 1.0);
            prev = row[j];
            row[j] = next;
        }
        q *= 4.0;
        let top = row[k - 1] + (row[k - 1] - prev) / (q - 1.0);
        row.push(top);
        value = top;

        let diff = (value - last).abs();
        if diff < settings.eps * value.abs() || diff == 0.0 {
            return Ok(QuadResult {
                value,
                abs_error: diff,
                evals,
                iterations: k,
                status: QuadStatus::Converged,
            });
        }
        last = value;
    }

    log::warn!("romberg: no convergence after {levels} halvings on [{a}, {b}]");
    Ok(QuadResult {
        value,
        abs_error: (value - row[levels - 1]).abs(),
        evals,
        iterations: levels,
        status: QuadStatus::MaxIterations,
    })
}
