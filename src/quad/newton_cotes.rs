use super::{check_interval, QuadError};

/// Composite Newton-Cotes rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewtonCotesRule {
    /// Trapezoid rule, any node count.
    Trapezoid,
    /// Simpson's rule, node count divisible by 2.
    Simpson,
    /// Milne's (Boole's) rule, node count divisible by 4.
    Milne,
}

/// Settings for [`newton_cotes`].
#[derive(Debug, Clone, Copy)]
pub struct NewtonCotesSettings {
    /// Number of subintervals (default: 28).
    pub nodes: usize,
    /// Rule applied on each panel (default: Milne).
    pub rule: NewtonCotesRule,
}

impl Default for NewtonCotesSettings {
    fn default() -> Self {
        Self {
            nodes: 28,
            rule: NewtonCotesRule::Milne,
        }
    }
}

/// Integrate `f` over `[a, b]` with a composite Newton-Cotes rule on
/// `settings.nodes` equal steps.
///
/// Fails with [`QuadError::InvalidConfig`] when the node count is zero or
/// not divisible as the rule requires.
///
/// ```
/// use geonum::quad::{newton_cotes, NewtonCotesRule, NewtonCotesSettings};
///
/// let v = newton_cotes(0.0, 2.0, |x| x * x, &NewtonCotesSettings::default()).unwrap();
/// assert!((v - 8.0 / 3.0).abs() < 1e-12);
///
/// let simpson = NewtonCotesSettings { nodes: 7, rule: NewtonCotesRule::Simpson };
/// assert!(newton_cotes(0.0, 1.0, |x| x, &simpson).is_err());
/// ```
pub fn newton_cotes<F: Fn(f64) -> f64>(
    a: f64,
    b: f64,
    f: F,
    settings: &NewtonCotesSettings,
) -> Result<f64, QuadError> {
    check_interval(a, b)?;
    let n = settings.nodes;
    let divisor = match settings.rule {
        NewtonCotesRule::Trapezoid => 1,
        NewtonCotesRule::Simpson => 2,
        NewtonCotesRule::Milne => 4,
    };
    if n == 0 || n % divisor != 0 {
        return Err(QuadError::InvalidConfig);
    }

    let h = (b - a) / n as f64;
    let x = |i: usize| a + i as f64 * h;

    let value = match settings.rule {
        NewtonCotesRule::Trapezoid => {
            let inner: f64 = (1..n).map(|i| f(x(i))).sum();
            h * (0.5 * (f(a) + f(b)) + inner)
        }
        NewtonCotesRule::Simpson => {
            let mut s = f(a) + f(b);
            for i in 1..n {
                let w = if i % 2 == 1 { 4.0 } else { 2.0 };
                s += w * f(x(i));
            }
            s * h / 3.0
        }
        NewtonCotesRule::Milne => {
            // weights 7 32 12 32 7 per panel of four steps
            let mut s = 7.0 * (f(a) + f(b));
            for i in 1..n {
                let w = match i % 4 {
                    0 => 14.0,
                    2 => 12.0,
                    _ => 32.0,
                };
                s += w * f(x(i));
            }
            s * 2.0 * h / 45.0
        }
    };
    Ok(value)
}
