use super::{ButcherTableau, OdeError};

/// Integrate `dx/dt = f(t, x)` over `[t0, t1]` with `steps` equal steps of
/// an explicit Runge-Kutta method.
///
/// Stage `j` evaluates `k_j = f(t + c_j·h, x + h·Σ_{l<j} A[j][l]·k_l)` and
/// the step ends with `x ← x + h·Σ b_l·k_l`. Returns the trajectory: the
/// initial state followed by the state after every step, `steps + 1`
/// vectors in all. `x0` is not modified. `t1 < t0` integrates backwards.
///
/// # Errors
///
/// - [`OdeError::InvalidTableau`] if the tableau fails
///   [`ButcherTableau::validate`].
/// - [`OdeError::DimensionMismatch`] if `f` returns a vector whose length
///   differs from `x0`.
///
/// # Example
///
/// ```
/// use geonum::ode::{runge_kutta, ButcherTableau};
///
/// // dx/dt = x, x(0) = 1
/// let path = runge_kutta(ButcherTableau::preset("heun"), &[1.0], [0.0, 2.0], 20, |_t, x| {
///     vec![x[0]]
/// })
/// .unwrap();
/// assert_eq!(path.len(), 21);
/// assert!((path[20][0] - 2.0_f64.exp()).abs() < 0.05);
/// ```
pub fn runge_kutta<F>(
    tableau: &ButcherTableau<'_>,
    x0: &[f64],
    interval: [f64; 2],
    steps: usize,
    mut f: F,
) -> Result<Vec<Vec<f64>>, OdeError>
where
    F: FnMut(f64, &[f64]) -> Vec<f64>,
{
    tableau.validate()?;

    let mut path = Vec::with_capacity(steps + 1);
    path.push(x0.to_vec());
    if steps == 0 {
        return Ok(path);
    }

    let [t0, t1] = interval;
    let h = (t1 - t0) / steps as f64;
    let dim = x0.len();
    let s = tableau.stages();

    let mut x = x0.to_vec();
    let mut y = vec![0.0; dim];
    let mut k: Vec<Vec<f64>> = Vec::with_capacity(s);

    for i in 0..steps {
        let t = t0 + i as f64 * h;
        k.clear();

        for j in 0..s {
            y.copy_from_slice(&x);
            for (l, kl) in k.iter().enumerate() {
                let w = tableau.coeff(j, l) * h;
                if w != 0.0 {
                    for (ye, ke) in y.iter_mut().zip(kl) {
                        *ye += w * ke;
                    }
                }
            }
            let kj = f(t + tableau.c[j] * h, &y);
            if kj.len() != dim {
                return Err(OdeError::DimensionMismatch);
            }
            k.push(kj);
        }

        for (l, kl) in k.iter().enumerate() {
            let w = tableau.b[l] * h;
            for (xe, ke) in x.iter_mut().zip(kl) {
                *xe += w * ke;
            }
        }
        path.push(x.clone());
    }

    Ok(path)
}
