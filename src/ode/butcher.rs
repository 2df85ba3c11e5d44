use super::OdeError;

/// Butcher tableau of an explicit Runge-Kutta method with `s` stages.
///
/// `a` is the `s × s` stage matrix stored row-major; it must be strictly
/// lower triangular. `b` holds the weights of the update and `c` the stage
/// nodes. Both borrow their storage, so tableaux can be `static` tables or
/// views of caller-owned vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButcherTableau<'a> {
    pub a: &'a [f64],
    pub b: &'a [f64],
    pub c: &'a [f64],
}

/// Forward Euler.
pub static EULER: ButcherTableau<'static> = ButcherTableau {
    a: &[0.0],
    b: &[1.0],
    c: &[0.0],
};

/// Heun's method (explicit trapezoid).
pub static HEUN: ButcherTableau<'static> = ButcherTableau {
    a: &[
        0.0, 0.0, //
        1.0, 0.0,
    ],
    b: &[0.5, 0.5],
    c: &[0.0, 1.0],
};

/// The classic 4th-order method.
pub static RK4: ButcherTableau<'static> = ButcherTableau {
    a: &[
        0.0, 0.0, 0.0, 0.0, //
        0.5, 0.0, 0.0, 0.0, //
        0.0, 0.5, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0,
    ],
    b: &[1.0 / 6.0, 1.0 / 3.0, 1.0 / 3.0, 1.0 / 6.0],
    c: &[0.0, 0.5, 0.5, 1.0],
};

impl ButcherTableau<'static> {
    /// Look up a preset by name: `"euler"`, `"heun"` or `"rk4"`.
    ///
    /// Unknown names fall back to Euler.
    pub fn preset(name: &str) -> &'static ButcherTableau<'static> {
        match name {
            "euler" => &EULER,
            "heun" => &HEUN,
            "rk4" => &RK4,
            other => {
                log::debug!("unknown Runge-Kutta preset {other:?}, using euler");
                &EULER
            }
        }
    }
}

impl ButcherTableau<'_> {
    /// Number of stages.
    #[inline]
    pub fn stages(&self) -> usize {
        self.b.len()
    }

    /// Stage matrix entry `A[j][l]`.
    #[inline]
    pub fn coeff(&self, j: usize, l: usize) -> f64 {
        self.a[j * self.stages() + l]
    }

    /// Check that the tableau describes an explicit, consistent method.
    ///
    /// # Errors
    ///
    /// [`OdeError::InvalidTableau`] if there are no stages, the lengths of
    /// `a`, `b`, `c` disagree, `a` has an entry on or above the diagonal, or
    /// the weights do not sum to 1.
    pub fn validate(&self) -> Result<(), OdeError> {
        let s = self.stages();
        if s == 0 || self.c.len() != s || self.a.len() != s * s {
            return Err(OdeError::InvalidTableau);
        }
        let explicit = (0..s).all(|j| (j..s).all(|l| self.coeff(j, l) == 0.0));
        let weight_sum: f64 = self.b.iter().sum();
        if !explicit || (weight_sum - 1.0).abs() > 1e-12 {
            return Err(OdeError::InvalidTableau);
        }
        Ok(())
    }
}
