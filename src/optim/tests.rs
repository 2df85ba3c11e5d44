use super::*;

use core::f64::consts::{FRAC_PI_4, SQRT_2};

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ═══════════════════════════════════════════════════════════════════
// Bracketing and domains
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bracket_from_zero_uses_unit_scale() {
    let br = find_bracket(|x| x - 0.5, 0.0).unwrap();
    assert_eq!((br.a, br.b), (0.0, 0.9));
    assert!(br.fa * br.fb <= 0.0);
}

#[test]
fn bracket_is_ordered() {
    // probes from -2 first change sign at 10·(-2)
    let br = find_bracket(|x| x + 5.0, -2.0).unwrap();
    assert_eq!(br, Bracket { a: -20.0, fa: -15.0, b: -2.0, fb: 3.0 });
}

#[test]
fn bracket_not_found() {
    assert!(find_bracket(|x| (x - 3.0) * (x - 3.0), 1.0).is_none());
}

#[test]
fn domain_inner_and_outer() {
    let (lo, hi) = find_domain(f64::sqrt, -1.0, 4.0, false);
    assert!(lo >= 0.0 && lo < 1e-3, "inner lower {lo}");
    assert_eq!(hi, 4.0);

    let (lo, _) = find_domain(f64::sqrt, -1.0, 4.0, true);
    assert!(lo < 0.0 && lo > -1e-3, "outer lower {lo}");

    let f = |x: f64| (1.0 - x).sqrt();
    let (lo, hi) = find_domain(f, 0.0, 3.0, false);
    assert_eq!(lo, 0.0);
    assert!(hi <= 1.0 && hi > 0.99, "inner upper {hi}");
    let (_, hi) = find_domain(f, 0.0, 3.0, true);
    assert!(hi > 1.0 && hi < 1.01, "outer upper {hi}");
}

// ═══════════════════════════════════════════════════════════════════
// Root finding
// ═══════════════════════════════════════════════════════════════════

#[test]
fn fzero_sqrt2() {
    let r = fzero(|x| x * x - 2.0, [0.0, 2.0], &RootSettings::default()).unwrap();
    assert!(r.converged);
    assert_near(r.x, SQRT_2, 1e-9, "fzero √2");
    assert!(r.evals < 20, "{} evals", r.evals);
}

#[test]
fn chandrupatla_sqrt2() {
    let r = chandrupatla(|x| x * x - 2.0, [0.0, 2.0], &RootSettings::default()).unwrap();
    assert!(r.converged);
    assert_near(r.x, SQRT_2, 1e-9, "chandrupatla √2");
    assert!(r.evals < 20, "{} evals", r.evals);
}

#[test]
fn finders_agree_on_transcendental() {
    let f = |x: f64| x.exp() - 10.0;
    let s = RootSettings::default();
    let a = fzero(f, (0.0, 5.0), &s).unwrap();
    let b = chandrupatla(f, (5.0, 0.0), &s).unwrap();
    assert_near(a.x, 10.0_f64.ln(), 1e-11, "fzero ln 10");
    assert_near(b.x, 10.0_f64.ln(), 1e-11, "chandrupatla ln 10");
}

#[test]
fn root_from_start_point() {
    assert_near(root(f64::cos, 1.0), core::f64::consts::FRAC_PI_2, 1e-10, "cos");
    let r = fzero(|x| x * x * x - x - 1.0, 1.0, &RootSettings::default()).unwrap();
    assert_near(r.x, 1.324_717_957_244_746, 1e-10, "plastic number");
}

#[test]
fn root_skips_undefined_region() {
    // ln is NaN on [-1, 0)
    let r = fzero(f64::ln, [-1.0, 3.0], &RootSettings::default()).unwrap();
    assert_near(r.x, 1.0, 1e-10, "fzero ln");
    assert_near(root(f64::ln, [-1.0, 3.0]), 1.0, 1e-10, "root ln");
}

#[test]
fn exact_root_at_endpoint() {
    let r = chandrupatla(|x| x - 1.0, [1.0, 4.0], &RootSettings::default()).unwrap();
    assert_eq!(r.x, 1.0);
    assert_eq!(r.iterations, 0);
}

#[test]
fn point_without_bracket_falls_back_to_newton() {
    // double root: no sign change anywhere
    let r = chandrupatla(|x| (x - 3.0) * (x - 3.0), 1.0, &RootSettings::default()).unwrap();
    assert!(r.converged);
    assert_near(r.x, 3.0, 1e-3, "double root");
}

#[test]
fn interval_without_sign_change_minimizes_abs() {
    let r = fzero(|x| (x - 1.0) * (x - 1.0), [0.0, 3.0], &RootSettings::default()).unwrap();
    assert!(r.converged);
    assert_near(r.x, 1.0, 1e-6, "touching root");

    let r = chandrupatla(|x| x * x + 1.0, [-2.0, 3.0], &RootSettings::default()).unwrap();
    assert!(!r.converged);
    assert_near(r.x, 0.0, 1e-6, "closest approach");
    assert_near(r.fx, 1.0, 1e-12, "closest value");
}

#[test]
fn iteration_cap_reported() {
    let settings = RootSettings {
        max_iter: 2,
        ..RootSettings::default()
    };
    let r = chandrupatla(|x| x * x - 2.0, [0.0, 2.0], &settings).unwrap();
    assert!(!r.converged);
    assert_eq!(r.iterations, 2);

    let r = fzero(|x| x * x - 2.0, [0.0, 2.0], &settings).unwrap();
    assert!(!r.converged);
    assert!(r.x > 0.0 && r.x < 2.0);
}

#[test]
fn non_finite_start_rejected() {
    let s = RootSettings::default();
    assert_eq!(fzero(|x| x, f64::NAN, &s).unwrap_err(), OptimError::InvalidInterval);
    assert_eq!(
        chandrupatla(|x| x, [0.0, f64::INFINITY], &s).unwrap_err(),
        OptimError::InvalidInterval
    );
    assert!(root(|x| x, f64::NAN).is_nan());
}

#[test]
fn newton_converges() {
    let r = newton(|x| x * x - 2.0, 1.0);
    assert!(r.converged);
    assert_near(r.x, SQRT_2, 1e-6, "newton √2");
    assert!(r.iterations < 10);
}

#[test]
fn newton_escapes_flat_start() {
    // f'(0) = 0: the first step is a random kick
    let r = newton(|x| x * x * x - 8.0, 0.0);
    assert!(r.converged);
    assert_near(r.x, 2.0, 1e-6, "cube root of 8");
}

#[test]
fn newton_gives_up_without_root() {
    let r = newton(|x| x * x + 1.0, 0.5);
    assert!(!r.converged);
    assert_eq!(r.iterations, 50);
}

// ═══════════════════════════════════════════════════════════════════
// Minimization
// ═══════════════════════════════════════════════════════════════════

#[test]
fn fminbr_cos() {
    let m = fminbr(f64::cos, 2.0, 4.0, &MinimizeSettings::default()).unwrap();
    assert!(m.converged);
    assert_near(m.x, core::f64::consts::PI, 1e-7, "argmin cos");
    assert_near(m.fx, -1.0, 1e-14, "min cos");
}

#[test]
fn fminbr_reversed_interval() {
    let f = |x: f64| x.powi(4) - 3.0 * x * x + x;
    let s = MinimizeSettings::default();
    let a = fminbr(f, -3.0, 3.0, &s).unwrap();
    let b = fminbr(f, 3.0, -3.0, &s).unwrap();
    assert_eq!(a.x, b.x);
    assert_near(a.x, -1.300_839_566, 1e-6, "double well");
}

#[test]
fn fminbr_clips_undefined_region() {
    let f = |x: f64| x * x.ln();
    let m = fminbr(f, -1.0, 2.0, &MinimizeSettings::default()).unwrap();
    let inv_e = (-1.0_f64).exp();
    assert_near(m.x, inv_e, 1e-6, "argmin x ln x");
    assert_near(m.fx, -inv_e, 1e-12, "min x ln x");
}

#[test]
fn fminbr_iteration_cap() {
    let settings = MinimizeSettings {
        max_iter: 3,
        ..MinimizeSettings::default()
    };
    let m = fminbr(f64::cos, 2.0, 4.0, &settings).unwrap();
    assert!(!m.converged);
    assert_eq!(m.iterations, 3);
    assert!(m.fx < -0.99);
}

#[test]
fn glomin_finds_global_where_fminbr_is_local() {
    let f = |x: f64| (3.0 * x).sin() + 0.1 * x;
    let local = fminbr(f, 0.0, 6.0, &MinimizeSettings::default()).unwrap();
    let global = glomin(f, 0.0, 6.0).unwrap();
    assert!(global.converged);
    assert_near(global.x, 1.559_683_16, 1e-5, "global argmin");
    assert!(global.fx < local.fx - 0.1, "{} vs {}", global.fx, local.fx);
}

#[test]
fn glomin_quadratic_and_degenerate() {
    let m = glomin(|x| (x - 0.3) * (x - 0.3), 0.0, 1.0).unwrap();
    assert_near(m.x, 0.3, 1e-6, "parabola");

    let m = glomin(|x| x * x, 2.0, 2.0).unwrap();
    assert_eq!((m.x, m.fx, m.iterations), (2.0, 4.0, 0));

    assert!(glomin(|x| x, f64::NEG_INFINITY, 0.0).is_err());
}

// ═══════════════════════════════════════════════════════════════════
// Curve intersection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn intersect_lines() {
    let c1 = (|t: f64| t, |t: f64| 2.0 * t);
    let c2 = (|s: f64| s, |s: f64| 3.0 - s);
    let p = generalized_newton(&c1, &c2, 0.0, 0.0);
    assert!(p.converged);
    assert_near(p.x, 1.0, 1e-9, "x");
    assert_near(p.y, 2.0, 1e-9, "y");
    assert_near(p.t2, 1.0, 1e-9, "t2");
}

#[test]
fn intersect_circle_and_line() {
    let circle = (f64::cos, f64::sin);
    let diagonal = (|s: f64| s, |s: f64| s);
    let p = generalized_newton(&circle, &diagonal, 0.5, 0.5);
    assert!(p.converged);
    assert_near(p.t1, FRAC_PI_4, 1e-3, "angle");

    // restarting from the result stays put
    let q = generalized_newton(&circle, &diagonal, p.t1, p.t2);
    assert_eq!((q.t1, q.t2), (p.t1, p.t2));
}

#[test]
fn parallel_lines_do_not_converge() {
    let c1 = (|t: f64| t, |t: f64| t);
    let c2 = (|s: f64| s, |s: f64| s + 1.0);
    assert!(!generalized_newton(&c1, &c2, 0.0, 0.0).converged);
}
