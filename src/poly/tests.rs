use super::*;

use num_complex::Complex;

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

/// Every expected root has a distinct match among `roots`.
fn assert_roots(roots: &[Complex<f64>], expected: &[Complex<f64>], tol: f64) {
    assert_eq!(roots.len(), expected.len(), "root count: {roots:?}");
    let mut used = vec![false; roots.len()];
    for e in expected {
        let hit = roots
            .iter()
            .enumerate()
            .position(|(i, z)| !used[i] && (z - e).norm() < tol);
        match hit {
            Some(i) => used[i] = true,
            None => panic!("no root near {e} in {roots:?}"),
        }
    }
}

fn real(x: f64) -> Complex<f64> {
    Complex::new(x, 0.0)
}

#[test]
fn difference_of_squares() {
    let roots = find_roots(&[-1.0, 0.0, 1.0], &PolyRootSettings::default()).unwrap().roots;
    assert_roots(&roots, &[real(-1.0), real(1.0)], 1e-12);
    // ascending real part
    assert!(roots[0].re < roots[1].re);
}

#[test]
fn cube_roots_of_unity() {
    let roots = find_roots(&[-1.0, 0.0, 0.0, 1.0], &PolyRootSettings::default()).unwrap().roots;
    let h = 3.0_f64.sqrt() / 2.0;
    assert_roots(
        &roots,
        &[real(1.0), Complex::new(-0.5, h), Complex::new(-0.5, -h)],
        1e-12,
    );
    assert_near(roots[2].re, 1.0, 1e-12, "largest real part last");
}

#[test]
fn roots_at_origin_are_split_off() {
    // x²(x² - 1)
    let roots = find_roots(&[0.0, 0.0, -1.0, 0.0, 1.0], &PolyRootSettings::default()).unwrap().roots;
    assert_eq!(roots.len(), 4);
    assert_eq!(roots[1], real(0.0));
    assert_eq!(roots[2], real(0.0));
    assert_roots(&roots, &[real(-1.0), real(0.0), real(0.0), real(1.0)], 1e-12);

    // 3x
    let roots = find_roots(&[0.0, 3.0], &PolyRootSettings::default()).unwrap().roots;
    assert_eq!(roots, vec![real(0.0)]);
}

#[test]
fn vanishing_leading_coefficients_dropped() {
    let roots = find_roots(&[2.0, 3.0, 1e-20], &PolyRootSettings::default()).unwrap().roots;
    assert_roots(&roots, &[real(-2.0 / 3.0)], 1e-12);
}

#[test]
fn constant_and_zero_polynomials() {
    let s = PolyRootSettings::default();
    assert!(find_roots(&[5.0], &s).unwrap().roots.is_empty());
    assert!(find_roots(&[0.0, 0.0, 0.0], &s).unwrap().roots.is_empty());
    let empty: &[f64] = &[];
    let res = find_roots(empty, &s).unwrap();
    assert!(res.roots.is_empty());
    assert!(res.converged);
    assert_eq!(res.iterations, 0);
}

#[test]
fn wilkinson_ten() {
    // (x - 1)(x - 2)…(x - 10)
    let mut c = vec![1.0];
    for k in 1..=10 {
        c.insert(0, 0.0);
        for i in 0..c.len() - 1 {
            c[i] -= k as f64 * c[i + 1];
        }
    }
    let roots = find_roots(&c, &PolyRootSettings::default()).unwrap().roots;
    for (i, z) in roots.iter().enumerate() {
        assert_near(z.re, (i + 1) as f64, 1e-6, "real part");
        assert!(z.im.abs() < 1e-6);
    }
}

#[test]
fn large_roots_use_reversed_evaluation() {
    // x³ + 1e10
    let roots = find_roots(&[1e10, 0.0, 0.0, 1.0], &PolyRootSettings::default()).unwrap().roots;
    for z in &roots {
        assert_near(z.norm(), 1e10_f64.cbrt(), 1e-6, "modulus");
        assert!(eval(&[1e10, 0.0, 0.0, 1.0], *z).norm() < 1e-3);
    }
}

#[test]
fn double_root() {
    let roots = find_roots(&[1.0, -2.0, 1.0], &PolyRootSettings::default()).unwrap().roots;
    assert_roots(&roots, &[real(1.0), real(1.0)], 1e-6);
}

#[test]
fn degree_limits_coefficients() {
    let settings = PolyRootSettings {
        degree: Some(2),
        ..PolyRootSettings::default()
    };
    let roots = find_roots(&[-1.0, 0.0, 1.0, 5.0, 7.0], &settings).unwrap().roots;
    assert_roots(&roots, &[real(-1.0), real(1.0)], 1e-12);
}

#[test]
fn explicit_initial_guesses() {
    let settings = PolyRootSettings {
        initial_guesses: Some(vec![Complex::new(0.5, 0.5), Complex::new(-0.5, -0.5)]),
        ..PolyRootSettings::default()
    };
    let roots = find_roots(&[1.0, 0.0, 1.0], &settings).unwrap().roots;
    assert_roots(&roots, &[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)], 1e-12);

    let wrong = PolyRootSettings {
        initial_guesses: Some(vec![Complex::new(0.5, 0.5)]),
        ..PolyRootSettings::default()
    };
    assert_eq!(
        find_roots(&[1.0, 0.0, 1.0], &wrong).unwrap_err(),
        PolyError::GuessCount { expected: 2, got: 1 }
    );
}

#[test]
fn iteration_cap_returns_estimates() {
    let settings = PolyRootSettings {
        max_iter: 1,
        ..PolyRootSettings::default()
    };
    let res = find_roots(&[1.0, 0.0, 1.0], &settings).unwrap();
    assert!(!res.converged);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.roots.len(), 2);
    // close, but not polished
    assert_roots(&res.roots, &[Complex::new(0.0, 1.0), Complex::new(0.0, -1.0)], 0.5);
}

#[test]
fn converged_run_reports_sweeps() {
    let res = find_roots(&[-6.0, 11.0, -6.0, 1.0], &PolyRootSettings::default()).unwrap();
    assert!(res.converged);
    assert!(res.iterations >= 1 && res.iterations < 100);
}

// ═══════════════════════════════════════════════════════════════════
// Complex coefficients
// ═══════════════════════════════════════════════════════════════════

#[test]
fn complex_coefficients() {
    // z² - (1 + i)z + i = (z - 1)(z - i)
    let i = Complex::new(0.0, 1.0);
    let coeffs = [i, -(real(1.0) + i), real(1.0)];
    let res = find_roots(&coeffs, &PolyRootSettings::default()).unwrap();
    assert!(res.converged);
    assert_roots(&res.roots, &[real(1.0), i], 1e-12);
    // ascending real part: i before 1
    assert_near(res.roots[0].im, 1.0, 1e-12, "first root is i");
    for z in &res.roots {
        assert!(eval(&coeffs, *z).norm() < 1e-12);
    }
}

#[test]
fn complex_roots_at_origin_and_degree() {
    // z·(z - 2i)·(stray high-order term cut by degree)
    let coeffs = [
        real(0.0),
        Complex::new(0.0, -2.0),
        real(1.0),
        Complex::new(3.0, 4.0),
    ];
    let settings = PolyRootSettings {
        degree: Some(2),
        ..PolyRootSettings::default()
    };
    let roots = find_roots(&coeffs, &settings).unwrap().roots;
    assert_roots(&roots, &[real(0.0), Complex::new(0.0, 2.0)], 1e-12);
}

#[test]
fn horner_eval() {
    let z = Complex::new(1.0, 2.0);
    // 1 + 2z + 3z² at 1 + 2i
    assert_eq!(eval(&[1.0, 2.0, 3.0], z), Complex::new(-6.0, 16.0));
}
