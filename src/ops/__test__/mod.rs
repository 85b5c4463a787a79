use crate::ops::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};
use num_traits::{One, Zero};

fn samples() -> Vec<Complex> {
    vec![
        Complex::new(1.0, 0.0),
        Complex::new(-2.5, 0.75),
        Complex::new(0.3, -4.0),
        Complex::new(-1.0, -1.0),
        Complex::new(3.0, 2.0),
        Complex::new(0.0, 1e-3),
    ]
}

#[test]
fn test_div_then_mul_roundtrips() {
    for &a in &samples() {
        for &b in &samples() {
            let q = div(a, b);
            assert_relative_eq!(mul(q, b), a, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}

#[test]
fn test_add_sub_identity() {
    for &a in &samples() {
        for &c in &samples() {
            assert_abs_diff_eq!(add(a, sub(c, a)), c, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_operators_match_free_functions() {
    let a = Complex::new(1.5, -2.0);
    let b = Complex::new(-0.5, 3.0);
    assert_eq!(a + b, add(a, b));
    assert_eq!(a - b, sub(a, b));
    assert_eq!(a * b, mul(a, b));
    assert_eq!(a / b, div(a, b));
    assert_eq!(-a, Complex::new(-1.5, 2.0));
    assert_eq!(a * 2.0, Complex::new(3.0, -4.0));
    assert_eq!(mul(Complex::new(0.0, 1.0), Complex::new(0.0, 1.0)), Complex::new(-1.0, 0.0));
}

#[test]
fn test_div_by_zero_is_infinite_sentinel() {
    let zero = Complex::zero();
    for a in samples().into_iter().chain([Complex::zero()]) {
        let q = div(a, zero);
        assert_eq!(q.re, f64::INFINITY);
        assert_eq!(q.im, f64::INFINITY);
    }
    assert!(!(Complex::one() / zero).is_finite());
}

#[test]
fn test_sqrt_squares_back_on_right_half_plane() {
    let points = [
        Complex::new(4.0, 0.0),
        Complex::new(0.0, 0.0),
        Complex::new(0.0, 2.0),
        Complex::new(0.0, -2.0),
        Complex::new(1.0, 1.0),
        Complex::new(3.5, -7.25),
    ];
    for &z in &points {
        let w = sqrt(z);
        assert_abs_diff_eq!(w * w, z, epsilon = 1e-12);
    }
}

#[test]
fn test_sqrt_is_principal_branch() {
    for ix in -10..=10 {
        for iy in -10..=10 {
            let z = Complex::new(ix as f64 * 0.5, iy as f64 * 0.5);
            assert!(sqrt(z).re >= 0.0, "sqrt({}) left the right half-plane", z);
        }
    }
}

#[test]
fn test_sqrt_jumps_across_branch_cut() {
    let above = sqrt(Complex::new(-4.0, 1e-12));
    let below = sqrt(Complex::new(-4.0, -1e-12));
    assert_abs_diff_eq!(above, Complex::new(0.0, 2.0), epsilon = 1e-9);
    assert_abs_diff_eq!(below, Complex::new(0.0, -2.0), epsilon = 1e-9);
}

#[test]
fn test_magnitude() {
    assert_relative_eq!(magnitude(Complex::new(3.0, -4.0)), 5.0);
    assert_relative_eq!(Complex::new(0.0, 0.0).magnitude(), 0.0);
}

#[test]
fn test_inversion_sentinel_near_pole() {
    assert!(stage3(Complex::new(0.0, 0.0)).is_nan());
    assert!(stage3(Complex::new(1e-7, 0.0)).is_nan());
    assert!(stage3(Complex::new(0.0, -5e-7)).is_nan());
    let s = stage3(Complex::new(0.0, 0.0));
    assert!(s.re.is_nan() && s.im.is_nan());
    assert_relative_eq!(stage3(Complex::new(1e-5, 0.0)).re, 1e5, max_relative = 1e-12);
}

#[test]
fn test_stage_functions() {
    assert_abs_diff_eq!(stage1(Complex::new(-1.0, 0.0)), Complex::new(0.0, 1.0), epsilon = 1e-12);
    // Right half-plane lands inside the unit disk.
    for &w in &[Complex::new(0.1, 3.0), Complex::new(2.0, -1.0), Complex::new(1e-3, 0.0)] {
        assert!(stage2(w).magnitude() < 1.0);
    }
    assert_abs_diff_eq!(stage3(Complex::new(0.0, 2.0)), Complex::new(0.0, -0.5), epsilon = 1e-12);
    assert_relative_eq!(stage4(Complex::new(1.0, 0.0)), Complex::new(2.718281828459045, 0.0));
}

#[test]
fn test_end_to_end_point() {
    let z = Complex::new(4.0, 0.0);
    let s1 = stage1(z);
    assert_abs_diff_eq!(s1, Complex::new(2.0, 0.0), epsilon = 1e-12);
    let s2 = stage2(s1);
    assert_abs_diff_eq!(s2, Complex::new(1.0 / 3.0, 0.0), epsilon = 1e-12);
    let s3 = stage3(s2);
    assert_abs_diff_eq!(s3, Complex::new(3.0, 0.0), epsilon = 1e-12);
    let s4 = stage4(s3);
    assert_abs_diff_eq!(s4, Complex::new(3.0 * E, 0.0), epsilon = 1e-12);
    assert_abs_diff_eq!(s4.re, 8.1548, epsilon = 1e-4);
    assert_eq!(transform(z), s4);
}

#[test]
fn test_stage_enum() {
    assert_eq!(Stage::ALL.len(), 5);
    for (i, stage) in Stage::ALL.iter().enumerate() {
        assert_eq!(stage.index(), i);
        assert_eq!(Stage::from_index(i), Ok(*stage));
    }
    assert_eq!(Stage::from_index(5), Err(crate::GridError::StageIndex(5)));

    let z = Complex::new(4.0, 0.0);
    assert_eq!(Stage::Identity.apply(z), z);
    let composed = Stage::ALL.iter().fold(z, |acc, s| s.apply(acc));
    assert_eq!(composed, transform(z));
}

#[test]
fn test_display() {
    assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
    assert_eq!(Complex::new(0.5, 3.0).to_string(), "0.5+3i");
}
