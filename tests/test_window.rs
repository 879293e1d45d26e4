//! Window-formula spot checks against hand-computed closed-form values.
//!
//! Five-point windows keep the arithmetic checkable by hand: the sample
//! points land on cos values of 0, ±1.
mod common;
use approx::assert_abs_diff_eq;
use common::assert_symmetric;
use firwin::{window, WindowKind, ALL_WINDOWS};

#[test]
fn hamming_five_point_values() {
    let w = window::hamming(5);
    let expected = [0.08, 0.54, 1.0, 0.54, 0.08];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn hann_five_point_values() {
    let w = window::hann(5);
    let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn blackman_five_point_values() {
    let w = window::blackman(5);
    let expected = [0.0, 0.34, 1.0, 0.34, 0.0];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn bartlett_five_point_values() {
    let w = window::bartlett(5);
    let expected = [0.0, 0.5, 1.0, 0.5, 0.0];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn parzen_five_point_values() {
    let w = window::parzen(5);
    let expected = [0.0, 0.25, 1.0, 0.25, 0.0];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn bohman_five_point_values() {
    let w = window::bohman(5);
    let inv_pi = 1.0 / std::f64::consts::PI;
    let expected = [0.0, inv_pi, 1.0, inv_pi, 0.0];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn nuttall_endpoints_match_the_coefficient_sum() {
    // a0 − a1 + a2 − a3 with the Nuttall coefficient set.
    let w = window::nuttall(5);
    assert_abs_diff_eq!(w[0], 0.0003628, epsilon = 1e-10);
    assert_abs_diff_eq!(w[2], 1.0, epsilon = 1e-12);
}

#[test]
fn blackman_harris_endpoints_match_the_coefficient_sum() {
    let w = window::blackman_harris(5);
    assert_abs_diff_eq!(w[0], 6.0e-5, epsilon = 1e-10);
    assert_abs_diff_eq!(w[2], 1.0, epsilon = 1e-12);
}

#[test]
fn flat_top_endpoints_dip_below_zero() {
    let w = window::flat_top(5);
    assert_abs_diff_eq!(w[0], -0.000421051, epsilon = 1e-9);
    assert!(w[0] < 0.0);
}

#[test]
fn cosine_five_point_values() {
    // sin(π(n+0.5)/5) — the only window over N rather than M.
    let w = window::cosine(5);
    let expected = [
        (0.1 * std::f64::consts::PI).sin(),
        (0.3 * std::f64::consts::PI).sin(),
        1.0,
        (0.3 * std::f64::consts::PI).sin(),
        (0.1 * std::f64::consts::PI).sin(),
    ];
    for (a, b) in w.iter().zip(expected) {
        assert_abs_diff_eq!(*a, b, epsilon = 1e-12);
    }
}

#[test]
fn dispatch_matches_the_free_functions() {
    assert_eq!(WindowKind::Parzen.generate(33), window::parzen(33));
    assert_eq!(WindowKind::Cosine.generate(33), window::cosine(33));
    assert_eq!(WindowKind::FlatTop.generate(33), window::flat_top(33));
}

#[test]
fn every_kind_is_symmetric_at_larger_lengths() {
    for kind in ALL_WINDOWS {
        assert_symmetric(&kind.generate(255), 1e-12);
        assert_symmetric(&kind.generate(256), 1e-12);
    }
}
