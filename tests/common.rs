//! Shared numeric helpers for the design tests.
//!
//! The magnitude-response sampler lives here, outside the library: the core
//! hands back coefficients and leaves response evaluation to callers.

/// Magnitude of the frequency response at normalised frequency `f`
/// (1 = Nyquist), by direct evaluation of `|Σ h[n]·e^{-jπfn}|`.
#[allow(unused)]
pub fn gain_at(coeffs: &[f64], f: f64) -> f64 {
    let (mut re, mut im) = (0.0_f64, 0.0_f64);
    for (n, &h) in coeffs.iter().enumerate() {
        let phase = std::f64::consts::PI * f * n as f64;
        re += h * phase.cos();
        im -= h * phase.sin();
    }
    (re * re + im * im).sqrt()
}

/// Largest magnitude response on a uniform grid over `[lo, hi]`
/// (normalised frequencies). Used to measure stopband sidelobe peaks.
#[allow(unused)]
pub fn peak_gain(coeffs: &[f64], lo: f64, hi: f64, points: usize) -> f64 {
    (0..points)
        .map(|i| lo + (hi - lo) * i as f64 / (points - 1) as f64)
        .map(|f| gain_at(coeffs, f))
        .fold(0.0_f64, f64::max)
}

/// Largest elementwise absolute difference between two tap vectors.
#[allow(unused)]
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "length mismatch: {} vs {}", a.len(), b.len());
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0_f64, f64::max)
}

/// Assert that `coeffs` is symmetric about its midpoint within `tol`.
#[allow(unused)]
pub fn assert_symmetric(coeffs: &[f64], tol: f64) {
    let n = coeffs.len();
    for i in 0..n / 2 {
        let diff = (coeffs[i] - coeffs[n - 1 - i]).abs();
        assert!(
            diff < tol,
            "h[{i}]={} differs from h[{}]={} by {diff:.2e}",
            coeffs[i],
            n - 1 - i,
            coeffs[n - 1 - i]
        );
    }
}
