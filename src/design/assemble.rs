//! Coefficient assembly: window application and gain normalisation.

use std::f64::consts::PI;

use super::bands::Passband;
use crate::error::{DesignError, Result};

/// Gain below this magnitude at the reference frequency is treated as zero.
const GAIN_EPSILON: f64 = 1e-10;

/// Frequency (normalised, 1 = Nyquist) at which the response is pinned to
/// unity gain: DC when the first band passes it, Nyquist when the first band
/// ends there, otherwise the first band's midpoint.
pub fn reference_frequency(bands: &[Passband]) -> f64 {
    let first = &bands[0];
    if first.lo == 0.0 {
        0.0
    } else if first.hi == 1.0 {
        1.0
    } else {
        0.5 * (first.lo + first.hi)
    }
}

/// Multiply the ideal response by the window and, when `scale` is set,
/// renormalise so the response at [`reference_frequency`] has unity gain.
///
/// The gain is evaluated as `Σ h[n]·cos(π·f·(n−alpha))` — for a symmetric
/// `h` this is the exact (zero-phase) frequency response at `f`.
///
/// # Errors
///
/// [`DesignError::ZeroGainAtReference`] when scaling is requested but the
/// evaluated gain is numerically zero, which indicates a degenerate band
/// specification (e.g. a vanishingly narrow band).
pub fn assemble(
    ideal: &[f64],
    window: &[f64],
    bands: &[Passband],
    scale: bool,
) -> Result<Vec<f64>> {
    debug_assert_eq!(ideal.len(), window.len());

    let mut h: Vec<f64> = ideal.iter().zip(window).map(|(i, w)| i * w).collect();

    if scale {
        let freq = reference_frequency(bands);
        let alpha = (h.len() as f64 - 1.0) / 2.0;
        let gain: f64 = h
            .iter()
            .enumerate()
            .map(|(n, &hn)| hn * (PI * freq * (n as f64 - alpha)).cos())
            .sum();
        if gain.abs() < GAIN_EPSILON {
            return Err(DesignError::ZeroGainAtReference { freq });
        }
        for hn in &mut h {
            *hn /= gain;
        }
    }

    Ok(h)
}
