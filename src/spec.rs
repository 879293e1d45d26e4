//! Design request description.
//!
//! [`FilterSpec`] holds every input to one design request. It is created
//! once per request and never mutated; the pipeline derives everything else
//! from it.

use crate::window::WindowKind;

/// Inputs for one filter design request.
///
/// All fields are `pub` so you can construct one with struct-update syntax:
///
/// ```
/// use firwin::{FilterSpec, WindowKind};
///
/// let spec = FilterSpec {
///     window: WindowKind::Blackman,
///     ..FilterSpec::new(101, 48_000.0, WindowKind::Hamming, vec![0.0, 8_000.0])
/// };
/// assert!(spec.scale);
/// assert_eq!(spec.window, WindowKind::Blackman);
/// ```
#[derive(Debug, Clone)]
pub struct FilterSpec {
    /// Number of taps in the designed filter.
    ///
    /// Must be at least 1. Must be odd when a passband reaches Nyquist
    /// (even-length symmetric filters are structurally zero there).
    pub num_taps: usize,

    /// Sampling rate in Hz. Must be finite and positive.
    pub sample_rate: f64,

    /// Window applied to the ideal impulse response.
    pub window: WindowKind,

    /// Band edges in Hz, strictly increasing, within `[0, sample_rate/2]`.
    ///
    /// Consecutive pairs are passbands: a band starting at 0 passes DC, a
    /// band ending at `sample_rate/2` passes Nyquist. An odd-length list
    /// gets the missing DC or Nyquist boundary inserted implicitly.
    pub edges: Vec<f64>,

    /// Rescale the coefficients so the frequency response has unity gain at
    /// the reference frequency (DC, Nyquist, or the first band's midpoint).
    ///
    /// Default: `true`.
    pub scale: bool,
}

impl FilterSpec {
    /// Build a spec with gain scaling enabled.
    pub fn new(num_taps: usize, sample_rate: f64, window: WindowKind, edges: Vec<f64>) -> Self {
        Self {
            num_taps,
            sample_rate,
            window,
            edges,
            scale: true,
        }
    }
}
