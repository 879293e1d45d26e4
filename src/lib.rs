//! # firwin — windowed-sinc FIR filter design in pure Rust
//!
//! `firwin` synthesises multiband linear-phase FIR coefficients with the
//! classical windowed-sinc method: sample the ideal brick-wall impulse
//! response, taper it with one of twelve windows, and pin the gain at a
//! reference frequency to unity.
//!
//! ## Pipeline overview
//!
//! ```text
//! edges (Hz)
//!   │
//!   ├─ design::resolve()        validate + normalise → passband list
//!   ├─ design::ideal_response() multiband sinc sum, centred at (N-1)/2
//!   ├─ WindowKind::generate()   one of 12 symmetric tapers
//!   └─ design::assemble()       taper × ideal, ÷ gain at reference freq
//!        │
//!        └─→ Vec<f64>           N taps, symmetric about the midpoint
//! ```
//!
//! ## Quick start
//!
//! ```
//! use firwin::{design, WindowKind};
//!
//! // 15-tap lowpass at 500 Hz for a 2 kHz sample rate.
//! let h = design(15, 2000.0, WindowKind::Hamming, &[0.0, 500.0]).unwrap();
//! assert_eq!(h.len(), 15);
//!
//! // Unity gain at DC.
//! let dc: f64 = h.iter().sum();
//! assert!((dc - 1.0).abs() < 1e-9);
//! ```
//!
//! Passbands are consecutive pairs of the edge list, so one call covers
//! lowpass (`[0, f]`), highpass (`[f, fs/2]`), bandpass (`[f1, f2]`) and
//! arbitrary multiband (`[f1, f2, f3, f4, …]`) designs.
//!
//! Every function here is pure: no shared state, no I/O, no caching between
//! calls. Concurrent callers need no coordination.

pub mod design;
pub mod error;
pub mod report;
pub mod spec;
pub mod window;

// ── Crate-root re-exports ─────────────────────────────────────────────────
//
// Everything a downstream user is likely to need is available directly as
// `firwin::Foo` without having to know the internal module layout.

// error
pub use error::{DesignError, Result};

// spec
pub use spec::FilterSpec;

// window — selector + the individual generators
pub use window::{
    bartlett, blackman, blackman_harris, bohman, cosine, flat_top, hamming, hann, nuttall,
    parzen, rectangular, WindowKind, ALL_WINDOWS,
};

// design — pipeline stages for callers that want them separately
pub use design::{assemble, ideal_response, reference_frequency, resolve, sinc, Passband};

// report — textual protocol for out-of-process harnesses
pub use report::{parse_coefficients, write_report, COEFF_MARKER};

/// Design a linear-phase FIR filter with the windowed-sinc method.
///
/// This is the main entry point. Consecutive pairs of `edges` (Hz) are
/// passbands; a band starting at 0 passes DC and a band ending at
/// `sample_rate/2` passes Nyquist. The result is rescaled for unity gain at
/// the reference frequency (DC, Nyquist, or the first band's midpoint —
/// whichever the first band pins down).
///
/// # Arguments
///
/// * `num_taps`    – Filter length (≥ 1). Must be odd when a passband
///   reaches Nyquist.
/// * `sample_rate` – Sampling rate in Hz (> 0).
/// * `window`      – Taper applied to the ideal impulse response.
/// * `edges`       – Band edges in Hz, strictly increasing, within
///   `[0, sample_rate/2]`. An odd-length list gets the missing DC or
///   Nyquist boundary inserted implicitly.
///
/// # Returns
///
/// `num_taps` coefficients, symmetric about `(num_taps-1)/2` up to
/// floating-point rounding.
///
/// # Errors
///
/// * [`DesignError::ZeroTaps`] — `num_taps == 0`.
/// * [`DesignError::InvalidSampleRate`] — non-positive or non-finite rate.
/// * [`DesignError::InvalidEdges`] — unordered or out-of-range edges.
/// * [`DesignError::EvenLengthNyquistConflict`] — even `num_taps` with a
///   passband reaching Nyquist.
/// * [`DesignError::ZeroGainAtReference`] — degenerate band specification.
///
/// All checks run before any synthesis: a failed design produces no
/// partial output.
///
/// # Examples
///
/// ```
/// use firwin::{design, WindowKind};
///
/// // Two passbands: 1–2 kHz and 3–3.5 kHz at fs = 8 kHz.
/// let h = design(
///     21,
///     8000.0,
///     WindowKind::Blackman,
///     &[1000.0, 2000.0, 3000.0, 3500.0],
/// ).unwrap();
/// assert_eq!(h.len(), 21);
/// ```
pub fn design(
    num_taps: usize,
    sample_rate: f64,
    window: WindowKind,
    edges: &[f64],
) -> Result<Vec<f64>> {
    design_spec(&FilterSpec::new(
        num_taps,
        sample_rate,
        window,
        edges.to_vec(),
    ))
}

/// Design from a [`FilterSpec`], honouring its `scale` flag.
///
/// [`design()`] is this with scaling always on.
pub fn design_spec(spec: &FilterSpec) -> Result<Vec<f64>> {
    if spec.num_taps == 0 {
        return Err(DesignError::ZeroTaps);
    }
    let bands = design::resolve(&spec.edges, spec.sample_rate, spec.num_taps)?;
    let ideal = design::ideal_response(&bands, spec.num_taps);
    let taper = spec.window.generate(spec.num_taps);
    design::assemble(&ideal, &taper, &bands, spec.scale)
}
