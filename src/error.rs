//! Error types for filter design.
//!
//! Every error is detected by a precondition check before any synthesis
//! begins, so a failed design never produces partial output. All errors are
//! deterministic for a given input — there is no transient kind worth
//! retrying.

use thiserror::Error;

/// Errors reported by the design pipeline.
#[derive(Debug, Error)]
pub enum DesignError {
    /// Window selector outside the recognised set.
    #[error("unknown window kind: {kind} (expected an index 0-11 or a window name)")]
    InvalidKind {
        /// The rejected index or name.
        kind: String,
    },

    /// Band edges empty, not strictly increasing, or outside `[0, fs/2]`.
    #[error("invalid band edges: {reason}")]
    InvalidEdges {
        /// What the validation found.
        reason: String,
    },

    /// Even tap count combined with a passband reaching Nyquist.
    ///
    /// An even-length symmetric FIR filter has a structural zero at Nyquist,
    /// so no choice of coefficients can pass that frequency.
    #[error("a {num_taps}-tap filter cannot pass Nyquist: even-length symmetric filters are structurally zero there (use an odd tap count)")]
    EvenLengthNyquistConflict {
        /// The rejected (even) tap count.
        num_taps: usize,
    },

    /// Gain normalisation requested but the response at the reference
    /// frequency is numerically zero (degenerate band specification,
    /// e.g. a vanishingly narrow band).
    #[error("frequency response is numerically zero at reference frequency {freq} (normalised, 1 = Nyquist); band specification is degenerate")]
    ZeroGainAtReference {
        /// The resolved reference frequency, normalised to `[0, 1]`.
        freq: f64,
    },

    /// A filter needs at least one tap.
    #[error("filter length must be at least 1 tap")]
    ZeroTaps,

    /// Sample rate not a positive finite number.
    #[error("invalid sample rate: {sample_rate} Hz (must be finite and > 0)")]
    InvalidSampleRate {
        /// The rejected sample rate.
        sample_rate: f64,
    },
}

/// A specialised `Result` for design operations.
pub type Result<T> = std::result::Result<T, DesignError>;
