//! Window functions for FIR filter design.
//!
//! Twelve classical tapers, selectable by [`WindowKind`]. The enum
//! discriminants are stable (0–11) because external callers address windows
//! by index.
//!
//! ## Selection guide
//!
//! | window          | first sidelobe | use when                         |
//! |-----------------|----------------|----------------------------------|
//! | Rectangular     | −13 dB         | narrowest main lobe wins         |
//! | Hamming         | −43 dB         | general purpose                  |
//! | Hann            | −32 dB         | spectral analysis                |
//! | Blackman        | −58 dB         | higher dynamic range             |
//! | Nuttall         | −93 dB         | very low leakage                 |
//! | Blackman-Harris | −92 dB         | very low leakage                 |
//! | Flat-top        | −93 dB         | amplitude-accurate measurement   |
//!
//! Every window is a pure function of `(kind, length)`. All formulas index
//! `n = 0..N-1` over the denominator `M = N-1`, except [`cosine`], which is a
//! half-period sine over `N` — a genuine mathematical distinction, not a
//! convention slip.

use std::f64::consts::PI;
use std::str::FromStr;

use crate::error::DesignError;

/// Window function selector.
///
/// Discriminant values are part of the external interface and must not be
/// reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum WindowKind {
    /// All-ones (boxcar) window.
    Rectangular = 0,
    /// `0.54 − 0.46·cos(2πn/M)`.
    Hamming = 1,
    /// `0.42 − 0.5·cos(2πn/M) + 0.08·cos(4πn/M)`.
    Blackman = 2,
    /// Triangular taper `1 − |2n/M − 1|` (alias of [`WindowKind::Bartlett`]).
    Triangular = 3,
    /// Piecewise-cubic B-spline taper.
    Parzen = 4,
    /// `(1−x)·cos(πx) + sin(πx)/π` over `x = |2n/M − 1|`.
    Bohman = 5,
    /// Minimum 4-term cosine sum, Nuttall coefficients.
    Nuttall = 6,
    /// Minimum 4-term cosine sum, Blackman-Harris coefficients.
    BlackmanHarris = 7,
    /// 5-term cosine sum optimised for flat passband amplitude.
    FlatTop = 8,
    /// Triangular taper with zero endpoints, `1 − |2n/M − 1|`.
    Bartlett = 9,
    /// Raised cosine `0.5 − 0.5·cos(2πn/M)`.
    Hann = 10,
    /// Half-period sine `sin(π(n+0.5)/N)`.
    Cosine = 11,
}

/// All window kinds in discriminant order.
pub const ALL_WINDOWS: [WindowKind; 12] = [
    WindowKind::Rectangular,
    WindowKind::Hamming,
    WindowKind::Blackman,
    WindowKind::Triangular,
    WindowKind::Parzen,
    WindowKind::Bohman,
    WindowKind::Nuttall,
    WindowKind::BlackmanHarris,
    WindowKind::FlatTop,
    WindowKind::Bartlett,
    WindowKind::Hann,
    WindowKind::Cosine,
];

impl WindowKind {
    /// Generate the window as `n` symmetric weights.
    ///
    /// `n == 0` yields an empty vector; `n == 1` yields `[1.0]` for every
    /// kind (the limit of each formula as the taper collapses to a point).
    pub fn generate(self, n: usize) -> Vec<f64> {
        match self {
            WindowKind::Rectangular => rectangular(n),
            WindowKind::Hamming => hamming(n),
            WindowKind::Blackman => blackman(n),
            WindowKind::Triangular | WindowKind::Bartlett => bartlett(n),
            WindowKind::Parzen => parzen(n),
            WindowKind::Bohman => bohman(n),
            WindowKind::Nuttall => nuttall(n),
            WindowKind::BlackmanHarris => blackman_harris(n),
            WindowKind::FlatTop => flat_top(n),
            WindowKind::Hann => hann(n),
            WindowKind::Cosine => cosine(n),
        }
    }

    /// Stable interop index (0–11).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in report headers.
    pub fn name(self) -> &'static str {
        match self {
            WindowKind::Rectangular => "Rectangular (boxcar)",
            WindowKind::Hamming => "Hamming",
            WindowKind::Blackman => "Blackman",
            WindowKind::Triangular => "Triangular",
            WindowKind::Parzen => "Parzen",
            WindowKind::Bohman => "Bohman",
            WindowKind::Nuttall => "Nuttall",
            WindowKind::BlackmanHarris => "Blackman-Harris",
            WindowKind::FlatTop => "Flat-top",
            WindowKind::Bartlett => "Bartlett",
            WindowKind::Hann => "Hann",
            WindowKind::Cosine => "Cosine (sine)",
        }
    }
}

impl TryFrom<u8> for WindowKind {
    type Error = DesignError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        ALL_WINDOWS
            .get(value as usize)
            .copied()
            .ok_or(DesignError::InvalidKind {
                kind: value.to_string(),
            })
    }
}

impl FromStr for WindowKind {
    type Err = DesignError;

    /// Accepts a numeric index (`"7"`) or a case-insensitive name
    /// (`"blackman-harris"`, `"blackmanharris"`, `"boxcar"`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(idx) = s.parse::<u8>() {
            return WindowKind::try_from(idx);
        }
        match s.to_ascii_lowercase().as_str() {
            "rectangular" | "boxcar" => Ok(WindowKind::Rectangular),
            "hamming" => Ok(WindowKind::Hamming),
            "blackman" => Ok(WindowKind::Blackman),
            "triangular" => Ok(WindowKind::Triangular),
            "parzen" => Ok(WindowKind::Parzen),
            "bohman" => Ok(WindowKind::Bohman),
            "nuttall" => Ok(WindowKind::Nuttall),
            "blackman-harris" | "blackmanharris" => Ok(WindowKind::BlackmanHarris),
            "flattop" | "flat-top" => Ok(WindowKind::FlatTop),
            "bartlett" => Ok(WindowKind::Bartlett),
            "hann" => Ok(WindowKind::Hann),
            "cosine" => Ok(WindowKind::Cosine),
            _ => Err(DesignError::InvalidKind { kind: s.to_string() }),
        }
    }
}

// ── Generators ───────────────────────────────────────────────────────────────

/// Rectangular (boxcar) window: all ones.
pub fn rectangular(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// Hamming window: `0.54 − 0.46·cos(2πn/M)`.
pub fn hamming(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| 0.54 - 0.46 * (2.0 * PI * i as f64 / m).cos())
        .collect()
}

/// Blackman window: `0.42 − 0.5·cos(2πn/M) + 0.08·cos(4πn/M)`.
pub fn blackman(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = 2.0 * PI * i as f64 / m;
            0.42 - 0.5 * x.cos() + 0.08 * (2.0 * x).cos()
        })
        .collect()
}

/// Bartlett / triangular window: `1 − |2n/M − 1|`, zero at both endpoints.
pub fn bartlett(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| 1.0 - (2.0 * i as f64 / m - 1.0).abs())
        .collect()
}

/// Parzen window: piecewise-cubic B-spline taper over `x = |2n/M − 1|`,
/// with regimes split at `x = 0.5`:
///
/// ```text
/// x ≤ 0.5:  1 − 6x²(1 − x)
/// x > 0.5:  2(1 − x)³
/// ```
pub fn parzen(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = (2.0 * i as f64 / m - 1.0).abs();
            if x <= 0.5 {
                1.0 - 6.0 * x * x * (1.0 - x)
            } else {
                let t = 1.0 - x;
                2.0 * t * t * t
            }
        })
        .collect()
}

/// Bohman window: `(1−x)·cos(πx) + sin(πx)/π` over `x = |2n/M − 1|`.
pub fn bohman(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = (2.0 * i as f64 / m - 1.0).abs();
            (1.0 - x) * (PI * x).cos() + (PI * x).sin() / PI
        })
        .collect()
}

/// Nuttall window (minimum 4-term cosine sum).
pub fn nuttall(n: usize) -> Vec<f64> {
    cosine_sum(n, &[0.363_581_9, 0.489_177_5, 0.136_599_5, 0.010_641_1])
}

/// Minimum 4-term Blackman-Harris window.
pub fn blackman_harris(n: usize) -> Vec<f64> {
    cosine_sum(n, &[0.35875, 0.48829, 0.14128, 0.01168])
}

/// Flat-top window (5-term cosine sum).
///
/// The endpoints dip slightly below zero; that is a property of the flat-top
/// coefficient set, not a numerical artifact.
pub fn flat_top(n: usize) -> Vec<f64> {
    cosine_sum(
        n,
        &[
            0.215_578_95,
            0.416_631_58,
            0.277_263_158,
            0.083_578_947,
            0.006_947_368,
        ],
    )
}

/// Hann window: `0.5 − 0.5·cos(2πn/M)`.
pub fn hann(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| 0.5 - 0.5 * (2.0 * PI * i as f64 / m).cos())
        .collect()
}

/// Cosine (half-sine) window: `sin(π(n+0.5)/N)`.
///
/// The denominator is the full length `N`, not `M = N-1` — the taper is one
/// half-period of a sine sampled at bin centres.
pub fn cosine(n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let len = n as f64;
    (0..n)
        .map(|i| (PI * (i as f64 + 0.5) / len).sin())
        .collect()
}

/// Generalised cosine-sum window with alternating signs:
/// `w[n] = Σ_k (−1)^k a[k]·cos(2πkn/M)`.
fn cosine_sum(n: usize, a: &[f64]) -> Vec<f64> {
    if n <= 1 {
        return vec![1.0; n];
    }
    let m = (n - 1) as f64;
    (0..n)
        .map(|i| {
            let x = 2.0 * PI * i as f64 / m;
            a.iter()
                .enumerate()
                .map(|(k, &ak)| {
                    let term = ak * (k as f64 * x).cos();
                    if k % 2 == 0 {
                        term
                    } else {
                        -term
                    }
                })
                .sum()
        })
        .collect()
}
