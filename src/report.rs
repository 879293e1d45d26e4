//! Line-oriented coefficient report.
//!
//! The convention consumed by out-of-process harnesses: lines starting with
//! `#` are comments, the literal marker [`COEFF_MARKER`] announces the
//! coefficient block, and every subsequent numeric line is one tap. An
//! in-process caller can skip this entirely and use the returned vector.

use std::io::{self, Write};

use crate::spec::FilterSpec;

/// Marker announcing the coefficient block. Always emitted on a comment
/// line (`# Coefficients:`).
pub const COEFF_MARKER: &str = "Coefficients:";

/// Write the full report: a commented header describing the request, the
/// marker line, one coefficient per line, and a trailing checksum comment.
///
/// Coefficients are printed with `{}` (shortest round-trip formatting), so
/// a parser recovers them bit-exactly.
pub fn write_report<W: Write>(out: &mut W, spec: &FilterSpec, coeffs: &[f64]) -> io::Result<()> {
    writeln!(out, "# FIR filter design")?;
    writeln!(out, "# Taps: {}", spec.num_taps)?;
    writeln!(out, "# Sampling frequency: {} Hz", spec.sample_rate)?;
    writeln!(out, "# Window: {}", spec.window.name())?;
    write!(out, "# Cutoffs:")?;
    for e in &spec.edges {
        write!(out, " {e}")?;
    }
    writeln!(out, " Hz")?;
    writeln!(out)?;
    writeln!(out, "# {COEFF_MARKER}")?;
    for c in coeffs {
        writeln!(out, "{c}")?;
    }
    let sum: f64 = coeffs.iter().sum();
    writeln!(out)?;
    writeln!(out, "# Sum of coefficients: {sum}")?;
    Ok(())
}

/// Parse coefficients back out of report text.
///
/// Skips everything before the marker; after it, `#` lines and anything
/// non-numeric are ignored. Returns an empty vector when the marker never
/// appears.
pub fn parse_coefficients(text: &str) -> Vec<f64> {
    let mut in_coeffs = false;
    let mut out = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.starts_with('#') {
            if line.contains(COEFF_MARKER) {
                in_coeffs = true;
            }
            continue;
        }
        if in_coeffs {
            if let Ok(v) = line.parse::<f64>() {
                out.push(v);
            }
        }
    }
    out
}
