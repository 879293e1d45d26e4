//! taps: design a windowed-sinc FIR filter and print the coefficient report.
//!
//! Output convention (stdout): `#`-prefixed comment lines describing the
//! request, a `# Coefficients:` marker, then one coefficient per line —
//! parseable by any line-oriented harness. Errors go to stderr, exit code 1.
//!
//! Examples:
//!   taps --taps 51  --fs 1000   --window hamming 200 300
//!   taps --taps 101 --fs 44100  --window 10      500 1000 3000 4000
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;

use firwin::{design_spec, report::write_report, FilterSpec, WindowKind};

#[derive(Parser, Debug)]
#[command(name = "taps", about = "Windowed-sinc FIR filter design")]
struct Args {
    /// Number of filter taps (odd required when a band reaches Nyquist).
    #[arg(long)]
    taps: usize,

    /// Sampling frequency in Hz.
    #[arg(long)]
    fs: f64,

    /// Window: an index 0-11 or a name (rectangular, hamming, blackman,
    /// triangular, parzen, bohman, nuttall, blackman-harris, flattop,
    /// bartlett, hann, cosine).
    #[arg(long, default_value = "hamming")]
    window: String,

    /// Skip unity-gain normalisation at the reference frequency.
    #[arg(long)]
    no_scale: bool,

    /// Band edges in Hz; consecutive pairs are passbands. Start with 0 for
    /// lowpass, end with fs/2 for highpass.
    #[arg(required = true)]
    edges: Vec<f64>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let window: WindowKind = args
        .window
        .parse()
        .with_context(|| format!("--window {}", args.window))?;

    let spec = FilterSpec {
        scale: !args.no_scale,
        ..FilterSpec::new(args.taps, args.fs, window, args.edges)
    };

    let coeffs = design_spec(&spec).context("filter design failed")?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &spec, &coeffs)?;
    out.flush()?;

    eprintln!(
        "designed {} taps ({} window, {} band edge(s))",
        spec.num_taps,
        window.name(),
        spec.edges.len()
    );
    Ok(())
}
