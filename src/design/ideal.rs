//! Ideal multiband impulse response.
//!
//! Closed-form inverse Fourier transform of a brick-wall multiband magnitude
//! response, sampled at `num_taps` points and centred on the group-delay
//! midpoint `alpha = (num_taps-1)/2`. No window applied yet.

use std::f64::consts::PI;

use super::bands::Passband;

/// Normalised sinc: `sin(πx)/(πx)`, with `sinc(0) = 1`.
pub fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        (PI * x).sin() / (PI * x)
    }
}

/// Sample the ideal (windowless) impulse response.
///
/// Each band `(lo, hi)` contributes `hi·sinc(hi·m) − lo·sinc(lo·m)` at
/// offset `m = n − alpha`; at `m = 0` this reduces to the band width.
/// Direct `O(num_taps × bands)` evaluation, no iteration.
pub fn ideal_response(bands: &[Passband], num_taps: usize) -> Vec<f64> {
    let alpha = (num_taps as f64 - 1.0) / 2.0;
    let mut h = vec![0.0; num_taps];
    for band in bands {
        for (n, hn) in h.iter_mut().enumerate() {
            let m = n as f64 - alpha;
            *hn += band.hi * sinc(band.hi * m) - band.lo * sinc(band.lo * m);
        }
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn sinc_at_zero_is_one() {
        assert_eq!(sinc(0.0), 1.0);
    }

    #[test]
    fn sinc_vanishes_at_integers() {
        for k in 1..6 {
            assert_abs_diff_eq!(sinc(k as f64), 0.0, epsilon = 1e-15);
        }
    }

    #[test]
    fn centre_tap_is_total_band_width() {
        let bands = [
            Passband { lo: 0.1, hi: 0.3 },
            Passband { lo: 0.6, hi: 0.7 },
        ];
        let h = ideal_response(&bands, 21);
        assert_abs_diff_eq!(h[10], 0.3, epsilon = 1e-15); // 0.2 + 0.1
    }

    #[test]
    fn response_is_symmetric_about_alpha() {
        let bands = [Passband { lo: 0.2, hi: 0.45 }];
        for n in [15, 16] {
            let h = ideal_response(&bands, n);
            for i in 0..n / 2 {
                assert_abs_diff_eq!(h[i], h[n - 1 - i], epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn fullband_response_is_a_delta_for_odd_length() {
        // lo = 0, hi = 1: sinc(m) vanishes at every non-zero integer offset.
        let h = ideal_response(&[Passband { lo: 0.0, hi: 1.0 }], 11);
        assert_abs_diff_eq!(h[5], 1.0, epsilon = 1e-15);
        for (i, &v) in h.iter().enumerate() {
            if i != 5 {
                assert_abs_diff_eq!(v, 0.0, epsilon = 1e-15);
            }
        }
    }
}
