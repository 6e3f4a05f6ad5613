//! Cutoff pre-warping for the bilinear transform.
use std::f64::consts::PI;

use crate::error::{FilterError, Result};

/// Checks that a sample rate is usable for design.
pub fn check_sample_rate(sample_rate: f64) -> Result<()> {
    if !sample_rate.is_finite() || sample_rate <= 0.0 {
        return Err(FilterError::InvalidSampleRate {
            sample_rate,
            reason: "sample rate must be positive and finite",
        });
    }
    Ok(())
}

/// Maps a digital cutoff `f` (Hz) to the analog frequency (Hz) that the
/// bilinear transform at `sample_rate` sends back to `f`:
/// `(fs / π) · tan(π f / fs)`.
pub fn tangent_warp(f: f64, sample_rate: f64) -> Result<f64> {
    check_sample_rate(sample_rate)?;
    if f >= sample_rate / 2.0 {
        return Err(FilterError::InvalidSampleRate {
            sample_rate,
            reason: "cutoff frequency must be below the Nyquist frequency",
        });
    }
    Ok(sample_rate / PI * (PI * f / sample_rate).tan())
}
