//! Windowed-sinc low-pass design and fixed-point quantization.

use std::f64::consts::PI;

use crate::config::DesignConfig;
use crate::constants::{MAX_BIT_WIDTH, MAX_CUTOFF, MIN_BIT_WIDTH, MIN_CUTOFF};
use crate::error::{HarnessError, Result};

/// Normalized sinc with the convention sinc(0) = 1.
fn sinc(x: f64) -> f64 {
    if x == 0.0 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Hamming window of length `len`: 0.54 - 0.46*cos(2*pi*k / (len - 1)).
fn hamming(len: usize) -> Vec<f64> {
    if len == 1 {
        return vec![1.0];
    }
    (0..len)
        .map(|k| 0.54 - 0.46 * (2.0 * PI * k as f64 / (len - 1) as f64).cos())
        .collect()
}

/// Ideal low-pass impulse response sampled at integer offsets from the
/// center (N-1)/2, shaped by a Hamming window to suppress sidelobes.
///
/// `cutoff` is a fraction of the sample rate in (0, 0.5); `num_taps` may be
/// odd or even (an even count places the center between two taps).
///
/// # Errors
/// Returns `HarnessError::InvalidCutoff` / `InvalidTapCount` for degenerate
/// parameters; the sinc and window are undefined outside those ranges.
pub fn windowed_sinc_lowpass(cutoff: f64, num_taps: usize) -> Result<Vec<f64>> {
    if !(cutoff > MIN_CUTOFF && cutoff < MAX_CUTOFF) {
        return Err(HarnessError::InvalidCutoff(cutoff));
    }
    if num_taps == 0 {
        return Err(HarnessError::InvalidTapCount(num_taps));
    }

    let center = (num_taps - 1) as f64 / 2.0;
    let window = hamming(num_taps);

    Ok((0..num_taps)
        .map(|n| sinc(2.0 * cutoff * (n as f64 - center)) * window[n])
        .collect())
}

/// Peak-normalized quantization to a signed `bit_width`-bit grid.
///
/// Every coefficient is scaled by SCALE / max_abs with SCALE = 2^(W-1) - 1,
/// so the largest-magnitude coefficient lands on full scale and no headroom
/// is wasted. Rounding is to nearest with ties away from zero
/// (`f64::round`); this choice fixes the exact bit pattern of the persisted
/// hex output.
pub fn quantize(coeffs: &[f64], bit_width: u32) -> Result<Vec<i32>> {
    if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&bit_width) {
        return Err(HarnessError::InvalidBitWidth(bit_width));
    }
    let scale = ((1i64 << (bit_width - 1)) - 1) as f64;
    let max_abs = coeffs.iter().fold(0.0f64, |m, &c| m.max(c.abs()));
    if max_abs == 0.0 {
        return Ok(vec![0; coeffs.len()]);
    }
    Ok(coeffs
        .iter()
        .map(|&c| (c / max_abs * scale).round() as i32)
        .collect())
}

/// Design and quantize a low-pass coefficient vector in one step.
pub fn design_quantized_lowpass(config: &DesignConfig) -> Result<Vec<i32>> {
    config.validate()?;
    let response = windowed_sinc_lowpass(config.cutoff_frequency.as_f64(), config.taps)?;
    let quantized = quantize(&response, config.bit_width)?;
    log::debug!(
        "Designed {} taps at fc={} ({} bits)",
        quantized.len(),
        config.cutoff_frequency,
        config.bit_width
    );
    Ok(quantized)
}
