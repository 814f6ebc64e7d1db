//! Configuration for the FIR verification harness.
//!
//! All tunables are threaded explicitly into the component entry points;
//! there are no ambient globals. `DesignConfig::default()` matches the
//! parameters the hardware testbench was built around (fc = 0.1, 128 taps,
//! 16-bit samples).

use std::fmt;
use std::str::FromStr;

use crate::constants::{MAX_BIT_WIDTH, MAX_CUTOFF, MIN_BIT_WIDTH, MIN_CUTOFF};
use crate::error::{HarnessError, Result};

/// Normalized low-pass cutoff frequency.
///
/// Expressed as a fraction of the sample rate and constrained to the open
/// interval (0, 0.5); the sinc and window functions are degenerate outside
/// that range.
///
/// # Example
/// ```
/// use firbench::config::CutoffFrequency;
///
/// let fc: CutoffFrequency = "0.1".parse().unwrap();
/// assert!((fc.as_f64() - 0.1).abs() < 1e-12);
/// assert!("0.5".parse::<CutoffFrequency>().is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CutoffFrequency(f64);

impl CutoffFrequency {
    /// Create a validated cutoff frequency.
    pub fn new(fc: f64) -> Result<Self> {
        if !(fc > MIN_CUTOFF && fc < MAX_CUTOFF) {
            return Err(HarnessError::InvalidCutoff(fc));
        }
        Ok(Self(fc))
    }

    /// Get the cutoff as a fraction of the sample rate.
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl Default for CutoffFrequency {
    fn default() -> Self {
        Self(0.1)
    }
}

impl fmt::Display for CutoffFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CutoffFrequency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let fc: f64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid cutoff frequency: {}", s))?;
        Self::new(fc).map_err(|e| e.to_string())
    }
}

/// Filter design parameters.
#[derive(Debug, Clone)]
pub struct DesignConfig {
    /// Normalized cutoff frequency in (0, 0.5)
    pub cutoff_frequency: CutoffFrequency,
    /// Number of filter taps (both odd and even counts are supported)
    pub taps: usize,
    /// Signed sample/coefficient width in bits
    pub bit_width: u32,
}

impl DesignConfig {
    /// Check the tap count and bit width; the cutoff is validated on
    /// construction.
    pub fn validate(&self) -> Result<()> {
        if self.taps == 0 {
            return Err(HarnessError::InvalidTapCount(self.taps));
        }
        if !(MIN_BIT_WIDTH..=MAX_BIT_WIDTH).contains(&self.bit_width) {
            return Err(HarnessError::InvalidBitWidth(self.bit_width));
        }
        Ok(())
    }

    /// Full positive scale of the signed fixed-point grid: 2^(W-1) - 1.
    pub fn scale(&self) -> i32 {
        ((1i64 << (self.bit_width - 1)) - 1) as i32
    }
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            cutoff_frequency: CutoffFrequency::default(),
            taps: 128,
            bit_width: 16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cutoff_parse_valid() {
        let fc: CutoffFrequency = "0.25".parse().unwrap();
        assert!((fc.as_f64() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_cutoff_parse_invalid() {
        assert!("abc".parse::<CutoffFrequency>().is_err());
        assert!("0".parse::<CutoffFrequency>().is_err());
        assert!("0.5".parse::<CutoffFrequency>().is_err());
        assert!("-0.1".parse::<CutoffFrequency>().is_err());
        assert!("nan".parse::<CutoffFrequency>().is_err());
    }

    #[test]
    fn test_default_config() {
        let config = DesignConfig::default();
        assert_eq!(config.taps, 128);
        assert_eq!(config.bit_width, 16);
        assert!((config.cutoff_frequency.as_f64() - 0.1).abs() < 1e-12);
        assert_eq!(config.scale(), 32767);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_degenerate_parameters() {
        let no_taps = DesignConfig {
            taps: 0,
            ..Default::default()
        };
        assert!(no_taps.validate().is_err());

        for bit_width in [0, 1, 33] {
            let config = DesignConfig {
                bit_width,
                ..Default::default()
            };
            assert!(config.validate().is_err(), "bit width {}", bit_width);
        }
    }
}
