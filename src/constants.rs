//! Numeric bounds shared by filter design and parameter validation.

/// Lower exclusive bound for the normalized cutoff frequency.
pub const MIN_CUTOFF: f64 = 0.0;

/// Upper exclusive bound for the normalized cutoff frequency (Nyquist).
pub const MAX_CUTOFF: f64 = 0.5;

/// Narrowest supported sample width: one sign bit plus one magnitude bit.
pub const MIN_BIT_WIDTH: u32 = 2;

/// Widest supported sample width; samples and coefficients are stored as i32.
pub const MAX_BIT_WIDTH: u32 = 32;
