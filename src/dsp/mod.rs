pub mod convolve;
pub mod design;
pub mod metrics;

pub use convolve::{check_coefficient_count, convolve_truncated, unity_coefficients};
pub use design::{design_quantized_lowpass, quantize, windowed_sinc_lowpass};
pub use metrics::{FidelityReport, analyze};
