pub mod config;
pub mod constants;
pub mod dsp;
pub mod error;
pub mod vectors;

pub use config::{CutoffFrequency, DesignConfig};
pub use error::{HarnessError, Result};
