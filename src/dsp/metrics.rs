//! Fidelity metrics scoring a simulated output against the golden
//! reference: mean squared error, signal-to-noise ratio, and a
//! cross-correlation latency estimate.

use serde::Serialize;

/// Result of comparing a simulated sequence against the reference.
#[derive(Debug, Clone, Serialize)]
pub struct FidelityReport {
    /// Number of samples actually compared (shared prefix length)
    pub samples_compared: usize,
    /// Mean squared error over the compared samples
    pub mse: f64,
    /// Signal-to-noise ratio in dB; +inf for a perfect match
    pub snr_db: f64,
    /// Estimated latency in samples; positive means the simulated output
    /// lags the reference
    pub latency_samples: i64,
}

fn mean_power(values: &[i64]) -> f64 {
    let sum: f64 = values.iter().map(|&v| (v as f64) * (v as f64)).sum();
    sum / values.len() as f64
}

/// Mean of (reference[i] - simulated[i])^2. Both slices must have the same
/// non-zero length.
pub fn mean_squared_error(reference: &[i64], simulated: &[i64]) -> f64 {
    debug_assert_eq!(reference.len(), simulated.len());
    let sum: f64 = reference
        .iter()
        .zip(simulated)
        .map(|(&r, &s)| {
            let d = (r - s) as f64;
            d * d
        })
        .sum();
    sum / reference.len() as f64
}

/// Signal-to-noise ratio in dB, with the residual reference - simulated as
/// the noise. Zero noise power is a perfect match and yields +inf rather
/// than a division by zero.
pub fn snr_db(reference: &[i64], simulated: &[i64]) -> f64 {
    debug_assert_eq!(reference.len(), simulated.len());
    let noise_power = mean_squared_error(reference, simulated);
    if noise_power == 0.0 {
        return f64::INFINITY;
    }
    10.0 * (mean_power(reference) / noise_power).log10()
}

/// Estimate the simulated sequence's latency relative to the reference.
///
/// Computes the full cross-correlation over the lag grid -(N-1)..=(N-1)
/// with corr(lag) = sum over n of simulated[n + lag] * reference[n], and
/// returns the lag of the maximum correlation magnitude. A pure delay of k
/// samples is recovered as +k. Equal-magnitude peaks resolve to the
/// smallest-magnitude lag so the result is deterministic.
pub fn estimate_latency(reference: &[i64], simulated: &[i64]) -> i64 {
    debug_assert_eq!(reference.len(), simulated.len());
    let n = reference.len();
    if n == 0 {
        return 0;
    }

    let last = (n - 1) as i64;
    let mut best_lag = 0i64;
    let mut best_magnitude = -1.0f64;

    for lag in -last..=last {
        let mut acc = 0.0f64;
        for (i, &r) in reference.iter().enumerate() {
            let j = i as i64 + lag;
            if j < 0 || j >= n as i64 {
                continue;
            }
            acc += simulated[j as usize] as f64 * r as f64;
        }
        let magnitude = acc.abs();
        if magnitude > best_magnitude
            || (magnitude == best_magnitude && lag.abs() < best_lag.abs())
        {
            best_magnitude = magnitude;
            best_lag = lag;
        }
    }

    best_lag
}

/// Truncate both sequences to their shared prefix, then compute all three
/// metrics over the overlap.
pub fn analyze(reference: &[i64], simulated: &[i64]) -> FidelityReport {
    let n = reference.len().min(simulated.len());
    if n < reference.len() || n < simulated.len() {
        log::info!(
            "Length mismatch (reference {}, simulated {}); comparing first {} samples",
            reference.len(),
            simulated.len(),
            n
        );
    }
    let reference = &reference[..n];
    let simulated = &simulated[..n];

    if n == 0 {
        return FidelityReport {
            samples_compared: 0,
            mse: 0.0,
            snr_db: f64::INFINITY,
            latency_samples: 0,
        };
    }

    FidelityReport {
        samples_compared: n,
        mse: mean_squared_error(reference, simulated),
        snr_db: snr_db(reference, simulated),
        latency_samples: estimate_latency(reference, simulated),
    }
}
