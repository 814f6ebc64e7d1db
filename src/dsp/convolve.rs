//! Integer direct-form convolution for the golden reference model.

use crate::error::{HarnessError, Result};

/// Full discrete convolution of `input` with `coeffs`, truncated to the
/// first `input.len()` output samples.
///
/// This truncation convention models the causal windowed output the
/// hardware emits for a stimulus of exactly that length; it is not "same"
/// mode and not centered. Accumulation is in i64 and the result is kept at
/// extended precision: the reference deliberately does not saturate back to
/// the sample width, since it is the pre-quantization-error ideal the
/// hardware is scored against.
pub fn convolve_truncated(input: &[i32], coeffs: &[i32]) -> Vec<i64> {
    let mut output = vec![0i64; input.len()];
    for (i, out) in output.iter_mut().enumerate() {
        let mut acc = 0i64;
        for (j, &c) in coeffs.iter().enumerate().take(i + 1) {
            acc += c as i64 * input[i - j] as i64;
        }
        *out = acc;
    }
    output
}

/// Default coefficient set when no coefficient file is supplied: all ones,
/// turning the filter into a running sum over the tap window.
pub fn unity_coefficients(taps: usize) -> Vec<i32> {
    vec![1; taps]
}

/// An externally supplied coefficient vector must match the tap count of
/// the hardware under test exactly.
pub fn check_coefficient_count(coeffs: &[i32], taps: usize) -> Result<()> {
    if coeffs.len() != taps {
        return Err(HarnessError::CoefficientCountMismatch {
            expected: taps,
            found: coeffs.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_length_equals_input_length() {
        for len in [0usize, 1, 7, 100] {
            let input: Vec<i32> = (0..len as i32).collect();
            let coeffs = unity_coefficients(16);
            assert_eq!(convolve_truncated(&input, &coeffs).len(), len);
        }
    }

    #[test]
    fn test_impulse_reproduces_coefficients() {
        let coeffs = vec![3, -1, 4, 1, -5];
        let mut input = vec![0i32; 8];
        input[0] = 1;
        let output = convolve_truncated(&input, &coeffs);
        assert_eq!(output, vec![3, -1, 4, 1, -5, 0, 0, 0]);
    }

    #[test]
    fn test_unity_is_cumulative_moving_sum() {
        let input: Vec<i32> = vec![5, -3, 7, 2, -8, 1, 6, -4, 9, 0];
        let taps = 4;
        let output = convolve_truncated(&input, &unity_coefficients(taps));
        for (i, &y) in output.iter().enumerate() {
            // Sum of the last min(i + 1, taps) inputs.
            let start = (i + 1).saturating_sub(taps);
            let expected: i64 = input[start..=i].iter().map(|&x| x as i64).sum();
            assert_eq!(y, expected, "sample {}", i);
        }
    }

    #[test]
    fn test_known_small_convolution() {
        // Full convolution of [1,2,3] and [1,1] is [1,3,5,3]; truncated to 3.
        let output = convolve_truncated(&[1, 2, 3], &[1, 1]);
        assert_eq!(output, vec![1, 3, 5]);
    }

    #[test]
    fn test_no_intermediate_overflow_at_full_scale() {
        // 128 taps at +/- full 16-bit scale stress the accumulator.
        let input = vec![i16::MIN as i32; 256];
        let coeffs = vec![i16::MIN as i32; 128];
        let output = convolve_truncated(&input, &coeffs);
        let product = (i16::MIN as i64) * (i16::MIN as i64);
        assert_eq!(output[255], 128 * product);
    }

    #[test]
    fn test_coefficient_count_check() {
        assert!(check_coefficient_count(&[1, 2, 3], 3).is_ok());
        assert!(matches!(
            check_coefficient_count(&[1, 2, 3], 128),
            Err(HarnessError::CoefficientCountMismatch {
                expected: 128,
                found: 3
            })
        ));
    }
}
