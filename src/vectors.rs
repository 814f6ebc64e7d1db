//! Line-oriented test-vector file I/O.
//!
//! Two interchange forms are used by the testbench:
//!
//! - **hex**: one value per line, uppercase, zero-padded to `bit_width / 4`
//!   digits, masked to `bit_width` unsigned bits (two's complement for
//!   negative values). This is the wire format the hardware simulator
//!   consumes and produces.
//! - **decimal**: one signed base-10 integer per line, human-readable.
//!
//! Both forms are lossless for the configured bit width. A missing file and
//! a malformed line are reported as distinct errors so a bad record can be
//! located by line number.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::error::{HarnessError, Result};

fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => HarnessError::MissingFile(path.to_path_buf()),
        _ => HarnessError::Io(e),
    })
}

fn malformed(path: &Path, line_index: usize, text: &str) -> HarnessError {
    HarnessError::MalformedLine {
        path: path.to_path_buf(),
        line: line_index + 1,
        text: text.to_string(),
    }
}

/// Reinterpret a `bit_width`-bit unsigned field as its signed value.
fn sign_extend(raw: u32, bit_width: u32) -> i32 {
    if bit_width == 32 {
        return raw as i32;
    }
    let sign_bit = 1u32 << (bit_width - 1);
    if raw & sign_bit != 0 {
        (raw | !((1u32 << bit_width) - 1)) as i32
    } else {
        raw as i32
    }
}

/// Read a hex vector file, reinterpreting each line as a signed
/// `bit_width`-bit value. Blank lines are skipped.
pub fn read_hex_file(path: &Path, bit_width: u32) -> Result<Vec<i32>> {
    let text = read_to_string(path)?;
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let raw = u32::from_str_radix(line, 16)
            .ok()
            .filter(|&v| bit_width == 32 || v < (1u32 << bit_width))
            .ok_or_else(|| malformed(path, idx, line))?;
        values.push(sign_extend(raw, bit_width));
    }
    Ok(values)
}

/// Read a decimal vector file of extended-precision values (e.g. the golden
/// convolution output, which is wider than the sample width).
pub fn read_decimal_file(path: &Path) -> Result<Vec<i64>> {
    let text = read_to_string(path)?;
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: i64 = line.parse().map_err(|_| malformed(path, idx, line))?;
        values.push(value);
    }
    Ok(values)
}

/// Read a decimal vector file whose values must fit the signed
/// `bit_width`-bit sample range; an out-of-range value is malformed.
pub fn read_decimal_samples(path: &Path, bit_width: u32) -> Result<Vec<i32>> {
    let min = -(1i64 << (bit_width - 1));
    let max = (1i64 << (bit_width - 1)) - 1;
    let text = read_to_string(path)?;
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let wide: i64 = line.parse().map_err(|_| malformed(path, idx, line))?;
        if wide < min || wide > max {
            return Err(malformed(path, idx, line));
        }
        values.push(wide as i32);
    }
    Ok(values)
}

/// Write a hex vector file: uppercase, zero-padded to `bit_width / 4`
/// digits, each value masked to `bit_width` unsigned bits.
pub fn write_hex_file(path: &Path, values: &[i32], bit_width: u32) -> Result<()> {
    let digits = bit_width.div_ceil(4) as usize;
    let mask = if bit_width == 32 {
        u32::MAX
    } else {
        (1u32 << bit_width) - 1
    };
    let mut text = String::new();
    for &value in values {
        text.push_str(&format!("{:0>width$X}\n", (value as u32) & mask, width = digits));
    }
    fs::write(path, text)?;
    Ok(())
}

/// Write a decimal vector file, one signed value per line.
pub fn write_decimal_file<T: fmt::Display>(path: &Path, values: &[T]) -> Result<()> {
    let mut text = String::new();
    for value in values {
        text.push_str(&format!("{}\n", value));
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_extend() {
        assert_eq!(sign_extend(0x0000, 16), 0);
        assert_eq!(sign_extend(0x7FFF, 16), 32767);
        assert_eq!(sign_extend(0x8000, 16), -32768);
        assert_eq!(sign_extend(0xFFFF, 16), -1);
        assert_eq!(sign_extend(0xF, 4), -1);
        assert_eq!(sign_extend(0xFFFFFFFF, 32), -1);
    }

    #[test]
    fn test_hex_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.hex");
        let values = vec![0, 1, -1, 32767, -32768, 1234, -1234];
        write_hex_file(&path, &values, 16).unwrap();
        assert_eq!(read_hex_file(&path, 16).unwrap(), values);
    }

    #[test]
    fn test_hex_format_is_padded_uppercase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.hex");
        write_hex_file(&path, &[-1, 10, 255], 16).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "FFFF\n000A\n00FF\n");
    }

    #[test]
    fn test_hex_skips_blank_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.hex");
        fs::write(&path, "0001\n\n0002\n  \n0003\n").unwrap();
        assert_eq!(read_hex_file(&path, 16).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_hex_rejects_out_of_range_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.hex");
        fs::write(&path, "1FFFF\n").unwrap();
        assert!(matches!(
            read_hex_file(&path, 16),
            Err(HarnessError::MalformedLine { line: 1, .. })
        ));
    }

    #[test]
    fn test_malformed_line_reports_position() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.hex");
        fs::write(&path, "0001\n0002\nzz-not-hex\n").unwrap();
        match read_hex_file(&path, 16) {
            Err(HarnessError::MalformedLine { line, text, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(text, "zz-not-hex");
            }
            other => panic!("expected malformed-line error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_file_is_distinct() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such.hex");
        assert!(matches!(
            read_hex_file(&path, 16),
            Err(HarnessError::MissingFile(_))
        ));
    }

    #[test]
    fn test_decimal_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.txt");
        let values = vec![0i64, -5, 123_456_789_000, -42];
        write_decimal_file(&path, &values).unwrap();
        assert_eq!(read_decimal_file(&path).unwrap(), values);
    }

    #[test]
    fn test_decimal_samples_range_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vec.txt");
        write_decimal_file(&path, &[32767i64, -32768]).unwrap();
        assert_eq!(read_decimal_samples(&path, 16).unwrap(), vec![32767, -32768]);

        write_decimal_file(&path, &[32768i64]).unwrap();
        assert!(read_decimal_samples(&path, 16).is_err());
    }
}
