//! Output formatting and hex writing.

use std::io::{self, Write};
use std::time::Duration;

use fibmat_core::{hex, Number};

/// Write the canonical hex rendering of `value`, newline terminated.
pub fn write_hex(value: &Number, out: &mut dyn Write) -> io::Result<()> {
    out.write_all(hex::encode(value).as_bytes())?;
    out.write_all(b"\n")
}

/// Write the canonical hex rendering to a file.
pub fn write_hex_to_file(path: &str, value: &Number) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write_hex(value, &mut file)
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibmat_core::fibonacci;

    #[test]
    fn hex_output_newline_terminated() {
        let mut buf = Vec::new();
        write_hex(&fibonacci(10), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));
        assert!(text.trim_end().ends_with("37"));
    }

    #[test]
    fn format_duration_ranges() {
        assert!(format_duration(Duration::from_nanos(500)).contains("µs"));
        assert!(format_duration(Duration::from_millis(42)).contains("ms"));
        assert!(format_duration(Duration::from_secs_f64(3.14)).contains('s'));
        assert!(format_duration(Duration::from_secs(90)).contains('m'));
    }

    #[test]
    fn format_number_thousands() {
        assert_eq!(format_number(1_000_000), "1,000,000");
        assert_eq!(format_number(42), "42");
        assert_eq!(format_number(1234), "1,234");
    }
}
