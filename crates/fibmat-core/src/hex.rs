//! Canonical hexadecimal serialization of [`Number`].
//!
//! Every byte of every significant digit, most significant byte first, two
//! lowercase hex digits each, no separators. This is the on-disk/stdout
//! representation and round-trips bit-exactly.

use crate::digit::{Digit, DIGIT_BYTES};
use crate::number::Number;

/// Encode a number as canonical hex (no trailing newline).
#[must_use]
pub fn encode(n: &Number) -> String {
    let mut out = String::with_capacity(n.byte_len() * 2);
    for &digit in n.digits().iter().rev() {
        for byte in digit.to_be_bytes() {
            out.push_str(&format!("{byte:02x}"));
        }
    }
    out
}

/// Decode canonical hex back into a [`Number`].
///
/// Accepts any whole number of hex-digit pairs; the byte sequence is
/// interpreted most significant first and padded up to a digit boundary.
pub fn decode(text: &str) -> Result<Number, HexError> {
    let text = text.trim_end_matches('\n');
    if text.is_empty() || text.len() % 2 != 0 {
        return Err(HexError::Length(text.len()));
    }
    let mut bytes_be = Vec::with_capacity(text.len() / 2);
    for pair in text.as_bytes().chunks_exact(2) {
        let (Some(hi), Some(lo)) = (hex_val(pair[0]), hex_val(pair[1])) else {
            return Err(HexError::Digit(String::from_utf8_lossy(pair).into_owned()));
        };
        bytes_be.push((hi << 4) | lo);
    }
    let mut digits = vec![0 as Digit; bytes_be.len().div_ceil(DIGIT_BYTES)];
    for (i, &b) in bytes_be.iter().rev().enumerate() {
        digits[i / DIGIT_BYTES] |= Digit::from(b) << (8 * (i % DIGIT_BYTES));
    }
    Ok(Number::from_digits(&digits))
}

fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Hex decoding failure.
#[derive(Debug, thiserror::Error)]
pub enum HexError {
    /// Input length is zero or not a whole number of byte pairs.
    #[error("hex text has invalid length {0}")]
    Length(usize),

    /// A character pair is not two hex digits.
    #[error("invalid hex digits: {0:?}")]
    Digit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_encodes_full_digit_width() {
        let hex = encode(&Number::zero());
        assert_eq!(hex.len(), DIGIT_BYTES * 2);
        assert!(hex.bytes().all(|b| b == b'0'));
    }

    #[test]
    fn small_value() {
        let n = Number::from_digits(&[0x37]);
        let hex = encode(&n);
        assert!(hex.ends_with("37"));
        assert_eq!(hex.len(), DIGIT_BYTES * 2);
        assert_eq!(decode(&hex).unwrap(), n);
    }

    #[test]
    fn multi_digit_most_significant_first() {
        let n = Number::from_digits(&[1, 2]);
        let hex = encode(&n);
        assert_eq!(hex.len(), 2 * DIGIT_BYTES * 2);
        // digit value 2 renders before digit value 1
        assert!(hex.starts_with("00"));
        assert!(hex[..DIGIT_BYTES * 2].ends_with('2'));
        assert_eq!(decode(&hex).unwrap(), n);
    }

    #[test]
    fn round_trip_with_trailing_newline() {
        let n = Number::from_digits(&[Digit::MAX, 0, 5]);
        let mut hex = encode(&n);
        hex.push('\n');
        assert_eq!(decode(&hex).unwrap(), n);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(decode("").is_err());
        assert!(decode("abc").is_err());
        assert!(decode("zz").is_err());
    }

    #[test]
    fn lowercase_output() {
        let n = Number::from_digits(&[0xAB_CD]);
        let hex = encode(&n);
        assert_eq!(hex, hex.to_lowercase());
        assert!(hex.ends_with("abcd"));
    }
}
