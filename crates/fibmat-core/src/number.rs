//! Trimmed arbitrary-precision unsigned integer.

use num_bigint::BigUint;

use crate::digit::{Digit, DIGIT_BITS, DIGIT_BYTES};

/// An unsigned big integer as a little-endian digit sequence.
///
/// Invariant: the most significant stored digit is nonzero, except the
/// canonical zero, which is exactly one zero digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Number {
    digits: Vec<Digit>,
}

impl Number {
    /// Canonical zero.
    #[must_use]
    pub fn zero() -> Self {
        Self { digits: vec![0] }
    }

    /// Build a `Number` from a raw digit slice, trimming high zeros.
    #[must_use]
    pub fn from_digits(raw: &[Digit]) -> Self {
        let mut len = raw.len();
        while len > 1 && raw[len - 1] == 0 {
            len -= 1;
        }
        if len == 0 {
            return Self::zero();
        }
        Self {
            digits: raw[..len].to_vec(),
        }
    }

    /// Little-endian significant digits.
    #[must_use]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Significant length in digits.
    #[must_use]
    pub fn significant_len(&self) -> usize {
        self.digits.len()
    }

    /// True for the canonical zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Stored size in bytes (significant digits times digit width).
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.digits.len() * DIGIT_BYTES
    }

    /// Convert to a [`BigUint`] for display and test-oracle arithmetic.
    #[must_use]
    pub fn to_biguint(&self) -> BigUint {
        let mut value = BigUint::ZERO;
        for &d in self.digits.iter().rev() {
            value <<= DIGIT_BITS;
            value += d;
        }
        value
    }

    /// Convert from a [`BigUint`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_biguint(value: &BigUint) -> Self {
        if value == &BigUint::ZERO {
            return Self::zero();
        }
        let bytes = value.to_bytes_le();
        let mut digits = vec![0 as Digit; bytes.len().div_ceil(DIGIT_BYTES)];
        for (i, &b) in bytes.iter().enumerate() {
            digits[i / DIGIT_BYTES] |= Digit::from(b) << (8 * (i % DIGIT_BYTES));
        }
        Self::from_digits(&digits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_one_zero_digit() {
        let z = Number::zero();
        assert!(z.is_zero());
        assert_eq!(z.digits(), &[0]);
        assert_eq!(z.significant_len(), 1);
    }

    #[test]
    fn trims_high_zeros() {
        let n = Number::from_digits(&[5, 0, 0]);
        assert_eq!(n.digits(), &[5]);
        let all_zero = Number::from_digits(&[0, 0, 0]);
        assert!(all_zero.is_zero());
    }

    #[test]
    fn keeps_interior_zeros() {
        let n = Number::from_digits(&[0, 1, 0]);
        assert_eq!(n.digits(), &[0, 1]);
    }

    #[test]
    fn biguint_round_trip() {
        for digits in [vec![0 as Digit], vec![55], vec![Digit::MAX, 1], vec![0, 0, 7]] {
            let n = Number::from_digits(&digits);
            assert_eq!(Number::from_biguint(&n.to_biguint()), n);
        }
    }

    #[test]
    fn byte_len_counts_significant_digits() {
        let n = Number::from_digits(&[1, 2]);
        assert_eq!(n.byte_len(), 2 * DIGIT_BYTES);
    }
}
