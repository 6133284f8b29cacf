//! Worst-case digit capacity for a Fibonacci index.

use crate::digit::DIGIT_BITS;

/// Digits needed to hold F(n) plus slack: `ceil(2n / W) + 2`.
///
/// Loose upper bound (F(n) grows at about 0.694 bits per index); buffers
/// sized from it are never grown or reallocated mid-loop. The arithmetic is
/// done in u128 so the estimate itself cannot wrap. An allocation of this
/// size that the address space cannot satisfy aborts the process.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn digits_for_index(n: u64) -> usize {
    let w = DIGIT_BITS as u128;
    ((2 * u128::from(n) + w - 1) / w + 2) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;

    #[test]
    fn small_indices_fit_floor() {
        assert_eq!(digits_for_index(0), 2);
        assert_eq!(digits_for_index(1), 3);
    }

    #[test]
    fn capacity_always_exceeds_true_size() {
        // F(n) has ~0.694n bits; the estimate allows 2n bits.
        for n in [10u64, 93, 100, 1000, 4096] {
            let bits_upper = n + 2; // F(n) < 2^n for n >= 1, loose
            let words_upper = (bits_upper as usize).div_ceil(Digit::BITS as usize);
            assert!(digits_for_index(n) > words_upper, "n={n}");
        }
    }

    #[test]
    fn monotonic() {
        let mut prev = 0;
        for n in 0..1000 {
            let cap = digits_for_index(n);
            assert!(cap >= prev);
            prev = cap;
        }
    }
}
