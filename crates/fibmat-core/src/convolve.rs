//! Schoolbook convolution over digit arrays.
//!
//! Each product is one accumulate pass per digit of `b` against the whole of
//! `a`, O(la * lb) widening multiplies. Destinations must be zeroed before
//! the first pass and sized at least `a.len() + b.len() + 1`.

use crate::digit::{scale_accumulate, scale_accumulate_pair, scale_accumulate_shared, Digit};

/// Downward scan for the significant length of `acc`, starting at `upper`.
///
/// Floors at a length of 1: a product that is exactly zero reports the
/// canonical single zero digit instead of under-running the buffer.
#[must_use]
pub fn significant_len(acc: &[Digit], upper: usize) -> usize {
    for i in (0..=upper).rev() {
        if acc[i] != 0 {
            return i + 1;
        }
    }
    1
}

/// Joint significant length of two accumulators sharing one length field.
#[must_use]
pub fn significant_len_pair(acc1: &[Digit], acc2: &[Digit], upper: usize) -> usize {
    for i in (0..=upper).rev() {
        if acc1[i] != 0 || acc2[i] != 0 {
            return i + 1;
        }
    }
    1
}

/// `acc += a * b`; returns the significant length of the result.
pub fn mul_into(acc: &mut [Digit], a: &[Digit], b: &[Digit]) -> usize {
    debug_assert!(acc.len() > a.len() + b.len());
    for (i, &scale) in b.iter().enumerate() {
        scale_accumulate(&mut acc[i..], a, scale);
    }
    significant_len(acc, a.len() + b.len())
}

/// `acc1 += a * b1; acc2 += a * b2` in one pass; returns the joint
/// significant length of both results.
pub fn mul_pair_into(
    acc1: &mut [Digit],
    acc2: &mut [Digit],
    a: &[Digit],
    b1: &[Digit],
    b2: &[Digit],
) -> usize {
    debug_assert_eq!(b1.len(), b2.len());
    debug_assert!(acc1.len() > a.len() + b1.len() && acc2.len() > a.len() + b1.len());
    for i in 0..b1.len() {
        scale_accumulate_pair(&mut acc1[i..], &mut acc2[i..], a, b1[i], b2[i]);
    }
    significant_len_pair(acc1, acc2, a.len() + b1.len())
}

/// `acc1 += a * b; acc2 += a * b`, sharing the multiplies.
pub fn mul_shared_into(acc1: &mut [Digit], acc2: &mut [Digit], a: &[Digit], b: &[Digit]) {
    debug_assert!(acc1.len() > a.len() + b.len() && acc2.len() > a.len() + b.len());
    for (i, &scale) in b.iter().enumerate() {
        scale_accumulate_shared(&mut acc1[i..], &mut acc2[i..], a, scale);
    }
}
