//! Limb types and scale-and-accumulate primitives.
//!
//! A `Digit` is the atomic unit of big-integer storage, little-endian across
//! the array. All limb arithmetic widens into `DoubleDigit` so that
//! `digit * digit + digit + carry` can never overflow.

/// Storage limb. 64-bit in the performance build, 32-bit under `digit32`.
#[cfg(not(feature = "digit32"))]
pub type Digit = u64;
/// Double-width accumulator matching [`Digit`].
#[cfg(not(feature = "digit32"))]
pub type DoubleDigit = u128;

#[cfg(feature = "digit32")]
pub type Digit = u32;
#[cfg(feature = "digit32")]
pub type DoubleDigit = u64;

/// Bits per digit.
pub const DIGIT_BITS: usize = Digit::BITS as usize;

/// Bytes per digit.
pub const DIGIT_BYTES: usize = DIGIT_BITS / 8;

/// Fold a loop-final carry into the double-width value straddling
/// `tail[0]`/`tail[1]`.
///
/// Accumulation calls into the same destination overlap at shifted offsets,
/// so the carry must land where a *later* call will read it back as part of
/// `acc[i]`. Reading two words, adding wide, and writing two words back
/// reproduces that exactly.
#[inline]
#[allow(clippy::cast_possible_truncation)]
fn land_carry(tail: &mut [Digit], carry: DoubleDigit) {
    let wide = ((DoubleDigit::from(tail[1]) << DIGIT_BITS) | DoubleDigit::from(tail[0])) + carry;
    tail[0] = wide as Digit;
    tail[1] = (wide >> DIGIT_BITS) as Digit;
}

/// `acc += src * m`, single destination.
///
/// `acc` must be at least `src.len() + 2` digits long; the two digits past
/// the source length receive the final carry.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale_accumulate(acc: &mut [Digit], src: &[Digit], m: Digit) {
    let n = src.len();
    debug_assert!(acc.len() >= n + 2);
    let m = DoubleDigit::from(m);
    let mut carry: DoubleDigit = 0;
    for i in 0..n {
        let sum = DoubleDigit::from(acc[i]) + DoubleDigit::from(src[i]) * m + carry;
        acc[i] = sum as Digit;
        carry = sum >> DIGIT_BITS;
    }
    land_carry(&mut acc[n..], carry);
}

/// `acc1 += src * m1; acc2 += src * m2` in one pass over `src`.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale_accumulate_pair(
    acc1: &mut [Digit],
    acc2: &mut [Digit],
    src: &[Digit],
    m1: Digit,
    m2: Digit,
) {
    let n = src.len();
    debug_assert!(acc1.len() >= n + 2 && acc2.len() >= n + 2);
    let m1 = DoubleDigit::from(m1);
    let m2 = DoubleDigit::from(m2);
    let mut carry1: DoubleDigit = 0;
    let mut carry2: DoubleDigit = 0;
    for i in 0..n {
        let s = DoubleDigit::from(src[i]);
        let sum1 = DoubleDigit::from(acc1[i]) + s * m1 + carry1;
        acc1[i] = sum1 as Digit;
        carry1 = sum1 >> DIGIT_BITS;
        let sum2 = DoubleDigit::from(acc2[i]) + s * m2 + carry2;
        acc2[i] = sum2 as Digit;
        carry2 = sum2 >> DIGIT_BITS;
    }
    land_carry(&mut acc1[n..], carry1);
    land_carry(&mut acc2[n..], carry2);
}

/// `acc1 += src * m; acc2 += src * m`, sharing one widening multiply per
/// digit and duplicating only the add.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn scale_accumulate_shared(acc1: &mut [Digit], acc2: &mut [Digit], src: &[Digit], m: Digit) {
    let n = src.len();
    debug_assert!(acc1.len() >= n + 2 && acc2.len() >= n + 2);
    let m = DoubleDigit::from(m);
    let mut carry1: DoubleDigit = 0;
    let mut carry2: DoubleDigit = 0;
    for i in 0..n {
        let product = DoubleDigit::from(src[i]) * m;
        let sum1 = DoubleDigit::from(acc1[i]) + product + carry1;
        acc1[i] = sum1 as Digit;
        carry1 = sum1 >> DIGIT_BITS;
        let sum2 = DoubleDigit::from(acc2[i]) + product + carry2;
        acc2[i] = sum2 as Digit;
        carry2 = sum2 >> DIGIT_BITS;
    }
    land_carry(&mut acc1[n..], carry1);
    land_carry(&mut acc2[n..], carry2);
}
