//! Matrix exponentiation, 2-value reduced form.
//!
//! The same family of matrices as the 3-value form, encoded by just
//! `(a, b) = (F(k-1), F(k))`; the third value is recoverable as `a + b`.
//! One product costs one pair pass, one shared pass and one single pass,
//! using the combination identities
//!
//!   F(j+k-1) = F(j-1)F(k-1) + F(j)F(k)
//!   F(j+k)   = F(j-1)F(k) + F(j)F(k) + F(j)F(k-1)
//!
//! Functionally equivalent to the 3-value form for every index; the two
//! derivations cross-check each other.

use tracing::debug;

use crate::capacity::digits_for_index;
use crate::convolve::{mul_into, mul_pair_into, mul_shared_into};
use crate::digit::Digit;
use crate::number::Number;

/// One reduced operand: two equally sized digit regions.
struct Pair {
    a: Vec<Digit>,
    b: Vec<Digit>,
}

impl Pair {
    fn zeroed(cap: usize) -> Self {
        Self {
            a: vec![0; cap],
            b: vec![0; cap],
        }
    }

    /// Q^0: (a, b) = (1, 0).
    fn identity(cap: usize) -> Self {
        let mut p = Self::zeroed(cap);
        p.a[0] = 1;
        p
    }

    /// Q^1: (a, b) = (0, 1).
    fn generator(cap: usize) -> Self {
        let mut p = Self::zeroed(cap);
        p.b[0] = 1;
        p
    }

    fn clear(&mut self) {
        self.a.fill(0);
        self.b.fill(0);
    }
}

/// `scratch = lhs * rhs`; returns the significant length of the product.
///
/// `b` dominates `a` in every reachable state, so scanning the single final
/// pass over `b'` bounds the whole state.
fn multiply(scratch: &mut Pair, lhs: &Pair, len_l: usize, rhs: &Pair, len_r: usize) -> usize {
    scratch.clear();
    mul_pair_into(
        &mut scratch.a,
        &mut scratch.b,
        &lhs.a[..len_l],
        &rhs.a[..len_r],
        &rhs.b[..len_r],
    );
    mul_shared_into(
        &mut scratch.a,
        &mut scratch.b,
        &lhs.b[..len_l],
        &rhs.b[..len_r],
    );
    mul_into(&mut scratch.b, &lhs.b[..len_l], &rhs.a[..len_r])
}

/// Compute F(n) by binary exponentiation over the reduced encoding.
#[must_use]
pub fn compute(n: u64) -> Number {
    let cap = digits_for_index(n);
    let mut result = Pair::identity(cap);
    let mut base = Pair::generator(cap);
    let mut scratch = Pair::zeroed(cap);
    let mut len_result = 1;
    let mut len_base = 1;

    let mut k = n;
    while k != 0 {
        if k & 1 == 1 {
            len_result = multiply(&mut scratch, &result, len_result, &base, len_base);
            std::mem::swap(&mut result, &mut scratch);
        }
        len_base = multiply(&mut scratch, &base, len_base, &base, len_base);
        std::mem::swap(&mut base, &mut scratch);
        k >>= 1;
    }

    debug!(
        n,
        capacity = cap,
        significant = len_result,
        "paired exponentiation done"
    );
    Number::from_digits(&result.b[..len_result])
}
