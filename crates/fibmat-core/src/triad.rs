//! Matrix exponentiation, 3-value symmetric form.
//!
//! A power of the generator Q = [[1,1],[1,0]] is symmetric with its two
//! off-diagonal entries equal, so three big integers encode it: the state
//! `(a, b, c)` stands for [[c, b], [b, a]], i.e. `a = F(k-1)`, `b = F(k)`,
//! `c = F(k+1)`. Because powers of Q commute, one matrix product needs only
//! three array multiplications (one pair pass, one shared pass, one pair
//! pass) instead of four. `c = a + b` holds in every reachable state; it is
//! a derivation fact used as a test oracle, not checked at runtime.

use tracing::debug;

use crate::capacity::digits_for_index;
use crate::convolve::{mul_pair_into, mul_shared_into};
use crate::digit::Digit;
use crate::number::Number;

/// One symmetric-matrix operand: three equally sized digit regions.
struct Triad {
    a: Vec<Digit>,
    b: Vec<Digit>,
    c: Vec<Digit>,
}

impl Triad {
    fn zeroed(cap: usize) -> Self {
        Self {
            a: vec![0; cap],
            b: vec![0; cap],
            c: vec![0; cap],
        }
    }

    /// Q^0: (a, b, c) = (1, 0, 1).
    fn identity(cap: usize) -> Self {
        let mut t = Self::zeroed(cap);
        t.a[0] = 1;
        t.c[0] = 1;
        t
    }

    /// Q^1: (a, b, c) = (0, 1, 1).
    fn generator(cap: usize) -> Self {
        let mut t = Self::zeroed(cap);
        t.b[0] = 1;
        t.c[0] = 1;
        t
    }

    /// Accumulation adds onto existing contents, so a region must be fully
    /// zero before it takes the role of product destination.
    fn clear(&mut self) {
        self.a.fill(0);
        self.b.fill(0);
        self.c.fill(0);
    }
}

/// `scratch = lhs * rhs`, both powers of Q; returns the significant length
/// of the product state.
///
/// Passes: `(a', b') += lhs.a * (rhs.a, rhs.b)`, then the shared
/// contribution `(a', c') += lhs.b * rhs.b`, then
/// `(b', c') += rhs.c * (lhs.b, lhs.c)`. The final pair pass covers the two
/// largest components, so its scan bounds the whole state.
fn multiply(scratch: &mut Triad, lhs: &Triad, len_l: usize, rhs: &Triad, len_r: usize) -> usize {
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
        &mut scratch.c,
        &lhs.b[..len_l],
        &rhs.b[..len_r],
    );
    mul_pair_into(
        &mut scratch.b,
        &mut scratch.c,
        &rhs.c[..len_r],
        &lhs.b[..len_l],
        &lhs.c[..len_l],
    )
}

/// Compute F(n) by binary exponentiation over the symmetric encoding.
///
/// All buffers are sized once from the capacity estimate and rotated by
/// role (`mem::swap` of owned vectors), never copied or grown. F(0) and
/// F(1) fall out of the loop without special cases.
#[must_use]
pub fn compute(n: u64) -> Number {
    let cap = digits_for_index(n);
    let mut result = Triad::identity(cap);
    let mut base = Triad::generator(cap);
    let mut scratch = Triad::zeroed(cap);
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
        "triad exponentiation done"
    );
    Number::from_digits(&result.b[..len_result])
}
