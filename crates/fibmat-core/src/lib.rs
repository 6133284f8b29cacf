//! # fibmat-core
//!
//! Arbitrary-precision Fibonacci numbers by binary exponentiation of the
//! generator matrix Q = [[1,1],[1,0]], built on hand-rolled fixed-width
//! limb arithmetic. Two independently derived algorithms (a 3-value
//! symmetric-matrix form and a 2-value reduced form) compute the identical
//! sequence and cross-check each other.

pub mod calculator;
pub mod capacity;
pub(crate) mod convolve;
pub mod digit;
pub mod hex;
pub mod number;
pub mod pair;
pub mod triad;

// Re-exports
pub use calculator::{Calculator, FibError, PairedExponentiation, TriadExponentiation};
pub use number::Number;

/// Compute F(n) with the 3-value symmetric-matrix algorithm.
///
/// # Example
/// ```
/// let f = fibmat_core::fibonacci(10);
/// assert_eq!(f.digits(), &[55]);
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> Number {
    triad::compute(n)
}

/// Compute F(n) with the 2-value reduced-form algorithm.
///
/// Produces the identical digit sequence as [`fibonacci`] for every index.
#[must_use]
pub fn fibonacci2(n: u64) -> Number {
    pair::compute(n)
}
