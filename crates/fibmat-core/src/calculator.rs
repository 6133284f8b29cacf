//! Calculator trait and error type.
//!
//! The trait is the seam consumed by orchestration; the two algorithm
//! structs are interchangeable behind it. The arithmetic core itself is
//! infallible — errors only arise in the layers around it.

use crate::number::Number;
use crate::{pair, triad};

/// Error type for Fibonacci evaluation.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// An evaluation failed outside the arithmetic core.
    #[error("calculation error: {0}")]
    Calculation(String),

    /// The bounded wrapper's deadline elapsed before the worker finished.
    #[error("computation timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// Two algorithms disagreed during cross-validation.
    #[error("result mismatch between algorithms")]
    Mismatch,

    /// Invalid input reached an entry point.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// A Fibonacci algorithm: index in, trimmed [`Number`] out.
pub trait Calculator: Send + Sync {
    /// Compute F(n).
    fn calculate(&self, n: u64) -> Number;

    /// Name of this algorithm.
    fn name(&self) -> &'static str;
}

/// The 3-value symmetric-matrix algorithm.
pub struct TriadExponentiation;

impl Calculator for TriadExponentiation {
    fn calculate(&self, n: u64) -> Number {
        triad::compute(n)
    }

    fn name(&self) -> &'static str {
        "triad"
    }
}

/// The 2-value reduced-form algorithm.
pub struct PairedExponentiation;

impl Calculator for PairedExponentiation {
    fn calculate(&self, n: u64) -> Number {
        pair::compute(n)
    }

    fn name(&self) -> &'static str {
        "paired"
    }
}
