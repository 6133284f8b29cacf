//! Dual-algorithm execution and result analysis.
//!
//! The two exponentiation forms are independently derived, so agreement
//! between them is a meaningful correctness check, not duplicated work.

use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::info;

use fibmat_core::{Calculator, FibError, Number};

/// Outcome of one calculator run.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: &'static str,
    /// The computed value.
    pub value: Number,
    /// Wall-clock duration of the run.
    pub duration: Duration,
}

/// Run every calculator on the same index, side by side.
pub fn execute_calculations(calculators: &[Arc<dyn Calculator>], n: u64) -> Vec<CalculationResult> {
    calculators
        .iter()
        .cloned()
        .collect::<Vec<_>>()
        .into_par_iter()
        .map(|calc| {
            let start = Instant::now();
            let value = calc.calculate(n);
            let duration = start.elapsed();
            info!(n, algorithm = calc.name(), ?duration, "calculation finished");
            CalculationResult {
                algorithm: calc.name(),
                value,
                duration,
            }
        })
        .collect()
}

/// Check that all results carry the identical digit sequence.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), FibError> {
    let Some(first) = results.first() else {
        return Err(FibError::Calculation("no results to compare".into()));
    };
    for result in &results[1..] {
        if result.value != first.value {
            return Err(FibError::Mismatch);
        }
    }
    Ok(())
}

/// Standard set: both exponentiation forms.
#[must_use]
pub fn default_calculators() -> Vec<Arc<dyn Calculator>> {
    vec![
        Arc::new(fibmat_core::TriadExponentiation),
        Arc::new(fibmat_core::PairedExponentiation),
    ]
}
