//! # fibmat-orchestration
//!
//! Supervisory layers around the arithmetic core: the deadline-bounded
//! wrapper and the dual-algorithm comparison runner. The core itself is
//! single-threaded and shares no state, so concurrent invocations here need
//! no locking.

pub mod bounded;
pub mod orchestrator;

pub use bounded::compute_bounded;
pub use orchestrator::{
    analyze_comparison_results, default_calculators, execute_calculations, CalculationResult,
};
