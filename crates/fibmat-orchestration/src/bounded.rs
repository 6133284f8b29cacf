//! Deadline-bounded evaluation on a worker thread.

use std::sync::Arc;
use std::time::Duration;

use crossbeam_channel::{bounded, RecvTimeoutError};
use tracing::warn;

use fibmat_core::{Calculator, FibError, Number};

/// Run `calc` for index `n` on a worker thread, waiting at most `deadline`.
///
/// On expiry the worker is **not** cancelled: it keeps computing to
/// completion, still holding its CPU and memory, and its eventual result is
/// discarded into the dropped channel. The arithmetic core carries no
/// cancellation checks, so abandonment is the only timeout behavior this
/// wrapper can offer.
pub fn compute_bounded(
    calc: Arc<dyn Calculator>,
    n: u64,
    deadline: Duration,
) -> Result<Number, FibError> {
    let (tx, rx) = bounded(1);
    let name = calc.name();
    std::thread::spawn(move || {
        // Receiver may be gone by the time we finish; the result is
        // discarded in that case.
        let _ = tx.send(calc.calculate(n));
    });

    match rx.recv_timeout(deadline) {
        Ok(number) => Ok(number),
        Err(RecvTimeoutError::Timeout) => {
            warn!(n, algorithm = name, ?deadline, "computation abandoned on deadline");
            Err(FibError::Timeout(deadline))
        }
        Err(RecvTimeoutError::Disconnected) => Err(FibError::Calculation(format!(
            "worker for {name} terminated without a result"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibmat_core::{fibonacci, TriadExponentiation};

    #[test]
    fn completes_within_generous_deadline() {
        let result = compute_bounded(
            Arc::new(TriadExponentiation),
            300,
            Duration::from_secs(30),
        )
        .unwrap();
        assert_eq!(result, fibonacci(300));
    }

    #[test]
    fn huge_index_with_tiny_deadline_times_out() {
        let result = compute_bounded(
            Arc::new(TriadExponentiation),
            50_000_000,
            Duration::from_millis(5),
        );
        assert!(matches!(result, Err(FibError::Timeout(_))));
    }

    #[test]
    fn zero_index_completes() {
        let result = compute_bounded(
            Arc::new(TriadExponentiation),
            0,
            Duration::from_secs(5),
        )
        .unwrap();
        assert!(result.is_zero());
    }
}
