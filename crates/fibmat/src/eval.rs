//! Benchmarking harness: walk ever-larger indices and time each one.
//!
//! Runs dense ranges through two checkpoints, then grows the index
//! geometrically (times ~1.375 per step), printing a table of index,
//! elapsed time and result size. Stops once a computation exceeds the soft
//! cutoff; the largest index computed under the hard cutoff is recorded as
//! the best.

use std::time::{Duration, Instant};

use tracing::info;

use fibmat_core::{Calculator, Number};

const FIRST_CHECKPOINT: u64 = 93;
const SECOND_CHECKPOINT: u64 = 727;
const SOFT_CUTOFF: Duration = Duration::from_millis(1500);
const HARD_CUTOFF: Duration = Duration::from_millis(1000);

fn compute_and_print(calc: &dyn Calculator, index: u64) -> (Number, Duration) {
    let start = Instant::now();
    let value = calc.calculate(index);
    let elapsed = start.elapsed();
    println!(
        "{index:>20} | {:>3}.{:09}s | {:>6} B",
        elapsed.as_secs(),
        elapsed.subsec_nanos(),
        value.byte_len()
    );
    (value, elapsed)
}

/// Run the evaluation loop with the given calculator.
pub fn run_evaluation(calc: &dyn Calculator) {
    println!("#   Fibonacci index  |   Time (s)   | Size (bytes)");
    println!("# -------------------+--------------+--------------");

    let mut best_index = 0u64;
    let mut index = 0u64;

    // Dense walk to the u64 boundary (F(93)), then on to the second
    // checkpoint.
    for checkpoint in [FIRST_CHECKPOINT, SECOND_CHECKPOINT] {
        while index <= checkpoint {
            let (_, elapsed) = compute_and_print(calc, index);
            if elapsed > SOFT_CUTOFF {
                report_best(best_index);
                return;
            }
            if elapsed < HARD_CUTOFF {
                best_index = index;
            }
            index += 1;
        }
        info!(checkpoint, "checkpoint passed");
    }

    // Geometric growth: index *= 1.375 per step.
    loop {
        let (_, elapsed) = compute_and_print(calc, index);
        if elapsed > SOFT_CUTOFF {
            break;
        }
        if elapsed < HARD_CUTOFF {
            best_index = index;
        }
        index += (index >> 1) - (index >> 3);
    }

    report_best(best_index);
}

fn report_best(best_index: u64) {
    info!(best_index, "largest index under hard cutoff");
    eprintln!("# recorded best index: {best_index}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibmat_core::TriadExponentiation;

    #[test]
    fn compute_and_print_times_one_index() {
        let (value, elapsed) = compute_and_print(&TriadExponentiation, 20);
        assert_eq!(value.digits(), &[6765]);
        assert!(elapsed < SOFT_CUTOFF);
    }

    #[test]
    fn growth_step_increases() {
        let mut index = SECOND_CHECKPOINT + 1;
        for _ in 0..10 {
            let next = index + ((index >> 1) - (index >> 3));
            assert!(next > index);
            index = next;
        }
    }
}
