//! Application dispatch.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;

use fibmat_core::{Calculator, FibError, Number, PairedExponentiation, TriadExponentiation};
use fibmat_orchestration::{
    analyze_comparison_results, compute_bounded, default_calculators, execute_calculations,
};

use crate::config::{parse_duration, Algo, AppConfig, Mode};
use crate::errors::{exit_code_for, exit_codes};
use crate::eval::run_evaluation;
use crate::output::{format_duration, format_number, write_hex, write_hex_to_file};

fn make_calculator(algo: Algo) -> Arc<dyn Calculator> {
    match algo {
        Algo::Triad => Arc::new(TriadExponentiation),
        Algo::Paired => Arc::new(PairedExponentiation),
    }
}

/// Run the application; returns the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    match &config.mode {
        Mode::Hex {
            index,
            output,
            algo,
            timeout,
        } => run_hex(*index, output.as_deref(), *algo, timeout.as_deref()),
        Mode::Compare { index } => Ok(run_compare(*index)),
        Mode::Eval { algo } => {
            run_evaluation(make_calculator(*algo).as_ref());
            Ok(exit_codes::SUCCESS)
        }
        Mode::Endianness => {
            println!("{}", native_endianness());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn run_hex(index: u64, output: Option<&str>, algo: Algo, timeout: Option<&str>) -> Result<i32> {
    let calc = make_calculator(algo);

    let value = match timeout {
        None => calc.calculate(index),
        Some(text) => {
            let deadline = parse_duration(text).ok_or_else(|| {
                anyhow::anyhow!("invalid timeout: {text:?} (expected e.g. \"500ms\", \"5m\")")
            })?;
            match compute_bounded(calc, index, deadline) {
                Ok(value) => value,
                Err(err @ FibError::Timeout(_)) => {
                    eprintln!("Error: {err}");
                    return Ok(exit_code_for(&err));
                }
                Err(err) => return Err(err.into()),
            }
        }
    };

    eprintln!("# Fibonacci index: {index}");
    eprintln!("# Result size: {} B", value.byte_len());
    write_result(&value, output)?;
    Ok(exit_codes::SUCCESS)
}

fn write_result(value: &Number, output: Option<&str>) -> Result<()> {
    match output {
        Some(path) => write_hex_to_file(path, value)?,
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            write_hex(value, &mut lock)?;
            lock.flush()?;
        }
    }
    Ok(())
}

fn run_compare(index: u64) -> i32 {
    let results = execute_calculations(&default_calculators(), index);

    println!("N: {}", format_number(index));
    for result in &results {
        println!(
            "  {:<8} {:>12}  {:>8} B",
            result.algorithm,
            format_duration(result.duration),
            result.value.byte_len()
        );
    }

    match analyze_comparison_results(&results) {
        Ok(()) => {
            println!("Results agree.");
            exit_codes::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            exit_code_for(&err)
        }
    }
}

/// Probe the native byte order of a multi-byte value.
fn native_endianness() -> &'static str {
    let probe: u16 = 0xAABB;
    if probe.to_ne_bytes()[0] == 0xAA {
        "big"
    } else {
        "little"
    }
}
