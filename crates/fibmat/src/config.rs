//! Command-line configuration.

use clap::{Parser, Subcommand, ValueEnum};

/// fibmat — arbitrary-precision Fibonacci by matrix exponentiation.
#[derive(Parser, Debug)]
#[command(name = "fibmat", version, about)]
pub struct AppConfig {
    #[command(subcommand)]
    pub mode: Mode,
}

/// Which exponentiation form to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algo {
    /// 3-value symmetric-matrix form.
    Triad,
    /// 2-value reduced form.
    Paired,
}

#[derive(Subcommand, Debug)]
pub enum Mode {
    /// Compute F(index) and print it as canonical hex.
    Hex {
        /// Fibonacci index (base-10, non-negative, 64-bit).
        index: u64,

        /// Output file; stdout when omitted.
        output: Option<String>,

        /// Algorithm to use.
        #[arg(long, value_enum, default_value = "triad")]
        algo: Algo,

        /// Abandon the computation after this long (e.g. "500ms", "5m").
        /// The worker thread is not cancelled, only its result discarded.
        #[arg(long)]
        timeout: Option<String>,
    },

    /// Run both algorithms on the same index and compare their results.
    Compare {
        /// Fibonacci index (base-10, non-negative, 64-bit).
        index: u64,
    },

    /// Benchmark ever-larger indices until the soft cutoff is exceeded.
    Eval {
        /// Algorithm to use.
        #[arg(long, value_enum, default_value = "triad")]
        algo: Algo,
    },

    /// Print the native byte order ("little" or "big").
    Endianness,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}

/// Parse a duration string like "5m", "1h", "30s", "250ms".
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    if let Some(ms) = s.strip_suffix("ms") {
        let n: u64 = ms.parse().ok()?;
        Some(std::time::Duration::from_millis(n))
    } else if let Some(mins) = s.strip_suffix('m') {
        let n: u64 = mins.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 60))
    } else if let Some(hours) = s.strip_suffix('h') {
        let n: u64 = hours.parse().ok()?;
        Some(std::time::Duration::from_secs(n * 3600))
    } else if let Some(secs) = s.strip_suffix('s') {
        let n: u64 = secs.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    } else {
        let n: u64 = s.parse().ok()?;
        Some(std::time::Duration::from_secs(n))
    }
}
