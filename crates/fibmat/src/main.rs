//! fibmat — arbitrary-precision Fibonacci by matrix exponentiation.

use anyhow::Result;
use fibmat_lib::{app, config};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    let code = app::run(&config)?;
    std::process::exit(code);
}
