//! Application library for the `fibmat` binary.

pub mod app;
pub mod config;
pub mod errors;
pub mod eval;
pub mod output;
