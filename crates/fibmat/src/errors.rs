//! Error handling and exit codes.

use fibmat_core::FibError;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Computation timed out.
    pub const ERROR_TIMEOUT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

/// Map a calculation error to its exit code.
#[must_use]
pub fn exit_code_for(err: &FibError) -> i32 {
    match err {
        FibError::Calculation(_) => exit_codes::ERROR_GENERIC,
        FibError::Timeout(_) => exit_codes::ERROR_TIMEOUT,
        FibError::Mismatch => exit_codes::ERROR_MISMATCH,
        FibError::InvalidInput(_) => exit_codes::ERROR_CONFIG,
    }
}
