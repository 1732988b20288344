//! CLI-specific error types
//!
//! Every CLI error is fatal; main prints it and exits non-zero.

use thiserror::Error;

use crate::store::StoreError;

/// Result type for CLI commands
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Error)]
pub enum CliError {
    /// Opening or bootstrapping the store failed
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Runtime construction or server I/O failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
