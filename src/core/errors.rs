use std::result::Result as StdResult;

use thiserror::Error;

/// Reasons a candidate transaction is turned away.
///
/// These never reach the user: submission collapses them into a plain
/// rejection and only records them in the debug log.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Rejection {
    #[error("description is blank")]
    BlankDescription,
    #[error("amount `{0}` is not a number")]
    UnparseableAmount(String),
    #[error("amount {0} is not greater than zero")]
    NonPositiveAmount(f64),
    #[error("amount is not a finite number")]
    NonFiniteAmount,
    #[error("amount {0} is above the accepted maximum")]
    AmountTooLarge(f64),
}

/// Unified error type for configuration and I/O failures.
#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Persistence error: {0}")]
    StorageError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type FinanceResult<T> = StdResult<T, FinanceError>;

/// Failures that stop the shell from starting or running.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error("Terminal error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<std::io::Error> for FinanceError {
    fn from(err: std::io::Error) -> Self {
        FinanceError::StorageError(err.to_string())
    }
}

impl From<serde_json::Error> for FinanceError {
    fn from(err: serde_json::Error) -> Self {
        FinanceError::ConfigError(err.to_string())
    }
}
