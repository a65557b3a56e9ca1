//! Shared CLI result and error types.

use thiserror::Error;

use crate::core::errors::FinanceError;
use crate::domain::UnknownCategory;

pub use crate::core::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("Unknown command `{name}`{}", suggestion_suffix(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<&'static str>,
    },
    #[error("{0} (known categories: salary, extra, planned, unplanned, investment)")]
    UnknownCategory(#[from] UnknownCategory),
    #[error("`{0}` needs an interactive terminal")]
    InteractiveOnly(&'static str),
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

fn suggestion_suffix(suggestion: &Option<&'static str>) -> String {
    match suggestion {
        Some(name) => format!(". Did you mean `{name}`?"),
        None => ". Type `help` to list commands.".to_string(),
    }
}

impl CommandError {
    pub(crate) fn usage(usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {usage}"))
    }
}
