//! Line-oriented shell driving a [`FinanceSession`](crate::core::FinanceSession).

pub mod commands;
pub mod core;
pub mod forms;
pub mod help;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;

pub use shell::{run_cli, SCRIPT_ENV};
