#![doc(test(attr(deny(warnings))))]

//! Solo Finance keeps an in-memory ledger of income, expenses and
//! investments, tracks the running balance and turns disciplined money
//! habits into points and hunter ranks.
//!
//! [`FinanceSession`] is the entry point: submit transactions, then
//! read balance, points, rank and history back from it.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod ledger;
pub mod utils;

pub use crate::core::FinanceSession;
pub use domain::{Category, Rank, Transaction};

/// Initializes global tracing at the given level.
pub fn init(level: &str) {
    utils::init_tracing(level);
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init("warn");
        super::init("debug");
    }
}
