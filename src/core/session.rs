//! The in-memory API the UI talks to.

use tracing::{debug, info};

use crate::core::errors::Rejection;
use crate::core::services::{ScoringService, StatusSummary, SummaryService};
use crate::core::validation::validate_submission;
use crate::domain::{Category, Rank, Transaction};
use crate::ledger::LedgerStore;

/// One user's running session: the ledger plus the derived views over it.
///
/// Balance, points and rank are re-derived from the ledger on every read.
#[derive(Debug, Clone, Default)]
pub struct FinanceSession {
    ledger: LedgerStore,
}

impl FinanceSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a transaction if the input is valid.
    ///
    /// Returns `false` for any invalid input without saying why; callers
    /// keep their form contents when this happens.
    pub fn submit(&mut self, description: &str, raw_amount: &str, category: Category) -> bool {
        match self.try_submit(description, raw_amount, category) {
            Ok(_) => true,
            Err(reason) => {
                debug!(%reason, category = category.label(), "submission discarded");
                false
            }
        }
    }

    /// Like [`submit`](Self::submit) but reports the reason for a rejection.
    pub fn try_submit(
        &mut self,
        description: &str,
        raw_amount: &str,
        category: Category,
    ) -> Result<&Transaction, Rejection> {
        let valid = validate_submission(description, raw_amount)?;
        let transaction = Transaction::new(valid.description, valid.amount, category);
        let snapshot = self.ledger.append(transaction);
        info!(
            category = category.label(),
            amount = valid.amount,
            entries = snapshot.len(),
            "transaction recorded"
        );
        Ok(&snapshot[snapshot.len() - 1])
    }

    pub fn current_balance(&self) -> f64 {
        ScoringService::balance(self.ledger.all())
    }

    pub fn current_points(&self) -> u64 {
        ScoringService::points(self.ledger.all())
    }

    pub fn current_rank(&self) -> Rank {
        ScoringService::rank(self.current_points())
    }

    /// Recorded transactions, oldest first.
    pub fn history(&self) -> &[Transaction] {
        self.ledger.all()
    }

    pub fn status(&self) -> StatusSummary {
        SummaryService::status(&self.ledger)
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }
}
