use tracing::trace;

use crate::domain::Transaction;

/// Append-only record of the transactions logged during a session.
///
/// Entries keep insertion order and are never updated or removed. Nothing is
/// written to disk; the store lives and dies with its owner.
#[derive(Debug, Clone)]
pub struct LedgerStore {
    transactions: Vec<Transaction>,
    revision: u64,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            revision: 0,
        }
    }

    /// Adds `transaction` at the end and hands back the updated snapshot.
    pub fn append(&mut self, transaction: Transaction) -> &[Transaction] {
        self.transactions.push(transaction);
        self.revision += 1;
        trace!(revision = self.revision, len = self.transactions.len(), "ledger appended");
        &self.transactions
    }

    /// Full history, oldest first.
    pub fn all(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn iter_newest_first(&self) -> impl Iterator<Item = &Transaction> + '_ {
        self.transactions.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Bumped on every append; readers compare it to spot a stale view.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    fn txn(description: &str) -> Transaction {
        Transaction::new(description, 10.0, Category::Salary)
    }

    #[test]
    fn append_keeps_insertion_order() {
        let mut store = LedgerStore::new();
        store.append(txn("first"));
        store.append(txn("second"));
        let snapshot = store.append(txn("third"));

        let names: Vec<&str> = snapshot.iter().map(|t| t.description()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn newest_first_is_the_reverse_view() {
        let mut store = LedgerStore::new();
        store.append(txn("a"));
        store.append(txn("b"));

        let names: Vec<&str> = store.iter_newest_first().map(|t| t.description()).collect();
        assert_eq!(names, vec!["b", "a"]);
        assert_eq!(store.all()[0].description(), "a");
    }

    #[test]
    fn duplicates_are_kept() {
        let mut store = LedgerStore::new();
        store.append(txn("coffee"));
        store.append(txn("coffee"));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn revision_tracks_appends() {
        let mut store = LedgerStore::new();
        assert!(store.is_empty());
        assert_eq!(store.revision(), 0);
        store.append(txn("a"));
        store.append(txn("b"));
        assert_eq!(store.revision(), 2);
    }
}
