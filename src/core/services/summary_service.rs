use serde::Serialize;

use crate::core::services::ScoringService;
use crate::domain::Rank;
use crate::ledger::LedgerStore;

/// Everything the status view shows, derived in one pass over the ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub balance: f64,
    pub points: u64,
    pub rank: Rank,
    pub next_rank: Option<Rank>,
    pub points_to_next: Option<u64>,
    pub entries: usize,
}

pub struct SummaryService;

impl SummaryService {
    pub fn status(store: &LedgerStore) -> StatusSummary {
        let snapshot = store.all();
        let points = ScoringService::points(snapshot);
        let rank = ScoringService::rank(points);
        StatusSummary {
            balance: ScoringService::balance(snapshot),
            points,
            rank,
            next_rank: rank.next(),
            points_to_next: Rank::points_to_next(points),
            entries: snapshot.len(),
        }
    }
}
