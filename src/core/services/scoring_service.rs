//! Pure derivations over a ledger snapshot.

use serde::Serialize;

use crate::domain::{Category, Rank, Transaction};

/// Balance, points and rank computed from a slice of transactions.
///
/// Nothing is cached; every call folds the snapshot it is given.
pub struct ScoringService;

/// Per-category totals for one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub entries: usize,
    pub amount: f64,
    /// Raw points contributed by this category, before the zero floor.
    pub points: i64,
}

impl ScoringService {
    /// Signed sum of amounts: credits add, debits subtract.
    pub fn balance(transactions: &[Transaction]) -> f64 {
        transactions.iter().map(Transaction::signed_amount).sum()
    }

    /// Sum of category weights without the floor applied.
    pub fn raw_points(transactions: &[Transaction]) -> i64 {
        transactions.iter().map(Transaction::points).sum()
    }

    /// Sum of category weights, floored at zero.
    pub fn points(transactions: &[Transaction]) -> u64 {
        u64::try_from(Self::raw_points(transactions)).unwrap_or(0)
    }

    pub fn rank(points: u64) -> Rank {
        Rank::from_points(points)
    }

    /// Totals for every category in display order, including unused ones.
    pub fn breakdown(transactions: &[Transaction]) -> Vec<CategoryBreakdown> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let matching = transactions.iter().filter(|t| t.category() == category);
                let (entries, amount) = matching
                    .fold((0usize, 0.0f64), |(count, sum), t| (count + 1, sum + t.amount()));
                CategoryBreakdown {
                    category,
                    entries,
                    amount,
                    points: entries as i64 * category.weight(),
                }
            })
            .collect()
    }
}
