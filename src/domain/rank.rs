//! Narrative rank ladder derived from points.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    Novice,
    BRankHunter,
    ARankHunter,
    SRankHunter,
    ShadowMonarch,
}

impl Rank {
    /// Tiers ordered from the highest threshold down. Lookups walk this list
    /// and stop at the first tier whose threshold is met.
    pub const LADDER: [Rank; 5] = [
        Rank::ShadowMonarch,
        Rank::SRankHunter,
        Rank::ARankHunter,
        Rank::BRankHunter,
        Rank::Novice,
    ];

    /// Lowest point total (inclusive) that reaches this tier.
    pub fn threshold(self) -> u64 {
        match self {
            Rank::ShadowMonarch => 150,
            Rank::SRankHunter => 100,
            Rank::ARankHunter => 60,
            Rank::BRankHunter => 30,
            Rank::Novice => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Rank::ShadowMonarch => "Shadow Monarch",
            Rank::SRankHunter => "S-Rank Hunter",
            Rank::ARankHunter => "A-Rank Hunter",
            Rank::BRankHunter => "B-Rank Hunter",
            Rank::Novice => "Novice",
        }
    }

    pub fn from_points(points: u64) -> Rank {
        Rank::LADDER
            .into_iter()
            .find(|rank| points >= rank.threshold())
            .unwrap_or(Rank::Novice)
    }

    /// The tier directly above this one, if any.
    pub fn next(self) -> Option<Rank> {
        match self {
            Rank::Novice => Some(Rank::BRankHunter),
            Rank::BRankHunter => Some(Rank::ARankHunter),
            Rank::ARankHunter => Some(Rank::SRankHunter),
            Rank::SRankHunter => Some(Rank::ShadowMonarch),
            Rank::ShadowMonarch => None,
        }
    }

    /// Points still missing to reach the tier above the one `points` maps to.
    pub fn points_to_next(points: u64) -> Option<u64> {
        Rank::from_points(points)
            .next()
            .map(|next| next.threshold().saturating_sub(points))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
