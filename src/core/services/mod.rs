pub mod scoring_service;
pub mod summary_service;

pub use scoring_service::{CategoryBreakdown, ScoringService};
pub use summary_service::{StatusSummary, SummaryService};
