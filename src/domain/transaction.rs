use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::category::Category;

/// A single logged movement of money.
///
/// Fields are private so a transaction cannot change after it is recorded;
/// the only constructor is used by the session once validation has passed.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Transaction {
    id: Uuid,
    description: String,
    amount: f64,
    category: Category,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(description: impl Into<String>, amount: f64, category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            category,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// First eight hex digits of the id, enough to tell entries apart in listings.
    pub fn short_id(&self) -> String {
        let mut short = self.id.simple().to_string();
        short.truncate(8);
        short
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The positive amount entered by the user.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }

    /// Amount with the category's balance sign applied.
    pub fn signed_amount(&self) -> f64 {
        self.category.signed_amount(self.amount)
    }

    pub fn points(&self) -> i64 {
        self.category.weight()
    }
}
