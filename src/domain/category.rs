//! The closed set of transaction categories.
//!
//! Each category carries a display label, a point weight and the sign it
//! applies to the balance. Weight and sign are independent: a planned expense
//! debits the balance but still earns points.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Direction in which a category moves the running balance.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BalanceSign {
    Credit,
    Debit,
}

impl BalanceSign {
    /// Applies the sign to a positive amount.
    pub fn apply(self, amount: f64) -> f64 {
        match self {
            BalanceSign::Credit => amount,
            BalanceSign::Debit => -amount,
        }
    }
}

/// Kind of transaction a user can log.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Salary,
    ExtraIncome,
    PlannedExpense,
    UnplannedExpense,
    Investment,
}

/// Static record backing every [`Category`] variant.
struct CategoryInfo {
    label: &'static str,
    weight: i64,
    sign: BalanceSign,
    aliases: &'static [&'static str],
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 5] = [
        Category::Salary,
        Category::ExtraIncome,
        Category::PlannedExpense,
        Category::UnplannedExpense,
        Category::Investment,
    ];

    fn info(self) -> CategoryInfo {
        match self {
            Category::Salary => CategoryInfo {
                label: "Salary",
                weight: 10,
                sign: BalanceSign::Credit,
                aliases: &["salary"],
            },
            Category::ExtraIncome => CategoryInfo {
                label: "Extra Income",
                weight: 15,
                sign: BalanceSign::Credit,
                aliases: &["extra", "extra-income", "extra_income"],
            },
            Category::PlannedExpense => CategoryInfo {
                label: "Planned Expense",
                weight: 5,
                sign: BalanceSign::Debit,
                aliases: &["planned", "planned-expense", "planned_expense"],
            },
            Category::UnplannedExpense => CategoryInfo {
                label: "Unplanned Expense",
                weight: -10,
                sign: BalanceSign::Debit,
                aliases: &["unplanned", "unplanned-expense", "unplanned_expense"],
            },
            Category::Investment => CategoryInfo {
                label: "Investment",
                weight: 20,
                sign: BalanceSign::Credit,
                aliases: &["investment", "invest"],
            },
        }
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    /// Points awarded for each transaction logged under this category.
    pub fn weight(self) -> i64 {
        self.info().weight
    }

    pub fn sign(self) -> BalanceSign {
        self.info().sign
    }

    pub fn is_credit(self) -> bool {
        self.sign() == BalanceSign::Credit
    }

    /// Contribution of `amount` to the balance under this category.
    pub fn signed_amount(self, amount: f64) -> f64 {
        self.sign().apply(amount)
    }

    /// Weight rendered the way category pickers show it, e.g. `"-10 pts"`.
    pub fn points_label(self) -> String {
        format!("{} pts", self.weight())
    }

    /// Short names accepted on the command line besides the label.
    pub fn aliases(self) -> &'static [&'static str] {
        self.info().aliases
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let needle = raw.trim().to_ascii_lowercase();
        Category::ALL
            .into_iter()
            .find(|category| {
                category.label().eq_ignore_ascii_case(&needle)
                    || category.aliases().iter().any(|alias| *alias == needle)
            })
            .ok_or_else(|| UnknownCategory(raw.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_match_the_scoring_table() {
        let weights: Vec<i64> = Category::ALL.iter().map(|c| c.weight()).collect();
        assert_eq!(weights, vec![10, 15, 5, -10, 20]);
    }

    #[test]
    fn only_expenses_debit_the_balance() {
        assert!(Category::Salary.is_credit());
        assert!(Category::ExtraIncome.is_credit());
        assert!(Category::Investment.is_credit());
        assert!(!Category::PlannedExpense.is_credit());
        assert!(!Category::UnplannedExpense.is_credit());
    }

    #[test]
    fn planned_expense_debits_but_still_earns_points() {
        assert_eq!(Category::PlannedExpense.signed_amount(40.0), -40.0);
        assert_eq!(Category::PlannedExpense.weight(), 5);
    }

    #[test]
    fn parses_labels_and_aliases_case_insensitively() {
        assert_eq!("salary".parse::<Category>(), Ok(Category::Salary));
        assert_eq!("Extra Income".parse::<Category>(), Ok(Category::ExtraIncome));
        assert_eq!("PLANNED".parse::<Category>(), Ok(Category::PlannedExpense));
        assert_eq!(" unplanned-expense ".parse::<Category>(), Ok(Category::UnplannedExpense));
        assert_eq!("invest".parse::<Category>(), Ok(Category::Investment));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "lottery".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("lottery".into()));
    }

    #[test]
    fn points_label_keeps_the_sign() {
        assert_eq!(Category::UnplannedExpense.points_label(), "-10 pts");
        assert_eq!(Category::Investment.points_label(), "20 pts");
    }
}
