//! Gatekeeping between raw form input and the ledger.

use crate::core::errors::Rejection;

/// Largest amount a single entry may carry. Sums of capped amounts stay
/// finite and keep cent precision.
pub const MAX_AMOUNT: f64 = 1_000_000_000_000.0;

/// Form input that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubmission {
    pub description: String,
    pub amount: f64,
}

/// Checks a description and raw amount text.
///
/// The description must contain something other than whitespace and the
/// amount must parse to a finite number strictly greater than zero and no
/// larger than [`MAX_AMOUNT`].
/// Surrounding whitespace around the amount is ignored; the description is
/// stored exactly as typed.
pub fn validate_submission(description: &str, raw_amount: &str) -> Result<ValidSubmission, Rejection> {
    if description.trim().is_empty() {
        return Err(Rejection::BlankDescription);
    }
    let amount = parse_amount(raw_amount)?;
    Ok(ValidSubmission {
        description: description.to_string(),
        amount,
    })
}

pub fn parse_amount(raw_amount: &str) -> Result<f64, Rejection> {
    let trimmed = raw_amount.trim();
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| Rejection::UnparseableAmount(trimmed.to_string()))?;
    if !amount.is_finite() {
        return Err(Rejection::NonFiniteAmount);
    }
    if amount <= 0.0 {
        return Err(Rejection::NonPositiveAmount(amount));
    }
    if amount > MAX_AMOUNT {
        return Err(Rejection::AmountTooLarge(amount));
    }
    Ok(amount)
}
