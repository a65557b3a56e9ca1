//! Amount rendering. Values are kept at full precision and only cut to two
//! decimals when shown.

pub const DEFAULT_SYMBOL: &str = "R$";

/// Formats `amount` as `"<symbol> <value>"` with two decimals, e.g. `R$ -12.50`.
pub fn format_amount(amount: f64, symbol: &str) -> String {
    // Anything that rounds to zero cents, including `-0.0` and drift such as
    // `-2.7e-17`, would otherwise print as "-0.00".
    let amount = if (amount * 100.0).round() == 0.0 { 0.0 } else { amount };
    let symbol = symbol.trim();
    if symbol.is_empty() {
        format!("{amount:.2}")
    } else {
        format!("{symbol} {amount:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_two_decimals() {
        assert_eq!(format_amount(12.5, "R$"), "R$ 12.50");
        assert_eq!(format_amount(800.0, "$"), "$ 800.00");
    }

    #[test]
    fn keeps_the_sign_after_the_symbol() {
        assert_eq!(format_amount(-200.0, "R$"), "R$ -200.00");
    }

    #[test]
    fn negative_zero_is_plain_zero() {
        assert_eq!(format_amount(-0.0, "R$"), "R$ 0.00");
    }

    #[test]
    fn values_that_round_to_zero_lose_their_sign() {
        let drifted = 0.3 - 0.1 - 0.2;
        assert!(drifted < 0.0);
        assert_eq!(format_amount(drifted, "R$"), "R$ 0.00");
        assert_eq!(format_amount(-0.001, "R$"), "R$ 0.00");
        assert_eq!(format_amount(-0.02, "R$"), "R$ -0.02");
    }

    #[test]
    fn empty_symbol_prints_the_bare_value() {
        assert_eq!(format_amount(3.14159, ""), "3.14");
    }
}
