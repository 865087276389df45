//! Amount formatting for report display
//!
//! Accounting convention: thousands-grouped, two decimals, negatives wrapped
//! in parentheses instead of a minus sign.

use bigdecimal::{BigDecimal, RoundingMode};

/// Round an amount to two decimal places, half up
pub fn round2(amount: &BigDecimal) -> BigDecimal {
    amount.with_scale_round(2, RoundingMode::HalfUp)
}

/// Render an amount as a thousands-grouped string with exactly two decimals
pub fn format_amount(amount: &BigDecimal) -> String {
    let rounded = round2(amount);
    let negative = rounded < BigDecimal::from(0);

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part.to_string(), frac_part.to_string()),
        None => (text, "00".to_string()),
    };

    let body = format!("{}.{}", group_thousands(&int_part), frac_part);
    if negative {
        format!("({body})")
    } else {
        body
    }
}

/// Render an optional amount; a missing amount is treated as zero
pub fn format_amount_opt(amount: Option<&BigDecimal>) -> String {
    match amount {
        Some(amount) => format_amount(amount),
        None => format_amount(&BigDecimal::from(0)),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(text: &str) -> BigDecimal {
        text.parse().unwrap()
    }

    #[test]
    fn groups_thousands_and_pads_decimals() {
        assert_eq!(format_amount(&amount("1234.5")), "1,234.50");
        assert_eq!(format_amount(&amount("1000000")), "1,000,000.00");
        assert_eq!(format_amount(&amount("999")), "999.00");
        assert_eq!(format_amount(&amount("12")), "12.00");
    }

    #[test]
    fn negatives_wrapped_in_parentheses() {
        assert_eq!(format_amount(&amount("-1234.5")), "(1,234.50)");
        assert_eq!(format_amount(&amount("-0.5")), "(0.50)");
    }

    #[test]
    fn zero_and_missing_render_as_zero() {
        assert_eq!(format_amount(&amount("0")), "0.00");
        assert_eq!(format_amount_opt(None), "0.00");
        assert_eq!(format_amount_opt(Some(&amount("42"))), "42.00");
    }

    #[test]
    fn rounds_half_up_to_two_places() {
        assert_eq!(format_amount(&amount("999.995")), "1,000.00");
        assert_eq!(format_amount(&amount("0.004")), "0.00");
        assert_eq!(format_amount(&amount("-0.004")), "0.00");
    }

    #[test]
    fn round2_keeps_value_semantics() {
        assert_eq!(round2(&amount("10.128")), amount("10.13"));
        assert_eq!(round2(&amount("10")), amount("10.00"));
    }
}
