//! Exact-decimal price input handling.
//!
//! # Responsibility
//! - Convert user-entered price text into `Decimal` inside core, so every
//!   caller shares one parsing policy.
//!
//! # Invariants
//! - Parsed values keep the scale the user typed (`12.50` stays `12.50`).
//! - Negative prices are rejected, never clamped.

use crate::model::item::ItemValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest fractional scale `Decimal` stores without rounding.
const MAX_PRICE_SCALE: u32 = 28;

static PRICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?\s*[$€£]?\s*(\d{1,3}(?:,\d{3})+|\d+)(?:\.(\d{1,28}))?$")
        .expect("valid price regex")
});

/// Parses price text as entered in the add/edit flow.
///
/// Blank input means "no price" and returns `Ok(None)`.
///
/// # Errors
/// - `InvalidPrice` when the text is not a plain amount with optional
///   currency symbol and thousands separators.
/// - `NegativePrice` when the amount is below zero.
pub fn parse_price(input: &str) -> Result<Option<Decimal>, ItemValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let captures = PRICE_RE
        .captures(trimmed)
        .ok_or_else(|| ItemValidationError::InvalidPrice(trimmed.to_string()))?;

    let mut digits = captures
        .get(2)
        .map(|m| m.as_str().replace(',', ""))
        .unwrap_or_default();
    let typed_scale = match captures.get(3) {
        Some(fraction) => {
            digits.push('.');
            digits.push_str(fraction.as_str());
            u32::try_from(fraction.as_str().len()).unwrap_or(u32::MAX)
        }
        None => 0,
    };

    let magnitude = Decimal::from_str(&digits)
        .map_err(|_| ItemValidationError::InvalidPrice(trimmed.to_string()))?;
    // from_str rounds when the digits exceed the 96-bit mantissa.
    if typed_scale > MAX_PRICE_SCALE || magnitude.scale() != typed_scale {
        return Err(ItemValidationError::InvalidPrice(trimmed.to_string()));
    }

    if captures.get(1).is_some() && !magnitude.is_zero() {
        return Err(ItemValidationError::NegativePrice(-magnitude));
    }

    Ok(Some(magnitude))
}

/// Renders a price back into editable text that `parse_price` accepts.
pub fn price_to_input(price: Option<Decimal>) -> String {
    price.map(|value| value.to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{parse_price, price_to_input};
    use crate::model::item::ItemValidationError;
    use rust_decimal::Decimal;

    #[test]
    fn blank_input_is_no_price() {
        assert_eq!(parse_price("   ").unwrap(), None);
    }

    #[test]
    fn grouped_amount_with_symbol_parses_exactly() {
        let value = parse_price(" $1,299.90 ").unwrap().unwrap();
        assert_eq!(value, Decimal::new(129_990, 2));
        assert_eq!(value.to_string(), "1299.90");
    }

    #[test]
    fn malformed_grouping_is_rejected() {
        let err = parse_price("12,34").unwrap_err();
        assert_eq!(err, ItemValidationError::InvalidPrice("12,34".to_string()));
    }

    #[test]
    fn fraction_beyond_decimal_scale_is_rejected() {
        let input = "0.12345678901234567890123456789";
        let err = parse_price(input).unwrap_err();
        assert_eq!(err, ItemValidationError::InvalidPrice(input.to_string()));
    }

    #[test]
    fn digits_that_would_round_are_rejected() {
        let input = "123456789.1234567890123456789012";
        assert!(matches!(
            parse_price(input),
            Err(ItemValidationError::InvalidPrice(_))
        ));
    }

    #[test]
    fn full_scale_fraction_is_kept_exactly() {
        let value = parse_price("0.1234567890123456789012345678")
            .unwrap()
            .unwrap();
        assert_eq!(value.scale(), 28);
        assert_eq!(value.to_string(), "0.1234567890123456789012345678");
    }

    #[test]
    fn negative_amount_is_rejected() {
        let err = parse_price("-5.00").unwrap_err();
        assert_eq!(err, ItemValidationError::NegativePrice(Decimal::new(-500, 2)));
    }

    #[test]
    fn rendered_price_parses_back_to_same_value() {
        let price = Some(Decimal::new(1_999_999_999, 4));
        assert_eq!(parse_price(&price_to_input(price)).unwrap(), price);
        assert_eq!(price_to_input(None), "");
    }
}
