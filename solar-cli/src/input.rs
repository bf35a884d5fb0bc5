//! Tolerant parsing of typed-in answers.

use rust_decimal::Decimal;
use solar_core::RoofDirection;
use thiserror::Error;

/// Error returned when typed input cannot be understood.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    InvalidNumber(String),

    #[error("'{0}' is not a direction (expected south, east, west, north or flat)")]
    InvalidDirection(String),

    #[error("no value entered")]
    Empty,
}

/// Normalizes numeric input: trims whitespace and removes commas
/// (thousands separator).
fn normalize_number_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a number such as an area or an angle.
///
/// Handles comma as thousands separator (e.g. `"1,200"`).
pub fn parse_f64(s: &str) -> Result<f64, InputError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Err(InputError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid number: {}", e);
        InputError::InvalidNumber(s.trim().to_string())
    })
}

/// Parses a monetary amount.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`).
pub fn parse_decimal(s: &str) -> Result<Decimal, InputError> {
    let normalized = normalize_number_input(s);
    if normalized.is_empty() {
        return Err(InputError::Empty);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        InputError::InvalidNumber(s.trim().to_string())
    })
}

/// Parses a roof direction, accepting full names and one-letter
/// shorthand in any case.
pub fn parse_direction(s: &str) -> Result<RoofDirection, InputError> {
    if s.trim().is_empty() {
        return Err(InputError::Empty);
    }
    RoofDirection::parse(s).ok_or_else(|| InputError::InvalidDirection(s.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parse_f64_accepts_plain_and_separated_numbers() {
        assert_eq!(parse_f64("30"), Ok(30.0));
        assert_eq!(parse_f64("  42.5 "), Ok(42.5));
        assert_eq!(parse_f64("1,200"), Ok(1200.0));
    }

    #[test]
    fn parse_f64_rejects_garbage() {
        assert_eq!(
            parse_f64("thirty"),
            Err(InputError::InvalidNumber("thirty".to_string()))
        );
    }

    #[test]
    fn parse_f64_rejects_empty_input() {
        assert_eq!(parse_f64(""), Err(InputError::Empty));
        assert_eq!(parse_f64("   "), Err(InputError::Empty));
    }

    #[test]
    fn parse_decimal_accepts_comma_thousands_separator() {
        assert_eq!(parse_decimal("1,234.56"), Ok(dec!(1234.56)));
        assert_eq!(parse_decimal("900"), Ok(dec!(900)));
    }

    #[test]
    fn parse_direction_accepts_names_and_shorthand() {
        assert_eq!(parse_direction("south"), Ok(RoofDirection::South));
        assert_eq!(parse_direction(" W "), Ok(RoofDirection::West));
    }

    #[test]
    fn parse_direction_rejects_unknown_values() {
        assert_eq!(
            parse_direction("up"),
            Err(InputError::InvalidDirection("up".to_string()))
        );
    }
}
