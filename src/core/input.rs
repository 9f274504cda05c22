//! Conversion of raw user text into typed values.
//!
//! Surrounding whitespace is ignored, everything else must parse completely.

use crate::core::error::{Expected, InputError};

pub fn parse_non_negative_integer(input: &str) -> Result<u64, InputError> {
    input
        .trim()
        .parse::<u64>()
        .map_err(|_| InputError::invalid(input, Expected::NonNegativeInteger))
}

pub fn parse_non_negative_number(input: &str) -> Result<f64, InputError> {
    parse_finite(input)
        .filter(|value| *value >= 0.0)
        .ok_or_else(|| InputError::invalid(input, Expected::NonNegativeNumber))
}

pub fn parse_positive_number(input: &str) -> Result<f64, InputError> {
    parse_finite(input)
        .filter(|value| *value > 0.0)
        .ok_or_else(|| InputError::invalid(input, Expected::PositiveNumber))
}

/// Parse a run duration in whole hours.
///
/// Fractional durations are rounded half to even, and anything that rounds below one hour
/// becomes one hour. Durations beyond [`u64::MAX`] hours saturate.
pub fn parse_duration_hours(input: &str) -> Result<u64, InputError> {
    let hours = parse_positive_number(input)?.round_ties_even().max(1.0);
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let hours = hours as u64;
    Ok(hours)
}

fn parse_finite(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative_integer() {
        assert_eq!(parse_non_negative_integer(" 250 "), Ok(250));
        assert_eq!(parse_non_negative_integer("0"), Ok(0));
        assert_eq!(parse_non_negative_integer("5000000000"), Ok(5_000_000_000));
    }

    #[test]
    fn test_non_negative_integer_rejects_garbage() {
        for input in ["", "abc", "-5", "2.5", "1e3"] {
            assert_eq!(
                parse_non_negative_integer(input),
                Err(InputError::invalid(input, Expected::NonNegativeInteger)),
                "{input:?}",
            );
        }
    }

    #[test]
    fn test_non_negative_number() {
        assert_eq!(parse_non_negative_number("300"), Ok(300.0));
        assert_eq!(parse_non_negative_number("0"), Ok(0.0));
        assert!(parse_non_negative_number("-0.1").is_err());
        assert!(parse_non_negative_number("nan").is_err());
    }

    #[test]
    fn test_positive_number() {
        assert_eq!(parse_positive_number("1.5"), Ok(1.5));
        assert!(parse_positive_number("0").is_err());
        assert!(parse_positive_number("inf").is_err());
        assert!(parse_positive_number("kW").is_err());
    }

    #[test]
    fn test_duration_hours() {
        assert_eq!(parse_duration_hours("2"), Ok(2));
        assert_eq!(parse_duration_hours("2.6"), Ok(3));
        assert_eq!(parse_duration_hours("2.5"), Ok(2));
        assert_eq!(parse_duration_hours("3.5"), Ok(4));
        assert_eq!(parse_duration_hours("0.2"), Ok(1));
        assert!(parse_duration_hours("-1").is_err());
        assert!(parse_duration_hours("two").is_err());
    }

    #[test]
    fn test_huge_duration_hours() {
        assert_eq!(parse_duration_hours("1e12"), Ok(1_000_000_000_000));
        assert_eq!(parse_duration_hours("1e300"), Ok(u64::MAX));
    }
}
