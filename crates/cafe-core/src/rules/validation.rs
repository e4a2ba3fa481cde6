//! Input validation applied before anything reaches the store.

use crate::errors::{CafeError, Result};
use crate::timestamp::Timestamp;

/// Reject names that are empty or whitespace only
///
/// # Errors
///
/// Returns `EmptyDishName` for such names.
pub fn validate_dish_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CafeError::EmptyDishName);
    }
    Ok(())
}

/// Parse the two timestamps of a new order
///
/// Order time is checked first so the error names the first bad field.
///
/// # Errors
///
/// Returns `InvalidTimestamp` naming `order_time` or `cook_time`.
pub fn parse_order_times(order_time: &str, cook_time: &str) -> Result<(Timestamp, Timestamp)> {
    let order = Timestamp::parse("order_time", order_time)?;
    let cook = Timestamp::parse("cook_time", cook_time)?;
    Ok((order, cook))
}

/// Parse an order id typed by a user
///
/// # Errors
///
/// Returns `InvalidOrderId` when `input` is not a base-10 integer.
pub fn parse_order_id(input: &str) -> Result<i64> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| CafeError::InvalidOrderId {
            input: input.to_string(),
        })
}

/// Check a configured fast-order threshold
///
/// # Errors
///
/// Returns `InvalidThreshold` for zero, negative, or absurdly large values.
pub fn validate_threshold(minutes: i64) -> Result<u32> {
    if minutes < 1 {
        return Err(CafeError::InvalidThreshold { minutes });
    }
    u32::try_from(minutes).map_err(|_| CafeError::InvalidThreshold { minutes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dish_name() {
        assert!(validate_dish_name("Espresso").is_ok());
        assert_eq!(validate_dish_name(""), Err(CafeError::EmptyDishName));
        assert_eq!(validate_dish_name("   "), Err(CafeError::EmptyDishName));
    }

    #[test]
    fn test_order_times_reports_first_bad_field() {
        let err = parse_order_times("bad", "also bad").unwrap_err();
        assert!(matches!(err, CafeError::InvalidTimestamp { ref field, .. } if field == "order_time"));

        let err = parse_order_times("2024-01-01 10:00:00", "bad").unwrap_err();
        assert!(matches!(err, CafeError::InvalidTimestamp { ref field, .. } if field == "cook_time"));
    }

    #[test]
    fn test_order_times_does_not_require_ordering() {
        assert!(parse_order_times("2024-01-01 10:00:00", "2024-01-01 09:00:00").is_ok());
    }

    #[test]
    fn test_parse_order_id() {
        assert_eq!(parse_order_id("12"), Ok(12));
        assert_eq!(parse_order_id(" 3\n"), Ok(3));
        assert!(matches!(
            parse_order_id("abc"),
            Err(CafeError::InvalidOrderId { .. })
        ));
        assert!(parse_order_id("1.5").is_err());
    }

    #[test]
    fn test_threshold() {
        assert_eq!(validate_threshold(15), Ok(15));
        assert!(validate_threshold(0).is_err());
        assert!(validate_threshold(-5).is_err());
        assert!(validate_threshold(i64::MAX).is_err());
    }
}
