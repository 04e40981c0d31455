//! Running-total checks for percentage-weighted collections.
//!
//! The total is the plain `f64` sum and is compared with the target exactly:
//! a collection is save-ready at 100 and at nothing near it.

use super::error::EditorError;

pub const PERCENTAGE_TARGET: f64 = 100.0;

pub fn percentage_total<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().sum()
}

/// Single entry must satisfy `0 < p <= 100`
pub fn validate_percentage(value: f64) -> Result<f64, EditorError> {
    if value.is_finite() && value > 0.0 && value <= PERCENTAGE_TARGET {
        Ok(value)
    } else {
        Err(EditorError::InvalidPercentage)
    }
}

/// Parse a percentage typed into a form input
pub fn parse_percentage(raw: &str) -> Result<f64, EditorError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| EditorError::InvalidPercentage)
        .and_then(validate_percentage)
}

/// Returns the new total, or `TotalExceeded` if `added` would overflow the target.
pub fn check_addition(current_total: f64, added: f64) -> Result<f64, EditorError> {
    let total = current_total + added;
    if total > PERCENTAGE_TARGET {
        return Err(EditorError::TotalExceeded { total });
    }
    Ok(total)
}

/// Save gate: true iff the total is exactly the target
pub fn is_save_ready<I>(values: I) -> bool
where
    I: IntoIterator<Item = f64>,
{
    percentage_total(values) == PERCENTAGE_TARGET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_ready_only_at_exactly_100() {
        assert!(is_save_ready([60.0, 40.0]));
        assert!(is_save_ready([100.0]));
        assert!(is_save_ready([33.3, 33.3, 33.4]));
        assert!(!is_save_ready([60.0, 39.9]));
        assert!(!is_save_ready([60.0, 40.1]));
        assert!(!is_save_ready([]));
    }

    #[test]
    fn test_save_ready_has_no_tolerance() {
        assert!(is_save_ready([70.1, 29.9]));
        assert!(!is_save_ready([100.0000000004]));
        assert!(!is_save_ready([99.9999999999]));
        assert!(!is_save_ready([50.0, 49.9999999999]));
    }

    #[test]
    fn test_check_addition_rejects_overflow() {
        assert_eq!(check_addition(60.0, 40.0), Ok(100.0));
        assert_eq!(
            check_addition(60.0, 50.0),
            Err(EditorError::TotalExceeded { total: 110.0 })
        );
        assert!(check_addition(99.9, 0.2).is_err());
        assert!(check_addition(100.0, 4e-10).is_err());
        assert!(check_addition(99.9999999999, 0.0000000002).is_err());
    }

    #[test]
    fn test_parse_percentage_bounds() {
        assert_eq!(parse_percentage("45"), Ok(45.0));
        assert_eq!(parse_percentage(" 100 "), Ok(100.0));
        for bad in ["0", "-5", "100.5", "abc", ""] {
            assert_eq!(parse_percentage(bad), Err(EditorError::InvalidPercentage));
        }
    }
}
