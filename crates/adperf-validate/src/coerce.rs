//! Text to number coercion.

/// Parse a whole number.
///
/// Decimal text with no fractional part (`"5.0"`, `"1e3"`) is accepted, as
/// spreadsheet exports often write integer columns that way.
pub fn parse_integer(text: &str) -> Option<i64> {
    let trimmed = text.trim();
    if let Ok(value) = trimmed.parse::<i64>() {
        return Some(value);
    }
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}

/// Parse an integer without the decimal fallback of [`parse_integer`].
pub fn parse_strict_integer(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok()
}

/// Parse a decimal number. NaN and infinities parse successfully; callers
/// decide whether to accept them.
pub fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers() {
        assert_eq!(parse_integer("100"), Some(100));
        assert_eq!(parse_integer(" -7 "), Some(-7));
        assert_eq!(parse_integer("5.0"), Some(5));
        assert_eq!(parse_integer("1e3"), Some(1000));
        assert_eq!(parse_integer("5.5"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("inf"), None);
        assert_eq!(parse_integer("1e30"), None);
    }

    #[test]
    fn strict_integers_reject_decimals() {
        assert_eq!(parse_strict_integer("12"), Some(12));
        assert_eq!(parse_strict_integer("12.0"), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float("100.50"), Some(100.5));
        assert_eq!(parse_float("3"), Some(3.0));
        assert_eq!(parse_float("1,5"), None);
        assert!(parse_float("NaN").is_some_and(f64::is_nan));
    }
}
