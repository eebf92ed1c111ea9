//! Numeric bounds over coerced values.
//!
//! Every comparison is inclusive, and every bound is advisory: when the
//! value or a bound did not coerce to a number there is nothing to compare
//! and the check passes.

use fieldval_core::ParsedNumber;

/// `value >= min` when both coerce; otherwise pass.
pub fn min_number(value: ParsedNumber, min: ParsedNumber) -> bool {
    match (value.as_value(), min.as_value()) {
        (Some(v), Some(lo)) => v >= lo,
        _ => true,
    }
}

/// `value <= max` when both coerce; otherwise pass.
pub fn max_number(value: ParsedNumber, max: ParsedNumber) -> bool {
    match (value.as_value(), max.as_value()) {
        (Some(v), Some(hi)) => v <= hi,
        _ => true,
    }
}

/// `min <= value <= max` when all three coerce and the range is not
/// inverted; otherwise pass.
pub fn range_number(value: ParsedNumber, min: ParsedNumber, max: ParsedNumber) -> bool {
    match (value.as_value(), min.as_value(), max.as_value()) {
        (Some(v), Some(lo), Some(hi)) => {
            if hi >= lo {
                v >= lo && v <= hi
            } else {
                true
            }
        }
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(value: &str) -> ParsedNumber {
        ParsedNumber::parse(value)
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(min_number(n("2"), n("2")));
        assert!(max_number(n("2"), n("2")));
        assert!(range_number(n("2"), n("2"), n("2")));
        assert!(!min_number(n("1.9"), n("2")));
    }

    #[test]
    fn test_missing_sides_pass() {
        assert!(min_number(n(""), n("2")));
        assert!(min_number(n("2"), n("")));
        assert!(max_number(n("abc"), n("2")));
        assert!(range_number(n("4"), n(""), n("6")));
    }

    #[test]
    fn test_inverted_range_passes() {
        assert!(range_number(n("4"), n("6"), n("2")));
    }
}
