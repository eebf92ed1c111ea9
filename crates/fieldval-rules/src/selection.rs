//! Checked-count bounds for selection groups.

use fieldval_core::ParsedNumber;

use crate::number::{max_number, min_number, range_number};

/// At least `min` members checked.
///
/// A zero count passes only when `empty_allowed`: an untouched group is
/// "empty" rather than "too few" unless the caller says otherwise.
pub fn min_check(checked: u32, min: ParsedNumber, empty_allowed: bool) -> bool {
    if empty_allowed && checked == 0 {
        return true;
    }
    min_number(ParsedNumber::from(checked), min)
}

/// At most `max` members checked; a zero count always passes.
pub fn max_check(checked: u32, max: ParsedNumber) -> bool {
    checked == 0 || max_number(ParsedNumber::from(checked), max)
}

/// Between `min` and `max` members checked; a zero count always passes.
pub fn range_check(checked: u32, min: ParsedNumber, max: ParsedNumber) -> bool {
    checked == 0 || range_number(ParsedNumber::from(checked), min, max)
}
