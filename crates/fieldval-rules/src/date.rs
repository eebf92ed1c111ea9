//! Calendar date validation and ordering.
//!
//! Values arrive as text in a host-declared format; they convert to
//! canonical day/month/year parts, pass a shape check, and must survive the
//! calendar round-trip before any ordering is compared.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use fieldval_core::DateFormat;

use crate::general::is_empty;

static DATE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(3[01]|[12][0-9]|0?[1-9])/(1[0-2]|0?[1-9])/(?:[0-9]{2})?[0-9]{2}$")
        .expect("Invalid date shape regex")
});

/// True when `value` is empty or a real calendar date written in `format`.
///
/// Rejects values the calendar would normalize away, like April 31st or
/// February 29th outside a leap year.
pub fn is_date(value: &str, format: &DateFormat) -> bool {
    if is_empty(value) {
        return true;
    }
    let Some(date) = format.convert(value) else {
        return false;
    };
    if !DATE_SHAPE_REGEX.is_match(&date.to_string()) {
        return false;
    }
    date.to_naive_date().is_some()
}

fn calendar_value(value: &str, format: &DateFormat) -> Option<NaiveDate> {
    if is_empty(value) || !is_date(value, format) {
        return None;
    }
    format.convert(value)?.to_naive_date()
}

/// `value` on or after `min`; inclusive. Empty or unparsable sides pass.
pub fn min_date(value: &str, min: &str, format: &DateFormat) -> bool {
    match (calendar_value(value, format), calendar_value(min, format)) {
        (Some(v), Some(lo)) => v >= lo,
        _ => true,
    }
}

/// `value` on or before `max`; inclusive. Empty or unparsable sides pass.
pub fn max_date(value: &str, max: &str, format: &DateFormat) -> bool {
    match (calendar_value(value, format), calendar_value(max, format)) {
        (Some(v), Some(hi)) => v <= hi,
        _ => true,
    }
}

/// `value` between `min` and `max` inclusive. Empty or unparsable sides
/// pass, as does an inverted range.
pub fn range_date(value: &str, min: &str, max: &str, format: &DateFormat) -> bool {
    let bounds = (
        calendar_value(value, format),
        calendar_value(min, format),
        calendar_value(max, format),
    );
    match bounds {
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
