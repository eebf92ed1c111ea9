//! Fixed-pattern item type validation.
//!
//! Each predicate matches a compiled-once pattern and passes vacuously on
//! the empty string; required-ness is a separate check.

use std::sync::LazyLock;

use regex::Regex;

use crate::general::is_empty;

static ALPHANUMERIC_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9]+$").expect("Invalid alphanumeric regex"));

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-?(?:\d+|\d{1,3}(?:,\d{3})+)?(?:\.\d+)?$").expect("Invalid number regex")
});

static DIGIT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("Invalid digit regex"));

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(http|ftp|https)://[\w-]+(\.[\w-]+)+([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])?")
        .expect("Invalid url regex")
});

/// Letters and digits only, case-insensitive.
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC_REGEX.is_match(value) || is_empty(value)
}

/// A decimal number: optional sign, plain or comma-grouped integer part,
/// optional fractional part. Accepts `.5`, `-.5`, and `1,234.56`; rejects
/// badly grouped forms like `1,23`.
pub fn is_number(value: &str) -> bool {
    NUMBER_REGEX.is_match(value) || is_empty(value)
}

/// Unsigned digits only.
pub fn is_digit(value: &str) -> bool {
    DIGIT_REGEX.is_match(value) || is_empty(value)
}

/// A single `@` with a dotted domain behind it. Deliberately permissive on
/// the local part.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value) || is_empty(value)
}

/// An `http`, `https`, or `ftp` URL somewhere in the value. The pattern is
/// unanchored, so surrounding text does not disqualify it; a missing or
/// misspelled scheme does.
pub fn is_url(value: &str) -> bool {
    URL_REGEX.is_match(value) || is_empty(value)
}
