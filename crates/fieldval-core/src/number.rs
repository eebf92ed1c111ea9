//! Numeric coercion for bound and value comparison.

use std::fmt;

/// Outcome of coercing a text value to a number.
///
/// Bounded numeric checks pass vacuously for `Empty` and `Invalid`, so
/// coercion never needs to fail loudly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedNumber {
    /// A finite numeric value.
    Value(f64),
    /// The source string was empty.
    Empty,
    /// The source string does not parse as a finite number.
    Invalid,
}

impl ParsedNumber {
    /// Coerces a text value.
    ///
    /// The empty string is `Empty`. Anything else is trimmed and parsed as
    /// `f64`; unparsable and non-finite results are `Invalid`.
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return ParsedNumber::Empty;
        }
        match value.trim().parse::<f64>() {
            Ok(n) if n.is_finite() => ParsedNumber::Value(n),
            _ => ParsedNumber::Invalid,
        }
    }

    /// The numeric value, when there is one.
    pub fn as_value(self) -> Option<f64> {
        match self {
            ParsedNumber::Value(n) => Some(n),
            ParsedNumber::Empty | ParsedNumber::Invalid => None,
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, ParsedNumber::Empty)
    }

    pub fn is_invalid(self) -> bool {
        matches!(self, ParsedNumber::Invalid)
    }
}

impl From<f64> for ParsedNumber {
    fn from(n: f64) -> Self {
        if n.is_finite() {
            ParsedNumber::Value(n)
        } else {
            ParsedNumber::Invalid
        }
    }
}

impl From<u32> for ParsedNumber {
    fn from(n: u32) -> Self {
        ParsedNumber::Value(f64::from(n))
    }
}

impl fmt::Display for ParsedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedNumber::Value(n) => write!(f, "{n}"),
            ParsedNumber::Empty | ParsedNumber::Invalid => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_empty() {
        assert_eq!(ParsedNumber::parse(""), ParsedNumber::Empty);
    }

    #[test]
    fn test_plain_signed_and_scientific_values_parse() {
        assert_eq!(ParsedNumber::parse("42"), ParsedNumber::Value(42.0));
        assert_eq!(ParsedNumber::parse("-3.5"), ParsedNumber::Value(-3.5));
        assert_eq!(ParsedNumber::parse(" 12 "), ParsedNumber::Value(12.0));
        assert_eq!(ParsedNumber::parse("1e3"), ParsedNumber::Value(1000.0));
    }

    #[test]
    fn test_text_and_non_finite_are_invalid() {
        assert!(ParsedNumber::parse("abc").is_invalid());
        assert!(ParsedNumber::parse("12abc").is_invalid());
        assert!(ParsedNumber::parse("NaN").is_invalid());
        assert!(ParsedNumber::parse("inf").is_invalid());
        assert!(ParsedNumber::parse(" ").is_invalid());
    }

    #[test]
    fn test_display_renders_integral_values_without_fraction() {
        assert_eq!(ParsedNumber::Value(5.0).to_string(), "5");
        assert_eq!(ParsedNumber::Value(2.5).to_string(), "2.5");
        assert_eq!(ParsedNumber::Empty.to_string(), "");
        assert_eq!(ParsedNumber::Invalid.to_string(), "");
    }
}
