use regex::Regex;

/// True when `value` has length zero.
pub fn is_empty(value: &str) -> bool {
    value.is_empty()
}

/// True when `value` is empty after trimming, so whitespace-only input
/// does not count as filled in.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Exact string equality.
pub fn is_equal(value: &str, other: &str) -> bool {
    value == other
}

/// True when `value` contains a match for `pattern`, or is empty.
///
/// The pattern is not anchored here; callers wanting a whole-value match
/// put the anchors in the pattern.
pub fn matches_pattern(value: &str, pattern: &Regex) -> bool {
    pattern.is_match(value) || is_empty(value)
}
