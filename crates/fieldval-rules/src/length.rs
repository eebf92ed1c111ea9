//! Character-count bounds.

/// At least `min` characters, or empty.
pub fn min_length(value: &str, min: usize) -> bool {
    value.chars().count() >= min || value.is_empty()
}

/// At most `max` characters. The empty value trivially satisfies this.
pub fn max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

/// Between `min` and `max` characters inclusive, or empty.
pub fn range_length(value: &str, min: usize, max: usize) -> bool {
    min_length(value, min) && max_length(value, max)
}
