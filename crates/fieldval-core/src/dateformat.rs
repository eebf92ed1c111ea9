//! Flexible date format handling.
//!
//! A [`DateFormat`] describes how a host writes dates (`DD/MM/YYYY`,
//! `DD-MM-RR`, `MM.YYYY`, ...). Converting a value reorders it into
//! canonical day/month/year parts by position alone; no numeric
//! interpretation happens until [`CanonicalDate::to_naive_date`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

/// Placeholder for a day or month part the format does not cover.
pub const PART_PLACEHOLDER: &str = "xx";

/// Placeholder for a year part the format does not cover.
pub const YEAR_PLACEHOLDER: &str = "xxxx";

/// A parsed date format specification.
///
/// Construction uppercases the spec and records where the `DD`, `MM`, and
/// year tokens sit. Year tokens are tried in the order `YYYY`, `RRRR`,
/// `YY`, `RR`; the first match wins. A spec may omit any token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    spec: String,
    separators: String,
    day: Option<usize>,
    month: Option<usize>,
    year: Option<YearToken>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct YearToken {
    offset: usize,
    len: usize,
}

impl DateFormat {
    /// Parses a format specification. Never fails: a spec without a given
    /// token simply leaves that part uncovered.
    pub fn new(spec: &str) -> Self {
        let spec = spec.to_uppercase();
        let day = spec.find("DD");
        let month = spec.find("MM");
        let year = year_token(&spec);
        let separators = spec.chars().filter(|c| !c.is_ascii_alphabetic()).collect();
        DateFormat {
            spec,
            separators,
            day,
            month,
            year,
        }
    }

    /// The uppercased format specification.
    pub fn spec(&self) -> &str {
        &self.spec
    }

    /// The separator signature: the spec with all letters removed.
    pub fn separators(&self) -> &str {
        &self.separators
    }

    /// Reorders `value` into canonical day/month/year parts.
    ///
    /// The value matches the format when it has the same length and the
    /// same separator signature (the value with all digits removed). On a
    /// mismatch no parts can be located and `None` is returned. Parts the
    /// format does not cover come back as the `xx` / `xxxx` placeholders.
    pub fn convert(&self, value: &str) -> Option<CanonicalDate> {
        if value.len() != self.spec.len() {
            return None;
        }
        let value_separators: String = value.chars().filter(|c| !c.is_ascii_digit()).collect();
        if value_separators != self.separators {
            return None;
        }

        let part = |offset: Option<usize>, len: usize, placeholder: &str| {
            offset
                .and_then(|at| value.get(at..at + len))
                .unwrap_or(placeholder)
                .to_string()
        };
        let (year_at, year_len) = match self.year {
            Some(token) => (Some(token.offset), token.len),
            None => (None, 4),
        };
        Some(CanonicalDate {
            day: part(self.day, 2, PART_PLACEHOLDER),
            month: part(self.month, 2, PART_PLACEHOLDER),
            year: part(year_at, year_len, YEAR_PLACEHOLDER),
        })
    }
}

fn year_token(spec: &str) -> Option<YearToken> {
    for (token, len) in [("YYYY", 4), ("RRRR", 4), ("YY", 2), ("RR", 2)] {
        if let Some(offset) = spec.find(token) {
            return Some(YearToken { offset, len });
        }
    }
    None
}

/// Canonical day/month/year parts in `DD/MM/YYYY` order.
///
/// Parts are positional text, not numbers. A part the source format did
/// not cover holds a placeholder and can never become a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalDate {
    day: String,
    month: String,
    year: String,
}

impl CanonicalDate {
    pub fn new(
        day: impl Into<String>,
        month: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        CanonicalDate {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn day(&self) -> &str {
        &self.day
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    /// Interprets the parts as a calendar date.
    ///
    /// Returns `None` when a part is a placeholder or otherwise
    /// non-numeric, and for combinations the calendar rejects (April 31st,
    /// February 29th outside leap years). Two-digit years are taken
    /// literally, so `90` is the year 90.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        let day: u32 = self.day.parse().ok()?;
        let month: u32 = self.month.parse().ok()?;
        let year: i32 = self.year.parse().ok()?;
        NaiveDate::from_ymd_opt(year, month, day)
    }
}

impl fmt::Display for CanonicalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)
    }
}

/// Error returned when a canonical date string does not have three
/// slash-separated parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCanonicalDateError;

impl fmt::Display for ParseCanonicalDateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected a day/month/year string")
    }
}

impl std::error::Error for ParseCanonicalDateError {}

impl FromStr for CanonicalDate {
    type Err = ParseCanonicalDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split('/');
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(day), Some(month), Some(year), None) => {
                Ok(CanonicalDate::new(day, month, year))
            }
            _ => Err(ParseCanonicalDateError),
        }
    }
}
