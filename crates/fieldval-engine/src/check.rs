//! The check catalog: declarative specs and their compiled forms.
//!
//! A `CheckSpec` is what hosts configure (JSON-friendly, all text); a
//! `Check` is the compiled form with patterns and date formats parsed.
//! Compilation is the only step that can fail.

use fieldval_core::{DateFormat, ParsedNumber};
use fieldval_rules::{
    is_alphanumeric, is_blank, is_date, is_digit, is_email, is_empty, is_equal, is_number, is_url,
    matches_pattern, max_check, max_date, max_length, max_number, min_check, min_date, min_length,
    min_number, range_check, range_date, range_length, range_number,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::context::{EvalContext, FieldRef};
use crate::error::CompileError;
use crate::field::FieldValue;

/// The eight rule families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CheckKind {
    NotEmpty,
    ItemType,
    Equal,
    Regex,
    CharLength,
    NumberSize,
    DateOrder,
    TotalChecked,
}

impl CheckKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CheckKind::NotEmpty => "notEmpty",
            CheckKind::ItemType => "itemType",
            CheckKind::Equal => "equal",
            CheckKind::Regex => "regex",
            CheckKind::CharLength => "charLength",
            CheckKind::NumberSize => "numberSize",
            CheckKind::DateOrder => "dateOrder",
            CheckKind::TotalChecked => "totalChecked",
        }
    }

    pub fn all() -> [CheckKind; 8] {
        [
            CheckKind::NotEmpty,
            CheckKind::ItemType,
            CheckKind::Equal,
            CheckKind::Regex,
            CheckKind::CharLength,
            CheckKind::NumberSize,
            CheckKind::DateOrder,
            CheckKind::TotalChecked,
        ]
    }

    /// Whether the `min_length` gate applies. Required-ness and selection
    /// counting always run.
    pub fn min_length_gated(self) -> bool {
        !matches!(self, CheckKind::NotEmpty | CheckKind::TotalChecked)
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Built-in value formats for the `itemType` check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Alphanumeric,
    Number,
    Digit,
    Email,
    Url,
    Date,
}

/// Declarative form of a check, as hosts configure it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "camelCase")]
pub enum CheckSpec {
    #[serde(rename_all = "camelCase")]
    NotEmpty {
        #[serde(default = "default_allow_whitespace")]
        allow_whitespace: bool,
    },
    #[serde(rename_all = "camelCase")]
    ItemType {
        item_type: ItemType,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    Equal { other: String },
    Regex { pattern: String },
    CharLength {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
    NumberSize {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    DateOrder {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_format: Option<String>,
    },
    TotalChecked {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<u32>,
    },
}

fn default_allow_whitespace() -> bool {
    true
}

impl CheckSpec {
    pub fn kind(&self) -> CheckKind {
        match self {
            CheckSpec::NotEmpty { .. } => CheckKind::NotEmpty,
            CheckSpec::ItemType { .. } => CheckKind::ItemType,
            CheckSpec::Equal { .. } => CheckKind::Equal,
            CheckSpec::Regex { .. } => CheckKind::Regex,
            CheckSpec::CharLength { .. } => CheckKind::CharLength,
            CheckSpec::NumberSize { .. } => CheckKind::NumberSize,
            CheckSpec::DateOrder { .. } => CheckKind::DateOrder,
            CheckSpec::TotalChecked { .. } => CheckKind::TotalChecked,
        }
    }

    /// Compiles patterns and format specs into an executable check.
    ///
    /// A user-supplied regex that does not compile is the one
    /// configuration error that propagates.
    pub fn compile(&self) -> Result<Check, CompileError> {
        let check = match self {
            CheckSpec::NotEmpty { allow_whitespace } => Check::NotEmpty {
                allow_whitespace: *allow_whitespace,
            },
            CheckSpec::ItemType {
                item_type,
                date_format,
            } => Check::ItemType {
                item_type: *item_type,
                format: DateFormat::new(date_format.as_deref().unwrap_or("")),
            },
            CheckSpec::Equal { other } => Check::Equal {
                other: other.clone(),
            },
            CheckSpec::Regex { pattern } => Check::Regex {
                pattern: Regex::new(pattern)?,
            },
            CheckSpec::CharLength { min, max } => Check::CharLength {
                min: *min,
                max: *max,
            },
            CheckSpec::NumberSize { min, max } => Check::NumberSize {
                min: min.as_deref().map(FieldRef::parse),
                max: max.as_deref().map(FieldRef::parse),
            },
            CheckSpec::DateOrder {
                min,
                max,
                date_format,
            } => Check::DateOrder {
                min: min.as_deref().map(FieldRef::parse),
                max: max.as_deref().map(FieldRef::parse),
                format: DateFormat::new(date_format.as_deref().unwrap_or("")),
            },
            CheckSpec::TotalChecked { min, max } => Check::TotalChecked {
                min: *min,
                max: *max,
            },
        };
        Ok(check)
    }
}

/// A compiled check, ready to evaluate.
#[derive(Debug, Clone)]
pub enum Check {
    NotEmpty {
        allow_whitespace: bool,
    },
    ItemType {
        item_type: ItemType,
        format: DateFormat,
    },
    Equal {
        other: String,
    },
    Regex {
        pattern: Regex,
    },
    CharLength {
        min: Option<u32>,
        max: Option<u32>,
    },
    NumberSize {
        min: Option<FieldRef>,
        max: Option<FieldRef>,
    },
    DateOrder {
        min: Option<FieldRef>,
        max: Option<FieldRef>,
        format: DateFormat,
    },
    TotalChecked {
        min: Option<u32>,
        max: Option<u32>,
    },
}

/// What one check produced: pass/fail plus the pieces of its message.
#[derive(Debug)]
pub(crate) struct CheckEvaluation {
    pub(crate) ok: bool,
    pub(crate) default_message: &'static str,
    pub(crate) message_args: Vec<String>,
}

impl CheckEvaluation {
    fn new(ok: bool, default_message: &'static str) -> Self {
        CheckEvaluation {
            ok,
            default_message,
            message_args: Vec::new(),
        }
    }

    fn with_args(mut self, message_args: Vec<String>) -> Self {
        self.message_args = message_args;
        self
    }
}

impl Check {
    pub fn kind(&self) -> CheckKind {
        match self {
            Check::NotEmpty { .. } => CheckKind::NotEmpty,
            Check::ItemType { .. } => CheckKind::ItemType,
            Check::Equal { .. } => CheckKind::Equal,
            Check::Regex { .. } => CheckKind::Regex,
            Check::CharLength { .. } => CheckKind::CharLength,
            Check::NumberSize { .. } => CheckKind::NumberSize,
            Check::DateOrder { .. } => CheckKind::DateOrder,
            Check::TotalChecked { .. } => CheckKind::TotalChecked,
        }
    }

    /// Runs the predicate for this check and gathers the message pieces.
    ///
    /// Bound shape follows bound presence: `max` absent means min-only,
    /// `min` absent means max-only, both present means range. Both absent
    /// passes.
    pub(crate) fn evaluate(&self, value: &FieldValue, ctx: &EvalContext<'_>) -> CheckEvaluation {
        match self {
            Check::NotEmpty { allow_whitespace } => {
                let filled = match value {
                    FieldValue::Text(text) => {
                        if *allow_whitespace {
                            !is_empty(text)
                        } else {
                            !is_blank(text)
                        }
                    }
                    FieldValue::Selection(group) => {
                        min_check(ctx.checked_count(group), ParsedNumber::from(1u32), false)
                    }
                };
                CheckEvaluation::new(filled, "value required")
            }
            Check::ItemType { item_type, format } => {
                let text = value.as_text();
                match item_type {
                    ItemType::Alphanumeric => {
                        CheckEvaluation::new(is_alphanumeric(text), "not an alphanumeric value")
                    }
                    ItemType::Number => CheckEvaluation::new(is_number(text), "not a valid number"),
                    ItemType::Digit => {
                        CheckEvaluation::new(is_digit(text), "not a valid digit combination")
                    }
                    ItemType::Email => {
                        CheckEvaluation::new(is_email(text), "not a valid e-mail address")
                    }
                    ItemType::Url => CheckEvaluation::new(is_url(text), "not a valid URL"),
                    ItemType::Date => {
                        CheckEvaluation::new(is_date(text, format), "not a valid date (&1)")
                            .with_args(vec![format.spec().to_string()])
                    }
                }
            }
            Check::Equal { other } => CheckEvaluation::new(
                is_equal(value.as_text(), &ctx.item_value(other)),
                "values do not equal",
            ),
            Check::Regex { pattern } => {
                CheckEvaluation::new(matches_pattern(value.as_text(), pattern), "invalid value")
            }
            Check::CharLength { min, max } => {
                let text = value.as_text();
                match (min, max) {
                    (Some(lo), None) => CheckEvaluation::new(
                        min_length(text, *lo as usize),
                        "value length too short - min. &1",
                    )
                    .with_args(vec![lo.to_string()]),
                    (None, Some(hi)) => CheckEvaluation::new(
                        max_length(text, *hi as usize),
                        "value length too long - max. &1",
                    )
                    .with_args(vec![hi.to_string()]),
                    (Some(lo), Some(hi)) => CheckEvaluation::new(
                        range_length(text, *lo as usize, *hi as usize),
                        "invalid value length - between &1 and &2 only",
                    )
                    .with_args(vec![lo.to_string(), hi.to_string()]),
                    (None, None) => {
                        CheckEvaluation::new(true, "value length too short - min. &1")
                    }
                }
            }
            Check::NumberSize { min, max } => {
                let number = ParsedNumber::parse(value.as_text());
                match (min, max) {
                    (Some(lo), None) => {
                        let lo = ParsedNumber::parse(&lo.resolve(ctx));
                        CheckEvaluation::new(
                            min_number(number, lo),
                            "number too small - min. &1",
                        )
                        .with_args(vec![lo.to_string()])
                    }
                    (None, Some(hi)) => {
                        let hi = ParsedNumber::parse(&hi.resolve(ctx));
                        CheckEvaluation::new(
                            max_number(number, hi),
                            "number too large - max. &1",
                        )
                        .with_args(vec![hi.to_string()])
                    }
                    (Some(lo), Some(hi)) => {
                        let lo = ParsedNumber::parse(&lo.resolve(ctx));
                        let hi = ParsedNumber::parse(&hi.resolve(ctx));
                        CheckEvaluation::new(
                            range_number(number, lo, hi),
                            "invalid number size - between &1 and &2 only",
                        )
                        .with_args(vec![lo.to_string(), hi.to_string()])
                    }
                    (None, None) => CheckEvaluation::new(true, "number too small - min. &1"),
                }
            }
            Check::DateOrder { min, max, format } => {
                let text = value.as_text();
                match (min, max) {
                    (Some(lo), None) => {
                        let lo = lo.resolve(ctx);
                        CheckEvaluation::new(
                            min_date(text, &lo, format),
                            "this date should lie after &1",
                        )
                        .with_args(vec![lo])
                    }
                    (None, Some(hi)) => {
                        let hi = hi.resolve(ctx);
                        CheckEvaluation::new(
                            max_date(text, &hi, format),
                            "this date should lie before &1",
                        )
                        .with_args(vec![hi])
                    }
                    (Some(lo), Some(hi)) => {
                        let lo = lo.resolve(ctx);
                        let hi = hi.resolve(ctx);
                        CheckEvaluation::new(
                            range_date(text, &lo, &hi, format),
                            "this date should lie between &1 and &2",
                        )
                        .with_args(vec![lo, hi])
                    }
                    (None, None) => CheckEvaluation::new(true, "this date should lie after &1"),
                }
            }
            Check::TotalChecked { min, max } => {
                let FieldValue::Selection(group) = value else {
                    return CheckEvaluation::new(true, "please select at least &1 choice(s)");
                };
                let checked = ctx.checked_count(group);
                match (min, max) {
                    (Some(lo), None) => CheckEvaluation::new(
                        min_check(checked, ParsedNumber::from(*lo), true),
                        "please select at least &1 choice(s)",
                    )
                    .with_args(vec![lo.to_string()]),
                    (None, Some(hi)) => CheckEvaluation::new(
                        max_check(checked, ParsedNumber::from(*hi)),
                        "please select no more than &1 choice(s)",
                    )
                    .with_args(vec![hi.to_string()]),
                    (Some(lo), Some(hi)) => CheckEvaluation::new(
                        range_check(checked, ParsedNumber::from(*lo), ParsedNumber::from(*hi)),
                        "please select between &1 and &2 choice(s)",
                    )
                    .with_args(vec![lo.to_string(), hi.to_string()]),
                    (None, None) => {
                        CheckEvaluation::new(true, "please select at least &1 choice(s)")
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds_round_trip_between_spec_and_compiled_form() {
        let specs = [
            CheckSpec::NotEmpty {
                allow_whitespace: true,
            },
            CheckSpec::Regex {
                pattern: r"^\d+$".to_string(),
            },
            CheckSpec::TotalChecked {
                min: Some(1),
                max: None,
            },
        ];
        for spec in &specs {
            let check = spec.compile().unwrap();
            assert_eq!(check.kind(), spec.kind());
        }
    }

    #[test]
    fn test_invalid_pattern_fails_compilation() {
        let spec = CheckSpec::Regex {
            pattern: "(".to_string(),
        };
        assert!(matches!(
            spec.compile(),
            Err(CompileError::Pattern(_))
        ));
    }

    #[test]
    fn test_gate_applies_to_everything_but_presence_checks() {
        assert!(!CheckKind::NotEmpty.min_length_gated());
        assert!(!CheckKind::TotalChecked.min_length_gated());
        assert!(CheckKind::ItemType.min_length_gated());
        assert!(CheckKind::NumberSize.min_length_gated());
    }
}
