//! Rules: a check plus the policy around it.
//!
//! A rule decides when its check runs (the `min_length` gate), whether a
//! failure counts (the optional condition), and what a failure says (the
//! optional custom message).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::check::{Check, CheckKind, CheckSpec};
use crate::context::EvalContext;
use crate::engine::Outcome;
use crate::error::{CompileError, LoadError};
use crate::field::FieldValue;
use crate::message::MessageTemplate;
use fieldval_rules::min_length;

/// Declarative form of a rule, as hosts configure it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleSpec {
    #[serde(flatten)]
    pub check: CheckSpec,
    /// Values shorter than this skip the check entirely.
    #[serde(default)]
    pub min_length: u32,
    /// Name of a registered condition that must hold for a failure to count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Custom failure message; `&1`/`&2` expand to the check's parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl RuleSpec {
    pub fn new(check: CheckSpec) -> Self {
        RuleSpec {
            check,
            min_length: 0,
            condition: None,
            message: None,
        }
    }

    pub fn compile(&self) -> Result<FieldRule, CompileError> {
        Ok(FieldRule {
            check: self.check.compile()?,
            min_length: self.min_length,
            condition: self.condition.clone(),
            message: self.message.clone().map(MessageTemplate::from),
        })
    }
}

/// A compiled rule bound to one field.
#[derive(Debug, Clone)]
pub struct FieldRule {
    check: Check,
    min_length: u32,
    condition: Option<String>,
    message: Option<MessageTemplate>,
}

impl FieldRule {
    pub fn new(check: Check) -> Self {
        FieldRule {
            check,
            min_length: 0,
            condition: None,
            message: None,
        }
    }

    pub fn with_min_length(mut self, min_length: u32) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<MessageTemplate>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn kind(&self) -> CheckKind {
        self.check.kind()
    }

    pub fn check(&self) -> &Check {
        &self.check
    }

    /// Evaluates this rule against a value.
    ///
    /// Values still shorter than the `min_length` gate are skipped, not
    /// failed. An empty value satisfies the gate and falls through to the
    /// check, which treats absence as out of scope. A failed check whose
    /// condition does not hold is reported as passed.
    pub fn evaluate(&self, value: &FieldValue, ctx: &EvalContext<'_>) -> Outcome {
        if self.kind().min_length_gated() && !min_length(value.as_text(), self.min_length as usize)
        {
            return Outcome::Skipped;
        }
        let evaluation = self.check.evaluate(value, ctx);
        if !evaluation.ok && ctx.condition_holds(self.condition.as_deref()) {
            let template = match &self.message {
                Some(custom) => custom.clone(),
                None => MessageTemplate::from(evaluation.default_message),
            };
            Outcome::Failed {
                message: template.render(&evaluation.message_args),
            }
        } else {
            Outcome::Passed
        }
    }
}

/// A full rule set: field names mapped to the rules configured for them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormSpec {
    pub fields: BTreeMap<String, Vec<RuleSpec>>,
}

impl FormSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn add_rule(&mut self, field: impl Into<String>, rule: RuleSpec) {
        self.fields.entry(field.into()).or_default().push(rule);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::ItemType;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn test_gate_skips_short_values() {
        let rule = FieldRule::new(
            CheckSpec::ItemType {
                item_type: ItemType::Number,
                date_format: None,
            }
            .compile()
            .unwrap(),
        )
        .with_min_length(4);
        let ctx = EvalContext::new();
        assert!(matches!(rule.evaluate(&text("abc"), &ctx), Outcome::Skipped));
        assert!(matches!(
            rule.evaluate(&text("abcd"), &ctx),
            Outcome::Failed { .. }
        ));
    }

    #[test]
    fn test_empty_value_passes_the_gate_and_the_check() {
        let rule = FieldRule::new(
            CheckSpec::ItemType {
                item_type: ItemType::Number,
                date_format: None,
            }
            .compile()
            .unwrap(),
        )
        .with_min_length(4);
        let ctx = EvalContext::new();
        assert!(matches!(rule.evaluate(&text(""), &ctx), Outcome::Passed));
    }

    #[test]
    fn test_gate_never_applies_to_presence() {
        let rule = FieldRule::new(
            CheckSpec::NotEmpty {
                allow_whitespace: true,
            }
            .compile()
            .unwrap(),
        )
        .with_min_length(10);
        let ctx = EvalContext::new();
        assert!(matches!(
            rule.evaluate(&text(""), &ctx),
            Outcome::Failed { .. }
        ));
    }

    #[test]
    fn test_custom_message_replaces_default() {
        let rule = FieldRule::new(
            CheckSpec::CharLength {
                min: Some(5),
                max: None,
            }
            .compile()
            .unwrap(),
        )
        .with_message("at least &1 characters, please");
        let ctx = EvalContext::new();
        match rule.evaluate(&text("abc"), &ctx) {
            Outcome::Failed { message } => {
                assert_eq!(message, "at least 5 characters, please");
            }
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_rule_spec_defaults() {
        let spec = RuleSpec::new(CheckSpec::NotEmpty {
            allow_whitespace: true,
        });
        assert_eq!(spec.min_length, 0);
        assert!(spec.condition.is_none());
        assert!(spec.message.is_none());
    }
}
