//! The rule engine: compiled rules keyed by field, evaluated on demand.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::check::CheckKind;
use crate::context::EvalContext;
use crate::error::{CompileError, LoadError};
use crate::field::{FieldState, FieldValue};
use crate::rule::{FieldRule, FormSpec};

/// What a single rule produced for a value.
///
/// `Skipped` means the rule never ran because the value had not reached
/// the rule's `min_length` gate yet. A skipped rule leaves any previously
/// recorded result untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "camelCase")]
pub enum Outcome {
    Passed,
    Failed { message: String },
    Skipped,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed { .. })
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, Outcome::Skipped)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// One rule's outcome, tagged with the check that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    pub kind: CheckKind,
    #[serde(flatten)]
    pub outcome: Outcome,
}

/// Everything the engine found for one field in one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldReport {
    pub field: String,
    pub outcomes: Vec<CheckOutcome>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        !self.outcomes.iter().any(|o| o.outcome.is_failed())
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.outcome.is_failed())
    }

    /// Folds this report into accumulated per-field state.
    pub fn record_into(&self, state: &mut FieldState) {
        for outcome in &self.outcomes {
            state.apply(outcome.kind, &outcome.outcome);
        }
    }
}

/// Compiled rules for a whole form, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct FieldEngine {
    rules_by_field: BTreeMap<String, Vec<FieldRule>>,
}

impl FieldEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles every rule in a declarative spec.
    pub fn from_spec(spec: &FormSpec) -> Result<Self, CompileError> {
        let mut engine = FieldEngine::new();
        for (field, rules) in &spec.fields {
            for rule in rules {
                engine.add_rule(field.clone(), rule.compile()?);
            }
        }
        Ok(engine)
    }

    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let spec = FormSpec::from_json(json)?;
        Ok(Self::from_spec(&spec)?)
    }

    pub fn add_rule(&mut self, field: impl Into<String>, rule: FieldRule) {
        self.rules_by_field.entry(field.into()).or_default().push(rule);
    }

    pub fn rules_for_field(&self, field: &str) -> &[FieldRule] {
        self.rules_by_field
            .get(field)
            .map_or(&[], Vec::as_slice)
    }

    pub fn remove_field(&mut self, field: &str) -> Option<Vec<FieldRule>> {
        self.rules_by_field.remove(field)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.rules_by_field.keys().map(String::as_str)
    }

    /// Runs every rule bound to `field` against a value.
    pub fn evaluate_field(
        &self,
        field: &str,
        value: &FieldValue,
        ctx: &EvalContext<'_>,
    ) -> FieldReport {
        let outcomes = self
            .rules_for_field(field)
            .iter()
            .map(|rule| {
                let outcome = rule.evaluate(value, ctx);
                tracing::debug!(
                    field,
                    check = rule.kind().as_str(),
                    failed = outcome.is_failed(),
                    "rule evaluated"
                );
                CheckOutcome {
                    kind: rule.kind(),
                    outcome,
                }
            })
            .collect();
        FieldReport {
            field: field.to_string(),
            outcomes,
        }
    }

    /// Runs every configured field that has a supplied value.
    ///
    /// Fields with rules but no entry in `values` are left out of the
    /// result entirely, matching the per-field entry points: the engine
    /// only speaks about values it was shown.
    pub fn evaluate_all(
        &self,
        values: &BTreeMap<String, FieldValue>,
        ctx: &EvalContext<'_>,
    ) -> Vec<FieldReport> {
        self.rules_by_field
            .keys()
            .filter_map(|field| {
                values
                    .get(field)
                    .map(|value| self.evaluate_field(field, value, ctx))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckSpec;

    fn length_rule(min: u32) -> FieldRule {
        CheckSpec::CharLength {
            min: Some(min),
            max: None,
        }
        .compile()
        .map(FieldRule::new)
        .unwrap()
    }

    #[test]
    fn test_unknown_field_has_no_rules() {
        let engine = FieldEngine::new();
        assert!(engine.rules_for_field("nickname").is_empty());
    }

    #[test]
    fn test_report_tracks_per_check_outcomes() {
        let mut engine = FieldEngine::new();
        engine.add_rule("nickname", length_rule(4));
        let report =
            engine.evaluate_field("nickname", &FieldValue::text("abc"), &EvalContext::new());
        assert!(!report.is_valid());
        assert_eq!(report.failures().count(), 1);
        assert_eq!(report.outcomes[0].kind, CheckKind::CharLength);
    }

    #[test]
    fn test_evaluate_all_skips_unsupplied_fields() {
        let mut engine = FieldEngine::new();
        engine.add_rule("nickname", length_rule(4));
        engine.add_rule("motto", length_rule(4));
        let mut values = BTreeMap::new();
        values.insert("nickname".to_string(), FieldValue::text("abcdef"));
        let reports = engine.evaluate_all(&values, &EvalContext::new());
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].field, "nickname");
        assert!(reports[0].is_valid());
    }

    #[test]
    fn test_removed_field_is_forgotten() {
        let mut engine = FieldEngine::new();
        engine.add_rule("nickname", length_rule(4));
        assert!(engine.remove_field("nickname").is_some());
        assert!(engine.rules_for_field("nickname").is_empty());
        assert!(engine.remove_field("nickname").is_none());
    }
}
