//! Field values and accumulated validation state.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::check::CheckKind;
use crate::engine::Outcome;

/// The current value a host supplies for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A text-ish input's value.
    Text(String),
    /// A selection group, identified by the reference the checked-count
    /// source understands.
    Selection(String),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn selection(group: impl Into<String>) -> Self {
        FieldValue::Selection(group.into())
    }

    /// The text content; selection groups have none, so text checks pass
    /// vacuously against them.
    pub(crate) fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Selection(_) => "",
        }
    }
}

/// Per-field record of the latest result of each rule kind.
///
/// Skipped evaluations leave the previous record untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldState {
    results: BTreeMap<CheckKind, bool>,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, kind: CheckKind, passed: bool) {
        self.results.insert(kind, passed);
    }

    pub fn apply(&mut self, kind: CheckKind, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.record(kind, true),
            Outcome::Failed { .. } => self.record(kind, false),
            Outcome::Skipped => {}
        }
    }

    /// Latest result for one rule kind, when it has run.
    pub fn result(&self, kind: CheckKind) -> Option<bool> {
        self.results.get(&kind).copied()
    }

    /// Logical AND of everything recorded; an untouched field is valid.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|&passed| passed)
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }
}

/// Validation state across a whole form, keyed by field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    fields: BTreeMap<String, FieldState>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// State for `field`, created on first use.
    pub fn field_mut(&mut self, field: impl Into<String>) -> &mut FieldState {
        self.fields.entry(field.into()).or_default()
    }

    pub fn field(&self, field: &str) -> Option<&FieldState> {
        self.fields.get(field)
    }

    /// Drops a field's state, for when its validation is torn down.
    pub fn remove_field(&mut self, field: &str) -> Option<FieldState> {
        self.fields.remove(field)
    }

    pub fn is_valid(&self) -> bool {
        self.fields.values().all(FieldState::is_valid)
    }

    /// Fields with at least one failing rule, in field order.
    pub fn invalid_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|(_, state)| !state.is_valid())
            .map(|(field, _)| field.as_str())
            .collect()
    }

    /// The first invalid field, which a host typically focuses.
    pub fn first_invalid(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, state)| !state.is_valid())
            .map(|(field, _)| field.as_str())
    }

    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untouched_state_is_valid() {
        assert!(FieldState::new().is_valid());
        assert!(FormState::new().is_valid());
    }

    #[test]
    fn test_one_failing_kind_invalidates_the_field() {
        let mut state = FieldState::new();
        state.record(CheckKind::NotEmpty, true);
        state.record(CheckKind::ItemType, false);
        assert!(!state.is_valid());
        assert_eq!(state.result(CheckKind::ItemType), Some(false));

        state.record(CheckKind::ItemType, true);
        assert!(state.is_valid());
    }

    #[test]
    fn test_skipped_outcomes_do_not_disturb_the_record() {
        let mut state = FieldState::new();
        state.record(CheckKind::CharLength, false);
        state.apply(CheckKind::CharLength, &Outcome::Skipped);
        assert_eq!(state.result(CheckKind::CharLength), Some(false));
    }

    #[test]
    fn test_form_state_tracks_first_invalid_field() {
        let mut form = FormState::new();
        form.field_mut("email").record(CheckKind::ItemType, false);
        form.field_mut("nickname").record(CheckKind::NotEmpty, true);
        assert!(!form.is_valid());
        assert_eq!(form.first_invalid(), Some("email"));
        assert_eq!(form.invalid_fields(), vec!["email"]);

        form.remove_field("email");
        assert!(form.is_valid());
    }
}
