//! Host collaborators consulted during evaluation.
//!
//! All three are optional. Evaluation fails open: an absent collaborator
//! or an unresolvable reference makes the affected constraint pass rather
//! than raise.

use std::collections::{BTreeMap, HashMap};

/// Supplies the current value of another field, for cross-field rules.
pub trait ValueResolver {
    /// The value of the field named `item`, or `None` when unknown.
    fn item_value(&self, item: &str) -> Option<String>;
}

impl ValueResolver for BTreeMap<String, String> {
    fn item_value(&self, item: &str) -> Option<String> {
        self.get(item).cloned()
    }
}

/// Counts the currently selected members of a selection group.
pub trait CheckedCountSource {
    fn checked_count(&self, group: &str) -> u32;
}

impl CheckedCountSource for BTreeMap<String, u32> {
    fn checked_count(&self, group: &str) -> u32 {
        self.get(group).copied().unwrap_or(0)
    }
}

type ConditionFn = Box<dyn Fn() -> bool + Send + Sync>;

/// Named boolean predicates for conditional rules.
///
/// A rule referring to a name that was never registered counts as
/// unconditional.
#[derive(Default)]
pub struct ConditionSet {
    conditions: HashMap<String, ConditionFn>,
}

impl ConditionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        condition: impl Fn() -> bool + Send + Sync + 'static,
    ) {
        self.conditions.insert(name.into(), Box::new(condition));
    }

    /// Evaluates the named predicate; `None` when it is not registered.
    pub fn holds(&self, name: &str) -> Option<bool> {
        self.conditions.get(name).map(|condition| condition())
    }
}

/// A configured bound: either a literal value or a `#`-prefixed reference
/// to another field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRef {
    Literal(String),
    Item(String),
}

impl FieldRef {
    /// `#NAME` refers to the field `NAME`; anything else is a literal.
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('#') {
            Some(item) => FieldRef::Item(item.to_string()),
            None => FieldRef::Literal(raw.to_string()),
        }
    }

    /// The bound's current text, resolving references through the context.
    /// An unresolvable reference is the empty string.
    pub fn resolve(&self, ctx: &EvalContext<'_>) -> String {
        match self {
            FieldRef::Literal(value) => value.clone(),
            FieldRef::Item(item) => ctx.item_value(item),
        }
    }
}

/// References to the host collaborators, passed to every evaluation.
#[derive(Clone, Copy, Default)]
pub struct EvalContext<'a> {
    resolver: Option<&'a dyn ValueResolver>,
    counts: Option<&'a dyn CheckedCountSource>,
    conditions: Option<&'a ConditionSet>,
}

impl<'a> EvalContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: &'a dyn ValueResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn with_counts(mut self, counts: &'a dyn CheckedCountSource) -> Self {
        self.counts = Some(counts);
        self
    }

    pub fn with_conditions(mut self, conditions: &'a ConditionSet) -> Self {
        self.conditions = Some(conditions);
        self
    }

    pub(crate) fn item_value(&self, item: &str) -> String {
        self.resolver
            .and_then(|resolver| resolver.item_value(item))
            .unwrap_or_default()
    }

    pub(crate) fn checked_count(&self, group: &str) -> u32 {
        self.counts.map_or(0, |counts| counts.checked_count(group))
    }

    pub(crate) fn condition_holds(&self, condition: Option<&str>) -> bool {
        let Some(name) = condition else {
            return true;
        };
        self.conditions
            .and_then(|set| set.holds(name))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ref_parses_the_reserved_prefix() {
        assert_eq!(
            FieldRef::parse("#salaryCap"),
            FieldRef::Item("salaryCap".to_string())
        );
        assert_eq!(
            FieldRef::parse("26/07/1990"),
            FieldRef::Literal("26/07/1990".to_string())
        );
    }

    #[test]
    fn test_absent_collaborators_resolve_to_nothing() {
        let ctx = EvalContext::new();
        assert_eq!(ctx.item_value("salaryCap"), "");
        assert_eq!(ctx.checked_count("toppings"), 0);
        assert!(ctx.condition_holds(Some("unregistered")));
        assert!(ctx.condition_holds(None));
    }

    #[test]
    fn test_conditions_gate_by_name() {
        let mut conditions = ConditionSet::new();
        conditions.register("always_off", || false);
        let ctx = EvalContext::new().with_conditions(&conditions);
        assert!(!ctx.condition_holds(Some("always_off")));
        assert!(ctx.condition_holds(Some("unknown")));
    }
}
