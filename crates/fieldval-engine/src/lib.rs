mod check;
mod context;
mod engine;
mod error;
mod field;
mod message;
mod rule;

pub use check::{Check, CheckKind, CheckSpec, ItemType};
pub use context::{CheckedCountSource, ConditionSet, EvalContext, FieldRef, ValueResolver};
pub use engine::{CheckOutcome, FieldEngine, FieldReport, Outcome};
pub use error::{CompileError, LoadError};
pub use field::{FieldState, FieldValue, FormState};
pub use message::MessageTemplate;
pub use rule::{FieldRule, FormSpec, RuleSpec};

pub use fieldval_core::DateFormat;
