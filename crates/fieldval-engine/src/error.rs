use thiserror::Error;

/// Error building a rule from its declarative form.
///
/// Surfaces when rules are registered, never during user input.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Error loading a form specification.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed rule configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Compile(#[from] CompileError),
}
