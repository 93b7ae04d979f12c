// File: src/error.rs
// Purpose: Typed errors for registration and schema loading

use thiserror::Error;

/// Returned when the same rule name is registered twice for one field
///
/// Fatal only to the offending `register` call; earlier registrations stay
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("rule `{rule}` is already registered for field `{field}`")]
pub struct DuplicateRuleError {
    pub field: String,
    pub rule: String,
}

/// Errors raised while turning a form schema into a rule registry
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The schema JSON did not parse (includes unrecognized rule names)
    #[error("invalid form schema: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `pattern` rule carried a regex that does not compile
    #[error("invalid pattern `{pattern}` for field `{field}`")]
    InvalidPattern { field: String, pattern: String },

    #[error(transparent)]
    DuplicateRule(#[from] DuplicateRuleError),
}
