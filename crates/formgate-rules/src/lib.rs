//! Formgate Validation Core
//!
//! Pure validation predicates used by the formgate engine's builtin rule set.
//! Every function here is a pure function of its input value, so the same
//! checks can run against a form field, a test fixture, or a raw string.

pub mod email;
pub mod numeric;
pub mod string;

// Re-export all validators
pub use email::*;
pub use numeric::*;
pub use string::*;
