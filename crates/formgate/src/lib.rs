//! # formgate
//!
//! A client-side form validation engine: named rules registered per field, a
//! validator that runs every rule on every submit attempt, and a submission
//! controller that intercepts the submit activation and either blocks it
//! (rendering errors) or forwards the values to a submission sink exactly
//! once.
//!
//! The page and the transport are injected capabilities (`Document`,
//! `SubmissionSink`), so the engine runs and tests without a browser.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use formgate::{
//!     FormSchema, MemoryDocument, MemorySink, SubmissionController, Validator,
//! };
//!
//! # async fn wire(schema_json: &str) -> anyhow::Result<()> {
//! let schema = FormSchema::from_json(schema_json)?;
//! let validator = Validator::new(schema.build_registry()?);
//!
//! let dom = MemoryDocument::new();
//! let sink = MemorySink::new();
//! let controller = Arc::new(SubmissionController::new(validator, dom.clone(), sink));
//!
//! tokio::spawn(controller.run());
//! # Ok(())
//! # }
//! ```

pub mod controller;
pub mod dom;
pub mod error;
pub mod form;
pub mod registry;
pub mod result;
pub mod rule;
pub mod schema;
pub mod sink;
pub mod validator;

// Re-export the validation predicates for custom rules
pub use formgate_rules as rules;

pub use controller::{SubmissionController, SubmitOutcome, SubmitPhase, SUBMIT_FAILED_NOTICE};
pub use dom::{Document, FormEvent, MemoryDocument};
pub use error::{DuplicateRuleError, SchemaError};
pub use form::FormState;
pub use registry::RuleRegistry;
pub use result::ValidationResult;
pub use rule::Rule;
pub use schema::{FieldSchema, FormSchema, RuleSpec};
pub use sink::{MemorySink, SubmissionSink};
pub use validator::Validator;
