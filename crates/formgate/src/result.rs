// File: src/result.rs
// Purpose: Aggregated outcome of one evaluation attempt

use serde::Serialize;
use std::collections::HashMap;

/// Failure messages per field for a single evaluation attempt
///
/// Only failing fields appear in the map; within a field the messages keep
/// rule-registration order. Serializable so a host can hand the outcome to a
/// renderer as JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    failures: HashMap<String, Vec<String>>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rule failure for a field
    pub fn record<F, M>(&mut self, field_id: F, message: M)
    where
        F: Into<String>,
        M: Into<String>,
    {
        self.failures
            .entry(field_id.into())
            .or_default()
            .push(message.into());
    }

    /// Overall validity: true iff no field has a failure
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn has_error(&self, field_id: &str) -> bool {
        self.failures.contains_key(field_id)
    }

    /// Ordered failure messages for a field, empty if the field is valid
    pub fn failures_for(&self, field_id: &str) -> &[String] {
        self.failures
            .get(field_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of fields with at least one failure
    pub fn failing_field_count(&self) -> usize {
        self.failures.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();
        assert!(result.is_valid());
        assert!(!result.has_error("email"));
        assert!(result.failures_for("email").is_empty());
    }

    #[test]
    fn test_failures_keep_insertion_order() {
        let mut result = ValidationResult::new();
        result.record("email", "non-empty failed");
        result.record("email", "contains @ failed");

        assert!(!result.is_valid());
        assert_eq!(
            result.failures_for("email"),
            &["non-empty failed", "contains @ failed"]
        );
    }

    #[test]
    fn test_serializes_as_field_map() {
        let mut result = ValidationResult::new();
        result.record("email", "Invalid email format");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "failures": { "email": ["Invalid email format"] } })
        );
    }
}
