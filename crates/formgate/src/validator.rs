// File: src/validator.rs
// Purpose: Run every registered rule against current field values

use crate::form::FormState;
use crate::registry::RuleRegistry;
use crate::result::ValidationResult;

/// Evaluates all registered rules against a form state
///
/// Owns the registry it was built from, so there is no hidden shared rule
/// state. Evaluation is a pure function of the current values: every rule of
/// every field runs in registration order with no short-circuiting, so one
/// attempt surfaces all errors at once.
#[derive(Debug)]
pub struct Validator {
    registry: RuleRegistry,
}

impl Validator {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Produce a fresh result for the given state
    pub fn evaluate(&self, state: &FormState) -> ValidationResult {
        let mut result = ValidationResult::new();

        for field_id in self.registry.field_ids() {
            let value = state.value_of(field_id);
            for rule in self.registry.rules_for(field_id) {
                if !rule.passes(value) {
                    result.record(field_id, rule.failure_message());
                }
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn email_registry() -> RuleRegistry {
        let mut registry = RuleRegistry::new();
        registry
            .register("email", Rule::new("non-empty", |v: &str| !v.is_empty()))
            .unwrap();
        registry
            .register("email", Rule::new("contains @", |v: &str| v.contains('@')))
            .unwrap();
        registry
    }

    #[test]
    fn test_empty_registry_is_always_valid() {
        let validator = Validator::new(RuleRegistry::new());
        let result = validator.evaluate(&FormState::new());
        assert!(result.is_valid());
    }

    #[test]
    fn test_all_failures_surface_in_registration_order() {
        let validator = Validator::new(email_registry());

        let mut state = FormState::new();
        state.set_value("email", "");

        let result = validator.evaluate(&state);
        assert_eq!(
            result.failures_for("email"),
            &["non-empty failed", "contains @ failed"]
        );
    }

    #[test]
    fn test_passing_value_has_no_failures() {
        let validator = Validator::new(email_registry());

        let mut state = FormState::new();
        state.set_value("email", "a@b");

        let result = validator.evaluate(&state);
        assert!(result.is_valid());
        assert!(result.failures_for("email").is_empty());
    }

    #[test]
    fn test_untouched_field_evaluates_as_empty_string() {
        let validator = Validator::new(email_registry());

        // No input ever fired for "email"
        let result = validator.evaluate(&FormState::new());
        assert!(result.has_error("email"));
        assert_eq!(result.failures_for("email").len(), 2);
    }

    #[test]
    fn test_evaluation_does_not_mutate_state() {
        let validator = Validator::new(email_registry());

        let mut state = FormState::new();
        state.set_value("email", "bad");
        let before = state.clone();

        let first = validator.evaluate(&state);
        let second = validator.evaluate(&state);

        assert_eq!(first, second);
        assert_eq!(state.value_of("email"), before.value_of("email"));
    }
}
