// File: src/schema.rs
// Purpose: Declarative JSON form schema compiled into a rule registry

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;
use crate::registry::RuleRegistry;
use crate::rule::Rule;

/// Declarative description of a form's validation rules
///
/// The shape a page would carry in a `data-validate` attribute: an ordered
/// list of fields, each with an ordered list of rule specs.
///
/// ```json
/// {
///   "fields": [
///     { "id": "email", "rules": [ { "rule": "required" }, { "rule": "email" } ] },
///     { "id": "quantity", "rules": [ { "rule": "range", "min": 1, "max": 100 } ] }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FieldSchema>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldSchema {
    pub id: String,
    pub rules: Vec<RuleSpec>,
}

/// One rule in a field's schema, with an optional message override
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum RuleSpec {
    Required {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Email {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MinLength {
        min: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    MaxLength {
        max: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Contains {
        substring: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Range {
        min: f64,
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

impl FormSchema {
    /// Parse a schema from JSON
    ///
    /// Unrecognized rule names are rejected here, not at evaluation time.
    pub fn from_json(json: &str) -> Result<Self, SchemaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Compile the schema into a populated rule registry
    pub fn build_registry(&self) -> Result<RuleRegistry, SchemaError> {
        let mut registry = RuleRegistry::new();
        for field in &self.fields {
            for spec in &field.rules {
                let rule = spec.to_rule(&field.id)?;
                registry.register(field.id.clone(), rule)?;
            }
        }
        Ok(registry)
    }
}

impl RuleSpec {
    fn to_rule(&self, field_id: &str) -> Result<Rule, SchemaError> {
        let rule = match self {
            RuleSpec::Required { message } => Rule::with_message(
                "required",
                message.clone().unwrap_or_else(|| "This field is required".to_string()),
                formgate_rules::is_non_empty,
            ),
            RuleSpec::Email { message } => Rule::with_message(
                "email",
                message.clone().unwrap_or_else(|| "Invalid email format".to_string()),
                formgate_rules::is_valid_email,
            ),
            RuleSpec::MinLength { min, message } => {
                let min = *min;
                Rule::with_message(
                    "min_length",
                    message
                        .clone()
                        .unwrap_or_else(|| format!("Must be at least {} characters", min)),
                    move |value| formgate_rules::validate_min_length(value, min).is_ok(),
                )
            }
            RuleSpec::MaxLength { max, message } => {
                let max = *max;
                Rule::with_message(
                    "max_length",
                    message
                        .clone()
                        .unwrap_or_else(|| format!("Must be at most {} characters", max)),
                    move |value| formgate_rules::validate_max_length(value, max).is_ok(),
                )
            }
            RuleSpec::Contains { substring, message } => {
                let substring = substring.clone();
                Rule::with_message(
                    "contains",
                    message
                        .clone()
                        .unwrap_or_else(|| format!("Must contain `{}`", substring)),
                    move |value| formgate_rules::contains(value, &substring),
                )
            }
            RuleSpec::Pattern { pattern, message } => {
                // Reject a broken pattern at build time instead of silently
                // failing every value at evaluation time.
                if regex::Regex::new(pattern).is_err() {
                    return Err(SchemaError::InvalidPattern {
                        field: field_id.to_string(),
                        pattern: pattern.clone(),
                    });
                }
                let pattern = pattern.clone();
                Rule::with_message(
                    "pattern",
                    message.clone().unwrap_or_else(|| "Invalid format".to_string()),
                    move |value| formgate_rules::matches_pattern(value, &pattern),
                )
            }
            RuleSpec::Range { min, max, message } => {
                let (min, max) = (*min, *max);
                Rule::with_message(
                    "range",
                    message
                        .clone()
                        .unwrap_or_else(|| format!("Must be between {} and {}", min, max)),
                    move |value| formgate_rules::validate_range(value, min, max).is_ok(),
                )
            }
        };
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormState;
    use crate::validator::Validator;

    const ORDER_SCHEMA: &str = r#"{
        "fields": [
            {
                "id": "email",
                "rules": [
                    { "rule": "required", "message": "Email is required" },
                    { "rule": "email" }
                ]
            },
            {
                "id": "quantity",
                "rules": [ { "rule": "range", "min": 1, "max": 100 } ]
            }
        ]
    }"#;

    #[test]
    fn test_schema_round_trips_through_json() {
        let schema = FormSchema::from_json(ORDER_SCHEMA).unwrap();
        let json = serde_json::to_string(&schema).unwrap();
        let again = FormSchema::from_json(&json).unwrap();
        assert_eq!(again.fields.len(), 2);
        assert_eq!(again.fields[0].id, "email");
    }

    #[test]
    fn test_built_registry_validates() {
        let schema = FormSchema::from_json(ORDER_SCHEMA).unwrap();
        let validator = Validator::new(schema.build_registry().unwrap());

        let mut state = FormState::new();
        state.set_value("email", "not-an-email");
        state.set_value("quantity", "500");

        let result = validator.evaluate(&state);
        assert_eq!(result.failures_for("email"), &["Invalid email format"]);
        assert_eq!(result.failures_for("quantity"), &["Must be between 1 and 100"]);

        state.set_value("email", "shop@example.com");
        state.set_value("quantity", "3");
        assert!(validator.evaluate(&state).is_valid());
    }

    #[test]
    fn test_message_override() {
        let schema = FormSchema::from_json(ORDER_SCHEMA).unwrap();
        let validator = Validator::new(schema.build_registry().unwrap());

        let result = validator.evaluate(&FormState::new());
        assert_eq!(
            result.failures_for("email"),
            &["Email is required", "Invalid email format"]
        );
    }

    #[test]
    fn test_unknown_rule_rejected_at_parse() {
        let json = r#"{ "fields": [ { "id": "x", "rules": [ { "rule": "telepathy" } ] } ] }"#;
        let err = FormSchema::from_json(json).unwrap_err();
        assert!(matches!(err, SchemaError::Parse(_)));
    }

    #[test]
    fn test_invalid_pattern_rejected_at_build() {
        let json = r#"{ "fields": [ { "id": "x", "rules": [ { "rule": "pattern", "pattern": "[" } ] } ] }"#;
        let schema = FormSchema::from_json(json).unwrap();
        let err = schema.build_registry().unwrap_err();
        assert!(matches!(err, SchemaError::InvalidPattern { .. }));
    }

    #[test]
    fn test_duplicate_rule_in_schema_rejected() {
        let json = r#"{
            "fields": [
                { "id": "x", "rules": [ { "rule": "required" }, { "rule": "required" } ] }
            ]
        }"#;
        let schema = FormSchema::from_json(json).unwrap();
        let err = schema.build_registry().unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateRule(_)));
    }
}
