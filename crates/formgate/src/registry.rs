// File: src/registry.rs
// Purpose: Ordered per-field rule registration

use std::collections::HashMap;

use crate::error::DuplicateRuleError;
use crate::rule::Rule;

/// Holds the ordered rule list for every registered field
///
/// Fields are remembered in first-registration order so evaluation and error
/// rendering are deterministic. Unknown fields are not an error: `rules_for`
/// returns an empty slice for them.
#[derive(Debug, Default)]
pub struct RuleRegistry {
    rules: HashMap<String, Vec<Rule>>,
    field_order: Vec<String>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a rule to a field's ordered list
    ///
    /// Registering the same rule name twice for one field fails with
    /// `DuplicateRuleError`; rules registered earlier are unaffected.
    pub fn register<F>(&mut self, field_id: F, rule: Rule) -> Result<(), DuplicateRuleError>
    where
        F: Into<String>,
    {
        let field_id = field_id.into();
        let field_rules = self.rules.entry(field_id.clone()).or_default();

        if field_rules.iter().any(|r| r.name() == rule.name()) {
            return Err(DuplicateRuleError {
                field: field_id,
                rule: rule.name().to_string(),
            });
        }

        if field_rules.is_empty() {
            self.field_order.push(field_id);
        }
        field_rules.push(rule);
        Ok(())
    }

    /// Ordered rules for a field, empty for unknown fields
    pub fn rules_for(&self, field_id: &str) -> &[Rule] {
        self.rules.get(field_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Field ids in first-registration order
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.field_order.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.field_order.is_empty()
    }
}
