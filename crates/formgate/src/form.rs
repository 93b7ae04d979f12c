// File: src/form.rs
// Purpose: Current field values and touched-state of the form

use std::collections::{HashMap, HashSet};

/// Mutable form state: current values plus the set of touched fields
///
/// Mutated on every input event; evaluation only ever reads it. A field that
/// never received input reads as the empty string.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    touched: HashSet<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an input event: update the value and mark the field touched
    pub fn set_value<F, V>(&mut self, field_id: F, value: V)
    where
        F: Into<String>,
        V: Into<String>,
    {
        let field_id = field_id.into();
        self.touched.insert(field_id.clone());
        self.values.insert(field_id, value.into());
    }

    /// Current value of a field, `""` if it never received input
    pub fn value_of(&self, field_id: &str) -> &str {
        self.values.get(field_id).map(String::as_str).unwrap_or("")
    }

    pub fn is_touched(&self, field_id: &str) -> bool {
        self.touched.contains(field_id)
    }

    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }
}
