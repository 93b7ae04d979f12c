// File: src/rule.rs
// Purpose: Named validation rules over field values

/// A named predicate that a field's value must satisfy
///
/// The predicate is a pure function of the value. An optional message
/// overrides the default failure text (`"<name> failed"`).
pub struct Rule {
    name: String,
    message: Option<String>,
    check: Box<dyn Fn(&str) -> bool + Send + Sync>,
}

impl Rule {
    /// Create a rule with the default failure message
    pub fn new<N, F>(name: N, check: F) -> Self
    where
        N: Into<String>,
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: None,
            check: Box::new(check),
        }
    }

    /// Create a rule with an explicit failure message
    pub fn with_message<N, M, F>(name: N, message: M, check: F) -> Self
    where
        N: Into<String>,
        M: Into<String>,
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            message: Some(message.into()),
            check: Box::new(check),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the predicate against a value
    pub fn passes(&self, value: &str) -> bool {
        (self.check)(value)
    }

    /// Message surfaced to the user when the rule fails
    pub fn failure_message(&self) -> String {
        match &self.message {
            Some(message) => message.clone(),
            None => format!("{} failed", self.name),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}
