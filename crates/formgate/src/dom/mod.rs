// File: src/dom/mod.rs
// Purpose: Injected document capability standing in for the browser page

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc::UnboundedReceiver;

pub mod memory;

pub use memory::MemoryDocument;

/// A discrete user action on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FormEvent {
    /// A field's value changed
    Input { field: String, value: String },
    /// The submit control was activated
    Submit,
}

/// Capability trait for everything the engine needs from the page
///
/// Injected rather than depended on directly so the engine runs without a
/// real browser. The in-memory implementation records every call for
/// assertions.
pub trait Document: Send + Sync {
    /// Take the page's event stream
    ///
    /// Single subscription: the first call returns the receiver, every later
    /// call returns `None`.
    fn events(&self) -> Option<UnboundedReceiver<FormEvent>>;

    /// Cancel the native submit action for the current activation
    fn prevent_default(&self);

    /// Render failure messages adjacent to a field
    fn render_errors(&self, field_id: &str, messages: &[String]);

    /// Remove all currently rendered failure messages
    fn clear_errors(&self);

    /// Show a page-level notice (e.g. a generic submission failure)
    fn show_notice(&self, text: &str);
}
