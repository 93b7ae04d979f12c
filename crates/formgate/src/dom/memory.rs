// File: src/dom/memory.rs
// Purpose: In-memory document for tests and embedding without a browser

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::dom::{Document, FormEvent};

/// In-memory document capability
///
/// Events are fired through `fire`, and every call the engine makes against
/// the page is recorded so tests can assert on rendered errors, notices, and
/// prevented submissions. Cloning yields another handle to the same page.
#[derive(Clone)]
pub struct MemoryDocument {
    inner: Arc<Inner>,
}

struct Inner {
    sender: RwLock<Option<UnboundedSender<FormEvent>>>,
    receiver: Mutex<Option<UnboundedReceiver<FormEvent>>>,
    prevented: AtomicUsize,
    errors: RwLock<HashMap<String, Vec<String>>>,
    notices: RwLock<Vec<String>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            inner: Arc::new(Inner {
                sender: RwLock::new(Some(sender)),
                receiver: Mutex::new(Some(receiver)),
                prevented: AtomicUsize::new(0),
                errors: RwLock::new(HashMap::new()),
                notices: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Fire a user action into the event stream
    ///
    /// Events fired after `close` are dropped, matching a page that is no
    /// longer listening.
    pub fn fire(&self, event: FormEvent) {
        if let Some(sender) = self.inner.sender.read().unwrap().as_ref() {
            let _ = sender.send(event);
        }
    }

    /// Close the event stream, modelling page unload
    pub fn close(&self) {
        self.inner.sender.write().unwrap().take();
    }

    /// How many times the native submit action was cancelled
    pub fn prevented_count(&self) -> usize {
        self.inner.prevented.load(Ordering::SeqCst)
    }

    /// Currently rendered failure messages for a field
    pub fn rendered_errors(&self, field_id: &str) -> Vec<String> {
        self.inner
            .errors
            .read()
            .unwrap()
            .get(field_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of fields with rendered failure messages
    pub fn rendered_field_count(&self) -> usize {
        self.inner.errors.read().unwrap().len()
    }

    /// Page-level notices shown so far
    pub fn notices(&self) -> Vec<String> {
        self.inner.notices.read().unwrap().clone()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn events(&self) -> Option<UnboundedReceiver<FormEvent>> {
        self.inner.receiver.lock().unwrap().take()
    }

    fn prevent_default(&self) {
        self.inner.prevented.fetch_add(1, Ordering::SeqCst);
    }

    fn render_errors(&self, field_id: &str, messages: &[String]) {
        self.inner
            .errors
            .write()
            .unwrap()
            .insert(field_id.to_string(), messages.to_vec());
    }

    fn clear_errors(&self) {
        self.inner.errors.write().unwrap().clear();
    }

    fn show_notice(&self, text: &str) {
        self.inner.notices.write().unwrap().push(text.to_string());
    }
}
