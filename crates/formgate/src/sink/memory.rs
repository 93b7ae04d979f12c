// File: src/sink/memory.rs
// Purpose: In-memory submission sink

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::sink::SubmissionSink;

/// In-memory submission sink
///
/// Records every accepted submission. Useful in tests and for embedding the
/// engine before a real transport exists.
#[derive(Clone)]
pub struct MemorySink {
    submissions: Arc<RwLock<Vec<HashMap<String, String>>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            submissions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Number of submissions accepted so far
    pub async fn count(&self) -> usize {
        self.submissions.read().await.len()
    }

    /// All accepted submissions in arrival order
    pub async fn submissions(&self) -> Vec<HashMap<String, String>> {
        self.submissions.read().await.clone()
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubmissionSink for MemorySink {
    async fn submit(&self, values: &HashMap<String, String>) -> Result<()> {
        let mut submissions = self.submissions.write().await;
        submissions.push(values.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
