// File: src/sink/mod.rs
// Purpose: Abstract destination for a validated submission

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

pub mod memory;

pub use memory::MemorySink;

/// Trait for submission destinations
///
/// Represents the eventual network or native form action; the engine never
/// assumes a transport. A failed submission is surfaced to the user as a
/// generic notice and may be retried by the next activation.
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Forward the validated field values
    async fn submit(&self, values: &HashMap<String, String>) -> Result<()>;

    /// Get sink backend name
    fn name(&self) -> &'static str;
}
