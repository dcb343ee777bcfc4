//! In-memory capture adapter for testing.

use std::sync::{Arc, RwLock};

use linesink_core::{
    error::{SinkError, SinkResult},
    ports::Output,
};

/// In-memory sink that records every line for later inspection.
///
/// Clones share the same buffer, so a test can keep one handle and hand
/// another to the code under test.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutput {
    inner: Arc<RwLock<Vec<String>>>,
}

impl MemoryOutput {
    /// Create a new empty capture sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line written so far (testing helper).
    pub fn lines(&self) -> Vec<String> {
        self.inner.read().unwrap().clone()
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.inner.read().unwrap().len()
    }

    /// `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all captured lines.
    pub fn clear(&self) {
        self.inner.write().unwrap().clear();
    }
}

impl Output for MemoryOutput {
    fn write_line(&self, line: &str) -> SinkResult<()> {
        let mut lines = self.inner.write().map_err(|_| SinkError::LockPoisoned)?;
        lines.push(line.to_string());
        Ok(())
    }

    fn destination(&self) -> &str {
        "memory"
    }
}
