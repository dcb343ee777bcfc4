//! Null adapter - discards everything.

use linesink_core::{error::SinkResult, ports::Output};

/// Sink that accepts any line and writes nothing.
///
/// Useful as a test double and for callers that want fire-and-forget
/// semantics without threading `Option<Box<dyn Output>>` around.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullOutput;

impl NullOutput {
    /// Create a new null sink.
    pub fn new() -> Self {
        Self
    }
}

impl Output for NullOutput {
    fn write_line(&self, _line: &str) -> SinkResult<()> {
        Ok(())
    }

    // Skip the per-line default; there is nothing to write.
    fn write_lines(&self, _lines: &[String]) -> SinkResult<()> {
        Ok(())
    }

    fn destination(&self) -> &str {
        "null"
    }
}
