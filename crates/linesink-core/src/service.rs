//! Emit service - application orchestrator.
//!
//! The service coordinates a single use case: hand lines to a sink and
//! account for what was written. It contains no emission logic itself; all
//! of that lives behind the [`Output`] port.

use tracing::{info, instrument, trace};

use crate::{error::SinkResult, ports::Output};

/// Summary of a completed emission, for display purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitSummary {
    /// Number of lines handed to the sink.
    pub lines_written: usize,
}

/// Drives an [`Output`] sink on behalf of callers.
///
/// The sink is injected at construction; the service never knows which
/// concrete destination it is writing to.
pub struct EmitService {
    sink: Box<dyn Output>,
}

impl EmitService {
    /// Create a new emit service with the given sink.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use linesink_core::{ports::Output, service::EmitService};
    ///
    /// # fn demo(sink: Box<dyn Output>) {
    /// let service = EmitService::new(sink); // sink: impl Output
    /// # }
    /// ```
    pub fn new(sink: Box<dyn Output>) -> Self {
        Self { sink }
    }

    /// Emit a single line.
    #[instrument(skip_all, fields(destination = self.sink.destination()))]
    pub fn emit(&self, line: &str) -> SinkResult<()> {
        trace!(len = line.len(), "emitting line");
        self.sink.write_line(line)
    }

    /// Emit every element of `lines`, in order.
    ///
    /// This is the main use case - forwards the whole sequence to the sink
    /// and reports how many lines were written.
    #[instrument(skip_all, fields(destination = self.sink.destination(), lines = lines.len()))]
    pub fn emit_all(&self, lines: &[String]) -> SinkResult<EmitSummary> {
        self.sink.write_lines(lines)?;

        info!(lines = lines.len(), "emission complete");
        Ok(EmitSummary {
            lines_written: lines.len(),
        })
    }

    /// Identifier of the underlying destination.
    pub fn destination(&self) -> &str {
        self.sink.destination()
    }
}
