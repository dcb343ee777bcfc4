//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from the outside world.
//! The `linesink-adapters` crate provides implementations.

#[cfg(test)]
use mockall::automock;

use crate::error::SinkResult;

/// Port for emitting lines of text to a destination.
///
/// Implemented by:
/// - `linesink_adapters::ConsoleOutput` (production, standard output)
/// - `linesink_adapters::FileOutput` (production, file on disk)
/// - `linesink_adapters::MemoryOutput` (testing, captures lines)
/// - `linesink_adapters::NullOutput` (discards everything)
///
/// ## Design Notes
///
/// - Implementations must not reorder, deduplicate, filter, or transform
///   lines; each element of a passed-in sequence is written exactly once
/// - No validation is performed on input: the empty string is a valid line
/// - The contract this port descends from was silent on write failures;
///   here they propagate as [`SinkError`](crate::error::SinkError)
/// - Implementations are selected at composition time and must not assume
///   a particular destination, encoding, or buffering behaviour
/// - Concurrent callers sharing one sink must serialize themselves; the
///   port guarantees ordering only within a single call
#[cfg_attr(test, automock)]
pub trait Output: Send + Sync {
    /// Write a single line to the destination, followed by a line
    /// terminator, synchronously, before returning.
    fn write_line(&self, line: &str) -> SinkResult<()>;

    /// Write each element of `lines` in iteration order, as if
    /// [`write_line`](Output::write_line) were invoked once per element.
    ///
    /// An empty slice writes nothing and is not an error.
    fn write_lines(&self, lines: &[String]) -> SinkResult<()> {
        for line in lines {
            self.write_line(line)?;
        }
        Ok(())
    }

    /// Short identifier for the underlying destination (`"stdout"`, a file
    /// path, ...), used in error messages and tracing fields.
    fn destination(&self) -> &str;
}
