//! Console adapter writing to the process's standard output stream.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use linesink_core::{
    error::{SinkError, SinkResult},
    ports::Output,
};

/// Production console sink.
///
/// The underlying stream is injected at construction rather than accessed
/// as ambient global state, so tests can substitute a capturing writer.
/// Each line is written synchronously, followed by a newline, before the
/// call returns; the multi-line form inherits the port's one-write-per-line
/// default.
pub struct ConsoleOutput {
    destination: String,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleOutput {
    /// Console sink over the process's standard output stream.
    pub fn stdout() -> Self {
        Self::with_writer("stdout", Box::new(io::stdout()))
    }

    /// Console sink over an arbitrary writer.
    ///
    /// `destination` names the writer in error messages and tracing fields
    /// (convention: `"stdout"` for the standard stream).
    pub fn with_writer(destination: impl Into<String>, writer: Box<dyn Write + Send>) -> Self {
        Self {
            destination: destination.into(),
            writer: Mutex::new(writer),
        }
    }
}

impl Default for ConsoleOutput {
    fn default() -> Self {
        Self::stdout()
    }
}

// Manual impl: boxed writers are not `Debug`.
impl fmt::Debug for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleOutput")
            .field("destination", &self.destination)
            .finish_non_exhaustive()
    }
}

impl Output for ConsoleOutput {
    fn write_line(&self, line: &str) -> SinkResult<()> {
        let mut writer = self.writer.lock().map_err(|_| SinkError::LockPoisoned)?;
        writeln!(writer, "{line}").map_err(|e| SinkError::Write {
            destination: self.destination.clone(),
            source: e,
        })
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Capturing writer handed to `with_writer`; keeps a shared handle so
    /// the test can read back what the sink wrote.
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn captured_console() -> (ConsoleOutput, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let sink = ConsoleOutput::with_writer("stdout", Box::new(buffer.clone()));
        (sink, buffer)
    }

    #[test]
    fn single_line_gets_terminator() {
        let (sink, buffer) = captured_console();
        sink.write_line("done").unwrap();
        assert_eq!(buffer.contents(), "done\n");
    }

    #[test]
    fn empty_line_is_terminator_only() {
        let (sink, buffer) = captured_console();
        sink.write_line("").unwrap();
        assert_eq!(buffer.contents(), "\n");
    }

    #[test]
    fn sequence_is_written_in_order() {
        let (sink, buffer) = captured_console();
        let lines: Vec<String> = ["alpha", "", "beta"].map(String::from).into();
        sink.write_lines(&lines).unwrap();
        assert_eq!(buffer.contents(), "alpha\n\nbeta\n");
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        let (sink, buffer) = captured_console();
        sink.write_lines(&[]).unwrap();
        assert_eq!(buffer.contents(), "");
    }

    #[test]
    fn failed_write_names_the_destination() {
        struct FailingWriter;

        impl Write for FailingWriter {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let sink = ConsoleOutput::with_writer("stdout", Box::new(FailingWriter));
        let err = sink.write_line("x").unwrap_err();
        assert!(matches!(err, SinkError::Write { ref destination, .. } if destination == "stdout"));
    }

    #[test]
    fn destination_defaults_to_stdout() {
        assert_eq!(ConsoleOutput::stdout().destination(), "stdout");
    }
}
