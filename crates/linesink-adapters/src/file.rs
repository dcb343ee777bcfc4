//! File adapter using std::fs.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;

use linesink_core::{
    error::{SinkError, SinkResult},
    ports::Output,
};
use tracing::debug;

/// File-backed sink.
///
/// Lines are written one `writeln!` at a time, in call order, with no
/// batching. The file handle is held for the lifetime of the sink.
#[derive(Debug)]
pub struct FileOutput {
    destination: String,
    file: Mutex<File>,
}

impl FileOutput {
    /// Open `path` for writing, truncating any existing content.
    pub fn create(path: impl AsRef<Path>) -> SinkResult<Self> {
        Self::open(path.as_ref(), true)
    }

    /// Open `path` for writing, appending to existing content.
    pub fn append(path: impl AsRef<Path>) -> SinkResult<Self> {
        Self::open(path.as_ref(), false)
    }

    fn open(path: &Path, truncate: bool) -> SinkResult<Self> {
        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }

        let destination = path.display().to_string();
        let file = options.open(path).map_err(|e| SinkError::Open {
            destination: destination.clone(),
            source: e,
        })?;

        debug!(path = %destination, truncate, "opened file sink");
        Ok(Self {
            destination,
            file: Mutex::new(file),
        })
    }
}

impl Output for FileOutput {
    fn write_line(&self, line: &str) -> SinkResult<()> {
        let mut file = self.file.lock().map_err(|_| SinkError::LockPoisoned)?;
        writeln!(file, "{line}").map_err(|e| SinkError::Write {
            destination: self.destination.clone(),
            source: e,
        })
    }

    fn destination(&self) -> &str {
        &self.destination
    }
}
