//! Unified error handling for linesink core.
//!
//! The original output contract signalled nothing on failure; this crate
//! resolves that gap by propagating destination-level faults as [`SinkError`]
//! so callers can decide what a failed write means to them.

use std::io;

use thiserror::Error;

/// Root error type for sink operations.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The destination could not be opened (file sinks).
    #[error("could not open {destination}: {source}")]
    Open {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// A write to an open destination failed (closed pipe, full disk, ...).
    #[error("write to {destination} failed: {source}")]
    Write {
        destination: String,
        #[source]
        source: io::Error,
    },

    /// A sink's internal lock was poisoned by a panicking writer.
    #[error("output sink lock poisoned")]
    LockPoisoned,
}

impl SinkError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Open { destination, .. } => vec![
                format!("Failed to open: {destination}"),
                "Check that the path exists and is writable".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::Write { destination, .. } => vec![
                format!("Failed to write to: {destination}"),
                "Check available disk space and permissions".into(),
                "If output was piped, the reader may have closed the pipe".into(),
            ],
            Self::LockPoisoned => vec![
                "A previous write panicked and poisoned the sink".into(),
                "Recreate the sink and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Open { .. } | Self::Write { .. } => ErrorCategory::Io,
            Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Destination-level I/O failure.
    Io,
    /// Unexpected internal failure.
    Internal,
}

/// Convenient result type alias.
pub type SinkResult<T> = Result<T, SinkError>;
