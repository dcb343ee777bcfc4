//! Linesink Core - Hexagonal Architecture Implementation
//!
//! This crate provides the application layer for linesink, a small
//! destination-agnostic line emitter, following hexagonal (ports and
//! adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          linesink-cli (CLI)             │
//! │      (Composition root / caller)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │            EmitService                  │
//! │        Orchestrates Emission            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Output Port (Trait)              │
//! │     (write_line / write_lines)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    linesink-adapters (Infrastructure)   │
//! │ (ConsoleOutput, FileOutput, NullOutput) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use linesink_core::{ports::Output, service::EmitService};
//!
//! // `sink` is any Box<dyn Output> built by the caller.
//! # fn demo(sink: Box<dyn Output>) -> linesink_core::error::SinkResult<()> {
//! let service = EmitService::new(sink);
//! service.emit("done")?;
//! # Ok(())
//! # }
//! ```

// Port definitions (traits implemented by infrastructure)
pub mod ports;

// Emission orchestration
pub mod service;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::error::{ErrorCategory, SinkError, SinkResult};
    pub use crate::ports::Output;
    pub use crate::service::{EmitService, EmitSummary};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
