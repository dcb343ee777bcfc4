//! Infrastructure adapters for linesink.
//!
//! This crate implements the `Output` port defined in
//! `linesink-core::ports`. It contains all external dependencies and I/O
//! operations; nothing here is reachable without going through the port.

pub mod console;
pub mod file;
pub mod memory;
pub mod null;

// Re-export commonly used adapters
pub use console::ConsoleOutput;
pub use file::FileOutput;
pub use memory::MemoryOutput;
pub use null::NullOutput;
