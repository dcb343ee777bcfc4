//! Command handlers.
//!
//! One module per subcommand; each exposes a single `execute` entry point
//! that builds the adapters it needs and hands them to the core.

pub mod completions;
pub mod emit;
