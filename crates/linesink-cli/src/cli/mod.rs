//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "linesink",
    bin_name = "linesink",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Emit lines of text to a chosen destination",
    long_about = "Linesink writes lines through a destination-agnostic sink: \
                  the console, a file, or nowhere at all.  The sink is \
                  selected at the command line, not baked into the caller.",
    after_help = "EXAMPLES:\n\
        \x20 linesink emit alpha beta\n\
        \x20 printf 'alpha\\nbeta\\n' | linesink emit\n\
        \x20 linesink emit --sink file --path out.txt done\n\
        \x20 linesink completions bash > /usr/share/bash-completion/completions/linesink",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Emit lines through the selected sink.
    #[command(
        visible_alias = "e",
        about = "Emit lines to the selected sink",
        after_help = "EXAMPLES:\n\
            \x20 linesink emit alpha beta\n\
            \x20 linesink emit --sink null noisy output\n\
            \x20 linesink emit --sink file --path out.txt --append more\n\
            \x20 cat notes.txt | linesink emit"
    )]
    Emit(EmitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 linesink completions bash > ~/.local/share/bash-completion/completions/linesink\n\
            \x20 linesink completions zsh  > ~/.zfunc/_linesink\n\
            \x20 linesink completions fish > ~/.config/fish/completions/linesink.fish"
    )]
    Completions(CompletionsArgs),
}

// ── emit ──────────────────────────────────────────────────────────────────────

/// Arguments for `linesink emit`.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Lines to emit, in order.  With none given, one line is read per
    /// line of stdin.
    #[arg(value_name = "LINE", help = "Lines to emit (read from stdin when omitted)")]
    pub lines: Vec<String>,

    /// Destination sink.
    #[arg(
        short = 's',
        long = "sink",
        value_name = "SINK",
        value_enum,
        help = "Destination sink (default from config)"
    )]
    pub sink: Option<SinkKind>,

    /// Target file for the file sink.
    #[arg(
        short = 'p',
        long = "path",
        value_name = "FILE",
        help = "Target file (file sink only)"
    )]
    pub path: Option<PathBuf>,

    /// Append to the target file instead of truncating it.
    #[arg(long = "append", help = "Append instead of truncating (file sink)")]
    pub append: bool,
}

/// Selectable sink implementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SinkKind {
    /// Standard output.
    Console,
    /// A file on disk.
    File,
    /// Discard everything.
    Null,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `linesink completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for.
    #[arg(value_enum, value_name = "SHELL", help = "Target shell")]
    pub shell: Shell,
}

/// Shells with completion support.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
