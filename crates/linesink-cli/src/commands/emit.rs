//! Implementation of the `linesink emit` command.

use std::io::{self, BufRead};

use clap::ValueEnum;
use tracing::debug;

use linesink_adapters::{ConsoleOutput, FileOutput, NullOutput};
use linesink_core::{ports::Output, service::EmitService};

use crate::{
    cli::{EmitArgs, SinkKind, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
};

pub fn execute(args: EmitArgs, _global: GlobalArgs, config: AppConfig) -> CliResult<()> {
    let lines = gather_lines(&args)?;
    let sink = build_sink(&args, &config)?;

    let service = EmitService::new(sink);
    let summary = service.emit_all(&lines)?;

    debug!(
        lines = summary.lines_written,
        destination = service.destination(),
        "emit finished"
    );
    Ok(())
}

/// Positional lines win; with none given, read one line per line of stdin.
fn gather_lines(args: &EmitArgs) -> CliResult<Vec<String>> {
    if !args.lines.is_empty() {
        return Ok(args.lines.clone());
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::IoError {
            message: "reading lines from stdin".into(),
            source: e,
        })
}

/// Resolve the sink selection (flag first, then config default) to an
/// adapter.  This is the composition point: nothing past here knows which
/// destination was chosen.
fn build_sink(args: &EmitArgs, config: &AppConfig) -> CliResult<Box<dyn Output>> {
    let kind = match args.sink {
        Some(kind) => kind,
        None => {
            SinkKind::from_str(&config.defaults.sink, true).map_err(|_| CliError::ConfigError {
                message: format!("unknown default sink '{}'", config.defaults.sink),
            })?
        }
    };

    match kind {
        SinkKind::Console => Ok(Box::new(ConsoleOutput::stdout())),
        SinkKind::Null => Ok(Box::new(NullOutput::new())),
        SinkKind::File => {
            let path = args
                .path
                .clone()
                .or_else(|| config.defaults.path.clone())
                .ok_or_else(|| CliError::InvalidInput {
                    message: "the file sink needs a target; pass --path or set defaults.path in the config".into(),
                })?;

            let sink = if args.append {
                FileOutput::append(&path)?
            } else {
                FileOutput::create(&path)?
            };
            Ok(Box::new(sink))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emit_args(sink: Option<SinkKind>) -> EmitArgs {
        EmitArgs {
            lines: vec!["x".into()],
            sink,
            path: None,
            append: false,
        }
    }

    #[test]
    fn explicit_null_sink_is_selected() {
        let sink = build_sink(&emit_args(Some(SinkKind::Null)), &AppConfig::default()).unwrap();
        assert_eq!(sink.destination(), "null");
    }

    #[test]
    fn default_sink_comes_from_config() {
        let mut config = AppConfig::default();
        config.defaults.sink = "null".into();
        let sink = build_sink(&emit_args(None), &config).unwrap();
        assert_eq!(sink.destination(), "null");
    }

    #[test]
    fn unknown_config_sink_is_a_config_error() {
        let mut config = AppConfig::default();
        config.defaults.sink = "teletype".into();
        let err = match build_sink(&emit_args(None), &config) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, CliError::ConfigError { .. }));
    }

    #[test]
    fn file_sink_without_path_is_invalid_input() {
        let err = match build_sink(&emit_args(Some(SinkKind::File)), &AppConfig::default()) {
            Ok(_) => panic!("expected error"),
            Err(e) => e,
        };
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn file_sink_falls_back_to_config_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.defaults.path = Some(dir.path().join("out.txt"));

        let sink = build_sink(&emit_args(Some(SinkKind::File)), &config).unwrap();
        assert!(sink.destination().ends_with("out.txt"));
    }

    #[test]
    fn positional_lines_bypass_stdin() {
        let args = EmitArgs {
            lines: vec!["alpha".into(), String::new(), "beta".into()],
            sink: Some(SinkKind::Null),
            path: None,
            append: false,
        };
        let lines = gather_lines(&args).unwrap();
        assert_eq!(lines, vec!["alpha", "", "beta"]);
    }
}
