//! Logger setup for the host binary.
//!
//! Stdout carries the job table and prompts, so terminal logging goes to
//! stderr and the default destination is a file.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./careerflow.log";

/// Where log records go; read from the `log_destination` config key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    /// `./careerflow.log`, truncated on start.
    #[default]
    File,
    Terminal,
    Both,
    Off,
}

impl LogDestination {
    fn writes_terminal(self) -> bool {
        matches!(self, LogDestination::Terminal | LogDestination::Both)
    }

    fn writes_file(self) -> bool {
        matches!(self, LogDestination::File | LogDestination::Both)
    }
}

pub fn initialize(destination: LogDestination) {
    let loggers = loggers_for(destination, Path::new(LOG_FILENAME));
    if loggers.is_empty() {
        return;
    }
    if let Err(err) = CombinedLogger::init(loggers) {
        eprintln!("Warning: logger already set: {err}");
    }
}

/// A log file that cannot be created is reported on stderr and skipped.
fn loggers_for(destination: LogDestination, log_path: &Path) -> Vec<Box<dyn SharedLogger>> {
    let level = careerflow_logging::default_level();
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if destination.writes_terminal() {
        loggers.push(TermLogger::new(
            level,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }
    if destination.writes_file() {
        match File::create(log_path) {
            Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
            Err(err) => eprintln!("Warning: could not create log file {}: {err}", log_path.display()),
        }
    }
    loggers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn off_builds_no_loggers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("careerflow.log");

        assert!(loggers_for(LogDestination::Off, &path).is_empty());
        assert!(!path.exists());
    }

    #[test]
    fn both_creates_the_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("careerflow.log");

        assert_eq!(loggers_for(LogDestination::Both, &path).len(), 2);
        assert!(path.exists());
    }

    #[test]
    fn unwritable_log_path_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("careerflow.log");

        assert!(loggers_for(LogDestination::File, &path).is_empty());
        assert_eq!(loggers_for(LogDestination::Both, &path).len(), 1);
    }
}
