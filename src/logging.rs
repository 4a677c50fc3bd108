//! Logging setup for clinic-book.
//!
//! The prompt shares stdout with the user, so an interactive session logs to
//! a file. Runs driven by `-c` commands, or started with `--log-stderr`, log
//! to stderr where scripts and tests can capture them.

use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::APP_DIR;

/// Where log lines go for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The log file from [`get_log_path`], truncated per session.
    File,
    Stderr,
}

impl LogTarget {
    /// Picks the target for a run: stderr when asked for, or when there is no prompt.
    pub fn for_run(log_stderr: bool, one_shot: bool) -> Self {
        if log_stderr || one_shot {
            Self::Stderr
        } else {
            Self::File
        }
    }
}

/// Installs the global subscriber. `RUST_LOG` overrides `default_level`.
///
/// If the log file cannot be opened, the session runs without logging and a
/// warning is printed to stderr.
pub fn init(target: LogTarget, default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init(),
        LogTarget::File => match open_log_file() {
            Ok(file) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(file)
                .with_ansi(false)
                .init(),
            Err(e) => eprintln!(
                "Warning: Could not open log file {}: {e}",
                get_log_path().display()
            ),
        },
    }
}

fn open_log_file() -> io::Result<File> {
    let path = get_log_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}

/// Path of the session log: the state directory, else the config directory,
/// else the temp directory.
pub fn get_log_path() -> PathBuf {
    let file_name = format!("{APP_DIR}.log");

    dirs::state_dir()
        .or_else(dirs::config_dir)
        .map(|dir| dir.join(APP_DIR).join(&file_name))
        .unwrap_or_else(|| std::env::temp_dir().join(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_logs_to_file() {
        assert_eq!(LogTarget::for_run(false, false), LogTarget::File);
    }

    #[test]
    fn test_commands_and_flag_log_to_stderr() {
        assert_eq!(LogTarget::for_run(false, true), LogTarget::Stderr);
        assert_eq!(LogTarget::for_run(true, false), LogTarget::Stderr);
        assert_eq!(LogTarget::for_run(true, true), LogTarget::Stderr);
    }

    #[test]
    fn test_log_path() {
        let path = get_log_path();
        assert!(path.is_absolute());
        assert!(path.ends_with("clinic-book.log"));
    }
}
