//! Command-line argument parsing for clinic-book.

use clap::Parser;
use std::path::PathBuf;

/// Address book for a clinic's doctors, patients and appointments.
#[derive(Parser, Debug)]
#[command(name = "clinic-book")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Address book data file (overrides the config file)
    #[arg(long, value_name = "PATH", env = "CLINIC_BOOK_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Run a command and exit instead of starting the prompt (repeatable)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,

    /// Log to stderr instead of the log file
    #[arg(long)]
    pub log_stderr: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns the config file path to use.
    ///
    /// Uses the --config argument if provided, otherwise the default path.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(crate::config::Config::default_path)
    }

    /// Returns true if commands were given on the command line.
    pub fn is_one_shot(&self) -> bool {
        !self.commands.is_empty()
    }
}
