//! Common utilities for running the binary.

use std::path::Path;
use std::process::Command;

/// Runs clinic-book against `data_file` with the given arguments.
/// Returns the exit code, stdout and stderr.
pub fn run_clinic_book(data_file: &Path, args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_clinic-book"))
        .arg("--data-file")
        .arg(data_file)
        .arg("--config")
        .arg(data_file.with_extension("toml"))
        .args(args)
        .env_remove("CLINIC_BOOK_DATA_FILE")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute clinic-book");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}
