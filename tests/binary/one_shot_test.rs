//! One-shot (`-c`) runs of the binary.

use super::common::run_clinic_book;
use tempfile::tempdir;

#[test]
fn test_one_shot_commands_persist() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("book.json");

    let (code, stdout, _) = run_clinic_book(
        &data,
        &[
            "-c",
            "add-doctor n/Jane Lim p/98765432 e/jane@clinic.com a/1 Clinic Road",
            "-c",
            "add-patient n/John Doe p/91234567 e/john@mail.com a/2 Home Street",
        ],
    );
    assert_eq!(code, 0);
    assert!(stdout.contains("New doctor added: Jane Lim"));
    assert!(stdout.contains("New patient added: John Doe"));
    assert!(data.exists());

    let (code, stdout, _) = run_clinic_book(&data, &["-c", "find-doctor jane"]);
    assert_eq!(code, 0);
    assert!(stdout.starts_with("1 doctors listed!\n1. Jane Lim"));
}

#[test]
fn test_one_shot_failure_exits_non_zero() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("book.json");

    let (code, stdout, stderr) = run_clinic_book(&data, &["-c", "find-doctor Jane123"]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Invalid argument format!"));
    assert!(!data.exists());
}

#[test]
fn test_corrupt_data_file_refuses_to_start() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("book.json");
    std::fs::write(&data, "not json").unwrap();

    let (code, _, stderr) = run_clinic_book(&data, &["-c", "list"]);

    assert_eq!(code, 1);
    assert!(stderr.contains("Could not load address book"));
    assert_eq!(std::fs::read_to_string(&data).unwrap(), "not json");
}
