//! End-to-end command scenarios through `App` with a JSON data file.

use clinic_book::app::{App, AppError};
use clinic_book::commands::CommandError;
use clinic_book::model::Model;
use clinic_book::storage::{JsonStorage, Storage};
use pretty_assertions::assert_eq;
use tempfile::{tempdir, TempDir};

fn open_app(dir: &TempDir) -> App {
    App::load(Box::new(JsonStorage::new(dir.path().join("book.json")))).unwrap()
}

fn seed(app: &mut App) {
    for line in [
        "add-doctor n/Jane Lim p/98765432 e/jane@clinic.com a/1 Clinic Road s/Cardiology",
        "add-doctor n/Bob Ong p/98761111 e/bob@clinic.com a/1 Clinic Road",
        "add-patient n/John Doe p/91234567 e/john@mail.com a/311 Clementi Ave 2 dob/01-02-1990 g/M",
        "add-patient n/Alice Tan p/81234567 e/alice@mail.com a/2 Home Street g/F",
        "add-appt doc/Jane Lim pat/John Doe d/23-04-2023 tm/1100",
        "add-appt doc/Bob Ong pat/John Doe d/22-04-2023 tm/0900",
    ] {
        app.execute(line)
            .unwrap_or_else(|e| panic!("{line} failed: {e}"));
    }
}

#[test]
fn test_state_survives_restart() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);
    app.execute("remark 3 r/Follow-up needed").unwrap();

    let reopened = open_app(&dir);
    assert_eq!(
        reopened.model().address_book(),
        app.model().address_book()
    );

    let book = reopened.model().address_book();
    assert_eq!(book.persons().len(), 4);
    assert_eq!(book.appointments().len(), 2);
    let john = &book.persons()[2];
    assert_eq!(john.name().as_str(), "John Doe");
    assert_eq!(john.remark().as_str(), "Follow-up needed");
    assert_eq!(john.appointments().len(), 2);
}

#[test]
fn test_remark_without_value_clears_it() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);
    app.execute("remark 3 r/Follow-up needed").unwrap();

    let result = app.execute("remark 3").unwrap();
    assert!(result
        .feedback()
        .starts_with("Removed remark from person: John Doe"));

    let book = open_app(&dir).model().address_book().clone();
    assert!(book.persons()[2].remark().is_empty());
}

#[test]
fn test_find_then_delete_by_filtered_index() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);

    let result = app.execute("find-patient john").unwrap();
    assert_eq!(result.feedback(), "1 patients listed!");

    let result = app.execute("delete 1").unwrap();
    assert!(result.feedback().starts_with("Deleted person: John Doe"));

    let book = open_app(&dir).model().address_book().clone();
    assert_eq!(book.persons().len(), 3);
    assert!(book.appointments().is_empty());
    assert!(book.persons().iter().all(|p| p.appointments().is_empty()));
}

#[test]
fn test_rename_keeps_appointments() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);

    app.execute("list-doctors").unwrap();
    app.execute("edit 1 n/Jane Lim Wei").unwrap();

    let mut reopened = open_app(&dir);
    let result = reopened.execute("list-appt n/Jane Lim Wei").unwrap();
    assert_eq!(
        reopened.render(&result),
        "1 appointments listed!\n1. John Doe with Jane Lim Wei on 23-04-2023 at 1100"
    );
}

#[test]
fn test_delete_appointment() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);

    let result = app
        .execute("delete-appt doc/Jane Lim pat/John Doe d/23-04-2023 tm/1100")
        .unwrap();
    assert_eq!(
        result.feedback(),
        "Deleted appointment of patient John Doe with doctor Jane Lim on 23-04-2023 at 1100"
    );

    let err = app
        .execute("delete-appt doc/Jane Lim pat/John Doe d/23-04-2023 tm/1100")
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Command(CommandError::InvalidAppointment)
    ));

    let book = open_app(&dir).model().address_book().clone();
    assert_eq!(book.appointments().len(), 1);
}

#[test]
fn test_list_appointments_in_date_order() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);

    let result = app.execute("list-appt").unwrap();
    assert_eq!(
        app.render(&result),
        "2 appointments listed!\n\
         1. John Doe with Bob Ong on 22-04-2023 at 0900\n\
         2. John Doe with Jane Lim on 23-04-2023 at 1100"
    );
}

#[test]
fn test_clear_persists_empty_book() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);

    app.execute("clear").unwrap();

    let storage = JsonStorage::new(dir.path().join("book.json"));
    let stored = storage.read_address_book().unwrap().unwrap();
    assert!(stored.is_empty());
    assert!(stored.appointments().is_empty());
}

#[test]
fn test_rejected_commands_leave_file_untouched() {
    let dir = tempdir().unwrap();
    let mut app = open_app(&dir);
    seed(&mut app);
    let path = dir.path().join("book.json");
    let before = std::fs::read_to_string(&path).unwrap();

    assert!(app
        .execute("add-doctor n/Jane Lim p/11111111 e/x@clinic.com a/Elsewhere")
        .is_err());
    assert!(app
        .execute("add-appt doc/John Doe pat/Jane Lim d/24-04-2023 tm/1000")
        .is_err());
    assert!(app.execute("edit 9 p/12345678").is_err());
    assert!(app.execute("find-doctor").is_err());

    assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
}
