//! Integration tests for the JSON storage layer.

use clinic_book::model::{
    Address, AddressBook, Appointment, Date, Email, Gender, Name, Person, PersonKind, Phone,
    Specialty, Tag, Time,
};
use clinic_book::storage::{JsonStorage, Storage};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

fn doctor(name: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("98765432").unwrap(),
        Email::new("doctor@clinic.com").unwrap(),
        Address::new("1 Clinic Road").unwrap(),
        PersonKind::Doctor {
            specialty: Some(Specialty::new("Paediatrics").unwrap()),
        },
    )
    .with_tags([Tag::new("senior").unwrap()])
}

fn patient(name: &str) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Phone::new("91234567").unwrap(),
        Email::new("patient@mail.com").unwrap(),
        Address::new("311 Clementi Ave 2").unwrap(),
        PersonKind::Patient {
            date_of_birth: None,
            gender: Some(Gender::Other),
        },
    )
}

#[test]
fn test_storage_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("book.json");
    let storage = JsonStorage::new(&path);

    storage.save_address_book(&AddressBook::new()).unwrap();

    assert!(path.exists());
    assert_eq!(storage.path(), path.as_path());
    assert!(storage.read_address_book().unwrap().unwrap().is_empty());
}

#[test]
fn test_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    let dr = doctor("Jane Lim");
    let pt = patient("John Doe");
    let mut book = AddressBook::new();
    book.add_person(dr.clone()).unwrap();
    book.add_person(pt.clone()).unwrap();
    book.add_appointment(Appointment::new(
        dr.name().clone(),
        pt.name().clone(),
        Date::new("23-04-2023").unwrap(),
        Time::new("1100").unwrap(),
    ))
    .unwrap();

    JsonStorage::new(&path).save_address_book(&book).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(json["persons"][0]["kind"], "doctor");
    assert_eq!(json["persons"][0]["specialty"], "Paediatrics");
    assert_eq!(json["persons"][0]["tags"][0], "senior");
    assert_eq!(json["persons"][1]["kind"], "patient");
    assert_eq!(json["persons"][1]["gender"], "O");
    assert!(json["persons"][1].get("appointments").is_none());
    assert_eq!(json["appointments"][0]["date"], "23-04-2023");
    assert_eq!(json["appointments"][0]["time"], "1100");
    assert_eq!(json["appointments"][0]["doctor"], "Jane Lim");
}

#[test]
fn test_wrong_kind_appointment_is_dropped_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
        &path,
        r#"{
          "persons": [
            {"name":"Jane Lim","phone":"98765432","email":"jane@clinic.com","address":"1 Clinic Road","kind":"doctor"},
            {"name":"John Doe","phone":"91234567","email":"john@mail.com","address":"2 Home Street","kind":"patient","date_of_birth":"01-02-1990"}
          ],
          "appointments": [
            {"date":"23-04-2023","time":"1100","doctor":"Jane Lim","patient":"John Doe"},
            {"date":"24-04-2023","time":"1100","doctor":"John Doe","patient":"Jane Lim"}
          ]
        }"#,
    )
    .unwrap();

    let book = JsonStorage::new(&path).read_address_book().unwrap().unwrap();

    assert_eq!(book.appointments().len(), 1);
    let john = book.find_person(&Name::new("John Doe").unwrap()).unwrap();
    assert_eq!(john.appointments().len(), 1);
    assert_eq!(
        john.date_of_birth().map(|d| d.to_string()),
        Some("01-02-1990".to_string())
    );
}

#[test]
fn test_future_date_of_birth_is_rejected_on_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    std::fs::write(
        &path,
        r#"{"persons":[{"name":"John Doe","phone":"91234567","email":"john@mail.com","address":"x","kind":"patient","date_of_birth":"01-01-3000"}]}"#,
    )
    .unwrap();

    let err = JsonStorage::new(&path).read_address_book().unwrap_err();
    assert_eq!(err.category(), "Storage Error");
}
