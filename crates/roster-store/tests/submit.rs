use roster_core::{Column, EmployeeInput, NoticeLevel};
use roster_store::handlers::{submit, Submission};
use roster_store::Store;
use std::fs;
use tempfile::TempDir;

fn input(name: &str, badge: &str, neighborhood: &str, bus: &str) -> EmployeeInput {
    EmployeeInput {
        name: name.to_string(),
        badge_id: badge.to_string(),
        neighborhood: neighborhood.to_string(),
        bus_line: bus.to_string(),
    }
}

#[test]
fn submit_normalizes_persists_and_reloads() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    let mut store = Store::open(&path).expect("open");

    let outcome = submit(&mut store, &input("joão silva", "0098", " centro ", "b12"))
        .expect("submit");
    assert!(outcome.is_accepted());
    assert_eq!(outcome.notice().level, NoticeLevel::Success);

    let contents = fs::read_to_string(&path).expect("read csv");
    assert_eq!(
        contents,
        "Nome,Matrícula,Bairro,Ônibus\nJoão Silva,0098,CENTRO,B12\n"
    );

    let rows = store.table().rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].fields(), ["João Silva", "0098", "CENTRO", "B12"]);

    let reopened = Store::open(&path).expect("reopen");
    assert_eq!(reopened.table(), store.table());
}

#[test]
fn submit_appends_after_existing_rows() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    fs::write(&path, "Nome,Matrícula,Bairro,Ônibus\nAna,007,centro,a1\n").expect("write csv");
    let mut store = Store::open(&path).expect("open");

    submit(&mut store, &input("bia", "8", "sul", "c3")).expect("submit");

    let names: Vec<&str> = store.table().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bia"]);
    // Legacy rows are written back untouched.
    assert_eq!(store.table().rows()[0].badge_id, "007");
    assert_eq!(store.table().rows()[0].neighborhood, "centro");
}

#[test]
fn submit_rejects_blank_fields_without_writing() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    let mut store = Store::open(&path).expect("open");

    let outcome = submit(&mut store, &input("Ana", "  ", "CENTRO", "")).expect("submit");
    assert_eq!(
        outcome,
        Submission::Rejected(vec![Column::BadgeId, Column::BusLine])
    );
    let notice = outcome.notice();
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert!(notice.message.contains("badge id, bus line"));
    assert!(store.table().is_empty());
    assert!(!path.exists());
}

#[test]
fn submit_overwrites_external_edits_with_cached_table() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    let mut store = Store::open(&path).expect("open");
    submit(&mut store, &input("ana", "1", "centro", "a1")).expect("submit");

    // Another writer replaces the file; the next save overwrites it with
    // the cached table plus the new row.
    fs::write(&path, "Nome,Matrícula,Bairro,Ônibus\nZé,9,NORTE,Z9\n").expect("write csv");
    submit(&mut store, &input("bia", "2", "sul", "b2")).expect("submit");

    let names: Vec<&str> = store.table().iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Bia"]);
}

#[test]
fn submit_creates_parent_directory() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("dados").join("funcionarios.csv");
    let mut store = Store::open(&path).expect("open");
    submit(&mut store, &input("ana", "1", "centro", "a1")).expect("submit");
    assert!(path.exists());
}

#[test]
fn submit_keeps_cached_table_when_write_fails() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    let mut store = Store::open(&path).expect("open");
    submit(&mut store, &input("ana", "1", "centro", "b12")).expect("submit");
    let before = store.table().clone();

    fs::remove_file(&path).expect("remove csv");
    fs::create_dir(&path).expect("block path with a directory");

    assert!(submit(&mut store, &input("bia", "2", "norte", "a1")).is_err());
    assert_eq!(store.table(), &before);
}
