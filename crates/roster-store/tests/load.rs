use roster_store::error::StoreErrorKind;
use roster_store::load::load_table;
use roster_store::Store;
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_loads_empty_without_warning() {
    let temp = TempDir::new().expect("tempdir");
    let loaded = load_table(&temp.path().join("funcionarios.csv")).expect("load");
    assert!(loaded.table.is_empty());
    assert!(loaded.warning.is_none());
}

#[test]
fn missing_columns_are_backfilled_in_canonical_order() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    fs::write(&path, "Bairro,Nome\nCENTRO,Ana\nVILA NOVA,Bia\n").expect("write csv");

    let loaded = load_table(&path).expect("load");
    assert!(loaded.warning.is_none());
    let rows = loaded.table.rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].fields(), ["Ana", "", "CENTRO", ""]);
    assert_eq!(rows[1].fields(), ["Bia", "", "VILA NOVA", ""]);
}

#[test]
fn malformed_file_yields_warning_and_empty_table() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    fs::write(&path, "Nome,Matrícula\nAna,1,CENTRO,B1\n").expect("write csv");

    let loaded = load_table(&path).expect("load");
    assert!(loaded.table.is_empty());
    let warning = loaded.warning.expect("warning");
    assert_eq!(warning.reason.kind(), StoreErrorKind::RowTooLong);
    assert!(warning.to_string().contains("starting with an empty table"));
}

#[test]
fn empty_file_yields_warning() {
    let temp = TempDir::new().expect("tempdir");
    let path = temp.path().join("funcionarios.csv");
    fs::write(&path, "").expect("write csv");

    let store = Store::open(&path).expect("open");
    assert!(store.table().is_empty());
    assert_eq!(
        store.load_warning().expect("warning").reason.kind(),
        StoreErrorKind::EmptyFile
    );
    assert_eq!(store.notices().len(), 1);
    assert!(store.notices()[0].is_warning());
}

#[test]
fn directory_path_is_fatal() {
    let temp = TempDir::new().expect("tempdir");
    let err = Store::open(temp.path()).err().expect("open should fail");
    assert_eq!(err.kind(), StoreErrorKind::Io);
}
