//! Tests for source file loading

use std::fs;

use apptscan::source;
use tempfile::TempDir;

#[test]
fn load_reads_whole_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("db.ts");
    let body = "export async function getAppointmentsByCustomer(id) {\n  // perché manca?\n}\n";
    fs::write(&path, body).unwrap();

    let content = source::load(&path).unwrap();
    assert_eq!(content, body);
}

#[test]
fn load_missing_file_reports_the_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("routers.ts");

    let err = source::load(&path).unwrap_err();
    assert!(err.to_string().contains("routers.ts"));
}
