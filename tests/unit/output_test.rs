//! Tests for the output module
//!
//! Output provides structured scan results that can be rendered as either
//! human-readable text or machine-parseable JSON.

use apptscan::output::{ClosingNotes, OutputMode, ProbeReport, Section};

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn probe_report_serialization() {
    let report = ProbeReport {
        name: "getCustomerHistory".to_string(),
        file: "routers.ts".to_string(),
        found: true,
        section: Some(Section {
            offset: 412,
            text: "getCustomerHistory: protectedProcedure.query(...)".to_string(),
            complete: true,
        }),
        pad_before: false,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"name\":\"getCustomerHistory\""));
    assert!(json.contains("\"found\":true"));
    assert!(json.contains("\"offset\":412"));
    assert!(json.contains("\"complete\":true"));
}

#[test]
fn absent_identifier_omits_section() {
    let report = ProbeReport {
        name: "getAppointmentsByCustomer".to_string(),
        file: "db.ts".to_string(),
        found: false,
        section: None,
        pad_before: true,
    };

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"found\":false"));
    assert!(!json.contains("\"section\""));
    // Rendering concerns stay out of the machine-readable form
    assert!(!json.contains("pad_before"));
}

#[test]
fn closing_notes_serialization() {
    let json = serde_json::to_string(&ClosingNotes::new()).unwrap();
    assert!(json.contains("webdev_execute_sql"));
    assert!(json.contains("frontend"));
}

#[test]
fn closing_notes_are_fixed() {
    assert_eq!(ClosingNotes::new().notes, ClosingNotes::default().notes);
    assert_eq!(ClosingNotes::new().notes.len(), 2);
}
