//! Scan the backend sources for the customer-lookup path
//!
//! Reproduces the manual debugging walk for the missing-appointment
//! investigation: pull the history handler out of the router definitions,
//! then the lookup function out of the data-access layer, and leave the
//! closing notes for whoever continues.

use apptscan::output::{ClosingNotes, OutputMode, ProbeReport, Section};
use apptscan::probe::{self, EXCERPT_LIMIT, EndMarker, ExcerptError};
use apptscan::source;

/// Request-routing definitions of the backend under investigation
const ROUTERS_TS: &str = "/home/ubuntu/gestione-appuntamenti-tecnici/server/routers.ts";

/// Data-access definitions of the backend under investigation
const DB_TS: &str = "/home/ubuntu/gestione-appuntamenti-tecnici/server/db.ts";

/// Run the scan: probe both files in order, then print the closing notes
///
/// A read failure aborts the run immediately; later steps are not
/// attempted.
pub fn scan(mode: OutputMode) -> anyhow::Result<()> {
    // How does the router expose the history query?
    let content = source::load(ROUTERS_TS)?;
    probe_file(
        &content,
        "getCustomerHistory",
        "routers.ts",
        "getCustomerHistory",
        EndMarker::Closer("});"),
        false,
    )
    .render(mode);

    // And how does the lookup itself hit the database?
    let content = source::load(DB_TS)?;
    probe_file(
        &content,
        "getAppointmentsByCustomer",
        "db.ts",
        "export async function getAppointmentsByCustomer",
        EndMarker::NextDecl("export async function"),
        true,
    )
    .render(mode);

    ClosingNotes::new().render(mode);
    Ok(())
}

/// Probe one file's text for an identifier and build its report
///
/// `name` is the identifier whose presence is tested and reported; `anchor`
/// is the substring the extraction starts from (the full declaration header
/// for the data-access probe).
fn probe_file(
    content: &str,
    name: &str,
    file: &str,
    anchor: &str,
    end: EndMarker<'_>,
    pad_before: bool,
) -> ProbeReport {
    if !content.contains(name) {
        return ProbeReport {
            name: name.to_string(),
            file: file.to_string(),
            found: false,
            section: None,
            pad_before,
        };
    }

    let section = match probe::extract(content, anchor, end) {
        Ok(excerpt) => {
            log::debug!("{name}: section at {}..{}", excerpt.start, excerpt.end);
            Some(Section {
                offset: excerpt.start,
                text: probe::truncate_chars(excerpt.text, EXCERPT_LIMIT).to_string(),
                complete: excerpt.complete,
            })
        },
        Err(ExcerptError::AnchorNotFound(missing)) => {
            log::debug!("{name}: identifier present but '{missing}' missing");
            None
        },
    };

    ProbeReport {
        name: name.to_string(),
        file: file.to_string(),
        found: true,
        section,
        pad_before,
    }
}
