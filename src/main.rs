//! apptscan - diagnostic scanner for the appointment backend's
//! customer-lookup path
//!
//! Reads the backend's routing and data-access sources and prints excerpts
//! of the customer-history handler and the appointment lookup function, for
//! manual inspection during the missing-appointment investigation.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

mod cli;
mod commands;

/// Main entry point for the apptscan CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
