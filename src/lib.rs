//! apptscan - diagnostic scanner for the appointment backend's
//! customer-lookup path
//!
//! This library provides the pieces of the scan: whole-file source loading,
//! literal marker search with bounded excerpt extraction, and report
//! rendering in human or JSON form.

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

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod output;
pub mod probe;
pub mod source;
