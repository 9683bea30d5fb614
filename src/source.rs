//! Source file loading
//!
//! Reads whole files into memory as UTF-8 text. There is no retry or
//! recovery: an unreadable path surfaces as an error that callers are
//! expected to propagate.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while loading a source file
#[derive(Debug, Error)]
pub enum SourceError {
    /// The file could not be read
    #[error("failed to read {}", path.display())]
    Read {
        /// The path that failed
        path: PathBuf,

        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },
}

/// Read an entire source file into memory as text
pub fn load(path: impl AsRef<Path>) -> Result<String, SourceError> {
    let path = path.as_ref();
    log::debug!("reading {}", path.display());
    fs::read_to_string(path).map_err(|source| SourceError::Read {
        path: path.to_path_buf(),
        source,
    })
}
