//! Marker search and bounded excerpt extraction
//!
//! This module contains pure text-scanning logic with no I/O dependencies.
//! Scanned files are treated as plain text: presence is a literal substring
//! containment test and sections are sliced by byte offset, never parsed.

use thiserror::Error;

/// Maximum number of characters of a section shown for inspection
pub const EXCERPT_LIMIT: usize = 500;

/// Strategy for locating where a section of interest ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndMarker<'a> {
    /// The section closes at the first occurrence of a literal token at or
    /// after the anchor; the token is part of the section
    Closer(&'a str),

    /// The section runs up to the next occurrence of a declaration keyword
    /// strictly after the anchor start; the keyword is not part of the
    /// section
    NextDecl(&'a str),
}

/// Errors that can occur while locating a section
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExcerptError {
    /// The extraction anchor does not occur in the text
    #[error("anchor not found: {0}")]
    AnchorNotFound(String),
}

/// A section of text located by marker search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'a> {
    /// Byte offset of the section start (first occurrence of the anchor)
    pub start: usize,

    /// Byte offset one past the section end
    pub end: usize,

    /// The section text
    pub text: &'a str,

    /// Whether the end marker was found; `false` means the section was
    /// clamped to the end of the text
    pub complete: bool,
}

/// Locate the section starting at the first occurrence of `anchor`
///
/// The close of the section is determined by the `end` strategy. If the end
/// marker never occurs in the searched range, the section extends to the
/// end of `content` and the returned excerpt is marked incomplete.
///
/// # Arguments
///
/// * `content` - The text to search
/// * `anchor` - Literal substring marking the section start
/// * `end` - Strategy used to locate the section close
pub fn extract<'a>(
    content: &'a str,
    anchor: &str,
    end: EndMarker<'_>,
) -> Result<Excerpt<'a>, ExcerptError> {
    let start = content
        .find(anchor)
        .ok_or_else(|| ExcerptError::AnchorNotFound(anchor.to_string()))?;

    let (stop, complete) = match end {
        EndMarker::Closer(token) => match content[start..].find(token) {
            Some(at) => (start + at + token.len(), true),
            None => (content.len(), false),
        },
        EndMarker::NextDecl(keyword) => {
            // Search strictly after the anchor start so an anchor that
            // begins with the keyword does not close its own section.
            let from = start + anchor.chars().next().map_or(1, char::len_utf8);
            match content.get(from..).and_then(|rest| rest.find(keyword)) {
                Some(at) => (from + at, true),
                None => (content.len(), false),
            }
        },
    };

    Ok(Excerpt {
        start,
        end: stop,
        text: &content[start..stop],
        complete,
    })
}

/// Truncate to at most `limit` characters, never splitting a character
#[must_use]
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((at, _)) => &text[..at],
        None => text,
    }
}
