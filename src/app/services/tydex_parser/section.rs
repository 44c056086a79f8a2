//! Section extraction from raw TYDEX text
//!
//! TYDEX files are organized into sections introduced by marker lines of the
//! form `**KEYWORD`. This module locates a keyword's marker and returns the
//! text strictly between the end of that marker line and the start of the
//! next marker, or the end of the file for the last section.

use crate::constants::{MARKER_SENTINEL, marker_for};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Compiled pattern for keyword marker lines (`**KEYWORD` + newline)
static KEYWORD_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Returns the cached keyword marker pattern
fn keyword_pattern() -> &'static Regex {
    KEYWORD_PATTERN
        .get_or_init(|| Regex::new(r"\*\*([A-Z]+)\n").expect("Invalid keyword marker pattern"))
}

/// Scan the full text for keyword markers, in order of appearance
///
/// Only uppercase-word markers terminated by a newline count; the returned
/// tokens are the keywords without their `**` sentinel.
pub fn scan_keywords(text: &str) -> Vec<String> {
    keyword_pattern()
        .captures_iter(text)
        .map(|capture| capture[1].to_string())
        .collect()
}

/// Extract the body of a keyword's section from the full file text
///
/// The returned slice starts immediately after the marker line's newline and
/// ends immediately before the next `**` sentinel, or at end-of-text when the
/// keyword introduces the last section. The `source` label is used in error
/// messages only.
pub fn extract_section<'a>(text: &'a str, keyword: &str, source: &str) -> Result<&'a str> {
    let marker_line = format!("{}\n", marker_for(keyword));

    let marker_start = text
        .find(&marker_line)
        .ok_or_else(|| Error::section_not_found(keyword, source))?;

    let body_start = marker_start + marker_line.len();

    let body_end = match text[body_start..].find(MARKER_SENTINEL) {
        Some(offset) => body_start + offset,
        None => text.len(),
    };

    Ok(&text[body_start..body_end])
}
