//! Core TYDEX parser implementation
//!
//! This module provides the main parser orchestration: reading a file (or
//! accepting a string), scanning the keyword markers, extracting the five
//! recognized sections, and assembling the immutable document together with
//! its parsing statistics.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::channels::parse_channels_section;
use super::comments::parse_comments_section;
use super::constants::parse_constants_section;
use super::data_table::parse_data_section;
use super::header::parse_header_section;
use super::section::{extract_section, scan_keywords};
use super::stats::{ParseResult, ParseStats};
use crate::app::models::{RawDocument, TydexDocument};
use crate::constants::{
    KEYWORD_COMMENTS, KEYWORD_CONSTANTS, KEYWORD_HEADER, KEYWORD_MEASURCHANNELS, KEYWORD_MEASURDATA,
};
use crate::{Error, Result};

/// Options controlling how strictly the parser treats irregular input
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// Fail rows whose token count differs from the channel count instead of
    /// zipping them index-wise
    pub strict_data_rows: bool,
}

/// TYDEX file parser
///
/// The parser is a factory: a successful parse yields a complete immutable
/// [`TydexDocument`] plus statistics, a structural failure yields an error
/// and no document. Per-field coercion failures degrade locally and never
/// abort the parse.
#[derive(Debug, Clone, Default)]
pub struct DocumentParser {
    options: ParseOptions,
}

impl DocumentParser {
    /// Create a parser with default (lenient) options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with explicit options
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Parse a TYDEX file from disk
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing TYDEX file: {}", path.display());

        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::io(format!("Failed to read file {}", path.display()), e))?;

        self.parse_text(content, Some(path.to_path_buf()))
    }

    /// Parse TYDEX content already held in memory
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        self.parse_text(text.to_string(), None)
    }

    /// Shared parse path over normalized text
    fn parse_text(&self, text: String, source: Option<PathBuf>) -> Result<ParseResult> {
        let text = normalize_newlines(text);
        let label = source
            .as_deref()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "<input>".to_string());

        let keywords = scan_keywords(&text);
        debug!("Found {} section markers in '{}'", keywords.len(), label);

        let headers = parse_header_section(extract_section(&text, KEYWORD_HEADER, &label)?);
        let comments = parse_comments_section(extract_section(&text, KEYWORD_COMMENTS, &label)?);
        let constants = parse_constants_section(extract_section(&text, KEYWORD_CONSTANTS, &label)?);
        let channels = parse_channels_section(extract_section(&text, KEYWORD_MEASURCHANNELS, &label)?);
        let table = parse_data_section(
            extract_section(&text, KEYWORD_MEASURDATA, &label)?,
            &channels,
            self.options.strict_data_rows,
            &label,
        )?;

        let stats = ParseStats {
            header_entries: headers.len(),
            comment_lines: comments.len(),
            constants_parsed: constants.len(),
            coercion_fallbacks: constants
                .values()
                .filter(|constant| !constant.value.is_numeric())
                .count(),
            channels_defined: channels.len(),
            data_rows: table.rows,
            ragged_rows: table.ragged_rows,
        };

        info!(
            "Parsed '{}': {} constants, {} channels, {} data rows",
            label, stats.constants_parsed, stats.channels_defined, stats.data_rows
        );

        Ok(ParseResult {
            document: TydexDocument {
                source,
                raw: RawDocument { text, keywords },
                headers,
                comments,
                constants,
                channels,
                data: table.data,
            },
            stats,
        })
    }
}

/// Normalize CRLF and bare CR line endings to LF
fn normalize_newlines(text: String) -> String {
    if text.contains('\r') {
        text.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        text
    }
}
