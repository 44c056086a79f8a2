//! Parsing statistics and result structures for TYDEX processing
//!
//! This module provides types for tracking what a parse produced and how
//! much of the input degraded, and for pairing a parsed document with its
//! statistics for downstream reporting.

use crate::app::models::TydexDocument;

/// Parsing result with the assembled document and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The fully parsed document
    pub document: TydexDocument,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of HEADER entries parsed
    pub header_entries: usize,

    /// Number of COMMENTS lines (blank lines included)
    pub comment_lines: usize,

    /// Number of CONSTANTS entries parsed
    pub constants_parsed: usize,

    /// Constants whose value degraded to text instead of a numeric type
    pub coercion_fallbacks: usize,

    /// Number of MEASURCHANNELS definitions parsed
    pub channels_defined: usize,

    /// Number of non-blank MEASURDATA rows parsed
    pub data_rows: usize,

    /// Data rows whose token count differed from the channel count
    pub ragged_rows: usize,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self {
            header_entries: 0,
            comment_lines: 0,
            constants_parsed: 0,
            coercion_fallbacks: 0,
            channels_defined: 0,
            data_rows: 0,
            ragged_rows: 0,
        }
    }

    /// Check whether the parse produced no degraded fields or rows
    pub fn is_clean(&self) -> bool {
        self.coercion_fallbacks == 0 && self.ragged_rows == 0
    }
}

impl Default for ParseStats {
    fn default() -> Self {
        Self::new()
    }
}
