//! Application constants for the TYDEX checker
//!
//! This module contains the format-level constants (section markers, keywords,
//! fixed column layouts), the built-in tolerance table, and default values
//! used throughout the application.

// =============================================================================
// Section Markers and Keywords
// =============================================================================

/// Two-character sentinel that introduces every section marker line
pub const MARKER_SENTINEL: &str = "**";

/// Keyword for the header metadata section
pub const KEYWORD_HEADER: &str = "HEADER";

/// Keyword for the free-text comments section
pub const KEYWORD_COMMENTS: &str = "COMMENTS";

/// Keyword for the declared test constants section
pub const KEYWORD_CONSTANTS: &str = "CONSTANTS";

/// Keyword for the measurement channel definitions section
pub const KEYWORD_MEASURCHANNELS: &str = "MEASURCHANNELS";

/// Keyword for the tabular measured data section
pub const KEYWORD_MEASURDATA: &str = "MEASURDATA";

/// Sections a well-formed file provides, in conventional file order
pub const REQUIRED_KEYWORDS: &[&str] = &[
    KEYWORD_HEADER,
    KEYWORD_COMMENTS,
    KEYWORD_CONSTANTS,
    KEYWORD_MEASURCHANNELS,
    KEYWORD_MEASURDATA,
];

// =============================================================================
// Fixed Column Layouts
// =============================================================================

/// Column ranges for each section's fixed-width fields
///
/// Ranges are half-open `[start, end)` character offsets into a line. Fields
/// with no fixed end run from a start column to the end of the line.
pub mod layout {
    use std::ops::Range;

    /// Key field shared by HEADER and CONSTANTS lines
    pub const KEY: Range<usize> = 0..10;

    /// Column at which HEADER and CONSTANTS values begin (open-ended)
    pub const VALUE_START: usize = 50;

    /// CONSTANTS description field
    pub const CONSTANT_DESCRIPTION: Range<usize> = 11..40;

    /// CONSTANTS units field
    pub const CONSTANT_UNITS: Range<usize> = 41..49;

    /// MEASURCHANNELS name field
    pub const CHANNEL_NAME: Range<usize> = 0..10;

    /// MEASURCHANNELS description field
    pub const CHANNEL_DESCRIPTION: Range<usize> = 10..39;

    /// MEASURCHANNELS units field
    pub const CHANNEL_UNITS: Range<usize> = 40..50;
}

// =============================================================================
// Validation Defaults
// =============================================================================

/// Built-in tolerance table
///
/// Maximum allowed mean deviation between a declared constant and the mean of
/// its same-named measured channel. Keys not listed here have no tolerance and
/// cannot be validated without a configuration override.
pub const DEFAULT_TOLERANCES: &[(&str, f64)] = &[
    ("FZW", 100.0),
    ("SLIPANGL", 0.25),
    ("INCLANGL", 1.6),
    ("INFLPRES", 1000.0),
];

/// Substring that marks a constant key as integer-valued
pub const INTEGER_KEY_MARKER: &str = "NUM";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default glob pattern for discovering TYDEX files under a directory
pub const DEFAULT_FILE_PATTERN: &str = "*.tdx";

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Config file name looked up under the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the platform config directory holding our config file
pub const CONFIG_DIR_NAME: &str = "tydex-checker";

// =============================================================================
// Helper Functions
// =============================================================================

/// Build the marker token for a keyword (`**KEYWORD`)
pub fn marker_for(keyword: &str) -> String {
    format!("{}{}", MARKER_SENTINEL, keyword)
}

/// Check whether a constant key takes integer coercion
pub fn is_integer_key(key: &str) -> bool {
    key.contains(INTEGER_KEY_MARKER)
}
