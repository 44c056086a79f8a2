//! Test utilities and fixture builders for TYDEX parser testing
//!
//! This module provides line builders that produce correctly padded
//! fixed-width TYDEX lines, plus complete document fixtures shared across
//! the test modules.

use std::io::Write;
use tempfile::NamedTempFile;

mod header_tests;

/// Format a HEADER line: key padded into the 50-column prefix, value after
pub fn header_line(key: &str, value: &str) -> String {
    format!("{:<50}{}\n", key, value)
}

/// Format a CONSTANTS line with the fixed description/units/value columns
pub fn constant_line(key: &str, description: &str, units: &str, value: &str) -> String {
    format!("{:<10} {:<29} {:<8} {}\n", key, description, units, value)
}

/// Format a MEASURCHANNELS line with the fixed description/units columns
pub fn channel_line(name: &str, description: &str, units: &str) -> String {
    format!("{:<10}{:<29} {:<10}\n", name, description, units)
}

/// Helper to create a complete, well-formed TYDEX document
///
/// Three channels (FZW, SLIPANGL, FYW) with three data rows; constants
/// overlap the first two channels. TYRENAME deliberately carries a
/// non-numeric value to exercise the text fallback.
pub fn create_test_tydex() -> String {
    let mut text = String::from("**HEADER\n");
    text.push_str(&header_line("RELEASE", "1.3"));
    text.push_str(&header_line("TESTID", "RUN001"));
    text.push_str(&header_line("SUPPLIER", "SRUSA"));
    text.push_str("**COMMENTS\n");
    text.push_str("Cornering stiffness sweep at nominal load\n");
    text.push('\n');
    text.push_str("Rig: Flat-Trac III\n");
    text.push_str("**CONSTANTS\n");
    text.push_str(&constant_line("NUMPTS", "Number of data points", "-", "3"));
    text.push_str(&constant_line("FZW", "Nominal vertical load", "N", "4000.0"));
    text.push_str(&constant_line("SLIPANGL", "Nominal slip angle", "deg", "0.0"));
    text.push_str(&constant_line("INFLPRES", "Inflation pressure", "Pa", "220000.0"));
    text.push_str(&constant_line("TYRENAME", "Tyre designation", "-", "205/55R16"));
    text.push_str("**MEASURCHANNELS\n");
    text.push_str(&channel_line("FZW", "Vertical load", "N"));
    text.push_str(&channel_line("SLIPANGL", "Slip angle", "deg"));
    text.push_str(&channel_line("FYW", "Lateral force", "N"));
    text.push_str("**MEASURDATA\n");
    text.push_str("4010.0 0.1 1500.0\n");
    text.push_str("3990.0 0.2 1520.0\n");
    text.push_str("4000.0 0.3 1540.0\n");
    text
}

/// Helper to create a structurally complete document with empty sections
pub fn create_minimal_tydex() -> String {
    "**HEADER\n**COMMENTS\n**CONSTANTS\n**MEASURCHANNELS\n**MEASURDATA\n".to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
