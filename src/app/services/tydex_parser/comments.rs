//! COMMENTS section parsing
//!
//! Comments are free text with no per-line structure. Order is meaningful and
//! blank lines inside the section are preserved.

/// Split the COMMENTS section body into its lines, in original order
pub fn parse_comments_section(section: &str) -> Vec<String> {
    section.lines().map(str::to_string).collect()
}
