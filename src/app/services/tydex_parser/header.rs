//! HEADER section parsing
//!
//! Header lines carry a key in the first ten columns and a free-form value
//! from column 50 onward. Values are stored untrimmed; short lines yield an
//! empty value.

use super::fields::{slice_columns, slice_from};
use crate::constants::layout;
use std::collections::HashMap;

/// Parse the HEADER section body into a key → value mapping
///
/// Lines with a blank key field (including blank lines) are skipped. A
/// repeated key keeps the last value seen.
pub fn parse_header_section(section: &str) -> HashMap<String, String> {
    let mut headers = HashMap::new();

    for line in section.lines() {
        let key = slice_columns(line, layout::KEY).trim();
        if key.is_empty() {
            continue;
        }

        let value = slice_from(line, layout::VALUE_START);
        headers.insert(key.to_string(), value.to_string());
    }

    headers
}
