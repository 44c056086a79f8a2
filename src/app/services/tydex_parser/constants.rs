//! CONSTANTS section parsing
//!
//! Constant lines carry a key in the first ten columns, a description and a
//! units field in the middle, and the value text from column 50 onward. The
//! value is coerced per the key's rule; coercion failure degrades to text and
//! never fails the parse.

use super::fields::{coerce_constant_value, slice_columns, slice_from};
use crate::app::models::Constant;
use crate::constants::layout;
use std::collections::HashMap;
use tracing::debug;

/// Parse the CONSTANTS section body into a key → constant mapping
///
/// Lines with a blank key field (including blank lines) are skipped. A
/// repeated key keeps the last entry seen.
pub fn parse_constants_section(section: &str) -> HashMap<String, Constant> {
    let mut constants = HashMap::new();

    for line in section.lines() {
        let key = slice_columns(line, layout::KEY).trim();
        if key.is_empty() {
            continue;
        }

        let description = slice_columns(line, layout::CONSTANT_DESCRIPTION).trim();
        let units = slice_columns(line, layout::CONSTANT_UNITS).trim();
        let value = coerce_constant_value(key, slice_from(line, layout::VALUE_START));

        if !value.is_numeric() {
            debug!("Constant '{}' kept as text: '{}'", key, value);
        }

        constants.insert(
            key.to_string(),
            Constant {
                value,
                description: description.to_string(),
                units: units.to_string(),
            },
        );
    }

    constants
}
