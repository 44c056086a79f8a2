//! Fixed-width field slicing and typed value coercion
//!
//! TYDEX sections address fields by character column. These helpers slice a
//! column range out of a line without panicking on short lines or multi-byte
//! characters, and coerce constant value text into its typed representation.

use crate::app::models::ConstantValue;
use crate::constants::is_integer_key;
use std::ops::Range;

/// Byte offset of a character column, clamped to the end of the line
fn byte_offset(line: &str, column: usize) -> usize {
    line.char_indices()
        .nth(column)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}

/// Slice a `[start, end)` character column range out of a line
///
/// Lines shorter than the range yield a shortened or empty field, never an
/// error. No trimming is applied; that is the caller's choice per layout.
pub fn slice_columns(line: &str, range: Range<usize>) -> &str {
    let start = byte_offset(line, range.start);
    let end = byte_offset(line, range.end);
    &line[start..end]
}

/// Slice a line from a start column to the end of the line
pub fn slice_from(line: &str, start: usize) -> &str {
    &line[byte_offset(line, start)..]
}

/// Coerce a constant's value text according to its key
///
/// Keys containing "NUM" take the integer branch, all others the float
/// branch. A failed numeric parse degrades to the trimmed text; the two
/// branches never cascade into each other, so a fractional value under an
/// integer key stays text.
pub fn coerce_constant_value(key: &str, raw: &str) -> ConstantValue {
    let trimmed = raw.trim();

    if is_integer_key(key) {
        match trimmed.parse::<i64>() {
            Ok(value) => ConstantValue::Int(value),
            Err(_) => ConstantValue::Text(trimmed.to_string()),
        }
    } else {
        match trimmed.parse::<f64>() {
            Ok(value) => ConstantValue::Float(value),
            Err(_) => ConstantValue::Text(trimmed.to_string()),
        }
    }
}
