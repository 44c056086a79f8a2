//! MEASURDATA section parsing
//!
//! Data rows are whitespace-separated float tokens. Token `i` of each row
//! belongs to channel `i`; the assembled table maps channel names to their
//! column of samples.

use crate::app::models::Channel;
use crate::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Parsed MEASURDATA section: the assembled table plus row irregularities
#[derive(Debug, Clone, Default)]
pub struct DataSection {
    /// Channel name → ordered column of samples
    pub data: HashMap<String, Vec<f64>>,

    /// Number of non-blank data rows parsed
    pub rows: usize,

    /// Rows whose token count differed from the channel count (lenient mode)
    pub ragged_rows: usize,
}

/// Parse the MEASURDATA section body against the declared channel sequence
///
/// Every channel gets a column, empty when no row reaches it. A token that
/// does not parse as a float always fails the row. In lenient mode a row
/// whose token count differs from the channel count is zipped index-wise
/// (short rows do not extend the trailing channels, excess tokens are
/// dropped) and counted as ragged; in strict mode it fails the parse. Blank
/// lines are skipped. The `source` label is used in error messages only.
pub fn parse_data_section(
    section: &str,
    channels: &[Channel],
    strict: bool,
    source: &str,
) -> Result<DataSection> {
    let mut table = DataSection {
        data: channels
            .iter()
            .map(|channel| (channel.name.clone(), Vec::new()))
            .collect(),
        ..DataSection::default()
    };

    for (index, line) in section.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let row_number = index + 1;

        let tokens = line
            .split_whitespace()
            .map(|token| {
                token.parse::<f64>().map_err(|_| {
                    Error::malformed_data_row(
                        source,
                        row_number,
                        format!("invalid float token '{}'", token),
                    )
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if tokens.len() != channels.len() {
            if strict {
                return Err(Error::malformed_data_row(
                    source,
                    row_number,
                    format!("expected {} values, found {}", channels.len(), tokens.len()),
                ));
            }
            debug!(
                "Ragged data row {} in '{}': expected {} values, found {}",
                row_number,
                source,
                channels.len(),
                tokens.len()
            );
            table.ragged_rows += 1;
        }

        for (channel, value) in channels.iter().zip(tokens.iter()) {
            if let Some(column) = table.data.get_mut(&channel.name) {
                column.push(*value);
            }
        }

        table.rows += 1;
    }

    Ok(table)
}
