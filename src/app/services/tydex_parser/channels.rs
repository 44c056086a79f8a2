//! MEASURCHANNELS section parsing
//!
//! Channel lines define the named data series of the measurement table. The
//! order of definitions is authoritative: channel `i` owns column `i` of the
//! data section.

use super::fields::slice_columns;
use crate::app::models::Channel;
use crate::constants::{MARKER_SENTINEL, layout};
use tracing::debug;

/// Parse the MEASURCHANNELS section body into the ordered channel sequence
///
/// Lines whose name field is itself a keyword marker are skipped; they should
/// not occur inside an already-extracted section. Blank lines and lines with a
/// blank name field are skipped. Content beyond the units column is ignored.
pub fn parse_channels_section(section: &str) -> Vec<Channel> {
    let mut channels = Vec::new();

    for line in section.lines() {
        let name = slice_columns(line, layout::CHANNEL_NAME).trim();

        if name.starts_with(MARKER_SENTINEL) {
            debug!("Skipping stray marker line inside MEASURCHANNELS: '{}'", name);
            continue;
        }
        if name.is_empty() {
            continue;
        }

        channels.push(Channel {
            name: name.to_string(),
            description: slice_columns(line, layout::CHANNEL_DESCRIPTION)
                .trim()
                .to_string(),
            units: slice_columns(line, layout::CHANNEL_UNITS).trim().to_string(),
        });
    }

    channels
}
