//! TYDEX parser for tire test data files
//!
//! This module provides a parser for the fixed-column, section-delimited
//! TYDEX format. A file is read in full, its `**KEYWORD` markers located,
//! and each recognized section parsed into a typed piece of the document
//! model. Structural problems fail the parse; per-field problems degrade
//! locally and are counted in the statistics.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`section`] - Keyword marker scanning and section extraction
//! - [`fields`] - Fixed-width column slicing and typed value coercion
//! - [`header`] - HEADER key/value parsing
//! - [`comments`] - COMMENTS line collection
//! - [`constants`] - CONSTANTS typed entry parsing
//! - [`channels`] - MEASURCHANNELS definition parsing
//! - [`data_table`] - MEASURDATA table assembly
//! - [`parser`] - Parse orchestration and file handling
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use tydex_checker::app::services::tydex_parser::DocumentParser;
//!
//! # fn example() -> tydex_checker::Result<()> {
//! let parser = DocumentParser::new();
//! let result = parser.parse_file(std::path::Path::new("Run01.tdx"))?;
//!
//! println!(
//!     "Parsed {} channels and {} data rows",
//!     result.stats.channels_defined, result.stats.data_rows
//! );
//! # Ok(())
//! # }
//! ```

pub mod channels;
pub mod comments;
pub mod constants;
pub mod data_table;
pub mod fields;
pub mod header;
pub mod parser;
pub mod section;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{DocumentParser, ParseOptions};
pub use stats::{ParseResult, ParseStats};
