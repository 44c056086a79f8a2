//! Constant validation for parsed TYDEX documents
//!
//! Every key that appears both in the CONSTANTS section and as a measured
//! channel gets cross-checked: the mean signed deviation of the channel's
//! samples from the nominal value must stay within the key's tolerance.
//!
//! # Architecture
//!
//! - `tolerance` - built-in tolerance table with configuration overlays
//! - `report` - mismatch and warning structures returned to callers
//! - `validator` - the cross-checking pass over a document
//!
//! # Usage
//!
//! ```no_run
//! # fn example() -> tydex_checker::Result<()> {
//! use tydex_checker::app::services::tydex_parser::DocumentParser;
//! use tydex_checker::app::services::validator::ConstantValidator;
//!
//! let parser = DocumentParser::new();
//! let result = parser.parse_file(std::path::Path::new("Run01.tdx"))?;
//!
//! let validator = ConstantValidator::new();
//! let report = validator.verify(&result.document);
//! for mismatch in &report.mismatches {
//!     println!("{}: {}", result.document.display_name(), mismatch);
//! }
//! # Ok(())
//! # }
//! ```

pub mod report;
pub mod tolerance;
pub mod validator;

#[cfg(test)]
pub mod tests;

pub use report::{Mismatch, ValidationReport, ValidationWarning};
pub use tolerance::ToleranceTable;
pub use validator::ConstantValidator;
