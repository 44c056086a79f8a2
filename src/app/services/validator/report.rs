//! Validation outcome structures
//!
//! Validation never fails on out-of-tolerance data; everything it observes
//! comes back in a [`ValidationReport`] and the caller chooses how to
//! present it.

use crate::app::models::ConstantValue;
use serde::Serialize;
use std::fmt;

/// A constant whose measured channel drifted beyond its tolerance
#[derive(Debug, Clone, Serialize)]
pub struct Mismatch {
    /// Constant key and channel name
    pub key: String,
    /// Mean signed deviation of the samples from the nominal value
    pub deviation: f64,
    /// Allowed deviation for this key
    pub tolerance: f64,
    /// Declared nominal value
    pub nominal: ConstantValue,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} does not match within {} (err={:.1}), nominal = {}",
            self.key, self.tolerance, self.deviation, self.nominal
        )
    }
}

/// A non-fatal condition observed while checking one key
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationWarning {
    /// Key has a constant and a channel but no tolerance entry
    UnknownTolerance { key: String },
    /// Key's channel column holds no samples
    NoData { key: String },
    /// Key's constant did not coerce to a number
    NonNumericConstant { key: String, value: String },
}

impl ValidationWarning {
    /// The constant key the warning applies to
    pub fn key(&self) -> &str {
        match self {
            Self::UnknownTolerance { key } => key,
            Self::NoData { key } => key,
            Self::NonNumericConstant { key, .. } => key,
        }
    }
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownTolerance { key } => {
                write!(f, "no tolerance defined for '{key}', skipped")
            }
            Self::NoData { key } => write!(f, "no data for {key}"),
            Self::NonNumericConstant { key, value } => {
                write!(f, "constant '{key}' is not numeric ('{value}'), skipped")
            }
        }
    }
}

/// Everything the validator observed for one document
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    /// Keys that had both a constant and a matching channel, in channel order
    pub keys_checked: Vec<String>,
    /// Constants whose data drifted beyond tolerance
    pub mismatches: Vec<Mismatch>,
    /// Keys that could not be fully checked
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    /// True when every checked key passed without warnings
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.warnings.is_empty()
    }

    /// True when at least one key drifted beyond tolerance
    pub fn has_mismatches(&self) -> bool {
        !self.mismatches.is_empty()
    }
}
