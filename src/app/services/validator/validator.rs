//! Constant-versus-data cross-checking

use std::collections::HashSet;

use tracing::{debug, warn};

use super::report::{Mismatch, ValidationReport, ValidationWarning};
use super::tolerance::ToleranceTable;
use crate::app::models::TydexDocument;

/// Cross-checks declared constants against measured channel data
///
/// A key is checked when it appears both as a constant and as a channel
/// name. For each such key the validator takes the mean signed deviation of
/// the samples from the nominal value and compares it against the key's
/// tolerance. The comparison is one-sided: only a positive mean deviation
/// beyond the tolerance counts as a mismatch, so a channel that reads low
/// never flags regardless of magnitude.
#[derive(Debug, Clone, Default)]
pub struct ConstantValidator {
    tolerances: ToleranceTable,
}

impl ConstantValidator {
    /// Validator with the built-in tolerance table
    pub fn new() -> Self {
        Self {
            tolerances: ToleranceTable::new(),
        }
    }

    /// Validator with a caller-supplied tolerance table
    pub fn with_tolerances(tolerances: ToleranceTable) -> Self {
        Self { tolerances }
    }

    /// Check every key shared between constants and channels
    ///
    /// Keys that cannot be fully checked degrade to warnings in the report;
    /// validation itself never fails.
    pub fn verify(&self, document: &TydexDocument) -> ValidationReport {
        let mut report = ValidationReport::default();
        let mut seen: HashSet<&str> = HashSet::new();

        for channel in &document.channels {
            let key = channel.name.as_str();
            if !seen.insert(key) {
                continue;
            }
            let Some(constant) = document.constant(key) else {
                continue;
            };
            report.keys_checked.push(key.to_string());

            if !constant.value.is_numeric() {
                warn!(
                    "{}: constant '{}' is not numeric, skipping",
                    document.display_name(),
                    key
                );
                report.warnings.push(ValidationWarning::NonNumericConstant {
                    key: key.to_string(),
                    value: constant.value.to_string(),
                });
                continue;
            }

            // Numeric constant, so a missing deviation means the channel
            // column is absent or empty.
            let Some(deviation) = document.average_deviation(key) else {
                warn!("{}: no data for {}", document.display_name(), key);
                report.warnings.push(ValidationWarning::NoData {
                    key: key.to_string(),
                });
                continue;
            };

            let tolerance = match self.tolerances.lookup(key) {
                Ok(tolerance) => tolerance,
                Err(error) => {
                    warn!("{}: {}", document.display_name(), error);
                    report.warnings.push(ValidationWarning::UnknownTolerance {
                        key: key.to_string(),
                    });
                    continue;
                }
            };

            if deviation > tolerance {
                debug!(
                    "{}: '{}' out of tolerance (err={:.1}, allowed={})",
                    document.display_name(),
                    key,
                    deviation,
                    tolerance
                );
                report.mismatches.push(Mismatch {
                    key: key.to_string(),
                    deviation,
                    tolerance,
                    nominal: constant.value.clone(),
                });
            } else {
                debug!(
                    "{}: '{}' within tolerance (err={:.1}, allowed={})",
                    document.display_name(),
                    key,
                    deviation,
                    tolerance
                );
            }
        }

        report
    }
}
