//! Tests for validation report structures

use crate::app::models::ConstantValue;
use crate::app::services::validator::{Mismatch, ValidationReport, ValidationWarning};

#[test]
fn test_mismatch_display_format() {
    let mismatch = Mismatch {
        key: "FZW".to_string(),
        deviation: 151.67,
        tolerance: 100.0,
        nominal: ConstantValue::Float(4000.0),
    };

    assert_eq!(
        mismatch.to_string(),
        "FZW        does not match within 100 (err=151.7), nominal = 4000"
    );
}

#[test]
fn test_mismatch_display_pads_short_keys() {
    let mismatch = Mismatch {
        key: "SLIPANGL".to_string(),
        deviation: 0.3,
        tolerance: 0.25,
        nominal: ConstantValue::Float(0.0),
    };

    // Key column is ten characters wide
    assert!(mismatch.to_string().starts_with("SLIPANGL   does not match"));
}

#[test]
fn test_warning_display() {
    let unknown = ValidationWarning::UnknownTolerance {
        key: "RIMWIDTH".to_string(),
    };
    assert_eq!(
        unknown.to_string(),
        "no tolerance defined for 'RIMWIDTH', skipped"
    );

    let no_data = ValidationWarning::NoData {
        key: "FZW".to_string(),
    };
    assert_eq!(no_data.to_string(), "no data for FZW");

    let non_numeric = ValidationWarning::NonNumericConstant {
        key: "TYRENAME".to_string(),
        value: "205/55R16".to_string(),
    };
    assert_eq!(
        non_numeric.to_string(),
        "constant 'TYRENAME' is not numeric ('205/55R16'), skipped"
    );
}

#[test]
fn test_warning_key_accessor() {
    let warning = ValidationWarning::NoData {
        key: "FZW".to_string(),
    };
    assert_eq!(warning.key(), "FZW");
}

#[test]
fn test_empty_report_is_clean() {
    let report = ValidationReport::default();

    assert!(report.is_clean());
    assert!(!report.has_mismatches());
}

#[test]
fn test_report_with_mismatch_is_not_clean() {
    let mut report = ValidationReport::default();
    report.keys_checked.push("FZW".to_string());
    report.mismatches.push(Mismatch {
        key: "FZW".to_string(),
        deviation: 150.0,
        tolerance: 100.0,
        nominal: ConstantValue::Float(4000.0),
    });

    assert!(!report.is_clean());
    assert!(report.has_mismatches());
}

#[test]
fn test_report_with_warning_is_not_clean() {
    let mut report = ValidationReport::default();
    report.warnings.push(ValidationWarning::NoData {
        key: "FZW".to_string(),
    });

    assert!(!report.is_clean());
    assert!(!report.has_mismatches());
}

#[test]
fn test_warning_serializes_with_kind_tag() {
    let warning = ValidationWarning::UnknownTolerance {
        key: "RIMWIDTH".to_string(),
    };
    let json = serde_json::to_value(&warning).unwrap();

    assert_eq!(json["kind"], "unknown_tolerance");
    assert_eq!(json["key"], "RIMWIDTH");
}

#[test]
fn test_mismatch_serializes_nominal_as_plain_value() {
    let mismatch = Mismatch {
        key: "NUMPTS".to_string(),
        deviation: 2.0,
        tolerance: 1.0,
        nominal: ConstantValue::Int(3),
    };
    let json = serde_json::to_value(&mismatch).unwrap();

    // Untagged value serialization keeps the JSON flat
    assert_eq!(json["nominal"], 3);
    assert_eq!(json["tolerance"], 1.0);
}
