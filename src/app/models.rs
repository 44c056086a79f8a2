//! Data models for TYDEX processing
//!
//! This module contains the core data structures representing a parsed TYDEX
//! file: typed constant values, measurement channel definitions, and the
//! aggregate document assembled by the parser.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

// =============================================================================
// Constant Values
// =============================================================================

/// Typed value of a declared test constant
///
/// Coercion is ordered and key-driven: keys containing "NUM" are parsed as
/// integers, all other keys as floats, and values that fail their numeric
/// parse degrade to the raw trimmed text. Coercion failure is a fallback,
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConstantValue {
    /// Integer-valued constant (keys containing "NUM")
    Int(i64),

    /// Floating-point constant
    Float(f64),

    /// Unconvertible value kept as trimmed text
    Text(String),
}

impl ConstantValue {
    /// Numeric view of the value, `None` for text fallbacks
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConstantValue::Int(v) => Some(*v as f64),
            ConstantValue::Float(v) => Some(*v),
            ConstantValue::Text(_) => None,
        }
    }

    /// Whether the value coerced to a numeric type
    pub fn is_numeric(&self) -> bool {
        !matches!(self, ConstantValue::Text(_))
    }
}

impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Int(v) => write!(f, "{}", v),
            ConstantValue::Float(v) => write!(f, "{}", v),
            ConstantValue::Text(v) => write!(f, "{}", v),
        }
    }
}

/// A declared test constant with its descriptive metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Constant {
    /// Typed nominal value
    pub value: ConstantValue,

    /// Human-readable description field
    pub description: String,

    /// Unit text (metadata only, no conversion logic)
    pub units: String,
}

// =============================================================================
// Measurement Channels
// =============================================================================

/// A measurement channel definition
///
/// Position in the channel sequence is authoritative: channel `i` receives
/// token `i` of every data row. Reordering channels without reordering the
/// data corrupts the table, which is a file-format invariant rather than
/// something this structure enforces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Channel {
    /// Channel identifier (first 10 columns, trimmed)
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Unit text
    pub units: String,
}

// =============================================================================
// Raw Document
// =============================================================================

/// The raw file text plus the section markers found in it, in file order
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawDocument {
    /// Full file text, newline-normalized
    #[serde(skip)]
    pub text: String,

    /// `**KEYWORD` tokens in order of appearance
    pub keywords: Vec<String>,
}

impl RawDocument {
    /// Check whether a keyword marker was present in the file
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords.iter().any(|k| k == keyword)
    }
}

// =============================================================================
// Tydex Document
// =============================================================================

/// Aggregate of all parsed sections of a single TYDEX file
///
/// Constructed once by the parser from a complete file read; immutable after
/// construction. A structurally broken file yields a parse error, never a
/// partial document.
#[derive(Debug, Clone, Serialize)]
pub struct TydexDocument {
    /// Source path when parsed from a file on disk
    pub source: Option<PathBuf>,

    /// Raw text and the scanned keyword markers
    pub raw: RawDocument,

    /// HEADER entries, key → value (value column kept untrimmed)
    pub headers: HashMap<String, String>,

    /// COMMENTS lines in original order, blank lines preserved
    pub comments: Vec<String>,

    /// CONSTANTS entries, key → typed constant
    pub constants: HashMap<String, Constant>,

    /// MEASURCHANNELS entries in declaration order
    pub channels: Vec<Channel>,

    /// MEASURDATA samples, channel name → column of values
    pub data: HashMap<String, Vec<f64>>,
}

impl TydexDocument {
    /// File name for messages, or a placeholder when parsed from a string
    pub fn display_name(&self) -> String {
        self.source
            .as_deref()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<input>".to_string())
    }

    /// Channel names in declaration order
    pub fn channel_names(&self) -> Vec<&str> {
        self.channels.iter().map(|c| c.name.as_str()).collect()
    }

    /// Samples recorded for a channel, `None` if the channel has no column
    pub fn samples(&self, name: &str) -> Option<&[f64]> {
        self.data.get(name).map(Vec::as_slice)
    }

    /// Header value for a key
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Constant entry for a key
    pub fn constant(&self, key: &str) -> Option<&Constant> {
        self.constants.get(key)
    }

    /// Number of data rows (length of the longest channel column)
    pub fn row_count(&self) -> usize {
        self.data.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Mean signed difference between a channel's samples and the same-named
    /// declared constant
    ///
    /// The deviation is signed, not absolute and not relative: measured
    /// values sitting below the nominal produce a negative result. Returns
    /// `None` when the key has no numeric constant, no data column, or an
    /// empty column.
    pub fn average_deviation(&self, key: &str) -> Option<f64> {
        let nominal = self.constants.get(key)?.value.as_f64()?;
        let samples = self.data.get(key)?;
        if samples.is_empty() {
            return None;
        }

        let total: f64 = samples.iter().map(|sample| sample - nominal).sum();
        Some(total / samples.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_document() -> TydexDocument {
        let mut constants = HashMap::new();
        constants.insert(
            "FZW".to_string(),
            Constant {
                value: ConstantValue::Float(4000.0),
                description: "Vertical load".to_string(),
                units: "N".to_string(),
            },
        );
        constants.insert(
            "NUMPTS".to_string(),
            Constant {
                value: ConstantValue::Int(3),
                description: "Number of points".to_string(),
                units: "-".to_string(),
            },
        );
        constants.insert(
            "TESTOP".to_string(),
            Constant {
                value: ConstantValue::Text("J SMITH".to_string()),
                description: "Test operator".to_string(),
                units: "-".to_string(),
            },
        );

        let channels = vec![
            Channel {
                name: "FZW".to_string(),
                description: "Vertical load".to_string(),
                units: "N".to_string(),
            },
            Channel {
                name: "SLIPANGL".to_string(),
                description: "Slip angle".to_string(),
                units: "deg".to_string(),
            },
        ];

        let mut data = HashMap::new();
        data.insert("FZW".to_string(), vec![4010.0, 3990.0, 4000.0]);
        data.insert("SLIPANGL".to_string(), vec![0.1, 0.2, 0.3]);

        TydexDocument {
            source: Some(PathBuf::from("/runs/Run01/test.tdx")),
            raw: RawDocument::default(),
            headers: HashMap::from([("TESTID".to_string(), "RUN001".to_string())]),
            comments: vec!["first".to_string(), String::new(), "last".to_string()],
            constants,
            channels,
            data,
        }
    }

    mod constant_value_tests {
        use super::*;

        #[test]
        fn test_numeric_views() {
            assert_eq!(ConstantValue::Int(120).as_f64(), Some(120.0));
            assert_eq!(ConstantValue::Float(0.25).as_f64(), Some(0.25));
            assert_eq!(ConstantValue::Text("n/a".to_string()).as_f64(), None);

            assert!(ConstantValue::Int(1).is_numeric());
            assert!(ConstantValue::Float(1.0).is_numeric());
            assert!(!ConstantValue::Text("x".to_string()).is_numeric());
        }

        #[test]
        fn test_display() {
            assert_eq!(ConstantValue::Int(120).to_string(), "120");
            assert_eq!(ConstantValue::Float(0.25).to_string(), "0.25");
            assert_eq!(
                ConstantValue::Text("RADIAL".to_string()).to_string(),
                "RADIAL"
            );
        }

        #[test]
        fn test_json_serialization_is_untagged() {
            let int_json = serde_json::to_string(&ConstantValue::Int(120)).unwrap();
            assert_eq!(int_json, "120");

            let text_json =
                serde_json::to_string(&ConstantValue::Text("RADIAL".to_string())).unwrap();
            assert_eq!(text_json, "\"RADIAL\"");
        }
    }

    mod document_tests {
        use super::*;

        #[test]
        fn test_display_name_uses_basename() {
            let document = create_test_document();
            assert_eq!(document.display_name(), "test.tdx");
        }

        #[test]
        fn test_display_name_placeholder_without_source() {
            let mut document = create_test_document();
            document.source = None;
            assert_eq!(document.display_name(), "<input>");
        }

        #[test]
        fn test_channel_names_preserve_declaration_order() {
            let document = create_test_document();
            assert_eq!(document.channel_names(), vec!["FZW", "SLIPANGL"]);
        }

        #[test]
        fn test_sample_access() {
            let document = create_test_document();
            assert_eq!(document.samples("FZW"), Some(&[4010.0, 3990.0, 4000.0][..]));
            assert_eq!(document.samples("MISSING"), None);
        }

        #[test]
        fn test_row_count() {
            let document = create_test_document();
            assert_eq!(document.row_count(), 3);

            let mut empty = create_test_document();
            empty.data.clear();
            assert_eq!(empty.row_count(), 0);
        }

        #[test]
        fn test_average_deviation_zero_for_matching_samples() {
            let mut document = create_test_document();
            document
                .data
                .insert("FZW".to_string(), vec![4000.0, 4000.0, 4000.0]);
            assert_eq!(document.average_deviation("FZW"), Some(0.0));
        }

        #[test]
        fn test_average_deviation_is_signed() {
            let mut document = create_test_document();
            document
                .data
                .insert("FZW".to_string(), vec![3900.0, 3900.0, 3900.0]);
            assert_eq!(document.average_deviation("FZW"), Some(-100.0));
        }

        #[test]
        fn test_average_deviation_missing_inputs() {
            let document = create_test_document();

            // No channel data for NUMPTS, no constant for SLIPANGL
            assert_eq!(document.average_deviation("NUMPTS"), None);
            assert_eq!(document.average_deviation("SLIPANGL"), None);

            // Text-valued constant is not numeric
            assert_eq!(document.average_deviation("TESTOP"), None);
        }

        #[test]
        fn test_average_deviation_empty_column() {
            let mut document = create_test_document();
            document.data.insert("FZW".to_string(), Vec::new());
            assert_eq!(document.average_deviation("FZW"), None);
        }

        #[test]
        fn test_keyword_lookup() {
            let raw = RawDocument {
                text: String::new(),
                keywords: vec!["HEADER".to_string(), "MEASURDATA".to_string()],
            };
            assert!(raw.has_keyword("HEADER"));
            assert!(!raw.has_keyword("CONSTANTS"));
        }
    }
}
