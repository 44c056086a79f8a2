//! Tests for the constant validation service

mod report_tests;

use std::collections::HashMap;

use crate::app::models::{Channel, Constant, ConstantValue, RawDocument, TydexDocument};

/// Builds a document with the given constants, channels, and data columns
///
/// Headers and comments stay empty; validation never looks at them.
pub fn create_test_document(
    constants: &[(&str, ConstantValue)],
    channels: &[&str],
    data: &[(&str, &[f64])],
) -> TydexDocument {
    TydexDocument {
        source: None,
        raw: RawDocument {
            text: String::new(),
            keywords: Vec::new(),
        },
        headers: HashMap::new(),
        comments: Vec::new(),
        constants: constants
            .iter()
            .map(|(key, value)| {
                (
                    key.to_string(),
                    Constant {
                        value: value.clone(),
                        description: String::new(),
                        units: String::new(),
                    },
                )
            })
            .collect(),
        channels: channels
            .iter()
            .map(|name| Channel {
                name: name.to_string(),
                description: String::new(),
                units: String::new(),
            })
            .collect(),
        data: data
            .iter()
            .map(|(key, samples)| (key.to_string(), samples.to_vec()))
            .collect(),
    }
}
