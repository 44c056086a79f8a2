//! Per-key tolerance lookup
//!
//! Tolerances bound the mean deviation allowed between a declared constant
//! and its measured channel. The built-in table covers the keys the test rigs
//! regulate; configuration may overlay additional or tighter entries.

use crate::constants::DEFAULT_TOLERANCES;
use crate::{Error, Result};
use std::collections::HashMap;

/// Maximum allowed mean deviation per constant key
///
/// Lookup of a key with no entry is an explicit error, never a panic;
/// callers decide whether to surface or downgrade it.
#[derive(Debug, Clone)]
pub struct ToleranceTable {
    entries: HashMap<String, f64>,
}

impl ToleranceTable {
    /// Table holding only the built-in defaults
    pub fn new() -> Self {
        Self {
            entries: DEFAULT_TOLERANCES
                .iter()
                .map(|(key, tolerance)| (key.to_string(), *tolerance))
                .collect(),
        }
    }

    /// Overlay entries on top of the built-in defaults
    ///
    /// Overrides replace default entries with the same key and introduce
    /// tolerances for keys the defaults do not cover.
    pub fn with_overrides(overrides: &HashMap<String, f64>) -> Self {
        let mut table = Self::new();
        for (key, tolerance) in overrides {
            table.entries.insert(key.clone(), *tolerance);
        }
        table
    }

    /// Look up the allowed deviation for a key
    pub fn lookup(&self, key: &str) -> Result<f64> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| Error::unknown_tolerance_key(key))
    }

    /// Whether the table has an entry for a key
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ToleranceTable {
    fn default() -> Self {
        Self::new()
    }
}
