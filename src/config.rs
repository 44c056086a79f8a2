//! Configuration management and validation.
//!
//! Provides configuration structures for processing parameters,
//! validation behavior, and tolerance overrides, loaded from an
//! optional TOML file and adjusted by command-line flags.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::services::validator::ToleranceTable;
use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FILE_PATTERN, DEFAULT_LOG_LEVEL};
use crate::{Error, Result};

/// Global configuration for TYDEX checking
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub processing: ProcessingConfig,

    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// File discovery and concurrency settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Number of worker tasks for concurrent file checking
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Glob pattern matched against file names during directory discovery
    #[serde(default = "default_file_pattern")]
    pub file_pattern: String,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            file_pattern: default_file_pattern(),
        }
    }
}

/// Parsing strictness and tolerance overrides
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Fail files whose data rows disagree with the channel count
    #[serde(default)]
    pub strict_data_rows: bool,

    /// Tolerance entries overlaid on the built-in table
    #[serde(default)]
    pub tolerances: HashMap<String, f64>,
}

/// Logging verbosity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// Default values

fn default_workers() -> usize {
    num_cpus::get()
}

fn default_file_pattern() -> String {
    DEFAULT_FILE_PATTERN.to_string()
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Config {
    /// Load configuration, preferring an explicit path over the default location
    ///
    /// With an explicit path, a missing or malformed file is an error. With
    /// no path, a missing file at the default location quietly falls back to
    /// the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read config file: {}", path.display()),
                e,
            )
        })?;
        let config: Self = toml::from_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        config.validate()?;
        Ok(config)
    }

    /// Platform config location: `<config dir>/tydex-checker/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Check the configuration for values that cannot work
    pub fn validate(&self) -> Result<()> {
        if self.processing.workers == 0 {
            return Err(Error::configuration("workers must be at least 1"));
        }
        if self.processing.file_pattern.is_empty() {
            return Err(Error::configuration("file_pattern must not be empty"));
        }
        for (key, tolerance) in &self.validation.tolerances {
            if *tolerance <= 0.0 {
                return Err(Error::configuration(format!(
                    "tolerance for '{key}' must be positive, got {tolerance}"
                )));
            }
        }
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(Error::configuration(format!(
                "unknown log level '{other}'"
            ))),
        }
    }

    /// Create configuration with custom worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.processing.workers = workers;
        self
    }

    /// Create configuration with a custom discovery pattern
    pub fn with_file_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.processing.file_pattern = pattern.into();
        self
    }

    /// Enable strict data row checking
    pub fn with_strict_data_rows(mut self) -> Self {
        self.validation.strict_data_rows = true;
        self
    }

    /// Create configuration with a custom log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Tolerance table with this configuration's overrides applied
    pub fn tolerance_table(&self) -> ToleranceTable {
        ToleranceTable::with_overrides(&self.validation.tolerances)
    }
}
