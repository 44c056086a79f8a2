//! TYDEX Checker Library
//!
//! A Rust library for parsing TYDEX tyre measurement files and
//! cross-checking their declared test constants against the measured
//! channel data.
//!
//! This library provides tools for:
//! - Parsing TYDEX files with proper keyword section handling
//! - Extracting headers, comments, constants, channels, and data tables
//! - Coercing fixed-column constant fields into typed values
//! - Validating constants against channel means with per-key tolerances
//! - Comprehensive error handling and recovery

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod tydex_parser;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Constant, ConstantValue, TydexDocument};
pub use app::services::tydex_parser::{DocumentParser, ParseOptions, ParseResult};
pub use app::services::validator::{ConstantValidator, ValidationReport};
pub use config::Config;

/// Result type alias for TYDEX checking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for TYDEX processing operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Required keyword section missing from a file
    #[error("Section '{keyword}' not found in '{file}'")]
    SectionNotFound { keyword: String, file: String },

    /// Data row that cannot be interpreted
    #[error("Malformed data row {row} in '{file}': {message}")]
    MalformedDataRow {
        file: String,
        row: usize,
        message: String,
    },

    /// Constant key with no tolerance entry
    #[error("No tolerance defined for key '{key}'")]
    UnknownToleranceKey { key: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Directory traversal error
    #[error("Directory traversal error: {message}")]
    DirectoryTraversal {
        message: String,
        #[source]
        source: walkdir::Error,
    },

    /// Invalid glob pattern
    #[error("Invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a missing section error
    pub fn section_not_found(keyword: impl Into<String>, file: impl Into<String>) -> Self {
        Self::SectionNotFound {
            keyword: keyword.into(),
            file: file.into(),
        }
    }

    /// Create a malformed data row error
    pub fn malformed_data_row(
        file: impl Into<String>,
        row: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedDataRow {
            file: file.into(),
            row,
            message: message.into(),
        }
    }

    /// Create an unknown tolerance key error
    pub fn unknown_tolerance_key(key: impl Into<String>) -> Self {
        Self::UnknownToleranceKey { key: key.into() }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a directory traversal error
    pub fn directory_traversal(message: impl Into<String>, source: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: message.into(),
            source,
        }
    }

    /// Create an invalid glob pattern error
    pub fn glob_pattern(pattern: impl Into<String>, source: glob::PatternError) -> Self {
        Self::GlobPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<walkdir::Error> for Error {
    fn from(error: walkdir::Error) -> Self {
        Self::DirectoryTraversal {
            message: "Directory traversal failed".to_string(),
            source: error,
        }
    }
}

impl From<glob::PatternError> for Error {
    fn from(error: glob::PatternError) -> Self {
        Self::GlobPattern {
            pattern: "unknown".to_string(),
            source: error,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML: {error}"),
        }
    }
}
