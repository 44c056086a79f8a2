//! Command-line argument definitions for the TYDEX checker
//!
//! This module defines the complete CLI interface using the clap derive API.

use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the TYDEX constant checker
///
/// Parses TYDEX tyre measurement files and cross-checks their declared
/// test constants against the measured channel data.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "tydex_checker",
    version,
    about = "Check TYDEX tyre measurement files for constants that drift from their data",
    long_about = "Parses TYDEX measurement files, extracts the declared test constants and \
                  the measured channels, and reports every constant whose channel mean drifts \
                  beyond its per-key tolerance. Handles whole directory trees of runs \
                  concurrently and emits human, JSON, or CSV reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the TYDEX checker
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Check files for constants that drift beyond tolerance (default command)
    Check(CheckArgs),
    /// Parse a single file and dump its sections
    Inspect(InspectArgs),
}

/// Arguments for the check command (main validation run)
#[derive(Debug, Clone, Parser)]
pub struct CheckArgs {
    /// Files, directories, or glob patterns to check
    ///
    /// Directories are walked recursively for files matching the discovery
    /// pattern. Arguments containing glob metacharacters that do not name an
    /// existing path are expanded as globs. Defaults to the current directory.
    #[arg(
        value_name = "PATH",
        help = "Files, directories, or glob patterns to check"
    )]
    pub paths: Vec<PathBuf>,

    /// File name pattern for directory discovery
    ///
    /// Matched against file names while walking directories. Overrides the
    /// pattern from the configuration file.
    #[arg(
        short = 'p',
        long = "pattern",
        value_name = "GLOB",
        help = "File name pattern for directory discovery (default: *.tdx)"
    )]
    pub pattern: Option<String>,

    /// Fail files whose data rows disagree with the channel count
    ///
    /// By default short or long rows are tallied and skipped past. This flag
    /// turns a row/channel count mismatch into a parse failure for the file.
    #[arg(
        long = "strict",
        help = "Treat data rows that disagree with the channel count as errors"
    )]
    pub strict: bool,

    /// Number of parallel workers
    ///
    /// Controls how many files are checked concurrently. Defaults to the
    /// configured worker count, or the number of CPU cores.
    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Number of parallel workers for checking"
    )]
    pub workers: Option<usize>,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,

    /// Path to configuration file
    ///
    /// TOML configuration file for tolerances and defaults. If not specified,
    /// looks for config.toml under the platform config directory.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show mismatches and errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except mismatches and errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the inspect command (single-file section dump)
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    /// TYDEX file to inspect
    #[arg(value_name = "FILE", help = "TYDEX file to inspect")]
    pub file: PathBuf,

    /// Limit output to a single section
    #[arg(
        short = 's',
        long = "section",
        value_enum,
        help = "Limit output to a single section"
    )]
    pub section: Option<SectionFilter>,

    /// Fail on data rows that disagree with the channel count
    #[arg(
        long = "strict",
        help = "Treat data rows that disagree with the channel count as errors"
    )]
    pub strict: bool,

    /// Output format for the dump
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the dump"
    )]
    pub output_format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

/// Output format options for machine-readable results
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

/// Section selector for the inspect command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionFilter {
    /// HEADER key/value pairs
    Header,
    /// COMMENTS free text
    Comments,
    /// CONSTANTS with their coerced values
    Constants,
    /// MEASURCHANNELS declarations
    Channels,
    /// MEASURDATA columns
    Data,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Commands {
        self.command
            .clone()
            .expect("Command should be present when get_command() is called")
    }
}

impl CheckArgs {
    /// Validate the check command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(workers) = self.workers {
            if workers == 0 {
                return Err(Error::configuration(
                    "Number of workers must be greater than 0".to_string(),
                ));
            }
            if workers > 100 {
                return Err(Error::configuration(
                    "Number of workers cannot exceed 100".to_string(),
                ));
            }
        }

        if let Some(pattern) = &self.pattern {
            if pattern.is_empty() {
                return Err(Error::configuration(
                    "Discovery pattern cannot be empty".to_string(),
                ));
            }
        }

        // Validate config file exists if specified
        if let Some(config_file) = &self.config_file {
            if !config_file.exists() {
                return Err(Error::configuration(format!(
                    "Config file does not exist: {}",
                    config_file.display()
                )));
            }
        }

        Ok(())
    }

    /// Paths to check, defaulting to the current directory
    pub fn get_paths(&self) -> Vec<PathBuf> {
        if self.paths.is_empty() {
            vec![PathBuf::from(".")]
        } else {
            self.paths.clone()
        }
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }
}

impl InspectArgs {
    /// Validate the inspect command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.file.exists() {
            return Err(Error::file_not_found(self.file.display().to_string()));
        }
        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Not a file: {}",
                self.file.display()
            )));
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            pattern: None,
            strict: false,
            workers: None,
            output_format: OutputFormat::Human,
            config_file: None,
            verbose: 0,
            quiet: false,
        }
    }
}
