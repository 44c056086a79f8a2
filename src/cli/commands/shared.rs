//! Shared components for CLI commands
//!
//! This module contains common types, utilities, and functions used across
//! multiple CLI command implementations.

use crate::cli::args::CheckArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Processing statistics for reporting across all commands
#[derive(Debug, Clone, Default)]
pub struct ProcessingStats {
    /// Number of files parsed and validated
    pub files_checked: usize,
    /// Number of files that failed to parse
    pub files_failed: usize,
    /// Number of constant keys cross-checked against data
    pub keys_checked: usize,
    /// Number of constants that drifted beyond tolerance
    pub mismatches_found: usize,
    /// Number of validation warnings issued
    pub warnings_issued: usize,
    /// Total processing time
    pub processing_time: std::time::Duration,
}

impl ProcessingStats {
    /// Throughput in files per second over the whole run
    pub fn files_per_second(&self) -> f64 {
        let seconds = self.processing_time.as_secs_f64();
        if seconds > 0.0 {
            (self.files_checked + self.files_failed) as f64 / seconds
        } else {
            0.0
        }
    }
}

/// Set up structured logging for CLI commands
pub fn setup_logging(log_level: &str, quiet: bool) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    // Create filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tydex_checker={}", log_level)));

    // Set up subscriber based on output format preference
    if quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> args)
pub fn load_configuration(args: &CheckArgs) -> Result<Config> {
    info!("Loading configuration");

    if let Some(config_path) = &args.config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        info!("No config file specified, checking default location");
    }

    let mut config = Config::load(args.config_file.as_deref())?;

    // Apply CLI argument overrides
    apply_cli_overrides(&mut config, args);

    // Final validation
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &CheckArgs) {
    if let Some(pattern) = &args.pattern {
        config.processing.file_pattern = pattern.clone();
    }
    if let Some(workers) = args.workers {
        config.processing.workers = workers;
    }
    if args.strict {
        config.validation.strict_data_rows = true;
    }
    config.logging.level = args.get_log_level().to_string();
}

/// Discover TYDEX files from a mix of files, directories, and glob patterns
///
/// Directories are walked recursively for files whose names match `pattern`.
/// Arguments that name no existing path but contain glob metacharacters are
/// expanded as globs. The result is sorted and deduplicated.
pub fn discover_tydex_files(paths: &[PathBuf], pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher =
        glob::Pattern::new(pattern).map_err(|e| Error::glob_pattern(pattern.to_string(), e))?;

    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            collect_from_directory(path, &matcher, &mut files)?;
        } else {
            let spec = path.to_string_lossy();
            if spec.contains(['*', '?', '[']) {
                collect_from_glob(&spec, &mut files)?;
            } else {
                return Err(Error::file_not_found(spec.to_string()));
            }
        }
    }

    // Sort files for consistent processing order
    files.sort();
    files.dedup();

    debug!("Discovered {} TYDEX files", files.len());
    for file in &files {
        debug!("  Found: {}", file.display());
    }

    Ok(files)
}

/// Walk a directory tree collecting files that match the discovery pattern
fn collect_from_directory(
    dir: &Path,
    matcher: &glob::Pattern,
    files: &mut Vec<PathBuf>,
) -> Result<()> {
    for entry in WalkDir::new(dir).follow_links(false) {
        let entry = entry.map_err(|e| {
            Error::directory_traversal(format!("Failed to walk directory {}", dir.display()), e)
        })?;

        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| matcher.matches(name));
        if matches {
            files.push(path.to_path_buf());
        }
    }
    Ok(())
}

/// Expand a glob argument into matching files
fn collect_from_glob(spec: &str, files: &mut Vec<PathBuf>) -> Result<()> {
    let entries = glob::glob(spec).map_err(|e| Error::glob_pattern(spec.to_string(), e))?;
    for entry in entries {
        let path = entry.map_err(|e| {
            Error::io(
                format!("Failed to read glob match for '{spec}'"),
                e.into_error(),
            )
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg} [{per_sec}] ETA: {eta}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
