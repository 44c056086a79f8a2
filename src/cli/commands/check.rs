//! Check command implementation for the TYDEX checker CLI
//!
//! This module contains the complete checking workflow: configuration
//! loading, file discovery, concurrent parsing and validation, and report
//! generation.

use super::shared::{
    ProcessingStats, create_progress_bar, discover_tydex_files, load_configuration, setup_logging,
};
use crate::app::services::tydex_parser::{DocumentParser, ParseOptions, ParseStats};
use crate::app::services::validator::{ConstantValidator, ToleranceTable, ValidationReport};
use crate::cli::args::{CheckArgs, OutputFormat};
use crate::{Error, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::{HumanDuration, ProgressBar};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tokio::task;
use tracing::{debug, error, info};

/// Validation outcome for a single file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the checked file as discovered
    pub file: String,
    /// Parse statistics for the file
    pub stats: ParseStats,
    /// Cross-check outcome for the file
    pub validation: ValidationReport,
}

/// A file that could not be parsed
#[derive(Debug, Clone, Serialize)]
pub struct FileFailure {
    /// Path of the failed file as discovered
    pub file: String,
    /// Error description
    pub error: String,
}

/// Check command runner for the TYDEX checker
///
/// This function orchestrates the entire checking workflow:
/// 1. Set up logging and configuration
/// 2. Discover TYDEX files from the given paths
/// 3. Parse and validate files concurrently with progress reporting
/// 4. Generate the report in the requested format
pub async fn run_check(args: CheckArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), args.quiet)?;

    info!("Starting TYDEX check");
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    // Load configuration with CLI overrides applied
    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let paths = args.get_paths();
    let files = discover_tydex_files(&paths, &config.processing.file_pattern)?;
    if files.is_empty() {
        return Err(Error::configuration(format!(
            "No TYDEX files found in: {}",
            paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )));
    }

    info!(
        "Checking {} files with {} workers",
        files.len(),
        config.processing.workers
    );

    let options = ParseOptions {
        strict_data_rows: config.validation.strict_data_rows,
    };
    let tolerances = config.tolerance_table();

    let progress = if args.show_progress() && files.len() > 1 {
        Some(create_progress_bar(
            files.len() as u64,
            "Checking TYDEX files",
        ))
    } else {
        None
    };

    let mut outcomes = check_files(
        files,
        options,
        tolerances,
        config.processing.workers,
        progress.clone(),
    )
    .await;

    if let Some(pb) = &progress {
        pb.finish_and_clear();
    }

    // Report in path order regardless of completion order
    outcomes.sort_by(|a, b| a.0.cmp(&b.0));

    let mut stats = ProcessingStats::default();
    let mut reports = Vec::new();
    let mut failures = Vec::new();

    for (path, outcome) in outcomes {
        match outcome {
            Ok((parse_stats, validation)) => {
                if !parse_stats.is_clean() {
                    debug!(
                        "Degraded parse for {}: {} ragged rows, {} text fallbacks",
                        path.display(),
                        parse_stats.ragged_rows,
                        parse_stats.coercion_fallbacks
                    );
                }
                stats.files_checked += 1;
                stats.keys_checked += validation.keys_checked.len();
                stats.mismatches_found += validation.mismatches.len();
                stats.warnings_issued += validation.warnings.len();
                reports.push(FileReport {
                    file: path.display().to_string(),
                    stats: parse_stats,
                    validation,
                });
            }
            Err(e) => {
                error!("Failed to check {}: {}", path.display(), e);
                stats.files_failed += 1;
                failures.push(FileFailure {
                    file: path.display().to_string(),
                    error: e.to_string(),
                });
            }
        }
    }

    stats.processing_time = start_time.elapsed();

    // Generate the report in the requested format
    match args.output_format {
        OutputFormat::Human => generate_human_report(&args, &stats, &reports, &failures),
        OutputFormat::Json => generate_json_report(&stats, &reports, &failures)?,
        OutputFormat::Csv => generate_csv_report(&reports),
    }

    Ok(stats)
}

/// Parse and validate files concurrently on blocking worker threads
async fn check_files(
    files: Vec<PathBuf>,
    options: ParseOptions,
    tolerances: ToleranceTable,
    workers: usize,
    progress: Option<ProgressBar>,
) -> Vec<(PathBuf, Result<(ParseStats, ValidationReport)>)> {
    stream::iter(files)
        .map(|path| {
            let tolerances = tolerances.clone();
            let progress = progress.clone();
            async move {
                let task_path = path.clone();
                let joined = task::spawn_blocking(move || {
                    let parser = DocumentParser::with_options(options);
                    let validator = ConstantValidator::with_tolerances(tolerances);
                    parser.parse_file(&task_path).map(|parsed| {
                        let validation = validator.verify(&parsed.document);
                        (parsed.stats, validation)
                    })
                })
                .await;

                let outcome = match joined {
                    Ok(result) => result,
                    Err(e) => Err(Error::configuration(format!("Worker task failed: {e}"))),
                };

                if let Some(pb) = &progress {
                    pb.inc(1);
                }
                (path, outcome)
            }
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await
}

/// Generate human-readable report
fn generate_human_report(
    args: &CheckArgs,
    stats: &ProcessingStats,
    reports: &[FileReport],
    failures: &[FileFailure],
) {
    // One line per out-of-tolerance constant, in the classic greppable shape
    for report in reports {
        for mismatch in &report.validation.mismatches {
            println!("{}: {}", report.file, mismatch);
        }
    }

    if args.quiet {
        return;
    }

    let mismatch_count = if stats.mismatches_found > 0 {
        stats.mismatches_found.to_string().bright_red().to_string()
    } else {
        stats.mismatches_found.to_string().bright_green().to_string()
    };

    println!("\n🎉 TYDEX Check Complete!");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📊 Check Summary:");
    println!("   • Files checked: {}", stats.files_checked);
    println!("   • Keys checked: {}", stats.keys_checked);
    println!("   • Mismatches found: {}", mismatch_count);
    println!("   • Warnings issued: {}", stats.warnings_issued);
    println!(
        "   • Processing time: {}",
        HumanDuration(stats.processing_time)
    );
    println!("   • Throughput: {:.1} files/s", stats.files_per_second());

    if stats.files_failed > 0 {
        println!("⚠️  Files failed: {}", stats.files_failed);
        for failure in failures {
            println!("   • {}: {}", failure.file, failure.error);
        }
    }

    println!();
}

/// Generate JSON report for machine consumption
fn generate_json_report(
    stats: &ProcessingStats,
    reports: &[FileReport],
    failures: &[FileFailure],
) -> Result<()> {
    let json_report = serde_json::json!({
        "generated_at": chrono::Utc::now().to_rfc3339(),
        "files_checked": stats.files_checked,
        "files_failed": stats.files_failed,
        "keys_checked": stats.keys_checked,
        "mismatches_found": stats.mismatches_found,
        "warnings_issued": stats.warnings_issued,
        "processing_time_seconds": stats.processing_time.as_secs_f64(),
        "files": reports,
        "failures": failures,
    });

    let rendered = serde_json::to_string_pretty(&json_report)
        .map_err(|e| Error::configuration(format!("Failed to serialize report: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Generate CSV report with one row per mismatch
fn generate_csv_report(reports: &[FileReport]) {
    println!("file,key,deviation,tolerance,nominal");
    for report in reports {
        for mismatch in &report.validation.mismatches {
            println!(
                "{},{},{},{},{}",
                report.file, mismatch.key, mismatch.deviation, mismatch.tolerance, mismatch.nominal
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_tydex(dir: &std::path::Path, name: &str, fzw_values: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            "**HEADER\n\
             {:<50}{}\n\
             **COMMENTS\n\
             test run\n\
             **CONSTANTS\n\
             {:<10} {:<29} {:<8} {}\n\
             **MEASURCHANNELS\n\
             {:<10}{:<29} {:<10}\n\
             **MEASURDATA\n\
             {}\n",
            "RELEASE", "1.3", "FZW", "Vertical load", "N", "4000.0", "FZW", "Vertical force", "N", fzw_values
        )
        .unwrap();
        path
    }

    #[tokio::test]
    async fn test_check_files_collects_outcomes() {
        let temp_dir = TempDir::new().unwrap();
        let clean = write_tydex(temp_dir.path(), "clean.tdx", "4000.0\n4000.0");
        let drifted = write_tydex(temp_dir.path(), "drifted.tdx", "4200.0\n4200.0");

        let outcomes = check_files(
            vec![clean.clone(), drifted.clone()],
            ParseOptions::default(),
            ToleranceTable::new(),
            2,
            None,
        )
        .await;

        assert_eq!(outcomes.len(), 2);
        for (path, outcome) in outcomes {
            let (_, validation) = outcome.unwrap();
            if path == drifted {
                assert_eq!(validation.mismatches.len(), 1);
                assert_eq!(validation.mismatches[0].key, "FZW");
            } else {
                assert!(validation.mismatches.is_empty());
            }
        }
    }

    #[tokio::test]
    async fn test_check_files_keeps_going_after_parse_failure() {
        let temp_dir = TempDir::new().unwrap();
        let good = write_tydex(temp_dir.path(), "good.tdx", "4000.0");
        let truncated = temp_dir.path().join("truncated.tdx");
        std::fs::write(&truncated, "**HEADER\nonly a header\n").unwrap();

        let outcomes = check_files(
            vec![good.clone(), truncated.clone()],
            ParseOptions::default(),
            ToleranceTable::new(),
            2,
            None,
        )
        .await;

        let good_outcome = outcomes.iter().find(|(p, _)| *p == good).unwrap();
        let bad_outcome = outcomes.iter().find(|(p, _)| *p == truncated).unwrap();
        assert!(good_outcome.1.is_ok());
        assert!(matches!(
            bad_outcome.1,
            Err(Error::SectionNotFound { .. })
        ));
    }

    #[test]
    fn test_file_report_serializes() {
        let report = FileReport {
            file: "Run01.tdx".to_string(),
            stats: ParseStats::new(),
            validation: ValidationReport::default(),
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["file"], "Run01.tdx");
        assert!(json["validation"]["mismatches"].as_array().unwrap().is_empty());
    }
}
