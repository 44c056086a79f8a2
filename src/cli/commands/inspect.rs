//! Inspect command implementation for the TYDEX checker CLI
//!
//! Parses one measurement file and dumps its sections for debugging,
//! optionally narrowed to a single section.

use super::shared::{ProcessingStats, setup_logging};
use crate::app::models::TydexDocument;
use crate::app::services::tydex_parser::{DocumentParser, ParseOptions, ParseStats};
use crate::cli::args::{InspectArgs, OutputFormat, SectionFilter};
use crate::{Error, Result};
use colored::Colorize;
use std::time::Instant;
use tracing::{debug, info};

/// Inspect command runner for the TYDEX checker
pub async fn run_inspect(args: InspectArgs) -> Result<ProcessingStats> {
    let start_time = Instant::now();

    // Set up logging
    setup_logging(args.get_log_level(), false)?;

    info!("Inspecting {}", args.file.display());
    debug!("Command line arguments: {:?}", args);

    // Validate arguments
    args.validate()?;

    let parser = DocumentParser::with_options(ParseOptions {
        strict_data_rows: args.strict,
    });
    let result = parser.parse_file(&args.file)?;

    match args.output_format {
        OutputFormat::Human => print_human_dump(&result.document, args.section),
        OutputFormat::Json => print_json_dump(&result.document, &result.stats, args.section)?,
        OutputFormat::Csv => print_csv_dump(&result.document, args.section),
    }

    Ok(ProcessingStats {
        files_checked: 1,
        processing_time: start_time.elapsed(),
        ..Default::default()
    })
}

/// Mean of a sample column, zero when empty
fn column_mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        0.0
    } else {
        samples.iter().sum::<f64>() / samples.len() as f64
    }
}

/// Sorted key/value view of an unordered map for stable output
fn sorted_entries<V>(map: &std::collections::HashMap<String, V>) -> Vec<(&String, &V)> {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by_key(|(key, _)| key.as_str());
    entries
}

fn wants(section: Option<SectionFilter>, candidate: SectionFilter) -> bool {
    section.is_none() || section == Some(candidate)
}

/// Print the document sections in human-readable form
fn print_human_dump(document: &TydexDocument, section: Option<SectionFilter>) {
    if section.is_none() {
        println!("File: {}\n", document.display_name());
    }

    if wants(section, SectionFilter::Header) {
        println!("{}", "HEADER".bright_cyan());
        for (key, value) in sorted_entries(&document.headers) {
            println!("  {:<12}{}", key, value);
        }
    }

    if wants(section, SectionFilter::Comments) {
        println!("{}", "COMMENTS".bright_cyan());
        for line in &document.comments {
            println!("  {}", line);
        }
    }

    if wants(section, SectionFilter::Constants) {
        println!("{}", "CONSTANTS".bright_cyan());
        for (key, constant) in sorted_entries(&document.constants) {
            println!(
                "  {:<12}{:<16}{:<10}{}",
                key,
                constant.value.to_string(),
                constant.units,
                constant.description
            );
        }
    }

    if wants(section, SectionFilter::Channels) {
        println!("{}", "MEASURCHANNELS".bright_cyan());
        for channel in &document.channels {
            println!(
                "  {:<12}{:<10}{}",
                channel.name, channel.units, channel.description
            );
        }
    }

    if wants(section, SectionFilter::Data) {
        println!("{}", "MEASURDATA".bright_cyan());
        for channel in &document.channels {
            let samples = document.samples(&channel.name).unwrap_or(&[]);
            println!(
                "  {:<12}{:>8} samples   mean {:.3}",
                channel.name,
                samples.len(),
                column_mean(samples)
            );
        }
        println!("  {} rows", document.row_count());
    }
}

/// Build the JSON value for a dump, honoring the section filter
fn document_json(
    document: &TydexDocument,
    stats: &ParseStats,
    section: Option<SectionFilter>,
) -> Result<serde_json::Value> {
    let value = match section {
        None => serde_json::json!({
            "file": document.display_name(),
            "stats": stats,
            "document": document,
        }),
        Some(SectionFilter::Header) => serde_json::json!({ "headers": document.headers }),
        Some(SectionFilter::Comments) => serde_json::json!({ "comments": document.comments }),
        Some(SectionFilter::Constants) => serde_json::json!({ "constants": document.constants }),
        Some(SectionFilter::Channels) => serde_json::json!({ "channels": document.channels }),
        Some(SectionFilter::Data) => serde_json::json!({ "data": document.data }),
    };
    Ok(value)
}

/// Print the document as pretty JSON
fn print_json_dump(
    document: &TydexDocument,
    stats: &ParseStats,
    section: Option<SectionFilter>,
) -> Result<()> {
    let value = document_json(document, stats, section)?;
    let rendered = serde_json::to_string_pretty(&value)
        .map_err(|e| Error::configuration(format!("Failed to serialize dump: {e}")))?;
    println!("{rendered}");
    Ok(())
}

/// Print one section as a CSV table
///
/// Without a section filter the data summary table is emitted, since CSV
/// output has to be a single table.
fn print_csv_dump(document: &TydexDocument, section: Option<SectionFilter>) {
    match section {
        Some(SectionFilter::Header) => {
            println!("key,value");
            for (key, value) in sorted_entries(&document.headers) {
                println!("{},{}", key, value);
            }
        }
        Some(SectionFilter::Comments) => {
            println!("line");
            for line in &document.comments {
                println!("{}", line);
            }
        }
        Some(SectionFilter::Constants) => {
            println!("key,value,units,description");
            for (key, constant) in sorted_entries(&document.constants) {
                println!(
                    "{},{},{},{}",
                    key, constant.value, constant.units, constant.description
                );
            }
        }
        Some(SectionFilter::Channels) => {
            println!("name,units,description");
            for channel in &document.channels {
                println!(
                    "{},{},{}",
                    channel.name, channel.units, channel.description
                );
            }
        }
        Some(SectionFilter::Data) | None => {
            println!("channel,samples,mean");
            for channel in &document.channels {
                let samples = document.samples(&channel.name).unwrap_or(&[]);
                println!(
                    "{},{},{}",
                    channel.name,
                    samples.len(),
                    column_mean(samples)
                );
            }
        }
    }
}
