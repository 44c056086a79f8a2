//! Command implementations for the TYDEX checker CLI
//!
//! This module contains the main command execution logic, progress reporting,
//! and error handling for the CLI interface. Each command is implemented in
//! its own module for better organization and maintainability.

pub mod check;
pub mod inspect;
pub mod shared;

// Re-export the main types and functions for backward compatibility
pub use shared::ProcessingStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner for the TYDEX checker
///
/// This function dispatches to the appropriate subcommand handler based on CLI args.
/// Each command is implemented in its own module:
/// - `check`: Batch constant validation with human, JSON, or CSV reports
/// - `inspect`: Single-file section dump for debugging measurement files
pub async fn run(args: Args) -> Result<ProcessingStats> {
    match args.get_command() {
        Commands::Check(check_args) => check::run_check(check_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
    }
}
