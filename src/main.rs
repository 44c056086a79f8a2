use clap::Parser;
use std::process;
use tydex_checker::cli::{args::Args, commands};

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    // Create async runtime and run the main command logic
    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_stats) => {
            // Success - results have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("TYDEX Checker - Tyre Measurement Constant Validator");
    println!("===================================================");
    println!();
    println!("Parse TYDEX tyre measurement files and report every declared test");
    println!("constant whose measured channel drifts beyond its tolerance.");
    println!();
    println!("USAGE:");
    println!("    tydex_checker <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    check       Check files for constants that drift beyond tolerance (main command)");
    println!("    inspect     Parse a single file and dump its sections");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Check every .tdx file under the current directory:");
    println!("    tydex_checker check");
    println!();
    println!("    # Check specific run directories with eight workers:");
    println!("    tydex_checker check tydex/B1/Run01 tydex/B1/Run02 --workers 8");
    println!();
    println!("    # Check a glob of runs and emit a JSON report:");
    println!("    tydex_checker check 'tydex/*/Run*/*.tdx' --format json");
    println!();
    println!("    # Dump the constants section of one file:");
    println!("    tydex_checker inspect Run01.tdx --section constants");
    println!();
    println!("For detailed help on any command, use:");
    println!("    tydex_checker <COMMAND> --help");
}
