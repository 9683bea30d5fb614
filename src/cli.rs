//! CLI definitions and entry point

use clap::Parser;

use crate::commands;
use apptscan::output::OutputMode;

/// apptscan - Source diagnostics for the appointment lookup path
#[derive(Parser, Debug)]
#[command(
    name = "apptscan",
    version,
    about = "Inspect the appointment backend sources for the customer-lookup path",
    long_about = "Searches the backend's routing and data-access sources for the\n\
                  customer-history handler and the appointment lookup function,\n\
                  printing an excerpt of each for manual inspection."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    commands::scan(output_mode)
}
