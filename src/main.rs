use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use log::info;

use minispec::errors::MinispecError;
use minispec::report;

mod cli;
mod suite;

use cli::{MinispecCli, ReportMode};

fn main() -> Result<()> {
    // Parse the command line arguments
    let cli = MinispecCli::parse();

    // Setup logging
    setup_logging(&cli.log_level);

    // Run the whole suite up front; the report modes only differ in where
    // the lines go
    let specs = suite::specs();
    info!("Suite evaluated: {} specs", specs.len());

    match cli.report_mode() {
        ReportMode::Stdout => {
            let mut stdout = io::stdout().lock();
            report::run_and_report(&mut stdout, &specs)?;
        }
        ReportMode::Documentation(path) => {
            let mut file = create_report_file(&path)?;
            report::write_documentation(&mut file, &specs)?;
            cli::ui::print_success(&format!("Documentation written to {}", path.display()));
        }
        ReportMode::File(path) => {
            let mut file = create_report_file(&path)?;
            report::run_and_report(&mut file, &specs)?;
            cli::ui::print_success(&format!("Report written to {}", path.display()));
        }
    }

    Ok(())
}

fn create_report_file(path: &Path) -> Result<File, MinispecError> {
    File::create(path).map_err(|source| {
        cli::ui::print_error(&format!("Could not open {}", path.display()));
        MinispecError::ReportFileError {
            path: path.display().to_string(),
            message: source.to_string(),
        }
    })
}

fn setup_logging(log_level: &str) {
    // Set up the logger based on the log level
    let level = match log_level.to_lowercase().as_str() {
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };

    env_logger::Builder::new().filter_level(level).init();

    info!("Logger initialized with level: {}", log_level);
}
