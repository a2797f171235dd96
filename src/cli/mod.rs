use clap::Parser;
use std::path::PathBuf;

use minispec::DOC_FILENAME;

pub mod ui;

#[derive(Parser)]
#[command(
    name = "minispec",
    about = "A minimal behaviour driven development library",
    version,
    author,
    long_about = None
)]
pub struct MinispecCli {
    /// Sets the log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Report destination: omit for stdout, "README" for the documentation
    /// file with preamble, any other name for a plain report file
    pub output: Option<String>,
}

/// Where and how the report is emitted, decided once at the boundary
pub enum ReportMode {
    /// No argument: full report to standard output
    Stdout,
    /// The fixed documentation filename: prose preamble plus report
    Documentation(PathBuf),
    /// Any other filename: report only
    File(PathBuf),
}

impl MinispecCli {
    pub fn report_mode(&self) -> ReportMode {
        match self.output.as_deref() {
            None => ReportMode::Stdout,
            Some(name) if name == DOC_FILENAME => ReportMode::Documentation(PathBuf::from(name)),
            Some(name) => ReportMode::File(PathBuf::from(name)),
        }
    }
}
