//! Comparison report output
//!
//! Formats a [`ComparisonReport`] for people or for other programs.
//!
//! # Output Formats
//!
//! - **JSON**: Machine-readable format for pipelines
//! - **Console**: Per-page verdicts with `+`/`-` difference lines
//! - **Markdown**: Documentation-friendly format for reviews
//!
//! # Example
//!
//! ```no_run
//! use revision_cli::reporter::{OutputFormat, Reporter};
//! use revision_engine::RevisionEngine;
//! use shared_types::Document;
//!
//! # fn example(old: Document, new: Document) -> anyhow::Result<()> {
//! let report = RevisionEngine::new().report(&old, &new);
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "report.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod json;
mod markdown;

use anyhow::Result;
use shared_types::ComparisonReport;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;

/// Output format for comparison reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Human-readable console output
    #[default]
    Console,
    /// Markdown format for documentation
    Markdown,
}

/// Reporter for comparison results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report to stdout
    pub fn report(&self, report: &ComparisonReport) -> Result<()> {
        let output = self.format_report(report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write the report to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &ComparisonReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format the report as a string
    pub fn format_report(&self, report: &ComparisonReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
            OutputFormat::Markdown => MarkdownReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
