//! Console reporter for comparison reports
//!
//! Lists every page with its verdict and difference lines, followed by the
//! document summary.

use anyhow::Result;
use std::fmt::Write;

use shared_types::{ComparisonReport, PageComparisonResult};

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a comparison report for console output
    pub fn format(report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                    REVISION COMPARISON                       ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        for result in &report.results {
            Self::format_page(&mut output, result)?;
        }

        // Summary
        let summary = &report.summary;
        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        writeln!(output, "Total pages:                    {}", summary.total_pages)?;
        writeln!(
            output,
            "Significantly different pages:  {}",
            summary.significantly_different_pages
        )?;
        writeln!(output, "Percent different:              {:.2}%", summary.percent_different)?;
        writeln!(
            output,
            "Recommendation:                 {} ({})",
            summary.recommendation.description(),
            summary.recommendation
        )?;
        writeln!(output)?;

        Ok(output)
    }

    fn format_page(output: &mut String, result: &PageComparisonResult) -> Result<()> {
        match result.similarity {
            Some(similarity) => writeln!(
                output,
                "Page {}: {} (similarity {:.2}%)",
                result.page_num,
                result.status.description(),
                similarity
            )?,
            None => writeln!(
                output,
                "Page {}: {}",
                result.page_num,
                result.status.description()
            )?,
        }

        for line in &result.differences {
            writeln!(output, "    {}", line)?;
        }

        Ok(())
    }
}
