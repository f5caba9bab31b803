//! Markdown reporter for comparison reports

use anyhow::Result;
use std::fmt::Write;

use shared_types::ComparisonReport;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format a comparison report as Markdown
    pub fn format(report: &ComparisonReport) -> Result<String> {
        let mut output = String::new();
        let summary = &report.summary;

        writeln!(output, "# Revision Comparison")?;
        writeln!(output)?;
        writeln!(output, "**{}**", summary.recommendation.description())?;
        writeln!(output)?;
        writeln!(output, "| Metric | Value |")?;
        writeln!(output, "|--------|-------|")?;
        writeln!(output, "| Total pages | {} |", summary.total_pages)?;
        writeln!(
            output,
            "| Significantly different pages | {} |",
            summary.significantly_different_pages
        )?;
        writeln!(output, "| Percent different | {:.2}% |", summary.percent_different)?;
        writeln!(output, "| Recommendation | `{}` |", summary.recommendation)?;
        writeln!(output)?;

        if report.results.is_empty() {
            return Ok(output);
        }

        writeln!(output, "## Pages")?;
        writeln!(output)?;
        writeln!(output, "| Page | Status | Similarity |")?;
        writeln!(output, "|------|--------|------------|")?;
        for result in &report.results {
            let similarity = result
                .similarity
                .map(|s| format!("{:.2}%", s))
                .unwrap_or_else(|| "n/a".to_string());
            writeln!(
                output,
                "| {} | {} | {} |",
                result.page_num,
                result.status.description(),
                similarity
            )?;
        }
        writeln!(output)?;

        for result in report.results.iter().filter(|r| !r.differences.is_empty()) {
            writeln!(output, "### Page {}", result.page_num)?;
            writeln!(output)?;
            writeln!(output, "```diff")?;
            for line in &result.differences {
                writeln!(output, "{}", line)?;
            }
            writeln!(output, "```")?;
            writeln!(output)?;
        }

        Ok(output)
    }
}
