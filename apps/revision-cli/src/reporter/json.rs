//! JSON reporter for comparison reports

use anyhow::Result;
use shared_types::ComparisonReport;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a comparison report as JSON
    ///
    /// # Arguments
    ///
    /// * `report` - The comparison report to format
    /// * `pretty` - Whether to pretty-print the JSON
    pub fn format(report: &ComparisonReport, pretty: bool) -> Result<String> {
        let output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporter::test_support::create_test_report;

    #[test]
    fn test_json_format_compact() {
        let report = create_test_report();
        let output = JsonReporter::format(&report, false).unwrap();

        // Compact JSON should not have newlines
        assert!(!output.contains('\n'));
        assert!(output.contains("\"total_pages\":3"));
    }

    #[test]
    fn test_json_format_pretty() {
        let report = create_test_report();
        let output = JsonReporter::format(&report, true).unwrap();

        assert!(output.contains('\n'));
        assert!(output.contains("  "));
    }

    #[test]
    fn test_json_omits_similarity_for_missing_pages() {
        let report = create_test_report();
        let output = JsonReporter::format(&report, false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        let missing = &value["results"][2];
        assert_eq!(missing["status"], "ONLY_IN_NEW");
        assert_eq!(missing["in_both"], false);
        assert!(missing.get("similarity").is_none());
        assert_eq!(value["results"][1]["differences"][0]["tag"], "REMOVED");
    }
}
