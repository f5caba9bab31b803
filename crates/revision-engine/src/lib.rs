pub mod align;
pub mod error;
pub mod line_diff;
pub mod similarity;
pub mod summary;
pub mod thresholds;

pub use align::{compare, PageAligner};
pub use error::EngineError;
pub use line_diff::diff_lines;
pub use similarity::similarity_ratio;
pub use summary::{summarize, summarize_with};
pub use thresholds::{Thresholds, IDENTICAL_THRESHOLD, SIMILAR_THRESHOLD, UPGRADE_THRESHOLD_PERCENT};

use shared_types::{ComparisonReport, ComparisonSummary, Document, PageComparisonResult};
use tracing::{info, instrument};

/// RevisionEngine entry point
#[derive(Debug, Clone, Default)]
pub struct RevisionEngine {
    thresholds: Thresholds,
}

impl RevisionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: Thresholds) -> Result<Self, EngineError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Align and score pages; one result per page index
    pub fn compare(&self, old: &Document, new: &Document) -> Vec<PageComparisonResult> {
        PageAligner::with_thresholds(old, new, self.thresholds).collect()
    }

    pub fn summarize(&self, results: &[PageComparisonResult]) -> ComparisonSummary {
        summarize_with(results, &self.thresholds)
    }

    /// Compare and summarize in one go
    #[instrument(skip_all, fields(old_pages = old.len(), new_pages = new.len()))]
    pub fn report(&self, old: &Document, new: &Document) -> ComparisonReport {
        let results = self.compare(old, new);
        let summary = self.summarize(&results);

        info!(
            total_pages = summary.total_pages,
            significant = summary.significantly_different_pages,
            percent_different = summary.percent_different,
            recommendation = %summary.recommendation,
            "Comparison complete"
        );

        ComparisonReport { summary, results }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{PageStatus, Recommendation};

    #[test]
    fn test_engine_reports_identical_documents() {
        let engine = RevisionEngine::new();
        let doc = Document::from_lines(vec![vec!["hello", "world"]]);
        let report = engine.report(&doc, &doc);

        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].status, PageStatus::Identical);
        assert_eq!(report.summary.significantly_different_pages, 0);
        assert_eq!(report.summary.percent_different, 0.0);
        assert_eq!(
            report.summary.recommendation,
            Recommendation::UpgradeNotEssential
        );
    }

    #[test]
    fn test_engine_recommends_upgrade_for_added_page() {
        let engine = RevisionEngine::new();
        let old = Document::from_lines(vec![vec!["intro"], vec!["body"]]);
        let new = Document::from_lines(vec![vec!["intro"], vec!["body"], vec!["appendix"]]);
        let report = engine.report(&old, &new);

        assert_eq!(report.summary.percent_different, 33.33);
        assert_eq!(report.summary.recommendation, Recommendation::UpgradeUseful);
    }

    #[test]
    fn test_engine_rejects_invalid_thresholds() {
        let result = RevisionEngine::with_thresholds(Thresholds {
            similar: 99.0,
            identical: 90.0,
            ..Thresholds::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_engine_uses_its_thresholds() {
        let engine = RevisionEngine::with_thresholds(Thresholds {
            identical: 90.0,
            ..Thresholds::default()
        })
        .unwrap();
        let old = Document::from_lines(vec![vec!["line A", "line B"]]);
        let new = Document::from_lines(vec![vec!["line A", "line C"]]);

        let results = engine.compare(&old, &new);
        assert_eq!(results[0].status, PageStatus::Identical);
        assert!(results[0].differences.is_empty());
    }
}
