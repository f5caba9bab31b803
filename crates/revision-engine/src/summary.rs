//! Document-level aggregation of page results

use shared_types::{ComparisonSummary, PageComparisonResult, Recommendation};

use crate::thresholds::Thresholds;

/// Summarize page results with the default thresholds
pub fn summarize(results: &[PageComparisonResult]) -> ComparisonSummary {
    summarize_with(results, &Thresholds::default())
}

/// Count significantly different pages and derive the recommendation.
///
/// A page is significant when it exists on one side only, or when its
/// similarity is at or below the similar threshold. Percentages are
/// rounded half to even at two decimals; an empty result list is 0%
/// different.
pub fn summarize_with(
    results: &[PageComparisonResult],
    thresholds: &Thresholds,
) -> ComparisonSummary {
    let total_pages = results.len();
    let significantly_different_pages = results
        .iter()
        .filter(|r| is_significant(r, thresholds))
        .count();

    let percent_different = if total_pages > 0 {
        round2(significantly_different_pages as f64 / total_pages as f64 * 100.0)
    } else {
        0.0
    };

    let recommendation = if percent_different > thresholds.upgrade_percent {
        Recommendation::UpgradeUseful
    } else {
        Recommendation::UpgradeNotEssential
    };

    ComparisonSummary {
        total_pages,
        significantly_different_pages,
        percent_different,
        recommendation,
    }
}

fn is_significant(result: &PageComparisonResult, thresholds: &Thresholds) -> bool {
    if !result.in_both || result.status.is_significant() {
        return true;
    }
    matches!(result.similarity, Some(s) if s < thresholds.similar)
}

/// Two decimals, ties to even: 1 of 32 pages is 3.12%, not 3.13%
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
