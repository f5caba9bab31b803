//! Positional page alignment and scoring
//!
//! Page `i` of the old document is only ever compared with page `i` of the
//! new one. Pages past the end of either document are reported as present
//! in one side only and are never scored.

use shared_types::{Document, PageComparisonResult, PageStatus};
use tracing::debug;

use crate::line_diff::diff_lines;
use crate::similarity::page_similarity;
use crate::thresholds::Thresholds;

/// Yields one [`PageComparisonResult`] per page index, in page order.
///
/// Each call to `next` scores and diffs a whole page, so stopping between
/// items always leaves a consistent prefix of the full result list.
pub struct PageAligner<'a> {
    old: &'a Document,
    new: &'a Document,
    thresholds: Thresholds,
    index: usize,
    total: usize,
}

impl<'a> PageAligner<'a> {
    pub fn new(old: &'a Document, new: &'a Document) -> Self {
        Self::with_thresholds(old, new, Thresholds::default())
    }

    pub fn with_thresholds(old: &'a Document, new: &'a Document, thresholds: Thresholds) -> Self {
        Self {
            old,
            new,
            thresholds,
            index: 0,
            total: old.len().max(new.len()),
        }
    }

    fn compare_at(&self, index: usize) -> PageComparisonResult {
        let page_num = index as u32 + 1;

        let (old_page, new_page) = match (self.old.get(index), self.new.get(index)) {
            (Some(old_page), Some(new_page)) => (old_page, new_page),
            (None, _) => return PageComparisonResult::only_in_new(page_num),
            (_, None) => return PageComparisonResult::only_in_old(page_num),
        };

        let similarity = page_similarity(old_page, new_page);
        let status = self.thresholds.classify(similarity);

        let differences = match status {
            PageStatus::Similar | PageStatus::Different => {
                diff_lines(&old_page.lines, &new_page.lines)
            }
            _ => Vec::new(),
        };

        debug!(
            page = page_num,
            similarity,
            %status,
            differences = differences.len(),
            "Compared page"
        );

        PageComparisonResult {
            page_num,
            in_both: true,
            status,
            similarity: Some(similarity),
            differences,
        }
    }
}

impl Iterator for PageAligner<'_> {
    type Item = PageComparisonResult;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.total {
            return None;
        }
        let result = self.compare_at(self.index);
        self.index += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PageAligner<'_> {}

/// Compare two documents page by page with the default thresholds
pub fn compare(old: &Document, new: &Document) -> Vec<PageComparisonResult> {
    PageAligner::new(old, new).collect()
}
