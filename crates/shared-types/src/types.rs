use std::fmt;

use crate::error::ShapeError;

/// One page of extracted text, in document order
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Page {
    pub number: u32, // 1-based
    pub lines: Vec<String>,
}

impl Page {
    pub fn new(number: u32, lines: Vec<String>) -> Self {
        Self { number, lines }
    }

    /// Page text with lines joined by `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Ordered pages of one document snapshot.
///
/// Page numbers are validated on construction (and on deserialization):
/// the page at position `i` must carry number `i + 1`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Page>", into = "Vec<Page>")]
pub struct Document {
    pages: Vec<Page>,
}

impl Document {
    pub fn new(pages: Vec<Page>) -> Result<Self, ShapeError> {
        for (position, page) in pages.iter().enumerate() {
            if page.number == 0 {
                return Err(ShapeError::ZeroPageNumber { position });
            }
            let expected = position as u32 + 1;
            if page.number != expected {
                return Err(ShapeError::PageOutOfOrder {
                    expected,
                    found: page.number,
                });
            }
        }
        Ok(Self { pages })
    }

    /// Build a document from per-page line lists, numbering pages from 1
    pub fn from_lines<I, P, S>(pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pages = pages
            .into_iter()
            .enumerate()
            .map(|(i, lines)| Page::new(i as u32 + 1, lines.into_iter().map(Into::into).collect()))
            .collect();
        Self { pages }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn get(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Page> {
        self.pages.iter()
    }
}

impl TryFrom<Vec<Page>> for Document {
    type Error = ShapeError;

    fn try_from(pages: Vec<Page>) -> Result<Self, Self::Error> {
        Self::new(pages)
    }
}

impl From<Document> for Vec<Page> {
    fn from(document: Document) -> Self {
        document.pages
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Page;
    type IntoIter = std::slice::Iter<'a, Page>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Verdict for one page index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PageStatus {
    Identical,
    Similar,
    Different,
    OnlyInNew,
    OnlyInOld,
}

impl PageStatus {
    /// Human-readable explanation shown next to the page
    pub fn description(&self) -> &'static str {
        match self {
            PageStatus::Identical => "Pages nearly identical",
            PageStatus::Similar => "Similar pages with some modifications",
            PageStatus::Different => "Significantly different pages",
            PageStatus::OnlyInNew => "Page only in the new document",
            PageStatus::OnlyInOld => "Page only in the old document",
        }
    }

    /// Whether the page counts towards the significantly-different total
    pub fn is_significant(&self) -> bool {
        !matches!(self, PageStatus::Identical | PageStatus::Similar)
    }

    pub fn is_in_both(&self) -> bool {
        !matches!(self, PageStatus::OnlyInNew | PageStatus::OnlyInOld)
    }
}

impl fmt::Display for PageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageStatus::Identical => "IDENTICAL",
            PageStatus::Similar => "SIMILAR",
            PageStatus::Different => "DIFFERENT",
            PageStatus::OnlyInNew => "ONLY_IN_NEW",
            PageStatus::OnlyInOld => "ONLY_IN_OLD",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiffTag {
    Added,
    Removed,
}

impl DiffTag {
    /// Line prefix used when rendering a diff
    pub fn marker(&self) -> &'static str {
        match self {
            DiffTag::Added => "+ ",
            DiffTag::Removed => "- ",
        }
    }
}

/// A line added to or removed from the old page
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DiffLine {
    pub tag: DiffTag,
    pub text: String,
}

impl DiffLine {
    pub fn added(text: impl Into<String>) -> Self {
        Self {
            tag: DiffTag::Added,
            text: text.into(),
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            tag: DiffTag::Removed,
            text: text.into(),
        }
    }
}

impl fmt::Display for DiffLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.tag.marker(), self.text)
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageComparisonResult {
    pub page_num: u32,
    pub in_both: bool,
    pub status: PageStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>, // [0, 100], present iff in_both
    #[serde(default)]
    pub differences: Vec<DiffLine>,
}

impl PageComparisonResult {
    pub fn only_in_new(page_num: u32) -> Self {
        Self::missing(page_num, PageStatus::OnlyInNew)
    }

    pub fn only_in_old(page_num: u32) -> Self {
        Self::missing(page_num, PageStatus::OnlyInOld)
    }

    fn missing(page_num: u32, status: PageStatus) -> Self {
        Self {
            page_num,
            in_both: false,
            status,
            similarity: None,
            differences: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    UpgradeUseful,
    UpgradeNotEssential,
}

impl Recommendation {
    pub fn description(&self) -> &'static str {
        match self {
            Recommendation::UpgradeUseful => "Getting the new version looks worthwhile",
            Recommendation::UpgradeNotEssential => "The new version does not seem essential",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::UpgradeUseful => f.write_str("UPGRADE_USEFUL"),
            Recommendation::UpgradeNotEssential => f.write_str("UPGRADE_NOT_ESSENTIAL"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonSummary {
    pub total_pages: usize,
    pub significantly_different_pages: usize,
    pub percent_different: f64, // rounded to 2 decimals
    pub recommendation: Recommendation,
}

/// Everything the presentation layer needs for one comparison
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ComparisonReport {
    pub summary: ComparisonSummary,
    pub results: Vec<PageComparisonResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_accepts_consecutive_pages() {
        let doc = Document::new(vec![
            Page::new(1, vec!["a".to_string()]),
            Page::new(2, vec![]),
        ])
        .unwrap();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get(1).map(|p| p.number), Some(2));
    }

    #[test]
    fn test_document_rejects_zero_page_number() {
        let err = Document::new(vec![Page::new(0, vec![])]).unwrap_err();
        assert_eq!(err, ShapeError::ZeroPageNumber { position: 0 });
    }

    #[test]
    fn test_document_rejects_gap_in_numbering() {
        let err = Document::new(vec![Page::new(1, vec![]), Page::new(3, vec![])]).unwrap_err();
        assert_eq!(
            err,
            ShapeError::PageOutOfOrder {
                expected: 2,
                found: 3
            }
        );
        assert!(err.to_string().starts_with("Invalid input shape"));
    }

    #[test]
    fn test_from_lines_numbers_pages() {
        let doc = Document::from_lines(vec![vec!["hello", "world"], vec!["bye"]]);
        let numbers: Vec<u32> = doc.iter().map(|p| p.number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(doc.pages()[0].text(), "hello\nworld");
    }

    #[test]
    fn test_document_deserialization_validates_numbers() {
        let ok: Document =
            serde_json::from_str(r#"[{"number":1,"lines":["x"]},{"number":2,"lines":[]}]"#)
                .unwrap();
        assert_eq!(ok.len(), 2);

        let bad = serde_json::from_str::<Document>(r#"[{"number":2,"lines":["x"]}]"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&PageStatus::OnlyInNew).unwrap();
        assert_eq!(json, "\"ONLY_IN_NEW\"");
        assert_eq!(PageStatus::OnlyInNew.to_string(), "ONLY_IN_NEW");

        let json = serde_json::to_string(&Recommendation::UpgradeNotEssential).unwrap();
        assert_eq!(json, "\"UPGRADE_NOT_ESSENTIAL\"");
    }

    #[test]
    fn test_status_significance() {
        assert!(!PageStatus::Identical.is_significant());
        assert!(!PageStatus::Similar.is_significant());
        assert!(PageStatus::Different.is_significant());
        assert!(PageStatus::OnlyInNew.is_significant());
        assert!(PageStatus::OnlyInOld.is_significant());
    }

    #[test]
    fn test_diff_line_display() {
        assert_eq!(DiffLine::added("line C").to_string(), "+ line C");
        assert_eq!(DiffLine::removed("line B").to_string(), "- line B");
    }

    #[test]
    fn test_missing_page_result_omits_similarity() {
        let result = PageComparisonResult::only_in_old(4);
        assert!(!result.in_both);
        assert_eq!(result.status, PageStatus::OnlyInOld);

        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("similarity").is_none());
        assert_eq!(json["differences"], serde_json::json!([]));
    }
}
