pub mod error;
pub mod text;
pub mod types;

pub use error::ShapeError;
pub use text::{split_lines, PAGE_SEPARATOR};
pub use types::{
    ComparisonReport, ComparisonSummary, DiffLine, DiffTag, Document, Page, PageComparisonResult,
    PageStatus, Recommendation,
};
