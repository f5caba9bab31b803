use thiserror::Error;

/// Upstream extractor handed over pages that do not form a document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("Invalid input shape: page at position {position} has number 0 (pages are 1-based)")]
    ZeroPageNumber { position: usize },

    #[error("Invalid input shape: expected page {expected}, found page {found}")]
    PageOutOfOrder { expected: u32, found: u32 },
}
