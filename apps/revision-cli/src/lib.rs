//! Command-line front end for revision comparison
//!
//! Reads two already-extracted text files (pages separated by form feeds),
//! compares them with [`revision_engine::RevisionEngine`] and renders the
//! resulting report.

pub mod config;
pub mod reporter;

pub use config::Config;
pub use reporter::{OutputFormat, Reporter};

use anyhow::Context;
use shared_types::Document;
use std::fs;
use std::path::Path;

/// Read a form-feed separated text file into a document
pub fn load_document<P: AsRef<Path>>(path: P) -> anyhow::Result<Document> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document: {}", path.display()))?;
    let document = Document::from_text(&text);
    tracing::debug!("Loaded {} pages from {}", document.len(), path.display());
    Ok(document)
}
