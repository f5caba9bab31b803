//! Plain-text ingestion
//!
//! Text extractors commonly emit one file per document with pages
//! separated by a form feed. This module turns that text into a
//! [`Document`] without caring how the text was produced.

use crate::types::{Document, Page};

/// Separator between pages in extracted text
pub const PAGE_SEPARATOR: char = '\x0C';

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0B' | '\x0C' | '\x1C' | '\x1D' | '\x1E' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines at every line boundary.
///
/// `\r\n` counts as a single break, and a trailing break does not produce
/// an empty final line.
pub fn split_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.char_indices().find(|(_, c)| is_line_break(*c)) {
            Some((idx, brk)) => {
                lines.push(rest[..idx].to_string());
                let mut next = idx + brk.len_utf8();
                if brk == '\r' && rest[next..].starts_with('\n') {
                    next += 1;
                }
                rest = &rest[next..];
            }
            None => {
                lines.push(rest.to_string());
                break;
            }
        }
    }

    lines
}

impl Document {
    /// Parse form-feed separated text into pages of lines.
    ///
    /// A single trailing form feed closes the last page rather than
    /// opening an empty one. Empty input yields an empty document.
    pub fn from_text(text: &str) -> Self {
        if text.is_empty() {
            return Self::default();
        }

        let body = text.strip_suffix(PAGE_SEPARATOR).unwrap_or(text);
        Self::from_lines(body.split(PAGE_SEPARATOR).map(split_lines))
    }

    /// Render back to form-feed separated text.
    ///
    /// Round-trips through [`Document::from_text`] when no page is blank
    /// and no line contains a break.
    pub fn to_text(&self) -> String {
        self.iter()
            .map(Page::text)
            .collect::<Vec<_>>()
            .join(&PAGE_SEPARATOR.to_string())
    }
}
