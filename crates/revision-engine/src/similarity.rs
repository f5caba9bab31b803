//! Page similarity scoring
//!
//! The score is `100 * (1 - levenshtein(a, b) / max(len(a), len(b)))`,
//! measured in Unicode scalar values. It is symmetric, equals 100 for equal
//! strings (including two empty ones) and 0 against an empty string.
//! Scores are never rounded, so tier boundaries see the raw `f64`.
//!
//! Substitutions cost one edit here. An insert/delete-only (Indel) ratio,
//! `200 * lcs / (len(a) + len(b))`, counts them as two and scores length
//! changes higher: `"abcd"` against `"abcdefgh"` is 50 here and 66.67
//! under Indel. The tier thresholds apply to this metric's scores.

use shared_types::Page;

/// Normalized edit-distance similarity in `[0, 100]`
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 100.0;
    }
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// Similarity of two pages' newline-joined text
pub fn page_similarity(old: &Page, new: &Page) -> f64 {
    similarity_ratio(&old.text(), &new.text())
}
