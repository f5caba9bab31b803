//! Tier and recommendation thresholds
//!
//! Similarity scores are compared strictly against these values:
//!
//! - `score > identical` is `Identical`
//! - `similar < score <= identical` is `Similar`
//! - `score <= similar` is `Different`

use serde::{Deserialize, Serialize};
use shared_types::PageStatus;

use crate::error::EngineError;

/// Pages scoring above this are treated as identical
pub const IDENTICAL_THRESHOLD: f64 = 95.0;

/// Pages scoring above this (and not identical) are similar
pub const SIMILAR_THRESHOLD: f64 = 80.0;

/// Documents with more than this percentage of significantly different
/// pages are worth upgrading to
pub const UPGRADE_THRESHOLD_PERCENT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_identical")]
    pub identical: f64,
    #[serde(default = "default_similar")]
    pub similar: f64,
    #[serde(default = "default_upgrade_percent")]
    pub upgrade_percent: f64,
}

fn default_identical() -> f64 {
    IDENTICAL_THRESHOLD
}

fn default_similar() -> f64 {
    SIMILAR_THRESHOLD
}

fn default_upgrade_percent() -> f64 {
    UPGRADE_THRESHOLD_PERCENT
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            identical: IDENTICAL_THRESHOLD,
            similar: SIMILAR_THRESHOLD,
            upgrade_percent: UPGRADE_THRESHOLD_PERCENT,
        }
    }
}

impl Thresholds {
    /// All values must lie in `[0, 100]` and `similar <= identical`
    pub fn validate(&self) -> Result<(), EngineError> {
        for (name, value) in [
            ("identical", self.identical),
            ("similar", self.similar),
            ("upgrade_percent", self.upgrade_percent),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(EngineError::InvalidThresholds(format!(
                    "{} must be within [0, 100] (got {})",
                    name, value
                )));
            }
        }

        if self.similar > self.identical {
            return Err(EngineError::InvalidThresholds(format!(
                "similar ({}) must not exceed identical ({})",
                self.similar, self.identical
            )));
        }

        Ok(())
    }

    /// Tier for a page pair present in both documents
    pub fn classify(&self, similarity: f64) -> PageStatus {
        if similarity > self.identical {
            PageStatus::Identical
        } else if similarity > self.similar {
            PageStatus::Similar
        } else {
            PageStatus::Different
        }
    }
}
