//! Configuration parsing for comparison thresholds
//!
//! Thresholds are read from an optional TOML file. Every key is optional
//! and falls back to the engine's built-in value:
//!
//! ```toml
//! [thresholds]
//! identical = 95.0
//! similar = 80.0
//! upgrade_percent = 20.0
//! ```

use anyhow::Context;
use revision_engine::{RevisionEngine, Thresholds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Tier and recommendation thresholds
    #[serde(default)]
    pub thresholds: Thresholds,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - The thresholds are out of range or inverted
    ///
    /// # Example
    ///
    /// ```no_run
    /// use revision_cli::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("thresholds.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use revision_cli::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str("[thresholds]\nsimilar = 75.0")?;
    /// assert_eq!(config.thresholds.similar, 75.0);
    /// assert_eq!(config.thresholds.identical, 95.0);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.thresholds.validate()?;
        Ok(config)
    }

    /// Build an engine using these thresholds
    pub fn engine(&self) -> anyhow::Result<RevisionEngine> {
        RevisionEngine::with_thresholds(self.thresholds).context("Invalid threshold configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use revision_engine::{IDENTICAL_THRESHOLD, SIMILAR_THRESHOLD, UPGRADE_THRESHOLD_PERCENT};
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.thresholds.identical, IDENTICAL_THRESHOLD);
        assert_eq!(config.thresholds.similar, SIMILAR_THRESHOLD);
        assert_eq!(config.thresholds.upgrade_percent, UPGRADE_THRESHOLD_PERCENT);
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [thresholds]
            identical = 98.0
            similar = 70.0
            upgrade_percent = 10.0
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.thresholds.identical, 98.0);
        assert_eq!(config.thresholds.similar, 70.0);
        assert_eq!(config.thresholds.upgrade_percent, 10.0);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_str("[thresholds]\nupgrade_percent = 50.0").unwrap();
        assert_eq!(config.thresholds.upgrade_percent, 50.0);
        assert_eq!(config.thresholds.identical, IDENTICAL_THRESHOLD);
    }

    #[test]
    fn test_rejects_inverted_thresholds() {
        let toml = r#"
            [thresholds]
            identical = 60.0
            similar = 80.0
        "#;
        let err = Config::from_str(toml).unwrap_err();
        assert!(err.to_string().contains("similar"));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(Config::from_str("[thresholds\nidentical = ").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[thresholds]\nsimilar = 85.0").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.thresholds.similar, 85.0);
        assert!(config.engine().is_ok());
    }

    #[test]
    fn test_from_missing_file() {
        let err = Config::from_file("/nonexistent/thresholds.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
