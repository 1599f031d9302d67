use crate::config::{DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_REVALIDATE_SECS};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File-based configuration for deployments that pin the source in a
/// checked-in file instead of CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: DashboardSection,
    pub source: SourceSection,
    pub refresh: Option<RefreshSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub sheet_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSection {
    pub revalidate_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl ConfigProvider for TomlConfig {
    fn sheet_url(&self) -> &str {
        &self.source.sheet_url
    }

    fn revalidate_secs(&self) -> u64 {
        self.refresh
            .as_ref()
            .and_then(|r| r.revalidate_seconds)
            .unwrap_or(DEFAULT_REVALIDATE_SECS)
    }

    fn request_timeout_secs(&self) -> u64 {
        self.source
            .timeout_seconds
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dashboard.name", &self.dashboard.name)?;
        validate_url("source.sheet_url", &self.source.sheet_url)?;
        validate_range("refresh.revalidate_seconds", self.revalidate_secs(), 5, 3600)?;
        validate_range("source.timeout_seconds", self.request_timeout_secs(), 1, 120)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[dashboard]
name = "election-2026"
description = "Live results board"

[source]
sheet_url = "https://example.com/export?format=csv"
timeout_seconds = 15

[refresh]
revalidate_seconds = 30
"#;

    #[test]
    fn test_from_str_reads_all_sections() {
        let config = TomlConfig::from_str(SAMPLE).unwrap();
        assert_eq!(config.dashboard.name, "election-2026");
        assert_eq!(config.sheet_url(), "https://example.com/export?format=csv");
        assert_eq!(config.request_timeout_secs(), 15);
        assert_eq!(config.revalidate_secs(), 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_refresh_section_uses_defaults() {
        let config = TomlConfig::from_str(
            r#"
[dashboard]
name = "election-2026"

[source]
sheet_url = "https://example.com/export?format=csv"
"#,
        )
        .unwrap();
        assert_eq!(config.revalidate_secs(), DEFAULT_REVALIDATE_SECS);
        assert_eq!(config.request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(TomlConfig::from_str("[dashboard").is_err());
        assert!(TomlConfig::from_str("[dashboard]\nname = \"x\"").is_err());
    }

    #[test]
    fn test_validation_catches_bad_values() {
        let mut config = TomlConfig::from_str(SAMPLE).unwrap();
        config.source.sheet_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());

        let mut config = TomlConfig::from_str(SAMPLE).unwrap();
        config.refresh = Some(RefreshSection {
            revalidate_seconds: Some(2),
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tallyboard.toml");
        std::fs::write(&path, SAMPLE).unwrap();
        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.dashboard.name, "election-2026");
    }
}
