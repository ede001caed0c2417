// ============================================================
// LOADER CONFIGURATION
// ============================================================
// Source URL, sampling quota and output key settings for a load cycle

use serde::{Deserialize, Serialize};

use super::stimuli::Dimension;

pub const DEFAULT_SOURCE_URL: &str =
    "https://rheakk.github.io/headlines/headlines_with_neutral_and_cuemap.csv";

/// Configuration for one load cycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// CSV location (default: the published headline sheet)
    pub source_url: String,

    /// Rows drawn from each dimension (default: 6)
    pub per_dimension: usize,

    /// Delay before the survey is advanced after a successful write (default: 150)
    pub advance_delay_ms: u64,

    /// Optional request timeout. `None` waits forever.
    pub fetch_timeout_secs: Option<u64>,

    /// Embedded-data key the fetched URL is recorded under
    pub url_audit_key: String,

    /// Query parameter carrying the cache-busting timestamp
    pub cache_bust_param: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            per_dimension: 6,
            advance_delay_ms: 150,
            fetch_timeout_secs: None,
            url_audit_key: "StimuliCsvUrlUsed".to_string(),
            cache_bust_param: "t".to_string(),
        }
    }
}

impl LoaderConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Total numbered output slots (one per sampled row)
    pub fn slot_count(&self) -> usize {
        self.per_dimension * Dimension::ALL.len()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        let parsed = url::Url::parse(&self.source_url)
            .map_err(|e| format!("source_url is not a valid URL: {}", e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(format!(
                "source_url must use http or https, got {}",
                parsed.scheme()
            ));
        }
        if self.per_dimension == 0 {
            return Err("per_dimension must be > 0".to_string());
        }
        if self.fetch_timeout_secs == Some(0) {
            return Err("fetch_timeout_secs must be > 0 when set".to_string());
        }
        if self.url_audit_key.trim().is_empty() {
            return Err("url_audit_key must not be empty".to_string());
        }
        if self.cache_bust_param.trim().is_empty() {
            return Err("cache_bust_param must not be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_survey_flow() {
        let config = LoaderConfig::default();
        assert_eq!(config.per_dimension, 6);
        assert_eq!(config.slot_count(), 18);
        assert_eq!(config.advance_delay_ms, 150);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = LoaderConfig::default();
        config.per_dimension = 0;
        assert!(config.validate().is_err());

        let mut config = LoaderConfig::default();
        config.source_url = "ftp://example.com/a.csv".to_string();
        assert!(config.validate().is_err());

        let mut config = LoaderConfig::default();
        config.source_url = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = LoaderConfig::default();
        config.fetch_timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }
}
