use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{LoaderError, Result};
use crate::domain::loader_config::LoaderConfig;

pub const CONFIG_FILE: &str = "stimuli-loader.toml";
pub const CONFIG_PATH_ENV: &str = "STIMULI_CONFIG";
pub const ENV_PREFIX: &str = "STIMULI_";

/// Layers defaults, an optional TOML file and `STIMULI_*` variables
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new() -> Self {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(CONFIG_FILE));
        Self::from_file(path)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let figment = Figment::from(Serialized::defaults(LoaderConfig::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]));
        Self { figment }
    }

    pub fn load(&self) -> Result<LoaderConfig> {
        let config: LoaderConfig = self.figment.extract()?;
        config.validate().map_err(LoaderError::Config)?;
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_when_nothing_is_set() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::from_file("absent.toml")
                .load()
                .map_err(|e| e.to_string())?;
            assert_eq!(config, LoaderConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_override() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "loader.toml",
                r#"
                source_url = "https://example.org/sheet.csv"
                per_dimension = 4
                advance_delay_ms = 0
                "#,
            )?;
            jail.set_env("STIMULI_PER_DIMENSION", "3");
            jail.set_env("STIMULI_FETCH_TIMEOUT_SECS", "10");

            let config = ConfigService::from_file("loader.toml")
                .load()
                .map_err(|e| e.to_string())?;
            assert_eq!(config.source_url, "https://example.org/sheet.csv");
            assert_eq!(config.per_dimension, 3);
            assert_eq!(config.advance_delay_ms, 0);
            assert_eq!(config.fetch_timeout_secs, Some(10));
            assert_eq!(config.url_audit_key, "StimuliCsvUrlUsed");
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("STIMULI_PER_DIMENSION", "0");
            let err = ConfigService::from_file("absent.toml").load().unwrap_err();
            assert!(matches!(err, LoaderError::Config(_)));
            Ok(())
        });
    }
}
