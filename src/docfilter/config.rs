use crate::describe::Locale;
use crate::error::{FilterError, Result};
use crate::model::{Combination, OutputMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for docfilter, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct FilterConfig {
    /// Language used for filter descriptions
    #[serde(default)]
    pub locale: Locale,

    /// Connective used when a request does not name one
    #[serde(default)]
    pub combination: Combination,

    /// Output shape used when a request does not name one
    #[serde(default)]
    pub output: OutputMode,

    /// Keep going after a failing item in batch mode
    #[serde(default)]
    pub continue_on_fail: bool,
}

impl FilterConfig {
    pub const KEYS: &'static [&'static str] =
        &["locale", "combination", "output", "continue-on-fail"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: FilterConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locale" => Some(self.locale.to_string()),
            "combination" => Some(self.combination.as_str().to_string()),
            "output" => Some(self.output.as_str().to_string()),
            "continue-on-fail" => Some(self.continue_on_fail.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "locale" => self.locale = value.parse().map_err(FilterError::Config)?,
            "combination" => self.combination = value.parse().map_err(FilterError::Config)?,
            "output" => self.output = value.parse().map_err(FilterError::Config)?,
            "continue-on-fail" => {
                self.continue_on_fail = value.parse().map_err(|_| {
                    FilterError::Config(format!("Expected true or false, got {}", value))
                })?
            }
            other => return Err(FilterError::Config(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FilterConfig::default();
        assert_eq!(config.locale, Locale::PtBr);
        assert_eq!(config.combination, Combination::And);
        assert_eq!(config.output, OutputMode::Document);
        assert!(!config.continue_on_fail);
    }

    #[test]
    fn test_set_and_get_keys() {
        let mut config = FilterConfig::default();
        config.set("locale", "en").unwrap();
        config.set("combination", "OR").unwrap();
        config.set("output", "flat").unwrap();
        config.set("continue-on-fail", "true").unwrap();

        assert_eq!(config.get("locale").as_deref(), Some("en"));
        assert_eq!(config.get("combination").as_deref(), Some("or"));
        assert_eq!(config.get("output").as_deref(), Some("array"));
        assert_eq!(config.get("continue-on-fail").as_deref(), Some("true"));
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let mut config = FilterConfig::default();
        assert!(config.set("locale", "klingon").is_err());
        assert!(config.set("continue-on-fail", "maybe").is_err());
        assert!(config.set("colour", "red").is_err());
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = FilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, FilterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("nested");

        let mut config = FilterConfig::default();
        config.set("locale", "en").unwrap();
        config.save(&nested).unwrap();

        let loaded = FilterConfig::load(&nested).unwrap();
        assert_eq!(loaded.locale, Locale::En);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"combination": "or"}"#,
        )
        .unwrap();

        let config = FilterConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.combination, Combination::Or);
        assert_eq!(config.locale, Locale::PtBr);
    }
}
