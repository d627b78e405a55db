//! Cleaning configuration file.
//!
//! A [`CleanConfig`] is the JSON form of one pipeline run: where to read,
//! where to write, how to parse the input, and the per-column strategies.

use crate::cleaner::{ColumnStrategy, LoadOptions, StrategyConfig};
use crate::error::{CleanerError, Result, ResultExt as _};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Current configuration version
pub const CONFIG_VERSION: &str = "0.1";

/// Root cleaning configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanConfig {
    /// Configuration version for future migrations
    #[serde(default = "default_version")]
    pub version: String,

    /// Raw input file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<PathBuf>,

    /// Cleaned output file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Abort on configuration issues instead of logging them
    #[serde(default)]
    pub strict: bool,

    /// How the input is parsed
    #[serde(default)]
    pub load: LoadOptions,

    /// Per-column missing-value strategies, applied in order
    #[serde(default)]
    pub strategies: StrategyConfig,
}

fn default_version() -> String {
    CONFIG_VERSION.to_owned()
}

impl Default for CleanConfig {
    fn default() -> Self {
        Self::new(StrategyConfig::default())
    }
}

impl CleanConfig {
    pub fn new(strategies: StrategyConfig) -> Self {
        Self {
            version: default_version(),
            input: None,
            output: None,
            strict: false,
            load: LoadOptions::default(),
            strategies,
        }
    }

    /// Starter configuration for the Kepler objects-of-interest dataset.
    pub fn default_template() -> Self {
        let strategies = StrategyConfig::new()
            .with_column("kepler_name", ColumnStrategy::UnknownCategory)
            .with_column("koi_score", ColumnStrategy::DropRows);
        Self {
            input: Some(PathBuf::from("data/raw/cumulative.csv")),
            output: Some(PathBuf::from("data/cleaned/clean_data.csv")),
            ..Self::new(strategies)
        }
    }

    /// Load a configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CleanerError::Config(e.to_string()))
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Parse a configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save the configuration to a JSON file
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self
            .to_json()
            .with_context(|| format!("Serializing config for {}", path.display()))?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CleanerError::write(parent, e))?;
        }
        std::fs::write(path, json).map_err(|e| CleanerError::write(path, e))
    }

    /// Serialize the configuration to a JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    #![expect(clippy::unwrap_used)]

    use super::*;
    use crate::cleaner::FillValue;

    #[test]
    fn test_parse_minimal_config() {
        let config = CleanConfig::from_json(
            r#"{
                "strategies": {
                    "kepler_name": {"strategy": "unknown_category"},
                    "koi_score": {"strategy": "drop_rows"}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.version, CONFIG_VERSION);
        assert!(!config.strict);
        assert_eq!(config.load, LoadOptions::default());
        let order: Vec<&str> = config.strategies.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["kepler_name", "koi_score"]);
    }

    #[test]
    fn test_strategy_order_follows_file() {
        let config = CleanConfig::from_json(
            r#"{"strategies": {"z": {"strategy": "drop_rows"}, "a": {"strategy": "drop_rows"}}}"#,
        )
        .unwrap();
        let order: Vec<&str> = config.strategies.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(order, vec!["z", "a"]);
    }

    #[test]
    fn test_permissive_strategy_entries() {
        let config = CleanConfig::from_json(
            r#"{
                "strategies": {
                    "a": {"strategy": "interpolate"},
                    "b": {"value": 3},
                    "c": {"strategy": "fill_with_value"},
                    "d": {"strategy": "fill_with_value", "value": 2.5, "note": "ignored"},
                    "e": {"strategy": "fill_with_value", "value": "none given"}
                }
            }"#,
        )
        .unwrap();

        let s = &config.strategies;
        assert_eq!(
            s.get("a"),
            Some(&ColumnStrategy::Unrecognized("interpolate".to_owned()))
        );
        assert_eq!(s.get("b"), Some(&ColumnStrategy::Unrecognized(String::new())));
        assert_eq!(s.get("c"), Some(&ColumnStrategy::FillWithValue(None)));
        assert_eq!(
            s.get("d"),
            Some(&ColumnStrategy::FillWithValue(Some(FillValue::Float(2.5))))
        );
        assert_eq!(
            s.get("e"),
            Some(&ColumnStrategy::FillWithValue(Some(FillValue::Text(
                "none given".to_owned()
            ))))
        );
    }

    #[test]
    fn test_template_round_trip() {
        let template = CleanConfig::default_template();
        let json = template.to_json().unwrap();
        assert!(json.contains("\"unknown_category\""));

        let parsed = CleanConfig::from_json(&json).unwrap();
        assert_eq!(parsed, template);
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let err = CleanConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let err = CleanConfig::from_file("no/such/config.json").unwrap_err();
        assert!(matches!(err, CleanerError::Config(_)));
        assert!(err.to_string().contains("Failed to read no/such/config.json"));
    }

    #[test]
    fn test_invalid_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ \"strategies\": [").unwrap();

        let err = CleanConfig::from_file(&path).unwrap_err();

        match err {
            CleanerError::Config(msg) => {
                assert!(msg.starts_with(&format!("Invalid config {}", path.display())));
                assert!(msg.contains("JSON error"));
            }
            other => panic!("expected config error, got {other:?}"),
        }
    }
}
