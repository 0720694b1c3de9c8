//! Configuration loading
//!
//! Configuration is a JSON file; every field is optional.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::diet::catalog::{catalog_from_json, reference_catalog};
use crate::diet::types::FoodItem;
use crate::error::WellnessError;

/// Environment variable naming a config file
pub const CONFIG_ENV_VAR: &str = "WELLNESS_CONFIG";

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

/// Runtime configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WellnessConfig {
    /// Replacement food catalog (JSON array of food items)
    pub catalog_path: Option<PathBuf>,
    /// Default output format for the CLI
    pub output: Option<OutputFormat>,
    /// Log filter directive, e.g. `wellness_core=debug`
    pub log_filter: Option<String>,
}

impl WellnessConfig {
    /// Load configuration from a file.
    ///
    /// A relative `catalog_path` is resolved against the config file's directory.
    pub fn load(path: &Path) -> Result<Self, WellnessError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            WellnessError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let mut config: WellnessConfig = serde_json::from_str(&content).map_err(|e| {
            WellnessError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        if let (Some(catalog), Some(dir)) = (&config.catalog_path, path.parent()) {
            if catalog.is_relative() {
                config.catalog_path = Some(dir.join(catalog));
            }
        }

        Ok(config)
    }

    /// Load from `WELLNESS_CONFIG` if set, otherwise use defaults
    pub fn discover() -> Result<Self, WellnessError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    /// The configured catalog, or the reference catalog when none is set
    pub fn load_catalog(&self) -> Result<Vec<FoodItem>, WellnessError> {
        match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path).map_err(|e| {
                    WellnessError::ConfigError(format!(
                        "Failed to read catalog {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                catalog_from_json(&json)
            }
            None => Ok(reference_catalog()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = WellnessConfig::default();
        assert!(config.catalog_path.is_none());
        assert_eq!(config.load_catalog().unwrap().len(), 21);
    }

    #[test]
    fn test_load_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "output": "json-pretty" }"#).unwrap();

        let config = WellnessConfig::load(&path).unwrap();
        assert_eq!(config.output, Some(OutputFormat::JsonPretty));
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_unknown_output_format_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "output": "yaml" }"#).unwrap();

        let err = WellnessConfig::load(&path).unwrap_err();
        assert!(matches!(err, WellnessError::ConfigError(_)));

        fs::write(&path, r#"{ "output": "json" }"#).unwrap();
        let config = WellnessConfig::load(&path).unwrap();
        assert_eq!(config.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_relative_catalog_path() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("foods.json"),
            r#"[{ "id": "1", "name": "Lentils", "calories": 230, "benefit": "Energy", "cost": 12 }]"#,
        )
        .unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "catalog_path": "foods.json" }"#).unwrap();

        let config = WellnessConfig::load(&path).unwrap();
        assert_eq!(config.catalog_path, Some(dir.path().join("foods.json")));

        let catalog = config.load_catalog().unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "Lentils");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = WellnessConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, WellnessError::ConfigError(_)));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ output: }").unwrap();
        let err = WellnessConfig::load(&path).unwrap_err();
        assert!(matches!(err, WellnessError::ConfigError(_)));
    }
}
