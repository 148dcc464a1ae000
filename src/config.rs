use crate::feature::Feature;
use eyre::{Context, ContextCompat, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

/// Feature manifest for the gate
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Features keyed by name
    #[serde(default)]
    pub features: BTreeMap<String, FeatureConfig>,
}

/// Configuration of a single feature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureConfig {
    /// Directory the feature depends on
    pub path: String,
}

impl Config {
    /// Load configuration from a file path
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        let config_file = match config_path {
            Some(path) => path.clone(),
            None => Self::default_config_path()?,
        };

        if config_file.exists() {
            log::debug!("loading config from {}", config_file.display());

            let content = fs::read_to_string(&config_file).with_context(|| {
                format!("Failed to read config file: {}", config_file.display())
            })?;

            Self::parse(&content).with_context(|| {
                format!("Failed to parse config file: {}", config_file.display())
            })
        } else {
            // Return default config if file doesn't exist
            log::debug!("no config at {}, using defaults", config_file.display());
            Ok(Self::default())
        }
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        // an empty document is valid and means no features
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Get the default configuration file path
    fn default_config_path() -> Result<PathBuf> {
        let candidates = [
            PathBuf::from(".featgate.yaml"),
            PathBuf::from(".featgate.yml"),
            PathBuf::from("featgate.yaml"),
            PathBuf::from("featgate.yml"),
        ];

        for candidate in candidates {
            if candidate.exists() {
                return Ok(candidate);
            }
        }

        let config_dir = dirs::config_local_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .context("Could not determine config directory")?;

        Ok(config_dir.join("featgate").join("config.yaml"))
    }

    /// Add or replace a feature
    pub fn insert(&mut self, feature: Feature) {
        self.features
            .insert(feature.name, FeatureConfig { path: feature.path });
    }

    /// Configured features, ordered by name
    pub fn features(&self) -> Vec<Feature> {
        self.features
            .iter()
            .map(|(name, feature)| Feature::new(name.clone(), feature.path.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_features() {
        let yaml = r#"
features:
  scaleform:
    path: Code/SDKs/Scaleform
  oculus:
    path: /opt/oculus
"#;
        let config = Config::parse(yaml).expect("Failed to parse config");

        assert_eq!(
            config.features(),
            vec![
                Feature::new("oculus", "/opt/oculus"),
                Feature::new("scaleform", "Code/SDKs/Scaleform"),
            ]
        );
    }

    #[test]
    fn test_parse_empty_document() {
        assert_eq!(Config::parse("").unwrap(), Config::default());
        assert_eq!(Config::parse("features: {}").unwrap(), Config::default());
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_missing_path_fails() {
        let yaml = "features:\n  scaleform: {}\n";
        assert!(Config::parse(yaml).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("featgate.yaml");
        fs::write(&config_path, "features:\n  sdk:\n    path: /opt/sdk\n")
            .expect("Failed to write config");

        let config = Config::load(Some(&config_path)).expect("Failed to load config");
        assert_eq!(config.features(), vec![Feature::new("sdk", "/opt/sdk")]);
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nope.yaml");

        let config = Config::load(Some(&config_path)).expect("Failed to load config");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_file_names_it() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("broken.yaml");
        fs::write(&config_path, "features: [not, a, map").expect("Failed to write config");

        let err = Config::load(Some(&config_path)).unwrap_err();
        assert!(format!("{}", err).contains("broken.yaml"));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut config = Config::default();
        config.insert(Feature::new("sdk", "/old"));
        config.insert(Feature::new("sdk", "/new"));

        assert_eq!(config.features(), vec![Feature::new("sdk", "/new")]);
    }

    #[test]
    fn test_yaml_roundtrip_shape() {
        let mut config = Config::default();
        config.insert(Feature::new("sdk", "/opt/sdk"));

        let yaml = serde_yaml::to_string(&config).expect("Failed to serialize");
        assert!(yaml.contains("sdk:"));
        assert!(yaml.contains("path: /opt/sdk"));
    }
}
