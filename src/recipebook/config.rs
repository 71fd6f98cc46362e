use crate::error::{RecipeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

/// Which [`DataStore`](crate::store::DataStore) implementation backs the catalogue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Json,
    Sqlite,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Json => write!(f, "json"),
            Backend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Backend::Json),
            "sqlite" => Ok(Backend::Sqlite),
            other => Err(format!(
                "Unknown backend: {} (expected json or sqlite)",
                other
            )),
        }
    }
}

/// Configuration for recipebook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeConfig {
    #[serde(default)]
    pub backend: Backend,
}

impl RecipeConfig {
    pub const KEYS: &'static [&'static str] = &["backend"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: RecipeConfig = serde_json::from_str(&content)?;
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
            "backend" => Some(self.backend.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "backend" => {
                self.backend = value.parse().map_err(RecipeError::Api)?;
                Ok(())
            }
            _ => Err(RecipeError::Api(format!("Unknown config key: {}", key))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_json_backend() {
        assert_eq!(RecipeConfig::default().backend, Backend::Json);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = RecipeConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RecipeConfig::default());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RecipeConfig::default();
        config.set("backend", "SQLite").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RecipeConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.backend, Backend::Sqlite);
        assert_eq!(loaded.get("backend").as_deref(), Some("sqlite"));
    }

    #[test]
    fn rejects_unknown_keys_and_values() {
        let mut config = RecipeConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("backend", "postgres").is_err());
        assert_eq!(config.get("colour"), None);
    }

    #[test]
    fn missing_backend_field_uses_default() {
        let config: RecipeConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.backend, Backend::Json);
    }
}
