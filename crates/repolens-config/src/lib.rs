use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variables consulted before the config file, in order.
pub const API_KEY_ENV_VARS: [&str; 2] = ["REPOLENS_API_KEY", "GEMINI_API_KEY"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Analysis service credential. The environment variables in
    /// [`API_KEY_ENV_VARS`] take precedence over this value.
    pub api_key: Option<String>,
    /// Model id override; the client's default applies when unset.
    pub model: Option<String>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/repolens");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// The credential to use: environment first, then the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        api_key_from_env().or_else(|| self.api_key.clone())
    }
}

/// Reads the first non-empty credential from [`API_KEY_ENV_VARS`].
pub fn api_key_from_env() -> Option<String> {
    API_KEY_ENV_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|value| !value.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/repolens/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            api_key: Some("test-key".to_string()),
            model: Some("gemini-3-pro-preview".to_string()),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.api_key, deserialized.api_key);
        assert_eq!(original.model, deserialized.model);
    }

    #[test]
    fn test_partial_config_parses() {
        let config: Config = toml::from_str(r#"api_key = "k""#).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.model, None);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            api_key: Some("saved-key".to_string()),
            model: None,
        };

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.api_key.as_deref(), Some("saved-key"));
        assert_eq!(loaded_config.model, None);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config::default();

        test_config.save_to_path(&config_file).unwrap();

        assert!(config_file.exists(), "Config file should exist");
    }

    // Single test so the shared process environment is not mutated from
    // parallel test threads.
    #[test]
    fn test_api_key_resolution_precedence() {
        unsafe {
            env::remove_var("REPOLENS_API_KEY");
            env::remove_var("GEMINI_API_KEY");
        }

        let config = Config {
            api_key: Some("file-key".to_string()),
            model: None,
        };

        // Without env vars the config file key wins.
        assert_eq!(config.resolve_api_key().as_deref(), Some("file-key"));

        // Env var overrides the config file.
        unsafe {
            env::set_var("REPOLENS_API_KEY", "env-key");
        }
        assert_eq!(config.resolve_api_key().as_deref(), Some("env-key"));
        unsafe {
            env::remove_var("REPOLENS_API_KEY");
        }

        // A blank env var is ignored entirely.
        unsafe {
            env::set_var("GEMINI_API_KEY", "   ");
        }
        assert_eq!(Config::default().resolve_api_key(), None);
        unsafe {
            env::remove_var("GEMINI_API_KEY");
        }
    }
}
