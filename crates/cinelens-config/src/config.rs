use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Static API key, sent as a query parameter on every request.
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.provider.api_key.trim().is_empty() {
            return Err(anyhow::anyhow!(
                "provider.api_key is not set. Add it to config.toml or set CINELENS_API_KEY"
            ));
        }
        if !self.provider.base_url.starts_with("http") {
            return Err(anyhow::anyhow!(
                "provider.base_url must be an http(s) URL, got '{}'",
                self.provider.base_url
            ));
        }
        Ok(())
    }

    /// Load config from the given path, letting CINELENS_API_KEY override
    /// (or stand in for) the configured key.
    pub fn load_with_env(path: &PathBuf) -> anyhow::Result<Self> {
        let mut config = if path.exists() {
            Self::load_from_file(path)?
        } else {
            Config {
                provider: ProviderConfig {
                    api_key: String::new(),
                    base_url: default_base_url(),
                    language: default_language(),
                },
            }
        };
        if let Ok(key) = std::env::var("CINELENS_API_KEY") {
            if !key.trim().is_empty() {
                config.provider.api_key = key;
            }
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_load_and_save() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            provider: ProviderConfig {
                api_key: "abc123".to_string(),
                base_url: default_base_url(),
                language: "en-US".to_string(),
            },
        };
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.provider.api_key, "abc123");
        assert_eq!(loaded.provider.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_config_defaults_applied_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[provider]\napi_key = \"k\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.provider.base_url, DEFAULT_BASE_URL);
        assert_eq!(loaded.provider.language, "en-US");
    }

    #[test]
    fn test_config_validate_rejects_blank_key() {
        let config = Config {
            provider: ProviderConfig {
                api_key: "  ".to_string(),
                base_url: default_base_url(),
                language: "en-US".to_string(),
            },
        };
        assert!(config.validate().is_err());
    }
}
