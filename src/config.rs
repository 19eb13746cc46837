use crate::error::{MovieLookupError, Result};
use movie_lookup_common::CorruptionPolicy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_API_BASE_URL: &str = "https://www.omdbapi.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base_url: String,
    pub timeout_seconds: u64,
    /// お気に入りの保存先（未指定ならデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    pub corruption_policy: CorruptionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base_url: DEFAULT_API_BASE_URL.into(),
            timeout_seconds: 10,
            data_dir: None,
            corruption_policy: CorruptionPolicy::Discard,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| MovieLookupError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("movie-lookup").join("config.json"))
    }

    pub fn get_api_key(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(key) = std::env::var("OMDB_API_KEY") {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.api_key
            .clone()
            .filter(|key| !key.trim().is_empty())
            .ok_or(MovieLookupError::MissingApiKey)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    /// お気に入りファイルを置くディレクトリ
    pub fn favorites_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let data = dirs::data_dir()
            .ok_or_else(|| MovieLookupError::Config("データディレクトリが見つかりません".into()))?;
        Ok(data.join("movie-lookup"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.corruption_policy, CorruptionPolicy::Discard);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"corruption_policy": "fail"}"#).unwrap();
        assert_eq!(config.corruption_policy, CorruptionPolicy::Fail);
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_blank_stored_api_key_is_missing() {
        if std::env::var("OMDB_API_KEY").is_ok() {
            return;
        }
        let config = Config {
            api_key: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.get_api_key(), Err(MovieLookupError::MissingApiKey)));

        let config = Config {
            api_key: Some("abc123".to_string()),
            ..Default::default()
        };
        assert_eq!(config.get_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_favorites_dir_override() {
        let config = Config {
            data_dir: Some(PathBuf::from("/tmp/movie-lookup-test")),
            ..Default::default()
        };
        assert_eq!(config.favorites_dir().unwrap(), PathBuf::from("/tmp/movie-lookup-test"));
    }
}
