//! Configuration management for CareerBuzz.
//!
//! Loads configuration from ${CAREERBUZZ_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the configured API base URL.
pub const API_URL_ENV: &str = "CAREERBUZZ_API_URL";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for CareerBuzz configuration and data directories.
    //!
    //! CAREERBUZZ_HOME resolution order:
    //! 1. CAREERBUZZ_HOME environment variable (if set)
    //! 2. ~/.config/careerbuzz (default)
    //! 3. ./.careerbuzz when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the CareerBuzz home directory.
    pub fn careerbuzz_home() -> PathBuf {
        if let Ok(home) = std::env::var("CAREERBUZZ_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".careerbuzz"),
            |h| h.join(".config").join("careerbuzz"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        careerbuzz_home().join("config.toml")
    }

    /// Returns the path to the preferences file backing the theme store.
    pub fn preferences_path() -> PathBuf {
        careerbuzz_home().join("preferences.toml")
    }

    /// Returns the directory holding rolling log files.
    pub fn logs_dir() -> PathBuf {
        careerbuzz_home().join("logs")
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the remote CareerBuzz service.
    pub api_base_url: String,
}

impl Config {
    pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the API base URL with precedence: env > config > default.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended directly.
    ///
    /// # Errors
    /// Returns an error if the winning value is not a valid URL.
    pub fn effective_api_base_url(&self) -> Result<String> {
        let env_url = std::env::var(API_URL_ENV).ok();
        resolve_base_url(env_url.as_deref(), Some(&self.api_base_url))
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    /// Writes config content to a file, creating parent directories as needed.
    /// Uses atomic write (temp file + rename) to prevent corruption.
    fn write_config(path: &Path, content: &str) -> Result<()> {
        write_atomic(path, content)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Picks the first non-blank candidate (env first, then config), falling back
/// to the default, and validates it.
fn resolve_base_url(env_url: Option<&str>, config_url: Option<&str>) -> Result<String> {
    let chosen = [env_url, config_url]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(Config::DEFAULT_API_BASE_URL);

    url::Url::parse(chosen).with_context(|| format!("Invalid CareerBuzz API URL: {chosen}"))?;
    Ok(chosen.trim_end_matches('/').to_string())
}

/// Writes `content` to `path` through a sibling temp file and a rename.
pub(crate) fn write_atomic(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, content)
        .with_context(|| format!("Failed to write {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "Failed to rename {} to {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn test_load_reads_api_base_url() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = \"https://api.careerbuzz.dev\"\n").unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, "https://api.careerbuzz.dev");
    }

    #[test]
    fn test_load_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "api_base_url = [").unwrap();

        assert!(Config::load_from(&config_path).is_err());
    }

    #[test]
    fn test_init_creates_config_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("# CareerBuzz Configuration"));
        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.api_base_url, Config::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");
        fs::write(&config_path, "").unwrap();

        let err = Config::init(&config_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_resolve_base_url_env_wins() {
        let url = resolve_base_url(Some("http://env:9000"), Some("http://config:8000")).unwrap();
        assert_eq!(url, "http://env:9000");
    }

    #[test]
    fn test_resolve_base_url_blank_env_falls_back_to_config() {
        let url = resolve_base_url(Some("   "), Some("http://config:8000/")).unwrap();
        assert_eq!(url, "http://config:8000");
    }

    #[test]
    fn test_resolve_base_url_default_when_unset() {
        let url = resolve_base_url(None, Some("")).unwrap();
        assert_eq!(url, Config::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_resolve_base_url_rejects_garbage() {
        assert!(resolve_base_url(None, Some("not a url")).is_err());
    }
}
