//! Client configuration.
//!
//! Configuration is layered: defaults, then the user's TOML config file,
//! then environment variables. The environment always wins so deployments
//! can point at a different backend without touching the file.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::{Error, Result};

/// Default backend base path.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Default per-request timeout in seconds.
///
/// The backend's emotion inference can take a while on large uploads, but a
/// hung call must not hang the UI forever.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the API base URL.
pub const ENV_API_URL: &str = "MENTALWELL_API_URL";

/// Environment variable overriding the config directory (used by tests).
pub const ENV_CONFIG_DIR: &str = "MENTALWELL_CONFIG_DIR";

/// Raw on-disk config shape. All fields optional so a partial file merges
/// cleanly over the defaults.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    api_base_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base path for every backend request, without a trailing slash.
    pub api_base_url: String,
    /// Timeout applied to each HTTP request.
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Load configuration from file and environment.
    pub fn load() -> Result<Self> {
        let mut raw = RawConfig::default();

        if let Some(path) = Self::config_path()
            && path.exists()
        {
            let contents = std::fs::read_to_string(&path)?;
            raw = toml::from_str(&contents)
                .map_err(|e| Error::Store(format!("bad config file {}: {}", path.display(), e)))?;
        }

        let mut config = Self {
            api_base_url: raw
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            request_timeout: Duration::from_secs(
                raw.request_timeout_secs
                    .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
            ),
        };

        if let Ok(url) = env::var(ENV_API_URL) {
            config.api_base_url = url;
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    /// Path of the user config file, if a config directory exists.
    ///
    /// `MENTALWELL_CONFIG_DIR` overrides the platform default for isolated
    /// test runs.
    pub fn config_path() -> Option<PathBuf> {
        if let Ok(dir) = env::var(ENV_CONFIG_DIR) {
            return Some(PathBuf::from(dir).join("config.toml"));
        }
        dirs::config_dir().map(|dir| dir.join("mentalwell").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:8000/api");
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn raw_config_parses_partial_file() {
        let raw: RawConfig = toml::from_str("api_base_url = \"https://api.example.com/api\"")
            .expect("partial config should parse");
        assert_eq!(
            raw.api_base_url.as_deref(),
            Some("https://api.example.com/api")
        );
        assert!(raw.request_timeout_secs.is_none());
    }

    #[test]
    fn raw_config_parses_empty_file() {
        let raw: RawConfig = toml::from_str("").expect("empty config should parse");
        assert!(raw.api_base_url.is_none());
        assert!(raw.request_timeout_secs.is_none());
    }
}
