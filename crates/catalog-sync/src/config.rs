//! API Configuration
//!
//! Layered settings: built-in defaults, then a build-time base url, then a
//! JSON overlay the browser keeps in local storage. Each layer only
//! overrides the fields it sets.

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";
pub const DEFAULT_NOTICE_TTL_MS: u32 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("base url must be empty or start with http:// or https://, got {0:?}")]
    BaseUrl(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Empty means same origin.
    pub base_url: String,
    /// Sent as a bearer token when set.
    pub token: Option<String>,
    pub notice_ttl_ms: u32,
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            log_level: "info".to_string(),
        }
    }
}

/// Partial config; unset fields leave the layer below untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigOverlay {
    pub base_url: Option<String>,
    pub token: Option<String>,
    pub notice_ttl_ms: Option<u32>,
    pub log_level: Option<String>,
}

impl ConfigOverlay {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

impl ApiConfig {
    /// Builds the effective config. Bad layers are logged and skipped.
    pub fn resolve(stored: Option<&str>, build_base_url: Option<&str>) -> Self {
        let mut config = ApiConfig::default();
        if let Some(url) = build_base_url {
            let overlay = ConfigOverlay {
                base_url: Some(url.to_string()),
                ..Default::default()
            };
            if let Err(e) = config.apply(overlay) {
                warn!("ignoring build-time base url: {}", e);
            }
        }
        if let Some(raw) = stored {
            if let Err(e) = ConfigOverlay::from_json(raw).and_then(|overlay| config.apply(overlay)) {
                warn!("ignoring stored config: {}", e);
            }
        }
        config
    }

    /// Applies `overlay` on top of `self`; nothing changes on error.
    pub fn apply(&mut self, overlay: ConfigOverlay) -> Result<(), ConfigError> {
        let base_url = match overlay.base_url {
            Some(url) => normalize_base_url(&url)?,
            None => self.base_url.clone(),
        };
        self.base_url = base_url;
        if let Some(token) = overlay.token {
            let token = token.trim().to_string();
            self.token = (!token.is_empty()).then_some(token);
        }
        if let Some(ttl) = overlay.notice_ttl_ms {
            self.notice_ttl_ms = ttl;
        }
        if let Some(level) = overlay.log_level {
            self.log_level = level;
        }
        Ok(())
    }

    /// Absolute url for an API path such as `/products/3`.
    pub fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim().trim_end_matches('/');
    if url.is_empty() || url.starts_with("http://") || url.starts_with("https://") {
        Ok(url.to_string())
    } else {
        Err(ConfigError::BaseUrl(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ApiConfig::resolve(None, None);
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.url("/products"), "http://localhost:3333/products");
        assert_eq!(config.level(), log::Level::Info);
    }

    #[test]
    fn test_stored_overrides_build_time() {
        let config = ApiConfig::resolve(
            Some(r#"{"base_url":"https://api.example.test/","log_level":"debug"}"#),
            Some("http://build.example.test"),
        );
        assert_eq!(config.base_url, "https://api.example.test");
        assert_eq!(config.level(), log::Level::Debug);
        assert_eq!(config.notice_ttl_ms, DEFAULT_NOTICE_TTL_MS);
    }

    #[test]
    fn test_partial_overlay_keeps_lower_layers() {
        let config = ApiConfig::resolve(Some(r#"{"token":"abc"}"#), Some("http://build.example.test/"));
        assert_eq!(config.base_url, "http://build.example.test");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_bad_layers_are_skipped() {
        let config = ApiConfig::resolve(Some("{not json"), Some("ftp://nope"));
        assert_eq!(config, ApiConfig::default());

        let config = ApiConfig::resolve(Some(r#"{"base_url":"localhost","notice_ttl_ms":10}"#), None);
        assert_eq!(config, ApiConfig::default());
    }

    #[test]
    fn test_same_origin() {
        let config = ApiConfig::resolve(Some(r#"{"base_url":""}"#), None);
        assert_eq!(config.url("/suppliers"), "/suppliers");
    }

    #[test]
    fn test_blank_token_clears() {
        let mut config = ApiConfig::default();
        config.token = Some("old".into());
        config
            .apply(ConfigOverlay { token: Some("  ".into()), ..Default::default() })
            .unwrap();
        assert!(config.token.is_none());
    }
}
