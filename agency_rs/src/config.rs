//! Site configuration.
//!
//! The backend base URL is resolved once at start-up and handed to
//! [`crate::api::HttpApi`]; nothing reads the environment per request.

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;

/// Origin used when nothing else is configured (local backend dev server).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable consulted for the backend base URL.
pub const BACKEND_URL_ENV: &str = "AGENCY_BACKEND_URL";

/// Resolved configuration for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
        }
    }
}

impl SiteConfig {
    /// Build a config for an explicit backend origin.
    pub fn with_backend_url(url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: normalize_backend_url(url)?,
        })
    }

    /// Resolve the backend origin from the first non-blank source:
    /// explicit value, then `env_value`, then [`DEFAULT_BACKEND_URL`].
    ///
    /// `env_value` is passed in rather than read here so the browser build can
    /// feed a compile-time value and native callers a runtime one.
    pub fn resolve(explicit: Option<&str>, env_value: Option<&str>) -> Result<Self, ConfigError> {
        let (source, raw) = match (non_blank(explicit), non_blank(env_value)) {
            (Some(url), _) => ("explicit", url),
            (None, Some(url)) => (BACKEND_URL_ENV, url),
            (None, None) => ("default", DEFAULT_BACKEND_URL),
        };
        let config = Self::with_backend_url(raw)?;
        debug!(source, backend_url = %config.backend_url, "resolved site config");
        Ok(config)
    }

    /// Native convenience: explicit value, then the process environment.
    pub fn from_env(explicit: Option<&str>) -> Result<Self, ConfigError> {
        let env_value = std::env::var(BACKEND_URL_ENV).ok();
        Self::resolve(explicit, env_value.as_deref())
    }

    /// Parse a TOML document such as `backend_url = "https://api.example.com"`.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let parsed: SiteConfig = toml::from_str(raw)?;
        Self::with_backend_url(&parsed.backend_url)
    }

    /// Absolute URL for an API path such as `/api/leads`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_backend_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBackendUrl {
        url: raw.to_string(),
        reason,
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(format!("unsupported scheme `{other}`"))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(trimmed.to_string())
}
