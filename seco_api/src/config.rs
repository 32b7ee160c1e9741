//! Client configuration: base URL, API key and per-call timeout.

use std::fmt;
use std::time::Duration;

use reqwest::header::HeaderValue;
use url::Url;

use crate::errors::ConfigError;

pub const BASE_URL_VAR: &str = "SECO_BASE_URL";
pub const API_KEY_VAR: &str = "SECO_X_API_KEY";
pub const TIMEOUT_VAR: &str = "SECO_TIMEOUT_SECS";

/// Timeout applied to each call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Validated, immutable settings for talking to SECO.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Validates and normalizes the given settings.
    ///
    /// Both values are trimmed and must be non-empty. The API key must be a
    /// valid header value. The base URL must be an absolute http(s) URL; a
    /// trailing `/` is removed.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim();
        let api_key = api_key.trim();
        if base_url.is_empty() {
            return Err(ConfigError::Missing(BASE_URL_VAR));
        }
        if api_key.is_empty() {
            return Err(ConfigError::Missing(API_KEY_VAR));
        }
        if HeaderValue::from_str(api_key).is_err() {
            return Err(ConfigError::InvalidApiKey(API_KEY_VAR));
        }

        let parsed = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: format!("unsupported scheme `{}`", parsed.scheme()),
            });
        }

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Reads `SECO_BASE_URL`, `SECO_X_API_KEY` and optionally
    /// `SECO_TIMEOUT_SECS`, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = get(BASE_URL_VAR).ok_or(ConfigError::Missing(BASE_URL_VAR))?;
        let api_key = get(API_KEY_VAR).ok_or(ConfigError::Missing(API_KEY_VAR))?;
        let config = Self::new(&base_url, &api_key)?;

        match get(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value: raw.clone(),
                    })?;
                config.with_timeout(Duration::from_secs(secs))
            }
            None => Ok(config),
        }
    }

    /// Replaces the per-call timeout. Zero is rejected.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout(timeout));
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Value sent in the `X-API-Key` header.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Upper bound on one call, connection and body read included.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}
