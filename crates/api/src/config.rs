//! Configuration for the Ransomware.live API client.

use crate::error::{ApiError, ApiResult};
use std::time::Duration;
use url::Url;

/// Default base URL of the Ransomware.live Pro API.
pub const DEFAULT_BASE_URL: &str = "https://api-pro.ransomware.live";

/// Environment variable holding the API key. Required at startup.
pub const API_KEY_ENV: &str = "RANSOMWARE_LIVE_API_KEY";

/// Optional override for the API base URL.
pub const BASE_URL_ENV: &str = "RANSOMWARE_LIVE_BASE_URL";

/// Optional override for the request timeout, in seconds.
pub const TIMEOUT_ENV: &str = "RANSOMWARE_LIVE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration. Fixed at startup, read-only afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the upstream API.
    pub base_url: Url,
    /// API key sent as the `X-API-KEY` header on every request.
    pub api_key: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration with the default base URL and timeout.
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(ApiError::Config("API key must not be empty".to_string()));
        }
        let base_url = Url::parse(DEFAULT_BASE_URL)
            .map_err(|e| ApiError::Config(format!("invalid default base URL: {e}")))?;
        Ok(Self {
            base_url,
            api_key,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Load configuration from the process environment.
    ///
    /// `RANSOMWARE_LIVE_API_KEY` is required; a missing key is a fatal
    /// startup condition for the server, never a per-call failure.
    pub fn from_env() -> ApiResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ApiError::Config(format!("{API_KEY_ENV} environment variable not set")))?;
        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
            config.base_url = Url::parse(&base_url)
                .map_err(|e| ApiError::Config(format!("invalid {BASE_URL_ENV}: {e}")))?;
        }
        if let Ok(secs) = std::env::var(TIMEOUT_ENV) {
            let secs: u64 = secs
                .parse()
                .map_err(|_| ApiError::Config(format!("invalid {TIMEOUT_ENV}: {secs:?}")))?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Override the base URL (used by tests pointing at a mock server).
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
