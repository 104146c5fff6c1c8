//! Error types for the Ransomware.live API client.

use serde::Deserialize;

/// Result type for API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by the Ransomware.live API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Connection-level failure (DNS, refused, TLS).
    #[error("transport error: {0}")]
    Transport(reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("request timed out")]
    Timeout,

    /// Upstream returned a non-2xx status other than 404.
    #[error("API error (status {status}): {message}")]
    Upstream { status: u16, message: String },

    /// Upstream returned 404 for an entity lookup. A normal outcome,
    /// not a fault.
    #[error("not found: {0}")]
    NotFound(String),

    /// Input rejected locally before any request was issued.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration. Only surfaced at startup.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// True when the upstream could not be reached at all, as opposed to
    /// reaching it and getting an error back. Callers use this to phrase
    /// "service unavailable" rather than "API error".
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Timeout)
    }

    /// Build an error from a non-2xx response, pulling the provider's
    /// message out of the body when it parses.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = match serde_json::from_str::<ProviderError>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if body.trim().is_empty() => "no error detail provided".to_string(),
            Err(_) => body.trim().to_string(),
        };
        Self::Upstream { status, message }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Transport(err)
        }
    }
}

/// Error body shape returned by the provider.
#[derive(Debug, Deserialize)]
struct ProviderError {
    error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_parses_provider_message() {
        let err = ApiError::from_status(403, r#"{"error": "invalid API key"}"#);
        match err {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "invalid API key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_falls_back_to_raw_body() {
        let err = ApiError::from_status(502, "Bad Gateway");
        match err {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_from_status_empty_body() {
        let err = ApiError::from_status(500, "  ");
        match err {
            ApiError::Upstream { message, .. } => {
                assert_eq!(message, "no error detail provided");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unavailable_classification() {
        assert!(ApiError::Timeout.is_unavailable());
        assert!(!ApiError::NotFound("x".into()).is_unavailable());
        assert!(!ApiError::Upstream { status: 500, message: String::new() }.is_unavailable());
    }
}
