//! HTTP transport: one shared reqwest client, one GET per call.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use reqwest::{header, Client, StatusCode};
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for the upstream API. Cheap to clone; the underlying
/// connection pool is shared. Configuration is read-only after
/// construction, so concurrent calls never race on it.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Build the transport with the API key header and timeout baked in.
    pub fn new(config: Arc<ClientConfig>) -> ApiResult<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::HeaderName::from_static("x-api-key"),
            header::HeaderValue::from_str(&config.api_key)
                .map_err(|_| ApiError::Config("API key contains invalid characters".to_string()))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(ApiError::Transport)?;

        Ok(Self { client, config })
    }

    fn build_url(&self, segments: &[&str]) -> ApiResult<url::Url> {
        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config("base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Issue exactly one GET and map the outcome. Path segments are
    /// percent-encoded; query pairs with empty values are omitted rather
    /// than sent as empty strings. No retries.
    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&str, &str)],
    ) -> ApiResult<serde_json::Value> {
        let mut url = self.build_url(segments)?;
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                if !value.is_empty() {
                    pairs.append_pair(key, value);
                }
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }

        debug!(url = %url, "GET request");
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(segments.join("/")));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        let body = response.text().await?;
        let payload = serde_json::from_str(&body)?;
        Ok(payload)
    }
}
