//! Client for the Ransomware.live Pro API, one method per endpoint.

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::transport::HttpTransport;
use serde_json::Value;
use std::sync::Arc;

/// Filters for the victim listing endpoint. At least one must be set.
#[derive(Debug, Clone, Default)]
pub struct VictimFilters {
    /// Ransomware group name (e.g. "lockbit3").
    pub group: Option<String>,
    /// Victim sector/industry (e.g. "healthcare").
    pub sector: Option<String>,
    /// Two-letter country code (e.g. "US").
    pub country: Option<String>,
    /// Four-digit year.
    pub year: Option<String>,
    /// Two-digit month, "01" through "12".
    pub month: Option<String>,
}

/// A filter value counts as set only when it has visible content; empty
/// and whitespace-only strings are treated as absent, never forwarded.
fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl VictimFilters {
    /// True when no filter carries a usable value. Blank strings do not
    /// count: an unfiltered listing must be rejected, not smuggled past
    /// the guard as `group=""`.
    pub fn is_empty(&self) -> bool {
        !is_set(&self.group)
            && !is_set(&self.sector)
            && !is_set(&self.country)
            && !is_set(&self.year)
            && !is_set(&self.month)
    }

    fn query(&self) -> Vec<(&'static str, &str)> {
        let mut query = Vec::new();
        for (key, value) in [
            ("group", &self.group),
            ("sector", &self.sector),
            ("country", &self.country),
            ("year", &self.year),
            ("month", &self.month),
        ] {
            if let Some(value) = value.as_deref() {
                if !value.trim().is_empty() {
                    query.push((key, value));
                }
            }
        }
        query
    }
}

/// Optional structured filters for victim search. All supplied filters
/// are forwarded together with the free-text query; the upstream
/// intersects them.
#[derive(Debug, Clone, Default)]
pub struct SearchFilters {
    pub group: Option<String>,
    pub sector: Option<String>,
    pub country: Option<String>,
}

/// Sort order for the recent-victims endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecentOrder {
    /// Most recently discovered first.
    #[default]
    Discovered,
    /// Most recently published first.
    Published,
}

impl RecentOrder {
    /// Wire value for the `order` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discovered => "discovered",
            Self::Published => "published",
        }
    }

    /// Parse a wire value; anything outside the enum is rejected.
    pub fn parse(value: &str) -> ApiResult<Self> {
        match value {
            "discovered" => Ok(Self::Discovered),
            "published" => Ok(Self::Published),
            other => Err(ApiError::InvalidInput(format!(
                "order must be \"discovered\" or \"published\", got {other:?}"
            ))),
        }
    }
}

/// Client for the Ransomware.live Pro API.
///
/// Holds one shared HTTP transport; configuration is fixed at startup.
/// Every method issues exactly one GET request and returns the upstream
/// JSON payload unmodified, or a structured [`ApiError`].
#[derive(Debug, Clone)]
pub struct RansomClient {
    transport: HttpTransport,
}

impl RansomClient {
    /// Build a client from configuration.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let transport = HttpTransport::new(Arc::new(config))?;
        Ok(Self { transport })
    }

    /// List all sectors/industries tracked by the API.
    pub async fn list_sectors(&self) -> ApiResult<Value> {
        self.transport.get(&["listsectors"], &[]).await
    }

    /// List all known ransomware groups.
    pub async fn list_groups(&self) -> ApiResult<Value> {
        self.transport.get(&["listgroups"], &[]).await
    }

    /// Detailed information about one ransomware group.
    pub async fn group_info(&self, group_name: &str) -> ApiResult<Value> {
        self.transport.get(&["groups", group_name], &[]).await
    }

    /// List victims matching the given filters. Rejects an empty filter
    /// set locally; an unfiltered listing is never requested upstream.
    pub async fn list_victims(&self, filters: &VictimFilters) -> ApiResult<Value> {
        if filters.is_empty() {
            return Err(ApiError::InvalidInput(
                "at least one filter is required (group, sector, country, year, or month)"
                    .to_string(),
            ));
        }
        self.transport.get(&["victims"], &filters.query()).await
    }

    /// Detailed information about one victim.
    pub async fn victim_info(&self, victim_id: &str) -> ApiResult<Value> {
        self.transport.get(&["victim", victim_id], &[]).await
    }

    /// Search victims by free text, optionally narrowed by filters.
    pub async fn search_victims(&self, query: &str, filters: &SearchFilters) -> ApiResult<Value> {
        let mut params = vec![("q", query)];
        if let Some(group) = &filters.group {
            params.push(("group", group.as_str()));
        }
        if let Some(sector) = &filters.sector {
            params.push(("sector", sector.as_str()));
        }
        if let Some(country) = &filters.country {
            params.push(("country", country.as_str()));
        }
        self.transport.get(&["victims", "search"], &params).await
    }

    /// Recently reported victims, sorted by the given order.
    pub async fn recent_victims(&self, order: RecentOrder) -> ApiResult<Value> {
        self.transport
            .get(&["victims", "recent"], &[("order", order.as_str())])
            .await
    }

    /// Overall ransomware statistics.
    pub async fn stats(&self) -> ApiResult<Value> {
        self.transport.get(&["stats"], &[]).await
    }

    /// List all available ransom notes.
    pub async fn ransom_notes(&self) -> ApiResult<Value> {
        self.transport.get(&["ransomnotes"], &[]).await
    }

    /// Ransom notes published by one group.
    pub async fn ransom_notes_for_group(&self, group_name: &str) -> ApiResult<Value> {
        self.transport.get(&["ransomnotes", group_name], &[]).await
    }

    /// Full content of one ransom note.
    pub async fn ransom_note_content(&self, group_name: &str, note_name: &str) -> ApiResult<Value> {
        self.transport
            .get(&["ransomnotes", group_name, note_name], &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victim_filters_empty() {
        assert!(VictimFilters::default().is_empty());

        let filters = VictimFilters {
            country: Some("US".to_string()),
            ..Default::default()
        };
        assert!(!filters.is_empty());
    }

    #[test]
    fn test_blank_filter_values_count_as_unset() {
        let filters = VictimFilters {
            group: Some(String::new()),
            sector: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(filters.is_empty());
        assert!(filters.query().is_empty());

        // A blank value next to a real one neither blocks the call nor
        // reaches the query string.
        let filters = VictimFilters {
            group: Some(String::new()),
            country: Some("US".to_string()),
            ..Default::default()
        };
        assert!(!filters.is_empty());
        assert_eq!(filters.query(), vec![("country", "US")]);
    }

    #[test]
    fn test_victim_filters_query_order() {
        let filters = VictimFilters {
            group: Some("lockbit3".to_string()),
            year: Some("2024".to_string()),
            ..Default::default()
        };
        assert_eq!(
            filters.query(),
            vec![("group", "lockbit3"), ("year", "2024")]
        );
    }

    #[test]
    fn test_recent_order_parse() {
        assert_eq!(RecentOrder::parse("discovered").unwrap(), RecentOrder::Discovered);
        assert_eq!(RecentOrder::parse("published").unwrap(), RecentOrder::Published);
        assert!(RecentOrder::parse("newest").is_err());
    }

    #[test]
    fn test_recent_order_default() {
        assert_eq!(RecentOrder::default(), RecentOrder::Discovered);
    }
}
