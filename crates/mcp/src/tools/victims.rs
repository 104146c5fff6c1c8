// Victim listing, lookup, search, and recency tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{
    api_outcome, schema_enum_string, schema_object, schema_pattern_string, schema_string,
    validation_failure, Tool,
};
use anyhow::Result;
use ransomlive_api::{RansomClient, RecentOrder, SearchFilters, VictimFilters};
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Accept a JSON string or number for a field the API wants as text.
fn string_or_number<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(de)?;
    match value {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(serde::de::Error::custom(format!(
            "expected a string or number, got {other}"
        ))),
    }
}

/// Normalize a year value to the four-digit form the API expects.
fn normalize_year(raw: &str) -> Result<String, String> {
    match raw.trim().parse::<u32>() {
        Ok(year) if (1000..=9999).contains(&year) => Ok(year.to_string()),
        _ => Err(format!("year must be a 4-digit year, got {raw:?}")),
    }
}

/// Normalize a month value to the zero-padded "01".."12" form.
fn normalize_month(raw: &str) -> Result<String, String> {
    match raw.trim().parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => Ok(format!("{month:02}")),
        _ => Err(format!("month must be between 01 and 12, got {raw:?}")),
    }
}

/// Tool listing victims by filter. At least one filter is required;
/// an unfiltered listing is rejected before any network activity.
pub struct ListVictimsTool {
    client: Arc<RansomClient>,
}

impl ListVictimsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct ListVictimsArgs {
    #[serde(default)]
    group: Option<String>,
    #[serde(default)]
    sector: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    year: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    month: Option<String>,
}

/// Blank strings count as absent, the same way the upstream treats them.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl ListVictimsArgs {
    fn into_filters(self) -> Result<VictimFilters, String> {
        let year = non_blank(self.year).as_deref().map(normalize_year).transpose()?;
        let month = non_blank(self.month).as_deref().map(normalize_month).transpose()?;
        Ok(VictimFilters {
            group: non_blank(self.group),
            sector: non_blank(self.sector),
            country: non_blank(self.country),
            year,
            month,
        })
    }
}

#[async_trait::async_trait]
impl Tool for ListVictimsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_victims".to_string(),
            description: "List ransomware victims with filters (at least one filter required)"
                .to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "group": schema_string("Filter by ransomware group name (e.g., lockbit)"),
                    "sector": schema_string("Filter by victim sector (e.g., healthcare)"),
                    "country": schema_string("Filter by 2-letter country code (e.g., US, FR)"),
                    "year": schema_pattern_string(
                        "Filter by 4-digit year (e.g., '2024')",
                        "^\\d{4}$"
                    ),
                    "month": schema_pattern_string(
                        "Filter by 2-digit month (e.g., '01' for January)",
                        "^(0[1-9]|1[0-2])$"
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: ListVictimsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("list_victims", e)),
        };
        let filters = match args.into_filters() {
            Ok(filters) => filters,
            Err(reason) => return Ok(validation_failure("list_victims", reason)),
        };
        if filters.is_empty() {
            return Ok(validation_failure(
                "list_victims",
                "at least one filter is required (group, sector, country, year, or month)",
            ));
        }
        Ok(api_outcome(
            "list_victims",
            self.client.list_victims(&filters).await,
        ))
    }
}

/// Tool fetching details for one victim.
pub struct VictimInfoTool {
    client: Arc<RansomClient>,
}

impl VictimInfoTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct VictimInfoArgs {
    victim_id: String,
}

#[async_trait::async_trait]
impl Tool for VictimInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_victim_info".to_string(),
            description: "Get detailed information about a specific victim".to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "victim_id": schema_string("ID of the victim")
                }),
                vec!["victim_id"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: VictimInfoArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("get_victim_info", e)),
        };
        Ok(api_outcome(
            "get_victim_info",
            self.client.victim_info(&args.victim_id).await,
        ))
    }
}

/// Tool searching victims by free text with optional structured filters.
/// Query and filters are forwarded together and combine as logical AND.
pub struct SearchVictimsTool {
    client: Arc<RansomClient>,
}

impl SearchVictimsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct SearchVictimsArgs {
    query: String,
    #[serde(default)]
    group_name: Option<String>,
    #[serde(default)]
    sector_name: Option<String>,
    #[serde(default)]
    country: Option<String>,
}

#[async_trait::async_trait]
impl Tool for SearchVictimsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "search_victims".to_string(),
            description:
                "Search for victims by name, domain, or other criteria with optional filters"
                    .to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "query": schema_string("Search query for victim name, domain, etc."),
                    "group_name": schema_string("Optional: Filter by ransomware group name"),
                    "sector_name": schema_string("Optional: Filter by sector/industry"),
                    "country": schema_string("Optional: Filter by country")
                }),
                vec!["query"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: SearchVictimsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("search_victims", e)),
        };
        let filters = SearchFilters {
            group: args.group_name,
            sector: args.sector_name,
            country: args.country,
        };
        Ok(api_outcome(
            "search_victims",
            self.client.search_victims(&args.query, &filters).await,
        ))
    }
}

/// Tool listing recently reported victims.
pub struct RecentVictimsTool {
    client: Arc<RansomClient>,
}

impl RecentVictimsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RecentVictimsArgs {
    #[serde(default)]
    order: Option<String>,
}

#[async_trait::async_trait]
impl Tool for RecentVictimsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_recent_victims".to_string(),
            description: "Get recently reported victims".to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "order": schema_enum_string(
                        "Sort order: 'discovered' or 'published' (default: 'discovered')",
                        &["discovered", "published"]
                    )
                }),
                vec![],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: RecentVictimsArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("get_recent_victims", e)),
        };
        let order = match args.order.as_deref() {
            None => RecentOrder::default(),
            Some(raw) => match RecentOrder::parse(raw) {
                Ok(order) => order,
                Err(e) => return Ok(validation_failure("get_recent_victims", e)),
            },
        };
        Ok(api_outcome(
            "get_recent_victims",
            self.client.recent_victims(order).await,
        ))
    }
}
