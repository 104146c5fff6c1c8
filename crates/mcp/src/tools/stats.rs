// Sector and statistics tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{api_outcome, schema_object, Tool};
use anyhow::Result;
use ransomlive_api::RansomClient;
use std::sync::Arc;

/// Tool listing the sectors/industries tracked by the API.
pub struct ListSectorsTool {
    client: Arc<RansomClient>,
}

impl ListSectorsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListSectorsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_sectors".to_string(),
            description: "Get list of all sectors/industries tracked".to_string(),
            input_schema: schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(api_outcome("list_sectors", self.client.list_sectors().await))
    }
}

/// Tool returning overall ransomware statistics.
pub struct StatsTool {
    client: Arc<RansomClient>,
}

impl StatsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for StatsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_stats".to_string(),
            description: "Get general ransomware statistics".to_string(),
            input_schema: schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(api_outcome("get_stats", self.client.stats().await))
    }
}
