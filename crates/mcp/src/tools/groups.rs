// Ransomware group tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{api_outcome, schema_object, schema_string, validation_failure, Tool};
use anyhow::Result;
use ransomlive_api::RansomClient;
use serde::Deserialize;
use std::sync::Arc;

/// Tool listing every known ransomware group.
pub struct ListGroupsTool {
    client: Arc<RansomClient>,
}

impl ListGroupsTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for ListGroupsTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "list_groups".to_string(),
            description: "Get list of all ransomware groups".to_string(),
            input_schema: schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(api_outcome("list_groups", self.client.list_groups().await))
    }
}

/// Tool fetching details for one ransomware group.
pub struct GroupInfoTool {
    client: Arc<RansomClient>,
}

impl GroupInfoTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GroupInfoArgs {
    group_name: String,
}

#[async_trait::async_trait]
impl Tool for GroupInfoTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_group_info".to_string(),
            description: "Get detailed information about a specific ransomware group".to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "group_name": schema_string(
                        "Name of the ransomware group (e.g., 'lockbit3', 'alphv')"
                    )
                }),
                vec!["group_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GroupInfoArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("get_group_info", e)),
        };
        Ok(api_outcome(
            "get_group_info",
            self.client.group_info(&args.group_name).await,
        ))
    }
}
