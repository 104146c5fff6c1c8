// Ransom note tools

use crate::protocol::{CallToolResult, ToolSchema};
use crate::tools::{api_outcome, schema_object, schema_string, validation_failure, Tool};
use anyhow::Result;
use ransomlive_api::RansomClient;
use serde::Deserialize;
use std::sync::Arc;

/// Tool listing all available ransom notes.
pub struct RansomNotesTool {
    client: Arc<RansomClient>,
}

impl RansomNotesTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Tool for RansomNotesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_ransomnotes".to_string(),
            description: "Get list of all available ransom notes".to_string(),
            input_schema: schema_object(serde_json::json!({}), vec![]),
        }
    }

    async fn execute(&self, _arguments: serde_json::Value) -> Result<CallToolResult> {
        Ok(api_outcome(
            "get_ransomnotes",
            self.client.ransom_notes().await,
        ))
    }
}

/// Tool listing ransom notes for one group.
pub struct GroupRansomNotesTool {
    client: Arc<RansomClient>,
}

impl GroupRansomNotesTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct GroupRansomNotesArgs {
    group_name: String,
}

#[async_trait::async_trait]
impl Tool for GroupRansomNotesTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_ransomnotes_by_group".to_string(),
            description: "Get ransom notes from a specific ransomware group".to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "group_name": schema_string("Name of the ransomware group")
                }),
                vec!["group_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: GroupRansomNotesArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("get_ransomnotes_by_group", e)),
        };
        Ok(api_outcome(
            "get_ransomnotes_by_group",
            self.client.ransom_notes_for_group(&args.group_name).await,
        ))
    }
}

/// Tool fetching the content of one ransom note.
pub struct RansomNoteContentTool {
    client: Arc<RansomClient>,
}

impl RansomNoteContentTool {
    pub fn new(client: Arc<RansomClient>) -> Self {
        Self { client }
    }
}

#[derive(Debug, Deserialize)]
struct RansomNoteContentArgs {
    group_name: String,
    note_name: String,
}

#[async_trait::async_trait]
impl Tool for RansomNoteContentTool {
    fn schema(&self) -> ToolSchema {
        ToolSchema {
            name: "get_ransomnote_content".to_string(),
            description: "Get the content of a specific ransom note".to_string(),
            input_schema: schema_object(
                serde_json::json!({
                    "group_name": schema_string("Name of the ransomware group"),
                    "note_name": schema_string("Name/identifier of the ransom note")
                }),
                vec!["group_name", "note_name"],
            ),
        }
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult> {
        let args: RansomNoteContentArgs = match serde_json::from_value(arguments) {
            Ok(args) => args,
            Err(e) => return Ok(validation_failure("get_ransomnote_content", e)),
        };
        Ok(api_outcome(
            "get_ransomnote_content",
            self.client
                .ransom_note_content(&args.group_name, &args.note_name)
                .await,
        ))
    }
}
