// Tool trait, registry, and result formatting

use crate::protocol::{CallToolResult, ToolSchema};
use anyhow::Result;
use ransomlive_api::{ApiError, ApiResult};
use std::collections::HashMap;
use std::sync::Arc;

/// A callable tool backed by one upstream endpoint.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// Schema advertised to clients via `tools/list`.
    fn schema(&self) -> ToolSchema;

    /// Validate arguments and perform at most one upstream call.
    ///
    /// Validation failures and upstream errors come back inside the
    /// `CallToolResult` envelope; an `Err` here means the serving
    /// process itself is broken, not the call.
    async fn execute(&self, arguments: serde_json::Value) -> Result<CallToolResult>;
}

/// Registry of available tools. Built once at startup, read-only after.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        let schema = tool.schema();
        self.tools.insert(schema.name, tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// All tool schemas, sorted by name so `tools/list` output is stable.
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        let mut schemas: Vec<_> = self.tools.values().map(|t| t.schema()).collect();
        schemas.sort_by(|a, b| a.name.cmp(&b.name));
        schemas
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Wrap an upstream call's outcome in the protocol envelope.
///
/// Success serializes the payload as pretty JSON, unfiltered. Failures
/// name the tool and classify the cause so callers can tell "not found"
/// from "bad input" from "upstream unavailable".
pub fn api_outcome(tool: &str, result: ApiResult<serde_json::Value>) -> CallToolResult {
    match result {
        Ok(payload) => match serde_json::to_string_pretty(&payload) {
            Ok(text) => CallToolResult::text(text),
            Err(e) => CallToolResult::error(format!("{tool}: failed to serialize payload: {e}")),
        },
        Err(ApiError::NotFound(what)) => {
            CallToolResult::error(format!("{tool}: no such entity ({what})"))
        }
        Err(ApiError::InvalidInput(reason)) => CallToolResult::error(format!("{tool}: {reason}")),
        Err(ApiError::Upstream { status, message }) => {
            CallToolResult::error(format!("{tool}: API error {status}: {message}"))
        }
        Err(e) if e.is_unavailable() => {
            CallToolResult::error(format!("{tool}: service unavailable ({e})"))
        }
        Err(e) => CallToolResult::error(format!("{tool}: {e}")),
    }
}

/// Reject a call before dispatch, echoing the specific rule violated.
pub fn validation_failure(tool: &str, reason: impl std::fmt::Display) -> CallToolResult {
    CallToolResult::error(format!("{tool}: {reason}"))
}

// JSON schema helpers shared by the tool definitions

pub fn schema_object(properties: serde_json::Value, required: Vec<&str>) -> serde_json::Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required
    })
}

pub fn schema_string(description: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description
    })
}

pub fn schema_pattern_string(description: &str, pattern: &str) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "pattern": pattern
    })
}

pub fn schema_enum_string(description: &str, values: &[&str]) -> serde_json::Value {
    serde_json::json!({
        "type": "string",
        "description": description,
        "enum": values
    })
}
