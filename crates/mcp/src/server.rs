// MCP server: request routing and the stdio serving loop

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
};
use crate::tools::ToolRegistry;
use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server over stdio. Holds the read-only tool registry; no state
/// survives between calls.
pub struct McpServer {
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// Serve JSON-RPC over stdio: one message per line, processed
    /// sequentially to completion. Returns on EOF.
    pub async fn run(&self) -> Result<()> {
        let stdin = tokio::io::stdin();
        let mut stdout = tokio::io::stdout();
        let mut lines = BufReader::new(stdin).lines();

        info!(tools = self.registry.len(), "serving MCP over stdio");

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let response = match serde_json::from_str::<JsonRpcRequest>(&line) {
                Ok(request) => self.handle_request(request).await,
                Err(e) => {
                    warn!(error = %e, "unparseable frame");
                    Some(JsonRpcResponse::failure(
                        serde_json::Value::Null,
                        JsonRpcError::parse_error(),
                    ))
                }
            };
            if let Some(response) = response {
                let mut frame = serde_json::to_vec(&response)?;
                frame.push(b'\n');
                stdout.write_all(&frame).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Route one request. Returns `None` for notifications.
    pub async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!(method = %request.method, "notification");
            return None;
        }
        let id = request.id.unwrap_or(serde_json::Value::Null);

        let response = match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            // Touches no network: the registry answers from its static table.
            "tools/list" => JsonRpcResponse::success(
                id,
                ListToolsResult {
                    tools: self.registry.list_schemas(),
                },
            ),
            "tools/call" => match serde_json::from_value::<CallToolParams>(
                request.params.unwrap_or_default(),
            ) {
                Ok(params) => {
                    let result = self.dispatch_call(&params.name, params.arguments).await;
                    JsonRpcResponse::success(id, result)
                }
                Err(e) => JsonRpcResponse::failure(
                    id,
                    JsonRpcError::invalid_params(format!("invalid tools/call params: {e}")),
                ),
            },
            other => JsonRpcResponse::failure(id, JsonRpcError::method_not_found(other)),
        };
        Some(response)
    }

    /// Dispatch one tool call: look up the tool, run it, wrap the
    /// outcome. Unknown tools are reported without touching the network,
    /// and no per-call error escapes as a fault.
    pub async fn dispatch_call(&self, name: &str, arguments: serde_json::Value) -> CallToolResult {
        let Some(tool) = self.registry.get(name) else {
            return CallToolResult::error(format!("Unknown tool: {name}"));
        };

        // Tools with no parameters accept a missing arguments object.
        let arguments = if arguments.is_null() {
            serde_json::json!({})
        } else {
            arguments
        };

        match tool.execute(arguments).await {
            Ok(result) => {
                if result.is_failure() {
                    debug!(tool = name, "call failed");
                }
                result
            }
            Err(e) => {
                error!(tool = name, error = %e, "tool execution fault");
                CallToolResult::error(format!("{name}: internal error"))
            }
        }
    }

    fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}
