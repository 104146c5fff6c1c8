// Standalone MCP server binary

use anyhow::{Context, Result};
use ransomlive_api::{ClientConfig, RansomClient};
use ransomlive_mcp::tools::default_registry;
use ransomlive_mcp::McpServer;
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout is the protocol channel.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::info!("Ransomlive MCP server starting...");

    // A missing API key is fatal here, never a per-call failure.
    let config = ClientConfig::from_env().context("failed to load configuration")?;
    let client = Arc::new(RansomClient::new(config).context("failed to build API client")?);

    let registry = default_registry(client);
    tracing::info!("Registered {} tools", registry.len());

    let server = McpServer::new(registry);
    server.run().await?;

    Ok(())
}
