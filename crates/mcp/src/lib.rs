// MCP server exposing the Ransomware.live Pro API as callable tools
// (JSON-RPC 2.0 over stdio, one message per line)

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
