//! VS Code `.vscode/mcp.json`; `type` is always present.

use super::json::{Dialect, TypeField};
use super::McpConfig;
use crate::adapters::traits::Adapter;
use crate::error::Result;
use std::path::PathBuf;

const DIALECT: Dialect = Dialect {
    format: "vscode",
    root: "servers",
    type_field: TypeField::Always,
    disabled_flag: false,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct VscodeMcpAdapter;

impl Adapter for VscodeMcpAdapter {
    type Entity = McpConfig;

    fn name(&self) -> &str {
        DIALECT.format
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        vec![PathBuf::from(".vscode/mcp.json")]
    }

    fn parse(&self, data: &[u8]) -> Result<McpConfig> {
        DIALECT.parse(data)
    }

    fn marshal(&self, config: &McpConfig) -> Result<Vec<u8>> {
        DIALECT.marshal(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mcp::McpServer;

    #[test]
    fn writes_type_for_every_server() {
        let config = McpConfig::new()
            .with_server("local", McpServer::stdio("srv"))
            .with_server("remote", McpServer::http("https://r"));
        let json: serde_json::Value =
            serde_json::from_slice(&VscodeMcpAdapter.marshal(&config).unwrap()).unwrap();

        assert_eq!(json["servers"]["local"]["type"], "stdio");
        assert_eq!(json["servers"]["remote"]["type"], "http");
        assert!(json.get("mcpServers").is_none());
    }

    #[test]
    fn round_trips() {
        let config = McpConfig::new()
            .with_server("s", McpServer::sse("https://s/sse"))
            .with_server("l", McpServer::stdio("uvx").with_args(["mcp-server-git"]));
        let back = VscodeMcpAdapter
            .parse(&VscodeMcpAdapter.marshal(&config).unwrap())
            .unwrap();
        assert_eq!(back, config);
    }
}
