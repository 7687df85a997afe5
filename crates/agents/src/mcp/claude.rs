//! Claude Code `.mcp.json`.

use super::json::{Dialect, TypeField};
use super::McpConfig;
use crate::adapters::traits::Adapter;
use crate::error::Result;
use std::path::PathBuf;

const DIALECT: Dialect = Dialect {
    format: "claude",
    root: "mcpServers",
    type_field: TypeField::Remote,
    disabled_flag: false,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeMcpAdapter;

impl Adapter for ClaudeMcpAdapter {
    type Entity = McpConfig;

    fn name(&self) -> &str {
        DIALECT.format
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".mcp.json")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".claude.json"));
        }
        paths
    }

    fn parse(&self, data: &[u8]) -> Result<McpConfig> {
        DIALECT.parse(data)
    }

    fn marshal(&self, config: &McpConfig) -> Result<Vec<u8>> {
        DIALECT.marshal(config)
    }
}
