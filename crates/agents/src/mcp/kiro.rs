//! Kiro `.kiro/settings/mcp.json`.
//!
//! Kiro has no `type` field; a server with a `url` and no `command` is
//! remote. Disabled servers carry `"disabled": true`.

use super::json::{Dialect, TypeField};
use super::McpConfig;
use crate::adapters::traits::Adapter;
use crate::error::Result;
use std::path::PathBuf;

const DIALECT: Dialect = Dialect {
    format: "kiro",
    root: "mcpServers",
    type_field: TypeField::Omit,
    disabled_flag: true,
};

#[derive(Debug, Default, Clone, Copy)]
pub struct KiroMcpAdapter;

impl Adapter for KiroMcpAdapter {
    type Entity = McpConfig;

    fn name(&self) -> &str {
        DIALECT.format
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".kiro/settings/mcp.json")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kiro/settings/mcp.json"));
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
