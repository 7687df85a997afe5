//! Codex CLI `config.toml`.
//!
//! Servers live under `[mcp_servers.<name>]`. Codex has one remote
//! transport, so `sse` servers are written as a plain `url` and read back
//! as `http`. Other top-level keys in the file are ignored.

use super::{McpConfig, McpServer, McpTransport};
use crate::adapters::traits::Adapter;
use crate::adapters::utils::utf8;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct CodexConfig {
    #[serde(default)]
    mcp_servers: BTreeMap<String, CodexServer>,
}

// Tables (env, http_headers) must follow plain values in TOML output.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CodexServer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    http_headers: BTreeMap<String, String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CodexMcpAdapter;

impl Adapter for CodexMcpAdapter {
    type Entity = McpConfig;

    fn name(&self) -> &str {
        "codex"
    }

    fn file_extension(&self) -> &str {
        ".toml"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".codex/config.toml")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".codex/config.toml"));
        }
        paths
    }

    fn parse(&self, data: &[u8]) -> Result<McpConfig> {
        let text = utf8(self.name(), data)?;
        let raw: CodexConfig = toml::from_str(text).map_err(|e| Error::parse(self.name(), e))?;

        let servers = raw
            .mcp_servers
            .into_iter()
            .map(|(name, s)| {
                let transport = if s.url.is_some() && s.command.is_none() {
                    McpTransport::Http
                } else {
                    McpTransport::Stdio
                };
                let server = McpServer {
                    transport,
                    command: s.command.unwrap_or_default(),
                    args: s.args,
                    env: s.env,
                    url: s.url,
                    headers: s.http_headers,
                    enabled: s.enabled.unwrap_or(true),
                };
                (name, server)
            })
            .collect();
        Ok(McpConfig { servers })
    }

    fn marshal(&self, config: &McpConfig) -> Result<Vec<u8>> {
        let raw = CodexConfig {
            mcp_servers: config
                .servers
                .iter()
                .map(|(name, s)| {
                    let server = CodexServer {
                        command: Some(s.command.clone()).filter(|c| !c.is_empty()),
                        args: s.args.clone(),
                        url: s.url.clone(),
                        enabled: (!s.enabled).then_some(false),
                        env: s.env.clone(),
                        http_headers: s.headers.clone(),
                    };
                    (name.clone(), server)
                })
                .collect(),
        };
        let text = toml::to_string_pretty(&raw).map_err(|e| Error::marshal(self.name(), e))?;
        Ok(text.into_bytes())
    }
}
