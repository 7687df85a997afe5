//! MCP server configuration domain.
//!
//! Every MCP-capable tool stores a named set of servers, each either a
//! local process (`stdio`) or a remote endpoint (`http`, `sse`). The
//! canonical [`McpConfig`] keeps servers in a `BTreeMap` so every format
//! writes them in the same order.

mod claude;
mod codex;
mod json;
mod kiro;
mod vscode;

pub use claude::ClaudeMcpAdapter;
pub use codex::CodexMcpAdapter;
pub use kiro::KiroMcpAdapter;
pub use vscode::VscodeMcpAdapter;

use crate::adapters::traits::{Adapter, Entity};
use crate::error::Result;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// How a client talks to an MCP server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum McpTransport {
    #[default]
    Stdio,
    Http,
    Sse,
}

impl McpTransport {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stdio => "stdio",
            Self::Http => "http",
            Self::Sse => "sse",
        }
    }

    pub fn is_remote(&self) -> bool {
        !matches!(self, Self::Stdio)
    }
}

impl fmt::Display for McpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognised transport name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown MCP transport {0:?}")]
pub struct UnknownTransport(pub String);

impl FromStr for McpTransport {
    type Err = UnknownTransport;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "stdio" | "local" => Ok(Self::Stdio),
            "http" | "streamable-http" | "streamablehttp" => Ok(Self::Http),
            "sse" => Ok(Self::Sse),
            _ => Err(UnknownTransport(s.to_string())),
        }
    }
}

/// One MCP server, local or remote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpServer {
    #[serde(default)]
    pub transport: McpTransport,
    /// Executable for `stdio` servers
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub command: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
    /// Endpoint for remote servers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for McpServer {
    fn default() -> Self {
        Self {
            transport: McpTransport::Stdio,
            command: String::new(),
            args: Vec::new(),
            env: BTreeMap::new(),
            url: None,
            headers: BTreeMap::new(),
            enabled: true,
        }
    }
}

impl McpServer {
    pub fn stdio(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Self::default()
        }
    }

    pub fn http(url: impl Into<String>) -> Self {
        Self::remote(McpTransport::Http, url)
    }

    pub fn sse(url: impl Into<String>) -> Self {
        Self::remote(McpTransport::Sse, url)
    }

    fn remote(transport: McpTransport, url: impl Into<String>) -> Self {
        Self {
            transport,
            url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Canonical MCP configuration: servers keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct McpConfig {
    #[serde(default)]
    pub servers: BTreeMap<String, McpServer>,
}

impl Entity for McpConfig {
    const DOMAIN: &'static str = "mcp";
}

impl McpConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_server(mut self, name: impl Into<String>, server: McpServer) -> Self {
        self.servers.insert(name.into(), server);
        self
    }

    pub fn get(&self, name: &str) -> Option<&McpServer> {
        self.servers.get(name)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

/// Registry holding every built-in MCP adapter.
pub fn builtin_mcp_registry() -> Result<Registry<McpConfig>> {
    Registry::from_adapters([
        Box::new(ClaudeMcpAdapter) as Box<dyn Adapter<Entity = McpConfig>>,
        Box::new(CodexMcpAdapter),
        Box::new(KiroMcpAdapter),
        Box::new(VscodeMcpAdapter),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_parses_aliases() {
        assert_eq!("stdio".parse::<McpTransport>().unwrap(), McpTransport::Stdio);
        assert_eq!("HTTP".parse::<McpTransport>().unwrap(), McpTransport::Http);
        assert_eq!(
            "streamable-http".parse::<McpTransport>().unwrap(),
            McpTransport::Http
        );
        assert_eq!("sse".parse::<McpTransport>().unwrap(), McpTransport::Sse);
        assert!("carrier-pigeon".parse::<McpTransport>().is_err());
    }

    #[test]
    fn builders_set_transport() {
        let local = McpServer::stdio("npx").with_args(["-y", "server"]);
        assert_eq!(local.transport, McpTransport::Stdio);
        assert_eq!(local.args, vec!["-y", "server"]);
        assert!(local.enabled);

        let remote = McpServer::sse("https://example.com/sse").disabled();
        assert!(remote.transport.is_remote());
        assert!(!remote.enabled);
    }

    #[test]
    fn enabled_defaults_to_true_when_absent() {
        let server: McpServer = serde_json::from_str(r#"{"command":"srv"}"#).unwrap();
        assert!(server.enabled);
        assert_eq!(server.transport, McpTransport::Stdio);
    }

    #[test]
    fn builtin_names() {
        let registry = builtin_mcp_registry().unwrap();
        assert_eq!(registry.names(), vec!["claude", "codex", "kiro", "vscode"]);
    }
}
