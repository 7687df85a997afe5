//! Codec shared by the JSON-based MCP formats.
//!
//! Claude, VS Code and Kiro all store `{ "<root>": { "<name>": {...} } }`
//! and differ only in the root key, whether `type` is written and how a
//! disabled server is represented.

use super::{McpConfig, McpServer, McpTransport};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// When the `type` field is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeField {
    /// Never written; transport is inferred from `url`.
    Omit,
    /// Written for remote servers only.
    Remote,
    /// Always written.
    Always,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Dialect {
    pub format: &'static str,
    pub root: &'static str,
    pub type_field: TypeField,
    /// Format has a `disabled` flag.
    pub disabled_flag: bool,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct JsonServer {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    command: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    args: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    env: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    disabled: Option<bool>,
}

impl Dialect {
    pub fn parse(&self, data: &[u8]) -> Result<McpConfig> {
        let root: serde_json::Value =
            serde_json::from_slice(data).map_err(|e| Error::parse(self.format, e))?;
        let Some(object) = root.as_object() else {
            return Err(Error::parse(self.format, "expected a JSON object"));
        };
        let Some(servers) = object.get(self.root) else {
            return Ok(McpConfig::default());
        };
        let servers: BTreeMap<String, JsonServer> = serde_json::from_value(servers.clone())
            .map_err(|e| Error::parse(self.format, e))?;

        let mut config = McpConfig::default();
        for (name, raw) in servers {
            let server = self.to_canonical(raw)?;
            config.servers.insert(name, server);
        }
        Ok(config)
    }

    pub fn marshal(&self, config: &McpConfig) -> Result<Vec<u8>> {
        let servers: BTreeMap<&str, JsonServer> = config
            .servers
            .iter()
            .map(|(name, server)| (name.as_str(), self.to_native(name, server)))
            .collect();
        let mut root = serde_json::Map::new();
        root.insert(
            self.root.to_string(),
            serde_json::to_value(servers).map_err(|e| Error::marshal(self.format, e))?,
        );
        let mut data = serde_json::to_vec_pretty(&serde_json::Value::Object(root))
            .map_err(|e| Error::marshal(self.format, e))?;
        data.push(b'\n');
        Ok(data)
    }

    fn to_canonical(&self, raw: JsonServer) -> Result<McpServer> {
        let transport = match raw.kind.as_deref() {
            Some(kind) => kind
                .parse::<McpTransport>()
                .map_err(|e| Error::parse(self.format, e))?,
            None if raw.url.is_some() && raw.command.is_none() => McpTransport::Http,
            None => McpTransport::Stdio,
        };
        Ok(McpServer {
            transport,
            command: raw.command.unwrap_or_default(),
            args: raw.args,
            env: raw.env,
            url: raw.url,
            headers: raw.headers,
            enabled: !raw.disabled.unwrap_or(false),
        })
    }

    fn to_native(&self, name: &str, server: &McpServer) -> JsonServer {
        let kind = match self.type_field {
            TypeField::Always => Some(server.transport.as_str().to_string()),
            TypeField::Remote if server.transport.is_remote() => {
                Some(server.transport.as_str().to_string())
            }
            _ => None,
        };
        if self.type_field == TypeField::Omit && server.transport == McpTransport::Sse {
            tracing::debug!(
                server = name,
                format = self.format,
                "SSE transport written as plain url"
            );
        }
        let disabled = if self.disabled_flag {
            (!server.enabled).then_some(true)
        } else {
            if !server.enabled {
                tracing::debug!(
                    server = name,
                    format = self.format,
                    "Format has no disabled flag; writing server as enabled"
                );
            }
            None
        };
        JsonServer {
            kind,
            command: Some(server.command.clone()).filter(|c| !c.is_empty()),
            args: server.args.clone(),
            env: server.env.clone(),
            url: server.url.clone(),
            headers: server.headers.clone(),
            disabled,
        }
    }
}
