//! agentkit local server adapter.
//!
//! A single agent is written as an `AgentConfig` object; a whole team is
//! written as one `config.json` holding every agent plus the local MCP,
//! LLM and timeout sections (see [`FullConfig`]).

use super::traits::Adapter;
use super::utils::{canonical_model, native_model, write_private};
use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::mapping::{MappingTable, UnknownCase};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// agentkit has few native tools; web access and subagents go through the shell.
static TOOLS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("Bash", "shell"),
            ("Read", "read"),
            ("Write", "write"),
            ("Edit", "write"),
            ("Glob", "glob"),
            ("Grep", "grep"),
            ("WebSearch", "shell"),
            ("WebFetch", "shell"),
            ("Task", "shell"),
        ],
        UnknownCase::Lowercase,
    )
});

static MODELS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("haiku", "claude-3-haiku-20240307"),
            ("sonnet", "claude-3-5-sonnet-20241022"),
            ("opus", "claude-3-opus-20240229"),
        ],
        UnknownCase::Preserve,
    )
});

/// One agent entry in an agentkit config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Complete agentkit local configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FullConfig {
    pub mode: String,
    pub workspace: String,
    pub agents: Vec<AgentConfig>,
    pub mcp: McpSection,
    pub llm: LlmSection,
    pub timeouts: TimeoutSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct McpSection {
    pub enabled: bool,
    pub transport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_version: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmSection {
    pub provider: String,
    pub model: String,
    /// Usually an environment reference such as `${ANTHROPIC_API_KEY}`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Durations in Go-style notation (`"5m"`, `"30s"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeoutSection {
    pub agent_invoke: String,
    pub shell_command: String,
    pub file_read: String,
    pub parallel_total: String,
}

impl Default for FullConfig {
    fn default() -> Self {
        Self {
            mode: "local".into(),
            workspace: ".".into(),
            agents: Vec::new(),
            mcp: McpSection {
                enabled: true,
                transport: "stdio".into(),
                port: None,
                server_name: Some("agentkit-local".into()),
                server_version: Some("1.0.0".into()),
            },
            llm: LlmSection {
                provider: "anthropic".into(),
                model: "claude-3-5-sonnet-20241022".into(),
                api_key: Some("${ANTHROPIC_API_KEY}".into()),
                base_url: None,
                temperature: Some(0.7),
            },
            timeouts: TimeoutSection {
                agent_invoke: "5m".into(),
                shell_command: "2m".into(),
                file_read: "30s".into(),
                parallel_total: "10m".into(),
            },
        }
    }
}

impl FullConfig {
    /// Default configuration holding every agent.
    pub fn from_agents(agents: &[Agent]) -> Self {
        Self {
            agents: agents.iter().map(to_config).collect(),
            ..Self::default()
        }
    }
}

/// Renders a complete agentkit `config.json` for a team of agents.
pub fn render_full_config(agents: &[Agent]) -> Result<Vec<u8>> {
    let config = FullConfig::from_agents(agents);
    let mut data =
        serde_json::to_vec_pretty(&config).map_err(|e| Error::marshal("agentkit", e))?;
    data.push(b'\n');
    Ok(data)
}

pub fn write_full_config(agents: &[Agent], path: &Path) -> Result<()> {
    write_private(path, &render_full_config(agents)?)
}

fn to_config(agent: &Agent) -> AgentConfig {
    AgentConfig {
        name: agent.name.clone(),
        description: agent.description.clone(),
        instructions: agent.instructions.clone(),
        tools: TOOLS.to_native_all(&agent.tools),
        model: native_model(&MODELS, "agentkit", agent.model.as_deref()),
        max_tokens: agent.max_tokens,
    }
}

fn from_config(config: AgentConfig) -> Agent {
    Agent {
        name: config.name,
        description: config.description,
        instructions: config.instructions,
        tools: TOOLS.to_canonical_all(&config.tools),
        model: canonical_model(&MODELS, config.model.as_deref()),
        max_tokens: config.max_tokens,
    }
}

/// Adapter for single agentkit agent configs.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgentkitAdapter;

impl Adapter for AgentkitAdapter {
    type Entity = Agent;

    fn name(&self) -> &str {
        "agentkit"
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("plugins/agentkit")]
    }

    fn parse(&self, data: &[u8]) -> Result<Agent> {
        let config: AgentConfig =
            serde_json::from_slice(data).map_err(|e| Error::parse(self.name(), e))?;
        Ok(from_config(config))
    }

    fn marshal(&self, agent: &Agent) -> Result<Vec<u8>> {
        let mut data = serde_json::to_vec_pretty(&to_config(agent))
            .map_err(|e| Error::marshal(self.name(), e))?;
        data.push(b'\n');
        Ok(data)
    }
}
