//! Kiro CLI custom agent adapter (`.kiro/agents/<name>.json`).
//!
//! Schema (fields this adapter reads and writes):
//!
//! ```json
//! {
//!   "name": "code-reviewer",
//!   "description": "Reviews diffs",
//!   "prompt": "You review code.",
//!   "tools": ["read", "grep", "shell"],
//!   "model": "claude-sonnet-4.5"
//! }
//! ```
//!
//! Other Kiro fields (`allowedTools`, `resources`, `mcpServers`, ...) are
//! ignored on read and not emitted.

use super::traits::Adapter;
use super::utils::{canonical_model, native_model};
use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::mapping::{MappingTable, UnknownCase};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

static TOOLS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("Read", "read"),
            ("Write", "write"),
            ("Edit", "write"),
            ("Glob", "glob"),
            ("Grep", "grep"),
            ("Bash", "shell"),
            ("WebSearch", "web_search"),
            ("WebFetch", "web_fetch"),
            ("Task", "use_subagent"),
        ],
        UnknownCase::Lowercase,
    )
});

static MODELS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("haiku", "claude-haiku-4.5"),
            ("sonnet", "claude-sonnet-4.5"),
            ("opus", "claude-opus-4.5"),
        ],
        UnknownCase::Preserve,
    )
});

#[derive(Debug, Default, Serialize, Deserialize)]
struct KiroAgent {
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    prompt: String,
    #[serde(default)]
    tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

/// Adapter for Kiro CLI agent files.
#[derive(Debug, Default, Clone, Copy)]
pub struct KiroAdapter;

impl Adapter for KiroAdapter {
    type Entity = Agent;

    fn name(&self) -> &str {
        "kiro"
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".kiro/agents")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".kiro").join("agents"));
        }
        paths
    }

    fn parse(&self, data: &[u8]) -> Result<Agent> {
        let native: KiroAgent =
            serde_json::from_slice(data).map_err(|e| Error::parse(self.name(), e))?;
        Ok(Agent {
            name: native.name,
            description: native.description,
            instructions: native.prompt,
            tools: TOOLS.to_canonical_all(&native.tools),
            model: canonical_model(&MODELS, native.model.as_deref()),
            max_tokens: None,
        })
    }

    fn marshal(&self, agent: &Agent) -> Result<Vec<u8>> {
        let native = KiroAgent {
            name: agent.name.clone(),
            description: agent.description.clone(),
            prompt: agent.instructions.clone(),
            tools: TOOLS.to_native_all(&agent.tools),
            model: native_model(&MODELS, self.name(), agent.model.as_deref()),
        };
        let mut data =
            serde_json::to_vec_pretty(&native).map_err(|e| Error::marshal(self.name(), e))?;
        data.push(b'\n');
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marshal_json(agent: &Agent) -> serde_json::Value {
        serde_json::from_slice(&KiroAdapter.marshal(agent).unwrap()).unwrap()
    }

    #[test]
    fn maps_tools_and_model() {
        let agent = Agent::new("demo")
            .with_tools(["Read", "Bash"])
            .with_model("sonnet");
        let json = marshal_json(&agent);
        assert_eq!(json["tools"], serde_json::json!(["read", "shell"]));
        assert_eq!(json["model"], "claude-sonnet-4.5");
    }

    #[test]
    fn write_and_edit_collapse() {
        let agent = Agent::new("demo").with_tools(["Write", "Edit", "Read"]);
        let json = marshal_json(&agent);
        assert_eq!(json["tools"], serde_json::json!(["write", "read"]));
    }

    #[test]
    fn unknown_tool_is_lowercased_not_dropped() {
        let agent = Agent::new("demo").with_tools(["CustomTool"]);
        assert_eq!(marshal_json(&agent)["tools"], serde_json::json!(["customtool"]));
    }

    #[test]
    fn reads_prompt_and_ignores_extra_fields() {
        let data = br#"{
            "name": "r",
            "prompt": "Be terse.",
            "tools": ["read", "@git"],
            "allowedTools": ["read"],
            "model": "claude-opus-4.5"
        }"#;
        let agent = KiroAdapter.parse(data).unwrap();
        assert_eq!(agent.instructions, "Be terse.");
        assert_eq!(agent.tools, vec!["Read", "@git"]);
        assert_eq!(agent.model.as_deref(), Some("opus"));
    }

    #[test]
    fn known_vocabulary_round_trips() {
        let agent = Agent::new("rt")
            .with_description("desc")
            .with_instructions("body")
            .with_tools(["Read", "Write", "Glob", "Grep", "Bash", "WebSearch", "WebFetch", "Task"])
            .with_model("haiku");
        let back = KiroAdapter.parse(&KiroAdapter.marshal(&agent).unwrap()).unwrap();
        assert_eq!(back, agent);
    }
}
