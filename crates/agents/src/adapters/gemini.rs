//! Gemini CLI agent adapter (`.gemini/agents/<name>.toml`).
//!
//! Schema:
//!
//! ```toml
//! name = "code-reviewer"
//! description = "Reviews diffs"
//! prompt = "You review code."
//! tools = ["read_file", "search_file_content"]
//! model = "gemini-2.5-pro"
//! ```

use super::traits::Adapter;
use super::utils::{canonical_model, native_model, utf8};
use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::mapping::{MappingTable, UnknownCase};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::LazyLock;

static TOOLS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("Read", "read_file"),
            ("Write", "write_file"),
            ("Edit", "replace"),
            ("Glob", "glob"),
            ("Grep", "search_file_content"),
            ("Bash", "run_shell_command"),
            ("WebSearch", "google_web_search"),
            ("WebFetch", "web_fetch"),
        ],
        UnknownCase::Lowercase,
    )
});

// sonnet and opus share a model; reading it back yields sonnet.
static MODELS: LazyLock<MappingTable> = LazyLock::new(|| {
    MappingTable::new(
        &[
            ("haiku", "gemini-2.5-flash"),
            ("sonnet", "gemini-2.5-pro"),
            ("opus", "gemini-2.5-pro"),
        ],
        UnknownCase::Preserve,
    )
});

#[derive(Debug, Default, Serialize, Deserialize)]
struct GeminiAgent {
    name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    prompt: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<String>,
}

/// Adapter for Gemini CLI TOML agent files.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeminiAdapter;

impl Adapter for GeminiAdapter {
    type Entity = Agent;

    fn name(&self) -> &str {
        "gemini"
    }

    fn file_extension(&self) -> &str {
        ".toml"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".gemini/agents")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".gemini").join("agents"));
        }
        paths
    }

    fn parse(&self, data: &[u8]) -> Result<Agent> {
        let native: GeminiAgent =
            toml::from_str(utf8(self.name(), data)?).map_err(|e| Error::parse(self.name(), e))?;
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
        let native = GeminiAgent {
            name: agent.name.clone(),
            description: agent.description.clone(),
            prompt: agent.instructions.clone(),
            tools: TOOLS.to_native_all(&agent.tools),
            model: native_model(&MODELS, self.name(), agent.model.as_deref()),
        };
        toml::to_string_pretty(&native)
            .map(String::into_bytes)
            .map_err(|e| Error::marshal(self.name(), e))
    }
}
