//! Canonical agent definition shared by every agent format.

use crate::adapters::traits::Entity;
use serde::{Deserialize, Serialize};

/// A format-agnostic agent.
///
/// Tool identifiers use the canonical (Claude Code) vocabulary such as
/// `Read` or `Bash`; model identifiers are either the well-known aliases
/// `haiku`, `sonnet`, `opus` or a provider-specific id kept verbatim.
/// Adapters translate both vocabularies when writing native formats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Agent identifier, also used as the output file stem
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// System prompt / markdown body
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub instructions: String,
    /// Capability identifiers; a set, kept in first-seen order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Only carried by formats that have a token limit field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl Entity for Agent {
    const DOMAIN: &'static str = "agent";
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Adds each tool not already present.
    pub fn with_tools<I, S>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for tool in tools {
            self.add_tool(tool);
        }
        self
    }

    /// Adds a tool; returns false when it was already present.
    pub fn add_tool(&mut self, tool: impl Into<String>) -> bool {
        let tool = tool.into();
        if self.has_tool(&tool) {
            return false;
        }
        self.tools.push(tool);
        true
    }

    pub fn has_tool(&self, tool: &str) -> bool {
        self.tools.iter().any(|t| t == tool)
    }
}
