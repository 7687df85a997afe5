//! Claude Code subagent adapter (`.claude/agents/<name>.md`).
//!
//! Schema: YAML frontmatter with `name` (required), `description`,
//! `tools` (comma-separated) and `model`, followed by the system prompt
//! as the markdown body. The canonical vocabulary is Claude's own, so
//! tools and models pass through untouched.

use super::traits::Adapter;
use super::utils::utf8;
use crate::agent::Agent;
use crate::error::Result;
use crate::frontmatter::{
    agent_from_markdown, parse_agent_markdown, render_agent_markdown, AgentFrontmatter, ToolList,
};
use crate::mapping::MappingTable;
use std::path::PathBuf;
use std::sync::LazyLock;

static TOOLS: LazyLock<MappingTable> = LazyLock::new(MappingTable::identity);
static MODELS: LazyLock<MappingTable> = LazyLock::new(MappingTable::identity);

/// Adapter for Claude Code agent files.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClaudeAdapter;

impl Adapter for ClaudeAdapter {
    type Entity = Agent;

    fn name(&self) -> &str {
        "claude"
    }

    fn file_extension(&self) -> &str {
        ".md"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".claude/agents")];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".claude").join("agents"));
        }
        paths
    }

    fn parse(&self, data: &[u8]) -> Result<Agent> {
        let content = utf8(self.name(), data)?;
        let (frontmatter, body) = parse_agent_markdown(self.name(), content)?;
        let mut agent = agent_from_markdown(frontmatter, body);
        agent.tools = TOOLS.to_canonical_all(&agent.tools);
        agent.model = agent.model.map(|m| MODELS.to_canonical(&m));
        Ok(agent)
    }

    fn marshal(&self, agent: &Agent) -> Result<Vec<u8>> {
        let tools = TOOLS.to_native_all(&agent.tools);
        let frontmatter = AgentFrontmatter {
            name: agent.name.clone(),
            description: Some(agent.description.clone()).filter(|d| !d.is_empty()),
            tools: tool_list(tools),
            model: agent.model.as_deref().map(|m| MODELS.to_native(m)),
            max_tokens: None,
        };
        render_agent_markdown(self.name(), &frontmatter, &agent.instructions)
    }
}

/// Inline `Read, Bash` form, or a YAML list when a tool pattern holds a comma.
fn tool_list(tools: Vec<String>) -> Option<ToolList> {
    if tools.is_empty() {
        None
    } else if tools.iter().any(|t| t.contains(',')) {
        Some(ToolList::List(tools))
    } else {
        Some(ToolList::Inline(tools.join(", ")))
    }
}
