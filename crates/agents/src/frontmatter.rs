//! YAML frontmatter handling for markdown agent files.
//!
//! Both canonical spec files and Claude Code agents use the same shape:
//!
//! ```markdown
//! ---
//! name: code-reviewer
//! description: Reviews diffs for correctness
//! tools: Read, Grep, Glob
//! model: sonnet
//! ---
//!
//! You are a meticulous reviewer...
//! ```
//!
//! `tools` may be a comma-separated string (Claude Code) or a YAML list
//! (canonical specs). The markdown body becomes the agent instructions.

use crate::agent::Agent;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Tool list as written in frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolList {
    /// `tools: Read, Grep`
    Inline(String),
    /// `tools: [Read, Grep]`
    List(Vec<String>),
}

impl ToolList {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            ToolList::Inline(s) => s
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect(),
            ToolList::List(v) => v,
        }
    }
}

/// Frontmatter fields of a markdown agent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentFrontmatter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// Split content into frontmatter and body sections.
///
/// Returns `(frontmatter_yaml, body)`; the yaml is `None` when there is no
/// complete `---` fenced block at the top. Only the line break closing the
/// fence is removed from the body.
pub fn split_frontmatter(content: &str) -> (Option<String>, String) {
    let trimmed = content.trim_start();

    if !trimmed.starts_with("---") {
        return (None, content.to_string());
    }

    let after_open = trimmed[3..].trim_start_matches(['\r', '\n']);

    let (end_pos, fence_len) = if let Some(pos) = after_open.find("\n---") {
        (pos, 4)
    } else if let Some(pos) = after_open.find("\r\n---") {
        (pos, 5)
    } else {
        return (None, content.to_string());
    };

    let yaml = &after_open[..end_pos];
    let rest = strip_line_break(&after_open[end_pos + fence_len..]);
    (Some(yaml.to_string()), rest.to_string())
}

fn strip_line_break(s: &str) -> &str {
    s.strip_prefix("\r\n")
        .or_else(|| s.strip_prefix('\n'))
        .unwrap_or(s)
}

/// Undoes the blank separator line and final newline added by
/// [`render_agent_markdown`]; anything else in the body is kept.
fn body_text(body: &str) -> &str {
    let body = strip_line_break(body);
    body.strip_suffix("\r\n")
        .or_else(|| body.strip_suffix('\n'))
        .unwrap_or(body)
}

/// Parse a markdown agent; `format` names the caller in errors.
pub fn parse_agent_markdown(format: &str, content: &str) -> Result<(AgentFrontmatter, String)> {
    let (yaml, body) = split_frontmatter(content);
    let yaml = yaml.ok_or_else(|| Error::parse(format, "missing YAML frontmatter"))?;
    let frontmatter: AgentFrontmatter =
        serde_yaml::from_str(&yaml).map_err(|e| Error::parse(format, e))?;
    if frontmatter.name.trim().is_empty() {
        return Err(Error::parse(format, "frontmatter `name` is empty"));
    }
    Ok((frontmatter, body_text(&body).to_string()))
}

/// Build a canonical agent from parsed frontmatter and body.
pub fn agent_from_markdown(frontmatter: AgentFrontmatter, body: String) -> Agent {
    let mut agent = Agent::new(frontmatter.name)
        .with_description(frontmatter.description.unwrap_or_default())
        .with_instructions(body)
        .with_tools(frontmatter.tools.map(ToolList::into_vec).unwrap_or_default());
    agent.model = frontmatter.model.filter(|m| !m.is_empty());
    agent.max_tokens = frontmatter.max_tokens;
    agent
}

/// Render frontmatter and body back into a markdown document.
pub fn render_agent_markdown(
    format: &str,
    frontmatter: &AgentFrontmatter,
    body: &str,
) -> Result<Vec<u8>> {
    let yaml = serde_yaml::to_string(frontmatter).map_err(|e| Error::marshal(format, e))?;
    let mut out = format!("---\n{yaml}---\n");
    if !body.is_empty() {
        out.push('\n');
        out.push_str(body);
        out.push('\n');
    }
    Ok(out.into_bytes())
}
