//! Convert AI-assistant configuration between tool-specific formats.
//!
//! Every format is an [`Adapter`] that parses native bytes into a canonical
//! entity and marshals it back. Conversion always goes through the
//! canonical model, so any registered format converts to any other.
//! Two domains ship: agents ([`Agent`]) and MCP server sets ([`McpConfig`]).
//!
//! # Examples
//!
//! ```
//! use assistantkit_agents::builtin_agent_registry;
//!
//! let registry = builtin_agent_registry().unwrap();
//! let kiro = registry
//!     .convert(br#"{"name":"demo","tools":["Read","Bash"]}"#, "spec", "kiro")
//!     .unwrap();
//!
//! let json: serde_json::Value = serde_json::from_slice(&kiro).unwrap();
//! assert_eq!(json["name"], "demo");
//! assert_eq!(json["tools"], serde_json::json!(["read", "shell"]));
//! ```
//!
//! Generating a directory of specs for several tools at once:
//!
//! ```no_run
//! use assistantkit_agents::{builtin_agent_registry, load_agents, parse_targets, Generator};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let registry = builtin_agent_registry()?;
//! let agents = load_agents(Path::new("plugins/spec/agents"))?;
//! let targets = parse_targets("claude:.claude/agents,kiro:plugins/kiro/agents")?;
//! let report = Generator::new(&registry).generate(&agents, &targets);
//! print!("{}", report.format_summary());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod adapters;
pub mod agent;
mod convert;
pub mod deployment;
pub mod error;
pub mod frontmatter;
pub mod generate;
pub mod mapping;
pub mod mcp;
pub mod registry;
pub mod report;
pub mod spec_dir;

pub use adapters::{
    builtin_agent_registry, Adapter, AgentkitAdapter, ClaudeAdapter, Entity, GeminiAdapter,
    KiroAdapter, SpecAdapter,
};
pub use agent::Agent;
pub use deployment::{run_project, Deployment, DeploymentTarget, Platform};
pub use error::{Error, Result};
pub use generate::{parse_targets, Generator, Target};
pub use mapping::{Mapped, MappingTable, UnknownCase};
pub use mcp::{builtin_mcp_registry, McpConfig, McpServer, McpTransport};
pub use registry::Registry;
pub use report::{GenerationReport, SkipReason, TargetReport};
pub use spec_dir::{load_agents, read_spec_dir, SpecFile};
