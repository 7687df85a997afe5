//! Agent adapters for reading/writing native agent formats.

mod agentkit;
mod claude;
mod gemini;
mod kiro;
mod spec;
pub mod traits;
pub mod utils;

pub use agentkit::{
    render_full_config, write_full_config, AgentConfig, AgentkitAdapter, FullConfig, LlmSection,
    McpSection, TimeoutSection,
};
pub use claude::ClaudeAdapter;
pub use gemini::GeminiAdapter;
pub use kiro::KiroAdapter;
pub use spec::SpecAdapter;
pub use traits::{Adapter, Entity};

use crate::agent::Agent;
use crate::error::Result;
use crate::registry::Registry;

/// Registry holding every built-in agent adapter.
pub fn builtin_agent_registry() -> Result<Registry<Agent>> {
    Registry::from_adapters([
        Box::new(AgentkitAdapter) as Box<dyn Adapter<Entity = Agent>>,
        Box::new(ClaudeAdapter),
        Box::new(GeminiAdapter),
        Box::new(KiroAdapter),
        Box::new(SpecAdapter),
    ])
}
