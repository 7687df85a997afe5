//! Canonical JSON adapter: the agent model serialized as-is.

use super::traits::Adapter;
use crate::agent::Agent;
use crate::error::{Error, Result};
use crate::mapping::MappingTable;
use std::path::PathBuf;
use std::sync::LazyLock;

static TOOLS: LazyLock<MappingTable> = LazyLock::new(MappingTable::identity);

/// Reads and writes [`Agent`] as pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecAdapter;

impl Adapter for SpecAdapter {
    type Entity = Agent;

    fn name(&self) -> &str {
        "spec"
    }

    fn file_extension(&self) -> &str {
        ".json"
    }

    fn default_paths(&self) -> Vec<PathBuf> {
        vec![PathBuf::from("plugins/spec/agents")]
    }

    fn parse(&self, data: &[u8]) -> Result<Agent> {
        let mut agent: Agent =
            serde_json::from_slice(data).map_err(|e| Error::parse(self.name(), e))?;
        agent.tools = TOOLS.to_canonical_all(&agent.tools);
        Ok(agent)
    }

    fn marshal(&self, agent: &Agent) -> Result<Vec<u8>> {
        let mut data =
            serde_json::to_vec_pretty(agent).map_err(|e| Error::marshal(self.name(), e))?;
        data.push(b'\n');
        Ok(data)
    }
}
