//! Trait definitions for format adapters.

use super::utils::write_private;
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// A canonical entity type; one per configuration domain.
pub trait Entity: Send + Sync + 'static {
    /// Domain label used in diagnostics (e.g., "agent", "mcp").
    const DOMAIN: &'static str;
}

/// Reads and writes one native format for one domain.
///
/// `parse` and `marshal` are pure; file I/O happens only in `read_file`
/// and `write_file`.
pub trait Adapter: Send + Sync {
    type Entity: Entity;

    /// Lower-case format identifier (e.g., "claude", "kiro"); the registry key
    fn name(&self) -> &str;

    /// Extension of generated files, including the dot
    fn file_extension(&self) -> &str;

    /// Conventional locations for this format, project-level first
    fn default_paths(&self) -> Vec<PathBuf>;

    /// Decode native bytes into the canonical model
    fn parse(&self, data: &[u8]) -> Result<Self::Entity>;

    /// Encode the canonical model as native bytes
    fn marshal(&self, entity: &Self::Entity) -> Result<Vec<u8>>;

    fn read_file(&self, path: &Path) -> Result<Self::Entity> {
        let data = std::fs::read(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&data)
    }

    /// Marshals and writes, creating missing parent directories.
    fn write_file(&self, entity: &Self::Entity, path: &Path) -> Result<()> {
        let data = self.marshal(entity)?;
        write_private(path, &data)
    }
}
