//! Format-to-format conversion through the canonical model.

use crate::adapters::traits::Entity;
use crate::error::Result;
use crate::registry::Registry;
use std::path::Path;

impl<E: Entity> Registry<E> {
    /// Converts `data` from the `source` format to the `dest` format.
    ///
    /// Both names are resolved before any parsing happens. Parse and
    /// marshal errors are returned unchanged.
    pub fn convert(&self, data: &[u8], source: &str, dest: &str) -> Result<Vec<u8>> {
        let from = self.require(source)?;
        let to = self.require(dest)?;
        let entity = from.parse(data)?;
        tracing::debug!(domain = E::DOMAIN, source, dest, "Converting");
        to.marshal(&entity)
    }

    /// Reads `source_path` as `source` and writes it to `dest_path` as `dest`.
    pub fn convert_file(
        &self,
        source_path: &Path,
        source: &str,
        dest_path: &Path,
        dest: &str,
    ) -> Result<()> {
        let from = self.require(source)?;
        let to = self.require(dest)?;
        let entity = from.read_file(source_path)?;
        to.write_file(&entity, dest_path)?;
        tracing::info!(
            domain = E::DOMAIN,
            source = %source_path.display(),
            dest = %dest_path.display(),
            "Converted {} to {}",
            source,
            dest
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::adapters::builtin_agent_registry;
    use crate::error::Error;

    #[test]
    fn unknown_destination_fails_before_parsing() {
        let registry = builtin_agent_registry().unwrap();
        let err = registry.convert(b"not json", "spec", "doesnotexist").unwrap_err();
        assert!(matches!(err, Error::UnknownAdapter { .. }));
    }

    #[test]
    fn parse_error_propagates_unchanged() {
        let registry = builtin_agent_registry().unwrap();
        let err = registry.convert(b"{\"name\":", "kiro", "claude").unwrap_err();
        assert_eq!(err.format(), Some("kiro"));
    }

    #[test]
    fn convert_file_reports_missing_source() {
        let tmp = tempfile::tempdir().unwrap();
        let registry = builtin_agent_registry().unwrap();
        let err = registry
            .convert_file(
                &tmp.path().join("absent.json"),
                "spec",
                &tmp.path().join("out.md"),
                "claude",
            )
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
