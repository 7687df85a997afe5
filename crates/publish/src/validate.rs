//! Plugin directory validation.

use crate::error::PublishError;
use std::path::Path;

/// Checks that every path in `required` exists under `dir`.
///
/// All missing artifacts are reported together, in the order given.
pub fn validate_plugin_dir<S: AsRef<str>>(
    dir: &Path,
    required: &[S],
) -> Result<(), PublishError> {
    if !dir.is_dir() {
        return Err(PublishError::Io {
            path: dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "plugin directory does not exist",
            ),
        });
    }

    let missing: Vec<String> = required
        .iter()
        .map(AsRef::as_ref)
        .filter(|rel| !dir.join(rel).exists())
        .map(String::from)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        tracing::debug!(dir = %dir.display(), ?missing, "Plugin directory incomplete");
        Err(PublishError::Validation { missing })
    }
}
