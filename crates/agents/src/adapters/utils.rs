//! Shared utility functions for format adapters.

use crate::error::{Error, Result};
use crate::mapping::{Mapped, MappingTable};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Mode for generated files; they may embed API keys or tokens.
pub const FILE_MODE: u32 = 0o600;
/// Mode for created directories.
pub const DIR_MODE: u32 = 0o755;

/// Computes a SHA-256 hash of the given content, returning a lowercase hex string.
pub fn hash_content(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    format!("{:x}", hasher.finalize())
}

/// Creates `dir` and its missing ancestors with [`DIR_MODE`].
pub fn create_dir_all(dir: &Path) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder.create(dir)
}

/// Writes `data` to `path` with [`FILE_MODE`], creating parent directories.
pub fn write_private(path: &Path, data: &[u8]) -> Result<()> {
    let wrap = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(wrap)?;
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    let mut file = options.open(path).map_err(wrap)?;
    // `mode` only applies on create; tighten files left by earlier runs.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(FILE_MODE))
            .map_err(wrap)?;
    }
    file.write_all(data).map_err(wrap)
}

/// Translates an optional model id, noting passthrough of unknown ids.
pub fn native_model(table: &MappingTable, format: &str, model: Option<&str>) -> Option<String> {
    let model = model.filter(|m| !m.is_empty())?;
    match table.lookup(model) {
        Mapped::Known(native) => Some(native.to_string()),
        Mapped::Unmapped(raw) => {
            tracing::debug!(
                model = %model,
                format = %format,
                "Unknown model passed through without transformation"
            );
            Some(raw)
        }
    }
}

/// Reverse of [`native_model`].
pub fn canonical_model(table: &MappingTable, model: Option<&str>) -> Option<String> {
    model
        .filter(|m| !m.is_empty())
        .map(|m| table.to_canonical(m))
}

/// Interprets bytes as UTF-8 text for text-based formats.
pub fn utf8<'a>(format: &str, data: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(data).map_err(|e| Error::parse(format, e))
}

/// Reduces an agent name to a safe file stem.
///
/// Each `/`-separated segment keeps only alphanumerics, `-` and `_`; `.`
/// and `..` segments are dropped so names cannot escape the output
/// directory. Remaining segments are joined with `-`.
pub fn file_stem(name: &str) -> String {
    name.split('/')
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
        .map(|segment| {
            segment
                .chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_')
                .collect::<String>()
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
