//! Error types shared by every adapter and the registry.

use std::path::PathBuf;

/// Boxed underlying cause carried by parse and marshal failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input bytes do not match the adapter's native structure.
    #[error("failed to parse {format} data: {source}")]
    Parse {
        format: String,
        #[source]
        source: BoxError,
    },

    /// Canonical data could not be encoded in the native format.
    #[error("failed to marshal {format} data: {source}")]
    Marshal {
        format: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unknown {domain} format {name:?} (available: {})", .available.join(", "))]
    UnknownAdapter {
        domain: &'static str,
        name: String,
        available: Vec<String>,
    },

    #[error("{domain} format {name:?} is registered twice")]
    DuplicateAdapter { domain: &'static str, name: String },
}

impl Error {
    pub fn parse(format: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Parse {
            format: format.into(),
            source: source.into(),
        }
    }

    pub fn marshal(format: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Marshal {
            format: format.into(),
            source: source.into(),
        }
    }

    /// True when a read failed because the file does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }

    /// Format name for parse and marshal failures.
    pub fn format(&self) -> Option<&str> {
        match self {
            Self::Parse { format, .. } | Self::Marshal { format, .. } => Some(format),
            _ => None,
        }
    }
}
