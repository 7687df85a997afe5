//! Publish error types.

use std::path::PathBuf;

/// Failure reported by a [`PullRequestClient`](crate::PullRequestClient).
pub type ClientError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    /// Required plugin artifacts are absent or unusable.
    #[error("plugin validation failed, missing: {}", .missing.join(", "))]
    Validation { missing: Vec<String> },

    /// The plugin manifest exists but is not valid JSON.
    #[error("invalid plugin manifest {}: {source}", .path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("authentication failed: {source}")]
    Auth {
        #[source]
        source: ClientError,
    },

    #[error("failed to fork {owner}/{repo}: {source}")]
    Fork {
        owner: String,
        repo: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to create branch {branch}: {source}")]
    Branch {
        branch: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to commit {files} files to {branch}: {source}")]
    Commit {
        branch: String,
        files: usize,
        #[source]
        source: ClientError,
    },

    #[error("failed to open pull request from {head}: {source}")]
    PullRequest {
        head: String,
        #[source]
        source: ClientError,
    },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PublishError {
    /// Names of missing artifacts for validation failures.
    pub fn missing(&self) -> &[String] {
        match self {
            Self::Validation { missing } => missing,
            _ => &[],
        }
    }
}
