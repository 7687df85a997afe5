//! Marketplace publisher contract.

use crate::error::{ClientError, PublishError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

/// Target repository of a marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketplaceConfig {
    pub owner: String,
    pub repo: String,
    pub base_branch: String,
    /// Directory inside the repository that holds plugins
    pub plugins_path: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishOptions {
    pub plugin_dir: PathBuf,
    pub plugin_name: String,
    /// Collect and report files without contacting the marketplace
    pub dry_run: bool,
    pub title: Option<String>,
    pub body: Option<String>,
    /// Branch to push; derived from the plugin name when unset
    pub branch: Option<String>,
}

impl PublishOptions {
    pub fn new(plugin_dir: impl Into<PathBuf>, plugin_name: impl Into<String>) -> Self {
        Self {
            plugin_dir: plugin_dir.into(),
            plugin_name: plugin_name.into(),
            ..Self::default()
        }
    }

    pub fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    pub fn branch_name(&self) -> String {
        self.branch
            .clone()
            .unwrap_or_else(|| format!("add-plugin-{}", self.plugin_name))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResult {
    /// Pull request location; `None` for dry runs
    pub pr_url: Option<String>,
    pub branch: String,
    /// Repository paths that were (or would be) committed
    pub files: Vec<String>,
    pub dry_run: bool,
}

/// Submits a generated plugin directory to one marketplace.
pub trait Publisher {
    fn name(&self) -> &str;

    fn marketplace(&self) -> &MarketplaceConfig;

    /// Checks the directory holds everything the marketplace requires.
    fn validate(&self, plugin_dir: &Path) -> Result<(), PublishError>;

    fn publish(&self, options: &PublishOptions) -> Result<PublishResult, PublishError>;
}

/// A repository owned by `owner`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

/// One file to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path inside the repository, `/`-separated
    pub path: String,
    pub contents: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullRequest {
    pub owner: String,
    pub repo: String,
    /// `fork_owner:branch`
    pub head: String,
    pub base: String,
    pub title: String,
    pub body: String,
}

/// Git hosting operations a publisher drives.
#[cfg_attr(test, automock)]
pub trait PullRequestClient: Send + Sync {
    /// Login of the authenticated account.
    fn authenticated_user(&self) -> Result<String, ClientError>;

    /// Forks `owner/repo` into the authenticated account, returning the fork.
    fn fork(&self, owner: &str, repo: &str) -> Result<RepoRef, ClientError>;

    fn create_branch(&self, fork: &RepoRef, base: &str, branch: &str) -> Result<(), ClientError>;

    fn commit_files(
        &self,
        fork: &RepoRef,
        branch: &str,
        files: &[FileChange],
        message: &str,
    ) -> Result<(), ClientError>;

    /// Opens the pull request and returns its URL.
    fn open_pull_request(&self, request: &PullRequest) -> Result<String, ClientError>;
}
