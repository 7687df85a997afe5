//! Claude Code plugin marketplace publisher.
//!
//! Plugins are submitted as a pull request adding
//! `<plugins_path>/<plugin_name>/...` to the marketplace repository.

use crate::error::PublishError;
use crate::publisher::{
    FileChange, MarketplaceConfig, PublishOptions, PublishResult, Publisher, PullRequest,
    PullRequestClient,
};
use crate::validate::validate_plugin_dir;
use std::path::Path;
use walkdir::WalkDir;

/// Plugin manifest path, relative to the plugin directory.
pub const MANIFEST: &str = ".claude-plugin/plugin.json";

/// Artifacts every Claude Code plugin must ship.
pub const REQUIRED_FILES: &[&str] = &[MANIFEST];

pub struct ClaudeMarketplace<C> {
    client: C,
    config: MarketplaceConfig,
}

impl<C: PullRequestClient> ClaudeMarketplace<C> {
    /// Publisher for the official marketplace.
    pub fn new(client: C) -> Self {
        Self::with_config(client, Self::official())
    }

    pub fn with_config(client: C, config: MarketplaceConfig) -> Self {
        Self { client, config }
    }

    pub fn official() -> MarketplaceConfig {
        MarketplaceConfig {
            owner: "anthropics".into(),
            repo: "claude-plugins-official".into(),
            base_branch: "main".into(),
            plugins_path: "plugins".into(),
        }
    }

    fn collect_files(&self, options: &PublishOptions) -> Result<Vec<FileChange>, PublishError> {
        let prefix = format!("{}/{}", self.config.plugins_path, options.plugin_name);
        let mut files = Vec::new();
        for entry in WalkDir::new(&options.plugin_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.file_name() != ".git")
        {
            let entry = entry.map_err(|e| PublishError::Io {
                path: e
                    .path()
                    .unwrap_or(options.plugin_dir.as_path())
                    .to_path_buf(),
                source: e.into(),
            })?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&options.plugin_dir) else {
                continue;
            };
            let contents = std::fs::read(entry.path()).map_err(|source| PublishError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
            let rel: Vec<_> = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect();
            files.push(FileChange {
                path: format!("{prefix}/{}", rel.join("/")),
                contents,
            });
        }
        Ok(files)
    }
}

fn check_manifest(plugin_dir: &Path) -> Result<(), PublishError> {
    let path = plugin_dir.join(MANIFEST);
    let data = std::fs::read(&path).map_err(|source| PublishError::Io {
        path: path.clone(),
        source,
    })?;
    let manifest: serde_json::Value =
        serde_json::from_slice(&data).map_err(|source| PublishError::Manifest { path, source })?;
    if manifest
        .get("name")
        .and_then(|n| n.as_str())
        .is_none_or(str::is_empty)
    {
        return Err(PublishError::Validation {
            missing: vec![format!("{MANIFEST} name")],
        });
    }
    Ok(())
}

impl<C: PullRequestClient> Publisher for ClaudeMarketplace<C> {
    fn name(&self) -> &str {
        "claude"
    }

    fn marketplace(&self) -> &MarketplaceConfig {
        &self.config
    }

    fn validate(&self, plugin_dir: &Path) -> Result<(), PublishError> {
        validate_plugin_dir(plugin_dir, REQUIRED_FILES)?;
        check_manifest(plugin_dir)
    }

    fn publish(&self, options: &PublishOptions) -> Result<PublishResult, PublishError> {
        if options.plugin_name.trim().is_empty() {
            return Err(PublishError::Validation {
                missing: vec!["plugin name".into()],
            });
        }
        self.validate(&options.plugin_dir)?;

        let files = self.collect_files(options)?;
        let paths: Vec<String> = files.iter().map(|f| f.path.clone()).collect();
        let branch = options.branch_name();

        if options.dry_run {
            tracing::info!(
                plugin = %options.plugin_name,
                files = paths.len(),
                "Dry run, nothing submitted"
            );
            return Ok(PublishResult {
                pr_url: None,
                branch,
                files: paths,
                dry_run: true,
            });
        }

        let MarketplaceConfig {
            owner,
            repo,
            base_branch,
            ..
        } = &self.config;

        let user = self
            .client
            .authenticated_user()
            .map_err(|source| PublishError::Auth { source })?;
        tracing::debug!(%user, "Authenticated");

        let fork = self
            .client
            .fork(owner, repo)
            .map_err(|source| PublishError::Fork {
                owner: owner.clone(),
                repo: repo.clone(),
                source,
            })?;

        self.client
            .create_branch(&fork, base_branch, &branch)
            .map_err(|source| PublishError::Branch {
                branch: branch.clone(),
                source,
            })?;

        let title = options
            .title
            .clone()
            .unwrap_or_else(|| format!("Add {} plugin", options.plugin_name));
        self.client
            .commit_files(&fork, &branch, &files, &title)
            .map_err(|source| PublishError::Commit {
                branch: branch.clone(),
                files: files.len(),
                source,
            })?;

        let head = format!("{}:{}", fork.owner, branch);
        let request = PullRequest {
            owner: owner.clone(),
            repo: repo.clone(),
            head: head.clone(),
            base: base_branch.clone(),
            body: options
                .body
                .clone()
                .unwrap_or_else(|| format!("Adds the `{}` plugin.", options.plugin_name)),
            title,
        };
        let url = self
            .client
            .open_pull_request(&request)
            .map_err(|source| PublishError::PullRequest { head, source })?;
        tracing::info!(%url, plugin = %options.plugin_name, "Opened pull request");

        Ok(PublishResult {
            pr_url: Some(url),
            branch,
            files: paths,
            dry_run: false,
        })
    }
}
