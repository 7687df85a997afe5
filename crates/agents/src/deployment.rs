//! Multi-agent project deployment descriptors.
//!
//! A project directory holds `agents/*.md` specs and a `deployment.json`
//! listing where and for which platform to generate:
//!
//! ```json
//! {
//!   "$schema": "https://example.com/deployment.schema.json",
//!   "team": "stats-agent-team",
//!   "targets": [
//!     { "name": "local-claude", "platform": "claude-code", "priority": "p1", "output": ".claude/agents" },
//!     { "name": "local-server", "platform": "agentkit-local", "priority": "p2", "output": "agentkit" }
//!   ]
//! }
//! ```

use crate::adapters::render_full_config;
use crate::agent::Agent;
use crate::generate::{write_if_changed, Generator, Target};
use crate::registry::Registry;
use crate::report::{GenerationReport, SkipReason, TargetReport};
use crate::spec_dir::load_agents;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEPLOYMENT_FILE: &str = "deployment.json";
pub const AGENTS_DIR: &str = "agents";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub team: String,
    #[serde(default)]
    pub targets: Vec<DeploymentTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeploymentTarget {
    pub name: String,
    /// Opaque dispatch key, see [`Platform::resolve`]
    pub platform: String,
    #[serde(default)]
    pub priority: String,
    /// Output location relative to the project directory
    pub output: PathBuf,
    /// Platform-specific settings, passed through untouched
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub config: serde_json::Map<String, serde_json::Value>,
}

impl Deployment {
    /// Reads `<project_dir>/deployment.json`.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let path = project_dir.join(DEPLOYMENT_FILE);
        let data =
            std::fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_slice(&data).with_context(|| format!("failed to parse {}", path.display()))
    }
}

/// What a deployment platform identifier dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// One file per agent through the named agent adapter
    Format(&'static str),
    /// One aggregated agentkit `config.json`
    AgentkitLocal,
    /// Recognised, but not generated by this build
    NotSupported,
    /// Not a known platform
    Unknown,
}

impl Platform {
    pub fn resolve(platform: &str) -> Self {
        match platform {
            "claude-code" => Self::Format("claude"),
            "kiro-cli" => Self::Format("kiro"),
            "gemini-cli" => Self::Format("gemini"),
            "agentkit-local" => Self::AgentkitLocal,
            "aws-agentcore" | "aws-eks" | "azure-aks" | "gcp-gke" | "kubernetes" => {
                Self::NotSupported
            }
            _ => Self::Unknown,
        }
    }
}

/// Generates every target of the project in `project_dir`.
///
/// Failing to load the descriptor or the agent specs is an error; a
/// failing target is recorded in the report and the rest still run.
pub fn run_project(
    registry: &Registry<Agent>,
    project_dir: &Path,
    priority: Option<&str>,
) -> Result<GenerationReport> {
    let deployment = Deployment::load(project_dir)?;
    let agents = load_agents(&project_dir.join(AGENTS_DIR))?;
    tracing::info!(
        team = %deployment.team,
        agents = agents.len(),
        targets = deployment.targets.len(),
        "Processing project"
    );

    let generator = Generator::new(registry);
    let mut report = GenerationReport::new();
    for target in &deployment.targets {
        report.push(run_target(&generator, &agents, project_dir, target, priority));
    }
    Ok(report)
}

fn run_target(
    generator: &Generator<'_>,
    agents: &[Agent],
    project_dir: &Path,
    target: &DeploymentTarget,
    priority: Option<&str>,
) -> TargetReport {
    let output = project_dir.join(&target.output);
    let skipped = TargetReport::new(&target.name, &target.platform, output.clone());

    if let Some(filter) = priority.filter(|p| *p != target.priority) {
        tracing::debug!(
            name = %target.name,
            priority = %target.priority,
            filter,
            "Skipping target"
        );
        return skipped.skip(SkipReason::PriorityFiltered {
            priority: target.priority.clone(),
            filter: filter.to_string(),
        });
    }

    match Platform::resolve(&target.platform) {
        Platform::Format(format) => {
            generator.generate_target(&target.name, agents, &Target::new(format, output))
        }
        Platform::AgentkitLocal => {
            let mut report = skipped;
            let path = output.join("config.json");
            match write_agentkit_config(agents, &path) {
                Ok(true) => report.written.push(path),
                Ok(false) => report.unchanged.push(path),
                Err(err) => report.fail(&err),
            }
            report
        }
        Platform::NotSupported => {
            tracing::warn!(
                name = %target.name,
                platform = %target.platform,
                "Platform not supported, skipping"
            );
            skipped.skip(SkipReason::PlatformNotSupported {
                platform: target.platform.clone(),
            })
        }
        Platform::Unknown => {
            let mut report = skipped;
            report.fail(&anyhow::anyhow!("unsupported platform: {}", target.platform));
            report
        }
    }
}

fn write_agentkit_config(agents: &[Agent], path: &Path) -> Result<bool> {
    let data = render_full_config(agents)?;
    write_if_changed(path, &data)
        .with_context(|| format!("failed to write agentkit config {}", path.display()))
}
