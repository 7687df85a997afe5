//! Multi-target agent generation.
//!
//! The [`Generator`] marshals every agent for every target and writes
//! `<output>/<name><ext>`. Each target is attempted independently: a
//! failure is recorded in that target's [`TargetReport`] and generation
//! moves on to the next one.

use crate::adapters::traits::Adapter;
use crate::adapters::utils::{create_dir_all, file_stem, hash_content, write_private};
use crate::agent::Agent;
use crate::registry::Registry;
use crate::report::{GenerationReport, TargetReport};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One `format:dir` output target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub format: String,
    pub output: PathBuf,
}

impl Target {
    pub fn new(format: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            format: format.into(),
            output: output.into(),
        }
    }
}

impl FromStr for Target {
    type Err = anyhow::Error;

    fn from_str(pair: &str) -> Result<Self> {
        let Some((format, output)) = pair.split_once(':') else {
            bail!("invalid target {pair:?} (expected format:dir)");
        };
        let (format, output) = (format.trim(), output.trim());
        if format.is_empty() || output.is_empty() {
            bail!("invalid target {pair:?} (expected format:dir)");
        }
        Ok(Self::new(format, output))
    }
}

/// Parses a comma-separated list of `format:dir` pairs.
pub fn parse_targets(list: &str) -> Result<Vec<Target>> {
    list.split(',')
        .map(str::trim)
        .filter(|pair| !pair.is_empty())
        .map(Target::from_str)
        .collect()
}

/// Writes `data` unless the file already holds identical bytes.
///
/// Returns `true` when the file was written.
pub fn write_if_changed(path: &Path, data: &[u8]) -> Result<bool> {
    if let Ok(existing) = std::fs::read(path) {
        if hash_content(&existing) == hash_content(data) {
            tracing::debug!(path = %path.display(), "Unchanged, skipping write");
            return Ok(false);
        }
    }
    write_private(path, data)?;
    Ok(true)
}

pub struct Generator<'a> {
    registry: &'a Registry<Agent>,
}

impl<'a> Generator<'a> {
    pub fn new(registry: &'a Registry<Agent>) -> Self {
        Self { registry }
    }

    /// Generates every agent for every target.
    pub fn generate(&self, agents: &[Agent], targets: &[Target]) -> GenerationReport {
        let mut report = GenerationReport::new();
        for target in targets {
            report.push(self.generate_target(&target.format, agents, target));
        }
        report
    }

    /// Generates one target, labelling its report with `label`.
    pub fn generate_target(&self, label: &str, agents: &[Agent], target: &Target) -> TargetReport {
        let mut report = TargetReport::new(label, &target.format, target.output.clone());
        if let Err(err) = self.write_target(agents, target, &mut report) {
            tracing::warn!(name = label, error = %err, "Target failed");
            report.fail(&err);
        }
        report
    }

    fn write_target(
        &self,
        agents: &[Agent],
        target: &Target,
        report: &mut TargetReport,
    ) -> Result<()> {
        let adapter = self.registry.require(&target.format)?;
        create_dir_all(&target.output).with_context(|| {
            format!(
                "failed to create output directory {}",
                target.output.display()
            )
        })?;

        for agent in agents {
            let path = output_path(adapter, agent, &target.output)?;
            let data = adapter
                .marshal(agent)
                .with_context(|| format!("failed to generate {}", path.display()))?;
            if write_if_changed(&path, &data)? {
                tracing::info!(path = %path.display(), format = %target.format, "Generated");
                report.written.push(path);
            } else {
                report.unchanged.push(path);
            }
        }
        Ok(())
    }
}

fn output_path(
    adapter: &dyn Adapter<Entity = Agent>,
    agent: &Agent,
    dir: &Path,
) -> Result<PathBuf> {
    let stem = file_stem(&agent.name);
    if stem.is_empty() {
        bail!("agent name {:?} does not yield a usable file name", agent.name);
    }
    Ok(dir.join(format!("{stem}{}", adapter.file_extension())))
}
