//! Generation reporting: what was written, unchanged, skipped or failed per target.

use serde::Serialize;
use std::path::PathBuf;

/// Reasons a whole target was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum SkipReason {
    /// Target priority does not match the requested filter
    PriorityFiltered { priority: String, filter: String },
    /// Platform is recognised but this build cannot generate for it
    PlatformNotSupported { platform: String },
}

impl SkipReason {
    /// Returns a human-readable description of the skip reason.
    pub fn description(&self) -> String {
        match self {
            Self::PriorityFiltered { priority, filter } => {
                format!("priority {} does not match filter {}", priority, filter)
            }
            Self::PlatformNotSupported { platform } => {
                format!("platform {} is not supported by this build", platform)
            }
        }
    }
}

/// Outcome for one generation target.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetReport {
    /// Target label (deployment target name, or the format for plain targets)
    pub target: String,
    pub format: String,
    pub output: PathBuf,
    /// Files whose contents changed
    pub written: Vec<PathBuf>,
    /// Files left alone because their contents already matched
    pub unchanged: Vec<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<SkipReason>,
    /// Failure message with its full cause chain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TargetReport {
    pub fn new(target: impl Into<String>, format: impl Into<String>, output: PathBuf) -> Self {
        Self {
            target: target.into(),
            format: format.into(),
            output,
            ..Self::default()
        }
    }

    pub fn skip(mut self, reason: SkipReason) -> Self {
        self.skipped = Some(reason);
        self
    }

    /// Records a failure, keeping every `context` layer in the message.
    pub fn fail(&mut self, err: &anyhow::Error) {
        self.error = Some(format!("{err:#}"));
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }
}

/// Complete report across all targets of one generation run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GenerationReport {
    pub targets: Vec<TargetReport>,
}

impl GenerationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, target: TargetReport) {
        self.targets.push(target);
    }

    /// True when no target failed. Skipped targets do not count as failures.
    pub fn is_success(&self) -> bool {
        !self.targets.iter().any(TargetReport::is_failed)
    }

    pub fn failed(&self) -> impl Iterator<Item = &TargetReport> {
        self.targets.iter().filter(|t| t.is_failed())
    }

    pub fn total_written(&self) -> usize {
        self.targets.iter().map(|t| t.written.len()).sum()
    }

    pub fn total_unchanged(&self) -> usize {
        self.targets.iter().map(|t| t.unchanged.len()).sum()
    }

    /// Generates a formatted summary for display.
    pub fn format_summary(&self) -> String {
        let mut out = String::new();
        for t in &self.targets {
            let label = if t.target == t.format {
                t.target.clone()
            } else {
                format!("{} ({})", t.target, t.format)
            };
            if let Some(err) = &t.error {
                out.push_str(&format!("  {label}: FAILED: {err}\n"));
            } else if let Some(reason) = &t.skipped {
                out.push_str(&format!("  {label}: skipped, {}\n", reason.description()));
            } else {
                out.push_str(&format!(
                    "  {label}: {} written, {} unchanged in {}\n",
                    t.written.len(),
                    t.unchanged.len(),
                    t.output.display()
                ));
            }
        }
        let failed = self.failed().count();
        out.push_str(&format!(
            "Generated {} files ({} unchanged) across {} targets, {} failed\n",
            self.total_written(),
            self.total_unchanged(),
            self.targets.len(),
            failed
        ));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_target(name: &str, written: usize) -> TargetReport {
        let mut t = TargetReport::new(name, name, PathBuf::from("out"));
        t.written = (0..written).map(|i| PathBuf::from(format!("out/{i}"))).collect();
        t
    }

    #[test]
    fn success_ignores_skipped_targets() {
        let mut report = GenerationReport::new();
        report.push(ok_target("claude", 2));
        report.push(
            TargetReport::new("eks", "aws-eks", PathBuf::from("k8s")).skip(
                SkipReason::PlatformNotSupported {
                    platform: "aws-eks".into(),
                },
            ),
        );
        assert!(report.is_success());
        assert_eq!(report.total_written(), 2);
    }

    #[test]
    fn failure_is_attributed_to_its_target() {
        let mut report = GenerationReport::new();
        report.push(ok_target("claude", 1));
        let mut bad = TargetReport::new("nope", "nope", PathBuf::from("x"));
        bad.fail(&anyhow::anyhow!("boom").context("target nope"));
        report.push(bad);

        assert!(!report.is_success());
        let failed: Vec<_> = report.failed().map(|t| t.target.as_str()).collect();
        assert_eq!(failed, vec!["nope"]);
        assert_eq!(report.targets[1].error.as_deref(), Some("target nope: boom"));
    }

    #[test]
    fn summary_mentions_every_target() {
        let mut report = GenerationReport::new();
        report.push(ok_target("claude", 3));
        report.push(TargetReport::new("local", "kiro", PathBuf::from("k")).skip(
            SkipReason::PriorityFiltered {
                priority: "p2".into(),
                filter: "p1".into(),
            },
        ));
        let summary = report.format_summary();
        assert!(summary.contains("claude: 3 written, 0 unchanged"));
        assert!(summary.contains("local (kiro): skipped, priority p2 does not match filter p1"));
        assert!(summary.contains("0 failed"));
    }
}
