//! Configuration file support for assistantkit.
//!
//! Loads settings from `~/.assistantkit/config.toml` with the following precedence:
//! CLI arguments > Environment variables > Config file
//!
//! ## Configuration File Format
//!
//! ```toml
//! # ~/.assistantkit/config.toml
//!
//! [generate]
//! # Directory of canonical agent specs
//! spec_dir = "plugins/spec/agents"
//!
//! # Default targets as format:dir pairs
//! targets = "claude:.claude/agents,kiro:plugins/kiro/agents"
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const SPEC_DIR_ENV: &str = "ASSISTANTKIT_SPEC_DIR";
pub const TARGETS_ENV: &str = "ASSISTANTKIT_TARGETS";

/// Top-level configuration structure.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

/// Defaults for the generate command.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateConfig {
    pub spec_dir: Option<String>,
    pub targets: Option<String>,
}

/// Returns the path to the config file (~/.assistantkit/config.toml).
fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".assistantkit").join("config.toml"))
}

/// Loads the configuration file if it exists.
///
/// Returns `Ok(None)` if the file doesn't exist.
/// Returns `Err` if the file exists but fails to parse.
pub fn load_config() -> Result<Option<Config>> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Ok(None),
    }
}

fn load_config_from(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Loaded configuration file");

    Ok(Some(config))
}

/// Applies configuration file settings to environment variables.
///
/// Only sets environment variables that are not already set, preserving
/// the precedence: CLI > ENV > config file. Call before parsing arguments.
pub fn apply_config_to_env() -> Result<()> {
    if let Some(config) = load_config()? {
        apply_generate_config_to_env(&config.generate);
    }
    Ok(())
}

fn apply_generate_config_to_env(generate: &GenerateConfig) {
    fn set_if_absent(key: &str, value: &str) {
        if std::env::var(key).is_err() {
            std::env::set_var(key, value);
            tracing::trace!(key, "Set environment variable from config file");
        }
    }

    if let Some(ref dir) = generate.spec_dir {
        set_if_absent(SPEC_DIR_ENV, dir);
    }

    if let Some(ref targets) = generate.targets {
        set_if_absent(TARGETS_ENV, targets);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistantkit_test_utils::{env_guard, set_env_var};

    #[test]
    fn config_path_returns_expected_location() {
        let path = config_path().unwrap();
        assert!(path.ends_with(".assistantkit/config.toml"));
    }

    #[test]
    fn parse_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.generate.spec_dir.is_none());
        assert!(config.generate.targets.is_none());
    }

    #[test]
    fn parse_generate_section() {
        let config: Config = toml::from_str(
            r#"
            [generate]
            spec_dir = "specs"
            targets = "claude:out/claude"
        "#,
        )
        .unwrap();
        assert_eq!(config.generate.spec_dir.as_deref(), Some("specs"));
        assert_eq!(config.generate.targets.as_deref(), Some("claude:out/claude"));
    }

    #[test]
    fn missing_file_is_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_config_from(&tmp.path().join("config.toml"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn malformed_file_is_error_naming_path() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[generate\n").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn apply_config_respects_existing_env_vars() {
        let _g = env_guard();
        let _spec = set_env_var(SPEC_DIR_ENV, Some("from-env"));
        let _targets = set_env_var(TARGETS_ENV, None);

        apply_generate_config_to_env(&GenerateConfig {
            spec_dir: Some("from-config".into()),
            targets: Some("kiro:out".into()),
        });

        assert_eq!(std::env::var(SPEC_DIR_ENV).unwrap(), "from-env");
        assert_eq!(std::env::var(TARGETS_ENV).unwrap(), "kiro:out");
    }
}
