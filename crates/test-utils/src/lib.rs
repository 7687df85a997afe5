//! Shared test utilities for assistantkit crates.
//!
//! Environment guards for tests that touch process-global state, and a
//! fixture that lays out a canonical spec directory and a multi-agent
//! project on disk.

use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

/// Serialize tests that mutate process-global state (env vars, cwd, etc).
///
/// Acquire this guard at the start of any test that modifies environment
/// variables to prevent race conditions between parallel tests.
pub fn env_guard() -> MutexGuard<'static, ()> {
    static TEST_SERIAL: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));
    TEST_SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

/// RAII guard for environment variables - restores original value on drop.
pub struct EnvVarGuard {
    key: &'static str,
    previous: Option<String>,
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        if let Some(v) = &self.previous {
            std::env::set_var(self.key, v);
        } else {
            std::env::remove_var(self.key);
        }
    }
}

/// Set an environment variable and return a guard that restores the original on drop.
///
/// # Example
/// ```
/// let _guard = assistantkit_test_utils::set_env_var("MY_VAR", Some("value"));
/// // MY_VAR is set to "value" until _guard drops
/// ```
pub fn set_env_var(key: &'static str, value: Option<&str>) -> EnvVarGuard {
    let previous = std::env::var(key).ok();
    if let Some(val) = value {
        std::env::set_var(key, val);
    } else {
        std::env::remove_var(key);
    }
    EnvVarGuard { key, previous }
}

/// Renders a canonical agent spec with YAML frontmatter.
pub fn agent_markdown(name: &str, description: &str, tools: &[&str], body: &str) -> String {
    let mut out = format!("---\nname: {name}\ndescription: {description}\n");
    if !tools.is_empty() {
        out.push_str(&format!("tools: [{}]\n", tools.join(", ")));
    }
    out.push_str("---\n\n");
    out.push_str(body);
    out.push('\n');
    out
}

/// Temporary workspace with a spec directory and a project layout.
///
/// The tempdir is automatically cleaned up when this struct is dropped.
pub struct SpecFixture {
    pub tempdir: tempfile::TempDir,
    /// `<root>/specs`, flat directory of `*.md` agent specs
    pub spec_dir: PathBuf,
    /// `<root>/project`, holding `agents/` and `deployment.json`
    pub project_dir: PathBuf,
}

impl SpecFixture {
    /// Creates the empty `specs/` and `project/agents/` directories.
    pub fn new() -> std::io::Result<Self> {
        let tempdir = tempfile::tempdir()?;
        let spec_dir = tempdir.path().join("specs");
        let project_dir = tempdir.path().join("project");

        std::fs::create_dir_all(&spec_dir)?;
        std::fs::create_dir_all(project_dir.join("agents"))?;

        Ok(Self {
            tempdir,
            spec_dir,
            project_dir,
        })
    }

    pub fn root(&self) -> &Path {
        self.tempdir.path()
    }

    /// Writes `specs/<name>.md`.
    pub fn add_spec(
        &self,
        name: &str,
        description: &str,
        tools: &[&str],
        body: &str,
    ) -> std::io::Result<PathBuf> {
        let path = self.spec_dir.join(format!("{name}.md"));
        std::fs::write(&path, agent_markdown(name, description, tools, body))?;
        Ok(path)
    }

    /// Writes `project/agents/<name>.md`.
    pub fn add_project_agent(
        &self,
        name: &str,
        description: &str,
        tools: &[&str],
        body: &str,
    ) -> std::io::Result<PathBuf> {
        let path = self.project_dir.join("agents").join(format!("{name}.md"));
        std::fs::write(&path, agent_markdown(name, description, tools, body))?;
        Ok(path)
    }

    /// Writes `project/deployment.json` verbatim.
    pub fn write_deployment(&self, json: &str) -> std::io::Result<PathBuf> {
        let path = self.project_dir.join("deployment.json");
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
