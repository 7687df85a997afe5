//! Publishing through a recording client, as an external caller would.

use assistantkit_publish::claude::{MANIFEST, REQUIRED_FILES};
use assistantkit_publish::{
    validate_plugin_dir, ClaudeMarketplace, ClientError, FileChange, PublishError, PublishOptions,
    Publisher, PullRequest, PullRequestClient, RepoRef,
};
use std::fs;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingClient {
    calls: Mutex<Vec<String>>,
    fail_commit: bool,
}

impl RecordingClient {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl PullRequestClient for &RecordingClient {
    fn authenticated_user(&self) -> Result<String, ClientError> {
        self.record("user");
        Ok("octo".into())
    }

    fn fork(&self, owner: &str, repo: &str) -> Result<RepoRef, ClientError> {
        self.record(format!("fork {owner}/{repo}"));
        Ok(RepoRef {
            owner: "octo".into(),
            repo: repo.into(),
        })
    }

    fn create_branch(&self, fork: &RepoRef, base: &str, branch: &str) -> Result<(), ClientError> {
        self.record(format!("branch {}/{} {base}..{branch}", fork.owner, fork.repo));
        Ok(())
    }

    fn commit_files(
        &self,
        _fork: &RepoRef,
        branch: &str,
        files: &[FileChange],
        _message: &str,
    ) -> Result<(), ClientError> {
        if self.fail_commit {
            return Err("push rejected".into());
        }
        self.record(format!("commit {} files to {branch}", files.len()));
        Ok(())
    }

    fn open_pull_request(&self, request: &PullRequest) -> Result<String, ClientError> {
        self.record(format!("pr {} -> {}", request.head, request.base));
        Ok("https://example.test/pull/1".into())
    }
}

fn plugin() -> tempfile::TempDir {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join(".claude-plugin")).unwrap();
    fs::write(tmp.path().join(MANIFEST), r#"{"name":"stats"}"#).unwrap();
    fs::create_dir_all(tmp.path().join("agents")).unwrap();
    fs::write(tmp.path().join("agents/a.md"), "a").unwrap();
    fs::write(tmp.path().join("agents/b.md"), "b").unwrap();
    tmp
}

#[test]
fn publish_drives_client_in_order() {
    let dir = plugin();
    let client = RecordingClient::default();

    let result = ClaudeMarketplace::new(&client)
        .publish(&PublishOptions::new(dir.path(), "stats"))
        .unwrap();

    assert_eq!(result.pr_url.as_deref(), Some("https://example.test/pull/1"));
    assert_eq!(result.files.len(), 3);
    assert_eq!(
        client.calls(),
        vec![
            "user",
            "fork anthropics/claude-plugins-official",
            "branch octo/claude-plugins-official main..add-plugin-stats",
            "commit 3 files to add-plugin-stats",
            "pr octo:add-plugin-stats -> main",
        ]
    );
}

#[test]
fn commit_failure_names_branch_and_stops() {
    let dir = plugin();
    let client = RecordingClient {
        fail_commit: true,
        ..Default::default()
    };

    let err = ClaudeMarketplace::new(&client)
        .publish(&PublishOptions::new(dir.path(), "stats"))
        .unwrap_err();

    assert!(matches!(err, PublishError::Commit { files: 3, .. }));
    assert!(err.to_string().contains("add-plugin-stats"));
    assert!(!client.calls().iter().any(|c| c.starts_with("pr ")));
}

#[test]
fn dry_run_touches_nothing() {
    let dir = plugin();
    let client = RecordingClient::default();

    let result = ClaudeMarketplace::new(&client)
        .publish(&PublishOptions::new(dir.path(), "stats").dry_run())
        .unwrap();

    assert!(result.dry_run);
    assert!(client.calls().is_empty());
}

#[test]
fn required_files_match_validator() {
    let dir = plugin();
    assert!(validate_plugin_dir(dir.path(), REQUIRED_FILES).is_ok());

    fs::remove_file(dir.path().join(MANIFEST)).unwrap();
    let err = validate_plugin_dir(dir.path(), REQUIRED_FILES).unwrap_err();
    assert_eq!(err.missing(), [MANIFEST]);
}
