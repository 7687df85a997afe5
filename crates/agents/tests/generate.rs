//! Generator and project-mode behaviour on a real filesystem.

use assistantkit_agents::{
    builtin_agent_registry, load_agents, parse_targets, run_project, Adapter, Agent, ClaudeAdapter,
    Generator, SkipReason, Target,
};
use assistantkit_test_utils::SpecFixture;
use std::fs;

fn fixture_with_specs() -> SpecFixture {
    let fixture = SpecFixture::new().unwrap();
    fixture
        .add_spec("reviewer", "Reviews diffs", &["Read", "Grep"], "Review carefully.")
        .unwrap();
    fixture
        .add_spec("researcher", "Finds sources", &["WebSearch", "WebFetch", "Bash"], "Search widely.")
        .unwrap();
    fixture
}

#[test]
fn one_failing_target_does_not_stop_the_others() {
    let fixture = fixture_with_specs();
    let agents = load_agents(&fixture.spec_dir).unwrap();
    let out = fixture.root().join("out");
    let targets = parse_targets(&format!(
        "claude:{0}/claude,doesnotexist:{0}/bogus,kiro:{0}/kiro",
        out.display()
    ))
    .unwrap();

    let registry = builtin_agent_registry().unwrap();
    let report = Generator::new(&registry).generate(&agents, &targets);

    assert!(!report.is_success());
    assert_eq!(report.targets.len(), 3);

    let failed: Vec<_> = report.failed().map(|t| t.format.as_str()).collect();
    assert_eq!(failed, vec!["doesnotexist"]);
    assert!(report.targets[1]
        .error
        .as_deref()
        .unwrap()
        .contains("available: agentkit, claude, gemini, kiro, spec"));

    assert!(out.join("claude/reviewer.md").is_file());
    assert!(out.join("claude/researcher.md").is_file());
    assert!(out.join("kiro/reviewer.json").is_file());
    assert!(out.join("kiro/researcher.json").is_file());
    assert!(!out.join("bogus").exists());
}

#[test]
fn generated_files_parse_back_to_the_specs() {
    let fixture = fixture_with_specs();
    let agents = load_agents(&fixture.spec_dir).unwrap();
    let out = fixture.root().join("claude");

    let registry = builtin_agent_registry().unwrap();
    let report = Generator::new(&registry).generate(&agents, &[Target::new("claude", &out)]);
    assert!(report.is_success());

    for agent in &agents {
        let back = ClaudeAdapter
            .read_file(&out.join(format!("{}.md", agent.name)))
            .unwrap();
        assert_eq!(&back, agent);
    }
}

#[test]
fn write_file_creates_missing_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("deep/nested/dir/agent.md");

    ClaudeAdapter
        .write_file(&Agent::new("agent").with_tools(["Read"]), &path)
        .unwrap();

    assert!(path.is_file());
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let file_mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(file_mode & 0o777, 0o600);
        let dir_mode = fs::metadata(tmp.path().join("deep/nested"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(dir_mode & 0o002, 0);
    }
}

#[test]
fn read_file_distinguishes_absent_from_malformed() {
    let tmp = tempfile::tempdir().unwrap();
    let missing = ClaudeAdapter
        .read_file(&tmp.path().join("absent.md"))
        .unwrap_err();
    assert!(missing.is_not_found());

    let bad = tmp.path().join("bad.md");
    fs::write(&bad, "no frontmatter").unwrap();
    let malformed = ClaudeAdapter.read_file(&bad).unwrap_err();
    assert!(!malformed.is_not_found());
    assert_eq!(malformed.format(), Some("claude"));
}

const DEPLOYMENT: &str = r#"{
    "$schema": "https://example.com/deployment.schema.json",
    "team": "stats-agent-team",
    "targets": [
        {"name": "local-claude", "platform": "claude-code", "priority": "p1", "output": "out/claude"},
        {"name": "local-kiro", "platform": "kiro-cli", "priority": "p1", "output": "out/kiro"},
        {"name": "local-server", "platform": "agentkit-local", "priority": "p2", "output": "out/agentkit"},
        {"name": "cloud", "platform": "aws-agentcore", "priority": "p3", "output": "cdk",
         "config": {"region": "us-east-1"}},
        {"name": "cluster", "platform": "gcp-gke", "priority": "p3", "output": "helm"},
        {"name": "mystery", "platform": "mainframe", "priority": "p3", "output": "mf"}
    ]
}"#;

fn project_fixture() -> SpecFixture {
    let fixture = SpecFixture::new().unwrap();
    fixture
        .add_project_agent("collector", "Collects stats", &["WebFetch", "Bash"], "Collect.")
        .unwrap();
    fixture
        .add_project_agent("analyst", "Analyses stats", &["Read"], "Analyse.")
        .unwrap();
    fixture.write_deployment(DEPLOYMENT).unwrap();
    fixture
}

#[test]
fn project_mode_dispatches_on_platform() {
    let fixture = project_fixture();
    let registry = builtin_agent_registry().unwrap();
    let report = run_project(&registry, &fixture.project_dir, None).unwrap();
    let project = &fixture.project_dir;

    assert_eq!(report.targets.len(), 6);
    assert!(project.join("out/claude/collector.md").is_file());
    assert!(project.join("out/kiro/analyst.json").is_file());

    let config: serde_json::Value =
        serde_json::from_slice(&fs::read(project.join("out/agentkit/config.json")).unwrap())
            .unwrap();
    assert_eq!(config["mode"], "local");
    assert_eq!(config["agents"].as_array().unwrap().len(), 2);
    assert_eq!(config["agents"][1]["tools"], serde_json::json!(["shell"]));

    let cloud = &report.targets[3];
    assert!(matches!(
        cloud.skipped,
        Some(SkipReason::PlatformNotSupported { .. })
    ));
    assert!(report.targets[4].is_skipped());
    assert!(!project.join("cdk").exists());

    let failed: Vec<_> = report.failed().map(|t| t.target.as_str()).collect();
    assert_eq!(failed, vec!["mystery"]);
    assert!(report.targets[5]
        .error
        .as_deref()
        .unwrap()
        .contains("unsupported platform: mainframe"));
}

#[test]
fn project_priority_filter_skips_other_targets() {
    let fixture = project_fixture();
    let registry = builtin_agent_registry().unwrap();
    let report = run_project(&registry, &fixture.project_dir, Some("p2")).unwrap();

    assert!(report.is_success());
    let generated: Vec<_> = report
        .targets
        .iter()
        .filter(|t| !t.is_skipped())
        .map(|t| t.target.as_str())
        .collect();
    assert_eq!(generated, vec!["local-server"]);
    assert!(!fixture.project_dir.join("out/claude").exists());
    assert!(report.format_summary().contains("priority p1 does not match filter p2"));
}

#[test]
fn project_without_agents_is_an_error() {
    let fixture = SpecFixture::new().unwrap();
    fixture.write_deployment(DEPLOYMENT).unwrap();
    let registry = builtin_agent_registry().unwrap();

    let err = run_project(&registry, &fixture.project_dir, None).unwrap_err();
    assert!(format!("{err:#}").contains("no agents found"));
}
