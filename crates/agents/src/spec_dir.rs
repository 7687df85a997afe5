//! Loading canonical agent specs from a directory of markdown files.

use crate::agent::Agent;
use crate::frontmatter::{agent_from_markdown, parse_agent_markdown};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Raw contents of one spec file.
#[derive(Debug, Clone)]
pub struct SpecFile {
    pub path: PathBuf,
    pub data: Vec<u8>,
}

/// Reads every `*.md` file directly inside `dir`, sorted by file name.
///
/// Subdirectories are not searched. Fails when the directory holds no
/// markdown files.
pub fn read_spec_dir(dir: &Path) -> Result<Vec<SpecFile>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("failed to read spec directory {}", dir.display()))?;
        if !entry.file_type().is_file() || !is_markdown(entry.path()) {
            continue;
        }
        let data = std::fs::read(entry.path())
            .with_context(|| format!("failed to read {}", entry.path().display()))?;
        files.push(SpecFile {
            path: entry.into_path(),
            data,
        });
    }

    if files.is_empty() {
        bail!("no agents found in {}", dir.display());
    }
    Ok(files)
}

/// Parses every spec in `dir` into canonical agents.
pub fn load_agents(dir: &Path) -> Result<Vec<Agent>> {
    read_spec_dir(dir)?
        .into_iter()
        .map(|file| {
            parse_spec(&file).with_context(|| format!("invalid agent spec {}", file.path.display()))
        })
        .collect()
}

fn parse_spec(file: &SpecFile) -> Result<Agent> {
    let text = std::str::from_utf8(&file.data)?;
    let (frontmatter, body) = parse_agent_markdown("spec", text)?;
    Ok(agent_from_markdown(frontmatter, body))
}

fn is_markdown(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "md")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn reads_markdown_files_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("b.md"), "---\nname: b\n---\n").unwrap();
        fs::write(tmp.path().join("a.md"), "---\nname: a\n---\n").unwrap();
        fs::write(tmp.path().join("notes.txt"), "ignored").unwrap();
        fs::create_dir(tmp.path().join("nested")).unwrap();
        fs::write(tmp.path().join("nested/c.md"), "---\nname: c\n---\n").unwrap();

        let files = read_spec_dir(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.md", "b.md"]);
    }

    #[test]
    fn empty_directory_reports_no_agents() {
        let tmp = tempfile::tempdir().unwrap();
        let err = read_spec_dir(tmp.path()).unwrap_err();
        assert!(err.to_string().contains("no agents found"));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(read_spec_dir(&tmp.path().join("absent")).is_err());
    }

    #[test]
    fn load_agents_names_the_bad_file() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("good.md"), "---\nname: good\n---\nBody").unwrap();
        fs::write(tmp.path().join("bad.md"), "no frontmatter here").unwrap();

        let err = load_agents(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("bad.md"));
    }

    #[test]
    fn load_agents_parses_fields() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("reviewer.md"),
            "---\nname: reviewer\ndescription: Reviews code\ntools: [Read, Grep]\nmodel: sonnet\n---\n\nReview carefully.\n",
        )
        .unwrap();

        let agents = load_agents(tmp.path()).unwrap();
        assert_eq!(agents.len(), 1);
        assert_eq!(agents[0].description, "Reviews code");
        assert_eq!(agents[0].tools, vec!["Read", "Grep"]);
        assert_eq!(agents[0].instructions, "Review carefully.");
    }
}
