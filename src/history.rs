//! Changed-file history via `git log`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Source of changed file paths for a lookback timeframe.
///
/// Keeps the external-process concern out of the classification and
/// serialization stages, which are tested against literal line fixtures.
pub trait HistoryProvider {
    /// Return every file path touched by a commit within the timeframe,
    /// sorted lexicographically. Duplicates are preserved; one path
    /// appears once per commit that touched it.
    fn changed_files(&self, timeframe: &str) -> Result<Vec<String>>;
}

/// History provider backed by the `git` binary.
pub struct GitLog {
    dir: PathBuf,
}

impl GitLog {
    /// Query history of the repository at the given directory.
    pub fn new(dir: &Path) -> Self {
        Self { dir: dir.to_path_buf() }
    }
}

impl HistoryProvider for GitLog {
    fn changed_files(&self, timeframe: &str) -> Result<Vec<String>> {
        let output = run_git_log(&self.dir, timeframe)?;

        let mut lines: Vec<String> = output.lines().map(|l| l.to_string()).collect();
        // Stable byte-wise sort, equivalent to the output of `LC_ALL=C sort`
        // but independent of the host locale.
        lines.sort();

        Ok(lines)
    }
}

/// Run `git log --pretty=format: --since=<timeframe> ago --name-only`
/// and capture stdout.
///
/// The empty pretty format suppresses commit metadata, so the output is
/// one file path per line with a blank separator line per commit.
fn run_git_log(dir: &Path, timeframe: &str) -> Result<String> {
    let since = format!("--since={} ago", timeframe);

    let output = Command::new("git")
        .args(["log", "--pretty=format:", &since, "--name-only"])
        .current_dir(dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .context("Failed to execute git log (is git installed?)")?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!(
            "git log failed in {}: {}",
            dir.display(),
            stderr.trim()
        );
    }

    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    #[test]
    fn test_changed_files_in_fresh_repo() {
        if !git_available() {
            return;
        }

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        git(dir, &["init", "-q"]);
        git(dir, &["config", "user.email", "ci@example.com"]);
        git(dir, &["config", "user.name", "ci"]);

        std::fs::create_dir(dir.join("rest-fights")).unwrap();
        std::fs::write(dir.join("rest-fights/pom.xml"), "<project/>").unwrap();
        std::fs::write(dir.join("zz-top.txt"), "z").unwrap();
        git(dir, &["add", "."]);
        git(dir, &["commit", "-q", "-m", "initial"]);

        let files = GitLog::new(dir).changed_files("1 hour").unwrap();

        // Non-blank lines are the committed paths, in sorted order.
        let paths: Vec<&String> = files.iter().filter(|l| !l.trim().is_empty()).collect();
        assert_eq!(paths, vec!["rest-fights/pom.xml", "zz-top.txt"]);
    }

    #[test]
    fn test_repo_without_commits() {
        if !git_available() {
            return;
        }

        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();

        git(dir, &["init", "-q"]);

        // No commits at all: git log exits non-zero on an unborn branch,
        // which surfaces as an error rather than an empty result.
        let result = GitLog::new(dir).changed_files("1 hour");
        match result {
            Ok(files) => assert!(files.iter().all(|l| l.trim().is_empty())),
            Err(e) => assert!(e.to_string().contains("git log failed")),
        }
    }

    #[test]
    fn test_not_a_repository_is_an_error() {
        if !git_available() {
            return;
        }

        let tmp = tempfile::tempdir().unwrap();
        let result = GitLog::new(tmp.path()).changed_files("1 hour");
        assert!(result.is_err());
    }
}
