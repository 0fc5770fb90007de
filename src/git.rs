use std::path::Path;
use std::process::Command;

/// Repository state for the directory the statusline runs in.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RepoStatus {
    pub is_repository: bool,
    /// Current branch name. `None` when detached or the lookup fails.
    pub branch: Option<String>,
}

/// Queries version-control state for a directory. A trait so the renderer
/// can be tested without a real repository or a git binary on PATH.
pub trait RepoProbe {
    fn probe(&self, dir: &Path) -> RepoStatus;
}

/// Probe backed by the `git` CLI. Every failure mode (git missing, nonzero
/// exit, garbage output) collapses to "not a repository" -- the statusline
/// must never surface an error.
pub struct GitCli;

impl RepoProbe for GitCli {
    fn probe(&self, dir: &Path) -> RepoStatus {
        if !is_inside_work_tree(dir) {
            return RepoStatus::default();
        }
        RepoStatus {
            is_repository: true,
            branch: current_branch(dir),
        }
    }
}

fn is_inside_work_tree(dir: &Path) -> bool {
    Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["rev-parse", "--is-inside-work-tree"])
        .output()
        .map(|out| out.status.success() && out.stdout.starts_with(b"true"))
        .unwrap_or(false)
}

fn current_branch(dir: &Path) -> Option<String> {
    // symbolic-ref resolves unborn branches (fresh `git init`) and fails
    // quietly on detached HEAD, which renders as an empty segment.
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["symbolic-ref", "--short", "-q", "HEAD"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if branch.is_empty() {
        return None;
    }
    Some(branch)
}
