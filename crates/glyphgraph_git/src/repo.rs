use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use glyphgraph_constant::defaults;
use tokio::io::AsyncWriteExt;

use crate::error::{GitError, Result};
use crate::executor::{GitCommand, GitExecutor};
use crate::vcs::{BranchSwitch, Vcs};

/// Format git accepts in `GIT_AUTHOR_DATE` / `GIT_COMMITTER_DATE` (local time).
pub const GIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A work tree driven through the `git` binary.
pub struct GitRepo {
    root: PathBuf,
    executor: GitExecutor,
    marker_file: String,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(GitError::NotARepository(path.to_path_buf()));
        }

        let local = GitExecutor::new(path);
        let inside = local
            .run(&GitCommand::new(["rev-parse", "--is-inside-work-tree"]))
            .await?;
        // prints "false" inside the .git directory itself
        if !inside.is_success() || inside.stdout.trim() != "true" {
            return Err(GitError::NotARepository(path.to_path_buf()));
        }

        let toplevel = local
            .run_checked(&GitCommand::new(["rev-parse", "--show-toplevel"]))
            .await?;
        let root = PathBuf::from(toplevel.stdout.trim());
        tracing::debug!(root = %root.display(), "opened repository");
        Ok(Self {
            executor: GitExecutor::new(&root),
            root,
            marker_file: defaults::MARKER_FILE.to_string(),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.executor = self.executor.with_timeout(timeout);
        self
    }

    /// File (relative to the work tree root) each commit appends to.
    pub fn with_marker_file(mut self, marker_file: impl Into<String>) -> Self {
        self.marker_file = marker_file.into();
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn marker_path(&self) -> PathBuf {
        self.root.join(&self.marker_file)
    }

    async fn validate_branch_name(&self, name: &str) -> Result<()> {
        if name.is_empty() || name.starts_with('-') {
            return Err(GitError::InvalidBranchName(name.to_string()));
        }
        let output = self
            .executor
            .run(&GitCommand::new(["check-ref-format", "--branch", name]))
            .await?;
        if output.is_success() {
            Ok(())
        } else {
            Err(GitError::InvalidBranchName(name.to_string()))
        }
    }

    async fn branch_exists(&self, name: &str) -> Result<bool> {
        let output = self
            .executor
            .run(&GitCommand::new([
                "rev-parse".to_string(),
                "--verify".to_string(),
                "--quiet".to_string(),
                format!("refs/heads/{name}"),
            ]))
            .await?;
        Ok(output.is_success())
    }

    async fn append_marker(&self, line: &str) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.marker_path())
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.write_all(b"\n").await?;
        file.flush().await?;
        Ok(())
    }
}

#[async_trait]
impl Vcs for GitRepo {
    async fn current_branch(&self) -> Result<Option<String>> {
        let command = GitCommand::new(["symbolic-ref", "--quiet", "--short", "HEAD"]);
        let output = self.executor.run(&command).await?;
        match output.exit_code {
            0 => Ok(Some(output.stdout.trim().to_string())),
            // detached HEAD
            1 => Ok(None),
            _ => output.check(&command).map(|_| None),
        }
    }

    async fn ensure_branch(&self, name: &str) -> Result<BranchSwitch> {
        self.validate_branch_name(name).await?;

        if self.branch_exists(name).await? {
            self.executor
                .run_checked(&GitCommand::new(["checkout", "--quiet", name]))
                .await?;
            tracing::info!(branch = name, "switched to existing branch");
            Ok(BranchSwitch::Existing)
        } else {
            self.executor
                .run_checked(&GitCommand::new(["checkout", "--quiet", "-b", name]))
                .await?;
            tracing::info!(branch = name, "created branch");
            Ok(BranchSwitch::Created)
        }
    }

    async fn commit_at(&self, when: NaiveDateTime, message: &str) -> Result<()> {
        let date = when.format(GIT_DATE_FORMAT).to_string();
        self.append_marker(&format!("{date} {message}")).await?;

        self.executor
            .run_checked(&GitCommand::new(["add", "--", self.marker_file.as_str()]))
            .await?;
        self.executor
            .run_checked(
                &GitCommand::new(["commit", "--quiet", "-m", message])
                    .env("GIT_AUTHOR_DATE", &date)
                    .env("GIT_COMMITTER_DATE", &date),
            )
            .await?;
        tracing::debug!(date = %date, "committed");
        Ok(())
    }

    async fn list_branches(&self, prefix: &str) -> Result<Vec<String>> {
        let output = self
            .executor
            .run_checked(&GitCommand::new([
                "branch".to_string(),
                "--list".to_string(),
                "--format=%(refname:short)".to_string(),
                format!("{prefix}*"),
            ]))
            .await?;
        let mut branches: Vec<String> = output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        branches.sort();
        Ok(branches)
    }

    async fn delete_branch(&self, name: &str) -> Result<()> {
        if name.is_empty() || name.starts_with('-') {
            return Err(GitError::InvalidBranchName(name.to_string()));
        }
        self.executor
            .run_checked(&GitCommand::new(["branch", "--quiet", "-D", name]))
            .await?;
        tracing::info!(branch = name, "deleted branch");
        Ok(())
    }
}
