use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::Result;

/// How [`Vcs::ensure_branch`] got onto the requested branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchSwitch {
    Created,
    Existing,
}

/// The version-control operations glyphgraph needs.
#[async_trait]
pub trait Vcs: Send + Sync {
    /// Checked-out branch, `None` on a detached HEAD.
    async fn current_branch(&self) -> Result<Option<String>>;

    /// Switch to `name`, creating it first if it does not exist.
    async fn ensure_branch(&self, name: &str) -> Result<BranchSwitch>;

    /// Record one commit on the current branch, authored and committed at `when`.
    async fn commit_at(&self, when: NaiveDateTime, message: &str) -> Result<()>;

    /// Local branches starting with `prefix`, sorted.
    async fn list_branches(&self, prefix: &str) -> Result<Vec<String>>;

    async fn delete_branch(&self, name: &str) -> Result<()>;
}
