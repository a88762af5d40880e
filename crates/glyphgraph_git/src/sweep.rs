//! Removal of previously generated branches.

use serde::Serialize;

use crate::error::{GitError, Result};
use crate::vcs::Vcs;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub deleted: Vec<String>,
    /// Matching branches left alone because they are checked out.
    pub skipped: Vec<String>,
}

/// Delete every local branch starting with `prefix` except the current one.
/// Stops at the first failed deletion.
pub async fn sweep_branches<V: Vcs + ?Sized>(vcs: &V, prefix: &str) -> Result<SweepReport> {
    if prefix.is_empty() {
        return Err(GitError::EmptyPrefix);
    }

    let current = vcs.current_branch().await?;
    let mut report = SweepReport::default();

    for branch in vcs.list_branches(prefix).await? {
        if current.as_deref() == Some(branch.as_str()) {
            tracing::warn!(branch = %branch, "skipping checked-out branch");
            report.skipped.push(branch);
            continue;
        }
        vcs.delete_branch(&branch).await?;
        report.deleted.push(branch);
    }
    Ok(report)
}
