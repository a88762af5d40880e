//! `glyphgraph clean`: remove branches left by earlier draws.

use anyhow::{Context as _, Result};
use glyphgraph_git::{GitError, GitRepo, Vcs, sweep_branches};

use super::Context;
use crate::output;
use crate::prompt;

pub async fn handle(ctx: &Context, prefix: Option<String>, assume_yes: bool) -> Result<()> {
    let prefix = prefix.unwrap_or_else(|| ctx.settings.branch_prefix.clone());
    if prefix.is_empty() {
        return Err(GitError::EmptyPrefix.into());
    }
    let repo = GitRepo::open(&ctx.repo)
        .await
        .with_context(|| format!("opening repository at {}", ctx.repo.display()))?
        .with_timeout(ctx.settings.git_timeout);

    let branches = repo.list_branches(&prefix).await?;
    if branches.is_empty() {
        output::dim(&format!("No branches matching '{prefix}*'."));
        return Ok(());
    }

    let current = repo.current_branch().await?;
    let rows: Vec<(&str, &str)> = branches
        .iter()
        .map(|b| {
            let status = if current.as_deref() == Some(b.as_str()) {
                "checked out (kept)"
            } else {
                "delete"
            };
            (b.as_str(), status)
        })
        .collect();

    output::header(&format!("Branches matching '{prefix}*'"));
    let mut table = output::table();
    output::table_header(&mut table, "Branch", "Action");
    for (name, status) in &rows {
        output::table_row(&mut table, name, status);
    }
    output::table_print(&table, &rows);

    if !assume_yes && !prompt::confirm("Delete these branches?")? {
        output::warning("Cancelled.");
        return Ok(());
    }

    let report = sweep_branches(&repo, &prefix).await?;
    output::data("swept", &report);
    for branch in &report.skipped {
        output::warning(&format!("Kept '{branch}': it is checked out."));
    }
    output::success(&format!("Deleted {} branches.", report.deleted.len()));
    Ok(())
}
