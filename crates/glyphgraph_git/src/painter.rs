//! Replays a commit schedule onto a branch.

use chrono::NaiveDateTime;
use glyphgraph_observability::{paint_span, record_error};
use serde::Serialize;
use tracing::Instrument;

use crate::error::Result;
use crate::vcs::{BranchSwitch, Vcs};

/// `<prefix><word>`, lower-cased, spaces turned into dashes.
pub fn branch_name(prefix: &str, word: &str) -> String {
    format!("{prefix}{}", word.trim().to_lowercase().replace(' ', "-"))
}

/// Everything needed to paint one word.
#[derive(Debug, Clone)]
pub struct PaintPlan {
    word: String,
    branch: String,
    timestamps: Vec<NaiveDateTime>,
}

impl PaintPlan {
    pub fn new(word: &str, branch: impl Into<String>, timestamps: Vec<NaiveDateTime>) -> Self {
        Self {
            word: word.to_uppercase(),
            branch: branch.into(),
            timestamps,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn branch(&self) -> &str {
        &self.branch
    }

    pub fn timestamps(&self) -> &[NaiveDateTime] {
        &self.timestamps
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Message for the 0-based `index`-th commit.
    pub fn message(&self, index: usize) -> String {
        format!("Draw '{}' - commit {}/{}", self.word, index + 1, self.len())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaintReport {
    pub branch: String,
    pub switch: BranchSwitch,
    pub commits: usize,
}

pub struct Painter<'a, V: Vcs + ?Sized> {
    vcs: &'a V,
}

impl<'a, V: Vcs + ?Sized> Painter<'a, V> {
    pub fn new(vcs: &'a V) -> Self {
        Self { vcs }
    }

    /// Switch to the plan's branch and commit once per timestamp, in order.
    ///
    /// `on_progress(done, total)` fires after every commit. The first failure
    /// aborts the run; later commits are not attempted.
    pub async fn paint<F>(&self, plan: &PaintPlan, on_progress: F) -> Result<PaintReport>
    where
        F: FnMut(usize, usize) + Send,
    {
        let span = paint_span!(plan.branch(), plan.len());
        self.paint_inner(plan, on_progress).instrument(span).await
    }

    async fn paint_inner<F>(&self, plan: &PaintPlan, mut on_progress: F) -> Result<PaintReport>
    where
        F: FnMut(usize, usize) + Send,
    {
        let switch = self.vcs.ensure_branch(plan.branch()).await.inspect_err(|e| {
            record_error(e);
        })?;

        let total = plan.len();
        for (index, when) in plan.timestamps().iter().enumerate() {
            let message = plan.message(index);
            if let Err(e) = self.vcs.commit_at(*when, &message).await {
                tracing::error!(commit = index + 1, total, at = %when, "commit failed");
                record_error(&e);
                return Err(e);
            }
            on_progress(index + 1, total);
        }

        tracing::info!(branch = plan.branch(), commits = total, "painted");
        Ok(PaintReport {
            branch: plan.branch().to_string(),
            switch,
            commits: total,
        })
    }
}
