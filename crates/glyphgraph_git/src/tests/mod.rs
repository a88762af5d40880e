mod repo;

use std::collections::BTreeSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::error::{GitError, Result};
use crate::vcs::{BranchSwitch, Vcs};

pub(crate) fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Runtime::new().unwrap()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    EnsureBranch(String),
    Commit(NaiveDateTime, String),
    Delete(String),
}

/// In-memory [`Vcs`] that records every mutating call.
#[derive(Default)]
pub(crate) struct RecordingVcs {
    pub calls: Mutex<Vec<Call>>,
    pub branches: Mutex<BTreeSet<String>>,
    pub current: Mutex<Option<String>>,
    /// 0-based commit index that fails.
    pub fail_commit: Option<usize>,
    pub fail_delete: Option<String>,
}

impl RecordingVcs {
    pub fn with_branches(names: &[&str], current: Option<&str>) -> Self {
        let vcs = Self::default();
        vcs.branches
            .lock()
            .unwrap()
            .extend(names.iter().map(|n| n.to_string()));
        *vcs.current.lock().unwrap() = current.map(str::to_string);
        vcs
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn commit_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|c| matches!(c, Call::Commit(..)))
            .count()
    }

    fn failure(command: &str) -> GitError {
        GitError::CommandFailed {
            command: command.to_string(),
            code: 128,
            stderr: "fatal: simulated".to_string(),
        }
    }
}

#[async_trait]
impl Vcs for RecordingVcs {
    async fn current_branch(&self) -> Result<Option<String>> {
        Ok(self.current.lock().unwrap().clone())
    }

    async fn ensure_branch(&self, name: &str) -> Result<BranchSwitch> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::EnsureBranch(name.to_string()));
        *self.current.lock().unwrap() = Some(name.to_string());
        if self.branches.lock().unwrap().insert(name.to_string()) {
            Ok(BranchSwitch::Created)
        } else {
            Ok(BranchSwitch::Existing)
        }
    }

    async fn commit_at(&self, when: NaiveDateTime, message: &str) -> Result<()> {
        if self.fail_commit == Some(self.commit_count()) {
            return Err(Self::failure("git commit"));
        }
        self.calls
            .lock()
            .unwrap()
            .push(Call::Commit(when, message.to_string()));
        Ok(())
    }

    async fn list_branches(&self, prefix: &str) -> Result<Vec<String>> {
        Ok(self
            .branches
            .lock()
            .unwrap()
            .iter()
            .filter(|b| b.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn delete_branch(&self, name: &str) -> Result<()> {
        if self.fail_delete.as_deref() == Some(name) {
            return Err(Self::failure("git branch -D"));
        }
        self.calls.lock().unwrap().push(Call::Delete(name.to_string()));
        self.branches.lock().unwrap().remove(name);
        Ok(())
    }
}
