use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use glyphgraph_constant::defaults;
use glyphgraph_observability::{git_span, record_duration};
use tokio::process::Command;
use tracing::Instrument;

use crate::error::{GitError, Result};

/// One `git` invocation: arguments plus extra environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
}

impl GitCommand {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            envs: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.push((key.into(), value.into()));
        self
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn envs(&self) -> &[(String, String)] {
        &self.envs
    }

    pub fn subcommand(&self) -> &str {
        self.args.first().map(String::as_str).unwrap_or("")
    }

    /// Shell-like rendering for diagnostics.
    pub fn display(&self) -> String {
        let mut out = String::from("git");
        for arg in &self.args {
            out.push(' ');
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                out.push('\'');
                out.push_str(arg);
                out.push('\'');
            } else {
                out.push_str(arg);
            }
        }
        out
    }
}

#[derive(Debug, Clone)]
pub struct GitOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration_ms: u64,
}

impl GitOutput {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Turn a non-zero exit into [`GitError::CommandFailed`].
    pub fn check(self, command: &GitCommand) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            let stderr = if self.stderr.trim().is_empty() {
                self.stdout.trim().to_string()
            } else {
                self.stderr.trim().to_string()
            };
            Err(GitError::CommandFailed {
                command: command.display(),
                code: self.exit_code,
                stderr,
            })
        }
    }
}

pub struct GitExecutor {
    working_dir: PathBuf,
    timeout: Duration,
}

impl GitExecutor {
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            timeout: Duration::from_secs(defaults::GIT_TIMEOUT_SECS),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `command` and return its output whatever the exit code.
    pub async fn run(&self, command: &GitCommand) -> Result<GitOutput> {
        let span = git_span!(command.subcommand());
        self.run_inner(command).instrument(span).await
    }

    /// Run `command`, failing on a non-zero exit code.
    pub async fn run_checked(&self, command: &GitCommand) -> Result<GitOutput> {
        self.run(command).await?.check(command)
    }

    async fn run_inner(&self, command: &GitCommand) -> Result<GitOutput> {
        let start = Instant::now();

        let mut cmd = Command::new("git");
        cmd.args(command.args())
            .current_dir(&self.working_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .kill_on_drop(true);
        for (key, value) in command.envs() {
            cmd.env(key, value);
        }

        tracing::debug!(command = %command.display(), "running git");

        let output = tokio::time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| GitError::Timeout {
                command: command.display(),
                secs: self.timeout.as_secs(),
            })?
            .map_err(|e| GitError::SpawnFailed(e.to_string()))?;

        let stdout = String::from_utf8(output.stdout)?;
        let stderr = String::from_utf8(output.stderr)?;
        let exit_code = output.status.code().unwrap_or(-1);
        let elapsed = start.elapsed();

        let span = tracing::Span::current();
        span.record("git.exit_code", exit_code);
        record_duration("git.duration_ms", elapsed);

        Ok(GitOutput {
            stdout,
            stderr,
            exit_code,
            duration_ms: elapsed.as_millis() as u64,
        })
    }
}
