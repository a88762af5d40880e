//! Configuration: env files loaded into the process environment, then read into [`Settings`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use glyphgraph_constant::{app, defaults};

/// Nearest `rel` in `start` or one of its ancestors.
pub fn find_upwards(start: &Path, rel: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(rel))
        .find(|candidate| candidate.is_file())
}

/// Load env files. Earlier files win; variables already set are never overwritten.
/// Order: 1) .glyphgraph/env (nearest project)  2) ~/.glyphgraph/env  3) .env (nearest project)
pub fn load_env_files() -> Vec<PathBuf> {
    let project_env = Path::new(app::DATA_DIR).join(app::ENV_FILE);
    let cwd = std::env::current_dir().ok();

    let candidates = [
        cwd.as_deref().and_then(|dir| find_upwards(dir, &project_env)),
        dirs::home_dir()
            .map(|home| home.join(&project_env))
            .filter(|p| p.is_file()),
        cwd.as_deref()
            .and_then(|dir| find_upwards(dir, Path::new(".env"))),
    ];

    candidates
        .into_iter()
        .flatten()
        .filter(|path| dotenvy::from_path(path).is_ok())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub branch_prefix: String,
    pub commits_per_day: u32,
    pub marker_file: String,
    pub git_timeout: Duration,
    pub log_filter: Option<String>,
    /// Problems found while reading settings; reported once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            branch_prefix: defaults::BRANCH_PREFIX.to_string(),
            commits_per_day: defaults::COMMITS_PER_DAY,
            marker_file: defaults::MARKER_FILE.to_string(),
            git_timeout: Duration::from_secs(defaults::GIT_TIMEOUT_SECS),
            log_filter: None,
            warnings: Vec::new(),
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(prefix) = get(defaults::ENV_BRANCH_PREFIX) {
            settings.branch_prefix = prefix;
        }
        if let Some(file) = get(defaults::ENV_MARKER_FILE) {
            settings.marker_file = file;
        }
        if let Some(raw) = get(defaults::ENV_COMMITS_PER_DAY) {
            match raw.parse::<u32>() {
                Ok(n) if n >= 1 => settings.commits_per_day = n,
                _ => settings.warnings.push(format!(
                    "Ignoring {}={raw:?}: expected a positive integer",
                    defaults::ENV_COMMITS_PER_DAY
                )),
            }
        }
        if let Some(raw) = get(defaults::ENV_GIT_TIMEOUT_SECS) {
            match raw.parse::<u64>() {
                Ok(secs) if secs >= 1 => settings.git_timeout = Duration::from_secs(secs),
                _ => settings.warnings.push(format!(
                    "Ignoring {}={raw:?}: expected a number of seconds",
                    defaults::ENV_GIT_TIMEOUT_SECS
                )),
            }
        }
        settings.log_filter = get(defaults::ENV_LOG).or_else(|| get("RUST_LOG"));
        settings
    }

    /// Filter for the logging layer; `--verbose` wins over configuration.
    pub fn log_filter_for(&self, verbose: bool) -> String {
        if verbose {
            "debug".to_string()
        } else {
            self.log_filter
                .clone()
                .unwrap_or_else(|| defaults::LOG_FILTER.to_string())
        }
    }
}
