//! Defaults shared by the CLI and the git layer. Overridable through `GLYPHGRAPH_*` env vars.

/// Generated branches are named `<prefix><word>`; `clean` sweeps this prefix.
pub const BRANCH_PREFIX: &str = "word-";
/// File touched by every generated commit.
pub const MARKER_FILE: &str = "word_pattern.txt";
pub const COMMITS_PER_DAY: u32 = 1;
pub const GIT_TIMEOUT_SECS: u64 = 60;
/// Log filter used when neither `GLYPHGRAPH_LOG` nor `RUST_LOG` is set.
pub const LOG_FILTER: &str = "warn";

pub const ENV_BRANCH_PREFIX: &str = "GLYPHGRAPH_BRANCH_PREFIX";
pub const ENV_COMMITS_PER_DAY: &str = "GLYPHGRAPH_COMMITS_PER_DAY";
pub const ENV_MARKER_FILE: &str = "GLYPHGRAPH_MARKER_FILE";
pub const ENV_GIT_TIMEOUT_SECS: &str = "GLYPHGRAPH_GIT_TIMEOUT_SECS";
pub const ENV_LOG: &str = "GLYPHGRAPH_LOG";
