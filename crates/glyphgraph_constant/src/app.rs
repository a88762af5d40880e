//! Application metadata constants

pub const NAME: &str = "glyphgraph";

/// Per-user and per-project config directory name
pub const DATA_DIR: &str = ".glyphgraph";
/// Env file inside DATA_DIR
pub const ENV_FILE: &str = "env";
