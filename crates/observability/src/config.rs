//! Configuration for logging

use serde::{Deserialize, Serialize};

const DEFAULT_FILTER: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Name recorded on the startup event
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable the stderr fmt layer
    #[serde(default = "default_true")]
    pub enable_console: bool,

    /// Filter directive (e.g. "info", "glyphgraph_git=debug").
    /// Falls back to "warn" when unset.
    pub log_level: Option<String>,

    /// Colorize output
    #[serde(default = "default_true")]
    pub ansi: bool,

    /// Print the event target (module path)
    #[serde(default)]
    pub with_target: bool,
}

fn default_service_name() -> String {
    "glyphgraph".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            enable_console: true,
            log_level: None,
            ansi: true,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a new configuration with service name
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enable: bool) -> Self {
        self.enable_console = enable;
        self
    }

    /// Set log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    pub fn with_target(mut self, with_target: bool) -> Self {
        self.with_target = with_target;
        self
    }

    /// Filter directive that will actually be applied.
    pub fn effective_filter(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_FILTER)
    }
}
