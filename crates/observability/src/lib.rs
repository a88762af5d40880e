//! glyphgraph observability - logging setup and span helpers
//!
//! Wraps `tracing-subscriber` so every glyphgraph binary and test harness
//! configures logging the same way: an `EnvFilter` plus a `fmt` layer that
//! writes to stderr, keeping stdout free for command output.
//!
//! # Quick Start
//!
//! ```no_run
//! use glyphgraph_observability::{LogConfig, init};
//!
//! let config = LogConfig::new("glyphgraph").with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("started");
//! # Ok::<(), glyphgraph_observability::ObservabilityError>(())
//! ```
//!
//! Callers pick the filter directive; the CLI reads it from `GLYPHGRAPH_LOG`
//! or `RUST_LOG` before calling [`init`].

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::LogConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, is_initialized};
pub use tracing::{record_duration, record_error};
