//! Global subscriber installation.

use once_cell::sync::OnceCell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LogConfig;
use crate::error::ObservabilityError;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global tracing subscriber.
///
/// Later calls are no-ops, so tests and binaries can both call it.
pub fn init(config: LogConfig) -> Result<(), ObservabilityError> {
    INITIALIZED.get_or_try_init(|| install(&config))?;
    Ok(())
}

fn install(config: &LogConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(config)?;

    // Build layers first, then compose once
    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(config.ansi)
            .with_target(config.with_target)
    });

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        filter = %config.effective_filter(),
        "Logging initialized"
    );
    Ok(())
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter, ObservabilityError> {
    EnvFilter::try_new(config.effective_filter())
        .map_err(|e| ObservabilityError::Config(e.to_string()))
}

pub fn is_initialized() -> bool {
    INITIALIZED.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let config = LogConfig::new("test").with_console(false);
        init(config.clone()).unwrap();
        assert!(is_initialized());
        init(config).unwrap();
    }

    #[test]
    fn filter_accepts_directives() {
        let config = LogConfig::new("test").with_log_level("info,glyphgraph_git=debug");
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn bad_filter_is_a_config_error() {
        let config = LogConfig::new("test").with_log_level("glyphgraph=notalevel");
        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err, ObservabilityError::Config(_)));
    }
}
