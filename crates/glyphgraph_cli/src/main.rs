//! CLI entry point for glyphgraph.

mod cli;
mod commands;
mod config;
mod output;
mod prompt;

use clap::Parser;
use glyphgraph_constant::app;
use glyphgraph_observability::LogConfig;

use crate::cli::Cli;
use crate::config::Settings;

#[tokio::main]
async fn main() {
    let loaded = config::load_env_files();
    let cli = Cli::parse();
    output::init(cli.output);

    let settings = Settings::from_env();
    let log_config = LogConfig::new(app::NAME)
        .with_log_level(settings.log_filter_for(cli.verbose))
        .with_ansi(console::colors_enabled_stderr());
    if let Err(e) = glyphgraph_observability::init(log_config) {
        output::warning(&e.to_string());
    }
    for path in &loaded {
        tracing::debug!(path = %path.display(), "loaded env file");
    }
    for warning in &settings.warnings {
        output::warning(warning);
    }

    if let Err(e) = commands::handle(cli, settings).await {
        tracing::debug!(error = ?e, "command failed");
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
