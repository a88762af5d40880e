//! Command dispatch.

pub mod clean;
pub mod draw;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{Cli, Command};
use crate::config::Settings;

/// State shared by every command.
pub struct Context {
    pub repo: PathBuf,
    pub settings: Settings,
}

pub async fn handle(cli: Cli, settings: Settings) -> Result<()> {
    let ctx = Context {
        repo: cli.repo,
        settings,
    };
    match cli.command {
        Command::Draw {
            pattern,
            branch,
            commits_per_day,
            preview,
            yes,
        } => {
            let options = draw::DrawOptions {
                branch,
                commits_per_day,
                preview_only: preview,
                assume_yes: yes,
            };
            draw::handle(&ctx, pattern, options).await
        }
        Command::Preview {
            pattern,
            commits_per_day,
        } => {
            let options = draw::DrawOptions {
                commits_per_day,
                preview_only: true,
                ..Default::default()
            };
            draw::handle(&ctx, pattern, options).await
        }
        Command::Clean { prefix, yes } => clean::handle(&ctx, prefix, yes).await,
    }
}
