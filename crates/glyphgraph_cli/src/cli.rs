//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Paint words onto a contribution calendar with backdated commits
#[derive(Parser)]
#[command(name = "glyphgraph", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,

    /// Repository to operate on
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Args, Debug, Clone)]
pub struct PatternArgs {
    /// Word to draw (A-Z and spaces; anything else renders blank)
    pub word: String,

    /// Date of the top-left cell (YYYY-MM-DD, must be a Sunday).
    /// Defaults to the Sunday at least a year ago.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub start_date: Option<String>,

    /// Move a non-Sunday start date back to the preceding Sunday instead of failing
    #[arg(long)]
    pub snap_to_sunday: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a word as commits on a new branch
    Draw {
        #[command(flatten)]
        pattern: PatternArgs,
        /// Branch name (default: <prefix><word>)
        #[arg(short, long)]
        branch: Option<String>,
        /// Commits per lit day (default: GLYPHGRAPH_COMMITS_PER_DAY or 1)
        #[arg(short = 'n', long)]
        commits_per_day: Option<u32>,
        /// Show the preview only, don't create commits
        #[arg(long)]
        preview: bool,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Show how a word will look, without touching the repository
    Preview {
        #[command(flatten)]
        pattern: PatternArgs,
        /// Commits per lit day, for the commit count
        #[arg(short = 'n', long)]
        commits_per_day: Option<u32>,
    },
    /// Delete branches created by earlier draws
    Clean {
        /// Branch prefix to sweep (default: GLYPHGRAPH_BRANCH_PREFIX or "word-")
        #[arg(short, long)]
        prefix: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
