pub mod compare_url;
pub mod config;
pub mod describe;
pub mod init;
pub mod pr;
pub mod push;

use anyhow::Context;
use clap::Args;
use solpush_core::{
    adapters::{BrowserOpener, EchoOpener},
    clipboard::{EchoClipboard, SystemClipboard},
    config::Config,
    exec::{DryRunRunner, EchoTarget, SystemRunner},
    ports::{Clipboard, CommandRunner, Opener, RepoProbe},
    sequencer::Ports,
};
use std::path::Path;

/// Marker error: the failure was already shown to the user.
#[derive(Debug, thiserror::Error)]
#[error("sequence failed")]
pub struct Reported;

// ---------------------------------------------------------------------------
// Shared arguments
// ---------------------------------------------------------------------------

#[derive(Args, Debug, Clone)]
pub struct ProblemArgs {
    /// Problem name, e.g. "Two Sum"
    pub problem: String,

    /// Measured execution time (rendered as N/A when omitted)
    #[arg(long = "time", default_value = "")]
    pub execution_time: String,

    /// Problem category, e.g. Array
    #[arg(long = "type", value_name = "TYPE", default_value = "")]
    pub problem_type: String,

    /// Problem difficulty, e.g. Easy
    #[arg(long, default_value = "")]
    pub difficulty: String,

    /// Author display name (default: author.name from config)
    #[arg(long)]
    pub author_name: Option<String>,

    /// GitHub username or profile URL (default: author.github from config)
    #[arg(long)]
    pub author_github: Option<String>,

    /// Solution file listed in the description
    #[arg(long, default_value = "")]
    pub solution_file: String,

    /// Documentation file listed in the description (default: readme_file from config)
    #[arg(long)]
    pub readme_file: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct RepoArgs {
    /// Base branch (default: repository.default_branch)
    #[arg(long)]
    pub base: Option<String>,

    /// GitHub owner (default: repository.owner)
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub repository name (default: repository.name)
    #[arg(long)]
    pub repo: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub fn load_config(root: &Path) -> anyhow::Result<Config> {
    Config::load_with_user_defaults(root).context("failed to load config")
}

pub struct Author {
    pub name: String,
    pub github: String,
}

/// Flags first, then config. Missing values render as empty strings.
pub fn resolve_author(args: &ProblemArgs, config: &Config) -> Author {
    let name = args
        .author_name
        .clone()
        .or_else(|| config.author.name.clone())
        .unwrap_or_default();
    let github = args
        .author_github
        .clone()
        .or_else(|| config.author.github.clone())
        .unwrap_or_default();
    if name.is_empty() {
        tracing::warn!("author name not set; pass --author-name or set author.name");
    }
    if github.is_empty() {
        tracing::warn!("author GitHub not set; pass --author-github or set author.github");
    }
    Author { name, github }
}

/// In JSON mode echoed output goes to stderr so stdout stays parseable.
pub fn echo_target(json: bool) -> EchoTarget {
    if json {
        EchoTarget::Stderr
    } else {
        EchoTarget::Stdout
    }
}

/// Side-effecting adapters: real ones, or echoing stand-ins for `--dry-run`.
pub struct Adapters {
    runner: Box<dyn CommandRunner>,
    clipboard: Box<dyn Clipboard>,
    opener: Box<dyn Opener>,
}

impl Adapters {
    pub fn new(dry_run: bool, json: bool) -> Self {
        if dry_run {
            let target = echo_target(json);
            Self {
                runner: Box::new(DryRunRunner::new(target)),
                clipboard: Box::new(EchoClipboard::new(target)),
                opener: Box::new(EchoOpener::new(target)),
            }
        } else {
            Self {
                runner: Box::new(SystemRunner::new()),
                clipboard: Box::new(SystemClipboard),
                opener: Box::new(BrowserOpener),
            }
        }
    }

    pub fn ports<'a>(&'a self, probe: &'a dyn RepoProbe) -> Ports<'a> {
        Ports {
            runner: self.runner.as_ref(),
            clipboard: self.clipboard.as_ref(),
            opener: self.opener.as_ref(),
            probe,
        }
    }
}
