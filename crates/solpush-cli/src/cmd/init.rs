use crate::output::print_json;
use anyhow::Context;
use clap::Args;
use solpush_core::{
    config::{AuthorConfig, Config, RepositoryConfig},
    paths,
};
use std::path::Path;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Author display name
    #[arg(long)]
    pub author_name: Option<String>,

    /// GitHub username or profile URL
    #[arg(long)]
    pub author_github: Option<String>,

    /// GitHub owner of this repository
    #[arg(long)]
    pub owner: Option<String>,

    /// GitHub repository name
    #[arg(long)]
    pub repo: Option<String>,

    /// Branch that solutions are synced from and pushed to
    #[arg(long, default_value = "main")]
    pub default_branch: String,

    /// Overwrite an existing .solpush.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(root: &Path, args: InitArgs, json: bool) -> anyhow::Result<()> {
    let config = Config {
        author: AuthorConfig {
            name: args.author_name,
            github: args.author_github,
        },
        repository: RepositoryConfig {
            default_branch: args.default_branch,
            owner: args.owner,
            name: args.repo,
        },
        ..Config::default()
    };

    let written = if args.force {
        config.save(root).context("failed to write config")?;
        true
    } else {
        config
            .save_if_missing(root)
            .context("failed to write config")?
    };

    let path = paths::config_path(root);
    if json {
        print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "written": written,
        }))?;
    } else if written {
        println!("Wrote {}", path.display());
    } else {
        println!("{} already exists; pass --force to overwrite", path.display());
    }

    Ok(())
}
