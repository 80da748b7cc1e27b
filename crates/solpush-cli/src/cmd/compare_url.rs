use crate::cmd::{load_config, RepoArgs};
use crate::output::print_json;
use anyhow::Context;
use solpush_core::{github::compare_url, ports::RepoProbe, probe::ConfigProbe};
use std::path::Path;

pub fn run(root: &Path, branch: &str, repo: RepoArgs, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let probe = ConfigProbe::from_config(&config).with_overrides(repo.base, repo.owner, repo.repo);

    let base = probe.default_branch(root);
    let info = probe.repo_info(root).context("cannot build compare URL")?;
    let url = compare_url(&info.owner, &info.repo, &base, branch);

    if json {
        print_json(&serde_json::json!({
            "owner": info.owner,
            "repo": info.repo,
            "base": base,
            "branch": branch,
            "url": url,
        }))?;
    } else {
        println!("{url}");
    }

    Ok(())
}
