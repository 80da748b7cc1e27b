use crate::cmd::{load_config, Adapters, Reported};
use crate::output::print_json;
use solpush_core::{
    adapters::StderrNotifier,
    probe::ConfigProbe,
    sequencer::{report, Sequencer, SequencerOptions},
    types::PushRequest,
};
use std::path::Path;

pub fn run(
    root: &Path,
    problem: &str,
    base: Option<String>,
    dry_run: bool,
    json: bool,
) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let probe = ConfigProbe::from_config(&config).with_overrides(base, None, None);
    let adapters = Adapters::new(dry_run, json);
    let sequencer = Sequencer::new(adapters.ports(&probe), SequencerOptions::from(&config));

    let request = PushRequest {
        repo_path: root.to_path_buf(),
        problem_name: problem.to_string(),
    };

    let Some(outcome) = report(&StderrNotifier, sequencer.push_direct(&request)) else {
        return Err(Reported.into());
    };

    if json {
        print_json(&serde_json::json!({
            "problem_name": problem,
            "branch": outcome.branch,
            "commit_message": outcome.commit_message,
            "dry_run": dry_run,
        }))?;
    } else if !dry_run {
        println!("Pushed '{problem}' to {}", outcome.branch);
    }

    Ok(())
}
