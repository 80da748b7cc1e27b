use crate::cmd::{load_config, resolve_author, Adapters, ProblemArgs, RepoArgs, Reported};
use crate::output::print_json;
use clap::Args;
use solpush_core::{
    adapters::StderrNotifier,
    prompt::{ask_branch_name, LinePrompt},
    probe::ConfigProbe,
    sequencer::{report, Sequencer, SequencerOptions},
    types::{PrOutcome, PrRequest},
    SolpushError,
};
use std::path::Path;

#[derive(Args, Debug)]
pub struct PrArgs {
    #[command(flatten)]
    pub problem: ProblemArgs,

    /// Feature branch to (re)create; prompted for on stdin when omitted
    #[arg(long)]
    pub branch: Option<String>,

    #[command(flatten)]
    pub repo: RepoArgs,

    /// Don't open the compare page in a browser
    #[arg(long)]
    pub no_open: bool,

    /// Don't copy the description to the clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// Print the git commands, description and URL instead of acting on them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn run(root: &Path, args: PrArgs, json: bool) -> anyhow::Result<()> {
    let mut config = load_config(root)?;
    if let Some(readme) = &args.problem.readme_file {
        config.readme_file = readme.clone();
    }
    if args.no_clipboard {
        config.copy_to_clipboard = false;
    }
    if args.no_open {
        config.open_browser = false;
    }

    let branch_name = match args.branch.as_deref() {
        None => ask_branch_name(&mut LinePrompt::stdio())?,
        Some(b) if b.trim().is_empty() => {
            return Err(SolpushError::InputRequired("Branch name".into()).into())
        }
        Some(b) => b.trim().to_string(),
    };

    let author = resolve_author(&args.problem, &config);
    let request = PrRequest {
        repo_path: root.to_path_buf(),
        problem_name: args.problem.problem,
        branch_name,
        execution_time: args.problem.execution_time,
        problem_type: args.problem.problem_type,
        difficulty: args.problem.difficulty,
        author_name: author.name,
        author_github: author.github,
        solution_file_name: args.problem.solution_file,
    };

    let probe = ConfigProbe::from_config(&config).with_overrides(
        args.repo.base,
        args.repo.owner,
        args.repo.repo,
    );
    let adapters = Adapters::new(args.dry_run, json);
    let sequencer = Sequencer::new(adapters.ports(&probe), SequencerOptions::from(&config));

    let Some(outcome) = report(&StderrNotifier, sequencer.push_with_pr(&request)) else {
        return Err(Reported.into());
    };

    if json {
        print_json(&outcome)?;
    } else if !args.dry_run {
        print_summary(&outcome, config.copy_to_clipboard);
    }

    Ok(())
}

fn print_summary(outcome: &PrOutcome, clipboard_enabled: bool) {
    println!("Pushed '{}' (from {})", outcome.branch, outcome.base_branch);
    if outcome.copied {
        println!("PR description copied to clipboard");
    } else if clipboard_enabled {
        println!("PR description not copied; run 'solpush describe' to print it");
    }
    match &outcome.compare_url {
        Some(url) if outcome.opened => println!("Opened {url}"),
        Some(url) => println!("Open {url} to create the pull request"),
        None => println!("Set repository.owner and repository.name to get a compare URL"),
    }
}
