mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, init::InitArgs, pr::PrArgs, ProblemArgs, RepoArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "solpush",
    about = "Commit a solved problem, push it, and open a pre-filled pull request",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: auto-detect from .solpush.yaml or .git/)
    #[arg(long, global = true, env = "SOLPUSH_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a .solpush.yaml for this repository
    Init(InitArgs),

    /// Commit and push straight to the default branch
    Push {
        /// Problem name used in the commit message
        problem: String,

        /// Branch to sync and push (default: repository.default_branch)
        #[arg(long)]
        base: Option<String>,

        /// Print the git commands instead of running them
        #[arg(long)]
        dry_run: bool,
    },

    /// Recreate a feature branch, push it, copy the PR description and open the compare page
    Pr(PrArgs),

    /// Render the pull-request description to stdout
    Describe {
        #[command(flatten)]
        problem: ProblemArgs,
    },

    /// Print the GitHub compare URL for a branch
    CompareUrl {
        /// Feature branch
        #[arg(long)]
        branch: String,

        #[command(flatten)]
        repo: RepoArgs,
    },

    /// Inspect and validate configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init(args) => cmd::init::run(&root, args, cli.json),
        Commands::Push {
            problem,
            base,
            dry_run,
        } => cmd::push::run(&root, &problem, base, dry_run, cli.json),
        Commands::Pr(args) => cmd::pr::run(&root, args, cli.json),
        Commands::Describe { problem } => cmd::describe::run(&root, problem, cli.json),
        Commands::CompareUrl { branch, repo } => {
            cmd::compare_url::run(&root, &branch, repo, cli.json)
        }
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Sequence failures were already shown through the notifier
        if e.downcast_ref::<cmd::Reported>().is_none() {
            eprintln!("error: {e:#}");
        }
        std::process::exit(1);
    }
}
