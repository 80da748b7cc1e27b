//! Ordered git sequences for the direct-push and pull-request flows.
//!
//! Each command runs to completion before the next one starts. The first
//! failing command aborts the rest of the sequence and nothing already
//! applied is rolled back. The two branch deletions that precede a
//! pull-request branch are the only steps allowed to fail.

use std::path::Path;

use crate::description::{generate_pr_description, DescriptionInput};
use crate::error::{Result, SolpushError};
use crate::git::{commit_message, GitCommand};
use crate::github::{compare_url, normalize_author_github};
use crate::paths;
use crate::ports::{Clipboard, CommandRunner, ExecFailure, Notifier, Opener, RepoProbe};
use crate::types::{DeleteOutcome, PrOutcome, PrRequest, PushOutcome, PushRequest};

pub const FALLBACK_FAILURE: &str = "Git operation failed";

/// git exits with this status when the branch to delete does not exist,
/// locally or on the remote. Network and repository errors exit with 128.
const BRANCH_ABSENT_STATUS: i32 = 1;

pub struct Ports<'a> {
    pub runner: &'a dyn CommandRunner,
    pub clipboard: &'a dyn Clipboard,
    pub opener: &'a dyn Opener,
    pub probe: &'a dyn RepoProbe,
}

#[derive(Debug, Clone)]
pub struct SequencerOptions {
    pub readme_file: String,
    pub strict_branch_cleanup: bool,
    pub copy_to_clipboard: bool,
    pub open_browser: bool,
}

impl Default for SequencerOptions {
    fn default() -> Self {
        Self {
            readme_file: paths::DEFAULT_README.to_string(),
            strict_branch_cleanup: false,
            copy_to_clipboard: true,
            open_browser: true,
        }
    }
}

impl From<&crate::config::Config> for SequencerOptions {
    fn from(config: &crate::config::Config) -> Self {
        Self {
            readme_file: config.readme_file.clone(),
            strict_branch_cleanup: config.strict_branch_cleanup,
            copy_to_clipboard: config.copy_to_clipboard,
            open_browser: config.open_browser,
        }
    }
}

pub struct Sequencer<'a> {
    ports: Ports<'a>,
    options: SequencerOptions,
}

impl<'a> Sequencer<'a> {
    pub fn new(ports: Ports<'a>, options: SequencerOptions) -> Self {
        Self { ports, options }
    }

    /// checkout → pull → add → commit → push, all on the default branch.
    pub fn push_direct(&self, request: &PushRequest) -> Result<PushOutcome> {
        let repo = request.repo_path.as_path();
        let branch = self.ports.probe.default_branch(repo);
        let message = commit_message(&request.problem_name);

        self.exec(repo, GitCommand::Checkout { branch: branch.clone() })?;
        self.exec(repo, GitCommand::Pull { branch: branch.clone() })?;
        self.exec(repo, GitCommand::AddAll)?;
        self.exec(repo, GitCommand::Commit { message: message.clone() })?;
        self.exec(repo, GitCommand::Push { branch: branch.clone() })?;

        tracing::info!("pushed '{}' to {branch}", request.problem_name);
        Ok(PushOutcome {
            branch,
            commit_message: message,
        })
    }

    /// Sync the base branch, recreate the feature branch from it, commit and
    /// push, then hand the rendered description to the clipboard and open
    /// the compare page.
    pub fn push_with_pr(&self, request: &PrRequest) -> Result<PrOutcome> {
        let repo = request.repo_path.as_path();
        let base = self.ports.probe.default_branch(repo);
        let branch = request.branch_name.clone();
        let message = commit_message(&request.problem_name);

        self.exec(repo, GitCommand::Checkout { branch: base.clone() })?;
        self.exec(repo, GitCommand::Pull { branch: base.clone() })?;

        let local_delete = self.delete(
            repo,
            GitCommand::DeleteLocalBranch {
                branch: branch.clone(),
            },
        )?;
        let remote_delete = self.delete(
            repo,
            GitCommand::DeleteRemoteBranch {
                branch: branch.clone(),
            },
        )?;

        self.exec(
            repo,
            GitCommand::CheckoutNewBranch {
                branch: branch.clone(),
            },
        )?;
        self.exec(repo, GitCommand::AddAll)?;
        self.exec(repo, GitCommand::Commit { message: message.clone() })?;
        self.exec(
            repo,
            GitCommand::PushSetUpstream {
                branch: branch.clone(),
            },
        )?;

        let author_github = normalize_author_github(&request.author_github);
        let description = generate_pr_description(&DescriptionInput {
            problem_name: &request.problem_name,
            execution_time: &request.execution_time,
            problem_type: &request.problem_type,
            difficulty: &request.difficulty,
            author_name: &request.author_name,
            author_github: &author_github,
            solution_file: &request.solution_file_name,
            readme_file: &self.options.readme_file,
        });

        let copied = self.options.copy_to_clipboard
            && match self.ports.clipboard.copy(&description) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("PR description not copied: {e}");
                    false
                }
            };

        let compare = match self.ports.probe.repo_info(repo) {
            Ok(info) => Some(compare_url(&info.owner, &info.repo, &base, &branch)),
            Err(e) => {
                tracing::warn!("skipping compare page: {e}");
                None
            }
        };

        let opened = match (&compare, self.options.open_browser) {
            (Some(url), true) => match self.ports.opener.open(url) {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("{e}");
                    false
                }
            },
            _ => false,
        };

        tracing::info!("pushed '{branch}' for '{}'", request.problem_name);
        Ok(PrOutcome {
            base_branch: base,
            branch,
            commit_message: message,
            local_delete,
            remote_delete,
            author_github,
            description,
            copied,
            compare_url: compare,
            opened,
        })
    }

    fn exec(&self, repo: &Path, command: GitCommand) -> Result<()> {
        tracing::debug!("{command}");
        self.ports
            .runner
            .run(repo, &command)
            .map_err(|failure| match failure {
                ExecFailure::Exit { .. } => SolpushError::CommandFailed {
                    command: command.to_string(),
                },
                ExecFailure::Spawn(reason) => SolpushError::CommandSpawn {
                    command: command.to_string(),
                    reason,
                },
            })
    }

    fn delete(&self, repo: &Path, command: GitCommand) -> Result<DeleteOutcome> {
        tracing::debug!("{command}");
        let outcome = match self.ports.runner.run(repo, &command) {
            Ok(()) => DeleteOutcome::Deleted,
            Err(failure) => classify_deletion(&failure),
        };

        match &outcome {
            DeleteOutcome::Deleted => tracing::debug!("{command}: deleted"),
            DeleteOutcome::NotFound => tracing::debug!("{command}: branch absent"),
            DeleteOutcome::Failed(reason) if self.options.strict_branch_cleanup => {
                return Err(SolpushError::BranchCleanup {
                    command: command.to_string(),
                    reason: reason.clone(),
                });
            }
            DeleteOutcome::Failed(reason) => {
                tracing::warn!("{command} failed ({reason}); continuing")
            }
        }
        Ok(outcome)
    }
}

pub fn classify_deletion(failure: &ExecFailure) -> DeleteOutcome {
    match failure {
        ExecFailure::Exit {
            code: Some(BRANCH_ABSENT_STATUS),
        } => DeleteOutcome::NotFound,
        other => DeleteOutcome::Failed(other.to_string()),
    }
}

/// Surface a failed sequence through `notifier` and convert it to an
/// `Option`.
pub fn report<T>(notifier: &dyn Notifier, result: Result<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            let message = e.to_string();
            if message.trim().is_empty() {
                notifier.error(FALLBACK_FAILURE);
            } else {
                notifier.error(&message);
            }
            None
        }
    }
}
