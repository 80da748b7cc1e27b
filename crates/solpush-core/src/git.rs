//! Typed model of every git invocation the sequencer issues.

use std::fmt;

pub const GIT_BIN: &str = "git";
pub const REMOTE: &str = "origin";

pub fn commit_message(problem_name: &str) -> String {
    format!("Add solution and documentation for {problem_name}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCommand {
    Checkout { branch: String },
    Pull { branch: String },
    AddAll,
    Commit { message: String },
    Push { branch: String },
    PushSetUpstream { branch: String },
    DeleteLocalBranch { branch: String },
    DeleteRemoteBranch { branch: String },
    CheckoutNewBranch { branch: String },
}

impl GitCommand {
    /// Arguments passed to the git binary. The commit message travels as a
    /// single argument so no shell quoting is involved.
    pub fn args(&self) -> Vec<String> {
        match self {
            GitCommand::Checkout { branch } => owned(&["checkout", branch.as_str()]),
            GitCommand::Pull { branch } => owned(&["pull", REMOTE, branch.as_str()]),
            GitCommand::AddAll => owned(&["add", "."]),
            GitCommand::Commit { message } => owned(&["commit", "-m", message.as_str()]),
            GitCommand::Push { branch } => owned(&["push", REMOTE, branch.as_str()]),
            GitCommand::PushSetUpstream { branch } => {
                owned(&["push", "-u", REMOTE, branch.as_str()])
            }
            GitCommand::DeleteLocalBranch { branch } => owned(&["branch", "-D", branch.as_str()]),
            GitCommand::DeleteRemoteBranch { branch } => {
                owned(&["push", REMOTE, "--delete", branch.as_str()])
            }
            GitCommand::CheckoutNewBranch { branch } => {
                owned(&["checkout", "-b", branch.as_str()])
            }
        }
    }

    pub fn is_branch_deletion(&self) -> bool {
        matches!(
            self,
            GitCommand::DeleteLocalBranch { .. } | GitCommand::DeleteRemoteBranch { .. }
        )
    }
}

fn owned(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

impl fmt::Display for GitCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GitCommand::Commit { message } => write!(f, "{GIT_BIN} commit -m \"{message}\""),
            other => write!(f, "{GIT_BIN} {}", other.args().join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_message_format() {
        assert_eq!(
            commit_message("Two Sum"),
            "Add solution and documentation for Two Sum"
        );
    }

    #[test]
    fn display_matches_cli_form() {
        let cases = [
            (GitCommand::Checkout { branch: "main".into() }, "git checkout main"),
            (GitCommand::Pull { branch: "main".into() }, "git pull origin main"),
            (GitCommand::AddAll, "git add ."),
            (GitCommand::Push { branch: "main".into() }, "git push origin main"),
            (
                GitCommand::PushSetUpstream { branch: "feature/x".into() },
                "git push -u origin feature/x",
            ),
            (
                GitCommand::DeleteLocalBranch { branch: "feature/x".into() },
                "git branch -D feature/x",
            ),
            (
                GitCommand::DeleteRemoteBranch { branch: "feature/x".into() },
                "git push origin --delete feature/x",
            ),
            (
                GitCommand::CheckoutNewBranch { branch: "feature/x".into() },
                "git checkout -b feature/x",
            ),
        ];
        for (cmd, expected) in cases {
            assert_eq!(cmd.to_string(), expected);
        }
    }

    #[test]
    fn commit_message_is_one_argument() {
        let cmd = GitCommand::Commit {
            message: commit_message("Two Sum"),
        };
        assert_eq!(
            cmd.args(),
            vec!["commit", "-m", "Add solution and documentation for Two Sum"]
        );
        assert_eq!(
            cmd.to_string(),
            "git commit -m \"Add solution and documentation for Two Sum\""
        );
    }

    #[test]
    fn only_deletions_are_flagged() {
        assert!(GitCommand::DeleteLocalBranch { branch: "x".into() }.is_branch_deletion());
        assert!(GitCommand::DeleteRemoteBranch { branch: "x".into() }.is_branch_deletion());
        assert!(!GitCommand::AddAll.is_branch_deletion());
        assert!(!GitCommand::CheckoutNewBranch { branch: "x".into() }.is_branch_deletion());
    }
}
