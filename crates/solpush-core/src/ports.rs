//! Capability traits the sequencer is driven through. System-backed
//! implementations live in `exec`, `clipboard`, `adapters`, `prompt` and
//! `probe`; tests substitute recording fakes.

use crate::error::Result;
use crate::git::GitCommand;
use crate::types::RepoInfo;
use std::fmt;
use std::path::Path;

/// How a command failed to complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecFailure {
    /// The process ran and exited unsuccessfully. `None` when killed by a signal.
    Exit { code: Option<i32> },
    /// The process could not be started.
    Spawn(String),
}

impl fmt::Display for ExecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecFailure::Exit { code: Some(code) } => write!(f, "exit status {code}"),
            ExecFailure::Exit { code: None } => f.write_str("terminated by signal"),
            ExecFailure::Spawn(reason) => write!(f, "spawn failed: {reason}"),
        }
    }
}

pub trait CommandRunner {
    /// Run `command` in `cwd` to completion.
    fn run(&self, cwd: &Path, command: &GitCommand) -> std::result::Result<(), ExecFailure>;
}

pub trait Clipboard {
    fn copy(&self, text: &str) -> Result<()>;
}

pub trait Opener {
    fn open(&self, url: &str) -> Result<()>;
}

pub trait Notifier {
    fn error(&self, message: &str);
}

pub trait Prompt {
    /// Ask for one line of input. `None` means the user cancelled.
    fn ask(&mut self, message: &str) -> Option<String>;
}

pub trait RepoProbe {
    fn default_branch(&self, repo: &Path) -> String;
    fn repo_info(&self, repo: &Path) -> Result<RepoInfo>;
}
