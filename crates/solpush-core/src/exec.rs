//! Process-backed [`CommandRunner`]s.

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::git::{GitCommand, GIT_BIN};
use crate::ports::{CommandRunner, ExecFailure};

/// Runs git for real. stdin, stdout and stderr are inherited so progress
/// output and credential prompts reach the terminal.
#[derive(Debug, Clone)]
pub struct SystemRunner {
    program: String,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self {
            program: GIT_BIN.to_string(),
        }
    }

    /// Use a different git executable, e.g. one resolved with `which`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for SystemRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, cwd: &Path, command: &GitCommand) -> Result<(), ExecFailure> {
        tracing::debug!(cwd = %cwd.display(), "running {command}");
        let status = Command::new(&self.program)
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ExecFailure::Spawn(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(ExecFailure::Exit {
                code: status.code(),
            })
        }
    }
}

/// Where echo-style adapters write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EchoTarget {
    Stdout,
    Stderr,
}

impl EchoTarget {
    pub fn line(&self, text: &str) {
        match self {
            EchoTarget::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{text}");
            }
            EchoTarget::Stderr => {
                let mut err = std::io::stderr().lock();
                let _ = writeln!(err, "{text}");
            }
        }
    }
}

/// Prints each command instead of executing it. Every command succeeds.
#[derive(Debug, Clone, Copy)]
pub struct DryRunRunner {
    target: EchoTarget,
}

impl DryRunRunner {
    pub fn new(target: EchoTarget) -> Self {
        Self { target }
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&self, _cwd: &Path, command: &GitCommand) -> Result<(), ExecFailure> {
        self.target.line(&command.to_string());
        Ok(())
    }
}
