use std::path::Path;

use crate::config::Config;
use crate::error::{Result, SolpushError};
use crate::ports::RepoProbe;
use crate::types::RepoInfo;

/// [`RepoProbe`] answered from configuration and command-line overrides
/// rather than by inspecting the repository.
#[derive(Debug, Clone)]
pub struct ConfigProbe {
    pub default_branch: String,
    pub owner: Option<String>,
    pub repo: Option<String>,
}

impl ConfigProbe {
    pub fn from_config(config: &Config) -> Self {
        Self {
            default_branch: config.repository.default_branch.clone(),
            owner: config.repository.owner.clone(),
            repo: config.repository.name.clone(),
        }
    }

    /// Apply any overrides that were provided.
    pub fn with_overrides(
        mut self,
        base: Option<String>,
        owner: Option<String>,
        repo: Option<String>,
    ) -> Self {
        if let Some(b) = base {
            self.default_branch = b;
        }
        if owner.is_some() {
            self.owner = owner;
        }
        if repo.is_some() {
            self.repo = repo;
        }
        self
    }
}

impl RepoProbe for ConfigProbe {
    fn default_branch(&self, _repo: &Path) -> String {
        self.default_branch.clone()
    }

    fn repo_info(&self, _repo: &Path) -> Result<RepoInfo> {
        match (&self.owner, &self.repo) {
            (Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => Ok(RepoInfo {
                owner: owner.clone(),
                repo: repo.clone(),
            }),
            _ => Err(SolpushError::RepoInfoUnavailable(
                "set repository.owner and repository.name, or pass --owner and --repo".into(),
            )),
        }
    }
}
