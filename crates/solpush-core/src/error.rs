use thiserror::Error;

#[derive(Debug, Error)]
pub enum SolpushError {
    #[error("Git command failed: {command}")]
    CommandFailed { command: String },

    #[error("failed to run '{command}': {reason}")]
    CommandSpawn { command: String, reason: String },

    #[error("branch cleanup failed: {command}: {reason}")]
    BranchCleanup { command: String, reason: String },

    #[error("{0} required")]
    InputRequired(String),

    #[error("repository info unavailable: {0}")]
    RepoInfoUnavailable(String),

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    #[error("could not open '{url}': {reason}")]
    Open { url: String, reason: String },

    #[error("home directory not found: set HOME environment variable")]
    HomeNotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SolpushError>;
