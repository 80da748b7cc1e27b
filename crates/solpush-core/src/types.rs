use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Inputs for a direct push onto the default branch.
#[derive(Debug, Clone, Serialize)]
pub struct PushRequest {
    pub repo_path: PathBuf,
    pub problem_name: String,
}

/// Inputs for the pull-request flow. `author_github` may be a bare
/// username or a full profile URL; it is normalized before rendering.
#[derive(Debug, Clone, Serialize)]
pub struct PrRequest {
    pub repo_path: PathBuf,
    pub problem_name: String,
    pub branch_name: String,
    pub execution_time: String,
    pub problem_type: String,
    pub difficulty: String,
    pub author_name: String,
    pub author_github: String,
    pub solution_file_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoInfo {
    pub owner: String,
    pub repo: String,
}

/// Result of attempting to remove a branch before it is recreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed(String),
}

impl DeleteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::NotFound => "not_found",
            DeleteOutcome::Failed(_) => "failed",
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Failed(reason) => write!(f, "failed ({reason})"),
            other => f.write_str(other.as_str()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PushOutcome {
    pub branch: String,
    pub commit_message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrOutcome {
    pub base_branch: String,
    pub branch: String,
    pub commit_message: String,
    pub local_delete: DeleteOutcome,
    pub remote_delete: DeleteOutcome,
    pub author_github: String,
    pub description: String,
    pub copied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_url: Option<String>,
    pub opened: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delete_outcome_display() {
        assert_eq!(DeleteOutcome::Deleted.to_string(), "deleted");
        assert_eq!(DeleteOutcome::NotFound.to_string(), "not_found");
        assert_eq!(
            DeleteOutcome::Failed("exit status 128".into()).to_string(),
            "failed (exit status 128)"
        );
    }

    #[test]
    fn delete_outcome_serializes_tagged() {
        let json = serde_json::to_value(DeleteOutcome::NotFound).unwrap();
        assert_eq!(json["status"], "not_found");
        let json = serde_json::to_value(DeleteOutcome::Failed("boom".into())).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["reason"], "boom");
    }
}
