use crate::error::{Result, SolpushError};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// File constants
// ---------------------------------------------------------------------------

pub const CONFIG_FILE: &str = ".solpush.yaml";
pub const GIT_DIR: &str = ".git";
pub const DEFAULT_README: &str = "README.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn git_dir(root: &Path) -> PathBuf {
    root.join(GIT_DIR)
}

/// User-level config holding defaults shared by every repository,
/// typically the author identity.
pub fn user_config_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or(SolpushError::HomeNotFound)?;
    Ok(home.join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_under_root() {
        let root = Path::new("/tmp/algo");
        assert_eq!(config_path(root), PathBuf::from("/tmp/algo/.solpush.yaml"));
        assert_eq!(git_dir(root), PathBuf::from("/tmp/algo/.git"));
    }
}
