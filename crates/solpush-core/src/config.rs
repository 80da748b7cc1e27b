use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// AuthorConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// GitHub username or profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

// ---------------------------------------------------------------------------
// RepositoryConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    #[serde(default = "default_branch")]
    pub default_branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn default_branch() -> String {
    "main".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            default_branch: default_branch(),
            owner: None,
            name: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default)]
    pub author: AuthorConfig,
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default = "default_readme")]
    pub readme_file: String,
    /// Abort when a branch deletion fails for a reason other than the
    /// branch being absent.
    #[serde(default)]
    pub strict_branch_cleanup: bool,
    #[serde(default = "default_true")]
    pub copy_to_clipboard: bool,
    #[serde(default = "default_true")]
    pub open_browser: bool,
}

fn default_version() -> u32 {
    1
}

fn default_readme() -> String {
    paths::DEFAULT_README.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            author: AuthorConfig::default(),
            repository: RepositoryConfig::default(),
            readme_file: default_readme(),
            strict_branch_cleanup: false,
            copy_to_clipboard: true,
            open_browser: true,
        }
    }
}

impl Config {
    /// Load `.solpush.yaml` from `root`. A missing file yields defaults.
    pub fn load(root: &Path) -> Result<Self> {
        Self::load_file(&paths::config_path(root))
    }

    /// Load the project config, then fill gaps from `~/.solpush.yaml`.
    pub fn load_with_user_defaults(root: &Path) -> Result<Self> {
        let mut cfg = Self::load(root)?;
        match paths::user_config_path() {
            Ok(user_path) if user_path != paths::config_path(root) => {
                let user = Self::load_file(&user_path)?;
                cfg.merge_user_defaults(&user);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("skipping user config: {e}"),
        }
        Ok(cfg)
    }

    fn load_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Self::default());
        }
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }

    /// Write the config unless `.solpush.yaml` already exists.
    /// Returns true if written.
    pub fn save_if_missing(&self, root: &Path) -> Result<bool> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::write_if_missing(&path, data.as_bytes())
    }

    /// Copy identity fields from `user` where this config leaves them unset.
    pub fn merge_user_defaults(&mut self, user: &Config) {
        if self.author.name.is_none() {
            self.author.name = user.author.name.clone();
        }
        if self.author.github.is_none() {
            self.author.github = user.author.github.clone();
        }
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.repository.default_branch.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "repository.default_branch is empty".to_string(),
            });
        }

        if self.readme_file.trim().is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Error,
                message: "readme_file is empty".to_string(),
            });
        }

        match (&self.repository.owner, &self.repository.name) {
            (Some(_), None) | (None, Some(_)) => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "repository.owner and repository.name must be set together".to_string(),
            }),
            (None, None) => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "repository.owner/name not set: compare URL will not be opened"
                    .to_string(),
            }),
            _ => {}
        }

        if self.author.name.is_none() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "author.name not set: pass --author-name to 'solpush pr'".to_string(),
            });
        }

        match self.author.github.as_deref() {
            None => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "author.github not set: pass --author-github to 'solpush pr'"
                    .to_string(),
            }),
            Some(gh) if gh.chars().any(char::is_whitespace) => warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: format!("author.github '{gh}' contains whitespace"),
            }),
            Some(_) => {}
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn complete() -> Config {
        Config {
            author: AuthorConfig {
                name: Some("Jane Doe".into()),
                github: Some("janedoe".into()),
            },
            repository: RepositoryConfig {
                default_branch: "main".into(),
                owner: Some("acme".into()),
                name: Some("algo".into()),
            },
            ..Config::default()
        }
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.repository.default_branch, "main");
        assert_eq!(cfg.readme_file, "README.md");
        assert!(!cfg.strict_branch_cleanup);
        assert!(cfg.copy_to_clipboard);
        assert!(cfg.open_browser);
    }

    #[test]
    fn save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let cfg = complete();
        cfg.save(dir.path()).unwrap();
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.author.name.as_deref(), Some("Jane Doe"));
        assert_eq!(loaded.repository.owner.as_deref(), Some("acme"));
        assert_eq!(loaded.repository.name.as_deref(), Some("algo"));
    }

    #[test]
    fn save_if_missing_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        assert!(complete().save_if_missing(dir.path()).unwrap());
        assert!(!Config::default().save_if_missing(dir.path()).unwrap());
        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.repository.owner.as_deref(), Some("acme"));
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let yaml = "repository:\n  default_branch: develop\nstrict_branch_cleanup: true\n";
        let cfg: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.repository.default_branch, "develop");
        assert!(cfg.strict_branch_cleanup);
        assert_eq!(cfg.readme_file, "README.md");
        assert!(cfg.open_browser);
    }

    #[test]
    fn empty_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::config_path(dir.path()), "").unwrap();
        let cfg = Config::load(dir.path()).unwrap();
        assert_eq!(cfg.repository.default_branch, "main");
    }

    #[test]
    fn malformed_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        std::fs::write(paths::config_path(dir.path()), "author: [unclosed").unwrap();
        assert!(Config::load(dir.path()).is_err());
    }

    #[test]
    fn unset_fields_are_not_serialized() {
        let out = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(!out.contains("owner"));
        assert!(!out.contains("github"));
    }

    #[test]
    fn merge_fills_only_missing_identity() {
        let mut project = Config::default();
        project.author.name = Some("Project Author".into());
        let mut user = Config::default();
        user.author.name = Some("User Author".into());
        user.author.github = Some("userauthor".into());

        project.merge_user_defaults(&user);
        assert_eq!(project.author.name.as_deref(), Some("Project Author"));
        assert_eq!(project.author.github.as_deref(), Some("userauthor"));
    }

    #[test]
    fn complete_config_has_no_warnings() {
        assert!(complete().validate().is_empty());
    }

    #[test]
    fn validate_empty_default_branch_is_error() {
        let mut cfg = complete();
        cfg.repository.default_branch = "  ".into();
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.level == WarnLevel::Error && w.message.contains("default_branch")));
    }

    #[test]
    fn validate_owner_without_name() {
        let mut cfg = complete();
        cfg.repository.name = None;
        let warnings = cfg.validate();
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("must be set together")));
    }

    #[test]
    fn validate_missing_author() {
        let mut cfg = complete();
        cfg.author = AuthorConfig::default();
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("author.name")));
        assert!(warnings.iter().any(|w| w.message.contains("author.github")));
    }

    #[test]
    fn validate_github_with_whitespace() {
        let mut cfg = complete();
        cfg.author.github = Some("jane doe".into());
        let warnings = cfg.validate();
        assert!(warnings.iter().any(|w| w.message.contains("whitespace")));
    }
}
