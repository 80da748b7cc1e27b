use crate::cmd::load_config;
use crate::output::{print_json, print_table};
use clap::Subcommand;
use solpush_core::config::WarnLevel;
use std::path::Path;

#[derive(Subcommand)]
pub enum ConfigSubcommand {
    /// Show the effective configuration (project file plus user defaults)
    Show,

    /// Validate the config for common mistakes
    Validate,
}

pub fn run(root: &Path, subcmd: ConfigSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        ConfigSubcommand::Show => show(root, json),
        ConfigSubcommand::Validate => validate(root, json),
    }
}

// ---------------------------------------------------------------------------
// show
// ---------------------------------------------------------------------------

fn show(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;

    if json {
        return print_json(&config);
    }

    let unset = || "-".to_string();
    let rows = vec![
        vec![
            "author.name".to_string(),
            config.author.name.clone().unwrap_or_else(unset),
        ],
        vec![
            "author.github".to_string(),
            config.author.github.clone().unwrap_or_else(unset),
        ],
        vec![
            "repository.default_branch".to_string(),
            config.repository.default_branch.clone(),
        ],
        vec![
            "repository.owner".to_string(),
            config.repository.owner.clone().unwrap_or_else(unset),
        ],
        vec![
            "repository.name".to_string(),
            config.repository.name.clone().unwrap_or_else(unset),
        ],
        vec!["readme_file".to_string(), config.readme_file.clone()],
        vec![
            "strict_branch_cleanup".to_string(),
            config.strict_branch_cleanup.to_string(),
        ],
        vec![
            "copy_to_clipboard".to_string(),
            config.copy_to_clipboard.to_string(),
        ],
        vec!["open_browser".to_string(), config.open_browser.to_string()],
    ];
    print_table(&["KEY", "VALUE"], rows);
    Ok(())
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

fn validate(root: &Path, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let warnings = config.validate();

    if json {
        print_json(&serde_json::json!({ "warnings": warnings }))?;
    } else if warnings.is_empty() {
        println!("Config is valid. No warnings.");
    } else {
        for w in &warnings {
            let prefix = match w.level {
                WarnLevel::Warning => "warning",
                WarnLevel::Error => "error",
            };
            println!("[{prefix}] {}", w.message);
        }
    }

    if warnings.iter().any(|w| w.level == WarnLevel::Error) {
        anyhow::bail!("config has errors");
    }
    Ok(())
}
