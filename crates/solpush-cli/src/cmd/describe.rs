use crate::cmd::{load_config, resolve_author, ProblemArgs};
use crate::output::print_json;
use solpush_core::{
    description::{generate_pr_description, DescriptionInput},
    github::{github_username, normalize_author_github},
};
use std::path::Path;

pub fn run(root: &Path, args: ProblemArgs, json: bool) -> anyhow::Result<()> {
    let config = load_config(root)?;
    let author = resolve_author(&args, &config);
    let author_github = normalize_author_github(&author.github);
    let readme_file = args.readme_file.as_deref().unwrap_or(&config.readme_file);

    let description = generate_pr_description(&DescriptionInput {
        problem_name: &args.problem,
        execution_time: &args.execution_time,
        problem_type: &args.problem_type,
        difficulty: &args.difficulty,
        author_name: &author.name,
        author_github: &author_github,
        solution_file: &args.solution_file,
        readme_file,
    });

    if json {
        print_json(&serde_json::json!({
            "problem_name": args.problem,
            "problem_type": args.problem_type,
            "difficulty": args.difficulty,
            "author_name": author.name,
            "author_github": author_github,
            "github_username": github_username(&author_github),
            "description": description,
        }))?;
    } else {
        print!("{description}");
    }

    Ok(())
}
