use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::cli::Cli;
use crate::git::{has_changes, has_git_dir, remote_exists, run_git, run_git_silent};
use crate::prompt::{input_allow_empty, input_with_default};

const DEFAULT_BRANCH: &str = "main";
const DEFAULT_COMMIT_MESSAGE: &str = "Update project";

pub fn run_publish(cli: Cli) -> Result<()> {
    let project_path = resolve_path(cli.path, cli.yes)?;
    if !project_path.exists() {
        bail!("the path '{}' does not exist", project_path.display());
    }
    // Absolute from here on; relative input would dangle once we chdir below.
    let project_path = project_path
        .canonicalize()
        .with_context(|| format!("failed to resolve '{}'", project_path.display()))?;

    let remote_url = resolve_remote_url(cli.remote_url, cli.yes)?;
    let branch = resolve_branch(cli.branch, cli.yes)?;

    env::set_current_dir(&project_path)
        .with_context(|| format!("failed to change into '{}'", project_path.display()))?;

    if has_git_dir(&project_path) {
        println!("Found an existing Git repository.");
    } else {
        println!("→ Initializing Git repository...");
        run_git_silent(&["init"])?;
    }

    println!("→ Switching to branch '{}'...", branch);
    run_git_silent(&["branch", "-M", &branch])?;

    if remote_exists(&cli.remote)? {
        println!("Remote '{}' already exists. Skipping this step.", cli.remote);
    } else {
        println!("→ Adding remote '{}'...", cli.remote);
        run_git_silent(&["remote", "add", &cli.remote, &remote_url])?;
    }

    println!("→ Staging all changes...");
    run_git_silent(&["add", "-A"])?;

    if has_changes()? {
        let message = resolve_message(cli.message, cli.yes)?;
        println!("→ Committing...");
        run_git(&["commit", "-m", &message])?;
        println!("✓ Commit created");
    } else {
        println!("No changes to commit. Skipping commit step.");
    }

    println!("→ Pushing to '{}/{}'...", cli.remote, branch);
    run_git(&["push", "-u", &cli.remote, &branch])
        .with_context(|| format!("push to '{}/{}' failed", cli.remote, branch))?;
    println!("✓ Push successful");

    Ok(())
}

fn resolve_path(flag: Option<PathBuf>, yes: bool) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path);
    }

    let cwd = env::current_dir().context("failed to resolve the current directory")?;
    if yes {
        return Ok(cwd);
    }

    let raw = input_with_default("Path to your project", &cwd.display().to_string())?;
    Ok(path_or_default(&raw, cwd))
}

fn path_or_default(answer: &str, default: PathBuf) -> PathBuf {
    let answer = answer.trim();
    if answer.is_empty() {
        default
    } else {
        PathBuf::from(answer)
    }
}

fn resolve_remote_url(flag: Option<String>, yes: bool) -> Result<String> {
    let url = match flag {
        Some(url) => url,
        None if yes => String::new(),
        None => input_allow_empty("Repository URL")?,
    };

    let url = url.trim().to_string();
    if url.is_empty() {
        bail!("no repository URL provided");
    }
    Ok(url)
}

fn resolve_branch(flag: Option<String>, yes: bool) -> Result<String> {
    let branch = match flag {
        Some(branch) => branch,
        None if yes => String::new(),
        None => input_with_default("Branch to push", DEFAULT_BRANCH)?,
    };

    let branch = branch.trim().to_string();
    if branch.is_empty() {
        return Ok(DEFAULT_BRANCH.to_string());
    }
    Ok(branch)
}

fn resolve_message(flag: Option<String>, yes: bool) -> Result<String> {
    let message = match flag {
        Some(message) => message,
        None if yes => String::new(),
        None => input_with_default("Commit message", DEFAULT_COMMIT_MESSAGE)?,
    };

    let message = message.trim().to_string();
    if message.is_empty() {
        return Ok(DEFAULT_COMMIT_MESSAGE.to_string());
    }
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::path_or_default;
    use std::path::PathBuf;

    #[test]
    fn blank_path_answer_falls_back_to_default() {
        let default = PathBuf::from("/home/me/project");
        assert_eq!(path_or_default("", default.clone()), default);
        assert_eq!(path_or_default("   \t", default.clone()), default);
    }

    #[test]
    fn nonblank_path_answer_is_used_trimmed() {
        let default = PathBuf::from("/home/me/project");
        assert_eq!(
            path_or_default(" /tmp/other ", default),
            PathBuf::from("/tmp/other")
        );
    }
}
