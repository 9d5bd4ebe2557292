use std::path::Path;
use std::process::Command as StdCommand;

use anyhow::{bail, Context, Result};

pub fn run_git(args: &[&str]) -> Result<()> {
    let output = StdCommand::new("git")
        .args(args)
        .output()
        .with_context(|| {
            format!(
                "failed to execute git {} - is git installed?",
                args.join(" ")
            )
        })?;

    let stderr = String::from_utf8_lossy(&output.stderr);
    if output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        if !stdout.is_empty() {
            print!("{}", stdout);
        }
        // git reports progress (upstream tracking notes, push summaries) on
        // stderr even when it succeeds.
        if !stderr.is_empty() {
            eprint!("{}", stderr);
        }
        Ok(())
    } else {
        let hint = suggest_hint_for_git_error(&stderr, args);
        bail!(
            "git {} failed:{}{}",
            args.join(" "),
            format_stderr(&stderr),
            hint
        );
    }
}

pub fn run_git_silent(args: &[&str]) -> Result<()> {
    let output = StdCommand::new("git")
        .args(args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::piped())
        .output()
        .with_context(|| {
            format!(
                "failed to execute git {} - is git installed?",
                args.join(" ")
            )
        })?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let hint = suggest_hint_for_git_error(&stderr, args);
        bail!(
            "git {} failed:{}{}",
            args.join(" "),
            format_stderr(&stderr),
            hint
        );
    }
}

pub fn has_git_dir(path: &Path) -> bool {
    path.join(".git").exists()
}

pub fn has_changes() -> Result<bool> {
    let output = StdCommand::new("git")
        .args(["status", "--porcelain"])
        .output()
        .context("running git status --porcelain")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(is_dirty(&stdout))
}

pub fn remote_exists(name: &str) -> Result<bool> {
    let output = StdCommand::new("git")
        .args(["remote"])
        .output()
        .context("running git remote")?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(lists_remote(&stdout, name))
}

fn is_dirty(status_output: &str) -> bool {
    !status_output.trim().is_empty()
}

fn lists_remote(remote_output: &str, name: &str) -> bool {
    remote_output.lines().any(|line| line == name)
}

fn format_stderr(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("\n  {}", trimmed)
    }
}

fn suggest_hint_for_git_error(stderr: &str, args: &[&str]) -> String {
    let stderr_lower = stderr.to_lowercase();
    let cmd = args.first().copied().unwrap_or("");

    if cmd == "push" {
        if stderr_lower.contains("rejected") {
            return "\n  hint: remote has new commits - pull and integrate them, then run shipit again"
                .to_string();
        }
        if stderr_lower.contains("could not resolve host") || stderr_lower.contains("network") {
            return "\n  hint: check your network connection".to_string();
        }
    }

    if stderr_lower.contains("permission denied") {
        return "\n  hint: check file permissions or run with appropriate privileges".to_string();
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::{is_dirty, lists_remote};

    #[test]
    fn clean_status_output_is_not_dirty() {
        assert!(!is_dirty(""));
        assert!(!is_dirty("  \n\t\n"));
    }

    #[test]
    fn any_porcelain_line_is_dirty() {
        assert!(is_dirty("?? notes.txt\n"));
        assert!(is_dirty(" M src/main.rs\n?? notes.txt\n"));
    }

    #[test]
    fn remote_match_is_exact_per_line() {
        assert!(lists_remote("origin\n", "origin"));
        assert!(lists_remote("upstream\norigin\n", "origin"));
        assert!(!lists_remote("", "origin"));
        assert!(!lists_remote("originx\n", "origin"));
        assert!(!lists_remote("my-origin\n", "origin"));
    }
}
