use std::path::Path;
use std::process::Command;

use log::debug;

use crate::error::Error;

/// Run git with `args` inside `repo_dir` and return its stdout.
///
/// This uses the system git command, so credentials, SSH keys and any
/// configuration from ~/.gitconfig apply to upstream fetches. Interactive
/// credential prompts are disabled so an unattended run fails instead of
/// hanging. `repo` labels errors with the repository path as written in the
/// manifest.
fn run_git(repo_dir: &Path, repo: &str, args: &[&str]) -> Result<String, Error> {
    let command = args.join(" ");
    debug!("{}: git {}", repo, command);

    let output = Command::new("git")
        .args(args)
        .current_dir(repo_dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .map_err(|e| Error::GitCommand {
            command: command.clone(),
            repo: repo.to_string(),
            stderr: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::GitCommand {
            command,
            repo: repo.to_string(),
            stderr: stderr.trim_end().to_string(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Pull `branch` from `url` into the checkout at `repo_dir`.
///
/// Always creates a merge commit (never rebases, never fast-forwards) and
/// keeps the generated merge message, so any pull that brings in upstream
/// commits leaves a HEAD naming the upstream branch. A checkout that is
/// already up to date keeps its HEAD. A missing directory,
/// network failure or merge conflict is reported as [`Error::GitCommand`].
pub fn pull(repo_dir: &Path, repo: &str, url: &str, branch: &str) -> Result<(), Error> {
    run_git(
        repo_dir,
        repo,
        &["pull", "--no-rebase", "--no-ff", "--no-edit", url, branch],
    )?;
    Ok(())
}

/// Full message of the latest commit on HEAD.
pub fn head_message(repo_dir: &Path, repo: &str) -> Result<String, Error> {
    run_git(repo_dir, repo, &["log", "-1", "--format=%B", "HEAD"])
}
