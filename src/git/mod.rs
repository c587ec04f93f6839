//! Git mirrors of package bases
//!
//! This module handles:
//! - Cloning a package base into its mirror (first sync only)
//! - Fetching upstream and checking whether it changed the recipe
//! - Showing that change and fast-forwarding the mirror to it
//! - Removing untracked and ignored files (`git clean -dfx`)
//!
//! All operations go through libgit2. The orchestrator and the cache sweep
//! only see the [`Vcs`] trait.

pub mod auth;

use std::fs;
use std::path::Path;

use console::Style;
use git2::build::{CheckoutBuilder, RepoBuilder};
use git2::{Commit, DiffFormat, ErrorClass, FetchOptions, RemoteCallbacks, Repository, StatusOptions};
use tracing::debug;

use crate::error::{Result, git};

/// Remote every mirror tracks
const REMOTE: &str = "origin";

/// Mirror operations
pub trait Vcs {
    /// Full clone of `url` into `dest`
    fn clone_mirror(&self, url: &str, dest: &Path) -> Result<()>;

    /// Update the remote-tracking branch of the mirror
    fn fetch(&self, dir: &Path) -> Result<()>;

    /// Whether the fetched upstream tree differs from the checked out one
    fn differs(&self, dir: &Path) -> Result<bool>;

    /// Print the change between the checked out tree and upstream
    fn show_diff(&self, dir: &Path) -> Result<()>;

    /// Fast-forward the checked out branch to upstream
    fn merge(&self, dir: &Path) -> Result<()>;

    /// Delete untracked and ignored files, keeping tracked history
    fn clean(&self, dir: &Path) -> Result<()>;
}

/// libgit2-backed mirror operations
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

/// Interpret a git2 error and provide a more user-friendly message
fn interpret_git_error(err: &git2::Error) -> String {
    let message = err.message().to_lowercase();

    if message.contains("not found") || message.contains("404") {
        "Repository not found".to_string()
    } else if message.contains("authentication") || message.contains("credentials") {
        "Authentication failed".to_string()
    } else if message.contains("connection")
        || message.contains("network")
        || message.contains("timed out")
    {
        format!("Network error: {}", err.message())
    } else if err.class() == ErrorClass::Ssh {
        format!("SSH error: {}", err.message())
    } else {
        err.message().to_string()
    }
}

fn fetch_options<'cb>() -> FetchOptions<'cb> {
    let mut callbacks = RemoteCallbacks::new();
    auth::setup_auth_callbacks(&mut callbacks);
    let mut options = FetchOptions::new();
    options.remote_callbacks(callbacks);
    options
}

/// Open an existing mirror
pub fn open(dir: &Path) -> Result<Repository> {
    Repository::open(dir).map_err(|e| git::open_failed(dir, e.message()))
}

/// Name of the checked out branch
fn current_branch(repo: &Repository, dir: &Path) -> Result<String> {
    let head = repo.head().map_err(|e| git::open_failed(dir, e.message()))?;
    if !head.is_branch() {
        return Err(git::open_failed(dir, "HEAD is detached"));
    }
    head.shorthand()
        .map(ToString::to_string)
        .ok_or_else(|| git::open_failed(dir, "branch name is not UTF-8"))
}

fn head_commit<'r>(repo: &'r Repository) -> Result<Commit<'r>> {
    Ok(repo.head()?.peel_to_commit()?)
}

/// Commit of the remote-tracking branch for the checked out branch
fn upstream_commit<'r>(repo: &'r Repository, dir: &Path) -> Result<Commit<'r>> {
    let branch = current_branch(repo, dir)?;
    let refname = format!("refs/remotes/{REMOTE}/{branch}");
    let reference = repo
        .find_reference(&refname)
        .map_err(|e| git::fetch_failed(dir, format!("{refname}: {}", e.message())))?;
    Ok(reference.peel_to_commit()?)
}

fn upstream_diff<'r>(repo: &'r Repository, dir: &Path) -> Result<git2::Diff<'r>> {
    let head = head_commit(repo)?;
    let upstream = upstream_commit(repo, dir)?;
    Ok(repo.diff_tree_to_tree(Some(&head.tree()?), Some(&upstream.tree()?), None)?)
}

fn diff_line_style(origin: char) -> Style {
    match origin {
        '+' | '>' => Style::new().green(),
        '-' | '<' => Style::new().red(),
        'H' => Style::new().cyan(),
        'F' => Style::new().bold(),
        _ => Style::new(),
    }
}

impl Vcs for Git {
    fn clone_mirror(&self, url: &str, dest: &Path) -> Result<()> {
        debug!(url, dest = %dest.display(), "cloning mirror");
        let mut builder = RepoBuilder::new();
        builder.fetch_options(fetch_options());
        builder
            .clone(url, dest)
            .map_err(|e| git::clone_failed(url, interpret_git_error(&e)))?;
        Ok(())
    }

    fn fetch(&self, dir: &Path) -> Result<()> {
        debug!(dir = %dir.display(), "fetching mirror");
        let repo = open(dir)?;
        let mut remote = repo
            .find_remote(REMOTE)
            .map_err(|e| git::fetch_failed(dir, e.message()))?;
        // Empty refspecs fetch with the remote's configured ones
        remote
            .fetch(&[] as &[&str], Some(&mut fetch_options()), None)
            .map_err(|e| git::fetch_failed(dir, interpret_git_error(&e)))?;
        Ok(())
    }

    fn differs(&self, dir: &Path) -> Result<bool> {
        let repo = open(dir)?;
        let head = head_commit(&repo)?;
        let upstream = upstream_commit(&repo, dir)?;
        if head.id() == upstream.id() {
            debug!(dir = %dir.display(), "mirror matches upstream");
            return Ok(false);
        }
        let diff = upstream_diff(&repo, dir)?;
        let differs = diff.deltas().next().is_some();
        debug!(
            dir = %dir.display(),
            head = %head.id(),
            upstream = %upstream.id(),
            differs,
            "compared with upstream"
        );
        Ok(differs)
    }

    fn show_diff(&self, dir: &Path) -> Result<()> {
        let repo = open(dir)?;
        let diff = upstream_diff(&repo, dir)?;
        debug!(
            dir = %dir.display(),
            files = diff.stats()?.files_changed(),
            "showing upstream diff"
        );
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            let content = String::from_utf8_lossy(line.content());
            let style = diff_line_style(line.origin());
            match line.origin() {
                '+' | '-' | ' ' => {
                    print!("{}", style.apply_to(format!("{}{content}", line.origin())));
                }
                _ => print!("{}", style.apply_to(content)),
            }
            true
        })?;
        Ok(())
    }

    fn merge(&self, dir: &Path) -> Result<()> {
        let repo = open(dir)?;
        let branch = current_branch(&repo, dir)?;
        let upstream = upstream_commit(&repo, dir)?;
        let annotated = repo.find_annotated_commit(upstream.id())?;
        let (analysis, _) = repo.merge_analysis(&[&annotated])?;

        if analysis.is_up_to_date() {
            debug!(dir = %dir.display(), "mirror up to date");
            return Ok(());
        }
        if !analysis.is_fast_forward() {
            return Err(git::merge_failed(
                dir,
                "local history has diverged from upstream",
            ));
        }

        // Safe checkout refuses to overwrite local modifications, like git merge does
        repo.checkout_tree(upstream.as_object(), Some(CheckoutBuilder::new().safe()))
            .map_err(|e| git::merge_failed(dir, e.message()))?;
        repo.find_reference(&format!("refs/heads/{branch}"))?
            .set_target(upstream.id(), "aur: fast-forward")?;
        debug!(dir = %dir.display(), commit = %upstream.id(), "fast-forwarded mirror");
        Ok(())
    }

    fn clean(&self, dir: &Path) -> Result<()> {
        let repo = open(dir)?;
        let mut options = StatusOptions::new();
        options
            .include_untracked(true)
            .include_ignored(true)
            .recurse_untracked_dirs(false)
            .recurse_ignored_dirs(false);

        let statuses = repo.statuses(Some(&mut options))?;
        debug!(dir = %dir.display(), candidates = statuses.len(), "cleaning mirror");
        for entry in statuses.iter() {
            let status = entry.status();
            if !(status.is_wt_new() || status.is_ignored()) {
                continue;
            }
            let Some(relative) = entry.path() else {
                continue;
            };
            let path = dir.join(relative.trim_end_matches('/'));
            if path.is_dir() {
                // Nested repositories survive like they do with a single -f
                if path.join(".git").exists() {
                    continue;
                }
                fs::remove_dir_all(&path)?;
            } else {
                fs::remove_file(&path)?;
            }
            debug!(path = %path.display(), "removed");
        }
        Ok(())
    }
}
