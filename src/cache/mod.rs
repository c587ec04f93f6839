//! Cache sweep
//!
//! The cache directory holds one mirror per package base, the built package
//! files and the repository database. The sweep keeps what the repository
//! still references:
//!
//! - directories named after a base in the repository are kept, and mirrors
//!   among them are cleaned of untracked and ignored files
//! - files named like a package file in the repository are kept
//! - the repository database files (`<db>.*`) are always kept
//!
//! Everything else is deleted. There is no confirmation; a second sweep
//! right after the first deletes nothing.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Result, cache};
use crate::git::Vcs;
use crate::localdb::{InstalledArtifact, PackageDb};

/// What a cache entry is on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Directory with a `.git` inside
    Mirror,
    Directory,
    File,
}

/// What the sweep does with one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAction {
    Keep,
    Clean,
    Remove,
}

/// Outcome of a sweep
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SweepReport {
    /// Mirrors cleaned in place
    pub cleaned: usize,
    /// Entries deleted
    pub removed: usize,
    /// Bytes reclaimed by both
    pub freed_bytes: u64,
}

/// Names the repository still references: every base and every package file
pub fn keep_set(artifacts: &[InstalledArtifact]) -> HashSet<String> {
    artifacts
        .iter()
        .flat_map(|artifact| [artifact.base.clone(), artifact.filename.clone()])
        .filter(|name| !name.is_empty())
        .collect()
}

/// Decide what happens to the cache entry `name`
pub fn classify(
    config: &Config,
    keep: &HashSet<String>,
    name: &str,
    kind: EntryKind,
) -> SweepAction {
    if config.is_db_file(name) {
        return SweepAction::Keep;
    }
    if !keep.contains(name) {
        return SweepAction::Remove;
    }
    match kind {
        EntryKind::Mirror => SweepAction::Clean,
        EntryKind::Directory | EntryKind::File => SweepAction::Keep,
    }
}

fn entry_kind(path: &Path) -> Result<EntryKind> {
    let file_type = fs::symlink_metadata(path)?.file_type();
    Ok(if !file_type.is_dir() {
        EntryKind::File
    } else if path.join(".git").exists() {
        EntryKind::Mirror
    } else {
        EntryKind::Directory
    })
}

/// Total size of the regular files below `path`
fn disk_usage(path: &Path) -> Result<u64> {
    let mut size = 0u64;
    for entry in WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            size += entry
                .metadata()
                .map_err(|e| cache::operation_failed(format!("Failed to get metadata: {e}")))?
                .len();
        }
    }
    Ok(size)
}

fn remove_entry(path: &Path, kind: EntryKind) -> Result<()> {
    match kind {
        EntryKind::File => fs::remove_file(path),
        EntryKind::Mirror | EntryKind::Directory => fs::remove_dir_all(path),
    }
    .map_err(|e| cache::operation_failed(format!("Failed to remove {}: {e}", path.display())))
}

/// Cache entries in name order
fn cache_entries(cache_dir: &Path) -> Result<Vec<(String, PathBuf)>> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(cache_dir)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push((name, entry.path()));
    }
    entries.sort();
    Ok(entries)
}

/// Clean kept mirrors and delete unreferenced entries of the cache directory
pub fn sweep(config: &Config, db: &dyn PackageDb, vcs: &dyn Vcs) -> Result<SweepReport> {
    let mut report = SweepReport::default();
    if !config.cache_dir.is_dir() {
        debug!(cache = %config.cache_dir.display(), "no cache directory");
        return Ok(report);
    }

    let keep = keep_set(&db.artifacts()?);
    for (name, path) in cache_entries(&config.cache_dir)? {
        let kind = entry_kind(&path)?;
        let action = classify(config, &keep, &name, kind);
        debug!(entry = %name, ?kind, ?action, "sweep");

        match action {
            SweepAction::Keep => {}
            SweepAction::Clean => {
                let before = disk_usage(&path)?;
                vcs.clean(&path)?;
                report.cleaned += 1;
                report.freed_bytes += before.saturating_sub(disk_usage(&path)?);
            }
            SweepAction::Remove => {
                let size = match kind {
                    EntryKind::File => fs::symlink_metadata(&path)?.len(),
                    EntryKind::Mirror | EntryKind::Directory => disk_usage(&path)?,
                };
                remove_entry(&path, kind)?;
                report.removed += 1;
                report.freed_bytes += size;
                info!(entry = %name, "removed");
            }
        }
    }
    Ok(report)
}
