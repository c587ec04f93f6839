//! External tools the orchestrator drives
//!
//! This module handles:
//! - makepkg, which turns a PKGBUILD into package files ([`Builder`])
//! - repo-add/repo-remove, which maintain the repository database ([`Archive`])
//! - the editor PKGBUILDs are reviewed in ([`Editor`])
//!
//! Each concern sits behind a trait so the orchestrator can be exercised
//! without the real programs.

pub mod editor;
pub mod makepkg;
pub mod process;
pub mod repo;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::Result;

pub use editor::SystemEditor;
pub use makepkg::Makepkg;
pub use repo::RepoArchive;

/// Builds the recipe in a mirror directory
pub trait Builder {
    /// Build every package of the recipe in `dir` and return the package files produced
    fn build(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Versions the recipe in `dir` would produce, keyed by package name,
    /// after updating its VCS sources
    fn vcs_versions(&self, dir: &Path) -> Result<HashMap<String, String>>;
}

/// Maintains the local repository database
pub trait Archive {
    /// Add package files, replacing older entries of the same packages
    fn add(&self, packages: &[PathBuf]) -> Result<()>;

    /// Drop packages by name
    fn remove(&self, names: &[String]) -> Result<()>;
}

/// Opens a file for review and waits until the user is done
pub trait Editor {
    fn edit(&self, file: &Path) -> Result<()>;
}
