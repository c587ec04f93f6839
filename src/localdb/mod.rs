//! Local repository package database
//!
//! The packages aursync manages are the ones in its own pacman repository
//! (the `aur` sync database by default). This module exposes exactly what the
//! reconciliation engine and the cache sweep need from it through the
//! [`PackageDb`] trait:
//! - the version of a package by name
//! - every package name
//! - every package's base and artifact file name
//! - version ordering
//!
//! Backends: `AlpmDb` (libalpm, the default `alpm` feature), `PacmanDb`
//! (pacman executable, when built without `alpm`) and `MemoryDb` (in memory,
//! for tests). Version ordering is libalpm's `alpm_pkg_vercmp`; without the
//! feature a native port of it is used.

#[cfg(feature = "alpm")]
pub mod alpm;
#[cfg(not(feature = "alpm"))]
pub mod pacman;
#[cfg(not(feature = "alpm"))]
pub mod version;

use std::cmp::Ordering;
#[cfg(test)]
use std::collections::BTreeMap;

use crate::error::Result;

#[cfg(feature = "alpm")]
pub use self::alpm::AlpmDb;
#[cfg(not(feature = "alpm"))]
pub use pacman::PacmanDb;
#[cfg(not(feature = "alpm"))]
pub use version::vercmp;

/// Three-way version comparison with pacman's ordering
#[cfg(feature = "alpm")]
pub fn vercmp(a: &str, b: &str) -> Ordering {
    ::alpm::vercmp(a.to_string(), b.to_string())
}

/// A package in the repository with the build unit and file that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstalledArtifact {
    pub name: String,
    pub base: String,
    pub filename: String,
}

/// Query interface to the repository database
pub trait PackageDb {
    /// Version of `name`, or `None` when the repository does not have it
    fn version(&self, name: &str) -> Result<Option<String>>;

    /// Every package name in the repository
    fn names(&self) -> Result<Vec<String>>;

    /// Base and file name of every package in the repository
    fn artifacts(&self) -> Result<Vec<InstalledArtifact>>;

    /// Three-way version comparison
    fn vercmp(&self, a: &str, b: &str) -> Ordering {
        vercmp(a, b)
    }
}

/// One package held by [`MemoryDb`]
#[cfg(test)]
#[derive(Debug, Clone)]
struct MemoryEntry {
    version: String,
    base: String,
    filename: String,
}

/// Package database held in memory
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryDb {
    packages: BTreeMap<String, MemoryEntry>,
}

#[cfg(test)]
impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a package built from `base`; the file name follows makepkg's naming
    pub fn insert(&mut self, name: &str, version: &str, base: &str) {
        self.packages.insert(
            name.to_string(),
            MemoryEntry {
                version: version.to_string(),
                base: base.to_string(),
                filename: format!("{name}-{version}-x86_64.pkg.tar.zst"),
            },
        );
    }

    /// Builder-style [`MemoryDb::insert`]
    #[must_use]
    pub fn with(mut self, name: &str, version: &str, base: &str) -> Self {
        self.insert(name, version, base);
        self
    }
}

#[cfg(test)]
impl PackageDb for MemoryDb {
    fn version(&self, name: &str) -> Result<Option<String>> {
        Ok(self.packages.get(name).map(|entry| entry.version.clone()))
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.packages.keys().cloned().collect())
    }

    fn artifacts(&self) -> Result<Vec<InstalledArtifact>> {
        Ok(self
            .packages
            .iter()
            .map(|(name, entry)| InstalledArtifact {
                name: name.clone(),
                base: entry.base.clone(),
                filename: entry.filename.clone(),
            })
            .collect())
    }
}
