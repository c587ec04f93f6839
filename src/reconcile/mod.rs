//! Reconciliation of remote metadata with the local repository
//!
//! This module handles:
//! - Rejecting requests that name packages the AUR does not know
//! - Flagged and orphaned package warnings
//! - Re-resolving development package versions from their sources
//! - The staleness policy that selects the outdated set
//! - Rendering the outdated table, search results and build units
//!
//! ## Staleness
//!
//! A package is outdated iff `--force` is set or the remote version is
//! strictly newer than the local one. A package missing from the local
//! repository is always outdated.

pub mod search;
pub mod table;
pub mod units;

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::config::{Config, is_devel};
use crate::error::{AurError, Result};
use crate::localdb::PackageDb;
use crate::registry::{Registry, RemotePackage};
use crate::tools::Builder;
use crate::ui;

pub use search::{format_search_result, sort_search_results};
pub use table::print_table;
pub use units::{BuildUnit, group_by_base};

/// A remote package paired with the version the local repository holds
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciledPackage {
    pub remote: RemotePackage,
    /// `None` when the package is not in the local repository
    pub local_version: Option<String>,
}

impl ReconciledPackage {
    pub fn name(&self) -> &str {
        &self.remote.name
    }

    pub fn base(&self) -> &str {
        &self.remote.package_base
    }

    pub fn version(&self) -> &str {
        &self.remote.version
    }
}

/// Whether a package with `remote` upstream and `local` installed needs building
pub fn is_outdated(
    force: bool,
    vercmp: impl Fn(&str, &str) -> Ordering,
    remote: &str,
    local: Option<&str>,
) -> bool {
    match local {
        _ if force => true,
        None => true,
        Some(local) => vercmp(remote, local) == Ordering::Greater,
    }
}

/// Names requested but missing from the registry response, sorted
fn missing_names(requested: &[String], found: &[RemotePackage]) -> Vec<String> {
    let found: BTreeSet<&str> = found.iter().map(|pkg| pkg.name.as_str()).collect();
    let missing: BTreeSet<&String> = requested
        .iter()
        .filter(|name| !found.contains(name.as_str()))
        .collect();
    missing.into_iter().cloned().collect()
}

/// Computes the outdated set for a request
pub struct Reconciler<'a> {
    config: &'a Config,
    registry: &'a dyn Registry,
    db: &'a dyn PackageDb,
    builder: &'a dyn Builder,
    /// Version maps of development build units, resolved at most once per run
    vcs_versions: RefCell<HashMap<String, HashMap<String, String>>>,
}

impl<'a> Reconciler<'a> {
    pub fn new(
        config: &'a Config,
        registry: &'a dyn Registry,
        db: &'a dyn PackageDb,
        builder: &'a dyn Builder,
    ) -> Self {
        Self {
            config,
            registry,
            db,
            builder,
            vcs_versions: RefCell::new(HashMap::new()),
        }
    }

    /// Fetch `names` and return the outdated packages sorted by name
    ///
    /// Fails with [`AurError::TargetsNotFound`] listing every unknown name
    /// before anything is compared.
    pub fn reconcile(&self, names: &[String]) -> Result<Vec<ReconciledPackage>> {
        let records = self.registry.info(names)?;

        let missing = missing_names(names, &records);
        if !missing.is_empty() {
            return Err(AurError::TargetsNotFound { names: missing });
        }

        let mut seen = BTreeSet::new();
        let records: Vec<RemotePackage> = records
            .into_iter()
            .filter(|remote| seen.insert(remote.name.clone()))
            .collect();

        for remote in &records {
            for warning in warnings(remote) {
                ui::warning(&warning);
            }
        }

        let mut outdated = Vec::new();
        for mut remote in records {
            let local_version = self.db.version(&remote.name)?;
            if self.config.flags.devel && local_version.is_some() && is_devel(&remote.name) {
                if let Some(version) = self.devel_version(&remote)? {
                    remote.version = version;
                }
            }

            let stale = is_outdated(
                self.config.flags.force,
                |a, b| self.db.vercmp(a, b),
                &remote.version,
                local_version.as_deref(),
            );
            debug!(
                name = %remote.name,
                remote = %remote.version,
                local = ?local_version,
                stale,
                "reconciled"
            );
            if stale {
                outdated.push(ReconciledPackage {
                    remote,
                    local_version,
                });
            }
        }

        outdated.sort_by(|a, b| a.remote.name.cmp(&b.remote.name));
        Ok(outdated)
    }

    /// Version the mirror's recipe currently produces for a development package
    fn devel_version(&self, remote: &RemotePackage) -> Result<Option<String>> {
        let base = &remote.package_base;
        if !self.vcs_versions.borrow().contains_key(base) {
            let mirror = self.config.mirror_path(base);
            if !mirror.is_dir() {
                ui::warning(&format!(
                    "{}: no local mirror of {base}, using the AUR version",
                    remote.name
                ));
                return Ok(None);
            }
            let versions = self.builder.vcs_versions(&mirror)?;
            self.vcs_versions.borrow_mut().insert(base.clone(), versions);
        }

        let version = self
            .vcs_versions
            .borrow()
            .get(base)
            .and_then(|versions| versions.get(&remote.name).cloned());
        if version.is_none() {
            ui::warning(&format!(
                "{}: not produced by the recipe of {base}, using the AUR version",
                remote.name
            ));
        }
        Ok(version)
    }
}

/// Notices about a package that do not keep it from being built
fn warnings(remote: &RemotePackage) -> Vec<String> {
    let mut notices = Vec::new();
    if let Some(date) = remote.flagged_date() {
        notices.push(format!("{} is flagged out of date ({date})", remote.name));
    }
    if remote.is_orphan() {
        notices.push(format!("{} is orphaned", remote.name));
    }
    notices
}
