//! Repository database read through the pacman executable
//!
//! `pacman -Sl <db>` lists names and versions; it is read once per run.
//! Bases and file names come from `pacman -Sddp --print-format`, which is
//! only needed by the cache sweep.

use std::cell::OnceCell;
use std::collections::BTreeMap;
use std::process::Command;

use tracing::debug;

use super::{InstalledArtifact, PackageDb};
use crate::error::{Result, command};
use crate::tools::process;

const PACMAN: &str = "pacman";

/// Package database backed by `pacman`
pub struct PacmanDb {
    db_name: String,
    versions: OnceCell<BTreeMap<String, String>>,
}

impl PacmanDb {
    pub fn new(db_name: impl Into<String>) -> Self {
        Self {
            db_name: db_name.into(),
            versions: OnceCell::new(),
        }
    }

    fn versions(&self) -> Result<&BTreeMap<String, String>> {
        if let Some(versions) = self.versions.get() {
            return Ok(versions);
        }
        let listing = process::output(Command::new(PACMAN).args(["-Sl", &self.db_name]))?;
        let versions = parse_sync_list(&self.db_name, &listing)?;
        debug!(db = %self.db_name, packages = versions.len(), "loaded repository");
        Ok(self.versions.get_or_init(|| versions))
    }
}

impl PackageDb for PacmanDb {
    fn version(&self, name: &str) -> Result<Option<String>> {
        Ok(self.versions()?.get(name).cloned())
    }

    fn names(&self) -> Result<Vec<String>> {
        Ok(self.versions()?.keys().cloned().collect())
    }

    fn artifacts(&self) -> Result<Vec<InstalledArtifact>> {
        let names = self.names()?;
        if names.is_empty() {
            return Ok(Vec::new());
        }
        let mut cmd = Command::new(PACMAN);
        cmd.args(["-Sddp", "--print-format", "%n %e %f"]);
        cmd.args(names.iter().map(|name| format!("{}/{name}", self.db_name)));
        parse_print_format(&process::output(&mut cmd)?)
    }
}

/// Parse `pacman -Sl` lines: `<repo> <name> <version> [installed]`
fn parse_sync_list(db_name: &str, listing: &str) -> Result<BTreeMap<String, String>> {
    let mut versions = BTreeMap::new();
    for line in listing.lines().filter(|line| !line.trim().is_empty()) {
        let mut fields = line.split_whitespace();
        match (fields.next(), fields.next(), fields.next()) {
            (Some(repo), Some(name), Some(version)) if repo == db_name => {
                versions.insert(name.to_string(), version.to_string());
            }
            (Some(_), Some(_), Some(_)) => {}
            _ => {
                return Err(command::bad_output(
                    PACMAN,
                    format!("unexpected package line '{line}'"),
                ));
            }
        }
    }
    Ok(versions)
}

/// Parse `%n %e %f` lines
fn parse_print_format(listing: &str) -> Result<Vec<InstalledArtifact>> {
    listing
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let mut fields = line.split_whitespace();
            match (fields.next(), fields.next(), fields.next()) {
                (Some(name), Some(base), Some(filename)) => Ok(InstalledArtifact {
                    name: name.to_string(),
                    base: base.to_string(),
                    filename: filename.to_string(),
                }),
                _ => Err(command::bad_output(
                    PACMAN,
                    format!("unexpected package line '{line}'"),
                )),
            }
        })
        .collect()
}
