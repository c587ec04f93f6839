//! makepkg wrapper
//!
//! Packages land in the cache directory (`PKGDEST`) and sources are built in
//! a scratch directory (`BUILDDIR`) so mirrors only ever hold the recipe and
//! downloaded sources.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::{Builder, process};
use crate::error::{Result, command};

const MAKEPKG: &str = "makepkg";

#[derive(Debug, Clone)]
pub struct Makepkg {
    pkgdest: PathBuf,
    builddir: PathBuf,
}

impl Makepkg {
    pub fn new(pkgdest: impl Into<PathBuf>, builddir: impl Into<PathBuf>) -> Self {
        Self {
            pkgdest: pkgdest.into(),
            builddir: builddir.into(),
        }
    }

    fn command(&self, dir: &Path, args: &[&str]) -> Command {
        let mut cmd = Command::new(MAKEPKG);
        cmd.args(args)
            .env("PKGDEST", &self.pkgdest)
            .env("BUILDDIR", &self.builddir)
            .current_dir(dir);
        cmd
    }

    /// Package files the recipe in `dir` declares, one path per line
    fn package_list(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let listing = process::output(&mut self.command(dir, &["--packagelist"]))?;
        Ok(listing
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(PathBuf::from)
            .collect())
    }
}

impl Builder for Makepkg {
    fn build(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        process::run(&mut self.command(dir, &["--force", "--syncdeps"]))?;
        self.package_list(dir)
    }

    fn vcs_versions(&self, dir: &Path) -> Result<HashMap<String, String>> {
        // Fetching the sources runs pkgver(), which rewrites pkgver in the PKGBUILD
        let mut update = self.command(dir, &["--nobuild", "--nodeps", "--noprepare"]);
        update.stdout(Stdio::null());
        process::run(&mut update)?;

        let mut versions = HashMap::new();
        for path in self.package_list(dir)? {
            let (name, version) = parse_package_file(&path).ok_or_else(|| {
                command::bad_output(
                    MAKEPKG,
                    format!("cannot parse package file name '{}'", path.display()),
                )
            })?;
            versions.insert(name, version);
        }
        debug!(dir = %dir.display(), ?versions, "resolved VCS versions");
        Ok(versions)
    }
}

/// Split `<name>-<pkgver>-<pkgrel>-<arch>.pkg.tar[.ext]` into name and `pkgver-pkgrel`
pub fn parse_package_file(path: &Path) -> Option<(String, String)> {
    let file_name = path.file_name()?.to_str()?;
    let stem = &file_name[..file_name.find(".pkg.tar")?];

    let mut parts = stem.rsplitn(4, '-');
    let _arch = parts.next()?;
    let pkgrel = parts.next()?;
    let pkgver = parts.next()?;
    let name = parts.next()?;
    if name.is_empty() || pkgver.is_empty() || pkgrel.is_empty() {
        return None;
    }
    Some((name.to_string(), format!("{pkgver}-{pkgrel}")))
}
