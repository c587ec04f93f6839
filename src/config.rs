//! Run configuration
//!
//! A [`Config`] is built once in `main` from the parsed command line and the
//! environment, then handed to every component by shared reference. Nothing
//! mutates it afterwards.
//!
//! ## Cache layout
//!
//! ```text
//! ~/.cache/aur/
//! ├── aur.db -> aur.db.tar.gz      repository database (repo-add)
//! ├── aur.db.tar.gz
//! ├── <pkgbase>/                   git mirror of the package base
//! └── <pkgname>-<ver>-<arch>.pkg.tar.zst
//! ```

use std::env;
use std::path::{Path, PathBuf};

use crate::cli::{BuildFlags, Cli};
use crate::error::{AurError, Result};

/// Default cache directory name under user's cache directory
const CACHE_DIR: &str = "aur";

/// Editor used when neither `VISUAL` nor `EDITOR` is set
const DEFAULT_EDITOR: &str = "vim";

/// Package name suffixes of VCS packages whose AUR version is a placeholder
pub const DEVEL_SUFFIXES: &[&str] = &[
    "-git", "-svn", "-hg", "-bzr", "-cvs", "-darcs", "-fossil",
];

/// Behaviour switches selected on the command line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// Resolve VCS package versions from their sources
    pub devel: bool,
    /// Treat every requested package as outdated
    pub force: bool,
    /// Never offer to edit PKGBUILDs
    pub noedit: bool,
    /// Answer yes to every prompt
    pub noconfirm: bool,
}

impl Flags {
    pub fn new(build: BuildFlags, noconfirm: bool) -> Self {
        Self {
            devel: build.devel,
            force: build.force,
            noedit: build.noedit,
            noconfirm,
        }
    }
}

/// Immutable configuration for one invocation
#[derive(Debug, Clone)]
pub struct Config {
    /// Root holding mirrors, packages and the repository database
    pub cache_dir: PathBuf,
    /// Repository database name, also the prefix of its files
    pub db_name: String,
    /// Base URL of the RPC interface, e.g. `https://aur.archlinux.org/rpc/v5`
    pub rpc_url: String,
    /// Base URL package bases are cloned from
    pub git_url: String,
    /// Program used to review PKGBUILDs
    pub editor: String,
    /// Scratch directory for makepkg's `BUILDDIR`
    pub build_dir: PathBuf,
    pub flags: Flags,
}

impl Config {
    /// Build the configuration for a command from the parsed CLI
    pub fn from_cli(cli: &Cli, build: BuildFlags) -> Result<Self> {
        let cache_dir = match &cli.cache_dir {
            Some(dir) => dir.clone(),
            None => default_cache_dir()?,
        };

        if cli.db.is_empty() || cli.db.contains('/') {
            return Err(AurError::ConfigInvalid {
                message: format!("invalid repository name '{}'", cli.db),
            });
        }

        Ok(Self {
            cache_dir,
            db_name: cli.db.clone(),
            rpc_url: cli.rpc_url.trim_end_matches('/').to_string(),
            git_url: cli.git_url.trim_end_matches('/').to_string(),
            editor: editor_from_env(),
            build_dir: temp_dir_base(),
            flags: Flags::new(build, cli.noconfirm),
        })
    }

    /// Path of the repository database archive
    pub fn db_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.db.tar.gz", self.db_name))
    }

    /// Path of the git mirror for a package base
    pub fn mirror_path(&self, base: &str) -> PathBuf {
        self.cache_dir.join(base)
    }

    /// URL a package base is cloned from
    pub fn clone_url(&self, base: &str) -> String {
        format!("{}/{}.git", self.git_url, base)
    }

    /// Whether a cache entry belongs to the repository database itself
    pub fn is_db_file(&self, file_name: &str) -> bool {
        file_name
            .strip_prefix(self.db_name.as_str())
            .is_some_and(|rest| rest.starts_with('.'))
    }
}

/// Whether a package name marks a VCS package
pub fn is_devel(name: &str) -> bool {
    DEVEL_SUFFIXES.iter().any(|suffix| name.ends_with(suffix))
}

/// Platform cache directory with an `aur` subdirectory
fn default_cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().ok_or_else(|| AurError::ConfigInvalid {
        message: "Could not determine cache directory, set AUR_CACHE_DIR".to_string(),
    })?;

    Ok(base.join(CACHE_DIR))
}

fn editor_from_env() -> String {
    ["VISUAL", "EDITOR"]
        .iter()
        .filter_map(|key| env::var(key).ok())
        .find(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Returns an absolute directory for scratch builds.
/// A relative `TMPDIR` would make makepkg build below the mirror, so fall back to `/tmp`.
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        Path::new("/tmp").to_path_buf()
    }
}
