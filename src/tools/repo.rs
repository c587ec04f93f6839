//! repo-add / repo-remove wrapper

use std::path::PathBuf;
use std::process::Command;

use super::{Archive, process};
use crate::error::Result;

/// The repository database archive at a fixed path
#[derive(Debug, Clone)]
pub struct RepoArchive {
    db_path: PathBuf,
}

impl RepoArchive {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn add_command(&self, packages: &[PathBuf]) -> Command {
        let mut cmd = Command::new("repo-add");
        // --remove deletes the superseded package files from the cache
        cmd.arg("--remove").arg(&self.db_path).args(packages);
        cmd
    }

    fn remove_command(&self, names: &[String]) -> Command {
        let mut cmd = Command::new("repo-remove");
        cmd.arg(&self.db_path).args(names);
        cmd
    }
}

impl Archive for RepoArchive {
    fn add(&self, packages: &[PathBuf]) -> Result<()> {
        if packages.is_empty() {
            return Ok(());
        }
        process::run(&mut self.add_command(packages))
    }

    fn remove(&self, names: &[String]) -> Result<()> {
        if names.is_empty() {
            return Ok(());
        }
        process::run(&mut self.remove_command(names))
    }
}
