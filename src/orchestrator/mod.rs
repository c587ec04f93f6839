//! Build unit orchestration
//!
//! One confirmation covers the whole batch. Each unit then goes through:
//!
//! ```text
//! sync:    [clone if no mirror] ─┐
//!                                ├─> review/edit ─> build ─> publish
//! update:  fetch ─> diff? ─> merge
//! ```
//!
//! Units are processed one after another in base order. The first failing
//! step aborts the run; units published before it stay published.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{AurError, Result};
use crate::git::Vcs;
use crate::reconcile::BuildUnit;
use crate::tools::{Archive, Builder, Editor};
use crate::ui::{self, Decide};

/// Recipe file offered for review
const PKGBUILD: &str = "PKGBUILD";

/// Which entry point a run came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Explicit targets; mirrors are created when missing
    Sync,
    /// Every package in the repository; mirrors are fetched and merged
    Update,
}

impl Mode {
    fn prompt(self) -> &'static str {
        match self {
            Mode::Sync => "Proceed with synchronising?",
            Mode::Update => "Proceed with updating?",
        }
    }

    fn verb(self) -> &'static str {
        match self {
            Mode::Sync => "Syncing",
            Mode::Update => "Updating",
        }
    }
}

/// Collaborators a run drives
pub struct Tools<'a> {
    pub vcs: &'a dyn Vcs,
    pub builder: &'a dyn Builder,
    pub archive: &'a dyn Archive,
    pub editor: &'a dyn Editor,
    pub decide: &'a dyn Decide,
}

pub struct Orchestrator<'a> {
    config: &'a Config,
    tools: Tools<'a>,
}

impl<'a> Orchestrator<'a> {
    pub fn new(config: &'a Config, tools: Tools<'a>) -> Self {
        Self { config, tools }
    }

    /// Confirm once, then fetch, review, build and publish every unit
    ///
    /// Declining returns [`AurError::Declined`] before anything is touched.
    pub fn run(&self, mode: Mode, units: &[BuildUnit]) -> Result<()> {
        if !self.tools.decide.confirm(mode.prompt())? {
            return Err(AurError::Declined);
        }

        fs::create_dir_all(&self.config.cache_dir)?;

        for unit in units {
            ui::action(&format!("{}: {}", mode.verb(), unit.base));
            debug!(base = %unit.base, packages = ?unit.packages, "build unit");
            let mirror = self.config.mirror_path(&unit.base);

            match mode {
                Mode::Sync => self.ensure_mirror(&unit.base, &mirror)?,
                Mode::Update => self.refresh_mirror(&unit.base, &mirror)?,
            }
            self.review(&mirror)?;
            self.build(unit, &mirror)?;
        }
        Ok(())
    }

    fn ensure_mirror(&self, base: &str, mirror: &Path) -> Result<()> {
        if mirror.exists() {
            debug!(base, "mirror present");
            return Ok(());
        }
        self.tools
            .vcs
            .clone_mirror(&self.config.clone_url(base), mirror)
    }

    fn refresh_mirror(&self, base: &str, mirror: &Path) -> Result<()> {
        if !mirror.exists() {
            // A package added to the repository by other means has no mirror yet
            ui::warning(&format!("no mirror for {base}, cloning it"));
            return self.ensure_mirror(base, mirror);
        }

        let vcs = self.tools.vcs;
        vcs.fetch(mirror)?;
        if vcs.differs(mirror)? && self.tools.decide.confirm("Show diff?")? {
            vcs.show_diff(mirror)?;
        }
        vcs.merge(mirror)
    }

    fn review(&self, mirror: &Path) -> Result<()> {
        if self.config.flags.noedit {
            return Ok(());
        }
        if self.tools.decide.confirm("Edit PKGBUILD?")? {
            self.tools.editor.edit(&mirror.join(PKGBUILD))?;
        }
        Ok(())
    }

    fn build(&self, unit: &BuildUnit, mirror: &Path) -> Result<()> {
        let packages = self.tools.builder.build(mirror)?;
        info!(base = %unit.base, packages = packages.len(), "built");
        self.tools.archive.add(&packages)
    }
}
