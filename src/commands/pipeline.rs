//! Shared reconcile-then-build flow of `sync` and `update`

use crate::config::Config;
use crate::error::Result;
use crate::git::Git;
use crate::localdb::PackageDb;
use crate::orchestrator::{Mode, Orchestrator, Tools};
use crate::reconcile::{self, Reconciler};
use crate::registry::Registry;
use crate::tools::{Makepkg, RepoArchive, SystemEditor};
use crate::ui::{self, Decide};

/// The real external tools for one run
pub struct SystemTools {
    git: Git,
    makepkg: Makepkg,
    archive: RepoArchive,
    editor: SystemEditor,
    decide: Box<dyn Decide>,
}

impl SystemTools {
    pub fn new(config: &Config) -> Self {
        Self {
            git: Git,
            makepkg: Makepkg::new(&config.cache_dir, &config.build_dir),
            archive: RepoArchive::new(config.db_path()),
            editor: SystemEditor::new(&config.editor),
            decide: ui::decider(config.flags.noconfirm),
        }
    }

    pub fn tools(&self) -> Tools<'_> {
        Tools {
            vcs: &self.git,
            builder: &self.makepkg,
            archive: &self.archive,
            editor: &self.editor,
            decide: self.decide.as_ref(),
        }
    }
}

/// Open the repository database the configuration names
#[cfg(not(feature = "alpm"))]
pub fn open_db(config: &Config) -> Result<Box<dyn PackageDb>> {
    Ok(Box::new(crate::localdb::PacmanDb::new(&config.db_name)))
}

/// Open the repository database the configuration names
#[cfg(feature = "alpm")]
pub fn open_db(config: &Config) -> Result<Box<dyn PackageDb>> {
    Ok(Box::new(crate::localdb::AlpmDb::open(&config.db_name)?))
}

/// Reconcile `names`, show the outdated table and drive the build units
///
/// An empty outdated set prints a notice and succeeds without prompting.
pub fn reconcile_and_build(
    config: &Config,
    registry: &dyn Registry,
    db: &dyn PackageDb,
    tools: Tools<'_>,
    mode: Mode,
    names: &[String],
) -> Result<()> {
    let outdated = Reconciler::new(config, registry, db, tools.builder).reconcile(names)?;
    if outdated.is_empty() {
        println!("there is nothing to do");
        return Ok(());
    }

    reconcile::print_table(&outdated);
    let units = reconcile::group_by_base(&outdated);
    Orchestrator::new(config, tools).run(mode, &units)
}
