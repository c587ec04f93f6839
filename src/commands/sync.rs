//! Sync and update commands

use crate::cli::{Cli, SyncArgs, UpdateArgs};
use crate::config::Config;
use crate::error::Result;
use crate::orchestrator::Mode;
use crate::registry::AurClient;

use super::pipeline::{SystemTools, open_db, reconcile_and_build};

/// Build the named packages, cloning their mirrors on first use
pub fn run_sync(cli: &Cli, args: &SyncArgs) -> Result<()> {
    let config = Config::from_cli(cli, args.flags)?;
    let registry = AurClient::new(&config.rpc_url);
    let db = open_db(&config)?;
    let system = SystemTools::new(&config);

    reconcile_and_build(
        &config,
        &registry,
        db.as_ref(),
        system.tools(),
        Mode::Sync,
        &args.names,
    )
}

/// Rebuild every outdated package of the repository
pub fn run_update(cli: &Cli, args: &UpdateArgs) -> Result<()> {
    let config = Config::from_cli(cli, args.flags)?;
    let db = open_db(&config)?;
    let names = db.names()?;
    if names.is_empty() {
        println!("there is nothing to do");
        return Ok(());
    }

    let registry = AurClient::new(&config.rpc_url);
    let system = SystemTools::new(&config);
    reconcile_and_build(
        &config,
        &registry,
        db.as_ref(),
        system.tools(),
        Mode::Update,
        &names,
    )
}
