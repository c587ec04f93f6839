//! aursync - keep a local pacman repository of AUR packages up to date
//!
//! Fetches package metadata from the AUR, compares it with the packages of a
//! local repository, and rebuilds the outdated ones with makepkg before
//! publishing them with repo-add.

use clap::Parser;

mod cache;
mod cli;
mod commands;
mod config;
mod error;
mod git;
mod localdb;
mod logging;
mod orchestrator;
mod reconcile;
mod registry;
mod tools;
mod ui;

#[cfg(test)]
mod test_support;

use cli::{Cli, Commands};
use error::Result;

fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Search(args) => commands::search::run(cli, args),
        Commands::Sync(args) => commands::sync::run_sync(cli, args),
        Commands::Update(args) => commands::sync::run_update(cli, args),
        Commands::Remove(args) => commands::remove::run(cli, args),
        Commands::Clean => commands::clean::run(cli),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = dispatch(&cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
