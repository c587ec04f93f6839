//! Remove command

use crate::cli::{BuildFlags, Cli, RemoveArgs};
use crate::config::Config;
use crate::error::Result;
use crate::tools::{Archive, RepoArchive};

/// Drop the named packages from the repository database
pub fn run(cli: &Cli, args: &RemoveArgs) -> Result<()> {
    let config = Config::from_cli(cli, BuildFlags::default())?;
    RepoArchive::new(config.db_path()).remove(&args.names)
}
