//! Clean command

use crate::cache::{self, SweepReport};
use crate::cli::{BuildFlags, Cli};
use crate::config::Config;
use crate::error::Result;
use crate::git::Git;
use crate::ui::{self, output::format_size};

use super::pipeline::open_db;

pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli, BuildFlags::default())?;
    let db = open_db(&config)?;
    let report = cache::sweep(&config, db.as_ref(), &Git)?;
    ui::action(&summary(&report));
    Ok(())
}

fn summary(report: &SweepReport) -> String {
    format!(
        "Cleaned {} mirror{}, removed {} entr{} ({} freed)",
        report.cleaned,
        if report.cleaned == 1 { "" } else { "s" },
        report.removed,
        if report.removed == 1 { "y" } else { "ies" },
        format_size(report.freed_bytes)
    )
}
