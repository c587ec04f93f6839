//! Search command

use std::io::{self, Write};

use crate::cli::{BuildFlags, Cli, SearchArgs};
use crate::config::Config;
use crate::error::Result;
use crate::reconcile::{format_search_result, sort_search_results};
use crate::registry::{AurClient, Registry};

pub fn run(cli: &Cli, args: &SearchArgs) -> Result<()> {
    let config = Config::from_cli(cli, BuildFlags::default())?;
    let registry = AurClient::new(&config.rpc_url);
    print_results(&registry, &args.term(), &mut io::stdout().lock())
}

fn print_results(registry: &dyn Registry, term: &str, out: &mut impl Write) -> Result<()> {
    let mut results = registry.search(term)?;
    sort_search_results(&mut results);
    for pkg in &results {
        writeln!(out, "{}", format_search_result(pkg))?;
    }
    Ok(())
}
