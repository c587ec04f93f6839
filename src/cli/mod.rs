//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - sync: Sync and update command arguments (shared build flags)
//! - search: Search command arguments
//! - remove: Remove command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod remove;
pub mod search;
pub mod sync;

pub use completions::CompletionsArgs;
pub use remove::RemoveArgs;
pub use search::SearchArgs;
pub use sync::{BuildFlags, SyncArgs, UpdateArgs};

/// aur - keep a local pacman repository of AUR packages up to date
#[derive(Parser, Debug)]
#[command(
    name = "aur",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Build AUR packages into a local pacman repository",
    long_about = "aur fetches package metadata from the AUR, compares it with the packages in the \
                  local pacman repository, and rebuilds outdated packages with makepkg before \
                  publishing them with repo-add.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  aur search paru                 \x1b[90m# Search the AUR\x1b[0m\n   \
                  aur sync paru-bin               \x1b[90m# Build and add a package\x1b[0m\n   \
                  aur update --devel              \x1b[90m# Rebuild outdated packages, including VCS ones\x1b[0m\n   \
                  aur remove paru-bin             \x1b[90m# Drop a package from the repository\x1b[0m\n   \
                  aur clean                       \x1b[90m# Reclaim space in the cache\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Cache directory holding mirrors, built packages and the repository database
    #[arg(long, global = true, env = "AUR_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Name of the local repository database
    #[arg(long, global = true, env = "AUR_DB", default_value = "aur")]
    pub db: String,

    /// Base URL of the AUR RPC interface
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AUR_RPC_URL",
        default_value = "https://aur.archlinux.org/rpc/v5"
    )]
    pub rpc_url: String,

    /// Base URL package base repositories are cloned from
    #[arg(
        long,
        global = true,
        hide = true,
        env = "AUR_GIT_URL",
        default_value = "https://aur.archlinux.org"
    )]
    pub git_url: String,

    /// Answer yes to every confirmation prompt
    #[arg(long, global = true)]
    pub noconfirm: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search the AUR
    Search(SearchArgs),

    /// Build packages and add them to the local repository
    Sync(SyncArgs),

    /// Rebuild outdated packages of the local repository
    Update(UpdateArgs),

    /// Remove packages from the local repository
    Remove(RemoveArgs),

    /// Remove cache entries no longer in the local repository
    Clean,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
