use clap::{Args, Parser};

/// Flags shared by the commands that build packages
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct BuildFlags {
    /// Check development packages against their latest sources
    #[arg(long)]
    pub devel: bool,

    /// Rebuild packages even when they are up to date
    #[arg(long)]
    pub force: bool,

    /// Don't offer to edit PKGBUILDs
    #[arg(long)]
    pub noedit: bool,
}

/// Arguments for the sync command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build and add packages:\n    aur sync paru-bin yay\n\n\
                  Rebuild a package that is already up to date:\n    aur sync --force paru-bin\n\n\
                  Skip PKGBUILD review:\n    aur sync --noedit paru-bin")]
pub struct SyncArgs {
    /// Packages to build
    #[arg(required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub flags: BuildFlags,
}

/// Arguments for the update command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Rebuild outdated packages:\n    aur update\n\n\
                  Include VCS packages:\n    aur update --devel")]
pub struct UpdateArgs {
    #[command(flatten)]
    pub flags: BuildFlags,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_sync() {
        let cli = Cli::try_parse_from(["aur", "sync", "paru-bin", "yay"]).unwrap();
        match cli.command {
            Commands::Sync(args) => {
                assert_eq!(args.names, vec!["paru-bin", "yay"]);
                assert!(!args.flags.devel);
                assert!(!args.flags.force);
                assert!(!args.flags.noedit);
            }
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_cli_parsing_sync_flags() {
        let cli =
            Cli::try_parse_from(["aur", "sync", "--force", "--noedit", "foo-git", "--devel"])
                .unwrap();
        match cli.command {
            Commands::Sync(args) => {
                assert_eq!(args.names, vec!["foo-git"]);
                assert!(args.flags.devel);
                assert!(args.flags.force);
                assert!(args.flags.noedit);
            }
            _ => panic!("Expected Sync command"),
        }
    }

    #[test]
    fn test_cli_parsing_sync_requires_names() {
        assert!(Cli::try_parse_from(["aur", "sync"]).is_err());
    }

    #[test]
    fn test_cli_parsing_update() {
        let cli = Cli::try_parse_from(["aur", "update", "--devel"]).unwrap();
        match cli.command {
            Commands::Update(args) => {
                assert!(args.flags.devel);
                assert!(!args.flags.force);
            }
            _ => panic!("Expected Update command"),
        }
    }

    #[test]
    fn test_cli_update_takes_no_names() {
        assert!(Cli::try_parse_from(["aur", "update", "foo"]).is_err());
    }
}
