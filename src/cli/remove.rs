use clap::Parser;

/// Arguments for the remove command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a package from the local repository:\n    aur remove paru-bin")]
pub struct RemoveArgs {
    /// Packages to remove from the repository database
    #[arg(required = true)]
    pub names: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_remove() {
        let cli = Cli::try_parse_from(["aur", "remove", "a", "b"]).unwrap();
        match cli.command {
            Commands::Remove(args) => assert_eq!(args.names, vec!["a", "b"]),
            _ => panic!("Expected Remove command"),
        }
    }

    #[test]
    fn test_cli_parsing_remove_requires_names() {
        assert!(Cli::try_parse_from(["aur", "remove"]).is_err());
    }
}
