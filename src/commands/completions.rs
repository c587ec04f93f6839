//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{AurError, Result};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(AurError::ConfigInvalid {
            message: format!(
                "unknown shell '{name}', supported shells: bash, elvish, fish, powershell, zsh"
            ),
        }),
    }
}

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;
    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "aur", &mut std::io::stdout().lock());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(shell: &str) -> CompletionsArgs {
        CompletionsArgs {
            shell: shell.to_string(),
        }
    }

    #[test]
    fn test_completions_bash() {
        assert!(run(&args("bash")).is_ok());
    }

    #[test]
    fn test_completions_zsh_mixed_case() {
        assert!(run(&args("Zsh")).is_ok());
    }

    #[test]
    fn test_completions_pwsh_alias() {
        assert_eq!(
            parse_shell("pwsh").unwrap(),
            clap_complete::Shell::PowerShell
        );
    }

    #[test]
    fn test_unknown_shell_is_error() {
        let err = run(&args("tcsh")).unwrap_err();
        assert!(matches!(err, AurError::ConfigInvalid { .. }));
        assert!(err.to_string().contains("tcsh"));
    }
}
