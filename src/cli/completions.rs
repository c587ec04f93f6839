use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    aur completions bash > ~/.local/share/bash-completion/completions/aur\n\n\
                  Generate zsh completions:\n    aur completions zsh > ~/.zfunc/_aur\n\n\
                  Generate fish completions:\n    aur completions fish > ~/.config/fish/completions/aur.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
