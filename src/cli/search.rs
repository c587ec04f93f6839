use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Search by name and description:\n    aur search pacman\n\n\
                  Several words are searched as one phrase:\n    aur search aur helper\n\n\
                  The most popular results are printed last.")]
pub struct SearchArgs {
    /// Search term
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
}

impl SearchArgs {
    /// The words joined into the single term the registry searches for
    pub fn term(&self) -> String {
        self.words.join(" ")
    }
}
