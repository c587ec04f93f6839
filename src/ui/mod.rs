//! Terminal presentation layer
//!
//! This module handles:
//! - Yes/no decisions at the points where a run waits for the user
//! - Styled status lines (`::` actions, `==> WARNING:` notices)
//!
//! Decisions go through the [`Decide`] trait so the orchestrator never reads
//! stdin itself. `--noconfirm` swaps in [`AssumeYes`].

pub mod output;

use inquire::Confirm;

use crate::error::Result;

pub use output::{action, warning};

/// Decision provider for confirmation gates
///
/// Empty input counts as yes for every implementation that reads input.
pub trait Decide {
    /// Ask a yes/no question
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Reads answers from the terminal
#[derive(Debug, Default)]
pub struct InteractivePrompt;

impl Decide for InteractivePrompt {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        let answer = Confirm::new(prompt)
            .with_default(true)
            .with_help_message("Press Enter to confirm, or 'n' to cancel")
            .prompt()?;
        Ok(answer)
    }
}

/// Answers yes without asking, for unattended runs
#[derive(Debug, Default)]
pub struct AssumeYes;

impl Decide for AssumeYes {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        action(&format!("{prompt} [Y/n] y"));
        Ok(true)
    }
}

/// Pick the decision provider for a run
pub fn decider(noconfirm: bool) -> Box<dyn Decide> {
    if noconfirm {
        Box::new(AssumeYes)
    } else {
        Box::new(InteractivePrompt)
    }
}
