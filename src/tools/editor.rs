//! PKGBUILD review in the user's editor

use std::path::Path;
use std::process::Command;

use super::{Editor, process};
use crate::error::{AurError, Result};

/// Runs the configured editor command, which may carry its own arguments
/// (e.g. `code --wait`)
#[derive(Debug, Clone)]
pub struct SystemEditor {
    command: String,
}

impl SystemEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }

    fn command_for(&self, file: &Path) -> Result<Command> {
        let mut words = self.command.split_whitespace();
        let program = words.next().ok_or_else(|| AurError::ConfigInvalid {
            message: "editor command is empty".to_string(),
        })?;
        let mut cmd = Command::new(program);
        cmd.args(words).arg(file);
        Ok(cmd)
    }
}

impl Editor for SystemEditor {
    fn edit(&self, file: &Path) -> Result<()> {
        process::run(&mut self.command_for(file)?)
    }
}
