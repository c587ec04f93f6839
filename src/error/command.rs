//! External process errors

use super::AurError;

/// Creates an error for a process that exited unsuccessfully
pub fn failed(program: impl Into<String>, status: impl Into<String>) -> AurError {
    AurError::CommandFailed {
        program: program.into(),
        status: status.into(),
    }
}

/// Creates an error for a process that could not be started
pub fn spawn_failed(program: impl Into<String>, reason: impl std::fmt::Display) -> AurError {
    AurError::CommandSpawn {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates an error for output a process produced that cannot be parsed
pub fn bad_output(program: impl Into<String>, reason: impl Into<String>) -> AurError {
    AurError::CommandOutput {
        program: program.into(),
        reason: reason.into(),
    }
}
