//! Running external programs
//!
//! Every invocation blocks until the program exits. A non-zero exit status is
//! an error; callers that give an exit code a meaning handle the status
//! themselves.

use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{Result, command};

/// Program name of a command for messages
pub fn program_name(cmd: &Command) -> String {
    cmd.get_program().to_string_lossy().into_owned()
}

fn describe(cmd: &Command) -> String {
    let mut line = program_name(cmd);
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Run a command attached to the terminal
pub fn run(cmd: &mut Command) -> Result<()> {
    let program = program_name(cmd);
    debug!(command = %describe(cmd), dir = ?cmd.get_current_dir(), "running");

    let status = cmd
        .status()
        .map_err(|e| command::spawn_failed(&program, e))?;
    if !status.success() {
        return Err(command::failed(program, status.to_string()));
    }
    Ok(())
}

/// Run a command and capture its standard output; stderr stays on the terminal
pub fn output(cmd: &mut Command) -> Result<String> {
    let program = program_name(cmd);
    debug!(command = %describe(cmd), dir = ?cmd.get_current_dir(), "capturing");

    let output = cmd
        .stdin(Stdio::null())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|e| command::spawn_failed(&program, e))?;
    if !output.status.success() {
        return Err(command::failed(program, output.status.to_string()));
    }
    String::from_utf8(output.stdout)
        .map_err(|e| command::bad_output(program, format!("output is not UTF-8: {e}")))
}
