//! Error types and handling for aursync
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`registry`]: AUR RPC errors
//! - [`command`]: external process errors
//! - [`git`]: mirror errors
//! - [`cache`]: cache directory errors
//!
//! Every fatal condition a command can hit ends up here. Only `main` turns an
//! error into a process exit status.

pub mod cache;
pub mod command;
pub mod git;
pub mod registry;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for aursync operations
#[derive(Error, Diagnostic, Debug)]
pub enum AurError {
    // Input errors
    #[error("target not found: {}", names.join(" "))]
    #[diagnostic(
        code(aur::input::target_not_found),
        help("Check the package names with 'aur search <term>'")
    )]
    TargetsNotFound { names: Vec<String> },

    // Registry errors
    #[error("Failed to query {url}: {reason}")]
    #[diagnostic(code(aur::registry::request_failed))]
    RegistryRequest { url: String, reason: String },

    #[error("Malformed response from {url}: {reason}")]
    #[diagnostic(code(aur::registry::decode_failed))]
    RegistryDecode { url: String, reason: String },

    #[error("AUR returned an error: {message}")]
    #[diagnostic(code(aur::registry::api_error))]
    RegistryApi { message: String },

    // External command errors
    #[error("{program} exited with {status}")]
    #[diagnostic(code(aur::command::failed))]
    CommandFailed { program: String, status: String },

    #[error("Failed to run {program}: {reason}")]
    #[diagnostic(
        code(aur::command::spawn_failed),
        help("Make sure {program} is installed and in PATH")
    )]
    CommandSpawn { program: String, reason: String },

    #[error("Unexpected output from {program}: {reason}")]
    #[diagnostic(code(aur::command::bad_output))]
    CommandOutput { program: String, reason: String },

    // Confirmation
    #[error("Operation cancelled")]
    #[diagnostic(code(aur::declined))]
    Declined,

    // Git errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(aur::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Failed to clone {url}: {reason}")]
    #[diagnostic(
        code(aur::git::clone_failed),
        help("Check that the package base exists on the AUR")
    )]
    GitCloneFailed { url: String, reason: String },

    #[error("Failed to fetch {path}: {reason}")]
    #[diagnostic(code(aur::git::fetch_failed))]
    GitFetchFailed { path: String, reason: String },

    #[error("Failed to merge upstream into {path}: {reason}")]
    #[diagnostic(
        code(aur::git::merge_failed),
        help("Resolve the mirror by hand or delete it and run 'aur sync' again")
    )]
    GitMergeFailed { path: String, reason: String },

    #[error("Failed to open mirror at '{path}': {reason}")]
    #[diagnostic(code(aur::git::open_failed))]
    GitOpenFailed { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(aur::config::invalid))]
    ConfigInvalid { message: String },

    // Package database errors
    #[error("Package database error: {message}")]
    #[diagnostic(code(aur::db::failed))]
    PackageDb { message: String },

    // Cache errors
    #[error("Cache operation failed: {message}")]
    #[diagnostic(code(aur::cache::operation_failed))]
    CacheOperationFailed { message: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(aur::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AurError {
    fn from(err: std::io::Error) -> Self {
        AurError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AurError {
    fn from(err: serde_json::Error) -> Self {
        AurError::RegistryDecode {
            url: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<git2::Error> for AurError {
    fn from(err: git2::Error) -> Self {
        AurError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

impl From<inquire::InquireError> for AurError {
    fn from(err: inquire::InquireError) -> Self {
        AurError::IoError {
            message: format!("Failed to read confirmation: {err}"),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AurError>;
