//! Command implementations for the aur CLI
//!
//! Each command builds its [`Config`](crate::config::Config), wires the real
//! collaborators and returns a `Result`; only `main` decides the exit status.

pub mod clean;
pub mod completions;
pub mod pipeline;
pub mod remove;
pub mod search;
pub mod sync;
