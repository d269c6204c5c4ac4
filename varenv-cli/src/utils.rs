//! Shared helpers for CLI commands.

use std::path::Path;

use crate::error::CliError;
use varenv::Config;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,
}

/// Read and resolve a definition file.
///
/// Read failures map to an I/O error; accumulated resolution errors map to
/// a definition error that prints one message per line.
pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let source = std::fs::read_to_string(path)?;
    varenv::parse(&source).map_err(CliError::Definition)
}
