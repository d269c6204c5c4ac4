//! CLI structure and command definitions.
//!
//! The main CLI structure built with clap's derive macros, including global
//! verbosity options and subcommands.

use crate::commands::{
    CompletionsCommand, EnvironmentsCommand, PrintCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};

/// Command-line tool for managing environment variables in one place.
#[derive(Parser)]
#[command(name = "varenv")]
#[command(version, about = "Manage environment variables in one place", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve and print variables for one environment
    Print(PrintCommand),

    /// Check a definition file and report every error
    Validate(ValidateCommand),

    /// List the declared environments
    Environments(EnvironmentsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
