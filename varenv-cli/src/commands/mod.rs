//! CLI command implementations.
//!
//! One module per command:
//! - `print`: Resolve and print variables for one environment
//! - `validate`: Check a definition file and report every error
//! - `environments`: List the declared environments
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod environments;
pub mod print;
pub mod validate;

pub use completions::CompletionsCommand;
pub use environments::EnvironmentsCommand;
pub use print::PrintCommand;
pub use validate::ValidateCommand;
