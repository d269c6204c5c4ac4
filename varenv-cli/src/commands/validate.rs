//! Command to validate a definition file.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};

/// Check a definition file and report every accumulated error.
#[derive(Args)]
pub struct ValidateCommand {
    /// Definition file to validate
    #[arg(value_name = "PATH", default_value = "varenv.yaml")]
    pub file: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(&self.file)?;
        println!(
            "Definition file is valid: {} environments, {} variables",
            config.environments().len(),
            config.variables().len()
        );
        Ok(())
    }
}
