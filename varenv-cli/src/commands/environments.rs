//! Command to list the declared environments.

use std::path::PathBuf;

use clap::Args;

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};

/// List the declared environments in declaration order.
#[derive(Args)]
pub struct EnvironmentsCommand {
    /// Environment variables definition file
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "varenv.yaml",
        env = "VARENV_FILE"
    )]
    pub file: PathBuf,
}

impl EnvironmentsCommand {
    /// Execute the environments command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(&self.file)?;
        for environment in config.environments() {
            println!("{environment}");
        }
        Ok(())
    }
}
