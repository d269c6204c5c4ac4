//! Print command implementation.
//!
//! Resolves the definition file and prints the variables of one
//! environment in the selected output dialect.

use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::CliError;
use crate::utils::{load_config, GlobalOptions};
use varenv::OutputFormat;

/// Resolve and print variables for one environment.
#[derive(Args)]
pub struct PrintCommand {
    /// Environment to print
    #[arg(value_name = "ENVIRONMENT")]
    pub environment: String,

    /// Environment variables definition file
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "varenv.yaml",
        env = "VARENV_FILE"
    )]
    pub file: PathBuf,

    /// Output format of variables
    #[arg(
        short,
        long,
        value_enum,
        default_value = "export",
        ignore_case = true
    )]
    pub output: OutputFormatArg,
}

/// Output dialect selection for the print command.
#[derive(Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Shell export statements
    Export,
    /// Dotenv-style lines
    Envfile,
    /// Container-runtime `-e` arguments
    Docker,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Export => Self::Export,
            OutputFormatArg::Envfile => Self::Envfile,
            OutputFormatArg::Docker => Self::Docker,
        }
    }
}

impl PrintCommand {
    /// Execute the print command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_config(&self.file)?;

        if !config.has_environment(&self.environment) {
            return Err(CliError::InvalidArguments(format!(
                "no such environment: {}",
                self.environment
            )));
        }

        let variables = config
            .format_variables(&self.environment)
            .map_err(CliError::from)?;

        let formatter = OutputFormat::from(self.output).create_formatter();
        print!("{}", formatter.format(&self.environment, &variables));

        Ok(())
    }
}
