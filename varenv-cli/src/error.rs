//! CLI-specific error types with exit codes.
//!
//! Wraps library errors and maps every failure mode to a stable exit code.
//! Accumulated definition errors print one per line, matching what the
//! resolution core collected.

use std::fmt;
use varenv::Error as LibError;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// One or more errors accumulated from the definition file.
    Definition(Vec<LibError>),

    /// Invalid command-line arguments.
    InvalidArguments(String),

    /// I/O error.
    Io(std::io::Error),

    /// Library error (wrapped).
    Library(LibError),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Definition file errors (semantic failure)
    /// - 4: Invalid arguments
    /// - 5: I/O error
    /// - 6: Other library error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Definition(_) => 1,
            CliError::InvalidArguments(_) => 4,
            CliError::Io(_) => 5,
            CliError::Library(_) => 6,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Definition(errors) => {
                let lines: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "{}", lines.join("\n"))
            }
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::Io(e) => write!(f, "I/O error: {e}"),
            CliError::Library(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Io(e) => Some(e),
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        CliError::Library(e)
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definition_errors_print_one_per_line() {
        let err = CliError::Definition(vec![
            LibError::InvalidSymbol,
            LibError::EmptyEnvironmentName,
        ]);
        assert_eq!(
            format!("{err}"),
            "invalid environment symbol found\nenvironment name must be non-empty"
        );
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_invalid_arguments_exit_code() {
        let err = CliError::InvalidArguments("no such environment: qa".to_string());
        assert_eq!(err.exit_code(), 4);
        assert!(format!("{err}").contains("no such environment"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CliError = io_err.into();
        assert_eq!(err.exit_code(), 5);
    }
}
