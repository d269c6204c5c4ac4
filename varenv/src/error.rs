//! Error types for the varenv library.
//!
//! Shape, reference, and cycle errors are recoverable per variable and are
//! accumulated by the config builder; decode and I/O errors are fatal and
//! stop processing immediately.

use thiserror::Error;

/// Result type alias for operations that may fail with a varenv error.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the varenv library.
#[derive(Debug, Error)]
pub enum Error {
    /// The definition file could not be read.
    #[error("unable to read definition file: {0}")]
    Io(#[from] std::io::Error),

    /// The definition file could not be decoded at all.
    #[error("{0}")]
    Decode(#[from] serde_yaml::Error),

    /// A per-environment value array has the wrong length.
    #[error("array length must be {expected}, but {actual}")]
    ArrayLength {
        /// Number of declared environments.
        expected: usize,
        /// Number of values actually supplied.
        actual: usize,
    },

    /// A mapping did not have the `{environment: null}` symbol shape.
    #[error("invalid environment symbol found")]
    InvalidSymbol,

    /// A symbol references an environment that was never declared.
    #[error("no such an environment: {{{name}}}")]
    UnknownEnvironment {
        /// The referenced environment name.
        name: String,
    },

    /// A positional value is neither a scalar nor a symbol.
    #[error("variable value must be Bool, Number, String or Array: {rendered}")]
    InvalidValue {
        /// Canonical JSON rendering of the rejected value.
        rendered: String,
    },

    /// A variable's raw value is neither a scalar nor an array.
    #[error("{name} value must be type of Number, String, Boolean, null or Array")]
    UnsupportedVariable {
        /// The variable name.
        name: String,
    },

    /// A variable's per-environment dependency graph contains a cycle.
    #[error("{variable}: Cyclic environment symbols are detected")]
    CyclicSymbols {
        /// The variable whose symbols form a cycle.
        variable: String,
    },

    /// A declared environment name is empty.
    #[error("environment name must be non-empty")]
    EmptyEnvironmentName,

    /// The same environment name is declared more than once.
    #[error("duplicate environment: {name}")]
    DuplicateEnvironment {
        /// The repeated environment name.
        name: String,
    },

    /// A value-set error attributed to one variable.
    #[error("{name}: {source}")]
    Variable {
        /// The variable the underlying error belongs to.
        name: String,
        /// The underlying error.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Attach a variable name to this error.
    #[must_use]
    pub fn for_variable(self, name: &str) -> Self {
        Self::Variable {
            name: name.to_string(),
            source: Box::new(self),
        }
    }
}
