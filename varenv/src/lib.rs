#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # varenv
//!
//! A library for resolving per-environment variable definitions.
//!
//! A definition file declares an ordered list of environments and, per
//! variable, either a single scalar (broadcast to every environment) or a
//! positional array of per-environment values. An array element may be a
//! *symbol* — `{other_env: null}` — meaning "same value as that other
//! environment"; symbols are resolved transitively through a per-variable
//! dependency graph, with cycles rejected.
//!
//! ## Core Types
//!
//! - [`Value`], [`Number`] and [`VariableType`]: the decoded value model
//! - [`Document`]: the raw, unresolved definition
//! - [`Config`]: the fully resolved definition
//! - [`FormatVariable`] and [`OutputFormat`]: the formatting boundary
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! let source = "\
//! environments: [dev, prod]
//! variables:
//!   DEBUG: true
//!   DB_HOST: [db.local, {dev: null}]
//! ";
//!
//! let config = varenv::parse(source).unwrap();
//! let variables = config.format_variables("prod").unwrap();
//! let rendered = varenv::OutputFormat::Export
//!     .create_formatter()
//!     .format("prod", &variables);
//! assert!(rendered.contains("export DB_HOST=\"db.local\""));
//! assert!(rendered.contains("export DEBUG=true"));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolve;
pub mod symbol;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::{build_config, parse, Config};
pub use document::Document;
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{FormatVariable, OutputFormat, OutputFormatter};
pub use resolve::{build_value_set, resolve_values, EnvValue};
pub use symbol::Symbol;
pub use value::{Number, Value, VariableType};
