//! Raw definition-document loading.
//!
//! A [`Document`] is the decoded but unresolved shape of a definition file:
//! the ordered environment list and the raw value tree per variable. It is
//! produced by serde_yaml and consumed by [`crate::config::build_config`].

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::value::Value;

/// The decoded, unresolved definition document.
///
/// # Examples
///
/// ```
/// use varenv::Document;
///
/// let document = Document::parse(
///     "environments: [dev, prod]\nvariables:\n  DEBUG: true\n",
/// )
/// .unwrap();
/// assert_eq!(document.environments.len(), 2);
/// assert_eq!(document.variables.len(), 1);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Document {
    /// Declared environment names, in declaration order.
    #[serde(default)]
    pub environments: Vec<String>,

    /// Raw variable declarations, keyed by variable name.
    #[serde(default)]
    pub variables: BTreeMap<String, Value>,
}

impl Document {
    /// Decode a definition document from YAML source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the source is not valid YAML or does
    /// not match the document grammar (including non-string mapping keys).
    pub fn parse(source: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load and decode a definition document from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or
    /// [`Error::Decode`] if its contents cannot be decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::parse(&source)
    }

    /// Validate the declared environment names.
    ///
    /// Names must be non-empty and unique; one error is reported per
    /// offending name.
    #[must_use]
    pub fn validate_environments(&self) -> Vec<Error> {
        let mut errors = Vec::new();
        let mut seen = BTreeSet::new();
        for name in &self.environments {
            if name.is_empty() {
                errors.push(Error::EmptyEnvironmentName);
            } else if !seen.insert(name.as_str()) {
                errors.push(Error::DuplicateEnvironment { name: name.clone() });
            }
        }
        errors
    }
}
