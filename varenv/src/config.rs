//! The config builder: from a raw [`Document`] to a fully resolved
//! [`Config`].
//!
//! Each declared variable is handled independently: a scalar is broadcast
//! to every environment, an array goes through value-set building and
//! symbol resolution, and anything else is rejected. Errors from different
//! variables accumulate; one variable's failure never stops the others.

use std::collections::BTreeMap;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::output::FormatVariable;
use crate::resolve::{build_value_set, resolve_values};
use crate::value::Value;

/// The fully resolved definition: every (variable, environment) pair holds
/// a concrete, symbol-free value.
///
/// Constructed once by [`build_config`] or [`parse`] and immutable
/// thereafter. For every variable, the environment key set equals exactly
/// the declared environment list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    environments: Vec<String>,
    variables: BTreeMap<String, BTreeMap<String, Value>>,
}

impl Config {
    /// The declared environment names, in declaration order.
    #[must_use]
    pub fn environments(&self) -> &[String] {
        &self.environments
    }

    /// The resolved variables: variable name to per-environment values.
    #[must_use]
    pub fn variables(&self) -> &BTreeMap<String, BTreeMap<String, Value>> {
        &self.variables
    }

    /// Whether `name` is a declared environment.
    #[must_use]
    pub fn has_environment(&self, name: &str) -> bool {
        self.environments.iter().any(|e| e == name)
    }

    /// Project the name-sorted `(name, type, value)` records for one
    /// environment, ready to hand to an output formatter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownEnvironment`] if `environment` was never
    /// declared.
    pub fn format_variables(&self, environment: &str) -> Result<Vec<FormatVariable>> {
        if !self.has_environment(environment) {
            return Err(Error::UnknownEnvironment {
                name: environment.to_string(),
            });
        }
        // BTreeMap iteration already yields lexical name order.
        Ok(self
            .variables
            .iter()
            .filter_map(|(name, values)| {
                values
                    .get(environment)
                    .map(|value| FormatVariable::new(name, value.clone()))
            })
            .collect())
    }

    fn set_broadcast(&mut self, name: &str, value: Value) {
        let values = self
            .environments
            .iter()
            .map(|environment| (environment.clone(), value.clone()))
            .collect();
        self.variables.insert(name.to_string(), values);
    }
}

/// Build a [`Config`] from a decoded document, accumulating every
/// per-variable error.
///
/// The returned config is partial whenever the error list is non-empty;
/// callers must treat any errors as "do not use this config".
#[must_use]
pub fn build_config(document: &Document) -> (Config, Vec<Error>) {
    let mut errors = document.validate_environments();
    let mut config = Config {
        environments: document.environments.clone(),
        variables: BTreeMap::new(),
    };

    for (name, raw) in &document.variables {
        if raw.is_scalar() {
            config.set_broadcast(name, raw.clone());
        } else if let Value::Sequence(items) = raw {
            let (values, value_errors) = build_value_set(&config.environments, items);
            if value_errors.is_empty() {
                match resolve_values(&values) {
                    Ok(resolved) => {
                        log::debug!("variable {name}: resolved {} values", resolved.len());
                        config.variables.insert(name.clone(), resolved);
                    }
                    Err(_) => errors.push(Error::CyclicSymbols {
                        variable: name.clone(),
                    }),
                }
            } else {
                errors.extend(value_errors.into_iter().map(|e| e.for_variable(name)));
            }
        } else {
            errors.push(Error::UnsupportedVariable { name: name.clone() });
        }
    }

    (config, errors)
}

/// Decode and resolve a definition document from YAML source.
///
/// # Errors
///
/// A decode failure is returned as a single fatal error; otherwise every
/// accumulated build error is returned and the partial config is dropped.
///
/// # Examples
///
/// ```
/// let config = varenv::parse(
///     "environments: [dev, prod]\nvariables:\n  DEBUG: true\n",
/// )
/// .unwrap();
/// assert_eq!(config.environments().len(), 2);
/// ```
pub fn parse(source: &str) -> std::result::Result<Config, Vec<Error>> {
    let document = Document::parse(source).map_err(|e| vec![e])?;
    let (config, errors) = build_config(&document);
    if errors.is_empty() {
        Ok(config)
    } else {
        Err(errors)
    }
}
