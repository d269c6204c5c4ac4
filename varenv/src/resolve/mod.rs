//! Per-variable value sets and symbol resolution.
//!
//! For one variable declared as an array, [`build_value_set`] pairs each
//! positional raw value with its environment and classifies it as either a
//! concrete value or a symbol reference. [`resolve_values`] then orders the
//! references through a dependency graph and substitutes until every
//! environment holds a concrete value.

pub mod graph;

#[cfg(test)]
mod proptests;

use std::collections::BTreeMap;

use crate::error::Error;
use crate::symbol::Symbol;
use crate::value::Value;

pub use graph::{CycleError, DependencyGraph};

/// One environment's slot for a variable: either a concrete value or a
/// dependency on another environment's value.
///
/// Exactly one of the two holds at construction time; after resolution
/// every environment has a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvValue {
    environment: String,
    value: Option<Value>,
    depends_on: Option<String>,
}

impl EnvValue {
    /// A slot holding a concrete value.
    #[must_use]
    pub fn concrete(environment: &str, value: Value) -> Self {
        Self {
            environment: environment.to_string(),
            value: Some(value),
            depends_on: None,
        }
    }

    /// A slot referencing another environment's value.
    #[must_use]
    pub fn reference(environment: &str, target: &str) -> Self {
        Self {
            environment: environment.to_string(),
            value: None,
            depends_on: Some(target.to_string()),
        }
    }

    /// The environment this slot belongs to.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }

    /// The concrete value, if this slot holds one.
    #[must_use]
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// The depended-upon environment, if this slot is a reference.
    #[must_use]
    pub fn depends_on(&self) -> Option<&str> {
        self.depends_on.as_deref()
    }

    /// Whether this slot is a reference.
    #[must_use]
    pub fn has_dependency(&self) -> bool {
        self.depends_on.is_some()
    }
}

/// Pair each positional raw value with its environment.
///
/// Validates the array length, the shape of every element, and that symbol
/// targets name declared environments. Errors across positions are
/// collected rather than short-circuited; callers must check for a
/// non-empty error list before trusting the returned map.
#[must_use]
pub fn build_value_set(
    environments: &[String],
    raw_values: &[Value],
) -> (BTreeMap<String, EnvValue>, Vec<Error>) {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();

    if environments.len() != raw_values.len() {
        errors.push(Error::ArrayLength {
            expected: environments.len(),
            actual: raw_values.len(),
        });
        return (values, errors);
    }

    for (environment, raw) in environments.iter().zip(raw_values) {
        if raw.is_scalar() {
            values.insert(environment.clone(), EnvValue::concrete(environment, raw.clone()));
        } else if matches!(raw, Value::Mapping(_)) {
            match Symbol::from_value(raw) {
                Ok(symbol) => {
                    if environments.iter().any(|e| e == symbol.environment()) {
                        values.insert(
                            environment.clone(),
                            EnvValue::reference(environment, symbol.environment()),
                        );
                    } else {
                        errors.push(Error::UnknownEnvironment {
                            name: symbol.environment().to_string(),
                        });
                    }
                }
                Err(err) => errors.push(err),
            }
        } else {
            errors.push(Error::InvalidValue {
                rendered: raw.to_json_string(),
            });
        }
    }

    (values, errors)
}

/// Substitute every reference with the concrete value it points to.
///
/// Builds the dependency graph, orders it topologically, seeds the output
/// with the dependency-free slots, and walks the order copying each
/// referenced value. A value set without references passes straight
/// through.
///
/// # Errors
///
/// Returns [`CycleError`] if the references form a cycle; no partial
/// output is returned in that case.
pub fn resolve_values(
    values: &BTreeMap<String, EnvValue>,
) -> Result<BTreeMap<String, Value>, CycleError> {
    let mut graph = DependencyGraph::new();
    for slot in values.values() {
        graph.add_node(slot.environment());
        if let Some(target) = slot.depends_on() {
            graph.add_edge(target, slot.environment());
        }
    }

    let order = graph.topological_sort()?;
    log::debug!(
        "resolving {} environment slots over {} edges",
        values.len(),
        graph.edge_count()
    );

    let mut output = BTreeMap::new();
    for slot in values.values() {
        if let Some(value) = slot.value() {
            output.insert(slot.environment().to_string(), value.clone());
        }
    }
    for environment in order {
        let Some(slot) = values.get(&environment) else {
            continue;
        };
        if let Some(target) = slot.depends_on() {
            if let Some(resolved) = output.get(target).cloned() {
                output.insert(environment, resolved);
            }
        }
    }

    Ok(output)
}
