//! Environment symbol detection.
//!
//! A symbol is how the definition file spells "this environment's value
//! equals environment X's value": a mapping with exactly one key whose
//! value is null, e.g. `{dev: null}`. Symbols exist only transiently during
//! resolution and never appear in a resolved [`crate::Config`].

use crate::error::{Error, Result};
use crate::value::Value;

/// A reference from one environment to another for the same variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    environment: String,
}

impl Symbol {
    /// Try to interpret a decoded value as an environment symbol.
    ///
    /// Succeeds only for a mapping with exactly one key whose value is the
    /// null sentinel; the key becomes the referenced environment name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] for any other shape: zero keys,
    /// more than one key, or a non-null value under the single key.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use varenv::symbol::Symbol;
    /// use varenv::value::Value;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("prod".to_string(), Value::Null);
    /// let symbol = Symbol::from_value(&Value::Mapping(map)).unwrap();
    /// assert_eq!(symbol.environment(), "prod");
    ///
    /// assert!(Symbol::from_value(&Value::Null).is_err());
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        if let Value::Mapping(map) = value {
            let mut entries = map.iter();
            if let (Some((name, inner)), None) = (entries.next(), entries.next()) {
                if matches!(inner, Value::Null) {
                    return Ok(Self {
                        environment: name.clone(),
                    });
                }
            }
        }
        Err(Error::InvalidSymbol)
    }

    /// The referenced environment name.
    #[must_use]
    pub fn environment(&self) -> &str {
        &self.environment
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::value::Number;

    fn mapping(entries: &[(&str, Value)]) -> Value {
        Value::Mapping(
            entries
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    #[test]
    fn test_single_null_key_is_symbol() {
        let symbol = Symbol::from_value(&mapping(&[("staging", Value::Null)])).unwrap();
        assert_eq!(symbol.environment(), "staging");
    }

    #[test]
    fn test_empty_mapping_is_not_symbol() {
        assert!(matches!(
            Symbol::from_value(&mapping(&[])),
            Err(Error::InvalidSymbol)
        ));
    }

    #[test]
    fn test_two_keys_is_not_symbol() {
        let value = mapping(&[("dev", Value::Null), ("prod", Value::Null)]);
        assert!(matches!(
            Symbol::from_value(&value),
            Err(Error::InvalidSymbol)
        ));
    }

    #[test]
    fn test_non_null_value_is_not_symbol() {
        let value = mapping(&[("dev", Value::Number(Number::Int(1)))]);
        assert!(matches!(
            Symbol::from_value(&value),
            Err(Error::InvalidSymbol)
        ));
    }

    #[test]
    fn test_scalar_is_not_symbol() {
        assert!(Symbol::from_value(&Value::Bool(true)).is_err());
        assert!(Symbol::from_value(&Value::String("dev".to_string())).is_err());
    }
}
