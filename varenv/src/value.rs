//! The decoded value model and scalar classification.
//!
//! The definition file is deserialized directly into [`Value`], a closed sum
//! type over the shapes the document grammar allows. All later stages work
//! on this type; nothing downstream ever inspects raw YAML.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A numeric scalar from the definition file.
///
/// YAML integers decode as [`Number::Int`]; anything with a fractional part
/// decodes as [`Number::Float`].
///
/// # Examples
///
/// ```
/// use varenv::value::Number;
///
/// assert_eq!(Number::Int(8080).to_string(), "8080");
/// assert_eq!(Number::Float(1.5).to_string(), "1.5");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// A signed integer.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

/// A decoded document value.
///
/// Mapping keys must be strings; a document with non-string keys is rejected
/// at decode time rather than deep inside resolution.
///
/// # Examples
///
/// ```
/// use varenv::value::Value;
///
/// let value: Value = serde_yaml::from_str("hello").unwrap();
/// assert_eq!(value, Value::String("hello".to_string()));
///
/// let value: Value = serde_yaml::from_str("[1, 2]").unwrap();
/// assert!(matches!(value, Value::Sequence(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// The null sentinel (absent value).
    Null,
    /// A boolean scalar.
    Bool(bool),
    /// A numeric scalar.
    Number(Number),
    /// A text scalar.
    String(String),
    /// A sequence of values.
    Sequence(Vec<Value>),
    /// A mapping from string keys to values.
    Mapping(BTreeMap<String, Value>),
}

/// Structural type tag of a [`Value`].
///
/// Derived from the decoded shape, never declared by the user. Composite
/// shapes (sequences and mappings) classify as [`VariableType::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    /// The null sentinel.
    Null,
    /// A boolean scalar.
    Bool,
    /// A numeric scalar.
    Number,
    /// A text scalar.
    String,
    /// A composite (sequence or mapping).
    Unknown,
}

impl fmt::Display for VariableType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "Null"),
            Self::Bool => write!(f, "Bool"),
            Self::Number => write!(f, "Number"),
            Self::String => write!(f, "String"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}

impl Value {
    /// Classify this value structurally.
    ///
    /// # Examples
    ///
    /// ```
    /// use varenv::value::{Value, VariableType};
    ///
    /// assert_eq!(Value::Null.variable_type(), VariableType::Null);
    /// assert_eq!(Value::Bool(true).variable_type(), VariableType::Bool);
    /// assert_eq!(Value::Sequence(vec![]).variable_type(), VariableType::Unknown);
    /// ```
    #[must_use]
    pub const fn variable_type(&self) -> VariableType {
        match self {
            Self::Null => VariableType::Null,
            Self::Bool(_) => VariableType::Bool,
            Self::Number(_) => VariableType::Number,
            Self::String(_) => VariableType::String,
            Self::Sequence(_) | Self::Mapping(_) => VariableType::Unknown,
        }
    }

    /// Whether this value is a scalar (anything but a composite).
    ///
    /// # Examples
    ///
    /// ```
    /// use varenv::value::Value;
    ///
    /// assert!(Value::Null.is_scalar());
    /// assert!(Value::String("x".to_string()).is_scalar());
    /// assert!(!Value::Sequence(vec![]).is_scalar());
    /// ```
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        !matches!(self.variable_type(), VariableType::Unknown)
    }

    /// Render this value as canonical JSON for diagnostics.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| String::from("null"))
    }
}
