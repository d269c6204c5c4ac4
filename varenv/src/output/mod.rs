//! Output formatting for resolved variables.
//!
//! The resolution core hands a name-sorted sequence of [`FormatVariable`]
//! records plus the chosen environment name to one of a closed set of
//! dialect formatters: shell exports, an envfile, or container-runtime
//! `-e` arguments.

mod formatters;

use crate::value::{Value, VariableType};

pub use formatters::{DockerFormatter, EnvfileFormatter, ExportFormatter};

/// The per-environment, per-variable projection handed to a formatter.
///
/// Produced freshly for each render from [`crate::Config`]; the type tag is
/// derived from the resolved value at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatVariable {
    name: String,
    variable_type: VariableType,
    value: Value,
}

impl FormatVariable {
    /// Build the projection for one resolved value.
    #[must_use]
    pub fn new(name: &str, value: Value) -> Self {
        Self {
            name: name.to_string(),
            variable_type: value.variable_type(),
            value,
        }
    }

    /// The variable name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The structural type of the resolved value.
    #[must_use]
    pub fn variable_type(&self) -> VariableType {
        self.variable_type
    }

    /// The resolved value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}

/// Trait for rendering resolved variables into one output dialect.
pub trait OutputFormatter {
    /// Render the given variables for one environment.
    ///
    /// `variables` is expected to be name-sorted already (the
    /// [`crate::Config`] projection guarantees it), so every dialect
    /// produces deterministic output.
    fn format(&self, environment: &str, variables: &[FormatVariable]) -> String;
}

/// Available output dialects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell export statements (`export KEY=VALUE`).
    Export,
    /// Dotenv-style lines (`KEY=VALUE`).
    Envfile,
    /// Container-runtime arguments (`-e KEY=VALUE`, space-joined).
    Docker,
}

impl OutputFormat {
    /// Create the formatter for this dialect.
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export => Box::new(ExportFormatter),
            Self::Envfile => Box::new(EnvfileFormatter),
            Self::Docker => Box::new(DockerFormatter),
        }
    }
}

/// Render one resolved value for output.
///
/// Null renders as an empty value, strings render canonically quoted and
/// escaped, booleans and numbers render as their default text. Composite
/// values never survive resolution, but render as canonical JSON if one
/// ever reaches a formatter.
#[must_use]
pub fn render_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => quote(s),
        composite => composite.to_json_string(),
    }
}

/// Quote a string value with canonical double-quote escaping.
fn quote(s: &str) -> String {
    format!("{s:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Number;

    #[test]
    fn test_format_variable_derives_type() {
        let variable = FormatVariable::new("PORT", Value::Number(Number::Int(80)));
        assert_eq!(variable.name(), "PORT");
        assert_eq!(variable.variable_type(), VariableType::Number);
        assert_eq!(variable.value(), &Value::Number(Number::Int(80)));
    }

    #[test]
    fn test_render_null_is_empty() {
        assert_eq!(render_value(&Value::Null), "");
    }

    #[test]
    fn test_render_bool_and_number_unquoted() {
        assert_eq!(render_value(&Value::Bool(true)), "true");
        assert_eq!(render_value(&Value::Number(Number::Int(42))), "42");
        assert_eq!(render_value(&Value::Number(Number::Float(1.5))), "1.5");
    }

    #[test]
    fn test_render_string_quoted() {
        assert_eq!(
            render_value(&Value::String("hello".to_string())),
            "\"hello\""
        );
    }

    #[test]
    fn test_render_string_escapes_specials() {
        assert_eq!(
            render_value(&Value::String("a \"b\"".to_string())),
            "\"a \\\"b\\\"\""
        );
        assert_eq!(
            render_value(&Value::String("line\nbreak".to_string())),
            "\"line\\nbreak\""
        );
    }

    #[test]
    fn test_create_formatter_covers_all_dialects() {
        let variables = [FormatVariable::new("A", Value::Bool(true))];
        for format in [
            OutputFormat::Export,
            OutputFormat::Envfile,
            OutputFormat::Docker,
        ] {
            let rendered = format.create_formatter().format("dev", &variables);
            assert!(rendered.contains("A=true"));
        }
    }
}
