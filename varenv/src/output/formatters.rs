//! Output dialect implementations.

use std::fmt::Write as _;

use super::{render_value, FormatVariable, OutputFormatter};

/// Formatter for shell export statements.
///
/// Emits a `# environment: <name>` header followed by one
/// `export KEY=VALUE` line per variable.
pub struct ExportFormatter;

impl OutputFormatter for ExportFormatter {
    fn format(&self, environment: &str, variables: &[FormatVariable]) -> String {
        let mut out = format!("# environment: {environment}\n");
        for variable in variables {
            let _ = writeln!(
                out,
                "export {}={}",
                variable.name(),
                render_value(variable.value())
            );
        }
        out
    }
}

/// Formatter for dotenv-style files.
///
/// Same layout as [`ExportFormatter`] without the `export` keyword.
pub struct EnvfileFormatter;

impl OutputFormatter for EnvfileFormatter {
    fn format(&self, environment: &str, variables: &[FormatVariable]) -> String {
        let mut out = format!("# environment: {environment}\n");
        for variable in variables {
            let _ = writeln!(out, "{}={}", variable.name(), render_value(variable.value()));
        }
        out
    }
}

/// Formatter for container-runtime argument lists.
///
/// Emits space-joined `-e KEY=VALUE` arguments with no header, suitable
/// for splicing into a `docker run` invocation.
pub struct DockerFormatter;

impl OutputFormatter for DockerFormatter {
    fn format(&self, _environment: &str, variables: &[FormatVariable]) -> String {
        variables
            .iter()
            .map(|variable| {
                format!("-e {}={}", variable.name(), render_value(variable.value()))
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
