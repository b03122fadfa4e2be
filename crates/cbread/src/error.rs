//! CLI error types.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

/// An error that stops a cbread run.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// The input could not be read.
    #[error("failed to read {path}")]
    #[diagnostic(code(cbread::read_input))]
    ReadInput {
        /// The path that was read (`-` for stdin).
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The rendered output could not be written.
    #[error("failed to write output")]
    #[diagnostic(code(cbread::write_output))]
    WriteOutput(#[source] std::io::Error),

    /// `--line` named a line past the end of the buffer.
    #[error("line {line} out of range")]
    #[diagnostic(
        code(cbread::line_out_of_range),
        help("the canonical buffer has {line_count} lines, numbered from 0")
    )]
    LineOutOfRange {
        /// The requested line.
        line: usize,
        /// Number of lines in the buffer.
        line_count: usize,
    },

    /// JSON output could not be produced.
    #[error("failed to encode JSON output")]
    #[diagnostic(code(cbread::json))]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = CliError::LineOutOfRange {
            line: 7,
            line_count: 3,
        };
        assert_eq!(error.to_string(), "line 7 out of range");
    }
}
