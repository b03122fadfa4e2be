//! CLI argument parsing.

use camino::Utf8PathBuf;
use clap::{Parser, ValueEnum};
use serde::Deserialize;

/// Normalize line endings and print the canonical buffer.
#[derive(Debug, Parser)]
#[command(name = "cbread")]
#[command(version, about, long_about = None)]
pub struct Args {
    /// File to read (`-` reads stdin)
    #[arg(default_value = "-")]
    pub input: Utf8PathBuf,

    /// Output format (overrides the config file)
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Print the position of every character
    #[arg(long)]
    pub positions: bool,

    /// Only print this canonical line (0-indexed)
    #[arg(long)]
    pub line: Option<usize>,

    /// Path to a cbread.json config file
    #[arg(long)]
    pub config: Option<Utf8PathBuf>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Canonical text, or one row per character with --positions (default)
    #[default]
    Human,
    /// JSON output
    Json,
    /// Machine-readable (one `line:column:U+XXXX` row per character)
    Machine,
}

impl Args {
    /// Returns true if input comes from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.input.as_str() == "-"
    }
}
