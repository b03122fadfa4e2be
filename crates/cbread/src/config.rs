//! Configuration loading.

use crate::cli::{Args, OutputFormat};
use camino::Utf8Path;
use serde::Deserialize;
use std::fs;
use tracing::{debug, warn};

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "cbread.json";

/// Defaults read from `cbread.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CbreadConfig {
    /// Output format used when `--output` is not given.
    pub output: Option<OutputFormat>,

    /// Print positions even without `--positions`.
    pub positions: bool,
}

impl CbreadConfig {
    /// Loads configuration from `path`.
    ///
    /// A missing file yields the defaults. A file that fails to parse is
    /// reported as a warning and also yields the defaults.
    pub fn load(path: &Utf8Path) -> Self {
        if !path.exists() {
            debug!(%path, "no config file");
            return Self::default();
        }

        match Self::parse_config(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(%path, "failed to parse config: {e}");
                Self::default()
            }
        }
    }

    fn parse_config(path: &Utf8Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content).map_err(|e| e.to_string())
    }

    /// Parses configuration from JSON text.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Effective settings after layering command-line flags over the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Output format.
    pub output: OutputFormat,
    /// Whether to print per-character positions.
    pub positions: bool,
    /// Canonical line to restrict output to.
    pub line: Option<usize>,
}

impl Settings {
    /// Resolves settings; flags win over the config file.
    pub fn resolve(args: &Args, config: &CbreadConfig) -> Self {
        Self {
            output: args.output.or(config.output).unwrap_or_default(),
            positions: args.positions || config.positions,
            line: args.line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full() {
        let config = CbreadConfig::parse(r#"{ "output": "machine", "positions": true }"#).unwrap();
        assert_eq!(
            config,
            CbreadConfig {
                output: Some(OutputFormat::Machine),
                positions: true,
            }
        );
    }

    #[test]
    fn test_parse_empty_object() {
        assert_eq!(CbreadConfig::parse("{}").unwrap(), CbreadConfig::default());
    }

    #[test]
    fn test_parse_rejects_unknown_format() {
        assert!(CbreadConfig::parse(r#"{ "output": "xml" }"#).is_err());
        assert!(CbreadConfig::parse(r#"{ "colour": true }"#).is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().join(CONFIG_FILE);
        assert_eq!(CbreadConfig::load(&path), CbreadConfig::default());
    }

    #[test]
    fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().join(CONFIG_FILE);
        fs::write(&path, r#"{ "output": "json" }"#).unwrap();
        assert_eq!(CbreadConfig::load(&path).output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_load_malformed_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8Path::from_path(dir.path()).unwrap().join(CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(CbreadConfig::load(&path), CbreadConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let config = CbreadConfig {
            output: Some(OutputFormat::Machine),
            positions: true,
        };

        let args = Args::parse_from(["cbread", "--output", "json"]);
        let settings = Settings::resolve(&args, &config);
        assert_eq!(settings.output, OutputFormat::Json);
        assert!(settings.positions);

        let args = Args::parse_from(["cbread"]);
        let settings = Settings::resolve(&args, &CbreadConfig::default());
        assert_eq!(settings.output, OutputFormat::Human);
        assert!(!settings.positions);
    }
}
