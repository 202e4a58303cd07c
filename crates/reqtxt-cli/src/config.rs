use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Root configuration for the `reqtxt` command.
///
/// Loaded from an optional JSON file passed with `--config`. Every field has
/// a default, and explicit command-line flags take precedence.
///
/// # Examples
///
/// ```
/// use reqtxt_cli::config::{OutputFormat, ReqtxtConfig};
///
/// let json = r#"{ "loose": true, "format": "text" }"#;
///
/// let config: ReqtxtConfig = serde_json::from_str(json).unwrap();
/// assert!(config.loose);
/// assert_eq!(config.format, OutputFormat::Text);
/// assert!(config.pretty);
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct ReqtxtConfig {
    /// Skip strict-mode checks (default: false)
    #[serde(default)]
    pub loose: bool,
    /// Output format (default: json)
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output (default: true)
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for ReqtxtConfig {
    fn default() -> Self {
        Self {
            loose: false,
            format: OutputFormat::default(),
            pretty: true,
        }
    }
}

impl ReqtxtConfig {
    /// Reads configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), ?config, "Loaded configuration");
        Ok(config)
    }
}

/// How parsed records are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON array of records
    #[default]
    Json,
    /// One reconstructed requirements line per record
    Text,
}

fn default_true() -> bool {
    true
}
