//! Configuration file handling.
//!
//! This module handles loading and merging configuration from
//! `.chatpulse.toml` files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = ".chatpulse.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Message ingestion settings.
    #[serde(default)]
    pub ingest: IngestConfig,

    /// Report settings.
    #[serde(default)]
    pub report: ReportConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Report output path. Reports go to stdout when unset.
    #[serde(default)]
    pub output: Option<String>,

    /// Enable verbose logging by default.
    #[serde(default)]
    pub verbose: bool,

    /// Number of messages analyzed concurrently.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            output: None,
            verbose: false,
            concurrency: default_concurrency(),
        }
    }
}

fn default_concurrency() -> usize {
    4
}

/// Message ingestion settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestConfig {
    /// Maximum number of messages analyzed per export.
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Skip messages with no text content.
    #[serde(default = "default_true")]
    pub skip_empty: bool,

    /// Skip messages written by bots.
    #[serde(default)]
    pub exclude_bots: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            limit: default_limit(),
            skip_empty: true,
            exclude_bots: false,
        }
    }
}

fn default_limit() -> usize {
    50
}

/// Report generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Include the per-message table in channel reports.
    #[serde(default = "default_true")]
    pub include_messages: bool,

    /// Characters of message content shown in the message table.
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Keywords listed in Markdown reports.
    #[serde(default = "default_top_keywords")]
    pub top_keywords: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            include_messages: true,
            preview_chars: default_preview_chars(),
            top_keywords: default_top_keywords(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_preview_chars() -> usize {
    80
}

fn default_top_keywords() -> usize {
    10
}

impl Config {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        Self::load_from_dir(Path::new("."))
    }

    /// Try to load `.chatpulse.toml` from a directory.
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_path = dir.join(CONFIG_FILE_NAME);

        if config_path.exists() {
            Ok(Some(Self::load(&config_path)?))
        } else {
            Ok(None)
        }
    }

    /// Merge this configuration with CLI arguments.
    ///
    /// CLI arguments take precedence over config file settings, but only
    /// when they were actually given.
    pub fn merge_with_args(&mut self, args: &crate::cli::Args) {
        if let Some(ref output) = args.output {
            self.general.output = Some(output.display().to_string());
        }
        if let Some(concurrency) = args.concurrency {
            self.general.concurrency = concurrency;
        }
        if let Some(limit) = args.limit {
            self.ingest.limit = limit;
        }

        // Flags always override
        if args.exclude_bots {
            self.ingest.exclude_bots = true;
        }
        if args.no_messages_table {
            self.report.include_messages = false;
        }
        if args.verbose {
            self.general.verbose = true;
        }
    }

    /// Generate a default configuration file content.
    pub fn default_toml() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_else(|_| String::new())
    }
}
