//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation and default values.

use crate::models::Filters;
use clap::Parser;
use std::path::PathBuf;

/// ChatPulse - sentiment and content analytics for text and chat channels
///
/// Scores sentiment, extracts keywords, estimates readability and emotions
/// for a single text, or summarizes an exported channel history under
/// author/role filters. Markdown/JSON reports.
///
/// Examples:
///   chatpulse --text "I love this great product"
///   chatpulse --file notes.txt --format json
///   chatpulse --messages channel.json --role mod --output report.md
///   chatpulse --messages channel.json --author alice --fail-below 0
///   chatpulse --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Text to analyze
    #[arg(
        short,
        long,
        value_name = "TEXT",
        conflicts_with_all = ["file", "messages"]
    )]
    pub text: Option<String>,

    /// Text file to analyze as a single document
    #[arg(short, long, value_name = "FILE", conflicts_with = "messages")]
    pub file: Option<PathBuf>,

    /// JSON export of channel messages to analyze and summarize
    ///
    /// An array of {id, content, author: {id, username, bot}, roles, timestamp}.
    #[arg(short, long, value_name = "FILE")]
    pub messages: Option<PathBuf>,

    /// Only summarize messages by this author name
    #[arg(short, long, value_name = "NAME")]
    pub author: Option<String>,

    /// Only summarize messages whose author has this role
    #[arg(long, value_name = "ROLE")]
    pub role: Option<String>,

    /// Maximum number of messages taken from the export
    #[arg(long, value_name = "COUNT")]
    pub limit: Option<usize>,

    /// Skip messages written by bot accounts
    #[arg(long)]
    pub exclude_bots: bool,

    /// Leave the per-message table out of channel reports
    #[arg(long)]
    pub no_messages_table: bool,

    /// Output file path for the report (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (markdown, json)
    #[arg(long, default_value = "markdown", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Path to configuration file
    ///
    /// If not specified, looks for .chatpulse.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of messages analyzed concurrently
    #[arg(long, value_name = "NUM", env = "CHATPULSE_CONCURRENCY")]
    pub concurrency: Option<usize>,

    /// Exit with code 2 when the sentiment score is below this value
    ///
    /// Uses the text score for single texts and the average score for
    /// channels. Useful for CI checks on release notes or support channels.
    #[arg(long, value_name = "SCORE", allow_hyphen_values = true)]
    pub fail_below: Option<f64>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (minimal output)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .chatpulse.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Markdown format (default)
    #[default]
    Markdown,
    /// JSON format
    Json,
}

/// What the user asked to analyze.
#[derive(Debug, Clone, PartialEq)]
pub enum InputSource {
    Text(String),
    File(PathBuf),
    Messages(PathBuf),
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The selected input. Only meaningful after [`Args::validate`] passed.
    pub fn input(&self) -> Option<InputSource> {
        if let Some(ref text) = self.text {
            Some(InputSource::Text(text.clone()))
        } else if let Some(ref file) = self.file {
            Some(InputSource::File(file.clone()))
        } else {
            self.messages.clone().map(InputSource::Messages)
        }
    }

    /// Aggregation filters from `--author` / `--role`.
    ///
    /// Blank values count as no filter.
    pub fn filters(&self) -> Filters {
        let non_blank = |value: &Option<String>| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Filters {
            author_name: non_blank(&self.author),
            role: non_blank(&self.role),
        }
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        // Skip validation for --init-config
        if self.init_config {
            return Ok(());
        }

        if self.input().is_none() {
            return Err("One of --text, --file or --messages is required".to_string());
        }

        // Filters only make sense for channels
        if self.messages.is_none() && (self.author.is_some() || self.role.is_some()) {
            return Err("--author and --role can only be used with --messages".to_string());
        }

        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err("Limit must be at least 1".to_string());
            }
        }

        if let Some(concurrency) = self.concurrency {
            if concurrency == 0 {
                return Err("Concurrency must be at least 1".to_string());
            }
        }

        if let Some(threshold) = self.fail_below {
            if !threshold.is_finite() {
                return Err("--fail-below must be a finite number".to_string());
            }
        }

        // Check for conflicting options
        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        for path in [&self.file, &self.messages].into_iter().flatten() {
            if !path.is_file() {
                return Err(format!("Input file does not exist: {}", path.display()));
            }
        }

        Ok(())
    }

    /// Returns the log level from the flags and the `verbose` config setting.
    ///
    /// `--quiet` always wins.
    pub fn log_level(&self, config_verbose: bool) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose || config_verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
