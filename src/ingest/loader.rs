//! Message export loading.
//!
//! Reads a JSON array of raw channel messages and trims it down to the
//! batch that will be analyzed, honoring the limit, empty-content and bot
//! settings.

use crate::error::{IngestError, Result};
use crate::models::RawMessage;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options controlling which raw messages are analyzed.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Maximum number of messages taken from the export, in file order.
    pub limit: usize,
    /// Drop messages whose content is empty or whitespace.
    pub skip_empty: bool,
    /// Drop messages written by bot accounts.
    pub exclude_bots: bool,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            limit: 50,
            skip_empty: true,
            exclude_bots: false,
        }
    }
}

impl From<&crate::config::IngestConfig> for IngestOptions {
    fn from(config: &crate::config::IngestConfig) -> Self {
        Self {
            limit: config.limit,
            skip_empty: config.skip_empty,
            exclude_bots: config.exclude_bots,
        }
    }
}

/// Loader for a channel message export.
pub struct MessageLoader {
    options: IngestOptions,
    path: PathBuf,
}

impl MessageLoader {
    /// Create a new loader for the export at `path`.
    pub fn new(path: PathBuf, options: IngestOptions) -> Self {
        Self { options, path }
    }

    /// Read the export and return the messages selected for analysis.
    ///
    /// Also returns how many messages the export contained.
    pub fn load(&self) -> Result<(Vec<RawMessage>, usize)> {
        if self.options.limit == 0 {
            return Err(IngestError::ZeroLimit);
        }

        let raw = read_export(&self.path)?;
        let total = raw.len();
        info!("Loaded {} messages from {}", total, self.path.display());

        Ok((prepare(raw, &self.options), total))
    }
}

/// Parse a JSON array of raw messages.
pub fn read_export(path: &Path) -> Result<Vec<RawMessage>> {
    let content = fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_export(&content).map_err(|source| IngestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse raw messages from a JSON string.
pub fn parse_export(content: &str) -> std::result::Result<Vec<RawMessage>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Cap the batch at `limit`, then drop empty and (optionally) bot messages.
pub fn prepare(mut raw: Vec<RawMessage>, options: &IngestOptions) -> Vec<RawMessage> {
    if raw.len() > options.limit {
        debug!("Truncating {} messages to limit {}", raw.len(), options.limit);
        raw.truncate(options.limit);
    }

    let before = raw.len();
    if options.skip_empty {
        raw.retain(|m| !m.content.trim().is_empty());
        debug!("Skipped {} empty messages", before - raw.len());
    }

    let before = raw.len();
    if options.exclude_bots {
        raw.retain(|m| !m.author.bot);
        debug!("Skipped {} bot messages", before - raw.len());
    }

    raw
}
