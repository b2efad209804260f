//! Error types for loading message exports.
//!
//! The analysis core cannot fail; only reading channel data from disk can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Failed to read message export {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse message export {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Message limit must be at least 1")]
    ZeroLimit,
}

pub type Result<T> = std::result::Result<T, IngestError>;
