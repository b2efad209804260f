//! Message ingestion and batch analysis.
//!
//! This module stands in for the chat platform: it loads exported channel
//! messages from disk and fans the analyzer out over them.

pub mod batch;
pub mod loader;

pub use batch::{analyze_batch, analyze_batch_sync};
pub use loader::{IngestOptions, MessageLoader};
