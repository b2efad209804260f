//! ChatPulse - content analytics for text and chat channels.
//!
//! [`analysis::analyze`] scores a single text; [`analysis::summarize`]
//! reduces a channel of analyzed messages to filtered statistics. The
//! remaining modules load message exports, fan analysis out over them and
//! render reports.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;

pub use analysis::{analyze, summarize};
pub use models::{AnalysisResult, ChannelSummary, Filters, Message};
