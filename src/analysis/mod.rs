//! Analysis modules.
//!
//! The analyzer turns one text into an `AnalysisResult`; the aggregator
//! reduces many analyzed messages to a `ChannelSummary`.

pub mod aggregator;
pub mod analyzer;
pub mod lexicon;
pub mod stopwords;

pub use aggregator::*;
pub use analyzer::{analyze, tokenize};
