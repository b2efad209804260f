//! Batch analysis of channel messages.
//!
//! Messages are analyzed independently on the blocking pool with a bounded
//! number in flight. Results are yielded in input order so aggregation sees
//! the channel as it was exported.

use crate::analysis::analyze;
use crate::models::{Message, RawMessage};
use futures::stream::{self, StreamExt};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

/// Analyze every message with at most `concurrency` analyses running.
///
/// A worker that panics is logged and its message is left out.
pub async fn analyze_batch(
    raw: Vec<RawMessage>,
    concurrency: usize,
    show_progress: bool,
) -> Vec<Message> {
    let total = raw.len();
    let concurrency = concurrency.max(1);
    debug!("Analyzing {} messages, concurrency {}", total, concurrency);

    let progress = show_progress.then(|| progress_bar(total as u64));

    let results: Vec<_> = stream::iter(raw)
        .map(|message| {
            tokio::task::spawn_blocking(move || {
                let analysis = analyze(&message.content);
                Message::from_raw(message, analysis)
            })
        })
        .buffered(concurrency)
        .inspect(|_| {
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        })
        .collect()
        .await;

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut messages = Vec::with_capacity(total);
    for (i, result) in results.into_iter().enumerate() {
        match result {
            Ok(message) => messages.push(message),
            Err(e) => warn!("Analysis of message {} failed: {}", i, e),
        }
    }

    messages
}

/// Sequential counterpart of [`analyze_batch`].
pub fn analyze_batch_sync(raw: Vec<RawMessage>) -> Vec<Message> {
    raw.into_iter()
        .map(|message| {
            let analysis = analyze(&message.content);
            Message::from_raw(message, analysis)
        })
        .collect()
}

fn progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} messages")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}
