//! Markdown and JSON report generation.
//!
//! This module renders single-text analyses and channel summaries as
//! Markdown, or serializes any report envelope as JSON.

use crate::analysis::{mood_distribution, most_negative_messages};
use crate::config::ReportConfig;
use crate::models::{
    AnalysisResult, ChannelReport, ChannelSummary, Emotions, Filters, Keyword, Message, Mood,
    Readability, ReportMetadata, Sentiment, TextReport,
};
use anyhow::Result;
use serde::Serialize;

/// Generate the Markdown report for a single text.
pub fn generate_text_markdown(report: &TextReport, config: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str("# ChatPulse Text Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_analysis_sections(&report.analysis, config));
    output.push_str(&generate_footer());

    output
}

/// Generate the Markdown report for a channel.
pub fn generate_channel_markdown(report: &ChannelReport, config: &ReportConfig) -> String {
    let mut output = String::new();

    output.push_str("# ChatPulse Channel Report\n\n");
    output.push_str(&generate_metadata_section(&report.metadata));
    output.push_str(&generate_filters_section(&report.filters));
    output.push_str(&generate_summary_section(&report.summary, &report.messages));
    output.push_str(&generate_contributors_section(&report.summary));
    output.push_str(&generate_keywords_section(
        "Merged Keywords",
        &report.summary.merged_keywords,
        config.top_keywords,
    ));
    output.push_str(&generate_emotions_section(
        "Averaged Emotions",
        &report.summary.averaged_emotions,
    ));

    if config.include_messages {
        output.push_str(&generate_messages_section(&report.messages, config.preview_chars));
    }

    output.push_str(&generate_footer());

    output
}

/// Generate a JSON report.
pub fn generate_json_report<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(Into::into)
}

/// Generate the metadata section.
fn generate_metadata_section(metadata: &ReportMetadata) -> String {
    let mut section = String::new();

    section.push_str("## Metadata\n\n");
    section.push_str(&format!("- **Source:** {}\n", metadata.source));
    section.push_str(&format!(
        "- **Analysis Date:** {}\n",
        metadata.analysis_date.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    if metadata.messages_loaded > 0 {
        section.push_str(&format!(
            "- **Messages Loaded:** {}\n",
            metadata.messages_loaded
        ));
        section.push_str(&format!(
            "- **Messages Analyzed:** {}\n",
            metadata.messages_analyzed
        ));
    }
    section.push_str(&format!(
        "- **Analysis Duration:** {:.2}s\n",
        metadata.duration_seconds
    ));
    section.push('\n');

    section
}

/// Sections shared by every single-text analysis.
fn generate_analysis_sections(analysis: &AnalysisResult, config: &ReportConfig) -> String {
    let mut sections = String::new();

    sections.push_str(&generate_sentiment_section(&analysis.sentiment));
    sections.push_str(&generate_keywords_section(
        "Keywords",
        &analysis.keywords,
        config.top_keywords,
    ));
    sections.push_str(&generate_readability_section(&analysis.readability));
    sections.push_str(&generate_emotions_section("Emotions", &analysis.emotions));

    sections
}

fn generate_sentiment_section(sentiment: &Sentiment) -> String {
    let mut section = String::new();
    let mood = sentiment.mood();

    section.push_str("## Sentiment\n\n");
    section.push_str(&format!("- **Mood:** {} {}\n", mood.emoji(), mood));
    section.push_str(&format!("- **Score:** {}\n", sentiment.score));
    section.push_str(&format!("- **Comparative:** {:.3}\n", sentiment.comparative));
    section.push_str(&format!(
        "- **Positive Words:** {}\n",
        word_list(&sentiment.positive_words)
    ));
    section.push_str(&format!(
        "- **Negative Words:** {}\n",
        word_list(&sentiment.negative_words)
    ));
    section.push('\n');

    section
}

fn generate_keywords_section(title: &str, keywords: &[Keyword], limit: usize) -> String {
    let mut section = format!("## {}\n\n", title);

    if keywords.is_empty() {
        section.push_str("No keywords found.\n\n");
        return section;
    }

    section.push_str("| Term | Weight |\n");
    section.push_str("|:---|---:|\n");
    for keyword in keywords.iter().take(limit) {
        section.push_str(&format!("| {} | {:.3} |\n", keyword.term, keyword.weight));
    }
    if keywords.len() > limit {
        section.push_str(&format!(
            "\n*{} more not shown.*\n",
            keywords.len() - limit
        ));
    }
    section.push('\n');

    section
}

fn generate_readability_section(readability: &Readability) -> String {
    let mut section = String::new();

    section.push_str("## Readability\n\n");
    section.push_str("| Words | Sentences | Syllables (est.) | Grade Level |\n");
    section.push_str("|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {} | {} | {} | {:.1} |\n\n",
        readability.word_count,
        readability.sentence_count,
        readability.syllable_estimate,
        readability.grade_level
    ));

    section
}

fn generate_emotions_section(title: &str, emotions: &Emotions) -> String {
    let mut section = format!("## {}\n\n", title);

    section.push_str("| Joy | Sadness | Anger | Fear | Neutral |\n");
    section.push_str("|:---:|:---:|:---:|:---:|:---:|\n");
    section.push_str(&format!(
        "| {}% | {}% | {}% | {}% | {}% |\n\n",
        emotions.joy, emotions.sadness, emotions.anger, emotions.fear, emotions.neutral
    ));

    let (name, value) = emotions.dominant();
    if value > 0 {
        section.push_str(&format!("Dominant emotion: **{}** ({}%)\n\n", name, value));
    }

    section
}

fn generate_filters_section(filters: &Filters) -> String {
    let mut section = String::new();

    section.push_str("## Filters\n\n");
    if filters.is_empty() {
        section.push_str("All messages included.\n\n");
        return section;
    }
    if let Some(ref author) = filters.author_name {
        section.push_str(&format!("- **Author:** {}\n", author));
    }
    if let Some(ref role) = filters.role {
        section.push_str(&format!("- **Role:** {}\n", role));
    }
    section.push('\n');

    section
}

fn generate_summary_section(summary: &ChannelSummary, messages: &[Message]) -> String {
    let mut section = String::new();
    let mood = Mood::from_score(summary.average_sentiment);

    section.push_str("## Summary\n\n");
    section.push_str(&format!("- **Messages:** {}\n", summary.filtered_count));
    section.push_str(&format!(
        "- **Average Sentiment:** {:.2} ({} {})\n\n",
        summary.average_sentiment,
        mood.emoji(),
        mood
    ));

    let refs: Vec<&Message> = messages.iter().collect();

    let dist = mood_distribution(&refs);
    if !dist.is_empty() {
        section.push_str("### Messages by Mood\n\n");
        section.push_str("| Mood | Messages |\n");
        section.push_str("|:---|:---:|\n");
        for mood in [Mood::Positive, Mood::Neutral, Mood::Negative] {
            let count = dist.get(&mood).copied().unwrap_or(0);
            section.push_str(&format!("| {} {} | {} |\n", mood.emoji(), mood, count));
        }
        section.push('\n');
    }

    let negative = most_negative_messages(&refs, 3);
    if !negative.is_empty() {
        section.push_str("### Most Negative Messages\n\n");
        section.push_str("| Author | Score | Message |\n");
        section.push_str("|:---|:---:|:---|\n");
        for message in negative {
            section.push_str(&format!(
                "| {} | {} | {} |\n",
                message.author_name,
                message.analysis.sentiment.score,
                preview(&message.content, 60)
            ));
        }
        section.push('\n');
    }

    section
}

fn generate_contributors_section(summary: &ChannelSummary) -> String {
    let mut section = String::new();

    section.push_str("## Top Contributors\n\n");
    if summary.top_contributors.is_empty() {
        section.push_str("No messages matched the filters.\n\n");
        return section;
    }

    section.push_str("| # | Author | Messages |\n");
    section.push_str("|:---:|:---|:---:|\n");
    for (i, contributor) in summary.top_contributors.iter().enumerate() {
        section.push_str(&format!(
            "| {} | {} | {} |\n",
            i + 1,
            contributor.name,
            contributor.count
        ));
    }
    section.push('\n');

    section
}

fn generate_messages_section(messages: &[Message], preview_chars: usize) -> String {
    let mut section = String::new();

    section.push_str("## Messages\n\n");
    if messages.is_empty() {
        section.push_str("No messages to show.\n\n");
        return section;
    }

    section.push_str("| Time | Author | Score | Emotion | Message |\n");
    section.push_str("|:---|:---|:---:|:---|:---|\n");
    for message in messages {
        let time = message
            .created_at()
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        let (emotion, _) = message.analysis.emotions.dominant();

        section.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            time,
            message.author_name,
            message.analysis.sentiment.score,
            emotion,
            preview(&message.content, preview_chars)
        ));
    }
    section.push('\n');

    section
}

fn generate_footer() -> String {
    "---\n\n*Report generated by ChatPulse*\n".to_string()
}

/// Comma-separated word list, or "none".
fn word_list(words: &[String]) -> String {
    if words.is_empty() {
        "none".to_string()
    } else {
        words.join(", ")
    }
}

/// Single-line, table-safe preview of message content.
fn preview(content: &str, max_chars: usize) -> String {
    let flattened = content.split_whitespace().collect::<Vec<_>>().join(" ");
    let escaped = flattened.replace('|', "\\|");

    if escaped.chars().count() <= max_chars {
        escaped
    } else {
        let truncated: String = escaped.chars().take(max_chars).collect();
        format!("{}…", truncated.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{analyze, summarize};
    use crate::models::{Author, RawMessage};
    use chrono::Utc;

    fn metadata(loaded: usize) -> ReportMetadata {
        ReportMetadata {
            source: "fixtures/channel_export.json".to_string(),
            analysis_date: Utc::now(),
            messages_loaded: loaded,
            messages_analyzed: loaded,
            duration_seconds: 0.25,
        }
    }

    fn message(author: &str, content: &str) -> Message {
        let raw = RawMessage {
            id: String::new(),
            content: content.to_string(),
            author: Author {
                id: format!("{}-id", author),
                username: author.to_string(),
                bot: false,
            },
            roles: vec!["dev".to_string()],
            timestamp: Some(1_718_000_000_000),
        };
        let analysis = analyze(&raw.content);
        Message::from_raw(raw, analysis)
    }

    fn create_channel_report() -> ChannelReport {
        let messages = vec![
            message("alice", "I love the new dashboard, great work"),
            message("bob", "The deploy is broken | again, terrible"),
            message("alice", "Meeting notes are in the wiki"),
        ];
        let filters = Filters::by_role("dev");
        let summary = summarize(&messages, &filters);

        ChannelReport {
            metadata: metadata(3),
            filters,
            summary,
            messages,
        }
    }

    #[test]
    fn test_generate_text_markdown() {
        let report = TextReport {
            metadata: metadata(0),
            analysis: analyze("I love this great product. Shipping was slow."),
        };
        let markdown = generate_text_markdown(&report, &ReportConfig::default());

        assert!(markdown.contains("# ChatPulse Text Report"));
        assert!(markdown.contains("## Sentiment"));
        assert!(markdown.contains("- **Mood:** "));
        assert!(markdown.contains("- **Comparative:** "));
        assert!(markdown.contains("love, great"));
        assert!(markdown.contains("## Keywords"));
        assert!(markdown.contains("| product |"));
        assert!(markdown.contains("## Readability"));
        assert!(markdown.contains("## Emotions"));
        assert!(!markdown.contains("Messages Loaded"));
    }

    #[test]
    fn test_generate_channel_markdown() {
        let report = create_channel_report();
        let markdown = generate_channel_markdown(&report, &ReportConfig::default());

        assert!(markdown.contains("# ChatPulse Channel Report"));
        assert!(markdown.contains("- **Role:** dev"));
        assert!(markdown.contains("- **Messages:** 3"));
        assert!(markdown.contains("| 1 | alice | 2 |"));
        assert!(markdown.contains("## Merged Keywords"));
        assert!(markdown.contains("## Averaged Emotions"));
        assert!(markdown.contains("### Most Negative Messages"));
        assert!(markdown.contains("## Messages\n\n"));
        // Pipes in content must not break the table.
        assert!(markdown.contains("broken \\| again"));
    }

    #[test]
    fn test_channel_markdown_without_messages_table() {
        let report = create_channel_report();
        let config = ReportConfig {
            include_messages: false,
            ..ReportConfig::default()
        };
        let markdown = generate_channel_markdown(&report, &config);

        assert!(!markdown.contains("## Messages\n"));
    }

    #[test]
    fn test_empty_channel_markdown() {
        let report = ChannelReport {
            metadata: metadata(0),
            filters: Filters::by_author("nobody"),
            summary: ChannelSummary::default(),
            messages: Vec::new(),
        };
        let markdown = generate_channel_markdown(&report, &ReportConfig::default());

        assert!(markdown.contains("No messages matched the filters."));
        assert!(markdown.contains("No keywords found."));
    }

    #[test]
    fn test_keywords_section_limit() {
        let keywords: Vec<Keyword> = (0..5)
            .map(|i| Keyword::new(format!("term{}", i), 1.0))
            .collect();
        let section = generate_keywords_section("Keywords", &keywords, 2);

        assert!(section.contains("term0"));
        assert!(section.contains("term1"));
        assert!(!section.contains("term2"));
        assert!(section.contains("3 more not shown"));
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("line one\nline two", 80), "line one line two");
        assert_eq!(preview("abcdefghij", 4), "abcd…");
    }

    #[test]
    fn test_generate_json_report() {
        let report = create_channel_report();
        let json = generate_json_report(&report).unwrap();

        assert!(json.contains("\"metadata\""));
        assert!(json.contains("\"averageSentiment\""));
        assert!(json.contains("\"mergedKeywords\""));
        assert!(json.contains("\"positiveWords\""));
        assert!(json.contains("\"gradeLevel\""));
    }
}
