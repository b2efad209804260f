//! Data models for the analytics pipeline.
//!
//! This module contains the value objects produced by the text analyzer,
//! the message records consumed by the aggregator, and the report
//! envelopes handed to the presentation layer. Field names serialize in
//! camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Overall mood of a sentiment score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Negative,
    Neutral,
    Positive,
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mood::Negative => write!(f, "Negative"),
            Mood::Neutral => write!(f, "Neutral"),
            Mood::Positive => write!(f, "Positive"),
        }
    }
}

impl Mood {
    /// Classifies a raw or averaged sentiment score by its sign.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Mood::Positive
        } else if score < 0.0 {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    /// Returns an emoji representation of the mood.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Negative => "🔴",
            Mood::Neutral => "⚪",
            Mood::Positive => "🟢",
        }
    }
}

/// Lexicon-based sentiment of a single text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sentiment {
    /// Sum of the polarity weights of every matched token.
    pub score: i32,
    /// `score` divided by the token count (0 for no tokens).
    pub comparative: f64,
    /// Matched tokens with a positive weight, in occurrence order.
    pub positive_words: Vec<String>,
    /// Matched tokens with a negative weight, in occurrence order.
    pub negative_words: Vec<String>,
}

impl Sentiment {
    pub fn mood(&self) -> Mood {
        Mood::from_score(self.score as f64)
    }
}

/// A weighted keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub term: String,
    pub weight: f64,
}

impl Keyword {
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

/// Length-based readability estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Readability {
    pub word_count: usize,
    /// Always at least 1.
    pub sentence_count: usize,
    pub syllable_estimate: usize,
    /// Flesch reading-ease style score, rounded to one decimal.
    pub grade_level: f64,
}

/// Heuristic emotion distribution, integer percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Emotions {
    pub joy: u32,
    pub sadness: u32,
    pub anger: u32,
    pub fear: u32,
    pub neutral: u32,
}

impl Emotions {
    /// The profile reported for texts whose sentiment score is exactly zero.
    pub fn neutral_only() -> Self {
        Self {
            neutral: 100,
            ..Self::default()
        }
    }

    /// Name and value of the strongest dimension (first wins on ties).
    pub fn dominant(&self) -> (&'static str, u32) {
        self.dimensions()
            .into_iter()
            .fold(("neutral", 0), |best, current| {
                if current.1 > best.1 {
                    current
                } else {
                    best
                }
            })
    }

    /// All dimensions in display order.
    pub fn dimensions(&self) -> [(&'static str, u32); 5] {
        [
            ("joy", self.joy),
            ("sadness", self.sadness),
            ("anger", self.anger),
            ("fear", self.fear),
            ("neutral", self.neutral),
        ]
    }
}

/// Complete analysis of one text. Derived solely from the text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// At most 20 terms, heaviest first.
    pub keywords: Vec<Keyword>,
    pub readability: Readability,
    pub emotions: Emotions,
}

/// Author of a raw chat message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub bot: bool,
}

/// A chat message as delivered by the message supplier, before analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub id: String,
    pub content: String,
    pub author: Author,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}

/// An analyzed chat message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub author_id: String,
    pub author_name: String,
    pub roles: BTreeSet<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub content: String,
    pub analysis: AnalysisResult,
}

impl Message {
    /// Attaches an analysis to the raw message it was computed from.
    pub fn from_raw(raw: RawMessage, analysis: AnalysisResult) -> Self {
        Self {
            id: raw.id,
            author_id: raw.author.id,
            author_name: raw.author.username,
            roles: raw.roles.into_iter().collect(),
            timestamp: raw.timestamp,
            content: raw.content,
            analysis,
        }
    }

    /// Message creation time, if the supplier provided a valid one.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::<Utc>::from_timestamp_millis)
    }
}

/// Optional author/role restrictions for channel aggregation.
///
/// An absent filter means "no restriction".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl Filters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by_author(name: impl Into<String>) -> Self {
        Self {
            author_name: Some(name.into()),
            role: None,
        }
    }

    pub fn by_role(role: impl Into<String>) -> Self {
        Self {
            author_name: None,
            role: Some(role.into()),
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.author_name.is_none() && self.role.is_none()
    }

    /// Returns true when the message passes every active restriction.
    pub fn matches(&self, message: &Message) -> bool {
        let author_ok = self
            .author_name
            .as_deref()
            .map_or(true, |name| message.author_name == name);
        let role_ok = self
            .role
            .as_deref()
            .map_or(true, |role| message.roles.contains(role));
        author_ok && role_ok
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.author_name, &self.role) {
            (None, None) => write!(f, "none"),
            (Some(author), None) => write!(f, "author = {}", author),
            (None, Some(role)) => write!(f, "role = {}", role),
            (Some(author), Some(role)) => write!(f, "author = {}, role = {}", author, role),
        }
    }
}

/// Message count for one author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contributor {
    pub name: String,
    pub count: usize,
}

/// Channel-level statistics over a filtered set of messages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSummary {
    pub filtered_count: usize,
    pub average_sentiment: f64,
    /// At most 5 authors, busiest first.
    pub top_contributors: Vec<Contributor>,
    /// At most 20 terms, heaviest first.
    pub merged_keywords: Vec<Keyword>,
    pub averaged_emotions: Emotions,
}

/// Distinct filter values available in a message collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Author names in first-seen order.
    pub authors: Vec<String>,
    /// Role names, sorted.
    pub roles: Vec<String>,
}

/// Metadata about a generated report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    /// Where the analyzed content came from (file path or "inline text").
    pub source: String,
    pub analysis_date: DateTime<Utc>,
    pub messages_loaded: usize,
    pub messages_analyzed: usize,
    pub duration_seconds: f64,
}

/// Report for a single analyzed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextReport {
    pub metadata: ReportMetadata,
    pub analysis: AnalysisResult,
}

/// Report for an analyzed channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChannelReport {
    pub metadata: ReportMetadata,
    pub filters: Filters,
    pub summary: ChannelSummary,
    /// Messages that passed the filters, in channel order.
    pub messages: Vec<Message>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(author: &str, roles: &[&str]) -> Message {
        Message {
            id: "1".to_string(),
            author_id: format!("{}-id", author),
            author_name: author.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            timestamp: None,
            content: String::new(),
            analysis: AnalysisResult {
                sentiment: Sentiment::default(),
                keywords: Vec::new(),
                readability: Readability {
                    word_count: 0,
                    sentence_count: 1,
                    syllable_estimate: 0,
                    grade_level: 206.8,
                },
                emotions: Emotions::neutral_only(),
            },
        }
    }

    #[test]
    fn test_mood_from_score() {
        assert_eq!(Mood::from_score(2.5), Mood::Positive);
        assert_eq!(Mood::from_score(-0.1), Mood::Negative);
        assert_eq!(Mood::from_score(0.0), Mood::Neutral);
        assert!(Mood::Negative < Mood::Positive);
    }

    #[test]
    fn test_emotions_dominant() {
        let emotions = Emotions {
            joy: 10,
            sadness: 48,
            anger: 29,
            fear: 19,
            neutral: 48,
        };
        assert_eq!(emotions.dominant(), ("sadness", 48));
        assert_eq!(Emotions::default().dominant(), ("neutral", 0));
    }

    #[test]
    fn test_filters_match() {
        let msg = message("alice", &["mod", "dev"]);

        assert!(Filters::none().matches(&msg));
        assert!(Filters::by_author("alice").matches(&msg));
        assert!(!Filters::by_author("bob").matches(&msg));
        assert!(Filters::by_role("mod").matches(&msg));
        assert!(!Filters::by_role("admin").matches(&msg));
        assert!(Filters::by_author("alice").with_role("dev").matches(&msg));
        assert!(!Filters::by_author("alice").with_role("admin").matches(&msg));
    }

    #[test]
    fn test_filters_display() {
        assert_eq!(Filters::none().to_string(), "none");
        assert_eq!(
            Filters::by_author("alice").with_role("mod").to_string(),
            "author = alice, role = mod"
        );
    }

    #[test]
    fn test_message_from_raw() {
        let raw = RawMessage {
            id: "42".to_string(),
            content: "hello".to_string(),
            author: Author {
                id: "u1".to_string(),
                username: "alice".to_string(),
                bot: false,
            },
            roles: vec!["mod".to_string(), "mod".to_string()],
            timestamp: Some(1_700_000_000_000),
        };
        let analysis = message("x", &[]).analysis;
        let msg = Message::from_raw(raw, analysis);

        assert_eq!(msg.author_name, "alice");
        assert_eq!(msg.author_id, "u1");
        assert_eq!(msg.roles.len(), 1);
        assert!(msg.created_at().is_some());
    }

    #[test]
    fn test_camel_case_serialization() {
        let summary = ChannelSummary::default();
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"filteredCount\""));
        assert!(json.contains("\"averagedEmotions\""));
        assert!(json.contains("\"topContributors\""));
    }
}
