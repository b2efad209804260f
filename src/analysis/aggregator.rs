//! Channel aggregation and statistics.
//!
//! This module reduces a collection of analyzed messages to channel-level
//! statistics under optional author/role filters. Every function works on
//! a borrowed view; the message collection is never modified, so a summary
//! can be recomputed from scratch on every filter change.

use crate::models::{
    ChannelSummary, Contributor, Emotions, FilterOptions, Filters, Keyword, Message, Mood,
};
use std::collections::{BTreeSet, HashMap};

/// Maximum number of contributors reported.
pub const MAX_CONTRIBUTORS: usize = 5;

/// Maximum number of merged keywords reported.
pub const MAX_MERGED_KEYWORDS: usize = 20;

/// Keep the messages that pass every active filter, in original order.
pub fn apply_filters<'a>(messages: &'a [Message], filters: &Filters) -> Vec<&'a Message> {
    messages.iter().filter(|m| filters.matches(m)).collect()
}

/// Summarize the messages that pass `filters`.
pub fn summarize(messages: &[Message], filters: &Filters) -> ChannelSummary {
    let filtered = apply_filters(messages, filters);

    ChannelSummary {
        filtered_count: filtered.len(),
        average_sentiment: average_sentiment(&filtered),
        top_contributors: top_contributors(&filtered, MAX_CONTRIBUTORS),
        merged_keywords: merge_keywords(&filtered, MAX_MERGED_KEYWORDS),
        averaged_emotions: average_emotions(&filtered),
    }
}

/// Mean sentiment score, 0 for no messages.
pub fn average_sentiment(messages: &[&Message]) -> f64 {
    if messages.is_empty() {
        return 0.0;
    }
    let total: i64 = messages
        .iter()
        .map(|m| i64::from(m.analysis.sentiment.score))
        .sum();
    total as f64 / messages.len() as f64
}

/// Count messages per author, busiest first.
///
/// Authors with equal counts keep the order in which they were first seen.
pub fn top_contributors(messages: &[&Message], n: usize) -> Vec<Contributor> {
    let mut contributors: Vec<Contributor> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for message in messages {
        match index.get(message.author_name.as_str()) {
            Some(&i) => contributors[i].count += 1,
            None => {
                index.insert(message.author_name.as_str(), contributors.len());
                contributors.push(Contributor {
                    name: message.author_name.clone(),
                    count: 1,
                });
            }
        }
    }

    contributors.sort_by_key(|c| std::cmp::Reverse(c.count));
    contributors.truncate(n);
    contributors
}

/// Union the keyword lists, keeping the highest weight seen for each term.
pub fn merge_keywords(messages: &[&Message], n: usize) -> Vec<Keyword> {
    let mut merged: Vec<Keyword> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for keyword in messages.iter().flat_map(|m| &m.analysis.keywords) {
        match index.get(keyword.term.as_str()) {
            Some(&i) => {
                if keyword.weight > merged[i].weight {
                    merged[i].weight = keyword.weight;
                }
            }
            None => {
                index.insert(keyword.term.as_str(), merged.len());
                merged.push(keyword.clone());
            }
        }
    }

    merged.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    merged.truncate(n);
    merged
}

/// Average each emotion dimension independently.
///
/// Dimensions are rounded one by one and are not renormalized, so they
/// need not sum to 100. No messages gives all zeros.
pub fn average_emotions(messages: &[&Message]) -> Emotions {
    if messages.is_empty() {
        return Emotions::default();
    }

    let mut totals = [0u64; 5];
    for message in messages {
        let e = &message.analysis.emotions;
        for (total, value) in totals
            .iter_mut()
            .zip([e.joy, e.sadness, e.anger, e.fear, e.neutral])
        {
            *total += u64::from(value);
        }
    }

    let count = messages.len() as f64;
    let avg = |total: u64| (total as f64 / count).round() as u32;

    Emotions {
        joy: avg(totals[0]),
        sadness: avg(totals[1]),
        anger: avg(totals[2]),
        fear: avg(totals[3]),
        neutral: avg(totals[4]),
    }
}

/// Count messages by mood.
pub fn mood_distribution(messages: &[&Message]) -> HashMap<Mood, usize> {
    let mut dist: HashMap<Mood, usize> = HashMap::new();

    for message in messages {
        *dist.entry(message.analysis.sentiment.mood()).or_default() += 1;
    }

    dist
}

/// Distinct authors and roles available for filtering.
pub fn filter_options(messages: &[Message]) -> FilterOptions {
    let mut authors: Vec<String> = Vec::new();
    let mut roles: BTreeSet<&str> = BTreeSet::new();

    for message in messages {
        if !authors.contains(&message.author_name) {
            authors.push(message.author_name.clone());
        }
        roles.extend(message.roles.iter().map(String::as_str));
    }

    FilterOptions {
        authors,
        roles: roles.into_iter().map(String::from).collect(),
    }
}

/// Identify the most negative messages (lowest score first).
pub fn most_negative_messages<'a>(messages: &[&'a Message], n: usize) -> Vec<&'a Message> {
    let mut negative: Vec<&Message> = messages
        .iter()
        .copied()
        .filter(|m| m.analysis.sentiment.score < 0)
        .collect();

    negative.sort_by_key(|m| m.analysis.sentiment.score);
    negative.truncate(n);
    negative
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AnalysisResult, Readability, Sentiment};

    fn create_test_message(author: &str, roles: &[&str], score: i32) -> Message {
        Message {
            id: String::new(),
            author_id: format!("{}-id", author),
            author_name: author.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            timestamp: None,
            content: String::new(),
            analysis: AnalysisResult {
                sentiment: Sentiment {
                    score,
                    ..Sentiment::default()
                },
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

    fn with_keywords(mut message: Message, keywords: &[(&str, f64)]) -> Message {
        message.analysis.keywords = keywords
            .iter()
            .map(|(term, weight)| Keyword::new(*term, *weight))
            .collect();
        message
    }

    fn with_emotions(mut message: Message, emotions: Emotions) -> Message {
        message.analysis.emotions = emotions;
        message
    }

    fn channel() -> Vec<Message> {
        vec![
            create_test_message("alice", &["mod"], 4),
            create_test_message("bob", &[], -2),
            create_test_message("alice", &["mod"], 1),
            create_test_message("carol", &["dev"], 0),
            create_test_message("bob", &["dev"], 3),
        ]
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let messages = channel();
        let summary = summarize(&messages, &Filters::none());

        assert_eq!(summary.filtered_count, 5);
        assert!((summary.average_sentiment - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_filters_equal_matching_filters() {
        let messages = vec![
            create_test_message("alice", &["member"], 2),
            create_test_message("alice", &["member", "mod"], -1),
        ];
        let everything = Filters::by_author("alice").with_role("member");

        assert_eq!(
            summarize(&messages, &Filters::none()),
            summarize(&messages, &everything)
        );
    }

    #[test]
    fn test_filter_by_author_and_role() {
        let messages = channel();

        let by_author = summarize(&messages, &Filters::by_author("bob"));
        assert_eq!(by_author.filtered_count, 2);
        assert!((by_author.average_sentiment - 0.5).abs() < 1e-12);

        let by_role = summarize(&messages, &Filters::by_role("dev"));
        assert_eq!(by_role.filtered_count, 2);
        assert_eq!(by_role.top_contributors[0].name, "carol");

        let both = summarize(&messages, &Filters::by_author("bob").with_role("dev"));
        assert_eq!(both.filtered_count, 1);
        assert_eq!(both.average_sentiment, 3.0);
    }

    #[test]
    fn test_summarize_does_not_mutate() {
        let messages = channel();
        let before = messages.clone();
        let _ = summarize(&messages, &Filters::by_role("mod"));
        assert_eq!(messages, before);
    }

    #[test]
    fn test_empty_result_is_zeroed() {
        let messages = channel();
        let summary = summarize(&messages, &Filters::by_author("nobody"));

        assert_eq!(summary.filtered_count, 0);
        assert_eq!(summary.average_sentiment, 0.0);
        assert!(summary.top_contributors.is_empty());
        assert!(summary.merged_keywords.is_empty());
        assert_eq!(summary.averaged_emotions, Emotions::default());
        assert_eq!(summary, ChannelSummary::default());
    }

    #[test]
    fn test_top_contributors_capped_at_five() {
        let mut messages = Vec::new();
        for (i, author) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
            for _ in 0..=i {
                messages.push(create_test_message(author, &[], 0));
            }
        }

        let summary = summarize(&messages, &Filters::none());
        let names: Vec<&str> = summary
            .top_contributors
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        let counts: Vec<usize> = summary.top_contributors.iter().map(|c| c.count).collect();

        assert_eq!(names, vec!["g", "f", "e", "d", "c"]);
        assert_eq!(counts, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn test_contributor_ties_keep_first_seen_order() {
        let messages = vec![
            create_test_message("zed", &[], 0),
            create_test_message("amy", &[], 0),
            create_test_message("amy", &[], 0),
            create_test_message("zed", &[], 0),
            create_test_message("max", &[], 0),
        ];
        let refs: Vec<&Message> = messages.iter().collect();
        let top = top_contributors(&refs, MAX_CONTRIBUTORS);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "zed");
        assert_eq!(top[1].name, "amy");
        assert_eq!(top[2].name, "max");
    }

    #[test]
    fn test_keyword_merge_takes_max() {
        let messages = vec![
            with_keywords(
                create_test_message("alice", &[], 1),
                &[("analytics", 0.4), ("channel", 0.3)],
            ),
            with_keywords(
                create_test_message("bob", &[], 1),
                &[("analytics", 0.9), ("server", 0.3)],
            ),
        ];

        let summary = summarize(&messages, &Filters::none());

        assert_eq!(summary.merged_keywords.len(), 3);
        assert_eq!(summary.merged_keywords[0], Keyword::new("analytics", 0.9));
        // Equal weights keep first-encountered order.
        assert_eq!(summary.merged_keywords[1].term, "channel");
        assert_eq!(summary.merged_keywords[2].term, "server");
    }

    #[test]
    fn test_keyword_merge_capped() {
        let keywords: Vec<(String, f64)> =
            (0..30).map(|i| (format!("term{:02}", i), i as f64)).collect();
        let borrowed: Vec<(&str, f64)> = keywords.iter().map(|(t, w)| (t.as_str(), *w)).collect();
        let messages = vec![with_keywords(create_test_message("a", &[], 0), &borrowed)];

        let summary = summarize(&messages, &Filters::none());

        assert_eq!(summary.merged_keywords.len(), MAX_MERGED_KEYWORDS);
        assert_eq!(summary.merged_keywords[0].term, "term29");
    }

    #[test]
    fn test_emotions_averaged_per_dimension() {
        let messages = vec![
            with_emotions(
                create_test_message("a", &[], 3),
                Emotions {
                    joy: 95,
                    sadness: 0,
                    anger: 0,
                    fear: 0,
                    neutral: 0,
                },
            ),
            with_emotions(
                create_test_message("b", &[], -3),
                Emotions {
                    joy: 32,
                    sadness: 32,
                    anger: 19,
                    fear: 13,
                    neutral: 36,
                },
            ),
        ];

        let summary = summarize(&messages, &Filters::none());

        // 63.5 -> 64, 9.5 -> 10, 6.5 -> 7
        assert_eq!(
            summary.averaged_emotions,
            Emotions {
                joy: 64,
                sadness: 16,
                anger: 10,
                fear: 7,
                neutral: 18,
            }
        );
    }

    #[test]
    fn test_mood_distribution() {
        let messages = channel();
        let refs: Vec<&Message> = messages.iter().collect();
        let dist = mood_distribution(&refs);

        assert_eq!(dist.get(&Mood::Positive), Some(&3));
        assert_eq!(dist.get(&Mood::Negative), Some(&1));
        assert_eq!(dist.get(&Mood::Neutral), Some(&1));
    }

    #[test]
    fn test_filter_options() {
        let options = filter_options(&channel());
        assert_eq!(options.authors, vec!["alice", "bob", "carol"]);
        assert_eq!(options.roles, vec!["dev", "mod"]);
    }

    #[test]
    fn test_most_negative_messages() {
        let messages = vec![
            create_test_message("a", &[], -1),
            create_test_message("b", &[], 5),
            create_test_message("c", &[], -4),
        ];
        let refs: Vec<&Message> = messages.iter().collect();
        let worst = most_negative_messages(&refs, 5);

        assert_eq!(worst.len(), 2);
        assert_eq!(worst[0].author_name, "c");
        assert_eq!(worst[1].author_name, "a");
    }
}
