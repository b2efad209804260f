//! English stopwords excluded from keyword extraction.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const WORDS: &[&str] = &[
    "about", "above", "after", "again", "all", "also", "am", "an", "and", "another", "any",
    "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
    "but", "by", "came", "can", "cannot", "come", "could", "did", "do", "does", "doing",
    "during", "each", "few", "for", "from", "further", "get", "got", "has", "had", "he",
    "have", "her", "here", "him", "himself", "his", "how", "if", "in", "into", "is", "it",
    "its", "itself", "like", "make", "many", "me", "might", "more", "most", "much", "must",
    "my", "myself", "never", "now", "of", "on", "only", "or", "other", "our", "ours",
    "ourselves", "out", "over", "own", "said", "same", "see", "should", "since", "so", "some",
    "still", "such", "take", "than", "that", "the", "their", "theirs", "them", "themselves",
    "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
    "until", "up", "very", "was", "way", "we", "well", "were", "what", "where", "when",
    "which", "while", "who", "whom", "with", "would", "why", "you", "your", "yours",
    "yourself",
];

static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| WORDS.iter().copied().collect());

/// Returns true for common function words that carry no topic.
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token)
}
