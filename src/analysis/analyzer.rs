//! Single-text analysis.
//!
//! [`analyze`] turns any string into an [`AnalysisResult`]: lexicon
//! sentiment, single-document TF-IDF keywords, a length-based readability
//! estimate and a rule-based emotion profile. It never fails; empty or
//! degenerate input produces zeroed counts.

use crate::analysis::{lexicon, stopwords};
use crate::models::{AnalysisResult, Emotions, Keyword, Readability, Sentiment};
use std::collections::HashMap;

/// Keywords must be longer than this many characters.
const KEYWORD_MIN_CHARS: usize = 3;

/// Maximum number of keywords kept per text.
pub const MAX_KEYWORDS: usize = 20;

const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

/// Analyze a single text.
pub fn analyze(text: &str) -> AnalysisResult {
    let tokens = tokenize(text);
    let sentiment = score_sentiment(&tokens);
    let emotions = estimate_emotions(&sentiment);

    AnalysisResult {
        keywords: extract_keywords(&tokens),
        readability: measure_readability(text, &tokens),
        sentiment,
        emotions,
    }
}

/// Split text into lowercase word tokens.
///
/// A word is a run of alphanumeric characters and apostrophes; apostrophes
/// at either end are trimmed off.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|word| word.trim_matches('\''))
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

/// Sum lexicon weights over the tokens.
pub fn score_sentiment(tokens: &[String]) -> Sentiment {
    let mut sentiment = Sentiment::default();

    for token in tokens {
        let Some(weight) = lexicon::polarity(token) else {
            continue;
        };
        sentiment.score += weight;
        if weight > 0 {
            sentiment.positive_words.push(token.clone());
        } else if weight < 0 {
            sentiment.negative_words.push(token.clone());
        }
    }

    if !tokens.is_empty() {
        sentiment.comparative = sentiment.score as f64 / tokens.len() as f64;
    }

    sentiment
}

/// Inverse document frequency of a term in a one-document corpus.
///
/// Uses `1 + ln(N / (1 + df))` with `N = df = 1`, so every term gets the
/// same factor and weights stay proportional to term counts.
fn single_document_idf() -> f64 {
    1.0 + (1.0_f64 / 2.0).ln()
}

/// Weight the terms of a single document and keep the top [`MAX_KEYWORDS`].
///
/// Stopwords are dropped before counting.
pub fn extract_keywords(tokens: &[String]) -> Vec<Keyword> {
    // Terms in first-occurrence order, with their counts.
    let mut terms: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        if token.chars().count() <= KEYWORD_MIN_CHARS || stopwords::is_stopword(token) {
            continue;
        }
        match index.get(token.as_str()) {
            Some(&i) => terms[i].1 += 1,
            None => {
                index.insert(token.as_str(), terms.len());
                terms.push((token.as_str(), 1));
            }
        }
    }

    let idf = single_document_idf();
    let mut keywords: Vec<Keyword> = terms
        .into_iter()
        .map(|(term, count)| Keyword::new(term, count as f64 * idf))
        .collect();

    // Stable sort keeps first-occurrence order among equal weights.
    keywords.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    keywords.truncate(MAX_KEYWORDS);
    keywords
}

/// Count non-blank segments between `.`, `!` and `?`; never less than 1.
pub fn count_sentences(text: &str) -> usize {
    text.split(SENTENCE_DELIMITERS)
        .filter(|segment| !segment.trim().is_empty())
        .count()
        .max(1)
}

/// Estimate syllables as a third of the word length, at least one per word.
pub fn estimate_syllables(word: &str) -> usize {
    let estimate = (word.chars().count() as f64 / 3.0).round() as usize;
    estimate.max(1)
}

pub fn measure_readability(text: &str, tokens: &[String]) -> Readability {
    let word_count = tokens.len();
    let sentence_count = count_sentences(text);
    let syllable_estimate: usize = tokens.iter().map(|w| estimate_syllables(w)).sum();

    let (words_per_sentence, syllables_per_word) = if word_count == 0 {
        (0.0, 0.0)
    } else {
        (
            word_count as f64 / sentence_count as f64,
            syllable_estimate as f64 / word_count as f64,
        )
    };

    let grade_level = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;

    Readability {
        word_count,
        sentence_count,
        syllable_estimate,
        grade_level: round_to_tenth(grade_level),
    }
}

/// Map matched sentiment words onto a rough emotion distribution.
///
/// `neutral` is `100 - 2 * joy` rather than the remainder of the other
/// dimensions, and the four percentages are rounded independently.
pub fn estimate_emotions(sentiment: &Sentiment) -> Emotions {
    if sentiment.score == 0 {
        return Emotions::neutral_only();
    }

    let joy = sentiment.positive_words.len() as f64;
    let negatives = sentiment.negative_words.len() as f64;
    let sadness = negatives * 0.5;
    let anger = negatives * 0.3;
    let fear = negatives * 0.2;

    // 0.1 floor keeps the denominator positive
    let total = joy + sadness + anger + fear + 0.1;
    let percent = |value: f64| (value / total * 100.0).round() as u32;

    let joy_pct = percent(joy);

    Emotions {
        joy: joy_pct,
        sadness: percent(sadness),
        anger: percent(anger),
        fear: percent(fear),
        neutral: 100u32.saturating_sub(joy_pct * 2),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
