//! Two topic extraction strategies live here and are deliberately kept apart.
//!
//! [`leading_tokens`] is the coarse "first few words" heuristic applied to
//! already-scored articles. [`frequent_keywords`] ranks stop-word-filtered
//! words by frequency and is meant for raw fetched text. Callers pick one
//! explicitly through [`TopicStrategy`].

use std::collections::{BTreeSet, HashMap};

pub const LEADING_TOPIC_COUNT: usize = 5;
pub const DEFAULT_KEYWORD_COUNT: usize = 5;
pub const MIN_KEYWORD_CHARS: usize = 4;

const STOP_WORDS: [&str; 9] = [
    "the", "and", "with", "from", "this", "that", "said", "will", "have",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TopicStrategy {
    /// First five lower-cased whitespace tokens.
    #[default]
    LeadingTokens,
    /// Top five keywords by frequency.
    KeywordFrequency,
}

impl TopicStrategy {
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        match self {
            TopicStrategy::LeadingTokens => leading_tokens(text),
            TopicStrategy::KeywordFrequency => frequent_keywords(text, DEFAULT_KEYWORD_COUNT)
                .into_iter()
                .collect(),
        }
    }
}

pub fn leading_tokens(text: &str) -> BTreeSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .take(LEADING_TOPIC_COUNT)
        .map(str::to_string)
        .collect()
}

/// Most frequent word tokens of at least four characters, ties kept in first-seen order.
pub fn frequent_keywords(text: &str, limit: usize) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    let words = lowered
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|word| word.chars().count() >= MIN_KEYWORD_CHARS)
        .filter(|word| !STOP_WORDS.contains(word));

    for word in words {
        match positions.get(word) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // stable sort keeps first-seen order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(limit)
        .map(|(word, _)| word.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_leading_tokens_takes_first_five() {
        let topics = leading_tokens("Tesla Shares Jump After Strong Delivery Numbers");
        assert_eq!(topics, set(&["tesla", "shares", "jump", "after", "strong"]));
    }

    #[test]
    fn test_leading_tokens_short_and_empty_text() {
        assert!(leading_tokens("").is_empty());
        assert!(leading_tokens("   ").is_empty());
        assert_eq!(leading_tokens("Up up UP"), set(&["up"]));
    }

    #[test]
    fn test_frequent_keywords_ranking() {
        let text = "Battery plant expands. The battery plant hires; battery output grows with demand.";
        let keywords = frequent_keywords(text, 3);
        assert_eq!(keywords, vec!["battery", "plant", "expands"]);
    }

    #[test]
    fn test_frequent_keywords_filters_stop_words_and_short_words() {
        let keywords = frequent_keywords("This said that will have from with the and car", 5);
        assert!(keywords.is_empty());
        assert!(frequent_keywords("", 5).is_empty());
    }

    #[test]
    fn test_strategies_differ() {
        let text = "Market news: market rally lifts market sentiment";
        assert_eq!(
            TopicStrategy::LeadingTokens.extract(text),
            set(&["market", "news:", "rally", "lifts"])
        );
        assert_eq!(
            TopicStrategy::KeywordFrequency.extract(text),
            set(&["market", "news", "rally", "lifts", "sentiment"])
        );
    }
}
