//! Offline word-list classifier.
//!
//! Unlike hosted models, its score is always the probability of POSITIVE,
//! so the scorer's weighted title/summary combination reads as a polarity
//! scale: 1.0 is fully positive, 0.0 fully negative.

use std::collections::HashMap;

use async_trait::async_trait;
use ns_core::{Classifier, Result, SentimentLabel, SentimentScore};

const POSITIVE_WORDS: &[&str] = &[
    "beat", "beats", "boom", "boost", "boosts", "breakthrough", "bullish", "expand", "expands",
    "expansion", "gain", "gains", "growth", "grows", "improve", "improves", "innovative",
    "optimistic", "outperform", "outperforms", "profit", "profits", "rally", "rallies", "record",
    "rebound", "recovery", "rise", "rises", "soar", "soars", "strong", "success", "surge",
    "surges", "upgrade", "upgraded", "win", "wins",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bearish", "concern", "concerns", "crash", "crisis", "cut", "cuts", "decline", "declines",
    "delay", "delays", "downgrade", "downgraded", "drop", "drops", "fail", "fails", "fall",
    "falls", "fear", "fears", "fine", "fined", "fraud", "lawsuit", "layoffs", "loss", "losses",
    "miss", "misses", "plunge", "plunges", "probe", "recall", "recalls", "risk", "slump",
    "slumps", "weak", "warning",
];

const NEGATIONS: &[&str] = &[
    "not", "no", "never", "without", "hardly", "isn't", "wasn't", "don't", "doesn't", "didn't",
    "won't", "can't",
];

#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    words: HashMap<&'static str, i32>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconClassifier {
    pub fn new() -> Self {
        let mut words = HashMap::new();
        for word in POSITIVE_WORDS {
            words.insert(*word, 1);
        }
        for word in NEGATIVE_WORDS {
            words.insert(*word, -1);
        }
        Self { words }
    }

    /// Positive and negative hit counts, with a preceding negation flipping the hit.
    fn hits(&self, text: &str) -> (usize, usize) {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !(c.is_alphanumeric() || c == '\''))
            .filter(|t| !t.is_empty())
            .collect();

        let mut positive = 0;
        let mut negative = 0;
        for (i, token) in tokens.iter().enumerate() {
            let Some(&polarity) = self.words.get(token) else {
                continue;
            };
            let negated = i > 0 && NEGATIONS.contains(&tokens[i - 1]);
            if (polarity > 0) != negated {
                positive += 1;
            } else {
                negative += 1;
            }
        }
        (positive, negative)
    }

    pub fn score_text(&self, text: &str) -> SentimentScore {
        let (positive, negative) = self.hits(text);
        if positive == negative {
            return SentimentScore::neutral();
        }

        // add-one smoothing keeps a single hit away from certainty
        let balance = positive as f64 - negative as f64;
        let score = 0.5 + 0.5 * balance / (positive + negative + 1) as f64;
        let label = if score >= 0.6 {
            SentimentLabel::Positive
        } else if score <= 0.4 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        SentimentScore { label, score }
    }
}

#[async_trait]
impl Classifier for LexiconClassifier {
    fn name(&self) -> &str {
        "Lexicon"
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore> {
        Ok(self.score_text(text))
    }
}
