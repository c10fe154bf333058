use std::fmt;
use std::sync::Arc;

use ns_core::{Article, Classifier, ScoredArticle, SentimentLabel, SentimentScore};
use tracing::{debug, warn};

pub const MAX_TEXT_CHARS: usize = 512;
pub const TITLE_WEIGHT: f64 = 0.4;
pub const SUMMARY_WEIGHT: f64 = 0.6;
pub const POSITIVE_THRESHOLD: f64 = 0.6;
pub const NEGATIVE_THRESHOLD: f64 = 0.4;

/// Scores articles by classifying title and summary separately.
///
/// The weighted combination treats each classifier confidence as if it sat
/// on a 0 (negative) to 1 (positive) scale. That only holds when the
/// classifier always reports confidence for the same reference label, which
/// is not guaranteed. The formula is kept as is since downstream labels
/// depend on it.
pub struct ArticleScorer {
    classifier: Arc<dyn Classifier>,
    max_text_chars: usize,
}

impl fmt::Debug for ArticleScorer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleScorer")
            .field("classifier", &self.classifier.name())
            .field("max_text_chars", &self.max_text_chars)
            .finish()
    }
}

impl ArticleScorer {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        Self {
            classifier,
            max_text_chars: MAX_TEXT_CHARS,
        }
    }

    pub fn with_max_text_chars(mut self, max_text_chars: usize) -> Self {
        self.max_text_chars = max_text_chars;
        self
    }

    /// Classify one text field, falling back to neutral when the classifier fails.
    pub async fn classify_text(&self, text: &str) -> SentimentScore {
        let text = truncate_chars(text, self.max_text_chars);
        match self.classifier.classify(text).await {
            Ok(score) => score,
            Err(e) => {
                warn!("⚠️ {} failed to classify text, defaulting to neutral: {}", self.classifier.name(), e);
                SentimentScore::neutral()
            }
        }
    }

    /// Combined sentiment for an article before the numeric score is dropped.
    pub async fn score_detail(&self, article: &Article) -> SentimentScore {
        if article.summary.is_empty() {
            return self.classify_text(&article.title).await;
        }

        let (title, summary) = futures::join!(
            self.classify_text(&article.title),
            self.classify_text(&article.summary)
        );
        combine(&title, &summary)
    }

    pub async fn score(&self, article: &Article) -> ScoredArticle {
        debug!("🔎 Analyzing sentiment for: {}", truncate_chars(&article.title, 100));
        let sentiment = self.score_detail(article).await;
        ScoredArticle::new(article, sentiment.label)
    }
}

/// Weighted title/summary combination, 40% title and 60% summary.
pub fn combine(title: &SentimentScore, summary: &SentimentScore) -> SentimentScore {
    let combined = TITLE_WEIGHT * title.score + SUMMARY_WEIGHT * summary.score;
    SentimentScore {
        label: label_for(combined),
        score: combined,
    }
}

pub fn label_for(combined: f64) -> SentimentLabel {
    if combined >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if combined <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

/// Prefix of at most `max_chars` characters, cut on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}
