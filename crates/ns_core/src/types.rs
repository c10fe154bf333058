use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub const MISSING_TITLE: &str = "No Title";

fn default_title() -> String {
    MISSING_TITLE.to_string()
}

fn deserialize_title<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let title = Option::<String>::deserialize(deserializer)?;
    Ok(title.filter(|t| !t.trim().is_empty()).unwrap_or_else(default_title))
}

/// A fetched news item. The pipeline reads `title`, `summary`, and any fetch-time `topics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(rename = "Title", default = "default_title", deserialize_with = "deserialize_title")]
    pub title: String,
    #[serde(rename = "Summary", default)]
    pub summary: String,
    #[serde(rename = "Link", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(rename = "Published Date", default, skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    /// Keywords taken from the full fetched text, which may be longer than `summary`.
    #[serde(rename = "Topics", default, skip_serializing_if = "Option::is_none")]
    pub topics: Option<BTreeSet<String>>,
}

impl Article {
    pub fn new(title: impl Into<String>, summary: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            title: if title.trim().is_empty() { default_title() } else { title },
            summary: summary.into(),
            link: None,
            published: None,
            topics: None,
        }
    }
}

/// Sentiment label as reported by a classifier.
///
/// Classifiers are free to emit labels outside the three recognized ones
/// (star ratings, for example); those are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
    Other(String),
}

impl SentimentLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SentimentLabel::Positive => "POSITIVE",
            SentimentLabel::Negative => "NEGATIVE",
            SentimentLabel::Neutral => "NEUTRAL",
            SentimentLabel::Other(raw) => raw,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, SentimentLabel::Other(_))
    }
}

impl From<&str> for SentimentLabel {
    fn from(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            "POSITIVE" => SentimentLabel::Positive,
            "NEGATIVE" => SentimentLabel::Negative,
            "NEUTRAL" => SentimentLabel::Neutral,
            _ => SentimentLabel::Other(upper),
        }
    }
}

impl From<String> for SentimentLabel {
    fn from(raw: String) -> Self {
        SentimentLabel::from(raw.as_str())
    }
}

impl From<SentimentLabel> for String {
    fn from(label: SentimentLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classifier verdict: the predicted label and the confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    pub label: SentimentLabel,
    pub score: f64,
}

impl SentimentScore {
    pub fn new(label: impl Into<SentimentLabel>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    /// Fallback used whenever a classification cannot be obtained.
    pub fn neutral() -> Self {
        Self::new(SentimentLabel::Neutral, 0.5)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Summary")]
    pub summary: String,
    #[serde(rename = "Sentiment")]
    pub sentiment: SentimentLabel,
    #[serde(rename = "Topics")]
    pub topics: Vec<String>,
}

impl ScoredArticle {
    pub fn new(article: &Article, sentiment: SentimentLabel) -> Self {
        Self {
            title: article.title.clone(),
            summary: article.summary.clone(),
            sentiment,
            topics: Vec::new(),
        }
    }

    pub fn with_topics(mut self, topics: &BTreeSet<String>) -> Self {
        self.topics = topics.iter().cloned().collect();
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverageDifference {
    #[serde(rename = "Comparison")]
    pub comparison: String,
    #[serde(rename = "Impact")]
    pub impact: String,
}

/// Topics shared by every article, plus what each article adds on top.
///
/// `unique_topics` is keyed by 0-based article index and never holds empty sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicOverlap {
    pub common_topics: BTreeSet<String>,
    pub unique_topics: BTreeMap<usize, BTreeSet<String>>,
}

impl Serialize for TopicOverlap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1 + self.unique_topics.len()))?;
        map.serialize_entry("Common Topics", &self.common_topics)?;
        for (index, topics) in &self.unique_topics {
            map.serialize_entry(&format!("Unique Topics in Article {}", index + 1), topics)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    #[serde(rename = "Positive")]
    pub positive: usize,
    #[serde(rename = "Negative")]
    pub negative: usize,
    #[serde(rename = "Neutral")]
    pub neutral: usize,
}

impl SentimentDistribution {
    pub fn new(positive: usize, negative: usize, neutral: usize) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Counts the label, returning false for unrecognized labels which are dropped.
    pub fn record(&mut self, label: &SentimentLabel) -> bool {
        match label {
            SentimentLabel::Positive => self.positive += 1,
            SentimentLabel::Negative => self.negative += 1,
            SentimentLabel::Neutral => self.neutral += 1,
            SentimentLabel::Other(_) => return false,
        }
        true
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative + self.neutral
    }
}

impl<'a> FromIterator<&'a SentimentLabel> for SentimentDistribution {
    fn from_iter<I: IntoIterator<Item = &'a SentimentLabel>>(iter: I) -> Self {
        let mut distribution = Self::default();
        for label in iter {
            distribution.record(label);
        }
        distribution
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictKind {
    MostlyPositive,
    MostlyNegative,
    MostlyNeutral,
    Mixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregateVerdict {
    #[serde(skip)]
    pub kind: VerdictKind,
    #[serde(rename = "English")]
    pub source_text: String,
    #[serde(rename = "Translated")]
    pub target_text: String,
    #[serde(rename = "Language")]
    pub language: String,
    #[serde(rename = "Audio Filename", skip_serializing_if = "Option::is_none")]
    pub audio_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparativeScore {
    #[serde(rename = "Sentiment Distribution")]
    pub distribution: SentimentDistribution,
    #[serde(rename = "Coverage Differences")]
    pub coverage_differences: Vec<CoverageDifference>,
    #[serde(rename = "Topic Overlap")]
    pub topic_overlap: TopicOverlap,
}

/// Everything produced by one pipeline run for one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    #[serde(rename = "Company")]
    pub company: String,
    #[serde(rename = "Articles")]
    pub articles: Vec<ScoredArticle>,
    #[serde(rename = "Comparative Sentiment Score")]
    pub comparative: ComparativeScore,
    #[serde(rename = "Final Sentiment Analysis")]
    pub verdict: AggregateVerdict,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_parsing() {
        assert_eq!(SentimentLabel::from("positive"), SentimentLabel::Positive);
        assert_eq!(SentimentLabel::from(" Negative "), SentimentLabel::Negative);
        assert_eq!(SentimentLabel::from("NEUTRAL"), SentimentLabel::Neutral);
        assert_eq!(
            SentimentLabel::from("5 stars"),
            SentimentLabel::Other("5 STARS".to_string())
        );
        assert_eq!(SentimentLabel::Positive.to_string(), "POSITIVE");
    }

    #[test]
    fn test_distribution_drops_unrecognized_labels() {
        let labels = vec![
            SentimentLabel::Positive,
            SentimentLabel::Other("4 STARS".to_string()),
            SentimentLabel::Neutral,
            SentimentLabel::Positive,
        ];
        let distribution: SentimentDistribution = labels.iter().collect();
        assert_eq!(distribution, SentimentDistribution::new(2, 0, 1));
        assert_eq!(distribution.total(), 3);
    }

    #[test]
    fn test_article_defaults_missing_title() {
        let article: Article = serde_json::from_str(r#"{"Summary": "Shares rose."}"#).unwrap();
        assert_eq!(article.title, MISSING_TITLE);
        assert_eq!(Article::new("", "x").title, MISSING_TITLE);
    }

    #[test]
    fn test_article_blank_title_gets_placeholder() {
        let articles: Vec<Article> = serde_json::from_str(
            r#"[{"Title": "", "Summary": "a"}, {"Title": "   "}, {"Title": null}, {"Title": "Tesla"}]"#,
        )
        .unwrap();
        let titles: Vec<_> = articles.iter().map(|a| a.title.as_str()).collect();
        assert_eq!(titles, vec![MISSING_TITLE, MISSING_TITLE, MISSING_TITLE, "Tesla"]);
        assert_eq!(Article::new("  ", "x").title, MISSING_TITLE);
    }

    #[test]
    fn test_topic_overlap_serialization() {
        let mut overlap = TopicOverlap::default();
        overlap.common_topics.insert("tesla".to_string());
        overlap
            .unique_topics
            .insert(1, ["recall".to_string()].into_iter().collect());

        let value = serde_json::to_value(&overlap).unwrap();
        assert_eq!(value["Common Topics"], serde_json::json!(["tesla"]));
        assert_eq!(value["Unique Topics in Article 2"], serde_json::json!(["recall"]));
    }
}
