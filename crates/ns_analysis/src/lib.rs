use std::str::FromStr;

use ns_core::Error;

pub mod coverage;
pub mod overlap;
pub mod pipeline;
pub mod scorer;
pub mod topics;
pub mod verdict;

pub use pipeline::SentimentPipeline;
pub use scorer::ArticleScorer;
pub use topics::TopicStrategy;
pub use verdict::VerdictBuilder;

pub const DEFAULT_MAX_ARTICLES: usize = 10;
pub const DEFAULT_TARGET_LANGUAGE: &str = "hi";
pub const DEFAULT_MAX_CONCURRENCY: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Articles beyond this count are dropped before scoring.
    pub max_articles: usize,
    /// Title and summary are each cut to this many characters before classification.
    pub max_text_chars: usize,
    pub target_language: String,
    pub topic_strategy: TopicStrategy,
    /// Upper bound on articles being scored at once during one run.
    pub max_concurrency: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            max_articles: DEFAULT_MAX_ARTICLES,
            max_text_chars: scorer::MAX_TEXT_CHARS,
            target_language: DEFAULT_TARGET_LANGUAGE.to_string(),
            topic_strategy: TopicStrategy::default(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl PipelineConfig {
    pub fn validate(&self) -> ns_core::Result<()> {
        if self.max_concurrency == 0 {
            return Err(Error::Config("max_concurrency must be at least 1".to_string()));
        }
        if self.max_text_chars == 0 {
            return Err(Error::Config("max_text_chars must be at least 1".to_string()));
        }
        if self.target_language.trim().is_empty() {
            return Err(Error::Config("target_language must not be empty".to_string()));
        }
        Ok(())
    }
}

impl FromStr for TopicStrategy {
    type Err = Error;

    fn from_str(s: &str) -> ns_core::Result<Self> {
        match s.to_lowercase().as_str() {
            "leading" | "leading-tokens" => Ok(TopicStrategy::LeadingTokens),
            "keywords" | "keyword-frequency" => Ok(TopicStrategy::KeywordFrequency),
            other => Err(Error::Config(format!("Unknown topic strategy: {}", other))),
        }
    }
}

pub mod prelude {
    pub use super::{PipelineConfig, SentimentPipeline, TopicStrategy};
    pub use ns_core::{AggregateResult, Article, Error, Result};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.max_articles, 10);
        assert_eq!(config.max_text_chars, 512);
        assert_eq!(config.target_language, "hi");
        assert_eq!(config.topic_strategy, TopicStrategy::LeadingTokens);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_concurrency() {
        let config = PipelineConfig {
            max_concurrency: 0,
            ..PipelineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_topic_strategy_from_str() {
        assert_eq!("leading".parse::<TopicStrategy>().unwrap(), TopicStrategy::LeadingTokens);
        assert_eq!("Keywords".parse::<TopicStrategy>().unwrap(), TopicStrategy::KeywordFrequency);
        assert!("lda".parse::<TopicStrategy>().is_err());
    }
}
