use std::fmt;

use async_trait::async_trait;

use crate::types::{Article, SentimentScore};
use crate::Result;

/// Scores a single piece of text.
///
/// Implementations report their own failures; callers decide on the fallback.
#[async_trait]
pub trait Classifier: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn classify(&self, text: &str) -> Result<SentimentScore>;
}

#[async_trait]
pub trait Translator: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    /// Translate `text` into `target_language` (an ISO 639-1 code such as "hi").
    async fn translate(&self, text: &str, target_language: &str) -> Result<String>;
}

/// Turns text into encoded audio bytes.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + fmt::Debug {
    fn name(&self) -> &str;

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>>;
}

/// Source of recent coverage for an entity.
#[async_trait]
pub trait Fetcher: Send + Sync {
    fn source(&self) -> &str;

    async fn fetch(&self, entity: &str) -> Result<Vec<Article>>;
}
