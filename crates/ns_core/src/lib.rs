pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::{Classifier, Fetcher, SpeechSynthesizer, Translator};
pub use types::{
    AggregateResult, AggregateVerdict, Article, ComparativeScore, CoverageDifference, ScoredArticle,
    SentimentDistribution, SentimentLabel, SentimentScore, TopicOverlap, VerdictKind,
};

pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use super::models::*;
    pub use super::types::*;
    pub use super::{Error, Result};
}
