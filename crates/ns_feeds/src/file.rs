use std::path::PathBuf;

use async_trait::async_trait;
use ns_core::{Article, Error, Fetcher, Result};
use tracing::{info, warn};

use crate::ingest::{normalize, RawEntry};
use crate::DEFAULT_NUM_ARTICLES;

/// Reads a JSON array of feed entries saved from an upstream source.
#[derive(Debug, Clone)]
pub struct JsonFileFetcher {
    path: PathBuf,
    num_articles: usize,
}

impl JsonFileFetcher {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            num_articles: DEFAULT_NUM_ARTICLES,
        }
    }

    pub fn with_num_articles(mut self, num_articles: usize) -> Self {
        self.num_articles = num_articles;
        self
    }
}

#[async_trait]
impl Fetcher for JsonFileFetcher {
    fn source(&self) -> &str {
        "file"
    }

    async fn fetch(&self, entity: &str) -> Result<Vec<Article>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let entries: Vec<RawEntry> = serde_json::from_str(&raw)
            .map_err(|e| Error::Fetch(format!("{}: {}", self.path.display(), e)))?;

        if entries.is_empty() {
            warn!("No news articles found for {} in {}", entity, self.path.display());
        }

        let articles: Vec<Article> = entries
            .into_iter()
            .take(self.num_articles)
            .map(normalize)
            .collect();
        info!("📥 Loaded {} articles for {} from {}", articles.len(), entity, self.path.display());
        Ok(articles)
    }
}

/// Serves a fixed batch; handy for tests and for callers that already hold articles.
#[derive(Debug, Clone, Default)]
pub struct StaticFetcher {
    articles: Vec<Article>,
}

impl StaticFetcher {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }
}

#[async_trait]
impl Fetcher for StaticFetcher {
    fn source(&self) -> &str {
        "static"
    }

    async fn fetch(&self, _entity: &str) -> Result<Vec<Article>> {
        Ok(self.articles.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_and_normalizes_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"title":"Tesla beats estimates","description":"Quarterly profit rose sharply."}},{{"description":"No headline here"}},{{"title":"Third"}}]"#
        )
        .unwrap();

        let fetcher = JsonFileFetcher::new(file.path()).with_num_articles(2);
        let articles = fetcher.fetch("Tesla").await.unwrap();

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Tesla beats estimates");
        assert_eq!(articles[0].summary, "Quarterly profit rose sharply.");
        assert_eq!(articles[1].title, "No Title");
    }

    #[tokio::test]
    async fn test_missing_file_and_bad_json_fail() {
        let fetcher = JsonFileFetcher::new("/definitely/not/here.json");
        assert!(matches!(fetcher.fetch("Tesla").await, Err(Error::Io(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"not\": \"a list\"}}").unwrap();
        let fetcher = JsonFileFetcher::new(file.path());
        assert!(matches!(fetcher.fetch("Tesla").await, Err(Error::Fetch(_))));
    }

    #[tokio::test]
    async fn test_static_fetcher() {
        let fetcher = StaticFetcher::new(vec![Article::new("a", "b")]);
        assert_eq!(fetcher.fetch("x").await.unwrap().len(), 1);
    }
}
