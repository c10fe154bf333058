use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use futures::future::join_all;
use ns_core::{
    AggregateResult, Article, Classifier, ComparativeScore, Result, SentimentDistribution, Translator,
};
use tokio::sync::Semaphore;
use tracing::{debug, info};

use crate::scorer::ArticleScorer;
use crate::verdict::VerdictBuilder;
use crate::{coverage, overlap, PipelineConfig, TopicStrategy};

/// Runs score → distribution/topics → coverage → overlap → verdict for one entity.
///
/// Each run owns its own batch; nothing is shared between runs besides the
/// injected collaborators.
pub struct SentimentPipeline {
    scorer: ArticleScorer,
    verdicts: VerdictBuilder,
    config: PipelineConfig,
}

impl fmt::Debug for SentimentPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentimentPipeline")
            .field("scorer", &self.scorer)
            .field("verdicts", &self.verdicts)
            .field("config", &self.config)
            .finish()
    }
}

impl SentimentPipeline {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        translator: Arc<dyn Translator>,
        config: PipelineConfig,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            scorer: ArticleScorer::new(classifier).with_max_text_chars(config.max_text_chars),
            verdicts: VerdictBuilder::new(translator, config.target_language.clone()),
            config,
        })
    }

    /// Keyword topics computed at fetch time win over re-extracting from the shortened summary.
    fn topics_for(&self, article: &Article) -> BTreeSet<String> {
        match (self.config.topic_strategy, &article.topics) {
            (TopicStrategy::KeywordFrequency, Some(topics)) => topics.clone(),
            (strategy, _) => strategy.extract(&article.summary),
        }
    }

    pub async fn run(&self, entity: &str, mut articles: Vec<Article>) -> AggregateResult {
        if articles.len() > self.config.max_articles {
            debug!("Dropping {} articles over the limit of {}", articles.len() - self.config.max_articles, self.config.max_articles);
            articles.truncate(self.config.max_articles);
        }
        info!("📰 Analyzing {} articles for {}", articles.len(), entity);

        // fan out, then wait for the whole batch before comparing anything
        let semaphore = Semaphore::new(self.config.max_concurrency);
        let scored = join_all(articles.iter().map(|article| {
            let semaphore = &semaphore;
            async move {
                let _permit = semaphore.acquire().await;
                self.scorer.score(article).await
            }
        }))
        .await;

        let distribution: SentimentDistribution = scored.iter().map(|a| &a.sentiment).collect();
        let topic_sets: Vec<BTreeSet<String>> = articles
            .iter()
            .map(|article| self.topics_for(article))
            .collect();
        let scored: Vec<_> = scored
            .into_iter()
            .zip(&topic_sets)
            .map(|(article, topics)| article.with_topics(topics))
            .collect();
        info!(
            "📊 Sentiment distribution: {} positive, {} negative, {} neutral ({} unrecognized)",
            distribution.positive,
            distribution.negative,
            distribution.neutral,
            scored.len() - distribution.total()
        );

        let coverage_differences = coverage::compare(&scored);
        let topic_overlap = overlap::analyze(&topic_sets);
        debug!(
            "Computed {} coverage differences and {} common topics",
            coverage_differences.len(),
            topic_overlap.common_topics.len()
        );

        let verdict = self.verdicts.build(&distribution, entity).await;
        info!("✨ Verdict for {}: {}", entity, verdict.source_text);

        AggregateResult {
            company: entity.to_string(),
            articles: scored,
            comparative: ComparativeScore {
                distribution,
                coverage_differences,
                topic_overlap,
            },
            verdict,
        }
    }
}
