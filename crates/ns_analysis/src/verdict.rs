use std::fmt;
use std::sync::Arc;

use ns_core::{AggregateVerdict, SentimentDistribution, Translator, VerdictKind};
use tracing::warn;

/// Strict majority: a category wins only when it beats both others. Any tie falls to `Mixed`.
pub fn classify(distribution: &SentimentDistribution) -> VerdictKind {
    let SentimentDistribution {
        positive,
        negative,
        neutral,
    } = *distribution;

    if positive > negative && positive > neutral {
        VerdictKind::MostlyPositive
    } else if negative > positive && negative > neutral {
        VerdictKind::MostlyNegative
    } else if neutral > positive && neutral > negative {
        VerdictKind::MostlyNeutral
    } else {
        VerdictKind::Mixed
    }
}

pub fn sentence(entity: &str, kind: VerdictKind) -> String {
    let conclusion = match kind {
        VerdictKind::MostlyPositive => {
            "mostly positive. Market sentiment appears optimistic, with potential growth opportunities."
        }
        VerdictKind::MostlyNegative => {
            "mostly negative. There are concerns impacting market confidence and stability."
        }
        VerdictKind::MostlyNeutral => {
            "mostly neutral. The news coverage lacks strong opinions, indicating market uncertainty or balanced perspectives."
        }
        VerdictKind::Mixed => {
            "a mix of opinions, with no clear dominance of positive, negative, or neutral sentiments."
        }
    };
    format!("{}’s latest news coverage is {}", entity, conclusion)
}

/// Error sentence shown in place of a translation that could not be produced.
pub fn translation_fallback(language: &str) -> &'static str {
    match language {
        "hi" => "त्रुटि: अनुवाद विफल।",
        _ => "Error: translation failed.",
    }
}

pub struct VerdictBuilder {
    translator: Arc<dyn Translator>,
    language: String,
}

impl fmt::Debug for VerdictBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerdictBuilder")
            .field("translator", &self.translator.name())
            .field("language", &self.language)
            .finish()
    }
}

impl VerdictBuilder {
    pub fn new(translator: Arc<dyn Translator>, language: impl Into<String>) -> Self {
        Self {
            translator,
            language: language.into(),
        }
    }

    pub async fn build(&self, distribution: &SentimentDistribution, entity: &str) -> AggregateVerdict {
        let kind = classify(distribution);
        let source_text = sentence(entity, kind);

        let target_text = match self.translator.translate(&source_text, &self.language).await {
            Ok(text) => text,
            Err(e) => {
                warn!("⚠️ {} failed to translate verdict into {}: {}", self.translator.name(), self.language, e);
                translation_fallback(&self.language).to_string()
            }
        };

        AggregateVerdict {
            kind,
            source_text,
            target_text,
            language: self.language.clone(),
            audio_file: None,
        }
    }
}
