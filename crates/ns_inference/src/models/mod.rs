use std::sync::Arc;

use ns_core::{Classifier, Error, Result};
use tracing::info;

use crate::{backend_name, InferenceConfig};

pub mod huggingface;
pub mod lexicon;

pub use huggingface::HuggingFaceClassifier;
pub use lexicon::LexiconClassifier;

/// The one place a classifier gets built; the result is injected into the pipeline.
pub fn create_classifier(config: &InferenceConfig) -> Result<Arc<dyn Classifier>> {
    let name = backend_name(config.classifier.as_deref(), "lexicon");
    let classifier: Arc<dyn Classifier> = match name.as_str() {
        "lexicon" => Arc::new(LexiconClassifier::new()),
        "huggingface" | "hf" => Arc::new(HuggingFaceClassifier::new(
            config.model_name.clone(),
            config.api_key.clone(),
            config.model_url.clone(),
        )?),
        other => return Err(Error::Config(format!("Unknown classifier: {}", other))),
    };
    info!("🧠 Sentiment classifier ready (using {})", classifier.name());
    Ok(classifier)
}
