use std::sync::Arc;

use ns_core::{Error, Result, SpeechSynthesizer};

pub mod models;
pub mod speech;
pub mod translation;

pub use models::create_classifier;
pub use speech::AudioCache;
pub use translation::create_translator;

#[derive(Debug, Clone, Default)]
pub struct InferenceConfig {
    /// Classifier backend name, "lexicon" when unset.
    pub classifier: Option<String>,
    pub model_name: Option<String>,
    pub api_key: Option<String>,
    /// Overrides the hosted inference base URL.
    pub model_url: Option<String>,
    /// Translator backend name, "google" when unset.
    pub translator: Option<String>,
}

pub fn create_synthesizer(name: &str) -> Result<Arc<dyn SpeechSynthesizer>> {
    match name.to_lowercase().as_str() {
        "google" | "gtts" => Ok(Arc::new(speech::google::GoogleSpeech::new())),
        other => Err(Error::Config(format!("Unknown speech synthesizer: {}", other))),
    }
}

pub mod prelude {
    pub use super::speech::AudioCache;
    pub use super::{create_classifier, create_synthesizer, create_translator, InferenceConfig};
    pub use ns_core::{Error, Result, SpeechSynthesizer};
}

/// Shared by the classifier and translator factories for readable errors.
pub(crate) fn backend_name(name: Option<&str>, default: &str) -> String {
    name.unwrap_or(default).trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::{Classifier, Translator};

    #[test]
    fn test_create_synthesizer() {
        assert_eq!(create_synthesizer("google").unwrap().name(), "Google");
        assert!(create_synthesizer("espeak").is_err());
    }

    #[test]
    fn test_default_backends() {
        let config = InferenceConfig::default();
        let classifier: Arc<dyn Classifier> = create_classifier(&config).unwrap();
        assert_eq!(classifier.name(), "Lexicon");
        let translator: Arc<dyn Translator> = create_translator(&config).unwrap();
        assert_eq!(translator.name(), "Google");
    }
}
