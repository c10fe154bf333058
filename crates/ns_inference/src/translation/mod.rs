use std::sync::Arc;

use async_trait::async_trait;
use ns_core::{Error, Result, Translator};

use crate::{backend_name, InferenceConfig};

pub mod google;

pub use google::GoogleTranslator;

/// Returns the text untouched; used when translation is switched off.
#[derive(Debug, Default)]
pub struct PassthroughTranslator;

#[async_trait]
impl Translator for PassthroughTranslator {
    fn name(&self) -> &str {
        "Passthrough"
    }

    async fn translate(&self, text: &str, _target_language: &str) -> Result<String> {
        Ok(text.to_string())
    }
}

pub fn create_translator(config: &InferenceConfig) -> Result<Arc<dyn Translator>> {
    match backend_name(config.translator.as_deref(), "google").as_str() {
        "google" => Ok(Arc::new(GoogleTranslator::new())),
        "none" | "passthrough" => Ok(Arc::new(PassthroughTranslator)),
        other => Err(Error::Config(format!("Unknown translator: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_passthrough() {
        let config = InferenceConfig {
            translator: Some("none".to_string()),
            ..InferenceConfig::default()
        };
        let translator = create_translator(&config).unwrap();
        assert_eq!(translator.translate("Hello", "hi").await.unwrap(), "Hello");
    }

    #[test]
    fn test_unknown_translator() {
        let config = InferenceConfig {
            translator: Some("deepl".to_string()),
            ..InferenceConfig::default()
        };
        assert!(create_translator(&config).is_err());
    }
}
