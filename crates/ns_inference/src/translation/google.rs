use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ns_core::{Error, Result, Translator};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Client for the public Google Translate endpoint with source-language auto-detection.
pub struct GoogleTranslator {
    client: Arc<Client>,
    base_url: String,
}

impl fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    fn name(&self) -> &str {
        "Google"
    }

    async fn translate(&self, text: &str, target_language: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("client", "gtx"),
                ("sl", "auto"),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        let translated = parse_translation(&response)?;
        debug!("Translated {} characters into {}", text.chars().count(), target_language);
        Ok(translated)
    }
}

/// Joins the translated segments of a `translate_a/single` response.
fn parse_translation(response: &Value) -> Result<String> {
    let segments = response
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Translation("Unexpected response shape".to_string()))?;

    let translated: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if translated.trim().is_empty() {
        return Err(Error::Translation("Empty translation".to_string()));
    }
    Ok(translated)
}
