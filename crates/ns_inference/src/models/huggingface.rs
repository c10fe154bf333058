use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ns_core::{Classifier, Error, Result, SentimentScore};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

pub const DEFAULT_MODEL: &str = "nlptown/bert-base-multilingual-uncased-sentiment";
pub const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co/models";

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    label: String,
    score: f64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<Candidate>>),
    Single(Vec<Candidate>),
    Failed { error: String },
}

/// Text classification through the hosted Hugging Face inference API.
///
/// Labels are upper-cased and passed through as-is, so star-rating models
/// yield labels such as "5 STARS".
pub struct HuggingFaceClassifier {
    client: Arc<Client>,
    api_key: Option<String>,
    model: String,
    url: Url,
}

impl fmt::Debug for HuggingFaceClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceClassifier")
            .field("client", &"<reqwest::Client>")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("url", &self.url.as_str())
            .finish()
    }
}

impl HuggingFaceClassifier {
    pub fn new(model: Option<String>, api_key: Option<String>, endpoint: Option<String>) -> Result<Self> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_string());
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        let url = Url::parse(&format!("{}/{}", endpoint.trim_end_matches('/'), model))
            .map_err(|e| Error::Config(format!("Invalid inference URL: {}", e)))?;

        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
            model,
            url,
        })
    }
}

#[async_trait]
impl Classifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn classify(&self, text: &str) -> Result<SentimentScore> {
        let mut request = self.client.post(self.url.clone()).json(&InferenceRequest { inputs: text });
        if let Some(api_key) = &self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Classification(format!("{} returned {}: {}", self.model, status, body)));
        }

        let score = best_candidate(serde_json::from_str(&body)?)?;
        debug!("{} classified text as {} ({:.3})", self.model, score.label, score.score);
        Ok(score)
    }
}

fn best_candidate(response: InferenceResponse) -> Result<SentimentScore> {
    let candidates = match response {
        InferenceResponse::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
        InferenceResponse::Single(candidates) => candidates,
        InferenceResponse::Failed { error } => return Err(Error::Classification(error)),
    };

    candidates
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .map(|candidate| SentimentScore::new(candidate.label, candidate.score))
        .ok_or_else(|| Error::Classification("Model returned no labels".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ns_core::SentimentLabel;

    fn parse(body: &str) -> Result<SentimentScore> {
        best_candidate(serde_json::from_str(body).unwrap())
    }

    #[test]
    fn test_batched_response_picks_top_label() {
        let score = parse(
            r#"[[{"label":"1 star","score":0.05},{"label":"5 stars","score":0.71},{"label":"4 stars","score":0.2}]]"#,
        )
        .unwrap();
        assert_eq!(score.label, SentimentLabel::Other("5 STARS".to_string()));
        assert!((score.score - 0.71).abs() < 1e-9);
    }

    #[test]
    fn test_flat_response() {
        let score = parse(r#"[{"label":"negative","score":0.8},{"label":"positive","score":0.2}]"#).unwrap();
        assert_eq!(score.label, SentimentLabel::Negative);
    }

    #[test]
    fn test_error_and_empty_responses() {
        assert!(parse(r#"{"error":"Model is currently loading"}"#).is_err());
        assert!(parse("[]").is_err());
        assert!(parse("[[]]").is_err());
    }

    #[test]
    fn test_model_url() {
        let classifier = HuggingFaceClassifier::new(None, Some("secret".to_string()), None).unwrap();
        assert_eq!(
            classifier.url.as_str(),
            "https://api-inference.huggingface.co/models/nlptown/bert-base-multilingual-uncased-sentiment"
        );
        assert!(!format!("{:?}", classifier).contains("secret"));

        let classifier = HuggingFaceClassifier::new(
            Some("distilbert-base-uncased-finetuned-sst-2-english".to_string()),
            None,
            Some("http://localhost:8080/models/".to_string()),
        )
        .unwrap();
        assert_eq!(
            classifier.url.as_str(),
            "http://localhost:8080/models/distilbert-base-uncased-finetuned-sst-2-english"
        );
    }
}
