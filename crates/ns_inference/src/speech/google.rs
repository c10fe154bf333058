use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ns_core::{Error, Result, SpeechSynthesizer};
use reqwest::Client;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://translate.google.com/translate_tts";
/// The endpoint refuses requests longer than this many characters.
pub const MAX_CHUNK_CHARS: usize = 100;

/// MP3 speech from the Google Translate text-to-speech endpoint.
pub struct GoogleSpeech {
    client: Arc<Client>,
    base_url: String,
}

impl fmt::Debug for GoogleSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSpeech")
            .field("client", &"<reqwest::Client>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl Default for GoogleSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl GoogleSpeech {
    pub fn new() -> Self {
        Self {
            client: Arc::new(Client::new()),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[async_trait]
impl SpeechSynthesizer for GoogleSpeech {
    fn name(&self) -> &str {
        "Google"
    }

    async fn synthesize(&self, text: &str, language: &str) -> Result<Vec<u8>> {
        let chunks = split_chunks(text, MAX_CHUNK_CHARS);
        if chunks.is_empty() {
            return Err(Error::Speech("Nothing to synthesize".to_string()));
        }

        let total = chunks.len().to_string();
        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let index = index.to_string();
            let bytes = self
                .client
                .get(&self.base_url)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", language),
                    ("q", chunk.as_str()),
                    ("idx", index.as_str()),
                    ("total", total.as_str()),
                ])
                .send()
                .await?
                .error_for_status()?
                .bytes()
                .await?;
            audio.extend_from_slice(&bytes);
        }

        // MP3 frames concatenate cleanly
        debug!("Synthesized {} chunks ({} bytes) in {}", chunks.len(), audio.len(), language);
        Ok(audio)
    }
}

/// Splits on whitespace into chunks of at most `max_chars` characters.
/// A single word longer than the limit is hard-split.
fn split_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let current_len = current.chars().count();

        if !current.is_empty() && current_len + 1 + word_len > max_chars {
            chunks.push(std::mem::take(&mut current));
        }

        if word_len > max_chars {
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        assert_eq!(split_chunks("नमस्ते दुनिया", 100), vec!["नमस्ते दुनिया"]);
        assert!(split_chunks("   ", 100).is_empty());
    }

    #[test]
    fn test_chunks_respect_limit() {
        let text = "one two three four five six seven";
        let chunks = split_chunks(text, 10);
        assert_eq!(chunks, vec!["one two", "three four", "five six", "seven"]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
    }

    #[test]
    fn test_long_word_is_hard_split() {
        assert_eq!(split_chunks("ab abcdefgh", 3), vec!["ab", "abc", "def", "gh"]);
    }
}
