use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use ns_core::{Error, Result, SpeechSynthesizer};
use sha2::{Digest, Sha256};
use tracing::info;

pub mod google;

pub use google::GoogleSpeech;

const HASH_PREFIX_LEN: usize = 10;

/// Content-addressed store of synthesized audio.
///
/// Files are named after a hash of the text, so identical text is only
/// synthesized once per directory.
pub struct AudioCache {
    synthesizer: Arc<dyn SpeechSynthesizer>,
    dir: PathBuf,
}

impl fmt::Debug for AudioCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioCache")
            .field("synthesizer", &self.synthesizer.name())
            .field("dir", &self.dir)
            .finish()
    }
}

impl AudioCache {
    pub fn new(synthesizer: Arc<dyn SpeechSynthesizer>, dir: impl Into<PathBuf>) -> Self {
        Self {
            synthesizer,
            dir: dir.into(),
        }
    }

    pub fn file_name(text: &str) -> String {
        let digest = Sha256::digest(text.as_bytes());
        let hex: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        format!("{}.mp3", &hex[..HASH_PREFIX_LEN])
    }

    /// Path of the audio for `text`, synthesizing it only when not already on disk.
    pub async fn synthesize(&self, text: &str, language: &str) -> Result<PathBuf> {
        if text.trim().is_empty() {
            return Err(Error::Speech("Invalid text input for speech synthesis".to_string()));
        }

        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(Self::file_name(text));

        if tokio::fs::try_exists(&path).await? {
            info!("🔄 Reusing existing audio file: {}", path.display());
            return Ok(path);
        }

        let audio = self.synthesizer.synthesize(text, language).await?;
        tokio::fs::write(&path, &audio).await?;
        info!("✅ New audio file saved: {}", path.display());
        Ok(path)
    }
}
