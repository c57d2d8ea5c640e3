use async_trait::async_trait;
use thiserror::Error;

use crate::audio::AudioClip;

/// Outcomes of a failed recognition attempt: either the service produced
/// no transcript for the audio, or the call itself failed.
#[derive(Debug, Error)]
pub enum RecognitionError {
    #[error("no speech could be recognized")]
    UnknownValue,
    #[error("{0}")]
    Request(String),
}

/// Interface to the external speech-to-text service.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Convert one in-memory audio clip into a transcript.
    async fn recognize(&self, clip: &AudioClip) -> Result<String, RecognitionError>;
}
