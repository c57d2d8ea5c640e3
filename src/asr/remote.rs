use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::interface::{RecognitionError, SpeechRecognizer};
use crate::audio::AudioClip;

#[derive(Debug, Serialize)]
struct RecognizeRequest<'a> {
    audio_data: &'a [f32],
    sample_rate: u32,
    language: &'a str,
}

#[derive(Debug, Deserialize)]
struct RecognizeResponse {
    text: String,
    success: bool,
}

/// Client for the speech-to-text service.
///
/// The whole clip is submitted in one call and the call blocks for the
/// network round-trip; no timeout or retry is applied.
#[derive(Debug, Clone)]
pub struct RemoteRecognizer {
    client: Client,
    base_url: String,
    language: String,
}

impl RemoteRecognizer {
    pub fn new(base_url: String, language: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            language,
        }
    }
}

#[async_trait]
impl SpeechRecognizer for RemoteRecognizer {
    async fn recognize(&self, clip: &AudioClip) -> Result<String, RecognitionError> {
        let url = format!("{}/asr/transcribe", self.base_url);
        debug!("Submitting {:.2}s of audio to {}", clip.duration_secs(), url);

        let request = RecognizeRequest {
            audio_data: &clip.samples,
            sample_rate: clip.sample_rate,
            language: &self.language,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| RecognitionError::Request(e.to_string()))?;

        if !response.status().is_success() {
            return Err(RecognitionError::Request(format!(
                "recognition service returned HTTP {}",
                response.status()
            )));
        }

        let result: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| RecognitionError::Request(e.to_string()))?;

        if !result.success || result.text.trim().is_empty() {
            return Err(RecognitionError::UnknownValue);
        }

        Ok(result.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_samples_rate_and_language() {
        let request = RecognizeRequest {
            audio_data: &[0.0, 0.5],
            sample_rate: 16_000,
            language: "en-US",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["sample_rate"], 16_000);
        assert_eq!(value["language"], "en-US");
        assert_eq!(value["audio_data"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn response_parses_service_wire_shape() {
        let result: RecognizeResponse =
            serde_json::from_str(r#"{"text": "hello there", "success": true}"#).unwrap();
        assert!(result.success);
        assert_eq!(result.text, "hello there");
    }
}
