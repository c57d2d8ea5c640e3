use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::interface::LanguageModel;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for a local Ollama process over its HTTP API.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: String) -> Self {
        info!("Initialized OllamaClient: base_url={}", base_url);
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, model: &str, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);
        let request = GenerateRequest {
            model,
            prompt,
            // One full completion per request; token streaming is the
            // Ollama default and has to be switched off explicitly.
            stream: false,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let result: GenerateResponse = response.json().await?;
        Ok(result.response)
    }

    async fn health_check(&self) -> Result<bool> {
        let response = self.client.get(&self.base_url).send().await?;
        Ok(response.status().is_success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_disables_streaming() {
        let request = GenerateRequest {
            model: "llama2",
            prompt: "Process this transcribed text: hi",
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "llama2");
        assert_eq!(value["stream"], false);
    }

    #[test]
    fn response_ignores_extra_ollama_fields() {
        let body = r#"{
            "model": "llama2",
            "created_at": "2024-01-15T09:00:00Z",
            "response": "Understood.",
            "done": true,
            "total_duration": 1234
        }"#;
        let result: GenerateResponse = serde_json::from_str(body).unwrap();
        assert_eq!(result.response, "Understood.");
    }
}
