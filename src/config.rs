use serde::{Deserialize, Serialize};
use std::fs;
use anyhow::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub recognition_config: RecognitionConfig,
    #[serde(default)]
    pub model_config: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_cache_dir() -> String {
    "cache".to_string()
}

/// Settings for the external speech-to-text service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognitionConfig {
    #[serde(default = "default_recognition_base_url")]
    pub base_url: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_recognition_base_url() -> String {
    "http://localhost:8001".to_string()
}

fn default_language() -> String {
    "en-US".to_string()
}

/// Settings for the locally hosted text-generation process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default = "default_model_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama2".to_string()
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            let config: Config = serde_yaml::from_str(&content)?;
            Ok(config)
        }
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cache_dir: default_cache_dir(),
        }
    }
}

impl Default for RecognitionConfig {
    fn default() -> Self {
        Self {
            base_url: default_recognition_base_url(),
            language: default_language(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            base_url: default_model_base_url(),
            model: default_model(),
        }
    }
}
