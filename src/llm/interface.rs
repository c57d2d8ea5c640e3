use anyhow::Result;
use async_trait::async_trait;

/// Interface to the locally hosted text-generation process.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Submit a prompt to the named model and return its full completion.
    async fn generate(&self, model: &str, prompt: &str) -> Result<String>;

    /// Best-effort reachability probe of the model process.
    async fn health_check(&self) -> Result<bool>;
}
