use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub model: Option<String>,
    pub tokens_used: Option<u32>,
}

/// Provider-level failure, mapped into the pipeline error taxonomy by each
/// caller (composer → generation, translator → translation).
#[derive(thiserror::Error, Debug)]
pub enum LlmError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("client setup failed: {0}")]
    Setup(String),

    #[error("model invocation failed: {0}")]
    Invocation(String),
}

pub type LlmResult<T> = std::result::Result<T, LlmError>;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate a response to the given prompt with optional system prompt.
    ///
    /// `temperature` overrides the client's configured default when set.
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> LlmResult<LlmResponse>;

    /// Get the model name being used.
    fn model_name(&self) -> &str;

    /// Check if the model service is available.
    async fn health_check(&self) -> LlmResult<bool> {
        let test_prompt = "Respond with just 'OK'";

        match self.generate(test_prompt, None, Some(5), Some(0.1)).await {
            Ok(_) => Ok(true),
            Err(e) => {
                tracing::warn!("LLM health check failed: {}", e);
                Ok(false)
            }
        }
    }
}
