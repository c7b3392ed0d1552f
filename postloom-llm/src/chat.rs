use crate::traits::{LlmClient, LlmError, LlmResponse, LlmResult};
use async_trait::async_trait;
use postloom_http::HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Generation can take a while on long prompts; the connect timeout stays
/// short inside HttpClient.
const CHAT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client for OpenAI-compatible `chat/completions` endpoints.
///
/// Both the post generator and the translation provider expose this wire
/// shape; they differ only in base URL, model, and key. Model and temperature
/// are fixed at construction, matching how the pipeline treats them as
/// configuration rather than per-request knobs.
pub struct ChatApi {
    client: HttpClient,
    api_key: String,
    model: String,
    temperature: f32,
    credential: &'static str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    model: Option<String>,
    #[serde(default)]
    choices: Vec<ChatChoice>,
    #[serde(default)]
    usage: Option<ChatUsage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatUsage {
    #[serde(default)]
    total_tokens: Option<u32>,
}

impl ChatApi {
    /// Create a client for the given endpoint, key, and model.
    ///
    /// `credential` names the key in error messages (e.g. "generation API
    /// key") so a missing-key failure tells the user which sidebar field to
    /// fill. The key itself is only validated at call time; an empty key
    /// never reaches the network.
    pub fn new(
        base_url: &str,
        api_key: String,
        model: String,
        temperature: f32,
        credential: &'static str,
    ) -> LlmResult<Self> {
        // Url::join drops the last path segment of a slash-less base, so
        // "https://host/v1" must become "https://host/v1/" before joining.
        let base = format!("{}/", base_url.trim_end_matches('/'));
        let client = HttpClient::new(&base)
            .map_err(|e| LlmError::Setup(format!("HttpClient init failed: {e}")))?
            .with_timeout(CHAT_TIMEOUT)
            .with_retries(0);

        Ok(Self {
            client,
            api_key,
            model,
            temperature,
            credential,
        })
    }
}

#[async_trait]
impl LlmClient for ChatApi {
    async fn generate(
        &self,
        prompt: &str,
        system_prompt: Option<&str>,
        max_tokens: Option<u32>,
        temperature: Option<f32>,
    ) -> LlmResult<LlmResponse> {
        if self.api_key.trim().is_empty() {
            return Err(LlmError::MissingCredential(self.credential));
        }

        let mut messages = Vec::with_capacity(2);
        if let Some(sys) = system_prompt {
            messages.push(ChatMessage {
                role: "system",
                content: sys,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });

        let req = ChatRequest {
            model: &self.model,
            messages,
            temperature: temperature.unwrap_or(self.temperature),
            max_tokens,
        };

        tracing::debug!(
            target: "llm.chat",
            model = %self.model,
            prompt_len = prompt.len(),
            "chat.generate.start"
        );

        let resp: ChatResponse = self
            .client
            .post_json("chat/completions", Some(&self.api_key), &req)
            .await
            .map_err(|e| LlmError::Invocation(e.to_string()))?;

        let text = resp
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::Invocation(
                "provider returned no completion text".into(),
            ));
        }

        tracing::debug!(
            target: "llm.chat",
            model = %self.model,
            text_len = text.len(),
            "chat.generate.success"
        );

        Ok(LlmResponse {
            text,
            model: resp.model,
            tokens_used: resp.usage.and_then(|u| u.total_tokens),
        })
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
