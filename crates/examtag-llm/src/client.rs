//! Completion clients for external LLM providers.
//!
//! OpenAI and Groq share the chat-completions format. Anthropic uses the
//! Messages API.

use std::time::Duration;

use async_trait::async_trait;
use examtag_core::{Error, Result};
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::LLMConfig;
use crate::types::{CompletionOptions, LLMProvider, ResolvedProvider};

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const GROQ_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Something that turns a prompt into a completion.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> String;

    /// Send one prompt and return the raw completion text.
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// HTTP client bound to one provider, model, and key.
pub struct LlmClient {
    client: Client,
    resolved: ResolvedProvider,
    options: CompletionOptions,
}

impl LlmClient {
    pub fn new(resolved: ResolvedProvider, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            client,
            resolved,
            options: CompletionOptions::default(),
        })
    }

    /// Build a client for the configured provider, if any key is available.
    pub fn from_config(config: &LLMConfig, timeout: Duration) -> Result<Option<Self>> {
        match config.resolve_provider() {
            Some(resolved) => Self::new(resolved, timeout).map(Some),
            None => Ok(None),
        }
    }

    pub fn provider(&self) -> LLMProvider {
        self.resolved.provider
    }

    async fn complete_openai_compat(&self, url: &str, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.resolved.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.options.temperature,
            "max_tokens": self.options.max_tokens,
        });

        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", self.resolved.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Request failed: {}", e)))?;

        let parsed = read_json(response).await?;
        parse_openai_response(&parsed)
    }

    async fn complete_anthropic(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.resolved.model,
            "messages": [{"role": "user", "content": prompt}],
            "temperature": self.options.temperature,
            "max_tokens": self.options.max_tokens,
        });

        let response = self
            .client
            .post(ANTHROPIC_URL)
            .header("x-api-key", &self.resolved.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Llm(format!("Request failed: {}", e)))?;

        let parsed = read_json(response).await?;
        parse_anthropic_response(&parsed)
    }
}

#[async_trait]
impl CompletionProvider for LlmClient {
    fn name(&self) -> String {
        format!("{}:{}", self.resolved.provider, self.resolved.model)
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        debug!("Requesting completion from {}", self.name());
        match self.resolved.provider {
            LLMProvider::OpenAI => self.complete_openai_compat(OPENAI_URL, prompt).await,
            LLMProvider::Groq => self.complete_openai_compat(GROQ_URL, prompt).await,
            LLMProvider::Anthropic => self.complete_anthropic(prompt).await,
        }
    }
}

async fn read_json(response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Llm(format!("API error {}: {}", status, body)));
    }
    response
        .json::<Value>()
        .await
        .map_err(|e| Error::Llm(format!("Invalid response body: {}", e)))
}

/// Text of an OpenAI-compatible chat completion.
pub fn parse_openai_response(body: &Value) -> Result<String> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Llm("Response has no message content".into()))
}

/// Concatenated text blocks of an Anthropic Messages response.
pub fn parse_anthropic_response(body: &Value) -> Result<String> {
    if body["type"].as_str() == Some("error") {
        let msg = body["error"]["message"].as_str().unwrap_or("Unknown error");
        return Err(Error::Llm(msg.to_string()));
    }

    let blocks = body["content"]
        .as_array()
        .ok_or_else(|| Error::Llm("Response has no content".into()))?;

    let text: String = blocks
        .iter()
        .filter(|b| b["type"].as_str() == Some("text"))
        .filter_map(|b| b["text"].as_str())
        .collect();

    if text.is_empty() {
        return Err(Error::Llm("Response has no text content".into()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_openai() {
        let body = json!({
            "choices": [{"message": {"role": "assistant", "content": "Algebra; Quadratic Equations"}}]
        });
        assert_eq!(parse_openai_response(&body).unwrap(), "Algebra; Quadratic Equations");
        assert!(parse_openai_response(&json!({"choices": []})).is_err());
    }

    #[test]
    fn test_parse_anthropic() {
        let body = json!({
            "type": "message",
            "content": [
                {"type": "text", "text": "Mauryan Empire; "},
                {"type": "text", "text": "Ashokan Edicts"}
            ]
        });
        assert_eq!(
            parse_anthropic_response(&body).unwrap(),
            "Mauryan Empire; Ashokan Edicts"
        );
    }

    #[test]
    fn test_parse_anthropic_error() {
        let body = json!({
            "type": "error",
            "error": {"type": "overloaded_error", "message": "Overloaded"}
        });
        match parse_anthropic_response(&body) {
            Err(Error::Llm(msg)) => assert_eq!(msg, "Overloaded"),
            other => panic!("unexpected: {:?}", other),
        }
        assert!(parse_anthropic_response(&json!({"type": "message", "content": []})).is_err());
    }

    #[test]
    fn test_client_name() {
        let client = LlmClient::new(
            ResolvedProvider {
                provider: LLMProvider::Groq,
                model: "llama-3.1-8b-instant".into(),
                api_key: "gsk".into(),
            },
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(client.name(), "groq:llama-3.1-8b-instant");
        assert_eq!(client.provider(), LLMProvider::Groq);
    }

    #[test]
    fn test_from_config_without_keys() {
        let config = LLMConfig {
            preferred_provider: "openai".into(),
            openai_api_key: None,
            ..LLMConfig::default()
        };
        assert!(LlmClient::from_config(&config, Duration::from_secs(5))
            .unwrap()
            .is_none());
    }
}
