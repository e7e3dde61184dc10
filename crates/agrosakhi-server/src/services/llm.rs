//! Chat-completions client for an OpenAI-compatible language model

use crate::config::ServerConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Model returned no content")]
    EmptyResponse,
}

pub struct LanguageModel {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    content: Option<String>,
}

impl LanguageModel {
    /// Client for the configured provider, or `None` when no API key is set
    pub fn from_config(config: &ServerConfig) -> Result<Option<Self>> {
        let Some(api_key) = config.openai_api_key.clone() else {
            return Ok(None);
        };

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.ai_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Some(Self {
            http,
            api_key,
            model: config.openai_model.clone(),
            endpoint: format!(
                "{}/chat/completions",
                config.openai_base_url.trim_end_matches('/')
            ),
        }))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        debug!(model = %self.model, "Sending chat completion request");
        let response: ChatResponse = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        extract_reply(response)
    }
}

fn extract_reply(response: ChatResponse) -> Result<String, LlmError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
        .ok_or(LlmError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_without_api_key() {
        let config = ServerConfig::default();
        assert!(LanguageModel::from_config(&config).unwrap().is_none());
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = ServerConfig {
            openai_api_key: Some("sk-test".to_string()),
            openai_base_url: "http://localhost:8000/v1/".to_string(),
            ..Default::default()
        };
        let model = LanguageModel::from_config(&config).unwrap().unwrap();
        assert_eq!(model.endpoint, "http://localhost:8000/v1/chat/completions");
        assert_eq!(model.model(), "gpt-4o");
    }

    #[test]
    fn test_extract_reply() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "  Use neem oil.  "}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_reply(response).unwrap(), "Use neem oil.");

        let empty: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(extract_reply(empty), Err(LlmError::EmptyResponse)));
    }
}
