//! Minimal client for the two OpenAI endpoints the proxies forward to.

use axum::body::Bytes;
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    /// Non-success status; carries the upstream's own message or the fallback.
    #[error("{0}")]
    Status(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SpeechRequest {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Pull `error.message` out of an OpenAI error body, if there is one.
pub fn extract_error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
        .and_then(|d| d.message)
        .filter(|m| !m.is_empty())
}

pub struct OpenAiClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Returns the content of the first choice, untrimmed.
    pub async fn chat_completion(
        &self,
        api_key: &str,
        request: &ChatCompletionRequest,
        fallback: &str,
    ) -> Result<String, UpstreamError> {
        tracing::debug!(
            "chat completion: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let response = self
            .http
            .post(self.url("chat/completions"))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let response = check_status(response, fallback).await?;
        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|_| UpstreamError::Malformed(fallback.to_string()))?;

        body.choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| UpstreamError::Malformed(fallback.to_string()))
    }

    /// Returns the synthesized audio exactly as the upstream sent it.
    pub async fn speech(
        &self,
        api_key: &str,
        request: &SpeechRequest,
        fallback: &str,
    ) -> Result<Bytes, UpstreamError> {
        tracing::debug!(
            "speech: model={}, voice={}, speed={}, chars={}",
            request.model,
            request.voice,
            request.speed,
            request.input.chars().count()
        );

        let response = self
            .http
            .post(self.url("audio/speech"))
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await?;

        let response = check_status(response, fallback).await?;
        Ok(response.bytes().await?)
    }
}

async fn check_status(
    response: reqwest::Response,
    fallback: &str,
) -> Result<reqwest::Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.bytes().await.unwrap_or_default();
    let message = extract_error_message(&body).unwrap_or_else(|| fallback.to_string());

    tracing::warn!("Upstream returned {}: {}", status, message);

    Err(UpstreamError::Status(message))
}
