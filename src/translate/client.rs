//! HTTP client for the hosted translation model.
//!
//! Talks to any OpenAI-compatible chat-completions endpoint. Every failure
//! surfaces as `RelayError::Translation` so callers can distinguish a
//! translation outage from codec output.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RelayError, Result};

/// Runtime configuration for the translation endpoint.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    pub model: String,
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            endpoint: "https://generativelanguage.googleapis.com/v1beta/openai".to_string(),
            api_key: None,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Minimal chat message for the chat-completions payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

pub struct TranslatorClient {
    config: TranslatorConfig,
    http: reqwest::Client,
}

impl TranslatorClient {
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                RelayError::Translation(format!("failed to build http client: {}", e))
            })?;

        Ok(Self { config, http })
    }

    /// Translates text in any language to English.
    pub async fn translate_to_english(&self, text: &str) -> Result<String> {
        let prompt = format!(
            "Translate the following text into English.\n\n\
             Requirements:\n\
             1. Translate accurately and completely. Do NOT summarize or omit any details (e.g., locations, time, activities).\n\
             2. Output ONLY the English translation.\n\
             3. Do not wrap the output in quotes.\n\n\
             Text to translate:\n{}",
            text
        );
        self.complete(&prompt).await
    }

    /// Translates English text into the named target language.
    pub async fn translate_to_target(&self, text: &str, language: &str) -> Result<String> {
        let prompt = format!(
            "Translate the following English text to {}.\n\n\
             Requirements:\n\
             1. Output ONLY the translation.\n\
             2. Do not wrap the output in quotes.\n\
             3. Use natural, native phrasing for the target language.\n\n\
             Text to translate:\n{}",
            language, text
        );
        self.complete(&prompt).await
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let url = self.chat_completions_url();
        let payload = CompletionRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::user(prompt)],
            temperature: Some(0.1),
            stream: Some(false),
        };

        debug!(model = %self.config.model, "sending translation request");

        let mut request = self.http.post(&url).json(&payload);
        if let Some(api_key) = self.config.api_key.as_ref() {
            request = request.bearer_auth(api_key);
        }
        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                RelayError::Translation(format!(
                    "request timed out after {:?} (model={})",
                    self.config.timeout, self.config.model
                ))
            } else {
                RelayError::Translation(format!(
                    "request failed (model={}): {}",
                    self.config.model, e
                ))
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            RelayError::Translation(format!("failed to read response body: {}", e))
        })?;

        if !status.is_success() {
            return Err(RelayError::Translation(format!(
                "endpoint returned HTTP {}: {}",
                status,
                truncate_for_error(&body)
            )));
        }

        let parsed: CompletionResponse = serde_json::from_str(&body).map_err(|e| {
            RelayError::Translation(format!(
                "invalid JSON from endpoint: {} (body={})",
                e,
                truncate_for_error(&body)
            ))
        })?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| RelayError::Translation("response had no choices".to_string()))?;

        choice
            .message
            .content
            .into_text()
            .ok_or_else(|| RelayError::Translation("response had empty message content".to_string()))
    }

    fn chat_completions_url(&self) -> String {
        let endpoint = self.config.endpoint.trim().trim_end_matches('/');
        if endpoint.ends_with("/chat/completions") {
            endpoint.to_string()
        } else if endpoint.ends_with("/v1") || endpoint.ends_with("/v1beta/openai") {
            format!("{}/chat/completions", endpoint)
        } else {
            format!("{}/v1/chat/completions", endpoint)
        }
    }
}

fn truncate_for_error(value: &str) -> String {
    const LIMIT: usize = 400;
    if value.len() <= LIMIT {
        return value.to_string();
    }
    // Back off to a char boundary so multibyte bodies cannot panic here.
    let mut cut = LIMIT;
    while !value.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &value[..cut])
}

#[derive(Debug, Clone, Serialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stream: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Clone, Deserialize)]
struct CompletionChoice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: ResponseContent,
}

// Some providers return plain string content, others an array of typed parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ResponseContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl ResponseContent {
    fn into_text(self) -> Option<String> {
        match self {
            ResponseContent::Text(text) => {
                let trimmed = text.trim().to_string();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed)
                }
            }
            ResponseContent::Parts(parts) => {
                let joined = parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect::<Vec<_>>()
                    .join("\n");
                if joined.is_empty() {
                    None
                } else {
                    Some(joined)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct ContentPart {
    #[serde(default)]
    text: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with_endpoint(endpoint: &str) -> TranslatorClient {
        TranslatorClient::new(TranslatorConfig {
            endpoint: endpoint.to_string(),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_chat_completions_url_normalization() {
        let client = client_with_endpoint("https://api.example.com/v1/");
        assert_eq!(
            client.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );

        let client = client_with_endpoint("https://api.example.com/v1/chat/completions");
        assert_eq!(
            client.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );

        let client = client_with_endpoint("https://api.example.com");
        assert_eq!(
            client.chat_completions_url(),
            "https://api.example.com/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_payload_shape() {
        let payload = CompletionRequest {
            model: "gemini-2.5-flash".to_string(),
            messages: vec![ChatMessage::user("hi")],
            temperature: Some(0.1),
            stream: Some(false),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gemini-2.5-flash");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hi");
        assert!(json["temperature"].is_number());
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_response_with_string_content() {
        let body = r#"{"choices":[{"message":{"content":" Hello World "}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices[0].message.content.clone().into_text();
        assert_eq!(content, Some("Hello World".to_string()));
    }

    #[test]
    fn test_response_with_part_array_content() {
        let body = r#"{"choices":[{"message":{"content":[{"type":"text","text":"Hello"},{"type":"text","text":"World"}]}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        let content = parsed.choices[0].message.content.clone().into_text();
        assert_eq!(content, Some("Hello\nWorld".to_string()));
    }

    #[test]
    fn test_truncate_short_body_is_unchanged() {
        assert_eq!(truncate_for_error("bad request"), "bad request");
    }

    #[test]
    fn test_truncate_long_multibyte_body() {
        let body = "€".repeat(200);
        let truncated = truncate_for_error(&body);
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 403);
        assert!(truncated.trim_end_matches("...").chars().all(|c| c == '€'));
    }

    #[test]
    fn test_truncate_long_ascii_body() {
        let body = "x".repeat(500);
        assert_eq!(truncate_for_error(&body).len(), 403);
    }

    #[test]
    fn test_empty_content_is_none() {
        let body = r#"{"choices":[{"message":{"content":"   "}}]}"#;
        let parsed: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.clone().into_text(), None);
    }
}
