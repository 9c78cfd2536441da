//! OpenAI-compatible API client.
//!
//! Works against any server exposing `/v1/chat/completions`, with or
//! without an API key. Flat prompts are sent as a single user message.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};

use ecosage_core::{ChatMessage, GenerationSettings};

use crate::providers::provider::{GenerationRequest, PromptStyle, Provider, ProviderError};

/// OpenAI-compatible API client.
#[derive(Clone)]
pub struct OpenAiCompatibleClient {
    http_client: reqwest::Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

/// Request body for the Chat Completions API
#[derive(Debug, Serialize)]
struct ChatCompletionsRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionsResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl OpenAiCompatibleClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
        settings: &GenerationSettings,
    ) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            api_key,
            model: model.into(),
            base_url: base_url.into(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        }
    }

    /// Build request headers with optional auth.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(api_key) = &self.api_key {
            let auth_value = format!("Bearer {}", api_key);
            if let Ok(header_value) = HeaderValue::from_str(&auth_value) {
                headers.insert(AUTHORIZATION, header_value);
            }
        }

        headers
    }

    fn chat_completions_url(&self) -> String {
        let base = self.base_url.trim_end_matches('/');
        if base.ends_with("/v1") {
            format!("{}/chat/completions", base)
        } else {
            format!("{}/v1/chat/completions", base)
        }
    }

    fn convert_request(&self, request: GenerationRequest) -> Vec<OpenAiMessage> {
        match request {
            GenerationRequest::Prompt(prompt) => vec![OpenAiMessage {
                role: "user".to_string(),
                content: prompt,
            }],
            GenerationRequest::Chat { system, turns } => {
                let mut messages = Vec::with_capacity(turns.len() + 1);
                messages.push(OpenAiMessage {
                    role: "system".to_string(),
                    content: system,
                });
                for turn in turns {
                    messages.push(OpenAiMessage {
                        role: turn.role.as_str().to_string(),
                        content: turn.content,
                    });
                }
                messages
            }
        }
    }
}

#[async_trait::async_trait]
impl Provider for OpenAiCompatibleClient {
    fn name(&self) -> &str {
        "openai_compatible"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn prompt_style(&self) -> PromptStyle {
        PromptStyle::Chat
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let request_body = ChatCompletionsRequest {
            model: self.model.clone(),
            messages: self.convert_request(request),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let response = self
            .http_client
            .post(self.chat_completions_url())
            .headers(self.build_headers())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response_text = response.text().await?;
        let completions: ChatCompletionsResponse = serde_json::from_str(&response_text)
            .map_err(|e| {
                ProviderError::InvalidFormat(format!(
                    "Failed to parse OpenAI-compatible response: {e}"
                ))
            })?;

        let answer = completions
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|text| text.trim().to_string())
            .unwrap_or_default();

        if answer.is_empty() {
            return Err(ProviderError::NoContent);
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> OpenAiCompatibleClient {
        OpenAiCompatibleClient::new(base_url, None, "llama3.1", &GenerationSettings::default())
    }

    #[test]
    fn test_chat_completions_url_without_v1_suffix() {
        assert_eq!(
            client("http://127.0.0.1:8080/").chat_completions_url(),
            "http://127.0.0.1:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_chat_completions_url_with_v1_suffix() {
        assert_eq!(
            client("http://127.0.0.1:8080/v1").chat_completions_url(),
            "http://127.0.0.1:8080/v1/chat/completions"
        );
    }

    #[test]
    fn test_flat_prompt_becomes_single_user_message() {
        let messages =
            client("http://x").convert_request(GenerationRequest::Prompt("hello".to_string()));
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn test_chat_request_keeps_turn_order() {
        let messages = client("http://x").convert_request(GenerationRequest::Chat {
            system: "persona".to_string(),
            turns: vec![ChatMessage::user("a"), ChatMessage::assistant("b")],
        });
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant"]);
    }
}
