//! Ollama API client for local text generation.
//!
//! Speaks both native endpoints: `/api/generate` for flat template
//! prompts and `/api/chat` for structured turns. Streaming is always
//! disabled, one request yields one complete answer.

use serde::{Deserialize, Serialize};

use ecosage_core::{ChatMessage, GenerationSettings};

use crate::providers::provider::{GenerationRequest, PromptStyle, Provider, ProviderError};

/// Ollama API client.
#[derive(Clone)]
pub struct OllamaClient {
    http_client: reqwest::Client,
    base_url: String,
    model: String,
    options: OllamaOptions,
}

#[derive(Debug, Clone, Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

/// Request body for `/api/generate`
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: &'a OllamaOptions,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Request body for `/api/chat`
#[derive(Debug, Serialize)]
struct ChatApiRequest<'a> {
    model: &'a str,
    messages: Vec<OllamaMessage>,
    stream: bool,
    options: &'a OllamaOptions,
}

#[derive(Debug, Serialize, Deserialize)]
struct OllamaMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatApiResponse {
    message: OllamaMessage,
}

impl OllamaClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, settings: &GenerationSettings) -> Self {
        let http_client = reqwest::Client::builder()
            .timeout(settings.timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
            model: model.into(),
            options: OllamaOptions {
                temperature: settings.temperature,
                num_predict: settings.max_tokens,
            },
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn convert_turns(system: String, turns: Vec<ChatMessage>) -> Vec<OllamaMessage> {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(OllamaMessage {
            role: "system".to_string(),
            content: system,
        });
        for turn in turns {
            messages.push(OllamaMessage {
                role: turn.role.as_str().to_string(),
                content: turn.content,
            });
        }
        messages
    }

    async fn post_json<Req: Serialize, Resp: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        body: &Req,
    ) -> Result<Resp, ProviderError> {
        let response = self.http_client.post(url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            ProviderError::InvalidFormat(format!("Failed to parse Ollama response: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl Provider for OllamaClient {
    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn prompt_style(&self) -> PromptStyle {
        PromptStyle::Template
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        let answer = match request {
            GenerationRequest::Prompt(prompt) => {
                let body = GenerateRequest {
                    model: &self.model,
                    prompt: &prompt,
                    stream: false,
                    options: &self.options,
                };
                let response: GenerateResponse =
                    self.post_json(&self.endpoint("/api/generate"), &body).await?;
                response.response
            }
            GenerationRequest::Chat { system, turns } => {
                let body = ChatApiRequest {
                    model: &self.model,
                    messages: Self::convert_turns(system, turns),
                    stream: false,
                    options: &self.options,
                };
                let response: ChatApiResponse =
                    self.post_json(&self.endpoint("/api/chat"), &body).await?;
                response.message.content
            }
        };

        let answer = answer.trim().to_string();
        if answer.is_empty() {
            return Err(ProviderError::NoContent);
        }
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> OllamaClient {
        OllamaClient::new(
            "http://localhost:11434/",
            "llama3.2",
            &GenerationSettings::default(),
        )
    }

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        assert_eq!(
            client().endpoint("/api/generate"),
            "http://localhost:11434/api/generate"
        );
    }

    #[test]
    fn test_convert_turns_prepends_system() {
        let turns = vec![
            ChatMessage::user("hi"),
            ChatMessage::assistant("hello"),
        ];
        let messages = OllamaClient::convert_turns("be kind".to_string(), turns);
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[2].role, "assistant");
    }
}
