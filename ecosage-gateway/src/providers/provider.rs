//! Provider trait for abstracting different LLM backends.

use ecosage_core::ChatMessage;

/// How a provider wants its input assembled.
///
/// Template providers take one rendered prompt string; chat providers
/// take a system instruction plus structured turns. Both conventions
/// carry the same persona, retrieved passages, and trimmed history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptStyle {
    Template,
    Chat,
}

/// A fully assembled generation request, shaped per [`PromptStyle`].
#[derive(Debug, Clone)]
pub enum GenerationRequest {
    /// One flat prompt string (template convention).
    Prompt(String),
    /// System instruction plus conversation turns (chat convention).
    Chat {
        system: String,
        turns: Vec<ChatMessage>,
    },
}

/// Provider error types
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),
    #[error("Request timed out")]
    Timeout,
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("No content in response")]
    NoContent,
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ProviderError::Timeout
        } else {
            ProviderError::Http(e)
        }
    }
}

impl ProviderError {
    /// True when the failure was the client-side request timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProviderError::Timeout)
    }
}

/// Provider trait for different LLM backends
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Provider name
    fn name(&self) -> &str;

    /// Current model
    fn model(&self) -> &str;

    /// The input convention this provider expects.
    fn prompt_style(&self) -> PromptStyle;

    /// Run one generation and return the answer text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError>;
}
