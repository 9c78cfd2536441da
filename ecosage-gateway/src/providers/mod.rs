//! Text-generation backends.

pub mod ollama;
pub mod openai_compatible;
pub mod provider;

pub use ollama::OllamaClient;
pub use openai_compatible::OpenAiCompatibleClient;
pub use provider::{GenerationRequest, PromptStyle, Provider, ProviderError};
