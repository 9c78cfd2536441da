//! Service configuration loaded from environment variables.
//!
//! All knobs come from the environment (with a `.env` file as a
//! development convenience). Secrets such as `OPENAI_API_KEY` are never
//! written to disk by this crate.
//!
//! Variables and defaults:
//! - `OLLAMA_URL` (http://localhost:11434)
//! - `LLM_PROVIDER` (`ollama` | `openai_compatible`, default `ollama`)
//! - `LLM_MODEL` (llama3.2)
//! - `EMBED_MODEL` (nomic-embed-text)
//! - `RETRIEVER` (`embedding` | `lexical`, default `embedding`)
//! - `TOP_K_DOCS` (3)
//! - `LLM_TEMPERATURE` (0.7)
//! - `LLM_MAX_TOKENS` (300)
//! - `REQUEST_TIMEOUT_SECS` (300)
//! - `OPENAI_BASE_URL`, `OPENAI_API_KEY` (openai_compatible only)
//! - `ECOSAGE_HOST` (127.0.0.1), `ECOSAGE_PORT` (8000)

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Load .env file if present (development convenience).
pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Which retrieval strategy ranks documents against a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrieverMode {
    /// Cosine similarity over embeddings computed at indexing time.
    Embedding,
    /// Stop-word-filtered token overlap. No external dependency.
    Lexical,
}

impl RetrieverMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RetrieverMode::Embedding => "embedding",
            RetrieverMode::Lexical => "lexical",
        }
    }
}

impl std::str::FromStr for RetrieverMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "embedding" | "vector" => Ok(RetrieverMode::Embedding),
            "lexical" | "keyword" => Ok(RetrieverMode::Lexical),
            _ => Err(format!("Unknown retriever mode: {}", s)),
        }
    }
}

/// Which generation backend answers chat requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Ollama,
    OpenAiCompatible,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAiCompatible => "openai_compatible",
        }
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(ProviderKind::Ollama),
            "openai_compatible" | "openai-compatible" | "openai" => {
                Ok(ProviderKind::OpenAiCompatible)
            }
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// Generation knobs passed through to the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl GenerationSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 300,
            timeout_secs: 300,
        }
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },

    #[error("LLM_PROVIDER=openai_compatible requires OPENAI_BASE_URL")]
    MissingOpenAiBaseUrl,
}

/// Combined service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub provider: ProviderKind,
    pub llm_model: String,
    pub embed_model: String,
    pub retriever: RetrieverMode,
    pub top_k: usize,
    pub generation: GenerationSettings,
    pub openai_base_url: Option<String>,
    pub openai_api_key: Option<String>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable fails to parse, or if the
    /// openai_compatible provider is selected without a base URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            ollama_url: var_or("OLLAMA_URL", "http://localhost:11434"),
            provider: parse_var("LLM_PROVIDER", ProviderKind::Ollama)?,
            llm_model: var_or("LLM_MODEL", "llama3.2"),
            embed_model: var_or("EMBED_MODEL", "nomic-embed-text"),
            retriever: parse_var("RETRIEVER", RetrieverMode::Embedding)?,
            top_k: parse_var("TOP_K_DOCS", 3)?,
            generation: GenerationSettings {
                temperature: parse_var("LLM_TEMPERATURE", 0.7)?,
                max_tokens: parse_var("LLM_MAX_TOKENS", 300)?,
                timeout_secs: parse_var("REQUEST_TIMEOUT_SECS", 300)?,
            },
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            host: var_or("ECOSAGE_HOST", "127.0.0.1"),
            port: parse_var("ECOSAGE_PORT", 8000)?,
        };

        if config.provider == ProviderKind::OpenAiCompatible && config.openai_base_url.is_none() {
            return Err(ConfigError::MissingOpenAiBaseUrl);
        }

        Ok(config)
    }

    /// Address the gateway binds to, as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn var_or(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

fn parse_var<T>(name: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value })
        }
        _ => Ok(default),
    }
}
