pub mod config;
pub mod message;

pub use config::{Config, ConfigError, GenerationSettings, ProviderKind, RetrieverMode, load_dotenv};
pub use message::{ChatMessage, MessageRole};
