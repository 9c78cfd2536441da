//! EcoSage gateway: the HTTP surface and chat pipeline.
//!
//! Wires the knowledge engine to a text-generation provider and exposes
//! a small JSON API:
//!
//! ```text
//! POST /chat           question + history -> grounded answer + sources
//! GET  /documents      catalog listing
//! POST /documents/add  runtime document insertion
//! GET  /health         liveness + index size
//! GET  /               service metadata
//! ```

pub mod chat;
pub mod prompt;
pub mod providers;
pub mod server;
pub mod state;

pub use chat::{ChatError, ChatOutcome, ChatPipeline, SourceRef};
pub use providers::provider::{GenerationRequest, PromptStyle, Provider, ProviderError};
pub use state::AppState;
