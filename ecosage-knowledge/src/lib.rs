//! # EcoSage Knowledge Base
//!
//! Retrieval core for the EcoSage RAG chat service.
//!
//! ## Design
//! - **In-memory store** — a small fixed catalog, append-only for the
//!   life of the process, no database and no chunking
//! - **Pluggable ranking** — cosine similarity over Ollama embeddings,
//!   or stop-word-filtered lexical overlap for fully offline use
//! - **Top-K retrieval** — ranked passages feed the generation prompt
//!
//! ## How it works
//! ```text
//! User: "How can I save water?"
//!   ↓
//! KnowledgeEngine.rank("How can I save water?", top_k)
//!   ↓ embedding cosine (or lexical overlap)
//! Top 3 documents from the sustainability catalog
//!   ↓
//! Rendered into the generation prompt as grounded context
//! ```

pub mod catalog;
pub mod embeddings;
pub mod engine;
pub mod errors;
pub mod models;
pub mod retriever;
pub mod store;

pub use catalog::builtin_catalog;
pub use embeddings::EmbeddingClient;
pub use engine::KnowledgeEngine;
pub use errors::{KnowledgeError, KnowledgeResult};
pub use models::{Document, ScoredDocument};
pub use retriever::{EmbeddingRetriever, LexicalRetriever, Retriever};
pub use store::KnowledgeStore;
