//! Shared application state.

use std::sync::Arc;

use ecosage_knowledge::KnowledgeEngine;

use crate::chat::ChatPipeline;

/// Everything the HTTP handlers need, built once at startup.
pub struct AppState {
    pub knowledge: Arc<KnowledgeEngine>,
    pub pipeline: ChatPipeline,
    pub llm_model: String,
    pub embed_model: Option<String>,
}

impl AppState {
    pub fn new(
        knowledge: Arc<KnowledgeEngine>,
        pipeline: ChatPipeline,
        llm_model: String,
    ) -> Self {
        let embed_model = knowledge.embed_model().map(str::to_string);
        Self {
            knowledge,
            pipeline,
            llm_model,
            embed_model,
        }
    }
}
