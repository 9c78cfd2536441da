//! Chat orchestration: retrieve, assemble, generate, cite.

use std::sync::Arc;

use serde::Serialize;
use tracing::{error, info};

use ecosage_core::ChatMessage;
use ecosage_knowledge::{KnowledgeEngine, KnowledgeError, ScoredDocument};

use crate::prompt;
use crate::providers::provider::{Provider, ProviderError};

const SNIPPET_CHARS: usize = 200;

/// A citation for one retrieved document, in rank order.
#[derive(Debug, Clone, Serialize)]
pub struct SourceRef {
    pub id: String,
    pub title: String,
    pub category: String,
    pub score: Option<f32>,
    pub snippet: String,
}

impl SourceRef {
    fn from_scored(scored: &ScoredDocument) -> Self {
        let doc = &scored.document;
        Self {
            id: doc.id.clone(),
            title: doc.title.clone(),
            category: doc.category.clone(),
            score: Some((scored.score * 1000.0).round() / 1000.0),
            snippet: snippet(&doc.content),
        }
    }
}

/// The result of one full chat turn.
#[derive(Debug)]
pub struct ChatOutcome {
    pub answer: String,
    pub sources: Vec<SourceRef>,
    pub model: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message must not be empty")]
    EmptyQuestion,
    #[error("retrieval failed: {0}")]
    Knowledge(#[from] KnowledgeError),
    #[error("generation failed: {0}")]
    Generation(#[from] ProviderError),
}

/// Runs the retrieve-assemble-generate sequence for each request.
///
/// Stateless between requests: history arrives from the caller and the
/// knowledge store is only read here, never written.
pub struct ChatPipeline {
    knowledge: Arc<KnowledgeEngine>,
    provider: Arc<dyn Provider>,
    top_k: usize,
}

impl ChatPipeline {
    pub fn new(knowledge: Arc<KnowledgeEngine>, provider: Arc<dyn Provider>, top_k: usize) -> Self {
        Self {
            knowledge,
            provider,
            top_k,
        }
    }

    pub fn model(&self) -> &str {
        self.provider.model()
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Answer one question grounded in the knowledge base.
    ///
    /// Retrieval completes before any generation starts; a provider
    /// failure surfaces as a single error with no retry.
    pub async fn run(
        &self,
        question: &str,
        history: &[ChatMessage],
    ) -> Result<ChatOutcome, ChatError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ChatError::EmptyQuestion);
        }

        let retrieved = self.knowledge.rank(question, self.top_k).await?;
        info!(
            "Retrieved {} documents: {:?}",
            retrieved.len(),
            retrieved
                .iter()
                .map(|s| s.document.title.as_str())
                .collect::<Vec<_>>()
        );

        let request = prompt::assemble(
            self.provider.prompt_style(),
            &retrieved,
            history,
            question,
        );
        let answer = match self.provider.generate(request).await {
            Ok(answer) => answer,
            Err(e) => {
                let prefix: String = question.chars().take(80).collect();
                error!(
                    "Generation via {} failed for {:?}: {}",
                    self.provider.name(),
                    prefix,
                    e
                );
                return Err(e.into());
            }
        };

        Ok(ChatOutcome {
            answer,
            sources: retrieved.iter().map(SourceRef::from_scored).collect(),
            model: self.provider.model().to_string(),
        })
    }
}

/// First 200 characters of the content, always suffixed with an
/// ellipsis. Cuts on a char boundary, never mid code point.
fn snippet(content: &str) -> String {
    let mut out: String = content.chars().take(SNIPPET_CHARS).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_truncates_long_content() {
        let content = "x".repeat(500);
        let s = snippet(&content);
        assert_eq!(s.len(), SNIPPET_CHARS + 3);
        assert!(s.ends_with("..."));
    }

    #[test]
    fn test_snippet_keeps_short_content_whole() {
        assert_eq!(snippet("short"), "short...");
    }

    #[test]
    fn test_snippet_respects_char_boundaries() {
        let content = "é".repeat(300);
        let s = snippet(&content);
        assert_eq!(s.chars().count(), SNIPPET_CHARS + 3);
    }

    #[test]
    fn test_score_rounded_to_three_decimals() {
        let scored = ScoredDocument {
            document: std::sync::Arc::new(ecosage_knowledge::Document::new(
                "water-001",
                "Water",
                "content",
                "water",
            )),
            score: 0.123_456,
        };
        let source = SourceRef::from_scored(&scored);
        assert_eq!(source.score, Some(0.123));
    }
}
