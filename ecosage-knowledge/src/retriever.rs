//! Pluggable relevance ranking over the document store.
//!
//! Both strategies share one contract so the chat pipeline never knows
//! which is wired in: `rank` returns at most `top_k` documents, scores
//! strictly non-increasing, ties keeping insertion order.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::embeddings::EmbeddingClient;
use crate::errors::KnowledgeResult;
use crate::models::{Document, ScoredDocument, cosine_similarity};

/// Ranks a snapshot of the store against a query.
#[async_trait]
pub trait Retriever: Send + Sync {
    /// Strategy name for logging and the health endpoint.
    fn name(&self) -> &'static str;

    async fn rank(
        &self,
        docs: &[Arc<Document>],
        query: &str,
        top_k: usize,
    ) -> KnowledgeResult<Vec<ScoredDocument>>;
}

/// Query words that carry no relevance signal.
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "can", "could", "do", "does", "for", "how", "i", "in", "is", "it",
    "me", "my", "of", "on", "should", "the", "to", "was", "what", "when", "where", "which", "why",
    "you", "your",
];

/// Keyword-overlap ranking. No external dependency, fully offline.
#[derive(Debug, Default)]
pub struct LexicalRetriever;

impl LexicalRetriever {
    pub fn new() -> Self {
        Self
    }

    /// Lowercased query tokens with stop words removed.
    fn query_tokens(query: &str) -> HashSet<String> {
        query
            .to_lowercase()
            .split_whitespace()
            .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
            .filter(|t| !t.is_empty() && !STOP_WORDS.contains(&t.as_str()))
            .collect()
    }

    /// Number of query tokens present in the document's title + content.
    /// Each token counts once no matter how often the document repeats it.
    fn score(tokens: &HashSet<String>, doc: &Document) -> usize {
        let text = doc.searchable_text();
        tokens.iter().filter(|t| text.contains(t.as_str())).count()
    }
}

#[async_trait]
impl Retriever for LexicalRetriever {
    fn name(&self) -> &'static str {
        "lexical"
    }

    async fn rank(
        &self,
        docs: &[Arc<Document>],
        query: &str,
        top_k: usize,
    ) -> KnowledgeResult<Vec<ScoredDocument>> {
        let tokens = Self::query_tokens(query);
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        let mut scored: Vec<ScoredDocument> = docs
            .iter()
            .filter_map(|doc| {
                let score = Self::score(&tokens, doc);
                (score > 0).then(|| ScoredDocument {
                    document: Arc::clone(doc),
                    score: score as f32,
                })
            })
            .collect();

        // sort_by is stable: equal scores keep insertion order
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}

/// Cosine-similarity ranking over embeddings computed at indexing time.
#[derive(Debug, Clone)]
pub struct EmbeddingRetriever {
    embedder: EmbeddingClient,
}

impl EmbeddingRetriever {
    pub fn new(embedder: EmbeddingClient) -> Self {
        Self { embedder }
    }
}

#[async_trait]
impl Retriever for EmbeddingRetriever {
    fn name(&self) -> &'static str {
        "embedding"
    }

    async fn rank(
        &self,
        docs: &[Arc<Document>],
        query: &str,
        top_k: usize,
    ) -> KnowledgeResult<Vec<ScoredDocument>> {
        if docs.is_empty() || top_k == 0 {
            return Ok(Vec::new());
        }

        let query_embedding = self.embedder.embed_query(query).await?;

        // Documents without an embedding are excluded, not zero-scored
        let mut scored: Vec<ScoredDocument> = docs
            .iter()
            .filter_map(|doc| {
                doc.embedding.as_ref().map(|embedding| ScoredDocument {
                    document: Arc::clone(doc),
                    score: cosine_similarity(&query_embedding, embedding),
                })
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs() -> Vec<Arc<Document>> {
        vec![
            Arc::new(Document::new(
                "water-001",
                "Water Conservation in Daily Life",
                "Shorten showers to save water. Fix leaking toilets. Collect rainwater \
                 for the garden. Water plants in the early morning.",
                "water",
            )),
            Arc::new(Document::new(
                "transport-001",
                "Sustainable Transportation Options",
                "Walk or cycle for short trips. Use public transit. Carpool.",
                "transport",
            )),
        ]
    }

    #[tokio::test]
    async fn test_lexical_water_query_ranks_water_doc() {
        let retriever = LexicalRetriever::new();
        let ranked = retriever
            .rank(&docs(), "How can I save water?", 3)
            .await
            .unwrap();

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].document.id, "water-001");
        assert!(ranked[0].score > 0.0);
    }

    #[tokio::test]
    async fn test_lexical_zero_overlap_returns_empty() {
        let retriever = LexicalRetriever::new();
        let ranked = retriever
            .rank(&docs(), "quantum chromodynamics lattice", 3)
            .await
            .unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_lexical_all_stop_words_returns_empty() {
        let retriever = LexicalRetriever::new();
        let ranked = retriever.rank(&docs(), "how can i do what", 3).await.unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_lexical_respects_top_k_and_ordering() {
        let many: Vec<Arc<Document>> = (0..5)
            .map(|i| {
                // doc i mentions "water" plus i extra matching words
                let extras = ["garden", "shower", "rain", "tap"][..i.min(4)].join(" ");
                Arc::new(Document::new(
                    format!("doc-{i}"),
                    "Water notes",
                    format!("water {extras}"),
                    "water",
                ))
            })
            .collect();

        let retriever = LexicalRetriever::new();
        let ranked = retriever
            .rank(&many, "water garden shower rain tap", 3)
            .await
            .unwrap();

        assert_eq!(ranked.len(), 3);
        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        // Highest score first: the doc with all five words
        assert_eq!(ranked[0].document.id, "doc-4");
    }

    #[tokio::test]
    async fn test_lexical_top_k_zero() {
        let retriever = LexicalRetriever::new();
        let ranked = retriever.rank(&docs(), "water", 0).await.unwrap();
        assert!(ranked.is_empty());
    }

    #[tokio::test]
    async fn test_lexical_ties_keep_insertion_order() {
        let pair = vec![
            Arc::new(Document::new("first", "Compost guide", "compost bins", "waste")),
            Arc::new(Document::new("second", "Compost tips", "compost heaps", "waste")),
        ];
        let retriever = LexicalRetriever::new();
        let ranked = retriever.rank(&pair, "compost", 2).await.unwrap();
        assert_eq!(ranked[0].document.id, "first");
        assert_eq!(ranked[1].document.id, "second");
    }

    #[test]
    fn test_query_tokens_strip_punctuation_and_stop_words() {
        let tokens = LexicalRetriever::query_tokens("How can I save water?");
        assert_eq!(tokens.len(), 2);
        assert!(tokens.contains("save"));
        assert!(tokens.contains("water"));
    }
}
