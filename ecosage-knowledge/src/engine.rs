use std::sync::Arc;

use tracing::info;

use crate::embeddings::EmbeddingClient;
use crate::errors::KnowledgeResult;
use crate::models::{Document, ScoredDocument};
use crate::retriever::{EmbeddingRetriever, LexicalRetriever, Retriever};
use crate::store::KnowledgeStore;

/// Facade over the store and the active ranking strategy.
///
/// Constructed once at startup and shared across requests; the store is
/// the only process-lifetime mutable state and it is append-only.
pub struct KnowledgeEngine {
    store: KnowledgeStore,
    retriever: Box<dyn Retriever>,
    embedder: Option<EmbeddingClient>,
}

impl KnowledgeEngine {
    /// Engine with lexical ranking — no external collaborator.
    pub fn lexical() -> Self {
        Self {
            store: KnowledgeStore::new(),
            retriever: Box::new(LexicalRetriever::new()),
            embedder: None,
        }
    }

    /// Engine with embedding-based ranking. Documents are embedded at
    /// load/add time; queries at rank time.
    pub fn embedding(embedder: EmbeddingClient) -> Self {
        Self {
            store: KnowledgeStore::new(),
            retriever: Box::new(EmbeddingRetriever::new(embedder.clone())),
            embedder: Some(embedder),
        }
    }

    pub fn retriever_name(&self) -> &'static str {
        self.retriever.name()
    }

    pub fn embed_model(&self) -> Option<&str> {
        self.embedder.as_ref().map(|e| e.model())
    }

    /// Bulk-load the catalog, embedding the whole batch first when the
    /// vector strategy is active. Fails fast on duplicate ids.
    pub async fn load(&self, mut documents: Vec<Document>) -> KnowledgeResult<usize> {
        if let Some(embedder) = &self.embedder {
            let texts: Vec<String> = documents
                .iter()
                .map(|d| format!("{}\n{}", d.title, d.content))
                .collect();
            info!("Embedding {} documents with {}", texts.len(), embedder.model());
            let vectors = embedder.embed_batch(&texts).await?;
            for (doc, vector) in documents.iter_mut().zip(vectors) {
                doc.embedding = Some(vector);
            }
        }
        self.store.load(documents)
    }

    /// Add one document at runtime. The embedding is computed before
    /// insertion, so a failing embedder rejects the add and leaves the
    /// store untouched. Returns the new total count.
    pub async fn add(&self, mut document: Document) -> KnowledgeResult<usize> {
        if let Some(embedder) = &self.embedder {
            let text = format!("{}\n{}", document.title, document.content);
            let vector = embedder.embed_query(&text).await?;
            document.embedding = Some(vector);
        }
        self.store.insert(document)
    }

    /// Rank stored documents against the query. Retrieval completes
    /// fully before the caller assembles a prompt from the result.
    pub async fn rank(&self, query: &str, top_k: usize) -> KnowledgeResult<Vec<ScoredDocument>> {
        let snapshot = self.store.all();
        self.retriever.rank(&snapshot, query, top_k).await
    }

    pub fn all(&self) -> Vec<Arc<Document>> {
        self.store.all()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn engine_with_docs() -> KnowledgeEngine {
        let engine = KnowledgeEngine::lexical();
        let docs = vec![
            Document::new("water-001", "Water Conservation", "save water daily", "water"),
            Document::new("energy-001", "Energy Tips", "switch to led bulbs", "energy"),
        ];
        engine.load(docs).await.unwrap();
        engine
    }

    #[tokio::test]
    async fn test_add_then_rank_round_trip() {
        let engine = KnowledgeEngine::lexical();
        engine
            .load(vec![Document::new("a", "Alpha", "composting basics", "waste")])
            .await
            .unwrap();

        let count = engine
            .add(Document::new("b", "Beta", "rainwater harvesting", "water"))
            .await
            .unwrap();
        assert_eq!(count, 2);
        assert!(engine.all().iter().any(|d| d.id == "b"));

        let ranked = engine.rank("rainwater harvesting", 3).await.unwrap();
        assert_eq!(ranked[0].document.id, "b");
    }

    #[tokio::test]
    async fn test_duplicate_add_leaves_count_unchanged() {
        let engine = engine_with_docs().await;
        let before = engine.count();
        let result = engine
            .add(Document::new("water-001", "Duplicate", "x", "water"))
            .await;
        assert!(result.is_err());
        assert_eq!(engine.count(), before);
    }

    #[test]
    fn test_lexical_engine_reports_no_embedder() {
        let engine = KnowledgeEngine::lexical();
        assert_eq!(engine.retriever_name(), "lexical");
        assert!(engine.embed_model().is_none());
    }
}
