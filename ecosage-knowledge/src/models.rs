use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// A knowledge base document.
///
/// Identity (`id`) is immutable once created; content updates are
/// modeled as replacement, never in-place mutation. The embedding is
/// present only when the vector strategy indexed the document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
}

impl Document {
    /// Build a document, trimming surrounding whitespace from the body.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into().trim().to_string(),
            category: category.into(),
            embedding: None,
        }
    }

    /// Replace the embedding, consuming self.
    pub fn with_embedding(mut self, embedding: Vec<f32>) -> Self {
        self.embedding = Some(embedding);
        self
    }

    /// Text the lexical strategy matches against.
    pub fn searchable_text(&self) -> String {
        format!("{} {}", self.title, self.content).to_lowercase()
    }
}

/// A document paired with its per-query relevance score.
///
/// Ephemeral — computed fresh for every query, never cached.
#[derive(Debug, Clone)]
pub struct ScoredDocument {
    pub document: Arc<Document>,
    pub score: f32,
}

/// Cosine similarity between two vectors, 0.0 when either has no norm.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let mut dot = 0.0f32;
    let mut norm_a = 0.0f32;
    let mut norm_b = 0.0f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_trims_content() {
        let doc = Document::new("water-001", "Water", "\n  body text \n", "water");
        assert_eq!(doc.content, "body text");
        assert!(doc.embedding.is_none());
    }

    #[test]
    fn test_cosine_similarity_identical() {
        let v = vec![0.5, 0.5, 0.7];
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_mismatched_or_empty() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[1.0]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
