#[derive(Debug, thiserror::Error)]
pub enum KnowledgeError {
    #[error("duplicate document id: {0}")]
    DuplicateId(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("embedding error: {0}")]
    Embedding(String),
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;
