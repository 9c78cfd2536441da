//! HTTP surface for the EcoSage service.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use ecosage_core::ChatMessage;
use ecosage_knowledge::{Document, KnowledgeError};

use crate::chat::{ChatError, SourceRef};
use crate::state::AppState;

/// Chat request from HTTP API
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Chat response for HTTP API
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub answer: String,
    pub retrieved_docs: Vec<SourceRef>,
    pub model: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub id: String,
    pub title: String,
    pub category: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub count: usize,
    pub documents: Vec<DocumentSummary>,
}

#[derive(Debug, Deserialize)]
pub struct AddDocumentRequest {
    pub title: String,
    pub content: String,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "general".to_string()
}

#[derive(Debug, Serialize)]
pub struct AddDocumentResponse {
    pub status: String,
    pub id: String,
    pub title: String,
    pub document_count: usize,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub llm_model: String,
    pub embed_model: Option<String>,
    pub retriever: String,
    pub documents_indexed: usize,
}

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
    pub status: String,
    pub llm: String,
    pub embedder: Option<String>,
    pub retriever: String,
    pub documents: usize,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Run the HTTP server
pub async fn run(state: Arc<AppState>, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}

/// Create the router with all routes
fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/chat", post(chat_handler))
        .route("/documents", get(documents_handler))
        .route("/documents/add", post(add_document_handler))
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// Service metadata - GET /
async fn root_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ServiceInfo {
        name: "EcoSage RAG API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        llm: state.llm_model.clone(),
        embedder: state.embed_model.clone(),
        retriever: state.knowledge.retriever_name().to_string(),
        documents: state.knowledge.count(),
    })
}

/// Health check handler - GET /health
async fn health_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        llm_model: state.llm_model.clone(),
        embed_model: state.embed_model.clone(),
        retriever: state.knowledge.retriever_name().to_string(),
        documents_indexed: state.knowledge.count(),
    })
}

/// Chat handler - POST /chat
async fn chat_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    match state.pipeline.run(&request.message, &request.history).await {
        Ok(outcome) => {
            info!(
                "Answered using: {:?}",
                outcome
                    .sources
                    .iter()
                    .map(|s| s.title.as_str())
                    .collect::<Vec<_>>()
            );
            (
                StatusCode::OK,
                Json(ChatResponse {
                    answer: outcome.answer,
                    retrieved_docs: outcome.sources,
                    model: outcome.model,
                }),
            )
                .into_response()
        }
        Err(ChatError::EmptyQuestion) => error_response(
            StatusCode::BAD_REQUEST,
            "message must not be empty".to_string(),
        ),
        Err(e) => {
            error!("Chat pipeline error: {}", e);
            error_response(StatusCode::BAD_GATEWAY, format!("Pipeline error: {e}"))
        }
    }
}

/// Catalog listing - GET /documents
async fn documents_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let docs = state.knowledge.all();
    Json(DocumentsResponse {
        count: docs.len(),
        documents: docs
            .iter()
            .map(|d| DocumentSummary {
                id: d.id.clone(),
                title: d.title.clone(),
                category: d.category.clone(),
            })
            .collect(),
    })
}

/// Runtime document insertion - POST /documents/add
async fn add_document_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AddDocumentRequest>,
) -> impl IntoResponse {
    if request.title.trim().is_empty() || request.content.trim().is_empty() {
        return error_response(
            StatusCode::BAD_REQUEST,
            "title and content must not be empty".to_string(),
        );
    }

    let id = format!("doc-{}", uuid::Uuid::new_v4());
    let document = Document::new(&id, &request.title, &request.content, &request.category);

    match state.knowledge.add(document).await {
        Ok(document_count) => {
            info!("Added document '{}' ({})", request.title, id);
            (
                StatusCode::OK,
                Json(AddDocumentResponse {
                    status: "added".to_string(),
                    id,
                    title: request.title,
                    document_count,
                }),
            )
                .into_response()
        }
        Err(KnowledgeError::DuplicateId(id)) => {
            error_response(StatusCode::CONFLICT, format!("duplicate document id: {id}"))
        }
        Err(e) => {
            error!("Failed to add document: {}", e);
            error_response(StatusCode::BAD_GATEWAY, format!("Indexing error: {e}"))
        }
    }
}

fn error_response(status: StatusCode, error: String) -> axum::response::Response {
    (status, Json(ErrorResponse { error })).into_response()
}
