use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ecosage_core::{Config, ProviderKind, RetrieverMode, load_dotenv};
use ecosage_gateway::chat::ChatPipeline;
use ecosage_gateway::providers::{OllamaClient, OpenAiCompatibleClient, Provider};
use ecosage_gateway::server;
use ecosage_gateway::state::AppState;
use ecosage_knowledge::{EmbeddingClient, KnowledgeEngine, builtin_catalog};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    load_dotenv();
    let config = Config::from_env()?;
    info!(
        "Configuration loaded (provider: {}, model: {}, retriever: {})",
        config.provider.as_str(),
        config.llm_model,
        config.retriever.as_str()
    );

    // Build the knowledge engine
    let knowledge = match config.retriever {
        RetrieverMode::Embedding => {
            let embedder = EmbeddingClient::new(
                &config.ollama_url,
                &config.embed_model,
                config.generation.timeout(),
            );
            KnowledgeEngine::embedding(embedder)
        }
        RetrieverMode::Lexical => KnowledgeEngine::lexical(),
    };
    let knowledge = Arc::new(knowledge);

    // Index the built-in catalog before accepting requests
    let count = knowledge.load(builtin_catalog()).await?;
    info!(
        "Indexed {} documents ({} retriever)",
        count,
        knowledge.retriever_name()
    );

    // Create the generation provider
    let provider: Arc<dyn Provider> = match config.provider {
        ProviderKind::Ollama => Arc::new(OllamaClient::new(
            &config.ollama_url,
            &config.llm_model,
            &config.generation,
        )),
        ProviderKind::OpenAiCompatible => {
            let base_url = config
                .openai_base_url
                .clone()
                .ok_or(ecosage_core::ConfigError::MissingOpenAiBaseUrl)?;
            Arc::new(OpenAiCompatibleClient::new(
                base_url,
                config.openai_api_key.clone(),
                &config.llm_model,
                &config.generation,
            ))
        }
    };
    info!(
        "Provider ready: {} ({})",
        provider.name(),
        provider.model()
    );

    // Assemble shared state and serve
    let pipeline = ChatPipeline::new(knowledge.clone(), provider, config.top_k);
    let state = Arc::new(AppState::new(
        knowledge,
        pipeline,
        config.llm_model.clone(),
    ));

    server::run(state, &config.bind_addr()).await
}
