//! Pipeline-level tests with a mock generation provider.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ecosage_core::ChatMessage;
use ecosage_gateway::chat::{ChatError, ChatPipeline};
use ecosage_gateway::providers::provider::{
    GenerationRequest, PromptStyle, Provider, ProviderError,
};
use ecosage_knowledge::{KnowledgeEngine, builtin_catalog};

struct MockProvider {
    style: PromptStyle,
    calls: AtomicUsize,
    fail_next: AtomicBool,
    last_request: Mutex<Option<GenerationRequest>>,
}

impl MockProvider {
    fn new(style: PromptStyle) -> Self {
        Self {
            style,
            calls: AtomicUsize::new(0),
            fail_next: AtomicBool::new(false),
            last_request: Mutex::new(None),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl Provider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-model"
    }

    fn prompt_style(&self) -> PromptStyle {
        self.style
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request);
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(ProviderError::Api {
                status: 500,
                message: "backend down".to_string(),
            });
        }
        Ok("Fix leaking toilets and take shorter showers.".to_string())
    }
}

async fn pipeline_with_catalog(provider: Arc<MockProvider>) -> (ChatPipeline, Arc<KnowledgeEngine>) {
    let knowledge = Arc::new(KnowledgeEngine::lexical());
    knowledge
        .load(builtin_catalog())
        .await
        .expect("catalog load failed");
    (
        ChatPipeline::new(knowledge.clone(), provider, 3),
        knowledge,
    )
}

#[tokio::test]
async fn empty_question_never_reaches_the_provider() {
    let provider = Arc::new(MockProvider::new(PromptStyle::Template));
    let (pipeline, _) = pipeline_with_catalog(provider.clone()).await;

    let result = pipeline.run("   ", &[]).await;
    assert!(matches!(result, Err(ChatError::EmptyQuestion)));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn water_question_retrieves_water_sources() {
    let provider = Arc::new(MockProvider::new(PromptStyle::Template));
    let (pipeline, _) = pipeline_with_catalog(provider.clone()).await;

    let outcome = pipeline
        .run("How can I save water at home?", &[])
        .await
        .expect("pipeline run failed");

    assert_eq!(outcome.model, "mock-model");
    assert!(!outcome.sources.is_empty());
    assert!(outcome.sources.len() <= 3);
    assert!(outcome.sources.iter().any(|s| s.id == "water-001"));
    for source in &outcome.sources {
        assert!(source.snippet.ends_with("..."));
        assert!(source.score.is_some());
    }
    // Rank order is non-increasing by score
    for pair in outcome.sources.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    // The rendered prompt carries the retrieved passages and the question
    let request = provider.last_request.lock().unwrap().take();
    match request {
        Some(GenerationRequest::Prompt(prompt)) => {
            assert!(prompt.contains("Retrieved Knowledge:"));
            assert!(prompt.contains("USER: How can I save water at home?"));
            assert!(prompt.ends_with("ECOSAGE:"));
        }
        other => panic!("expected a template prompt, got {other:?}"),
    }
}

#[tokio::test]
async fn provider_failure_surfaces_once_and_leaves_store_intact() {
    let provider = Arc::new(MockProvider::new(PromptStyle::Template));
    let (pipeline, knowledge) = pipeline_with_catalog(provider.clone()).await;
    let count_before = knowledge.count();

    provider.fail_next.store(true, Ordering::SeqCst);
    let result = pipeline.run("composting tips", &[]).await;
    assert!(matches!(result, Err(ChatError::Generation(_))));
    assert_eq!(provider.calls(), 1);
    assert_eq!(knowledge.count(), count_before);

    // Next request goes through normally
    let outcome = pipeline
        .run("composting tips", &[])
        .await
        .expect("second run failed");
    assert!(!outcome.answer.is_empty());
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn chat_style_provider_receives_structured_turns() {
    let provider = Arc::new(MockProvider::new(PromptStyle::Chat));
    let (pipeline, _) = pipeline_with_catalog(provider.clone()).await;

    let history = vec![
        ChatMessage::user("tell me about plastics"),
        ChatMessage::assistant("Plastics are a major waste stream."),
    ];
    pipeline
        .run("what about recycling numbers?", &history)
        .await
        .expect("pipeline run failed");

    let request = provider.last_request.lock().unwrap().take();
    match request {
        Some(GenerationRequest::Chat { system, turns }) => {
            assert!(system.starts_with("You are EcoSage"));
            assert_eq!(turns.len(), 3);
            assert_eq!(
                turns.last().map(|t| t.content.as_str()),
                Some("what about recycling numbers?")
            );
        }
        other => panic!("expected a chat request, got {other:?}"),
    }
}
