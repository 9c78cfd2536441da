//! Prompt assembly: persona, retrieved passages, trimmed history.
//!
//! The same grounding material feeds two shapes: a single rendered
//! template string for `/api/generate`-style backends, and a system
//! instruction plus explicit turns for chat-completion backends.

use ecosage_core::ChatMessage;
use ecosage_knowledge::ScoredDocument;

use crate::providers::provider::{GenerationRequest, PromptStyle};

/// Only the most recent turns reach the model.
pub const HISTORY_LIMIT: usize = 6;

pub const PERSONA: &str = "You are EcoSage, a warm and knowledgeable sustainability advisor.\n\
Your role is to help people live more eco-friendly lives and understand environmental issues.\n\
Only discuss topics related to environment, sustainability, ecology, climate, and resources.\n\
If asked about unrelated topics, gently redirect back to sustainability.";

const STYLE_GUIDE: &str = "Respond warmly and practically. Give concrete, actionable advice.\n\
Keep it concise (3-6 sentences or a short list).\n\
End with one small action the person can take TODAY.";

/// Drop everything but the last [`HISTORY_LIMIT`] turns, oldest first.
pub fn trim_history(history: &[ChatMessage]) -> &[ChatMessage] {
    let start = history.len().saturating_sub(HISTORY_LIMIT);
    &history[start..]
}

/// Assemble a generation request in the shape the provider expects.
pub fn assemble(
    style: PromptStyle,
    documents: &[ScoredDocument],
    history: &[ChatMessage],
    question: &str,
) -> GenerationRequest {
    match style {
        PromptStyle::Template => {
            GenerationRequest::Prompt(render_template(documents, history, question))
        }
        PromptStyle::Chat => {
            let mut turns: Vec<ChatMessage> = trim_history(history).to_vec();
            turns.push(ChatMessage::user(question));
            GenerationRequest::Chat {
                system: chat_system(documents),
                turns,
            }
        }
    }
}

/// Render the flat template prompt.
fn render_template(documents: &[ScoredDocument], history: &[ChatMessage], question: &str) -> String {
    let mut prompt = String::from(PERSONA);
    prompt.push_str("\n\n");

    if let Some(block) = knowledge_block(documents) {
        prompt.push_str(
            "Use the knowledge base passages below to ground your answer with specific facts.\n\n",
        );
        prompt.push_str(&block);
        prompt.push('\n');
    }

    let recent = trim_history(history);
    if !recent.is_empty() {
        prompt.push_str("Conversation so far:\n");
        for msg in recent {
            prompt.push_str(&format!(
                "{}: {}\n",
                msg.role.as_str().to_uppercase(),
                msg.content
            ));
        }
        prompt.push('\n');
    }

    prompt.push_str(&format!("USER: {question}\n\n"));
    prompt.push_str(STYLE_GUIDE);
    prompt.push_str("\n\nECOSAGE:");
    prompt
}

/// System instruction for chat-style providers.
fn chat_system(documents: &[ScoredDocument]) -> String {
    let mut system = String::from(PERSONA);
    if let Some(block) = knowledge_block(documents) {
        system.push_str(
            "\n\nUse the knowledge base passages below to ground your answer with specific facts.\n\n",
        );
        system.push_str(block.trim_end());
    }
    system.push_str("\n\n");
    system.push_str(STYLE_GUIDE);
    system
}

/// Retrieved passages, one titled block per document. None when nothing
/// was retrieved, so off-topic questions get no stray header.
fn knowledge_block(documents: &[ScoredDocument]) -> Option<String> {
    if documents.is_empty() {
        return None;
    }
    let mut block = String::from("Retrieved Knowledge:\n");
    for scored in documents {
        block.push_str(&format!(
            "--- [{}] ---\n{}\n",
            scored.document.title, scored.document.content
        ));
    }
    Some(block)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ecosage_knowledge::Document;

    use super::*;

    fn scored(title: &str, content: &str) -> ScoredDocument {
        ScoredDocument {
            document: Arc::new(Document::new("doc-1", title, content, "water")),
            score: 0.9,
        }
    }

    #[test]
    fn test_template_contains_all_sections() {
        let docs = vec![scored("Water Saving", "Fix leaking toilets.")];
        let history = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi there"),
        ];
        let prompt = render_template(&docs, &history, "How do I save water?");

        assert!(prompt.starts_with("You are EcoSage"));
        assert!(prompt.contains("Retrieved Knowledge:\n--- [Water Saving] ---\nFix leaking toilets."));
        assert!(prompt.contains("Conversation so far:\nUSER: hello\nASSISTANT: hi there"));
        assert!(prompt.contains("USER: How do I save water?"));
        assert!(prompt.ends_with("ECOSAGE:"));
    }

    #[test]
    fn test_template_omits_empty_sections() {
        let prompt = render_template(&[], &[], "What about plastics?");
        assert!(!prompt.contains("Retrieved Knowledge:"));
        assert!(!prompt.contains("Conversation so far:"));
        assert!(prompt.contains("USER: What about plastics?"));
    }

    #[test]
    fn test_history_trimmed_to_most_recent_six() {
        let history: Vec<ChatMessage> = (0..10)
            .map(|i| ChatMessage::user(format!("turn {i}")))
            .collect();
        let recent = trim_history(&history);
        assert_eq!(recent.len(), HISTORY_LIMIT);
        assert_eq!(recent[0].content, "turn 4");
        assert_eq!(recent[5].content, "turn 9");
    }

    #[test]
    fn test_chat_assembly_appends_question_as_last_turn() {
        let history = vec![ChatMessage::user("earlier question")];
        let request = assemble(PromptStyle::Chat, &[], &history, "next question");
        match request {
            GenerationRequest::Chat { system, turns } => {
                assert!(system.starts_with("You are EcoSage"));
                assert_eq!(turns.len(), 2);
                assert_eq!(turns.last().map(|t| t.content.as_str()), Some("next question"));
            }
            GenerationRequest::Prompt(_) => panic!("expected chat request"),
        }
    }

    #[test]
    fn test_chat_system_carries_retrieved_passages() {
        let docs = vec![scored("Composting", "Balance greens and browns.")];
        let request = assemble(PromptStyle::Chat, &docs, &[], "composting?");
        match request {
            GenerationRequest::Chat { system, .. } => {
                assert!(system.contains("--- [Composting] ---"));
                assert!(system.contains("End with one small action"));
            }
            GenerationRequest::Prompt(_) => panic!("expected chat request"),
        }
    }
}
