//! Conversational Assistant Tests
//!
//! History growth invariants, serialized exchanges, the fixed-prefix
//! document context, and the fallback reply on remote failure.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tokio::sync::Notify;

use clauselens::{AppError, ConversationalAssistant};
use clauselens_api::types::ChatAnswer;
use clauselens_api::ApiError;
use clauselens_core::ChatRole;

use crate::support::ScriptedBackend;

fn assistant_for(backend: &Arc<ScriptedBackend>, document_text: &str) -> ConversationalAssistant {
    ConversationalAssistant::new(
        Arc::clone(backend) as Arc<dyn clauselens_api::AnalysisBackend>,
        "doc-001",
        document_text,
        "Document type: Employment Agreement. Risk level: High (72.4/100).",
    )
}

fn answer(text: &str) -> ChatAnswer {
    ChatAnswer {
        answer: text.to_string(),
    }
}

#[tokio::test]
async fn history_starts_with_one_greeting() {
    let backend = Arc::new(ScriptedBackend::new());
    let assistant = assistant_for(&backend, "body");

    let history = assistant.history().await;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].role, ChatRole::Assistant);
}

#[tokio::test]
async fn successful_ask_grows_history_by_exactly_two() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_ask(None, Ok(answer("The notice period is 30 days.")))
        .await;
    let assistant = assistant_for(&backend, "body");

    let reply = assistant
        .ask("What is the notice period?")
        .await
        .expect("ask succeeds");
    assert_eq!(reply.content, "The notice period is 30 days.");

    let history = assistant.history().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].role, ChatRole::User);
    assert_eq!(history[1].content, "What is the notice period?");
    assert_eq!(history[2].role, ChatRole::Assistant);
}

#[tokio::test]
async fn failed_ask_pairs_question_with_fallback_reply() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_ask(None, Err(ApiError::server(500, "Chat error: model offline")))
        .await;
    let assistant = assistant_for(&backend, "body");

    // The turn is never lost: the failure produces a reply, not an error.
    let reply = assistant.ask("Is this enforceable?").await.expect("fallback");
    assert_eq!(reply.role, ChatRole::Assistant);
    assert!(reply.content.contains("sorry"));

    let history = assistant.history().await;
    assert_eq!(history.len(), 3);
    assert_eq!(history[1].content, "Is this enforceable?");
    assert_eq!(history[2].content, reply.content);
}

#[tokio::test]
async fn empty_question_is_rejected_without_touching_history() {
    let backend = Arc::new(ScriptedBackend::new());
    let assistant = assistant_for(&backend, "body");

    let err = assistant.ask("  \t ").await.expect_err("validation failure");
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(assistant.history().await.len(), 1);
    assert!(backend.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn second_ask_while_pending_is_rejected() {
    let backend = Arc::new(ScriptedBackend::new());
    let gate = Arc::new(Notify::new());
    backend
        .push_ask(Some(Arc::clone(&gate)), Ok(answer("First answer.")))
        .await;
    let assistant = Arc::new(assistant_for(&backend, "body"));

    let pending = Arc::clone(&assistant);
    let first = tokio::spawn(async move { pending.ask("first question").await });
    backend.wait_for_calls(1).await;

    let err = assistant
        .ask("second question")
        .await
        .expect_err("serialized asks");
    assert!(matches!(err, AppError::Validation(_)));

    gate.notify_one();
    let reply = first.await.expect("join").expect("first ask succeeds");
    assert_eq!(reply.content, "First answer.");

    // Only the first exchange reached the history: greeting + user + reply.
    let history = assistant.history().await;
    assert_eq!(history.len(), 3);
}

#[tokio::test]
async fn document_context_is_a_fixed_length_prefix() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_ask(None, Ok(answer("ok"))).await;
    let long_text = "a".repeat(5000);
    let assistant = assistant_for(&backend, &long_text);

    assistant.ask("anything").await.expect("ask succeeds");

    let question = backend
        .last_question
        .lock()
        .await
        .clone()
        .expect("request captured");
    assert_eq!(question.document_id, "doc-001");
    assert_eq!(question.document_text.chars().count(), 3000);
    assert!(question
        .analysis_summary
        .contains("Risk level: High"));
}

#[tokio::test]
async fn short_document_is_sent_whole() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_ask(None, Ok(answer("ok"))).await;
    let assistant = assistant_for(&backend, "short body");

    assistant.ask("anything").await.expect("ask succeeds");

    let question = backend.last_question.lock().await.clone().unwrap();
    assert_eq!(question.document_text, "short body");
}
