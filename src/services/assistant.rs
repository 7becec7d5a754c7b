//! Conversational Assistant
//!
//! Document-scoped Q&A with an in-memory, append-only message history.
//! Exchanges are serialized: a second question cannot start while one is
//! pending. Every accepted question grows the history by exactly two
//! messages; a remote failure pairs the question with a fixed fallback
//! reply instead of dropping the turn.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use clauselens_api::{types::ChatQuestion, AnalysisBackend};
use clauselens_core::{AnalysisView, ChatMessage};

use crate::utils::error::{AppError, AppResult};

/// Fixed-length prefix of the document text sent with every question.
/// The cut is not sentence-aware; identical text always yields an identical
/// request payload.
pub const DOCUMENT_CONTEXT_CHARS: usize = 3000;

/// Greeting seeded as the first history entry
const GREETING: &str =
    "Hello! I've reviewed your document. Ask me about its clauses, risks, or obligations.";

/// Reply appended when the remote call fails, so the turn is never lost
const FALLBACK_REPLY: &str =
    "I'm sorry, I couldn't answer that just now. Please try asking again.";

/// Compact analysis summary included with every question so the server can
/// answer in context
pub fn analysis_summary(view: &AnalysisView) -> String {
    format!(
        "Document type: {}. Risk level: {} ({}). {}",
        view.context.document_type,
        view.risk.band.label(),
        view.risk.score_label,
        view.summary
    )
}

/// Q&A session bound to one analyzed document
pub struct ConversationalAssistant {
    backend: Arc<dyn AnalysisBackend>,
    document_id: String,
    document_text: String,
    analysis_summary: String,
    history: RwLock<Vec<ChatMessage>>,
    pending: AtomicBool,
}

impl ConversationalAssistant {
    /// Create an assistant for one document, seeding the greeting
    pub fn new(
        backend: Arc<dyn AnalysisBackend>,
        document_id: impl Into<String>,
        document_text: impl Into<String>,
        analysis_summary: impl Into<String>,
    ) -> Self {
        Self {
            backend,
            document_id: document_id.into(),
            document_text: document_text.into(),
            analysis_summary: analysis_summary.into(),
            history: RwLock::new(vec![ChatMessage::assistant(GREETING)]),
            pending: AtomicBool::new(false),
        }
    }

    /// The document this assistant answers about
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// Snapshot of the conversation so far
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.history.read().await.clone()
    }

    /// Ask one question about the document.
    ///
    /// Rejected with a validation error when the question is empty after
    /// trimming or when a prior ask is still pending. Otherwise the user
    /// message is appended immediately and the reply (answer or fallback)
    /// follows once the exchange finishes.
    pub async fn ask(&self, question: &str) -> AppResult<ChatMessage> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AppError::validation("question is empty"));
        }
        if self
            .pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::validation("a question is already in flight"));
        }

        self.history
            .write()
            .await
            .push(ChatMessage::user(question));

        let request = ChatQuestion {
            document_id: self.document_id.clone(),
            question: question.to_string(),
            document_text: self.context_prefix(),
            analysis_summary: self.analysis_summary.clone(),
        };

        let reply = match self.backend.ask(&request).await {
            Ok(answer) => ChatMessage::assistant(answer.answer),
            Err(e) => {
                tracing::warn!(document_id = %self.document_id, "chat exchange failed: {}", e);
                ChatMessage::assistant(FALLBACK_REPLY)
            }
        };

        self.history.write().await.push(reply.clone());
        self.pending.store(false, Ordering::SeqCst);
        Ok(reply)
    }

    /// First `DOCUMENT_CONTEXT_CHARS` characters of the document text
    fn context_prefix(&self) -> String {
        self.document_text
            .chars()
            .take(DOCUMENT_CONTEXT_CHARS)
            .collect()
    }
}
