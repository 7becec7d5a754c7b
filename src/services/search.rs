//! Semantic Clause Search
//!
//! One on-demand similarity query per user action against a fixed document.
//! Rapid resubmission is resolved with last-submitted-wins: every submission
//! takes a generation token, and a response whose token no longer matches
//! the current generation is discarded at the response-handling boundary.
//! There is no network cancellation; a superseded request simply cannot
//! publish its result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use clauselens_api::AnalysisBackend;
use clauselens_core::SearchResult;

use crate::utils::error::{AppError, AppResult};

/// What became of one search submission
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// The submission was current when its response arrived; the result is
    /// now the latest
    Completed(SearchResult),
    /// A newer submission won while this one was in flight; its response was
    /// discarded
    Superseded,
}

/// Issues similarity queries for one analyzed document
pub struct SemanticQueryClient {
    backend: Arc<dyn AnalysisBackend>,
    document_id: String,
    generation: AtomicU64,
    latest: RwLock<Option<SearchResult>>,
}

impl SemanticQueryClient {
    /// Create a query client bound to one document id
    pub fn new(backend: Arc<dyn AnalysisBackend>, document_id: impl Into<String>) -> Self {
        Self {
            backend,
            document_id: document_id.into(),
            generation: AtomicU64::new(0),
            latest: RwLock::new(None),
        }
    }

    /// The document this client searches within
    pub fn document_id(&self) -> &str {
        &self.document_id
    }

    /// The most recent result that survived the generation check
    pub async fn latest(&self) -> Option<SearchResult> {
        self.latest.read().await.clone()
    }

    /// Search for clauses similar to `query`.
    ///
    /// Empty or whitespace-only queries are rejected before any request.
    /// Match order is the server's; the client never re-sorts. Failures are
    /// local: the latest retained result is left untouched.
    pub async fn search(&self, query: &str) -> AppResult<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::validation("search query is empty"));
        }

        let token = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(token, document_id = %self.document_id, "issuing clause search");

        let response = self
            .backend
            .search_similar_clauses(&self.document_id, query)
            .await;

        // Response-handling boundary: only the latest submission may publish.
        let mut latest = self.latest.write().await;
        if self.generation.load(Ordering::SeqCst) != token {
            tracing::debug!(token, "discarding superseded search response");
            return Ok(SearchOutcome::Superseded);
        }

        match response {
            Ok(result) => {
                *latest = Some(result.clone());
                Ok(SearchOutcome::Completed(result))
            }
            Err(e) => {
                tracing::warn!(token, "clause search failed: {}", e);
                Err(e.into())
            }
        }
    }
}
