//! Analysis Backend Trait
//!
//! The seam between orchestration logic and the remote service. Workflow,
//! search, chat and comparison code is written against this trait; tests
//! substitute scripted implementations.

use async_trait::async_trait;

use clauselens_core::SearchResult;

use crate::error::ApiResult;
use crate::types::{
    AnalyzeResponse, ChatAnswer, ChatQuestion, ClassifyResponse, ComparisonResult, ServiceStatus,
    UploadResponse,
};

/// Operations the analysis service exposes.
///
/// One method per HTTP contract. Implementations must treat any non-2xx
/// response as a failure regardless of body content.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Check that the service is reachable and report its status.
    async fn health(&self) -> ApiResult<ServiceStatus>;

    /// Upload a document for analysis. The returned document id keys every
    /// later call in the workflow.
    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse>;

    /// Run the full analysis for an uploaded document.
    async fn analyze(&self, document_id: &str) -> ApiResult<AnalyzeResponse>;

    /// Classify an uploaded document by type.
    async fn classify(&self, document_id: &str) -> ApiResult<ClassifyResponse>;

    /// Find clauses similar to `clause_text` within one document. Matches
    /// come back in server order, best first.
    async fn search_similar_clauses(
        &self,
        document_id: &str,
        clause_text: &str,
    ) -> ApiResult<SearchResult>;

    /// Ask a question about one document.
    async fn ask(&self, question: &ChatQuestion) -> ApiResult<ChatAnswer>;

    /// Compare the semantic similarity of two uploaded documents.
    async fn compare_similarity(&self, id_1: &str, id_2: &str) -> ApiResult<ComparisonResult>;
}
