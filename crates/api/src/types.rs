//! Wire Types
//!
//! Request and response shapes for the HTTP contracts the analysis service
//! exposes. Unknown fields in responses are ignored; fields the client does
//! not consume are not modeled.

use clauselens_core::{AnalysisResult, Document};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// `GET /` health probe response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub version: String,
}

/// `POST /api/upload` response.
///
/// `text_preview` is the server-extracted text excerpt; it seeds the chat
/// assistant's document context since the client never parses the file
/// itself.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub text_preview: String,
}

/// `POST /api/analyze/{document_id}` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub document_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub analysis: AnalysisResult,
}

/// `GET /api/documents/classify/{document_id}` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub document_id: String,
    #[serde(default)]
    pub filename: String,
    /// Label -> confidence score
    #[serde(default)]
    pub classification: HashMap<String, f64>,
    #[serde(default)]
    pub top_type: String,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub method: String,
}

/// `POST /api/chat/ask` request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatQuestion {
    pub document_id: String,
    pub question: String,
    /// Fixed-length prefix of the document text, assembled by the caller
    pub document_text: String,
    pub analysis_summary: String,
}

/// `POST /api/chat/ask` response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatAnswer {
    pub answer: String,
}

/// `POST /api/compare/similarity/{id1}/{id2}` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub document_1: Document,
    pub document_2: Document,
    /// Similarity score in [0, 1]
    pub similarity_score: f64,
    /// Server-formatted percentage, e.g. "87.3%"
    #[serde(default)]
    pub similarity_percentage: String,
    /// Server-side interpretation; the client renders its own banding
    #[serde(default)]
    pub interpretation: String,
    #[serde(default)]
    pub embeddings_available: bool,
}
