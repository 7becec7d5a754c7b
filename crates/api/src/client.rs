//! HTTP Analysis Client
//!
//! The reqwest-backed implementation of `AnalysisBackend`. One client is
//! built per session with a bounded timeout; every contract goes through the
//! same response-handling path: transport failures become `Network`, non-2xx
//! becomes `Server` with the body carried verbatim, malformed 2xx bodies
//! become `Parse`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use clauselens_core::SearchResult;

use crate::backend::AnalysisBackend;
use crate::error::{ApiError, ApiResult};
use crate::http_client::build_http_client;
use crate::types::{
    AnalyzeResponse, ChatAnswer, ChatQuestion, ClassifyResponse, ComparisonResult, ServiceStatus,
    UploadResponse,
};

/// HTTP client for the analysis service
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    /// Base URL without a trailing slash
    base_url: String,
}

impl HttpAnalysisClient {
    /// Create a client for the service at `base_url` with the given request
    /// timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        tracing::info!("analysis client initialized: url={}", base_url);
        Self {
            client: build_http_client(timeout),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and decode the JSON response.
    ///
    /// Non-2xx responses fail with the body text verbatim, whatever its
    /// content type.
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        what: &str,
    ) -> ApiResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body_text = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("{} failed: HTTP {}", what, status.as_u16());
            return Err(ApiError::server(status.as_u16(), body_text));
        }

        serde_json::from_str(&body_text)
            .map_err(|e| ApiError::parse(format!("failed to parse {} response: {}", what, e)))
    }
}

#[async_trait]
impl AnalysisBackend for HttpAnalysisClient {
    async fn health(&self) -> ApiResult<ServiceStatus> {
        self.execute(self.client.get(self.url("/")), "health").await
    }

    async fn upload(&self, filename: &str, bytes: Vec<u8>) -> ApiResult<UploadResponse> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        self.execute(
            self.client.post(self.url("/api/upload")).multipart(form),
            "upload",
        )
        .await
    }

    async fn analyze(&self, document_id: &str) -> ApiResult<AnalyzeResponse> {
        self.execute(
            self.client
                .post(self.url(&format!("/api/analyze/{}", document_id))),
            "analyze",
        )
        .await
    }

    async fn classify(&self, document_id: &str) -> ApiResult<ClassifyResponse> {
        self.execute(
            self.client
                .get(self.url(&format!("/api/documents/classify/{}", document_id))),
            "classify",
        )
        .await
    }

    async fn search_similar_clauses(
        &self,
        document_id: &str,
        clause_text: &str,
    ) -> ApiResult<SearchResult> {
        let fields = [("document_id", document_id), ("clause_text", clause_text)];
        self.execute(
            self.client
                .post(self.url("/api/search/similar-clauses"))
                .form(&fields),
            "clause search",
        )
        .await
    }

    async fn ask(&self, question: &ChatQuestion) -> ApiResult<ChatAnswer> {
        self.execute(
            self.client.post(self.url("/api/chat/ask")).json(question),
            "chat",
        )
        .await
    }

    async fn compare_similarity(&self, id_1: &str, id_2: &str) -> ApiResult<ComparisonResult> {
        self.execute(
            self.client
                .post(self.url(&format!("/api/compare/similarity/{}/{}", id_1, id_2))),
            "compare",
        )
        .await
    }
}
