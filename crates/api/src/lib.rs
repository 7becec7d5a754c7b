//! ClauseLens API
//!
//! The remote analysis-service boundary. Everything the orchestration layer
//! knows about the server goes through the `AnalysisBackend` trait; the
//! reqwest-backed `HttpAnalysisClient` is the production implementation.
//!
//! ## Module Organization
//!
//! - `backend` - The `AnalysisBackend` trait all orchestration code is written against
//! - `client` - `HttpAnalysisClient`, the reqwest implementation
//! - `http_client` - reqwest client factory (timeout configuration)
//! - `types` - Wire request/response shapes for the HTTP contracts
//! - `error` - `ApiError`: network / server / parse taxonomy

pub mod backend;
pub mod client;
pub mod error;
pub mod http_client;
pub mod types;

pub use backend::AnalysisBackend;
pub use client::HttpAnalysisClient;
pub use error::{ApiError, ApiResult};
pub use http_client::build_http_client;
pub use types::{
    AnalyzeResponse, ChatAnswer, ChatQuestion, ClassifyResponse, ComparisonResult, ServiceStatus,
    UploadResponse,
};
