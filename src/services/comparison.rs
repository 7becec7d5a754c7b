//! Document Comparison
//!
//! Compares the semantic similarity of two uploaded documents. Banding goes
//! through the shared similarity table so the comparison view and the search
//! view can never label the same score differently.

use std::sync::Arc;

use serde::Serialize;

use clauselens_api::AnalysisBackend;
use clauselens_core::{interpret, percentage, Document, SimilarityBand};

use crate::utils::error::{AppError, AppResult};

/// A rendered similarity comparison between two documents
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonView {
    pub document_1: Document,
    pub document_2: Document,
    /// Similarity score in [0, 1]
    pub similarity_score: f64,
    /// Percentage rendering, e.g. "100.0%"
    pub similarity_percentage: String,
    /// Qualitative band for the score
    pub band: SimilarityBand,
    pub embeddings_available: bool,
}

/// Runs similarity comparisons through the shared banding table
pub struct DocumentComparator {
    backend: Arc<dyn AnalysisBackend>,
}

impl DocumentComparator {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self { backend }
    }

    /// Compare two uploaded documents by id
    pub async fn compare(&self, id_1: &str, id_2: &str) -> AppResult<ComparisonView> {
        if id_1.trim().is_empty() || id_2.trim().is_empty() {
            return Err(AppError::validation("both document ids are required"));
        }

        let result = self.backend.compare_similarity(id_1, id_2).await?;
        let similarity_percentage = if result.similarity_percentage.is_empty() {
            percentage(result.similarity_score)
        } else {
            result.similarity_percentage
        };

        Ok(ComparisonView {
            document_1: result.document_1,
            document_2: result.document_2,
            similarity_score: result.similarity_score,
            similarity_percentage,
            band: interpret(result.similarity_score),
            embeddings_available: result.embeddings_available,
        })
    }
}
