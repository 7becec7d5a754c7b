//! Document Comparison Tests
//!
//! Comparison goes through the shared similarity banding so labels match
//! the search view exactly.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use clauselens::{AppError, DocumentComparator};
use clauselens_api::types::ComparisonResult;
use clauselens_core::Document;

use crate::support::ScriptedBackend;

fn comparator_for(backend: &Arc<ScriptedBackend>) -> DocumentComparator {
    DocumentComparator::new(Arc::clone(backend) as Arc<dyn clauselens_api::AnalysisBackend>)
}

fn comparison(score: f64, percentage: &str) -> ComparisonResult {
    ComparisonResult {
        document_1: Document::new("doc-001", "contract.pdf"),
        document_2: Document::new("doc-002", "contract-copy.pdf"),
        similarity_score: score,
        similarity_percentage: percentage.to_string(),
        interpretation: String::new(),
        embeddings_available: true,
    }
}

#[tokio::test]
async fn identical_documents_band_as_nearly_identical() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_compare(Ok(comparison(1.0, "100.0%"))).await;
    let comparator = comparator_for(&backend);

    let view = comparator
        .compare("doc-001", "doc-002")
        .await
        .expect("compare succeeds");

    assert_eq!(view.similarity_score, 1.0);
    assert_eq!(view.similarity_percentage, "100.0%");
    assert_eq!(view.band.label, "Nearly identical documents");
    assert_eq!(
        backend.recorded_calls().await,
        vec!["compare:doc-001:doc-002".to_string()]
    );
}

#[tokio::test]
async fn percentage_is_derived_when_server_omits_it() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_compare(Ok(comparison(0.62, ""))).await;
    let comparator = comparator_for(&backend);

    let view = comparator.compare("doc-001", "doc-002").await.unwrap();
    assert_eq!(view.similarity_percentage, "62.0%");
    assert_eq!(view.band.label, "Moderately similar, same type");
}

#[tokio::test]
async fn blank_ids_are_rejected_without_a_request() {
    let backend = Arc::new(ScriptedBackend::new());
    let comparator = comparator_for(&backend);

    let err = comparator
        .compare("doc-001", "  ")
        .await
        .expect_err("validation failure");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(backend.recorded_calls().await.is_empty());
}
