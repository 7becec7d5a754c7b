//! Workflow State Machine Tests
//!
//! Exercises the upload -> analyze orchestration: sequential dependency on
//! the document id, terminal failure states, validation short-circuits, and
//! the discard-on-restart rule.

use std::sync::Arc;

use pretty_assertions::assert_eq;

use clauselens::services::orchestrator::{FailedStep, WorkflowState};
use clauselens::{AppConfig, AppError, AppState};
use clauselens_api::ApiError;
use clauselens_core::RiskBand;

use crate::support::{analyze_ok, temp_contract, upload_ok, ScriptedBackend};

fn state_with(backend: Arc<ScriptedBackend>) -> AppState {
    AppState::with_backend(AppConfig::default(), backend)
}

#[tokio::test]
async fn successful_workflow_reaches_complete_with_aggregated_view() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_upload(Ok(upload_ok())).await;
    backend.push_analyze(Ok(analyze_ok())).await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();

    let view = state.run_analysis(&file).await.expect("workflow succeeds");

    assert_eq!(view.document.id, "doc-001");
    assert_eq!(view.risk.band, RiskBand::High);
    assert_eq!(view.risk.score_label, "72.4/100");
    assert_eq!(view.risk.gradient, RiskBand::High.gradient());

    let snapshot = state.orchestrator().state().await;
    assert!(matches!(snapshot, WorkflowState::Complete { .. }));
    assert!(snapshot.is_terminal());
}

#[tokio::test]
async fn analyze_is_keyed_by_the_uploaded_document_id() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_upload(Ok(upload_ok())).await;
    backend.push_analyze(Ok(analyze_ok())).await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();

    state.run_analysis(&file).await.expect("workflow succeeds");

    // Strict sequence: analyze only after upload, keyed by upload's id.
    assert_eq!(
        backend.recorded_calls().await,
        vec!["upload:contract.pdf".to_string(), "analyze:doc-001".to_string()]
    );
}

#[tokio::test]
async fn document_id_is_reused_by_interactive_services() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_upload(Ok(upload_ok())).await;
    backend.push_analyze(Ok(analyze_ok())).await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();
    state.run_analysis(&file).await.expect("workflow succeeds");

    let search = state.search().await.expect("search client installed");
    let assistant = state.assistant().await.expect("assistant installed");
    assert_eq!(search.document_id(), "doc-001");
    assert_eq!(assistant.document_id(), "doc-001");

    // Every subsequent call carries the id unchanged.
    let _ = search.search("indemnity").await;
    let _ = assistant.ask("What is the term?").await;
    let calls = backend.recorded_calls().await;
    assert!(calls.contains(&"search:doc-001:indemnity".to_string()));
    assert!(calls.contains(&"ask:doc-001".to_string()));
}

#[tokio::test]
async fn missing_file_fails_validation_before_any_request() {
    let backend = Arc::new(ScriptedBackend::new());
    let state = state_with(Arc::clone(&backend));

    let err = state
        .run_analysis(std::path::Path::new("/nonexistent/contract.pdf"))
        .await
        .expect_err("validation failure");

    assert!(matches!(err, AppError::Validation(_)));
    assert!(backend.recorded_calls().await.is_empty());
    assert_eq!(state.orchestrator().state().await.name(), "idle");
}

#[tokio::test]
async fn upload_failure_halts_workflow_without_document_id() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_upload(Err(ApiError::server(500, "disk full")))
        .await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();

    let err = state.run_analysis(&file).await.expect_err("upload fails");
    assert!(matches!(err, AppError::Server { status: 500, .. }));

    match state.orchestrator().state().await {
        WorkflowState::Failed {
            step,
            error,
            document,
        } => {
            assert_eq!(step, FailedStep::Upload);
            assert!(error.contains("disk full"));
            assert!(document.is_none());
        }
        other => panic!("expected Failed, got {:?}", other.name()),
    }

    // Analyze must never have been issued.
    assert_eq!(
        backend.recorded_calls().await,
        vec!["upload:contract.pdf".to_string()]
    );
    assert!(state.search().await.is_none());
}

#[tokio::test]
async fn analyze_failure_preserves_document_id_and_verbatim_detail() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_upload(Ok(upload_ok())).await;
    backend
        .push_analyze(Err(ApiError::server(500, "Analysis failed: model crashed")))
        .await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();

    state.run_analysis(&file).await.expect_err("analyze fails");

    match state.orchestrator().state().await {
        WorkflowState::Failed {
            step,
            error,
            document,
        } => {
            assert_eq!(step, FailedStep::Analyze);
            assert!(error.contains("Analysis failed: model crashed"));
            assert_eq!(document.expect("document preserved").id, "doc-001");
        }
        other => panic!("expected Failed, got {:?}", other.name()),
    }
    assert!(state.assistant().await.is_none());
}

#[tokio::test]
async fn restart_discards_prior_failed_instance() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_upload(Err(ApiError::network("connection refused")))
        .await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();

    state.run_analysis(&file).await.expect_err("first run fails");
    assert_eq!(state.orchestrator().state().await.name(), "failed");

    // User-initiated restart: fresh file selection, no carry-over.
    backend.push_upload(Ok(upload_ok())).await;
    backend.push_analyze(Ok(analyze_ok())).await;
    let view = state.run_analysis(&file).await.expect("second run succeeds");

    assert_eq!(view.document.id, "doc-001");
    assert_eq!(state.orchestrator().state().await.name(), "complete");
}

#[tokio::test]
async fn reset_returns_to_idle() {
    let backend = Arc::new(ScriptedBackend::new());
    backend.push_upload(Ok(upload_ok())).await;
    backend.push_analyze(Ok(analyze_ok())).await;
    let state = state_with(Arc::clone(&backend));
    let (_dir, file) = temp_contract();
    state.run_analysis(&file).await.expect("workflow succeeds");

    state.orchestrator().reset().await;
    assert_eq!(state.orchestrator().state().await.name(), "idle");
    assert!(state.orchestrator().document().await.is_none());
}
