//! Semantic Clause Search Tests
//!
//! Validation short-circuit, server-order preservation, and the
//! last-submitted-query-wins guard under simulated network reordering.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use tokio::sync::Notify;

use clauselens::services::search::{SearchOutcome, SemanticQueryClient};
use clauselens::AppError;
use clauselens_api::ApiError;

use crate::support::{search_result, ScriptedBackend};

fn client_for(backend: &Arc<ScriptedBackend>) -> SemanticQueryClient {
    SemanticQueryClient::new(
        Arc::clone(backend) as Arc<dyn clauselens_api::AnalysisBackend>,
        "doc-001",
    )
}

#[tokio::test]
async fn empty_query_is_rejected_without_a_request() {
    let backend = Arc::new(ScriptedBackend::new());
    let client = client_for(&backend);

    let err = client.search("   ").await.expect_err("validation failure");
    assert!(matches!(err, AppError::Validation(_)));
    assert!(backend.recorded_calls().await.is_empty());
}

#[tokio::test]
async fn matches_keep_server_order() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_search(
            None,
            Ok(search_result(
                "payment within 30 days",
                "Payment shall be made within 30 days of invoice.",
            )),
        )
        .await;
    let client = client_for(&backend);

    let outcome = client
        .search("payment within 30 days")
        .await
        .expect("search succeeds");

    let result = match outcome {
        SearchOutcome::Completed(result) => result,
        SearchOutcome::Superseded => panic!("sole query cannot be superseded"),
    };
    assert_eq!(result.total_clauses, 10);
    // Top match retained as first element, unmodified.
    assert_eq!(
        result.matches[0].clause.text,
        "Payment shall be made within 30 days of invoice."
    );
    assert!(result.matches[0].similarity >= result.matches[1].similarity);
    assert_eq!(client.latest().await.unwrap(), result);
}

#[tokio::test]
async fn stale_response_cannot_overwrite_newer_result() {
    let backend = Arc::new(ScriptedBackend::new());
    let gate_a = Arc::new(Notify::new());
    // Query A's response is held in flight; query B answers immediately.
    backend
        .push_search(
            Some(Arc::clone(&gate_a)),
            Ok(search_result("query a", "Clause from the stale response.")),
        )
        .await;
    backend
        .push_search(None, Ok(search_result("query b", "Clause from the winner.")))
        .await;

    let client = Arc::new(client_for(&backend));

    let client_a = Arc::clone(&client);
    let first = tokio::spawn(async move { client_a.search("query a").await });
    backend.wait_for_calls(1).await;

    // B is submitted while A is still pending and must win.
    let outcome_b = client.search("query b").await.expect("second search");
    assert!(matches!(outcome_b, SearchOutcome::Completed(_)));

    // A's response now arrives late and must be discarded.
    gate_a.notify_one();
    let outcome_a = first.await.expect("join").expect("first search");
    assert_eq!(outcome_a, SearchOutcome::Superseded);

    let latest = client.latest().await.expect("latest result");
    assert_eq!(latest.query, "query b");
    assert_eq!(latest.matches[0].clause.text, "Clause from the winner.");
}

#[tokio::test]
async fn search_failure_is_local_and_keeps_prior_result() {
    let backend = Arc::new(ScriptedBackend::new());
    backend
        .push_search(None, Ok(search_result("first", "A retained clause.")))
        .await;
    backend
        .push_search(None, Err(ApiError::server(500, "Search error: index cold")))
        .await;
    let client = client_for(&backend);

    client.search("first").await.expect("first search succeeds");
    let err = client.search("second").await.expect_err("second fails");

    assert!(matches!(err, AppError::Server { status: 500, .. }));
    // The failed query did not invalidate the retained result.
    assert_eq!(client.latest().await.unwrap().query, "first");
}
