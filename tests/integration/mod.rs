//! Integration Tests Module
//!
//! Cross-service tests for the ClauseLens orchestration core, driven through
//! a scripted in-process backend. Covers the workflow state machine, the
//! last-submitted-wins search guard, the serialized chat exchanges, and the
//! shared similarity banding.


// Upload -> analyze workflow state machine tests
mod workflow_test;

// Semantic clause search tests (validation, ordering, stale-response guard)
mod search_test;

// Conversational assistant tests (history growth, serialization, truncation)
mod assistant_test;

// Document comparison banding tests
mod comparison_test;
