//! Document Identity
//!
//! The identity a successful upload produces. Every later call in a workflow
//! (analyze, classify, search, chat, compare) is keyed by the document id.

use serde::{Deserialize, Serialize};

/// An uploaded document, identified by the opaque id the server assigned.
///
/// Created once the upload step succeeds and immutable thereafter. The
/// orchestrator owns the one current `Document`; every other component holds
/// at most a clone of the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Opaque server-assigned identifier
    pub id: String,
    /// Original filename as uploaded
    pub filename: String,
}

impl Document {
    /// Create a document from the id and filename returned by upload
    pub fn new(id: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            filename: filename.into(),
        }
    }
}
