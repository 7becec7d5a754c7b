//! Semantic Search Result Types
//!
//! Ranked clause matches for one query against one document. Match order is
//! determined by the server (descending similarity); the client preserves it
//! and never re-sorts.

use serde::{Deserialize, Serialize};

/// One ranked set of clause matches for a query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// The query as the server echoed it back (may be truncated server-side)
    #[serde(default)]
    pub query: String,
    /// Document the search ran against
    #[serde(default)]
    pub document_id: String,
    /// Total clauses the server considered
    #[serde(default)]
    pub total_clauses: u32,
    /// Matches in server order, best first
    #[serde(default)]
    pub matches: Vec<ClauseMatch>,
    /// Server-reported search method, e.g. "semantic"
    #[serde(default)]
    pub search_type: String,
}

/// A matched clause with its similarity to the query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClauseMatch {
    pub clause: MatchedClause,
    /// Similarity score in [0, 1]
    #[serde(default)]
    pub similarity: f64,
    /// Server-formatted percentage, e.g. "87.3%"
    #[serde(default)]
    pub similarity_percentage: String,
}

/// The clause text and type behind a match
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchedClause {
    #[serde(default)]
    pub text: String,
    #[serde(default, rename = "type")]
    pub clause_type: String,
}
