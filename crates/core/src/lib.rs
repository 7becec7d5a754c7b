//! ClauseLens Core
//!
//! Domain models and pure transforms for the ClauseLens workspace. This crate
//! has zero dependencies on application-level code (HTTP client, CLI, config).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`)
//! - `document` - Document identity produced by a successful upload
//! - `analysis` - The normalized analysis payload and its sub-sections
//! - `aggregate` - `aggregate()`: analysis payload -> default-filled view model
//! - `similarity` - Fixed similarity score banding shared by search and compare
//! - `conversation` - Append-only chat message types
//! - `search` - Semantic clause search result types
//!
//! ## Design Principles
//!
//! 1. **Zero external dependencies beyond serde/thiserror/chrono** - keeps build times minimal
//! 2. **Pure transforms** - aggregation and banding are stateless functions, trivially testable
//! 3. **Unidirectional dependency** - this crate depends on nothing else in the workspace

pub mod aggregate;
pub mod analysis;
pub mod conversation;
pub mod document;
pub mod error;
pub mod search;
pub mod similarity;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult};

// ── Document Identity ──────────────────────────────────────────────────
pub use document::Document;

// ── Analysis Payload ───────────────────────────────────────────────────
pub use analysis::{
    AiSummary, AnalysisResult, AppliedAct, DocumentIntelligence, IndianContext, MissingClause,
    RiskAnalysis, RiskBand, RiskFactor, RiskMatrix,
};

// ── View Model ─────────────────────────────────────────────────────────
pub use aggregate::{
    aggregate, AnalysisView, ClassScore, ContextView, IntelligenceView, RiskView, SeverityBar,
};

// ── Similarity Banding ─────────────────────────────────────────────────
pub use similarity::{interpret, percentage, SimilarityBand};

// ── Conversation ───────────────────────────────────────────────────────
pub use conversation::{ChatMessage, ChatRole};

// ── Search ─────────────────────────────────────────────────────────────
pub use search::{ClauseMatch, MatchedClause, SearchResult};
