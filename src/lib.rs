//! ClauseLens - Terminal Client Library
//!
//! Client-side orchestration for a remote legal-document analysis service:
//! - The upload -> analyze workflow state machine
//! - Semantic clause search and document-scoped Q&A against the analyzed document
//! - Config storage and the CLI surface
//!
//! The render layer (the CLI) is a stateless consumer of the state these
//! services own; all remote calls go through the `AnalysisBackend` trait
//! from `clauselens-api`.

pub mod cli;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;

pub use models::settings::{AppConfig, SettingsUpdate};
pub use services::assistant::ConversationalAssistant;
pub use services::comparison::{ComparisonView, DocumentComparator};
pub use services::orchestrator::{AnalysisOrchestrator, FailedStep, WorkflowState};
pub use services::search::{SearchOutcome, SemanticQueryClient};
pub use state::AppState;
pub use utils::error::{AppError, AppResult};
