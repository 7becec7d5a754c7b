//! Application State
//!
//! Wires the backend client, the workflow orchestrator, and the per-document
//! interactive services together. The orchestrator is the single writer of
//! workflow state; the search client and assistant are recreated for each
//! completed workflow and discarded with it.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use clauselens_api::{AnalysisBackend, HttpAnalysisClient};
use clauselens_core::AnalysisView;

use crate::models::settings::AppConfig;
use crate::services::assistant::{analysis_summary, ConversationalAssistant};
use crate::services::comparison::DocumentComparator;
use crate::services::orchestrator::{AnalysisOrchestrator, WorkflowState};
use crate::services::search::SemanticQueryClient;
use crate::utils::error::AppResult;

/// Top-level application state
pub struct AppState {
    config: AppConfig,
    backend: Arc<dyn AnalysisBackend>,
    orchestrator: AnalysisOrchestrator,
    comparator: DocumentComparator,
    /// Search client for the current completed workflow
    search: RwLock<Option<Arc<SemanticQueryClient>>>,
    /// Assistant for the current completed workflow
    assistant: RwLock<Option<Arc<ConversationalAssistant>>>,
}

impl AppState {
    /// Create state backed by the HTTP client the config describes
    pub fn new(config: AppConfig) -> Self {
        let backend: Arc<dyn AnalysisBackend> = Arc::new(HttpAnalysisClient::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        ));
        Self::with_backend(config, backend)
    }

    /// Create state over any backend implementation
    pub fn with_backend(config: AppConfig, backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            config,
            backend: Arc::clone(&backend),
            orchestrator: AnalysisOrchestrator::new(Arc::clone(&backend)),
            comparator: DocumentComparator::new(backend),
            search: RwLock::new(None),
            assistant: RwLock::new(None),
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn backend(&self) -> Arc<dyn AnalysisBackend> {
        Arc::clone(&self.backend)
    }

    pub fn orchestrator(&self) -> &AnalysisOrchestrator {
        &self.orchestrator
    }

    pub fn comparator(&self) -> &DocumentComparator {
        &self.comparator
    }

    /// Search client for the current document, once analysis completed
    pub async fn search(&self) -> Option<Arc<SemanticQueryClient>> {
        self.search.read().await.clone()
    }

    /// Assistant for the current document, once analysis completed
    pub async fn assistant(&self) -> Option<Arc<ConversationalAssistant>> {
        self.assistant.read().await.clone()
    }

    /// Run the upload -> analyze workflow for one file.
    ///
    /// Any prior workflow's interactive services are discarded before the
    /// new instance starts; fresh ones are installed only when the new
    /// analysis completes.
    pub async fn run_analysis(&self, path: &Path) -> AppResult<AnalysisView> {
        self.clear_interactive().await;

        let view = self.orchestrator.start_analysis(path).await?;

        if let WorkflowState::Complete {
            document,
            text_preview,
            ..
        } = self.orchestrator.state().await
        {
            let summary = analysis_summary(&view);
            *self.search.write().await = Some(Arc::new(SemanticQueryClient::new(
                Arc::clone(&self.backend),
                document.id.clone(),
            )));
            *self.assistant.write().await = Some(Arc::new(ConversationalAssistant::new(
                Arc::clone(&self.backend),
                document.id,
                text_preview,
                summary,
            )));
        }

        Ok(view)
    }

    async fn clear_interactive(&self) {
        *self.search.write().await = None;
        *self.assistant.write().await = None;
    }
}
