//! Analysis Workflow Orchestrator
//!
//! Drives the two-step remote workflow (upload, then analyze) as an explicit
//! state machine. The orchestrator exclusively owns the current document and
//! analysis result; every other component reads cloned snapshots and holds
//! at most the document id.
//!
//! Transitions: `Idle -> Uploading -> Analyzing -> Complete`, with `Failed`
//! reachable from `Uploading` and `Analyzing`. `Complete` and `Failed` are
//! terminal for a workflow instance; starting a new workflow discards the
//! prior instance outright. Nothing is retried automatically.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use uuid::Uuid;

use clauselens_api::AnalysisBackend;
use clauselens_core::{aggregate, AnalysisResult, AnalysisView, Document};

use crate::utils::error::{AppError, AppResult};

/// Which workflow step a failure occurred in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailedStep {
    Upload,
    Analyze,
}

/// Current position of the analysis workflow.
///
/// Snapshots are cheap clones; render layers consume them without touching
/// the orchestrator's own copy.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum WorkflowState {
    /// No workflow started, or reset after a failure
    Idle,
    /// Upload request in flight
    Uploading { filename: String },
    /// Upload succeeded; analyze request in flight
    Analyzing {
        document: Document,
        text_preview: String,
    },
    /// Analysis finished; the full result and derived view are held here
    Complete {
        document: Document,
        text_preview: String,
        analysis: AnalysisResult,
        view: AnalysisView,
    },
    /// A step failed. After an analyze failure the document id is kept for
    /// diagnostics; after an upload failure there is none.
    Failed {
        step: FailedStep,
        error: String,
        document: Option<Document>,
    },
}

impl WorkflowState {
    /// Short name for logs and status rendering
    pub fn name(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Uploading { .. } => "uploading",
            WorkflowState::Analyzing { .. } => "analyzing",
            WorkflowState::Complete { .. } => "complete",
            WorkflowState::Failed { .. } => "failed",
        }
    }

    /// Whether this state ends a workflow instance
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            WorkflowState::Complete { .. } | WorkflowState::Failed { .. }
        )
    }
}

/// Drives upload -> analyze and owns the current workflow state
pub struct AnalysisOrchestrator {
    backend: Arc<dyn AnalysisBackend>,
    state: RwLock<WorkflowState>,
}

impl AnalysisOrchestrator {
    /// Create an orchestrator in the `Idle` state
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            state: RwLock::new(WorkflowState::Idle),
        }
    }

    /// Snapshot of the current workflow state
    pub async fn state(&self) -> WorkflowState {
        self.state.read().await.clone()
    }

    /// The current document, if the workflow got past upload
    pub async fn document(&self) -> Option<Document> {
        match &*self.state.read().await {
            WorkflowState::Analyzing { document, .. }
            | WorkflowState::Complete { document, .. } => Some(document.clone()),
            WorkflowState::Failed { document, .. } => document.clone(),
            _ => None,
        }
    }

    /// The aggregated view, only available once `Complete`
    pub async fn view(&self) -> Option<AnalysisView> {
        match &*self.state.read().await {
            WorkflowState::Complete { view, .. } => Some(view.clone()),
            _ => None,
        }
    }

    /// Discard the current workflow instance and return to `Idle`
    pub async fn reset(&self) {
        tracing::info!("workflow reset to idle");
        *self.state.write().await = WorkflowState::Idle;
    }

    /// Run the full upload -> analyze workflow for one file.
    ///
    /// Fails with a validation error before any request when the path names
    /// no readable file. The analyze call is issued only after upload has
    /// produced the document id; the two steps are never concurrent. On
    /// success the state holds the complete result and the derived view.
    pub async fn start_analysis(&self, path: &Path) -> AppResult<AnalysisView> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("no file supplied"))?;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::validation(format!("cannot read {}: {}", path.display(), e)))?;

        // Starting a new workflow discards any prior instance outright.
        let instance = Uuid::new_v4();
        let started = std::time::Instant::now();
        tracing::info!(%instance, %filename, "starting analysis workflow");
        self.transition(WorkflowState::Uploading {
            filename: filename.clone(),
        })
        .await;

        let upload = match self.backend.upload(&filename, bytes).await {
            Ok(upload) => upload,
            Err(e) => {
                tracing::warn!(%instance, "upload failed: {}", e);
                self.transition(WorkflowState::Failed {
                    step: FailedStep::Upload,
                    error: e.to_string(),
                    document: None,
                })
                .await;
                return Err(e.into());
            }
        };

        let document = Document::new(upload.document_id, upload.filename);
        tracing::info!(%instance, document_id = %document.id, "upload complete, analyzing");
        self.transition(WorkflowState::Analyzing {
            document: document.clone(),
            text_preview: upload.text_preview.clone(),
        })
        .await;

        let analyzed = match self.backend.analyze(&document.id).await {
            Ok(analyzed) => analyzed,
            Err(e) => {
                tracing::warn!(%instance, document_id = %document.id, "analysis failed: {}", e);
                self.transition(WorkflowState::Failed {
                    step: FailedStep::Analyze,
                    error: e.to_string(),
                    document: Some(document),
                })
                .await;
                return Err(e.into());
            }
        };

        let analysis = analyzed.analysis;
        let view = aggregate(&document, &analysis);
        tracing::info!(
            %instance,
            document_id = %document.id,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "analysis workflow complete"
        );
        self.transition(WorkflowState::Complete {
            document,
            text_preview: upload.text_preview,
            analysis,
            view: view.clone(),
        })
        .await;

        Ok(view)
    }

    async fn transition(&self, next: WorkflowState) {
        let mut state = self.state.write().await;
        tracing::debug!("workflow {} -> {}", state.name(), next.name());
        *state = next;
    }
}
