//! Command-Line Interface
//!
//! The clap surface and the interactive session loop. Everything here is a
//! stateless consumer of orchestrator/service state: it renders snapshots
//! and forwards user input, nothing more.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use clauselens_core::{AnalysisView, ChatRole, SearchResult};

use crate::models::settings::{AppConfig, SettingsUpdate};
use crate::services::comparison::ComparisonView;
use crate::services::orchestrator::WorkflowState;
use crate::state::AppState;
use crate::storage::ConfigService;
use crate::utils::error::{AppError, AppResult};

/// Interactive client for AI-driven legal document analysis
#[derive(Debug, Parser)]
#[command(name = "clauselens", version, about)]
pub struct Cli {
    /// Analysis service base URL (overrides the stored config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Request timeout in seconds (overrides the stored config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Upload a document, run the analysis workflow, and show the results
    Analyze {
        /// Path to the document (.pdf, .docx, .txt)
        file: PathBuf,
        /// Print the aggregated view model as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Stay in an interactive session for clause search and Q&A
        #[arg(short, long)]
        interactive: bool,
    },
    /// Compare the semantic similarity of two uploaded documents
    Compare {
        document_id_1: String,
        document_id_2: String,
    },
    /// Classify an uploaded document by type
    Classify { document_id: String },
    /// Check that the analysis service is reachable
    Health,
    /// Show or update the stored configuration
    Config {
        /// Set the analysis service base URL
        #[arg(long)]
        set_api_url: Option<String>,
        /// Set the request timeout in seconds
        #[arg(long)]
        set_timeout: Option<u64>,
    },
}

/// Resolve config from disk, then apply per-invocation overrides
fn resolve_config(cli: &Cli) -> AppResult<AppConfig> {
    let mut config = ConfigService::new()?.get_config_clone();
    config.apply_update(SettingsUpdate {
        api_base_url: cli.api_url.clone(),
        request_timeout_secs: cli.timeout,
    });
    config.validate().map_err(AppError::config)?;
    Ok(config)
}

/// Entry point called from `main` after tracing is up
pub async fn run(cli: Cli) -> AppResult<()> {
    match &cli.command {
        Command::Config {
            set_api_url,
            set_timeout,
        } => {
            let mut service = ConfigService::new()?;
            if set_api_url.is_some() || set_timeout.is_some() {
                let updated = service.update_config(SettingsUpdate {
                    api_base_url: set_api_url.clone(),
                    request_timeout_secs: *set_timeout,
                })?;
                println!("Configuration updated.");
                println!("{}", serde_json::to_string_pretty(&updated)?);
            } else {
                println!(
                    "{}",
                    serde_json::to_string_pretty(service.get_config())?
                );
            }
            Ok(())
        }
        command => {
            let state = AppState::new(resolve_config(&cli)?);
            dispatch(command, &state).await
        }
    }
}

async fn dispatch(command: &Command, state: &AppState) -> AppResult<()> {
    match command {
        Command::Analyze {
            file,
            json,
            interactive,
        } => {
            let view = match state.run_analysis(file).await {
                Ok(view) => view,
                Err(e) => {
                    render_workflow_failure(&state.orchestrator().state().await);
                    return Err(e);
                }
            };
            if *json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                render_view(&view);
            }
            if *interactive {
                interactive_session(state).await?;
            }
            Ok(())
        }
        Command::Compare {
            document_id_1,
            document_id_2,
        } => {
            let comparison = state
                .comparator()
                .compare(document_id_1, document_id_2)
                .await?;
            render_comparison(&comparison);
            Ok(())
        }
        Command::Classify { document_id } => {
            let classified = state.backend().classify(document_id).await?;
            println!(
                "{} -> {} ({} confidence, {})",
                classified.document_id,
                classified.top_type,
                clauselens_core::percentage(classified.confidence),
                classified.method
            );
            let mut entries: Vec<_> = classified.classification.iter().collect();
            entries.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
            for (label, score) in entries {
                println!("  {:<28} {}", label, clauselens_core::percentage(*score));
            }
            Ok(())
        }
        Command::Health => {
            let status = state.backend().health().await?;
            println!(
                "{} ({} {})",
                status.status, status.service, status.version
            );
            Ok(())
        }
        Command::Config { .. } => unreachable!("handled in run()"),
    }
}

// ── Interactive session ────────────────────────────────────────────────

const SESSION_HELP: &str = "\
Type a question to ask about the document, or:
  /search <text>     find clauses similar to <text>
  /compare <doc-id>  compare against another uploaded document
  /classify          classify the document by type
  /risks             list every risk factor
  /acts              list every applicable act
  /missing           list missing clauses
  /history           show the conversation so far
  /status            show the workflow state
  /help              show this help
  /quit              leave the session";

/// Read-eval loop over the completed analysis.
///
/// Search and chat failures are local: they print and the session continues.
async fn interactive_session(state: &AppState) -> AppResult<()> {
    if let Ok(status) = state.backend().health().await {
        tracing::debug!("service healthy: {} {}", status.service, status.version);
    } else {
        println!("warning: analysis service did not answer a health probe");
    }

    println!("\nInteractive session started. /help for commands, /quit to leave.");
    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut stdout = tokio::io::stdout();

    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (command, rest) = match input.strip_prefix('/') {
            Some(command_line) => {
                let mut parts = command_line.splitn(2, ' ');
                (
                    parts.next().unwrap_or_default(),
                    parts.next().unwrap_or_default().trim(),
                )
            }
            None => ("ask", input),
        };

        match command {
            "quit" | "exit" => break,
            "help" => println!("{}", SESSION_HELP),
            "ask" => match state.assistant().await {
                Some(assistant) => match assistant.ask(rest).await {
                    Ok(reply) => println!("{}", reply.content),
                    Err(e) => println!("{}", e),
                },
                None => println!("no completed analysis to ask about"),
            },
            "search" => match state.search().await {
                Some(search) => match search.search(rest).await {
                    Ok(crate::services::search::SearchOutcome::Completed(result)) => {
                        render_search(&result)
                    }
                    Ok(crate::services::search::SearchOutcome::Superseded) => {}
                    Err(e) => println!("{}", e),
                },
                None => println!("no completed analysis to search in"),
            },
            "compare" => match state.orchestrator().document().await {
                Some(document) => match state.comparator().compare(&document.id, rest).await {
                    Ok(comparison) => render_comparison(&comparison),
                    Err(e) => println!("{}", e),
                },
                None => println!("no current document to compare"),
            },
            "classify" => match state.orchestrator().document().await {
                Some(document) => match state.backend().classify(&document.id).await {
                    Ok(classified) => println!(
                        "{} ({} confidence)",
                        classified.top_type,
                        clauselens_core::percentage(classified.confidence)
                    ),
                    Err(e) => println!("{}", AppError::from(e)),
                },
                None => println!("no current document to classify"),
            },
            "risks" => match state.orchestrator().view().await {
                Some(view) => {
                    for factor in &view.risk.factors {
                        println!(
                            "[{}] {} - {}",
                            factor.severity, factor.category, factor.description
                        );
                    }
                }
                None => println!("no completed analysis"),
            },
            "acts" => match state.orchestrator().view().await {
                Some(view) => {
                    for act in &view.context.applicable_acts {
                        match act.year {
                            Some(year) => println!("{} ({})", act.name, year),
                            None => println!("{}", act.name),
                        }
                    }
                }
                None => println!("no completed analysis"),
            },
            "missing" => match state.orchestrator().view().await {
                Some(view) => {
                    for clause in &view.context.missing_clauses {
                        println!("{} [{}] {}", clause.clause_type, clause.importance, clause.reason);
                    }
                }
                None => println!("no completed analysis"),
            },
            "history" => match state.assistant().await {
                Some(assistant) => {
                    for message in assistant.history().await {
                        let who = match message.role {
                            ChatRole::User => "you",
                            ChatRole::Assistant => "assistant",
                        };
                        println!("{:>9}  {}", who, message.content);
                    }
                }
                None => println!("no conversation yet"),
            },
            "status" => {
                let state_snapshot = state.orchestrator().state().await;
                println!("workflow: {}", state_snapshot.name());
            }
            other => println!("unknown command '/{}', /help for commands", other),
        }
    }

    Ok(())
}

// ── Rendering ──────────────────────────────────────────────────────────

fn render_view(view: &AnalysisView) {
    println!("\n{} ({})", view.document.filename, view.document.id);
    println!("{}", "=".repeat(60));

    println!(
        "Risk: {}  [{}]  gradient {} -> {}",
        view.risk.score_label,
        view.risk.band.label(),
        view.risk.gradient.0,
        view.risk.gradient.1
    );
    if !view.risk.summary.is_empty() {
        println!("{}", view.risk.summary);
    }
    for bar in &view.risk.severity_bars {
        println!(
            "  {:<8} {:>3}  {:>5.1}%",
            bar.band.label(),
            bar.count,
            bar.percent
        );
    }

    if !view.risk.factors.is_empty() {
        println!("\nTop risk factors:");
        for factor in view.risk.top_factors() {
            println!("  [{}] {}", factor.severity, factor.category);
        }
        let hidden = view.risk.factors.len() - view.risk.top_factors().len();
        if hidden > 0 {
            println!("  ... and {} more (/risks to list all)", hidden);
        }
    }

    println!(
        "\nDocument type: {}  |  Compliance: {}  |  Jurisdiction: {}",
        view.context.document_type,
        view.context.compliance_label,
        if view.context.jurisdiction.is_empty() {
            "-"
        } else {
            &view.context.jurisdiction
        }
    );
    if !view.context.applicable_acts.is_empty() {
        println!("Applicable acts:");
        for act in view.context.top_acts() {
            println!("  - {}", act.name);
        }
    }
    if !view.context.missing_clauses.is_empty() {
        println!("Missing clauses:");
        for clause in view.context.top_missing_clauses() {
            println!("  - {} [{}]", clause.clause_type, clause.importance);
        }
    }

    if !view.intelligence.classes.is_empty() {
        println!(
            "\nClassified as: {} ({} confidence)",
            view.intelligence.top_type,
            clauselens_core::percentage(view.intelligence.confidence)
        );
    }

    if !view.summary.is_empty() {
        println!("\n{}", view.summary);
    }
}

fn render_search(result: &SearchResult) {
    println!(
        "{} matches across {} clauses for \"{}\"",
        result.matches.len(),
        result.total_clauses,
        result.query
    );
    for m in &result.matches {
        let band = clauselens_core::interpret(m.similarity);
        println!(
            "  {:>6}  [{}] {}",
            m.similarity_percentage, m.clause.clause_type, band.label
        );
        println!("          {}", m.clause.text);
    }
}

fn render_comparison(comparison: &ComparisonView) {
    println!(
        "{} vs {}: {} ({})",
        comparison.document_1.filename,
        comparison.document_2.filename,
        comparison.similarity_percentage,
        comparison.band.label
    );
    if !comparison.embeddings_available {
        println!("note: embeddings unavailable, score may be approximate");
    }
}

fn render_workflow_failure(state: &WorkflowState) {
    if let WorkflowState::Failed {
        step,
        error,
        document,
    } = state
    {
        match step {
            crate::services::orchestrator::FailedStep::Upload => {
                eprintln!("upload failed: {}", error);
                eprintln!("select the file again to retry");
            }
            crate::services::orchestrator::FailedStep::Analyze => {
                eprintln!("analysis failed: {}", error);
                if let Some(document) = document {
                    eprintln!("document {} was uploaded; restart to retry", document.id);
                }
            }
        }
    }
}
