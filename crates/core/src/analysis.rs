//! Analysis Payload Models
//!
//! The normalized analysis result constructed once at the orchestrator
//! boundary. Every sub-section is independently optional: absence means the
//! server did not compute it, not that the analysis failed. Downstream code
//! consumes the defaults the aggregator fills in, never raw JSON.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Complete analysis payload attached 1:1 to a document.
///
/// Replaced wholesale on re-analysis, never merged field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// ML risk scoring (score, level, factors, matrix)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_analysis: Option<RiskAnalysis>,
    /// Indian legal context (applicable acts, missing clauses, compliance)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indian_context: Option<IndianContext>,
    /// Embedding-based document intelligence (classification)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_intelligence: Option<DocumentIntelligence>,
    /// Free-text LLM summary
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<AiSummary>,
}

/// Qualitative risk bucket with an associated color gradient.
///
/// Used both for the document-level `risk_level` and per-factor severity.
/// Unrecognized server values fall back to `Low` rather than failing the
/// whole payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskBand {
    Critical,
    High,
    Medium,
    Low,
}

impl Default for RiskBand {
    fn default() -> Self {
        Self::Low
    }
}

impl From<&str> for RiskBand {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "critical" => RiskBand::Critical,
            "high" => RiskBand::High,
            "medium" | "moderate" => RiskBand::Medium,
            _ => RiskBand::Low,
        }
    }
}

impl<'de> serde::Deserialize<'de> for RiskBand {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(RiskBand::from(s.as_str()))
    }
}

impl RiskBand {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Critical => "Critical",
            RiskBand::High => "High",
            RiskBand::Medium => "Medium",
            RiskBand::Low => "Low",
        }
    }

    /// Fixed two-stop color gradient (start, end) for this band.
    ///
    /// The mapping is the single source of truth for risk coloring; render
    /// layers must not define their own.
    pub fn gradient(&self) -> (&'static str, &'static str) {
        match self {
            RiskBand::Critical => ("#dc2626", "#7f1d1d"),
            RiskBand::High => ("#ea580c", "#9a3412"),
            RiskBand::Medium => ("#d97706", "#92400e"),
            RiskBand::Low => ("#16a34a", "#14532d"),
        }
    }

    /// All bands, highest severity first. Drives ordered per-severity bars.
    pub fn all() -> [RiskBand; 4] {
        [
            RiskBand::Critical,
            RiskBand::High,
            RiskBand::Medium,
            RiskBand::Low,
        ]
    }
}

impl std::fmt::Display for RiskBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// ML-derived risk assessment for the whole document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskAnalysis {
    /// Overall score in 0..=100
    #[serde(default)]
    pub overall_risk_score: f64,
    /// Document-level risk bucket
    #[serde(default)]
    pub risk_level: RiskBand,
    /// Human-readable risk summary
    #[serde(default)]
    pub summary: String,
    /// Individual risk findings, server-ordered
    #[serde(default)]
    pub risk_factors: Vec<RiskFactor>,
    /// Per-severity clause counts
    #[serde(default)]
    pub risk_matrix: RiskMatrix,
    /// Missing-clause findings the server folded into the risk section
    #[serde(default)]
    pub missing_clauses: Vec<MissingClause>,
}

/// A single risk finding tied to a clause
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    /// Clause category, e.g. "Indemnification"
    #[serde(default)]
    pub category: String,
    /// Severity bucket for this finding
    #[serde(default)]
    pub severity: RiskBand,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default)]
    pub mitigation: String,
    /// Excerpt of the clause the finding refers to
    #[serde(default)]
    pub clause_reference: String,
}

/// Per-severity clause counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskMatrix {
    #[serde(default, rename = "Critical")]
    pub critical: u32,
    #[serde(default, rename = "High")]
    pub high: u32,
    #[serde(default, rename = "Medium")]
    pub medium: u32,
    #[serde(default, rename = "Low")]
    pub low: u32,
}

impl RiskMatrix {
    /// Count for one band
    pub fn count(&self, band: RiskBand) -> u32 {
        match band {
            RiskBand::Critical => self.critical,
            RiskBand::High => self.high,
            RiskBand::Medium => self.medium,
            RiskBand::Low => self.low,
        }
    }

    /// Total clauses counted across all bands
    pub fn total(&self) -> u32 {
        self.critical + self.high + self.medium + self.low
    }
}

/// Indian legal context for the document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndianContext {
    /// Detected document type, e.g. "employment_agreement"
    #[serde(default)]
    pub document_type: String,
    /// Acts identified as applicable, rendered as-is
    #[serde(default)]
    pub applicable_acts: Vec<AppliedAct>,
    /// Clauses the server flagged as missing for this document type
    #[serde(default)]
    pub missing_important_clauses: Vec<MissingClause>,
    /// Compliance score in 0..=100
    #[serde(default)]
    pub compliance_score: f64,
    /// Critical compliance gaps, free text
    #[serde(default)]
    pub critical_gaps: Vec<String>,
    #[serde(default)]
    pub jurisdiction: String,
}

/// An Indian act the server matched against the document.
///
/// Reference entry keyed by name; rendered, never mutated by the client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedAct {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, rename = "type")]
    pub act_type: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub relevance: String,
}

/// A clause the server expected but did not find.
///
/// Reference entry keyed by clause type; rendered, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MissingClause {
    #[serde(default)]
    pub clause_type: String,
    #[serde(default)]
    pub importance: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub legal_basis: String,
}

/// Embedding-based document intelligence
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentIntelligence {
    /// Label -> confidence score
    #[serde(default)]
    pub classification: HashMap<String, f64>,
    #[serde(default)]
    pub embedding_dimensions: u32,
}

/// Free-text LLM summary section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AiSummary {
    #[serde(default)]
    pub summary: String,
}
