//! Result Aggregation
//!
//! `aggregate()` turns the raw, partially-optional analysis payload into the
//! default-filled view model the render layer consumes. Absent sub-sections
//! become neutral values (empty lists, zero scores, "General Contract"),
//! never errors. The transform is pure: identical input yields identical
//! output, bit for bit.

use crate::analysis::{AnalysisResult, MissingClause, RiskBand, RiskFactor, RiskMatrix};
use crate::document::Document;

use serde::Serialize;

/// Risk factors shown before the "view all" cut
pub const RISK_FACTOR_DISPLAY_CAP: usize = 5;
/// Applicable acts shown before the cut
pub const APPLIED_ACT_DISPLAY_CAP: usize = 6;
/// Missing clauses shown before the cut
pub const MISSING_CLAUSE_DISPLAY_CAP: usize = 4;

/// Label used when the server did not classify the document
pub const DEFAULT_DOCUMENT_TYPE: &str = "General Contract";

/// The normalized, default-filled structure the render layer consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisView {
    /// The document this view was derived from
    pub document: Document,
    pub risk: RiskView,
    pub context: ContextView,
    pub intelligence: IntelligenceView,
    /// Free-text AI summary, empty when not computed
    pub summary: String,
}

/// Risk section of the view model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskView {
    /// Overall score in 0..=100, 0.0 when not computed
    pub score: f64,
    /// Score rendered for display, e.g. "72.4/100"
    pub score_label: String,
    pub band: RiskBand,
    /// Two-stop color gradient for the band
    pub gradient: (&'static str, &'static str),
    pub summary: String,
    /// All risk factors, server order preserved
    pub factors: Vec<RiskFactor>,
    pub matrix: RiskMatrix,
    /// Per-severity share of counted clauses, highest severity first
    pub severity_bars: Vec<SeverityBar>,
}

impl RiskView {
    /// Factors up to the display cap; the full list stays in `factors`
    pub fn top_factors(&self) -> &[RiskFactor] {
        let cap = self.factors.len().min(RISK_FACTOR_DISPLAY_CAP);
        &self.factors[..cap]
    }
}

/// One per-severity completion bar
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeverityBar {
    pub band: RiskBand,
    pub count: u32,
    /// Share of all counted clauses, 0.0 when nothing was counted
    pub percent: f64,
}

/// Indian legal context section of the view model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextView {
    /// Humanized document type, "General Contract" when unclassified
    pub document_type: String,
    pub jurisdiction: String,
    /// All applicable acts, server order preserved
    pub applicable_acts: Vec<crate::analysis::AppliedAct>,
    /// All missing clauses, server order preserved
    pub missing_clauses: Vec<MissingClause>,
    /// Compliance score clamped into 0..=100
    pub compliance_score: f64,
    /// Compliance rendered for display, e.g. "65%"
    pub compliance_label: String,
    pub critical_gaps: Vec<String>,
}

impl ContextView {
    /// Acts up to the display cap
    pub fn top_acts(&self) -> &[crate::analysis::AppliedAct] {
        let cap = self.applicable_acts.len().min(APPLIED_ACT_DISPLAY_CAP);
        &self.applicable_acts[..cap]
    }

    /// Missing clauses up to the display cap
    pub fn top_missing_clauses(&self) -> &[MissingClause] {
        let cap = self.missing_clauses.len().min(MISSING_CLAUSE_DISPLAY_CAP);
        &self.missing_clauses[..cap]
    }
}

/// One classification label with its confidence
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassScore {
    pub label: String,
    pub score: f64,
}

/// Document intelligence section of the view model
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelligenceView {
    /// Classification scores, best first (ties broken by label for a stable
    /// ordering across identical inputs)
    pub classes: Vec<ClassScore>,
    pub top_type: String,
    pub confidence: f64,
    pub embedding_dimensions: u32,
}

/// Derive the view model from a raw analysis payload.
///
/// Pure and stateless; safe to call any number of times.
pub fn aggregate(document: &Document, raw: &AnalysisResult) -> AnalysisView {
    AnalysisView {
        document: document.clone(),
        risk: aggregate_risk(raw),
        context: aggregate_context(raw),
        intelligence: aggregate_intelligence(raw),
        summary: raw
            .ai_summary
            .as_ref()
            .map(|s| s.summary.clone())
            .unwrap_or_default(),
    }
}

fn aggregate_risk(raw: &AnalysisResult) -> RiskView {
    let (score, band, summary, factors, matrix) = match &raw.risk_analysis {
        Some(risk) => (
            risk.overall_risk_score,
            risk.risk_level,
            risk.summary.clone(),
            risk.risk_factors.clone(),
            risk.risk_matrix,
        ),
        None => (0.0, RiskBand::Low, String::new(), Vec::new(), RiskMatrix::default()),
    };

    let total = matrix.total();
    let severity_bars = RiskBand::all()
        .into_iter()
        .map(|band| {
            let count = matrix.count(band);
            SeverityBar {
                band,
                count,
                percent: ratio_percent(count, total),
            }
        })
        .collect();

    RiskView {
        score,
        score_label: format!("{:.1}/100", score),
        band,
        gradient: band.gradient(),
        summary,
        factors,
        matrix,
        severity_bars,
    }
}

fn aggregate_context(raw: &AnalysisResult) -> ContextView {
    // The server folds the same missing-clause findings into the risk
    // section; prefer the context section and fall back to the risk copy.
    let missing_from_risk = raw
        .risk_analysis
        .as_ref()
        .map(|r| r.missing_clauses.clone())
        .unwrap_or_default();

    match &raw.indian_context {
        Some(ctx) => {
            let missing = if ctx.missing_important_clauses.is_empty() {
                missing_from_risk
            } else {
                ctx.missing_important_clauses.clone()
            };
            let compliance = ctx.compliance_score.clamp(0.0, 100.0);
            ContextView {
                document_type: humanize_label(&ctx.document_type),
                jurisdiction: ctx.jurisdiction.clone(),
                applicable_acts: ctx.applicable_acts.clone(),
                missing_clauses: missing,
                compliance_score: compliance,
                compliance_label: format!("{:.0}%", compliance),
                critical_gaps: ctx.critical_gaps.clone(),
            }
        }
        None => ContextView {
            document_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            jurisdiction: String::new(),
            applicable_acts: Vec::new(),
            missing_clauses: missing_from_risk,
            compliance_score: 0.0,
            compliance_label: "0%".to_string(),
            critical_gaps: Vec::new(),
        },
    }
}

fn aggregate_intelligence(raw: &AnalysisResult) -> IntelligenceView {
    match &raw.document_intelligence {
        Some(intel) => {
            let mut classes: Vec<ClassScore> = intel
                .classification
                .iter()
                .map(|(label, score)| ClassScore {
                    label: humanize_label(label),
                    score: *score,
                })
                .collect();
            classes.sort_by(|a, b| {
                b.score
                    .partial_cmp(&a.score)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then_with(|| a.label.cmp(&b.label))
            });
            let (top_type, confidence) = classes
                .first()
                .map(|c| (c.label.clone(), c.score))
                .unwrap_or_else(|| (DEFAULT_DOCUMENT_TYPE.to_string(), 0.0));
            IntelligenceView {
                classes,
                top_type,
                confidence,
                embedding_dimensions: intel.embedding_dimensions,
            }
        }
        None => IntelligenceView {
            classes: Vec::new(),
            top_type: DEFAULT_DOCUMENT_TYPE.to_string(),
            confidence: 0.0,
            embedding_dimensions: 0,
        },
    }
}

/// Percentage of `count` over `total`; a zero denominator yields 0.0, never NaN
fn ratio_percent(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        f64::from(count) / f64::from(total) * 100.0
    }
}

/// "employment_agreement" -> "Employment Agreement"; empty -> "General Contract"
fn humanize_label(raw: &str) -> String {
    if raw.trim().is_empty() {
        return DEFAULT_DOCUMENT_TYPE.to_string();
    }
    raw.split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
