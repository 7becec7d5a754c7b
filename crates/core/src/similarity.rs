//! Similarity Score Banding
//!
//! Maps a similarity score in [0, 1] to a qualitative band. The document
//! comparison view and the semantic search view both go through this table
//! so their labels can never diverge.

use serde::Serialize;

/// Qualitative interpretation of a similarity score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SimilarityBand {
    /// Human-readable label for the band
    pub label: &'static str,
    /// Accent color associated with the band
    pub color: &'static str,
}

/// Banding table, evaluated high-to-low. Each threshold is inclusive at the
/// lower bound of its band: exactly 0.90 is "Nearly identical documents".
const BANDS: [(f64, SimilarityBand); 4] = [
    (
        0.90,
        SimilarityBand {
            label: "Nearly identical documents",
            color: "#16a34a",
        },
    ),
    (
        0.75,
        SimilarityBand {
            label: "Very similar structure and content",
            color: "#0d9488",
        },
    ),
    (
        0.60,
        SimilarityBand {
            label: "Moderately similar, same type",
            color: "#2563eb",
        },
    ),
    (
        0.40,
        SimilarityBand {
            label: "Somewhat similar clauses",
            color: "#d97706",
        },
    ),
];

/// Fallback band for scores below every threshold
const DIFFERENT: SimilarityBand = SimilarityBand {
    label: "Different documents",
    color: "#dc2626",
};

/// Interpret a similarity score as a qualitative band.
///
/// The thresholds are total over f64: anything below 0.40 (including
/// out-of-range negatives) reads as "Different documents".
pub fn interpret(score: f64) -> SimilarityBand {
    for (threshold, band) in BANDS {
        if score >= threshold {
            return band;
        }
    }
    DIFFERENT
}

/// Format a similarity score as a percentage, matching the server's own
/// rendering ("87.3%").
pub fn percentage(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}
