//! The engine's output value object.

use serde::{Deserialize, Serialize};

use crate::catalog::{PersonalityType, RelatedType};
use crate::types::framework::{BigFive, CareerAnchor, Disc, Riasec};
use crate::types::weights::{Percentages, WeightVector};

/// How much the confidence figure can be trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalReliability {
    /// Enough primary answers were recorded for the split-half check.
    Full,
    /// Too few primary answers; the consistency component was held at its
    /// neutral value and the result surface should say so.
    Reduced,
}

/// Complete output of one analysis invocation.
///
/// A self-contained value object: created fresh on every invocation, never
/// partially mutated, safe to serialize for the result-display and
/// report-generation surfaces. Re-analyzing an identical input list yields
/// an identical `AnalysisResult`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Calibrated raw DISC sums, rounded to 2 decimals.
    pub disc_scores: WeightVector<Disc>,
    /// Normalized DISC distribution (sums to 100).
    pub disc_percent: Percentages<Disc>,
    /// Calibrated raw RIASEC sums, rounded to 2 decimals.
    pub riasec_scores: WeightVector<Riasec>,
    /// Normalized RIASEC distribution (sums to 100).
    pub riasec_percent: Percentages<Riasec>,
    /// Projected Big Five sums, rounded to 2 decimals.
    pub big_five_scores: WeightVector<BigFive>,
    /// Normalized Big Five distribution (sums to 100).
    pub big_five_percent: Percentages<BigFive>,
    /// Projected career-anchor sums, rounded to 2 decimals.
    pub career_anchor_scores: WeightVector<CareerAnchor>,
    /// Normalized career-anchor distribution (sums to 100).
    pub career_anchor_percent: Percentages<CareerAnchor>,
    /// Snapshot of the matched catalog entry.
    pub matched_type: PersonalityType,
    /// Decisiveness of the match, 0..=100.
    pub confidence: u8,
    /// Whether the confidence figure carries full weight.
    pub reliability: SignalReliability,
    /// Up to 3 neighboring types from the similarity graph.
    pub related_types: Vec<RelatedType>,
    /// Narrative branch the run traversed, if any (pass-through metadata).
    pub branch: Option<String>,
    /// RIASEC variant identifier, if any (pass-through metadata).
    pub variant: Option<String>,
}
