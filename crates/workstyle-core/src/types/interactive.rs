//! Interactive (non-multiple-choice) question results.

use serde::{Deserialize, Serialize};

use crate::types::framework::{Disc, Riasec};
use crate::types::weights::WeightVector;

/// Result of an interactive question, tagged by question kind.
///
/// The hint vectors are computed by the interactive scorer at the moment of
/// capture and carried with the result from then on; downstream aggregation
/// never recomputes them from raw option/factor tables, which keeps the
/// audit trail stable even if factor tables change between releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractiveResult {
    /// A forced ranking of the question's options, most-preferred first.
    Ranking {
        question_id: String,
        ranking: Vec<String>,
        disc_hints: WeightVector<Disc>,
        riasec_hints: WeightVector<Riasec>,
    },
    /// A continuous slider position in `[0, 100]`.
    Slider {
        question_id: String,
        value: f64,
        disc_hints: WeightVector<Disc>,
        riasec_hints: WeightVector<Riasec>,
    },
}

impl InteractiveResult {
    pub fn question_id(&self) -> &str {
        match self {
            Self::Ranking { question_id, .. } | Self::Slider { question_id, .. } => question_id,
        }
    }

    pub fn disc_hints(&self) -> &WeightVector<Disc> {
        match self {
            Self::Ranking { disc_hints, .. } | Self::Slider { disc_hints, .. } => disc_hints,
        }
    }

    pub fn riasec_hints(&self) -> &WeightVector<Riasec> {
        match self {
            Self::Ranking { riasec_hints, .. } | Self::Slider { riasec_hints, .. } => riasec_hints,
        }
    }
}
