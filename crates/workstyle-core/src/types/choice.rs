//! Respondent choice records.

use serde::{Deserialize, Serialize};

use crate::types::framework::{Disc, Riasec};
use crate::types::weights::WeightVector;

/// Highest primary question number in a completed run.
pub const MAX_QUESTION_NUMBER: u8 = 16;

/// One answered primary decision point.
///
/// Produced by the narrative engine each time the respondent answers a
/// primary question. Immutable once created; if the respondent revisits a
/// question, the narrative engine emits a new record with the same
/// `question_number` and the aggregator keeps only the latest one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceRecord {
    /// Primary question slot, 1..=16, unique per completed run.
    pub question_number: u8,
    /// Scene the question appeared in.
    pub scene_id: String,
    /// The option the respondent picked.
    pub choice_id: String,
    /// DISC contribution of the picked option.
    pub weights: WeightVector<Disc>,
    /// RIASEC contribution of the picked option.
    pub riasec_weights: WeightVector<Riasec>,
}

impl ChoiceRecord {
    pub fn new(
        question_number: u8,
        scene_id: impl Into<String>,
        choice_id: impl Into<String>,
        weights: WeightVector<Disc>,
        riasec_weights: WeightVector<Riasec>,
    ) -> Self {
        Self {
            question_number,
            scene_id: scene_id.into(),
            choice_id: choice_id.into(),
            weights,
            riasec_weights,
        }
    }
}

/// A low-weight flavor-event choice.
///
/// Folded into the raw sums at a configured dampening factor so incidental
/// flavor picks can never override deliberate primary answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventChoiceRecord {
    pub event_id: String,
    pub choice_id: String,
    pub weights: WeightVector<Disc>,
    pub riasec_weights: WeightVector<Riasec>,
}
