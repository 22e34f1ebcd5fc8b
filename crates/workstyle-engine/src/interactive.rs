//! Interactive question scorer.
//!
//! Converts the two non-linear question types (forced ranking, continuous
//! slider) into supplementary DISC/RIASEC hint vectors, decoupled from the
//! primary choice-weight scheme so interactive questions never dominate the
//! profile. Hints are computed once at capture and carried with the result;
//! the aggregator folds them at full magnitude without recomputation.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use workstyle_core::{Disc, InteractiveResult, Riasec, WeightVector};

use crate::error::{EngineError, EngineResult};

/// Factor contribution of one ranking option or slider endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionFactors {
    pub disc: WeightVector<Disc>,
    pub riasec: WeightVector<Riasec>,
}

/// Registered factor data for one interactive question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionFactors {
    /// Per-option factors for a forced-ranking question.
    Ranking {
        options: HashMap<String, OptionFactors>,
    },
    /// Endpoint factors for a continuous slider.
    Slider {
        min_factors: OptionFactors,
        max_factors: OptionFactors,
    },
}

/// Static registry of interactive-question factor tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FactorRegistry {
    questions: HashMap<String, QuestionFactors>,
}

impl FactorRegistry {
    pub fn new(questions: HashMap<String, QuestionFactors>) -> Self {
        Self { questions }
    }

    /// Registry with no questions; every answer degrades to zero factors.
    pub fn empty() -> Self {
        Self {
            questions: HashMap::new(),
        }
    }

    /// Factor tables for the interactive questions shipped with the quiz.
    pub fn builtin() -> Self {
        let mut questions = HashMap::new();

        // "When the expedition stalls, what do you reach for first?"
        let mut options = HashMap::new();
        options.insert(
            "take_charge".to_string(),
            OptionFactors {
                disc: WeightVector::from_pairs(&[(Disc::Dominance, 2.0)]),
                riasec: WeightVector::from_pairs(&[(Riasec::Enterprising, 1.5)]),
            },
        );
        options.insert(
            "rally_spirits".to_string(),
            OptionFactors {
                disc: WeightVector::from_pairs(&[(Disc::Influence, 2.0)]),
                riasec: WeightVector::from_pairs(&[(Riasec::Social, 1.5)]),
            },
        );
        options.insert(
            "steady_hands".to_string(),
            OptionFactors {
                disc: WeightVector::from_pairs(&[(Disc::Steadiness, 2.0)]),
                riasec: WeightVector::from_pairs(&[(Riasec::Realistic, 1.5)]),
            },
        );
        options.insert(
            "map_the_details".to_string(),
            OptionFactors {
                disc: WeightVector::from_pairs(&[(Disc::Conscientiousness, 2.0)]),
                riasec: WeightVector::from_pairs(&[(Riasec::Investigative, 1.5)]),
            },
        );
        questions.insert(
            "q09_team_rally".to_string(),
            QuestionFactors::Ranking { options },
        );

        // "How far would you push the venture?" Cautious end favors
        // steadiness and convention, bold end favors dominance and
        // enterprise.
        questions.insert(
            "q13_risk_dial".to_string(),
            QuestionFactors::Slider {
                min_factors: OptionFactors {
                    disc: WeightVector::from_pairs(&[
                        (Disc::Steadiness, 1.5),
                        (Disc::Conscientiousness, 1.0),
                    ]),
                    riasec: WeightVector::from_pairs(&[(Riasec::Conventional, 1.5)]),
                },
                max_factors: OptionFactors {
                    disc: WeightVector::from_pairs(&[(Disc::Dominance, 2.0)]),
                    riasec: WeightVector::from_pairs(&[(Riasec::Enterprising, 1.5)]),
                },
            },
        );

        Self { questions }
    }

    /// Load a registry from its JSON representation.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let questions: HashMap<String, QuestionFactors> =
            serde_json::from_str(json).map_err(EngineError::from)?;
        Ok(Self { questions })
    }

    pub fn get(&self, question_id: &str) -> Option<&QuestionFactors> {
        self.questions.get(question_id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Score a forced ranking against its option factor table.
///
/// Position weights are applied most-preferred first; positions beyond the
/// table contribute 0. Option ids absent from the table are valid no-ops.
/// Results are rounded to 2 decimal places.
pub fn score_ranking(
    ranking: &[String],
    options: &HashMap<String, OptionFactors>,
    position_weights: &[f64],
) -> (WeightVector<Disc>, WeightVector<Riasec>) {
    let mut disc = WeightVector::<Disc>::zero();
    let mut riasec = WeightVector::<Riasec>::zero();
    for (position, option_id) in ranking.iter().enumerate() {
        let weight = position_weights.get(position).copied().unwrap_or(0.0);
        match options.get(option_id) {
            Some(factors) => {
                disc.add_scaled(&factors.disc, weight);
                riasec.add_scaled(&factors.riasec, weight);
            }
            None => {
                tracing::warn!(option = %option_id, "ranking option has no factors, skipping");
            }
        }
    }
    (disc.rounded2(), riasec.rounded2())
}

/// Score a slider value against its endpoint factors.
///
/// Linear interpolation: `min * (1 - v/100) + max * (v/100)`. Out-of-range
/// values are clamped into `[0, 100]`. Results are rounded to 2 decimals.
pub fn score_slider(
    value: f64,
    min_factors: &OptionFactors,
    max_factors: &OptionFactors,
) -> (WeightVector<Disc>, WeightVector<Riasec>) {
    if !(0.0..=100.0).contains(&value) {
        tracing::warn!(value, "slider value out of [0, 100], clamping");
    }
    let t = value.clamp(0.0, 100.0) / 100.0;

    let mut disc = WeightVector::<Disc>::zero();
    disc.add_scaled(&min_factors.disc, 1.0 - t);
    disc.add_scaled(&max_factors.disc, t);

    let mut riasec = WeightVector::<Riasec>::zero();
    riasec.add_scaled(&min_factors.riasec, 1.0 - t);
    riasec.add_scaled(&max_factors.riasec, t);

    (disc.rounded2(), riasec.rounded2())
}

/// One captured interactive answer, kept for audit and export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordedInteraction {
    pub id: Uuid,
    pub recorded_at: DateTime<Utc>,
    pub result: InteractiveResult,
}

/// Records interactive answers, computing hint vectors at capture time.
///
/// Keeps an append-only log of everything it recorded; it mutates no other
/// state. Questions missing from the registry degrade to zero factors: the
/// answer is still recorded, it just contributes no signal.
#[derive(Debug, Clone)]
pub struct InteractiveScorer {
    registry: FactorRegistry,
    position_weights: Vec<f64>,
    log: Vec<RecordedInteraction>,
}

impl InteractiveScorer {
    pub fn new(registry: FactorRegistry, position_weights: Vec<f64>) -> Self {
        Self {
            registry,
            position_weights,
            log: Vec::new(),
        }
    }

    /// Record a forced-ranking answer and return the hinted result.
    pub fn record_ranking(&mut self, question_id: &str, ranking: Vec<String>) -> InteractiveResult {
        let empty = HashMap::new();
        let options = match self.registry.get(question_id) {
            Some(QuestionFactors::Ranking { options }) => options,
            Some(QuestionFactors::Slider { .. }) => {
                tracing::warn!(
                    question = question_id,
                    "ranking answer for a slider question, using zero factors"
                );
                &empty
            }
            None => {
                tracing::warn!(
                    question = question_id,
                    "no factor table registered, using zero factors"
                );
                &empty
            }
        };
        let (disc_hints, riasec_hints) = score_ranking(&ranking, options, &self.position_weights);
        let result = InteractiveResult::Ranking {
            question_id: question_id.to_string(),
            ranking,
            disc_hints,
            riasec_hints,
        };
        self.push(result.clone());
        result
    }

    /// Record a slider answer and return the hinted result.
    pub fn record_slider(&mut self, question_id: &str, value: f64) -> InteractiveResult {
        let zero = OptionFactors::default();
        let (min_factors, max_factors) = match self.registry.get(question_id) {
            Some(QuestionFactors::Slider {
                min_factors,
                max_factors,
            }) => (min_factors, max_factors),
            Some(QuestionFactors::Ranking { .. }) => {
                tracing::warn!(
                    question = question_id,
                    "slider answer for a ranking question, using zero factors"
                );
                (&zero, &zero)
            }
            None => {
                tracing::warn!(
                    question = question_id,
                    "no factor table registered, using zero factors"
                );
                (&zero, &zero)
            }
        };
        let (disc_hints, riasec_hints) = score_slider(value, min_factors, max_factors);
        let result = InteractiveResult::Slider {
            question_id: question_id.to_string(),
            value,
            disc_hints,
            riasec_hints,
        };
        self.push(result.clone());
        result
    }

    fn push(&mut self, result: InteractiveResult) {
        self.log.push(RecordedInteraction {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            result,
        });
    }

    /// Everything recorded so far, in capture order.
    pub fn history(&self) -> &[RecordedInteraction] {
        &self.log
    }

    /// The recorded results alone, ready to feed into analysis.
    pub fn results(&self) -> Vec<InteractiveResult> {
        self.log.iter().map(|entry| entry.result.clone()).collect()
    }
}
