//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Tunable parameters of the scoring pipeline.
///
/// Validated once at engine construction; an invalid configuration is a
/// control-plane defect and never surfaces mid-analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Scale applied to flavor-event weights. Must stay within
    /// `[0.1, 0.3]` so flavor picks cannot override deliberate answers.
    pub event_dampening: f64,
    /// Per-position multipliers for ranking answers, most-preferred first.
    /// Positions beyond the table contribute 0.
    pub ranking_position_weights: Vec<f64>,
    /// Share of confidence carried by the top-vs-runner-up gap.
    pub gap_weight: f64,
    /// Share of confidence carried by split-half consistency.
    pub consistency_weight: f64,
    /// Consistency value assumed when the split-half check cannot run.
    pub neutral_consistency: f64,
    /// Minimum primary answers required for the split-half check.
    pub min_sample: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            event_dampening: 0.15,
            ranking_position_weights: vec![1.0, 0.6, 0.3, 0.1],
            gap_weight: 0.7,
            consistency_weight: 0.3,
            neutral_consistency: 0.5,
            min_sample: 8,
        }
    }
}

impl EngineConfig {
    /// Validate all parameters.
    pub fn validate(&self) -> EngineResult<()> {
        if !(0.1..=0.3).contains(&self.event_dampening) {
            return Err(EngineError::ConfigError(format!(
                "event_dampening must be in [0.1, 0.3], got {}",
                self.event_dampening
            )));
        }
        if self.ranking_position_weights.is_empty() {
            return Err(EngineError::ConfigError(
                "ranking_position_weights must not be empty".into(),
            ));
        }
        for window in self.ranking_position_weights.windows(2) {
            if window[1] > window[0] {
                return Err(EngineError::ConfigError(
                    "ranking_position_weights must be non-increasing".into(),
                ));
            }
        }
        for &weight in &self.ranking_position_weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(EngineError::ConfigError(format!(
                    "ranking position weight {weight} out of [0, 1]"
                )));
            }
        }
        if self.gap_weight < 0.0 || self.consistency_weight < 0.0 {
            return Err(EngineError::ConfigError(
                "confidence weights must be non-negative".into(),
            ));
        }
        if (self.gap_weight + self.consistency_weight - 1.0).abs() > 1e-6 {
            return Err(EngineError::ConfigError(format!(
                "gap_weight + consistency_weight must equal 1.0, got {}",
                self.gap_weight + self.consistency_weight
            )));
        }
        if !(0.0..=1.0).contains(&self.neutral_consistency) {
            return Err(EngineError::ConfigError(format!(
                "neutral_consistency must be in [0, 1], got {}",
                self.neutral_consistency
            )));
        }
        if self.min_sample == 0 {
            return Err(EngineError::ConfigError(
                "min_sample must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
