//! Confidence calculator.
//!
//! Produces a scalar in `[0, 100]` expressing how decisively the answer
//! pattern supports the matched type. Two ingredients:
//!
//! - the gap between the top DISC percentage and the runner-up, and
//! - split-half consistency: the cosine similarity between the DISC sums of
//!   the first and second halves of the answered questions.
//!
//! `confidence = round(gap * (gap_weight + consistency_weight * consistency))`
//!
//! With the weights summing to 1 this is monotonic in the gap, 0 for a flat
//! distribution, and 100 for a fully skewed distribution with perfect
//! split-half agreement. Runs with fewer answers than `min_sample` skip the
//! split-half check, hold consistency at its neutral value, and report
//! [`SignalReliability::Reduced`] so the result surface can qualify the
//! figure instead of presenting it as certain.

use workstyle_core::{ChoiceRecord, Disc, Percentages, SignalReliability, WeightVector};

use crate::config::EngineConfig;

/// Confidence and its ingredients, for display and diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfidenceReport {
    /// Bounded scalar, 0..=100.
    pub confidence: u8,
    pub reliability: SignalReliability,
    /// Top-vs-runner-up DISC gap in percentage points.
    pub gap: u8,
    /// Split-half consistency in [0, 1] (neutral when reliability is
    /// reduced).
    pub consistency: f64,
}

/// Compute confidence from the normalized DISC distribution and the
/// deduplicated, question-ordered choice records.
pub fn compute(
    disc_percent: &Percentages<Disc>,
    ordered_choices: &[&ChoiceRecord],
    config: &EngineConfig,
) -> ConfidenceReport {
    let top = disc_percent.get(disc_percent.dominant());
    let runner_up = disc_percent.get(disc_percent.runner_up());
    let gap = top.saturating_sub(runner_up);

    let (consistency, reliability) = if ordered_choices.len() < config.min_sample {
        (config.neutral_consistency, SignalReliability::Reduced)
    } else {
        (
            split_half_consistency(ordered_choices).unwrap_or(config.neutral_consistency),
            SignalReliability::Full,
        )
    };

    let scaled =
        f64::from(gap) * (config.gap_weight + config.consistency_weight * consistency);
    let confidence = scaled.round().clamp(0.0, 100.0) as u8;

    ConfidenceReport {
        confidence,
        reliability,
        gap,
        consistency,
    }
}

/// Cosine similarity between first-half and second-half DISC sums, clamped
/// into [0, 1]. `None` when either half carries no signal.
fn split_half_consistency(ordered_choices: &[&ChoiceRecord]) -> Option<f64> {
    let mid = ordered_choices.len() / 2;
    let first = half_sum(&ordered_choices[..mid]);
    let second = half_sum(&ordered_choices[mid..]);
    cosine(&first, &second).map(|c| c.clamp(0.0, 1.0))
}

fn half_sum(choices: &[&ChoiceRecord]) -> WeightVector<Disc> {
    let mut sum = WeightVector::zero();
    for record in choices {
        sum.add_scaled(&record.weights, 1.0);
    }
    sum
}

fn cosine(a: &WeightVector<Disc>, b: &WeightVector<Disc>) -> Option<f64> {
    let dot: f64 = a
        .values()
        .iter()
        .zip(b.values())
        .map(|(x, y)| x * y)
        .sum();
    let norm_a: f64 = a.values().iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b: f64 = b.values().iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm_a < 1e-9 || norm_b < 1e-9 {
        return None;
    }
    Some(dot / (norm_a * norm_b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use workstyle_core::Riasec;

    fn d_choice(question: u8, d: f64) -> ChoiceRecord {
        ChoiceRecord::new(
            question,
            "scene",
            "choice",
            WeightVector::from_pairs(&[(Disc::Dominance, d)]),
            WeightVector::<Riasec>::zero(),
        )
    }

    fn percentages(values: [u8; 4]) -> Percentages<Disc> {
        Percentages::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_flat_distribution_yields_zero() {
        let choices: Vec<ChoiceRecord> = (1..=16).map(|q| d_choice(q, 1.0)).collect();
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        let report = compute(&percentages([25, 25, 25, 25]), &refs, &EngineConfig::default());
        assert_eq!(report.confidence, 0);
        assert_eq!(report.gap, 0);
    }

    #[test]
    fn test_full_skew_with_agreement_yields_max() {
        let choices: Vec<ChoiceRecord> = (1..=16).map(|q| d_choice(q, 4.0)).collect();
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        let report = compute(&percentages([100, 0, 0, 0]), &refs, &EngineConfig::default());
        assert_eq!(report.confidence, 100);
        assert_eq!(report.reliability, SignalReliability::Full);
        assert!((report.consistency - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_gap() {
        let choices: Vec<ChoiceRecord> = (1..=16).map(|q| d_choice(q, 4.0)).collect();
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        let config = EngineConfig::default();
        let mut previous = 0;
        for top in [50u8, 60, 70, 85, 100] {
            let report = compute(&percentages([top, 100 - top, 0, 0]), &refs, &config);
            assert!(
                report.confidence >= previous,
                "confidence must not decrease as the gap widens"
            );
            previous = report.confidence;
        }
    }

    #[test]
    fn test_small_sample_reports_reduced_reliability() {
        let choices: Vec<ChoiceRecord> = (1..=5).map(|q| d_choice(q, 4.0)).collect();
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        let config = EngineConfig::default();
        let report = compute(&percentages([100, 0, 0, 0]), &refs, &config);
        assert_eq!(report.reliability, SignalReliability::Reduced);
        assert!((report.consistency - config.neutral_consistency).abs() < 1e-9);
        // Reduced but still bounded and nonzero for a skewed signal.
        assert_eq!(report.confidence, 85);
    }

    #[test]
    fn test_empty_run_does_not_crash() {
        let report = compute(&percentages([25, 25, 25, 25]), &[], &EngineConfig::default());
        assert_eq!(report.confidence, 0);
        assert_eq!(report.reliability, SignalReliability::Reduced);
    }

    #[test]
    fn test_inconsistent_halves_lower_confidence() {
        // First half all D, second half all S: orthogonal halves.
        let mut choices: Vec<ChoiceRecord> = (1..=8).map(|q| d_choice(q, 4.0)).collect();
        for q in 9..=16 {
            choices.push(ChoiceRecord::new(
                q,
                "scene",
                "choice",
                WeightVector::from_pairs(&[(Disc::Steadiness, 4.0)]),
                WeightVector::<Riasec>::zero(),
            ));
        }
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        let report = compute(&percentages([60, 0, 40, 0]), &refs, &EngineConfig::default());
        assert!((report.consistency).abs() < 1e-9);

        let steady: Vec<ChoiceRecord> = (1..=16).map(|q| d_choice(q, 4.0)).collect();
        let steady_refs: Vec<&ChoiceRecord> = steady.iter().collect();
        let steady_report =
            compute(&percentages([60, 0, 40, 0]), &steady_refs, &EngineConfig::default());
        assert!(steady_report.confidence > report.confidence);
    }

    #[test]
    fn test_bounds_hold() {
        let choices: Vec<ChoiceRecord> = (1..=16).map(|q| d_choice(q, 4.0)).collect();
        let refs: Vec<&ChoiceRecord> = choices.iter().collect();
        for values in [[25u8, 25, 25, 25], [40, 30, 20, 10], [100, 0, 0, 0]] {
            let report = compute(&percentages(values), &refs, &EngineConfig::default());
            assert!(report.confidence <= 100);
        }
    }
}
