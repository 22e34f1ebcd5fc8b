//! Dimension aggregator.
//!
//! Folds every choice record, interactive hint, and flavor-event record of a
//! run into raw per-framework sums. Pure function of its inputs; branch
//! calibration is applied to the output by the engine before normalization.

use std::collections::BTreeMap;

use workstyle_core::{
    ChoiceRecord, Disc, EventChoiceRecord, InteractiveResult, Riasec, WeightVector,
    MAX_QUESTION_NUMBER,
};

/// Raw (pre-normalization) DISC and RIASEC sums.
#[derive(Debug, Clone, PartialEq)]
pub struct RawScores {
    pub disc: WeightVector<Disc>,
    pub riasec: WeightVector<Riasec>,
}

impl RawScores {
    pub fn zero() -> Self {
        Self {
            disc: WeightVector::zero(),
            riasec: WeightVector::zero(),
        }
    }
}

impl Default for RawScores {
    fn default() -> Self {
        Self::zero()
    }
}

/// Keep one record per question number, later answers replacing earlier
/// ones, ordered by question number.
///
/// The narrative engine emits a fresh record when the respondent revisits a
/// question; only the latest answer per slot counts.
pub fn dedup_by_question(choices: &[ChoiceRecord]) -> Vec<&ChoiceRecord> {
    let mut by_question: BTreeMap<u8, &ChoiceRecord> = BTreeMap::new();
    for record in choices {
        if record.question_number == 0 || record.question_number > MAX_QUESTION_NUMBER {
            tracing::warn!(
                question = record.question_number,
                choice = %record.choice_id,
                "question number out of range, skipping record"
            );
            continue;
        }
        by_question.insert(record.question_number, record);
    }
    by_question.into_values().collect()
}

/// Fold deduplicated choices, interactive hints, and dampened flavor events
/// into raw sums.
///
/// Choice records and interactive hints contribute at full magnitude (the
/// hints are already position/value-weighted at capture); event records are
/// scaled by `event_dampening` so flavor picks cannot override deliberate
/// answers.
pub fn fold(
    choices: &[&ChoiceRecord],
    interactive: &[InteractiveResult],
    events: &[EventChoiceRecord],
    event_dampening: f64,
) -> RawScores {
    let mut raw = RawScores::zero();

    for record in choices {
        raw.disc.add_scaled(&record.weights, 1.0);
        raw.riasec.add_scaled(&record.riasec_weights, 1.0);
    }

    for result in interactive {
        raw.disc.add_scaled(result.disc_hints(), 1.0);
        raw.riasec.add_scaled(result.riasec_hints(), 1.0);
    }

    for event in events {
        raw.disc.add_scaled(&event.weights, event_dampening);
        raw.riasec.add_scaled(&event.riasec_weights, event_dampening);
    }

    tracing::debug!(
        choices = choices.len(),
        interactive = interactive.len(),
        events = events.len(),
        disc_sum = raw.disc.sum(),
        riasec_sum = raw.riasec.sum(),
        "aggregated raw sums"
    );
    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(question: u8, choice_id: &str, d: f64, e: f64) -> ChoiceRecord {
        ChoiceRecord::new(
            question,
            "scene",
            choice_id,
            WeightVector::from_pairs(&[(Disc::Dominance, d)]),
            WeightVector::from_pairs(&[(Riasec::Enterprising, e)]),
        )
    }

    #[test]
    fn test_dedup_keeps_latest_answer() {
        let records = vec![
            choice(1, "first_answer", 4.0, 2.0),
            choice(2, "other", 1.0, 1.0),
            choice(1, "revised_answer", 0.5, 0.5),
        ];
        let deduped = dedup_by_question(&records);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].choice_id, "revised_answer");
        assert_eq!(deduped[1].choice_id, "other");
    }

    #[test]
    fn test_dedup_skips_out_of_range_questions() {
        let records = vec![choice(0, "too_low", 4.0, 2.0), choice(17, "too_high", 4.0, 2.0)];
        assert!(dedup_by_question(&records).is_empty());
    }

    #[test]
    fn test_fold_sums_choices() {
        let records = vec![choice(1, "a", 4.0, 2.0), choice(2, "b", 3.0, 1.0)];
        let deduped = dedup_by_question(&records);
        let raw = fold(&deduped, &[], &[], 0.15);
        assert_eq!(raw.disc.get(Disc::Dominance), 7.0);
        assert_eq!(raw.riasec.get(Riasec::Enterprising), 3.0);
    }

    #[test]
    fn test_fold_applies_event_dampening() {
        let event = EventChoiceRecord {
            event_id: "tavern_toast".into(),
            choice_id: "join_in".into(),
            weights: WeightVector::from_pairs(&[(Disc::Influence, 2.0)]),
            riasec_weights: WeightVector::from_pairs(&[(Riasec::Social, 2.0)]),
        };
        let raw = fold(&[], &[], &[event], 0.15);
        assert!((raw.disc.get(Disc::Influence) - 0.3).abs() < 1e-9);
        assert!((raw.riasec.get(Riasec::Social) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_fold_adds_hints_at_full_magnitude() {
        let hint = InteractiveResult::Slider {
            question_id: "q13_risk_dial".into(),
            value: 100.0,
            disc_hints: WeightVector::from_pairs(&[(Disc::Dominance, 2.0)]),
            riasec_hints: WeightVector::from_pairs(&[(Riasec::Enterprising, 1.5)]),
        };
        let raw = fold(&[], &[hint], &[], 0.15);
        assert_eq!(raw.disc.get(Disc::Dominance), 2.0);
        assert_eq!(raw.riasec.get(Riasec::Enterprising), 1.5);
    }

    #[test]
    fn test_fold_empty_is_zero() {
        let raw = fold(&[], &[], &[], 0.15);
        assert!(raw.disc.is_zero());
        assert!(raw.riasec.is_zero());
    }
}
