//! Analysis engine: the pipeline orchestrator.
//!
//! An `AnalysisEngine` is an explicit, constructed value with all reference
//! tables (type catalog, calibration table, factor registry) supplied at
//! construction and validated there; there are no ambient globals, so the
//! engine is trivially testable with substitute reference data. Analysis is
//! a pure function of its input: no I/O, no mutation, and re-analyzing an
//! identical input list yields an identical result.

use serde::{Deserialize, Serialize};

use workstyle_core::{
    AnalysisResult, ChoiceRecord, EventChoiceRecord, InteractiveResult, TypeCatalog,
};

use crate::aggregate;
use crate::calibration::CalibrationTable;
use crate::confidence;
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::interactive::{FactorRegistry, InteractiveScorer};
use crate::matcher;
use crate::normalize::normalize;
use crate::projection;
use crate::related;

/// The static reference tables an engine is built from.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub catalog: TypeCatalog,
    pub calibration: CalibrationTable,
    pub factors: FactorRegistry,
}

impl ReferenceData {
    /// The reference data shipped with the quiz.
    pub fn builtin() -> Self {
        Self {
            catalog: TypeCatalog::builtin(),
            calibration: CalibrationTable::builtin(),
            factors: FactorRegistry::builtin(),
        }
    }

    /// Load and validate all three reference tables from their JSON
    /// representations.
    ///
    /// # Errors
    /// Fails when any table is malformed or fails integrity validation.
    pub fn from_json(
        catalog_json: &str,
        calibration_json: &str,
        factors_json: &str,
    ) -> EngineResult<Self> {
        Ok(Self {
            catalog: TypeCatalog::from_json(catalog_json)?,
            calibration: CalibrationTable::from_json(calibration_json)?,
            factors: FactorRegistry::from_json(factors_json)?,
        })
    }
}

/// Everything one analysis invocation consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Answered primary questions; later entries for the same question
    /// number replace earlier ones.
    pub choices: Vec<ChoiceRecord>,
    /// Interactive answers, already hinted at capture time.
    pub interactive: Vec<InteractiveResult>,
    /// Flavor-event picks.
    pub events: Vec<EventChoiceRecord>,
    /// Narrative branch the run traversed, if any.
    pub branch: Option<String>,
    /// RIASEC variant identifier; pass-through metadata, not a scoring
    /// input.
    pub variant: Option<String>,
}

/// The multi-framework scoring and type-matching engine.
#[derive(Debug, Clone)]
pub struct AnalysisEngine {
    catalog: TypeCatalog,
    calibration: CalibrationTable,
    factors: FactorRegistry,
    config: EngineConfig,
}

impl AnalysisEngine {
    /// Build an engine from reference data and configuration.
    ///
    /// # Errors
    /// Fails when the configuration is invalid. Reference tables validate
    /// at their own load sites; nothing fails mid-analysis.
    pub fn new(reference: ReferenceData, config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog: reference.catalog,
            calibration: reference.calibration,
            factors: reference.factors,
            config,
        })
    }

    /// Engine with built-in reference data and default configuration.
    pub fn with_defaults() -> Self {
        Self {
            catalog: TypeCatalog::builtin(),
            calibration: CalibrationTable::builtin(),
            factors: FactorRegistry::builtin(),
            config: EngineConfig::default(),
        }
    }

    /// A scorer for capturing interactive answers against this engine's
    /// factor registry.
    pub fn scorer(&self) -> InteractiveScorer {
        InteractiveScorer::new(
            self.factors.clone(),
            self.config.ranking_position_weights.clone(),
        )
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the full scoring pipeline.
    ///
    /// Never fails on respondent data: degenerate inputs (empty runs, flat
    /// signal) resolve through the documented fallbacks to a well-defined
    /// result with a matched type.
    pub fn analyze(&self, input: &AnalysisInput) -> AnalysisResult {
        let ordered = aggregate::dedup_by_question(&input.choices);

        let mut raw = aggregate::fold(
            &ordered,
            &input.interactive,
            &input.events,
            self.config.event_dampening,
        );
        self.calibration.get(input.branch.as_deref()).apply(&mut raw);

        let big_five = projection::project_big_five(&raw.disc, &raw.riasec);
        let career_anchors = projection::project_career_anchors(&raw.disc, &raw.riasec);

        let disc_percent = normalize(&raw.disc);
        let riasec_percent = normalize(&raw.riasec);
        let big_five_percent = normalize(&big_five);
        let career_anchor_percent = normalize(&career_anchors);

        let matched = matcher::match_type(&self.catalog, &disc_percent, &riasec_percent);
        let report = confidence::compute(&disc_percent, &ordered, &self.config);
        let related_types = related::resolve(&self.catalog, &matched.id).to_vec();

        AnalysisResult {
            disc_scores: raw.disc.rounded2(),
            disc_percent,
            riasec_scores: raw.riasec.rounded2(),
            riasec_percent,
            big_five_scores: big_five.rounded2(),
            big_five_percent,
            career_anchor_scores: career_anchors.rounded2(),
            career_anchor_percent,
            matched_type: matched.clone(),
            confidence: report.confidence,
            reliability: report.reliability,
            related_types,
            branch: input.branch.clone(),
            variant: input.variant.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workstyle_core::{Disc, Riasec, SignalReliability, WeightVector};

    fn d_choice(question: u8) -> ChoiceRecord {
        ChoiceRecord::new(
            question,
            "scene",
            "bold_choice",
            WeightVector::from_pairs(&[(Disc::Dominance, 4.0)]),
            WeightVector::from_pairs(&[(Riasec::Enterprising, 2.0)]),
        )
    }

    #[test]
    fn test_catalog_integrity_failure_surfaces_as_core_error() {
        // One type, no pair coverage: fails catalog validation, and the
        // failure propagates through the reference-data loader.
        let catalog_json = r#"{
            "types": [{
                "id": "trailblazer",
                "name": "Trailblazer",
                "summary": "Drives into unmapped territory.",
                "disc_primary": "D",
                "riasec_primary": "E"
            }],
            "pairs": [],
            "fallbacks": [],
            "relations": []
        }"#;
        let err = ReferenceData::from_json(catalog_json, "{}", "{}").unwrap_err();
        assert!(matches!(err, crate::error::EngineError::Core(_)));
        assert!(err.to_string().contains("unmapped combination"));
    }

    #[test]
    fn test_empty_tables_load() {
        // Calibration and factor tables may legitimately be empty; the
        // catalog may not.
        let calibration = CalibrationTable::from_json("{}").unwrap();
        assert!(calibration.is_empty());
        let factors = FactorRegistry::from_json("{}").unwrap();
        assert!(factors.is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = EngineConfig::default();
        config.event_dampening = 0.9;
        assert!(AnalysisEngine::new(ReferenceData::builtin(), config).is_err());
    }

    #[test]
    fn test_empty_input_resolves_to_defined_type() {
        let engine = AnalysisEngine::with_defaults();
        let result = engine.analyze(&AnalysisInput::default());
        assert_eq!(result.disc_percent.values(), &[25, 25, 25, 25]);
        assert_eq!(result.matched_type.id, "vanguard");
        assert_eq!(result.reliability, SignalReliability::Reduced);
    }

    #[test]
    fn test_revisited_question_counts_once() {
        let engine = AnalysisEngine::with_defaults();
        let mut input = AnalysisInput::default();
        input.choices = vec![d_choice(1), d_choice(1), d_choice(1)];
        let result = engine.analyze(&input);
        assert_eq!(result.disc_scores.get(Disc::Dominance), 4.0);
    }

    #[test]
    fn test_branch_metadata_passes_through() {
        let engine = AnalysisEngine::with_defaults();
        let mut input = AnalysisInput::default();
        input.branch = Some("founder".into());
        input.variant = Some("riasec_v2".into());
        let result = engine.analyze(&input);
        assert_eq!(result.branch.as_deref(), Some("founder"));
        assert_eq!(result.variant.as_deref(), Some("riasec_v2"));
    }

    #[test]
    fn test_branch_calibration_rescales_raw_sums() {
        let engine = AnalysisEngine::with_defaults();
        let mut input = AnalysisInput::default();
        input.choices = (1..=16).map(d_choice).collect();

        let uncalibrated = engine.analyze(&input);
        input.branch = Some("founder".into());
        let calibrated = engine.analyze(&input);

        assert!(
            calibrated.disc_scores.get(Disc::Dominance)
                < uncalibrated.disc_scores.get(Disc::Dominance)
        );
    }
}
