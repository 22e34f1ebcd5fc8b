//! Branch calibration table.
//!
//! Narrative branches systematically over-represent certain dimensions: a
//! founder storyline keeps offering assertive choices, a studio storyline
//! keeps offering artistic ones. Each named branch registers a
//! per-dimension multiplicative and additive correction that is applied to
//! the raw DISC/RIASEC sums after aggregation, before normalization.
//! Branches without a registered entry use the identity correction.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use workstyle_core::{Disc, Riasec, WeightVector};

use crate::aggregate::RawScores;
use crate::error::{EngineError, EngineResult};

/// Per-dimension correction for one narrative branch.
///
/// Applied as `raw = raw * scale + offset`, element-wise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BranchCalibration {
    pub disc_scale: WeightVector<Disc>,
    pub disc_offset: WeightVector<Disc>,
    pub riasec_scale: WeightVector<Riasec>,
    pub riasec_offset: WeightVector<Riasec>,
}

impl BranchCalibration {
    /// The no-op correction used for unregistered branches.
    pub fn identity() -> Self {
        Self {
            disc_scale: WeightVector::splat(1.0),
            disc_offset: WeightVector::zero(),
            riasec_scale: WeightVector::splat(1.0),
            riasec_offset: WeightVector::zero(),
        }
    }

    /// Apply the correction to raw sums in place.
    pub fn apply(&self, raw: &mut RawScores) {
        raw.disc.rescale(&self.disc_scale, &self.disc_offset);
        raw.riasec.rescale(&self.riasec_scale, &self.riasec_offset);
    }

    fn validate(&self, branch: &str) -> EngineResult<()> {
        let scales = self
            .disc_scale
            .values()
            .iter()
            .chain(self.riasec_scale.values());
        for &scale in scales {
            if !scale.is_finite() || scale < 0.0 {
                return Err(EngineError::ReferenceError(format!(
                    "branch '{branch}' has invalid scale {scale}"
                )));
            }
        }
        let offsets = self
            .disc_offset
            .values()
            .iter()
            .chain(self.riasec_offset.values());
        for &offset in offsets {
            if !offset.is_finite() {
                return Err(EngineError::ReferenceError(format!(
                    "branch '{branch}' has non-finite offset"
                )));
            }
        }
        Ok(())
    }
}

impl Default for BranchCalibration {
    fn default() -> Self {
        Self::identity()
    }
}

/// Static lookup from branch identifier to its correction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalibrationTable {
    branches: HashMap<String, BranchCalibration>,
    #[serde(skip)]
    identity: BranchCalibration,
}

impl CalibrationTable {
    /// Build a table from registered branch corrections.
    ///
    /// # Errors
    /// Fails when any correction carries a negative or non-finite scale or a
    /// non-finite offset. Load-time only.
    pub fn new(branches: HashMap<String, BranchCalibration>) -> EngineResult<Self> {
        for (branch, calibration) in &branches {
            calibration.validate(branch)?;
        }
        Ok(Self {
            branches,
            identity: BranchCalibration::identity(),
        })
    }

    /// An empty table: every branch resolves to the identity correction.
    pub fn empty() -> Self {
        Self {
            branches: HashMap::new(),
            identity: BranchCalibration::identity(),
        }
    }

    /// The built-in corrections for the shipped storylines.
    ///
    /// # Panics
    /// Panics if the built-in data fails validation, which is a
    /// programming-time defect covered by tests.
    pub fn builtin() -> Self {
        let mut branches = HashMap::new();

        // Founder storyline structurally over-offers assertive and
        // entrepreneurial choices.
        let mut founder = BranchCalibration::identity();
        founder.disc_scale.set(Disc::Dominance, 0.85);
        founder.riasec_scale.set(Riasec::Enterprising, 0.85);
        branches.insert("founder".to_string(), founder);

        // Studio storyline over-offers expressive, artistic choices.
        let mut studio = BranchCalibration::identity();
        studio.disc_scale.set(Disc::Influence, 0.9);
        studio.riasec_scale.set(Riasec::Artistic, 0.85);
        branches.insert("studio".to_string(), studio);

        // Corporate storyline over-offers procedural choices.
        let mut corporate = BranchCalibration::identity();
        corporate.disc_scale.set(Disc::Conscientiousness, 0.9);
        corporate.riasec_scale.set(Riasec::Conventional, 0.85);
        branches.insert("corporate".to_string(), corporate);

        // Fieldwork storyline over-offers hands-on choices.
        let mut fieldwork = BranchCalibration::identity();
        fieldwork.riasec_scale.set(Riasec::Realistic, 0.85);
        branches.insert("fieldwork".to_string(), fieldwork);

        Self::new(branches).expect("built-in calibration table must validate")
    }

    /// Correction for a branch; unknown or absent branches get the identity.
    pub fn get(&self, branch: Option<&str>) -> &BranchCalibration {
        match branch {
            Some(name) => self.branches.get(name).unwrap_or_else(|| {
                tracing::debug!(branch = name, "no calibration registered, using identity");
                &self.identity
            }),
            None => &self.identity,
        }
    }

    /// Load and validate a table from its JSON representation.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let branches: HashMap<String, BranchCalibration> = serde_json::from_str(json)?;
        Self::new(branches)
    }

    pub fn len(&self) -> usize {
        self.branches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.branches.is_empty()
    }
}
