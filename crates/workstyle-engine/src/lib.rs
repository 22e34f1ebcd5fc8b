//! Workstyle Scoring Engine
//!
//! Converts an ordered list of weighted story choices (plus interactive
//! ranking/slider answers and incidental flavor-event picks) into normalized
//! scores across four psychometric frameworks (DISC, RIASEC, Big Five,
//! Career Anchors), matches the dominant signal to one of sixteen workstyle
//! types, derives a confidence measure, and resolves nearby types.
//!
//! # Pipeline
//!
//! ```text
//! ChoiceRecords + InteractiveResults + EventChoiceRecords
//!     -> aggregate (with branch calibration)
//!     -> four raw weight vectors
//!     -> normalize (largest-remainder percentages)
//!     -> matcher -> confidence + related types
//!     -> AnalysisResult
//! ```
//!
//! The whole pipeline is a synchronous, side-effect-free computation over
//! immutable inputs: re-analyzing an identical input list always yields an
//! identical [`workstyle_core::AnalysisResult`].
//!
//! # Example
//!
//! ```
//! use workstyle_engine::{AnalysisEngine, AnalysisInput};
//!
//! let engine = AnalysisEngine::with_defaults();
//! let result = engine.analyze(&AnalysisInput::default());
//!
//! // Even an empty run resolves to a defined type via uniform fallback.
//! assert_eq!(result.disc_percent.values(), &[25, 25, 25, 25]);
//! assert_eq!(result.confidence, 0);
//! ```

pub mod aggregate;
pub mod calibration;
pub mod confidence;
pub mod config;
pub mod engine;
pub mod error;
pub mod interactive;
pub mod matcher;
pub mod normalize;
pub mod projection;
pub mod related;

// Re-exports for convenience
pub use calibration::{BranchCalibration, CalibrationTable};
pub use config::EngineConfig;
pub use engine::{AnalysisEngine, AnalysisInput, ReferenceData};
pub use error::{EngineError, EngineResult};
pub use interactive::{
    FactorRegistry, InteractiveScorer, OptionFactors, QuestionFactors, RecordedInteraction,
};
