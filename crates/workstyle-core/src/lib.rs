//! Workstyle Core Library
//!
//! Provides the domain types and static reference data for the workstyle
//! narrative-quiz scoring system.
//!
//! # Architecture
//!
//! This crate defines:
//! - Framework dimension enums (`Disc`, `Riasec`, `BigFive`, `CareerAnchor`)
//! - Weight and percentage vectors (`WeightVector`, `Percentages`)
//! - Respondent input records (`ChoiceRecord`, `EventChoiceRecord`,
//!   `InteractiveResult`)
//! - The personality-type catalog and similarity graph (`TypeCatalog`)
//! - The engine output value object (`AnalysisResult`)
//! - Error types and result aliases
//!
//! All reference data is immutable after load; every collection validates
//! its own integrity (key exhaustiveness, id uniqueness) at construction.
//!
//! # Example
//!
//! ```
//! use workstyle_core::types::{Disc, WeightVector};
//!
//! let mut weights = WeightVector::<Disc>::zero();
//! weights.set(Disc::Dominance, 4.0);
//! assert_eq!(weights.get(Disc::Dominance), 4.0);
//! assert_eq!(weights.sum(), 4.0);
//! ```

pub mod catalog;
pub mod error;
pub mod types;

// Re-exports for convenience
pub use catalog::{PersonalityType, RelatedType, TypeCatalog};
pub use error::{CoreError, CoreResult};
pub use types::{
    AnalysisResult, BigFive, CareerAnchor, ChoiceRecord, Disc, EventChoiceRecord, Framework,
    InteractiveResult, Percentages, Riasec, SignalReliability, WeightVector, MAX_QUESTION_NUMBER,
};
