//! Domain types for the workstyle scoring engine.

mod choice;
mod framework;
mod interactive;
mod result;
mod weights;

pub use choice::{ChoiceRecord, EventChoiceRecord, MAX_QUESTION_NUMBER};
pub use framework::{BigFive, CareerAnchor, Disc, Framework, Riasec};
pub use interactive::InteractiveResult;
pub use result::{AnalysisResult, SignalReliability};
pub use weights::{Percentages, WeightVector};
