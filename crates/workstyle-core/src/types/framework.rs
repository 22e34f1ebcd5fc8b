//! Psychometric framework dimension enums.
//!
//! Each framework is a fixed, exhaustive set of dimensions. The declaration
//! order of `DIMENSIONS` doubles as the tie-break priority order used when
//! two dimensions carry an identical score (DISC resolves `D > I > S > C`,
//! RIASEC resolves `R > I > A > S > E > C`).

use serde::{Deserialize, Serialize};

/// A psychometric framework with a fixed dimension set.
///
/// Implementors expose their dimensions in tie-break priority order, a
/// stable short label per dimension (used as the serialization key), and a
/// reverse lookup from label to dimension.
pub trait Framework:
    Copy + Eq + std::hash::Hash + std::fmt::Debug + Send + Sync + 'static
{
    /// Framework name for log and error messages.
    const NAME: &'static str;

    /// All dimensions, in tie-break priority order.
    const DIMENSIONS: &'static [Self];

    /// Stable index of this dimension within `DIMENSIONS`.
    fn index(self) -> usize;

    /// Short label used as the serialization key.
    fn label(self) -> &'static str;

    /// Reverse lookup from label. Unknown labels return `None`.
    fn from_label(label: &str) -> Option<Self>;

    /// Number of dimensions in the framework.
    fn count() -> usize {
        Self::DIMENSIONS.len()
    }
}

/// DISC behavioral-style dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disc {
    #[serde(rename = "D")]
    Dominance,
    #[serde(rename = "I")]
    Influence,
    #[serde(rename = "S")]
    Steadiness,
    #[serde(rename = "C")]
    Conscientiousness,
}

impl Framework for Disc {
    const NAME: &'static str = "DISC";
    const DIMENSIONS: &'static [Self] = &[
        Self::Dominance,
        Self::Influence,
        Self::Steadiness,
        Self::Conscientiousness,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dominance => "D",
            Self::Influence => "I",
            Self::Steadiness => "S",
            Self::Conscientiousness => "C",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "D" => Some(Self::Dominance),
            "I" => Some(Self::Influence),
            "S" => Some(Self::Steadiness),
            "C" => Some(Self::Conscientiousness),
            _ => None,
        }
    }
}

/// RIASEC (Holland code) occupational-interest dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Riasec {
    #[serde(rename = "R")]
    Realistic,
    #[serde(rename = "I")]
    Investigative,
    #[serde(rename = "A")]
    Artistic,
    #[serde(rename = "S")]
    Social,
    #[serde(rename = "E")]
    Enterprising,
    #[serde(rename = "C")]
    Conventional,
}

impl Framework for Riasec {
    const NAME: &'static str = "RIASEC";
    const DIMENSIONS: &'static [Self] = &[
        Self::Realistic,
        Self::Investigative,
        Self::Artistic,
        Self::Social,
        Self::Enterprising,
        Self::Conventional,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Realistic => "R",
            Self::Investigative => "I",
            Self::Artistic => "A",
            Self::Social => "S",
            Self::Enterprising => "E",
            Self::Conventional => "C",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "R" => Some(Self::Realistic),
            "I" => Some(Self::Investigative),
            "A" => Some(Self::Artistic),
            "S" => Some(Self::Social),
            "E" => Some(Self::Enterprising),
            "C" => Some(Self::Conventional),
            _ => None,
        }
    }
}

/// Big Five (OCEAN) personality-trait dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BigFive {
    #[serde(rename = "O")]
    Openness,
    #[serde(rename = "C")]
    Conscientiousness,
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "A")]
    Agreeableness,
    #[serde(rename = "N")]
    Neuroticism,
}

impl Framework for BigFive {
    const NAME: &'static str = "BigFive";
    const DIMENSIONS: &'static [Self] = &[
        Self::Openness,
        Self::Conscientiousness,
        Self::Extraversion,
        Self::Agreeableness,
        Self::Neuroticism,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::Openness => "O",
            Self::Conscientiousness => "C",
            Self::Extraversion => "E",
            Self::Agreeableness => "A",
            Self::Neuroticism => "N",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "O" => Some(Self::Openness),
            "C" => Some(Self::Conscientiousness),
            "E" => Some(Self::Extraversion),
            "A" => Some(Self::Agreeableness),
            "N" => Some(Self::Neuroticism),
            _ => None,
        }
    }
}

/// Schein career-anchor categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerAnchor {
    TechnicalFunctional,
    GeneralManagerial,
    Autonomy,
    SecurityStability,
    EntrepreneurialCreativity,
    ServiceDedication,
    PureChallenge,
    Lifestyle,
}

impl Framework for CareerAnchor {
    const NAME: &'static str = "CareerAnchors";
    const DIMENSIONS: &'static [Self] = &[
        Self::TechnicalFunctional,
        Self::GeneralManagerial,
        Self::Autonomy,
        Self::SecurityStability,
        Self::EntrepreneurialCreativity,
        Self::ServiceDedication,
        Self::PureChallenge,
        Self::Lifestyle,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn label(self) -> &'static str {
        match self {
            Self::TechnicalFunctional => "technical_functional",
            Self::GeneralManagerial => "general_managerial",
            Self::Autonomy => "autonomy",
            Self::SecurityStability => "security_stability",
            Self::EntrepreneurialCreativity => "entrepreneurial_creativity",
            Self::ServiceDedication => "service_dedication",
            Self::PureChallenge => "pure_challenge",
            Self::Lifestyle => "lifestyle",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::DIMENSIONS
            .iter()
            .copied()
            .find(|dim| dim.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disc_priority_order() {
        let labels: Vec<&str> = Disc::DIMENSIONS.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["D", "I", "S", "C"]);
    }

    #[test]
    fn test_riasec_priority_order() {
        let labels: Vec<&str> = Riasec::DIMENSIONS.iter().map(|d| d.label()).collect();
        assert_eq!(labels, vec!["R", "I", "A", "S", "E", "C"]);
    }

    #[test]
    fn test_label_round_trip() {
        for &dim in Disc::DIMENSIONS {
            assert_eq!(Disc::from_label(dim.label()), Some(dim));
        }
        for &dim in CareerAnchor::DIMENSIONS {
            assert_eq!(CareerAnchor::from_label(dim.label()), Some(dim));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(Disc::from_label("X"), None);
        assert_eq!(Riasec::from_label("disc"), None);
    }

    #[test]
    fn test_dimension_counts() {
        assert_eq!(Disc::count(), 4);
        assert_eq!(Riasec::count(), 6);
        assert_eq!(BigFive::count(), 5);
        assert_eq!(CareerAnchor::count(), 8);
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, &dim) in Riasec::DIMENSIONS.iter().enumerate() {
            assert_eq!(dim.index(), i);
        }
    }
}
