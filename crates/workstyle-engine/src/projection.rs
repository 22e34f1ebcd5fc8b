//! Big Five and career-anchor projection.
//!
//! Choice records carry DISC and RIASEC weights only. The Big Five and
//! career-anchor raw sums are derived from the calibrated DISC/RIASEC sums
//! through fixed linear projections, one row per target dimension. The
//! Neuroticism row is a stress-sensitivity proxy (urgency plus
//! perfectionism plus need for structure); the quiz has no direct
//! negative-affect signal.

use workstyle_core::{BigFive, CareerAnchor, Disc, Framework, Riasec, WeightVector};

/// One projection row: source weights over the 4 DISC and 6 RIASEC
/// dimensions, in declaration order.
struct ProjectionRow {
    disc: [f64; 4],
    riasec: [f64; 6],
}

impl ProjectionRow {
    fn apply(&self, disc: &WeightVector<Disc>, riasec: &WeightVector<Riasec>) -> f64 {
        let mut total = 0.0;
        for (dim, value) in disc.iter() {
            total += value * self.disc[dim.index()];
        }
        for (dim, value) in riasec.iter() {
            total += value * self.riasec[dim.index()];
        }
        total
    }
}

// Source order: DISC [D, I, S, C]; RIASEC [R, I, A, S, E, C].
const BIG_FIVE_ROWS: [ProjectionRow; 5] = [
    // Openness: artistic and investigative interest, a little social verve.
    ProjectionRow {
        disc: [0.0, 0.2, 0.0, 0.0],
        riasec: [0.0, 0.3, 0.5, 0.0, 0.0, 0.0],
    },
    // Conscientiousness: DISC C plus conventional interest.
    ProjectionRow {
        disc: [0.0, 0.0, 0.0, 0.6],
        riasec: [0.0, 0.0, 0.0, 0.0, 0.0, 0.4],
    },
    // Extraversion: influence, enterprise, a little dominance.
    ProjectionRow {
        disc: [0.15, 0.6, 0.0, 0.0],
        riasec: [0.0, 0.0, 0.0, 0.0, 0.25, 0.0],
    },
    // Agreeableness: steadiness plus social interest.
    ProjectionRow {
        disc: [0.0, 0.0, 0.6, 0.0],
        riasec: [0.0, 0.0, 0.0, 0.4, 0.0, 0.0],
    },
    // Neuroticism proxy: urgency, perfectionism, need for structure.
    ProjectionRow {
        disc: [0.3, 0.0, 0.0, 0.4],
        riasec: [0.0, 0.0, 0.0, 0.0, 0.0, 0.3],
    },
];

const CAREER_ANCHOR_ROWS: [ProjectionRow; 8] = [
    // Technical/functional competence.
    ProjectionRow {
        disc: [0.0, 0.0, 0.0, 0.0],
        riasec: [0.5, 0.5, 0.0, 0.0, 0.0, 0.0],
    },
    // General managerial competence.
    ProjectionRow {
        disc: [0.6, 0.0, 0.0, 0.0],
        riasec: [0.0, 0.0, 0.0, 0.0, 0.4, 0.0],
    },
    // Autonomy/independence.
    ProjectionRow {
        disc: [0.4, 0.0, 0.0, 0.0],
        riasec: [0.0, 0.2, 0.4, 0.0, 0.0, 0.0],
    },
    // Security/stability.
    ProjectionRow {
        disc: [0.0, 0.0, 0.6, 0.0],
        riasec: [0.0, 0.0, 0.0, 0.0, 0.0, 0.4],
    },
    // Entrepreneurial creativity.
    ProjectionRow {
        disc: [0.2, 0.0, 0.0, 0.0],
        riasec: [0.0, 0.0, 0.3, 0.0, 0.5, 0.0],
    },
    // Service/dedication to a cause.
    ProjectionRow {
        disc: [0.0, 0.0, 0.4, 0.0],
        riasec: [0.0, 0.0, 0.0, 0.6, 0.0, 0.0],
    },
    // Pure challenge.
    ProjectionRow {
        disc: [0.5, 0.0, 0.0, 0.0],
        riasec: [0.2, 0.3, 0.0, 0.0, 0.0, 0.0],
    },
    // Lifestyle integration.
    ProjectionRow {
        disc: [0.0, 0.0, 0.4, 0.0],
        riasec: [0.0, 0.0, 0.3, 0.3, 0.0, 0.0],
    },
];

/// Project calibrated DISC/RIASEC sums onto the Big Five.
pub fn project_big_five(
    disc: &WeightVector<Disc>,
    riasec: &WeightVector<Riasec>,
) -> WeightVector<BigFive> {
    let mut out = WeightVector::<BigFive>::zero();
    for (dim, row) in BigFive::DIMENSIONS.iter().zip(BIG_FIVE_ROWS.iter()) {
        out.set(*dim, row.apply(disc, riasec));
    }
    out
}

/// Project calibrated DISC/RIASEC sums onto the career anchors.
pub fn project_career_anchors(
    disc: &WeightVector<Disc>,
    riasec: &WeightVector<Riasec>,
) -> WeightVector<CareerAnchor> {
    let mut out = WeightVector::<CareerAnchor>::zero();
    for (dim, row) in CareerAnchor::DIMENSIONS.iter().zip(CAREER_ANCHOR_ROWS.iter()) {
        out.set(*dim, row.apply(disc, riasec));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_input_projects_to_zero() {
        let big_five = project_big_five(&WeightVector::zero(), &WeightVector::zero());
        assert!(big_five.is_zero());
        let anchors = project_career_anchors(&WeightVector::zero(), &WeightVector::zero());
        assert!(anchors.is_zero());
    }

    #[test]
    fn test_dominance_feeds_managerial_and_challenge() {
        let disc = WeightVector::from_pairs(&[(Disc::Dominance, 10.0)]);
        let anchors = project_career_anchors(&disc, &WeightVector::zero());
        assert!(anchors.get(CareerAnchor::GeneralManagerial) > 0.0);
        assert!(anchors.get(CareerAnchor::PureChallenge) > 0.0);
        assert_eq!(anchors.get(CareerAnchor::ServiceDedication), 0.0);
    }

    #[test]
    fn test_influence_feeds_extraversion() {
        let disc = WeightVector::from_pairs(&[(Disc::Influence, 10.0)]);
        let big_five = project_big_five(&disc, &WeightVector::zero());
        assert_eq!(big_five.get(BigFive::Extraversion), 6.0);
        assert_eq!(big_five.get(BigFive::Agreeableness), 0.0);
    }

    #[test]
    fn test_projection_is_linear() {
        let disc = WeightVector::from_pairs(&[(Disc::Steadiness, 5.0)]);
        let riasec = WeightVector::from_pairs(&[(Riasec::Social, 5.0)]);
        let single = project_big_five(&disc, &riasec);

        let mut doubled_disc = disc.clone();
        doubled_disc.add_scaled(&disc, 1.0);
        let mut doubled_riasec = riasec.clone();
        doubled_riasec.add_scaled(&riasec, 1.0);
        let doubled = project_big_five(&doubled_disc, &doubled_riasec);

        for (dim, value) in single.iter() {
            assert!((doubled.get(dim) - 2.0 * value).abs() < 1e-9);
        }
    }
}
