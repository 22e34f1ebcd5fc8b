//! Type matcher: normalized percentages to one catalog entry.

use workstyle_core::{Disc, Percentages, PersonalityType, Riasec, TypeCatalog};

/// Match normalized DISC and RIASEC distributions to a personality type.
///
/// DISC primary resolves exact ties by the fixed `D > I > S > C` priority,
/// RIASEC by `R > I > A > S > E > C` (both encoded in the dimension
/// declaration order). The pair lookup is total for a validated catalog;
/// the DISC-only fallback is the documented second tier. Returns a
/// reference into the catalog, never a copy.
pub fn match_type<'c>(
    catalog: &'c TypeCatalog,
    disc: &Percentages<Disc>,
    riasec: &Percentages<Riasec>,
) -> &'c PersonalityType {
    let disc_primary = disc.dominant();
    let riasec_primary = riasec.dominant();
    let matched = catalog.match_pair(disc_primary, riasec_primary);
    tracing::debug!(
        disc = ?disc_primary,
        riasec = ?riasec_primary,
        matched = %matched.id,
        "matched personality type"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percentages_disc(values: [u8; 4]) -> Percentages<Disc> {
        Percentages::new(values.to_vec()).unwrap()
    }

    fn percentages_riasec(values: [u8; 6]) -> Percentages<Riasec> {
        Percentages::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_clear_signal_matches_anchor_pair() {
        let catalog = TypeCatalog::builtin();
        let disc = percentages_disc([70, 10, 10, 10]);
        let riasec = percentages_riasec([0, 0, 0, 0, 100, 0]);
        let matched = match_type(&catalog, &disc, &riasec);
        assert_eq!(matched.id, "trailblazer");
    }

    #[test]
    fn test_flat_vector_is_deterministic() {
        let catalog = TypeCatalog::builtin();
        let disc = percentages_disc([25, 25, 25, 25]);
        let riasec = percentages_riasec([17, 17, 17, 17, 16, 16]);
        let first = match_type(&catalog, &disc, &riasec);
        for _ in 0..10 {
            let again = match_type(&catalog, &disc, &riasec);
            assert_eq!(first.id, again.id);
        }
        // D wins the DISC tie, R wins the RIASEC tie.
        assert_eq!(first.id, "vanguard");
    }

    #[test]
    fn test_every_pair_resolves() {
        let catalog = TypeCatalog::builtin();
        let disc_cases = [
            percentages_disc([100, 0, 0, 0]),
            percentages_disc([0, 100, 0, 0]),
            percentages_disc([0, 0, 100, 0]),
            percentages_disc([0, 0, 0, 100]),
        ];
        for disc in &disc_cases {
            for i in 0..6 {
                let mut values = [0u8; 6];
                values[i] = 100;
                let riasec = percentages_riasec(values);
                let matched = match_type(&catalog, disc, &riasec);
                assert!(!matched.id.is_empty());
            }
        }
    }
}
