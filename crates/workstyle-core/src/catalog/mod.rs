//! Personality-type catalog and similarity graph.
//!
//! The catalog is static reference data: sixteen personality types, a pair
//! map covering every (DISC primary, RIASEC primary) combination, a
//! DISC-only fallback map, and a similarity graph of up to three neighbors
//! per type. All of it is validated once at load; lookups afterwards are
//! infallible, so a mid-analysis catalog failure cannot happen.

mod data;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::{Disc, Framework, Riasec};

/// A catalog entry describing one discrete personality type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalityType {
    /// Stable identifier, e.g. `"trailblazer"`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// One-sentence description for the result surface.
    pub summary: String,
    /// The DISC primary this type is anchored on.
    pub disc_primary: Disc,
    /// The RIASEC primary this type is anchored on.
    pub riasec_primary: Riasec,
}

/// One neighbor in the similarity graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedType {
    pub type_id: String,
    /// Short similarity/difference note for the result surface.
    pub note: String,
}

/// A (DISC primary, RIASEC primary) -> type mapping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairEntry {
    pub disc: Disc,
    pub riasec: Riasec,
    pub type_id: String,
}

/// A DISC-primary-only fallback mapping entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackEntry {
    pub disc: Disc,
    pub type_id: String,
}

/// Similarity-graph edges for one type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeRelation {
    pub type_id: String,
    pub related: Vec<RelatedType>,
}

/// Raw, serializable catalog content as loaded from JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogData {
    pub types: Vec<PersonalityType>,
    pub pairs: Vec<PairEntry>,
    pub fallbacks: Vec<FallbackEntry>,
    pub relations: Vec<TypeRelation>,
}

/// Maximum neighbors a type may carry in the similarity graph.
pub const MAX_RELATED_TYPES: usize = 3;

/// Validated, immutable type catalog.
#[derive(Debug, Clone)]
pub struct TypeCatalog {
    types: Vec<PersonalityType>,
    by_id: HashMap<String, usize>,
    pair_map: HashMap<(Disc, Riasec), usize>,
    disc_fallback: [usize; 4],
    relations: HashMap<String, Vec<RelatedType>>,
}

impl TypeCatalog {
    /// Validate raw catalog data and build the lookup structures.
    ///
    /// # Errors
    /// Fails when ids are duplicated or dangling, when the pair map does not
    /// cover every (DISC, RIASEC) combination, when any DISC fallback is
    /// missing, or when a type carries more than [`MAX_RELATED_TYPES`]
    /// neighbors. These are data-integrity defects, surfaced at load time
    /// only.
    pub fn new(data: CatalogData) -> CoreResult<Self> {
        let mut by_id = HashMap::with_capacity(data.types.len());
        for (idx, ptype) in data.types.iter().enumerate() {
            if by_id.insert(ptype.id.clone(), idx).is_some() {
                return Err(CoreError::DuplicateType {
                    id: ptype.id.clone(),
                });
            }
        }

        let mut pair_map = HashMap::with_capacity(data.pairs.len());
        for entry in &data.pairs {
            let idx = *by_id
                .get(&entry.type_id)
                .ok_or_else(|| CoreError::UnknownType {
                    id: entry.type_id.clone(),
                })?;
            if pair_map.insert((entry.disc, entry.riasec), idx).is_some() {
                return Err(CoreError::ValidationError {
                    field: "pairs".into(),
                    message: format!(
                        "duplicate pair mapping ({}, {})",
                        entry.disc.label(),
                        entry.riasec.label()
                    ),
                });
            }
        }
        for &disc in Disc::DIMENSIONS {
            for &riasec in Riasec::DIMENSIONS {
                if !pair_map.contains_key(&(disc, riasec)) {
                    return Err(CoreError::ValidationError {
                        field: "pairs".into(),
                        message: format!(
                            "unmapped combination ({}, {})",
                            disc.label(),
                            riasec.label()
                        ),
                    });
                }
            }
        }

        let mut disc_fallback = [usize::MAX; 4];
        for entry in &data.fallbacks {
            let idx = *by_id
                .get(&entry.type_id)
                .ok_or_else(|| CoreError::UnknownType {
                    id: entry.type_id.clone(),
                })?;
            disc_fallback[entry.disc.index()] = idx;
        }
        for &disc in Disc::DIMENSIONS {
            if disc_fallback[disc.index()] == usize::MAX {
                return Err(CoreError::ValidationError {
                    field: "fallbacks".into(),
                    message: format!("missing DISC fallback for '{}'", disc.label()),
                });
            }
        }

        let mut relations = HashMap::with_capacity(data.relations.len());
        for relation in data.relations {
            if !by_id.contains_key(&relation.type_id) {
                return Err(CoreError::UnknownType {
                    id: relation.type_id,
                });
            }
            if relation.related.len() > MAX_RELATED_TYPES {
                return Err(CoreError::ValidationError {
                    field: "relations".into(),
                    message: format!(
                        "type '{}' has {} neighbors, maximum is {}",
                        relation.type_id,
                        relation.related.len(),
                        MAX_RELATED_TYPES
                    ),
                });
            }
            for neighbor in &relation.related {
                if !by_id.contains_key(&neighbor.type_id) {
                    return Err(CoreError::UnknownType {
                        id: neighbor.type_id.clone(),
                    });
                }
            }
            if relations
                .insert(relation.type_id.clone(), relation.related)
                .is_some()
            {
                return Err(CoreError::ValidationError {
                    field: "relations".into(),
                    message: format!("duplicate relation entry for '{}'", relation.type_id),
                });
            }
        }

        Ok(Self {
            types: data.types,
            by_id,
            pair_map,
            disc_fallback,
            relations,
        })
    }

    /// Load and validate a catalog from its JSON representation.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::new(data)
    }

    /// The built-in sixteen-type catalog shipped with the quiz.
    ///
    /// # Panics
    /// Panics if the built-in data fails validation, which is a
    /// programming-time defect covered by tests.
    pub fn builtin() -> Self {
        Self::new(data::builtin_data()).expect("built-in catalog must validate")
    }

    /// Look up a type by id.
    pub fn get(&self, id: &str) -> Option<&PersonalityType> {
        self.by_id.get(id).map(|&idx| &self.types[idx])
    }

    /// Resolve a (DISC primary, RIASEC primary) pair to its type.
    ///
    /// Pair coverage is validated at load, so the pair map always answers;
    /// the DISC-only fallback backs a catalog edited to drop a pair entry
    /// while keeping validation relaxed in a future revision.
    pub fn match_pair(&self, disc: Disc, riasec: Riasec) -> &PersonalityType {
        match self.pair_map.get(&(disc, riasec)) {
            Some(&idx) => &self.types[idx],
            None => {
                tracing::warn!(
                    disc = disc.label(),
                    riasec = riasec.label(),
                    "pair lookup missed, using DISC-only fallback"
                );
                &self.types[self.disc_fallback[disc.index()]]
            }
        }
    }

    /// Neighbors of a type in the similarity graph.
    ///
    /// Unknown ids return an empty slice rather than an error.
    pub fn related(&self, type_id: &str) -> &[RelatedType] {
        self.relations
            .get(type_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterate all catalog entries.
    pub fn iter(&self) -> impl Iterator<Item = &PersonalityType> {
        self.types.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_validates() {
        let catalog = TypeCatalog::builtin();
        assert_eq!(catalog.len(), 16);
    }

    #[test]
    fn test_builtin_covers_every_pair() {
        let catalog = TypeCatalog::builtin();
        for &disc in Disc::DIMENSIONS {
            for &riasec in Riasec::DIMENSIONS {
                let matched = catalog.match_pair(disc, riasec);
                assert!(catalog.get(&matched.id).is_some());
            }
        }
    }

    #[test]
    fn test_pair_type_anchors_agree() {
        // Every type's own (disc_primary, riasec_primary) pair resolves to
        // itself.
        let catalog = TypeCatalog::builtin();
        for ptype in catalog.iter() {
            let matched = catalog.match_pair(ptype.disc_primary, ptype.riasec_primary);
            assert_eq!(matched.id, ptype.id, "anchor pair must map to the type");
        }
    }

    #[test]
    fn test_related_unknown_id_is_empty() {
        let catalog = TypeCatalog::builtin();
        assert!(catalog.related("no_such_type").is_empty());
    }

    #[test]
    fn test_related_bounded() {
        let catalog = TypeCatalog::builtin();
        for ptype in catalog.iter() {
            assert!(catalog.related(&ptype.id).len() <= MAX_RELATED_TYPES);
        }
    }

    #[test]
    fn test_duplicate_type_rejected() {
        let mut data = super::data::builtin_data();
        let dup = data.types[0].clone();
        data.types.push(dup);
        assert!(matches!(
            TypeCatalog::new(data),
            Err(CoreError::DuplicateType { .. })
        ));
    }

    #[test]
    fn test_missing_pair_rejected() {
        let mut data = super::data::builtin_data();
        data.pairs.pop();
        let err = TypeCatalog::new(data).unwrap_err();
        assert!(err.to_string().contains("unmapped combination"));
    }

    #[test]
    fn test_missing_fallback_rejected() {
        let mut data = super::data::builtin_data();
        data.fallbacks.retain(|f| f.disc != Disc::Steadiness);
        let err = TypeCatalog::new(data).unwrap_err();
        assert!(err.to_string().contains("missing DISC fallback"));
    }

    #[test]
    fn test_dangling_relation_rejected() {
        let mut data = super::data::builtin_data();
        data.relations.push(TypeRelation {
            type_id: "trailblazer".into(),
            related: vec![RelatedType {
                type_id: "ghost".into(),
                note: "does not exist".into(),
            }],
        });
        // "trailblazer" already has a relation entry, so either the
        // duplicate or the dangling id must be rejected.
        assert!(TypeCatalog::new(data).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let data = super::data::builtin_data();
        let json = serde_json::to_string(&data).unwrap();
        let catalog = TypeCatalog::from_json(&json).unwrap();
        assert_eq!(catalog.len(), 16);
    }
}
