//! Related-type resolver.
//!
//! A pure static-graph lookup: given a matched type id, return its
//! precomputed neighbors with their similarity notes. No computation, no
//! randomness; unknown ids resolve to an empty list.

use workstyle_core::{RelatedType, TypeCatalog};

/// Up to 3 neighboring types for a matched type id.
pub fn resolve<'c>(catalog: &'c TypeCatalog, type_id: &str) -> &'c [RelatedType] {
    let related = catalog.related(type_id);
    if related.is_empty() {
        tracing::debug!(type_id, "no related types registered");
    }
    related
}
