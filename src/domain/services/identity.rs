//! Identity assignment
//!
//! Gives each machine or container a deterministic exported ID such that
//! - repeated references to one entity (same token) share an ID, and
//! - look-alike entities with different tokens get different IDs.
//!
//! Entities are grouped by structural key (every field but the token).
//! Within a group the distinct tokens are sorted; an entity's slot is the
//! position of its own token in that order, and its ID is
//! `hash(structural_key + slot)`. Tokens come from the build session, so the
//! result is reproducible from one run of a build to the next.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::domain::value_objects::{ObjectId, RefId};
use crate::error::StitchResult;

/// An entity that carries a reference-identity token.
pub trait Identified {
    fn ref_id(&self) -> RefId;

    /// Canonical serialization of every field except the token.
    fn structural_key(&self) -> StitchResult<String>;
}

impl<T: Identified + ?Sized> Identified for &T {
    fn ref_id(&self) -> RefId {
        (**self).ref_id()
    }

    fn structural_key(&self) -> StitchResult<String> {
        (**self).structural_key()
    }
}

/// Compute the exported ID of every entity, in input order.
///
/// The input may contain the same entity more than once. The structural key
/// is taken from the first occurrence of each token, so every occurrence of a
/// token lands in the same group and slot.
pub fn assign_ids<T: Identified>(entities: &[T]) -> StitchResult<Vec<ObjectId>> {
    let mut keys: BTreeMap<RefId, String> = BTreeMap::new();
    for entity in entities {
        if let Entry::Vacant(slot) = keys.entry(entity.ref_id()) {
            slot.insert(entity.structural_key()?);
        }
    }

    let mut groups: HashMap<&str, BTreeSet<RefId>> = HashMap::new();
    for (token, key) in &keys {
        groups.entry(key.as_str()).or_default().insert(*token);
    }

    let ids_by_token: BTreeMap<RefId, ObjectId> = keys
        .iter()
        .map(|(token, key)| {
            let slot = groups
                .get(key.as_str())
                .map_or(0, |tokens| tokens.range(..*token).count());
            (*token, ObjectId::digest(&format!("{}{}", key, slot)))
        })
        .collect();

    let ids = entities
        .iter()
        .filter_map(|entity| ids_by_token.get(&entity.ref_id()).cloned())
        .collect::<Vec<_>>();

    tracing::debug!(
        entities = entities.len(),
        tokens = keys.len(),
        groups = groups.len(),
        "assigned object ids"
    );
    Ok(ids)
}
