//! Higher-order helpers over `HashMap`.
//!
//! Input maps are only borrowed. Iteration order of a hash map is unspecified,
//! so nothing here promises an order of callback invocation. Result maps are
//! built with a clone of the input map's hasher.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Build a new map by applying `transform` to every key-value pair.
///
/// When `transform` yields the same key for two different pairs, the pair
/// visited last wins. Because visiting order is unspecified, callers that need
/// a deterministic result must keep `transform` injective on keys.
pub fn map<K, V, S, K2, V2, F>(
    mapping: &HashMap<K, V, S>,
    mut transform: F,
) -> HashMap<K2, V2, S>
where
    K2: Eq + Hash,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> (K2, V2),
{
    let mut result = HashMap::with_capacity_and_hasher(mapping.len(), mapping.hasher().clone());
    result.extend(mapping.iter().map(|(k, v)| transform(k, v)));
    result
}

/// Return the pairs for which `predicate` holds. May be empty.
pub fn filter<K, V, S, F>(mapping: &HashMap<K, V, S>, mut predicate: F) -> HashMap<K, V, S>
where
    K: Eq + Hash + Clone,
    V: Clone,
    S: BuildHasher + Clone,
    F: FnMut(&K, &V) -> bool,
{
    let mut result = HashMap::with_hasher(mapping.hasher().clone());
    result.extend(
        mapping
            .iter()
            .filter(|&(k, v)| predicate(k, v))
            .map(|(k, v)| (k.clone(), v.clone())),
    );
    result
}

/// True if any pair satisfies `predicate`. Stops at the first match.
pub fn contains<K, V, S, F>(mapping: &HashMap<K, V, S>, mut predicate: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    mapping.iter().any(|(k, v)| predicate(k, v))
}
