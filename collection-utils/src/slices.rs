//! Higher-order helpers over slices.
//!
//! All helpers preserve input order. [`group_by`] returns a `HashMap`, so the
//! order of the groups themselves is unspecified, but each group keeps the
//! relative order its elements had in the input.

use std::collections::HashMap;
use std::hash::Hash;

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// Apply `transform` to every element. `output[i] == transform(&input[i])`.
pub fn map<T, U, F>(sequence: &[T], transform: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    sequence.iter().map(transform).collect()
}

/// Return, in input order, the elements for which `predicate` holds.
pub fn filter<T, F>(sequence: &[T], mut predicate: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T) -> bool,
{
    sequence
        .iter()
        .filter(|&item| predicate(item))
        .cloned()
        .collect()
}

/// True if any element satisfies `predicate`. Elements after the first match
/// are not visited.
pub fn contains<T, F>(sequence: &[T], predicate: F) -> bool
where
    F: FnMut(&T) -> bool,
{
    sequence.iter().any(predicate)
}

/// Combine two equal-length slices index by index.
///
/// Returns exactly `left.len()` values, `combine(&left[i], &right[i])` for each
/// `i`. If the lengths differ, fails with [`Error::LengthMismatch`] before
/// `combine` is ever called.
pub fn merge<A, B, C, F>(left: &[A], right: &[B], mut combine: F) -> Result<Vec<C>>
where
    F: FnMut(&A, &B) -> C,
{
    if left.len() != right.len() {
        debug!(
            left = left.len(),
            right = right.len(),
            "merge rejected: length mismatch"
        );
        return Err(Error::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }

    Ok(left
        .iter()
        .zip(right)
        .map(|(a, b)| combine(a, b))
        .collect())
}

/// Partition `sequence` by the key `key_of` derives for each element.
///
/// `key_of` is called once per element. Only keys produced by some element
/// appear in the result; an empty slice yields an empty map.
pub fn group_by<T, K, F>(sequence: &[T], mut key_of: F) -> HashMap<K, Vec<T>>
where
    T: Clone,
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let mut groups: HashMap<K, Vec<T>> = HashMap::new();
    for item in sequence {
        groups.entry(key_of(item)).or_default().push(item.clone());
    }

    trace!(
        elements = sequence.len(),
        groups = groups.len(),
        "grouped sequence"
    );
    groups
}
