//! Test-only fixtures shared by unit and integration tests.

use std::collections::HashMap;

/// Group-by key splitting integers into even and odd.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parity {
    Even,
    Odd,
}

/// Classify an integer by parity. Works for negative values too.
pub fn parity(value: &i64) -> Parity {
    if value.rem_euclid(2) == 0 {
        Parity::Even
    } else {
        Parity::Odd
    }
}

/// The sequence `[1, 2, 3, 4, 5, 6]`.
pub fn sample_sequence() -> Vec<i64> {
    (1..=6).collect()
}

/// A small name -> score mapping with deterministic contents.
pub fn sample_scores() -> HashMap<String, u32> {
    [("ada", 92), ("brian", 61), ("grace", 78), ("linus", 45)]
        .into_iter()
        .map(|(name, score)| (name.to_string(), score))
        .collect()
}
