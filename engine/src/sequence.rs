//! Integer sequence transforms used by the demo run.

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

/// `0², 1², …, (count-1)²`, saturating at `i64::MAX`.
#[must_use]
pub fn squares(count: usize) -> Vec<i64> {
    (0..count as i64).map(|i| i.saturating_mul(i)).collect()
}

/// Keep the even values and double each one, saturating at the `i64` bounds.
#[must_use]
pub fn double_evens(values: &[i64]) -> Vec<i64> {
    values
        .iter()
        .filter(|n| *n % 2 == 0)
        .map(|n| n.saturating_mul(2))
        .collect()
}

/// Split into the head element and the remainder. An empty slice has no head.
#[must_use]
pub fn split_head(values: &[i64]) -> (Option<i64>, &[i64]) {
    match values.split_first() {
        Some((first, rest)) => (Some(*first), rest),
        None => (None, values),
    }
}

/// Deduplicate, keeping first-seen order.
#[must_use]
pub fn unique(values: &[i64]) -> IndexSet<i64> {
    values.iter().copied().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Squared {
    pub squared: i64,
}

/// Map each member to its square, iterating in the set's order.
///
/// Squares past `i64::MAX` saturate rather than overflow.
#[must_use]
pub fn squares_by_member(members: &IndexSet<i64>) -> IndexMap<i64, Squared> {
    members
        .iter()
        .map(|&v| {
            (
                v,
                Squared {
                    squared: v.saturating_mul(v),
                },
            )
        })
        .collect()
}
