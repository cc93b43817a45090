//! Utility functions for common operations.

use std::collections::HashSet;
use std::hash::Hash;

/// Remove repeated values, keeping the first occurrence of each in order
pub fn dedup_preserving_order<T>(items: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}

/// Collapse runs of whitespace (including newlines) into single spaces
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
