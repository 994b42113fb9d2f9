//! List operations over the raw argument strings.

use std::collections::HashSet;

/// Ascending byte order, which for UTF-8 is code point order.
pub fn sort(elements: &[String]) -> Vec<String> {
    let mut sorted = elements.to_vec();
    sorted.sort();
    sorted
}

/// Drop repeats, keeping each element at its first position.
pub fn unique(elements: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    elements
        .iter()
        .filter(|e| seen.insert(e.as_str()))
        .cloned()
        .collect()
}
