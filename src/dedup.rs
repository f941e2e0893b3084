//! Order-preserving, case-insensitive deduplication of candidate text.

use crate::normalize::normalize;
use std::collections::HashSet;

/// Normalize, deduplicate and truncate a sequence of candidate strings.
///
/// Each candidate is whitespace-normalized; empty results are dropped, as are
/// candidates whose lowercased form was already seen. The casing of the first
/// occurrence is the one kept. Processing stops as soon as `max_items`
/// headlines have been collected, so later candidates are never inspected.
///
/// ```rust
/// use headline_scraper::clean_and_dedupe;
///
/// let out = clean_and_dedupe(["B", "A", "b", "  ", "C"], 10);
/// assert_eq!(out, vec!["B", "A", "C"]);
/// ```
pub fn clean_and_dedupe<I, S>(candidates: I, max_items: usize) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned = Vec::new();
    if max_items == 0 {
        return cleaned;
    }

    let mut seen = HashSet::new();
    for raw in candidates {
        let text = normalize(raw.as_ref());
        if text.is_empty() {
            continue;
        }

        if !seen.insert(text.to_lowercase()) {
            continue;
        }

        cleaned.push(text);
        if cleaned.len() >= max_items {
            break;
        }
    }

    cleaned
}
