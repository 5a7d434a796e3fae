//! Overlap Resolution
//!
//! Deterministic replacement for "last applied tag wins" compositing.

use std::collections::BTreeMap;

use super::HighlightSpan;

/// Keep the highest-priority spans, dropping any span that overlaps one
/// already kept. Ties go to the earlier span. Output is sorted by start.
pub fn resolve_overlaps(mut candidates: Vec<HighlightSpan>) -> Vec<HighlightSpan> {
    // Priority first, then position
    candidates.sort_by(|a, b| {
        b.category
            .priority()
            .cmp(&a.category.priority())
            .then(a.start.cmp(&b.start))
    });

    // start -> span, all mutually disjoint
    let mut kept: BTreeMap<usize, HighlightSpan> = BTreeMap::new();

    for span in candidates {
        if span.is_empty() {
            continue;
        }

        // Kept spans are disjoint, so only the last one starting before
        // `span.end` can reach into it.
        let blocked = kept
            .range(..span.end)
            .next_back()
            .is_some_and(|(_, other)| other.end > span.start);

        if !blocked {
            kept.insert(span.start, span);
        }
    }

    kept.into_values().collect()
}
