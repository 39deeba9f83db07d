//! Language breakdown aggregation
//!
//! The hosting service reports languages as an ordered name → byte-count
//! mapping, by its own convention largest first. The breakdown keeps the
//! first four entries in source order and folds the tail into a synthetic
//! `"Others"` bucket, while the running total always covers the full,
//! untruncated input.

use serde::{Deserialize, Serialize};

/// Maximum number of entries shown individually before the tail is folded
const DISPLAY_LIMIT: usize = 4;

/// Name of the synthetic bucket aggregating the truncated tail
pub const OTHERS_LABEL: &str = "Others";

/// One language and its byte count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageEntry {
    pub name: String,
    pub bytes: u64,
}

impl LanguageEntry {
    pub fn new(name: impl Into<String>, bytes: u64) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Bounded, display-ready ranked breakdown of a repository's languages
///
/// Invariants: at most five entries; entries 1..4 are the first input entries
/// in source order; a trailing `"Others"` entry, when present, aggregates the
/// rest. `total_bytes` is the sum over the full input regardless of
/// truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageBreakdown {
    pub entries: Vec<LanguageEntry>,
    pub total_bytes: u64,
}

impl LanguageBreakdown {
    /// Reduce an ordered language mapping into a bounded breakdown.
    ///
    /// The input's iteration order is preserved, not re-sorted locally. With
    /// more than four entries the tail is folded as a literal slice in source
    /// order, never a smallest-k selection, so a non-descending upstream
    /// ordering can make `"Others"` dwarf the kept entries.
    pub fn aggregate<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, u64)>,
    {
        let mut entries: Vec<LanguageEntry> = pairs
            .into_iter()
            .map(|(name, bytes)| LanguageEntry { name, bytes })
            .collect();
        let total_bytes = entries.iter().map(|entry| entry.bytes).sum();

        if entries.len() > DISPLAY_LIMIT {
            let others = entries
                .split_off(DISPLAY_LIMIT)
                .iter()
                .map(|entry| entry.bytes)
                .sum();
            entries.push(LanguageEntry::new(OTHERS_LABEL, others));
        }

        Self {
            entries,
            total_bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, u64)]) -> Vec<(String, u64)> {
        raw.iter().map(|(n, b)| (n.to_string(), *b)).collect()
    }

    #[test]
    fn five_entries_fold_the_fifth_into_others() {
        let breakdown = LanguageBreakdown::aggregate(pairs(&[
            ("TS", 50),
            ("HTML", 30),
            ("CSS", 10),
            ("SCSS", 5),
            ("JS", 5),
        ]));

        assert_eq!(
            breakdown.entries,
            vec![
                LanguageEntry::new("TS", 50),
                LanguageEntry::new("HTML", 30),
                LanguageEntry::new("CSS", 10),
                LanguageEntry::new("SCSS", 5),
                LanguageEntry::new("Others", 5),
            ]
        );
        assert_eq!(breakdown.total_bytes, 100);
    }

    #[test]
    fn short_input_is_unchanged() {
        let breakdown = LanguageBreakdown::aggregate(pairs(&[("Go", 80), ("Shell", 20)]));

        assert_eq!(
            breakdown.entries,
            vec![LanguageEntry::new("Go", 80), LanguageEntry::new("Shell", 20)]
        );
        assert_eq!(breakdown.total_bytes, 100);
    }

    #[test]
    fn empty_input_yields_empty_breakdown() {
        let breakdown = LanguageBreakdown::aggregate(Vec::new());
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total_bytes, 0);
    }

    #[test]
    fn long_tail_is_folded_in_source_order() {
        let breakdown = LanguageBreakdown::aggregate(pairs(&[
            ("A", 10),
            ("B", 9),
            ("C", 8),
            ("D", 7),
            ("E", 3),
            ("F", 2),
            ("G", 1),
        ]));

        assert_eq!(breakdown.len(), 5);
        assert_eq!(breakdown.entries[4], LanguageEntry::new("Others", 6));
        assert_eq!(breakdown.total_bytes, 40);
    }

    #[test]
    fn non_descending_order_is_preserved_not_resorted() {
        // Upstream order is trusted even when it is not descending
        let breakdown = LanguageBreakdown::aggregate(pairs(&[
            ("A", 1),
            ("B", 2),
            ("C", 3),
            ("D", 4),
            ("E", 90),
        ]));

        assert_eq!(breakdown.entries[0], LanguageEntry::new("A", 1));
        assert_eq!(breakdown.entries[4], LanguageEntry::new("Others", 90));
        assert_eq!(breakdown.total_bytes, 100);
    }

    #[test]
    fn exactly_four_entries_have_no_others_bucket() {
        let breakdown =
            LanguageBreakdown::aggregate(pairs(&[("A", 4), ("B", 3), ("C", 2), ("D", 1)]));
        assert_eq!(breakdown.len(), 4);
        assert!(breakdown.entries.iter().all(|e| e.name != OTHERS_LABEL));
    }
}
