// ==========================================
// Siparis Converter - canonical code matcher
// ==========================================
// Responsibility: resolve a normalized supplier code against the
// canonical table. Exact match on raw/adjusted join keys first; fuzzy
// fallback accepted only at or above the configured threshold.
// Read-only; the aggregator applies updates.
// ==========================================

use crate::domain::product::CanonicalTable;
use strsim::normalized_levenshtein;

pub struct Matcher {
    threshold: f64,
}

impl Matcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Find canonical rows for a normalized supplier code among the
    /// given candidate indices.
    ///
    /// Exact matches win outright and all of them are returned
    /// (duplicate codes in the canonical table legitimately update
    /// more than one row). Otherwise the single best fuzzy candidate
    /// is returned when its ratio clears the threshold; ties keep the
    /// first candidate in table order.
    pub fn find_matches(
        &self,
        normalized_code: &str,
        table: &CanonicalTable,
        candidates: &[usize],
    ) -> Vec<usize> {
        if normalized_code.is_empty() {
            return Vec::new();
        }

        let exact: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&idx| {
                let record = &table.records[idx];
                record.normalized_code == normalized_code
                    || record.normalized_adjusted == normalized_code
            })
            .collect();
        if !exact.is_empty() {
            return exact;
        }

        let mut best: Option<(usize, f64)> = None;
        for &idx in candidates {
            let record = &table.records[idx];
            let ratio = self
                .ratio(normalized_code, &record.normalized_code)
                .max(self.ratio(normalized_code, &record.normalized_adjusted));
            if ratio >= self.threshold && best.map_or(true, |(_, b)| ratio > b) {
                best = Some((idx, ratio));
            }
        }

        match best {
            Some((idx, _)) => vec![idx],
            None => Vec::new(),
        }
    }

    fn ratio(&self, a: &str, b: &str) -> f64 {
        if b.is_empty() {
            return 0.0;
        }
        normalized_levenshtein(a, b)
    }
}
