// ==========================================
// Siparis Converter - balance aggregator
// ==========================================
// Responsibility: fold parsed supplier records into the canonical
// table's per-location balances. Accumulating by contract: repeated
// passes and overlapping brand files keep adding.
// Runs strictly single-threaded over the table.
// ==========================================

use crate::domain::product::CanonicalTable;
use crate::domain::report::{BrandOutcome, BrandStatus};
use crate::domain::supplier::ParsedSupplierSheet;
use crate::domain::types::Location;
use crate::engine::brand_rules::BrandRule;
use crate::engine::matcher::Matcher;
use std::collections::BTreeMap;
use tracing::{debug, info};

pub struct Aggregator {
    matcher: Matcher,
}

impl Aggregator {
    pub fn new(fuzzy_threshold: f64) -> Self {
        Self {
            matcher: Matcher::new(fuzzy_threshold),
        }
    }

    /// Aggregate one brand's parsed sheet into the table.
    ///
    /// Returns the per-brand outcome. Totals are not touched here;
    /// call [`finalize`](Self::finalize) after the last brand.
    pub fn aggregate_brand(
        &self,
        rule: &BrandRule,
        sheet: &ParsedSupplierSheet,
        table: &mut CanonicalTable,
    ) -> BrandOutcome {
        let mut outcome = BrandOutcome::new(sheet.brand, BrandStatus::Processed);
        outcome.source_rows = sheet.stats.source_rows;
        outcome.unclassified_rows = sheet.stats.unclassified_rows;
        outcome.empty_code_rows = sheet.stats.empty_code_rows;
        outcome.coerced_quantities = sheet.stats.coerced_quantities;

        let candidates = table.brand_candidates(rule.category_aliases);
        if candidates.is_empty() {
            outcome.status = BrandStatus::NoCategoryRows;
            outcome.detail = Some(format!(
                "no canonical row's CAT4 contains any of {:?}",
                rule.category_aliases
            ));
            return outcome;
        }

        // supplier-side dedup: group by (location, code), summing
        let mut groups: BTreeMap<(Location, &str), f64> = BTreeMap::new();
        for record in &sheet.records {
            *groups
                .entry((record.location, record.normalized_code.as_str()))
                .or_insert(0.0) += record.quantity;
        }

        for ((location, code), quantity) in groups {
            let matches = self.matcher.find_matches(code, table, &candidates);
            if matches.is_empty() {
                debug!(brand = %sheet.brand, code, "no canonical match, group dropped");
                outcome.unmatched_groups += 1;
                continue;
            }

            outcome.matched_groups += 1;
            for idx in matches {
                table.records[idx].location_balances.add(location, quantity);
            }
        }

        info!(
            brand = %sheet.brand,
            matched = outcome.matched_groups,
            unmatched = outcome.unmatched_groups,
            "brand aggregation done"
        );
        outcome
    }

    /// Recompute every row's total balance. Run once after all brand
    /// passes of an aggregation run.
    pub fn finalize(&self, table: &mut CanonicalTable) {
        table.recompute_totals();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_FUZZY_THRESHOLD;
    use crate::domain::supplier::{SupplierParseStats, SupplierRecord};
    use crate::domain::types::Brand;
    use crate::engine::projector::ColumnProjector;
    use crate::importer::file_parser::RawRow;

    fn primary_rows() -> Vec<RawRow> {
        let mut row1 = RawRow::new();
        row1.insert("URUNKODU".to_string(), "D01-ABC123".to_string());
        row1.insert("CAT4".to_string(), "SCHAEFFLER LUK".to_string());
        let mut row2 = RawRow::new();
        row2.insert("URUNKODU".to_string(), "VAL-900".to_string());
        row2.insert("CAT4".to_string(), "VALEO".to_string());
        vec![row1, row2]
    }

    fn sheet(brand: Brand, records: Vec<SupplierRecord>) -> ParsedSupplierSheet {
        let stats = SupplierParseStats {
            source_rows: records.len(),
            ..Default::default()
        };
        ParsedSupplierSheet {
            brand,
            records,
            stats,
        }
    }

    fn supplier(code: &str, location: Location, quantity: f64) -> SupplierRecord {
        SupplierRecord {
            normalized_code: code.to_string(),
            location,
            quantity,
        }
    }

    #[test]
    fn groups_are_summed_before_matching() {
        let mut table = ColumnProjector::new(7).project(&primary_rows()).expect("project");
        let aggregator = Aggregator::new(DEFAULT_FUZZY_THRESHOLD);
        let rule = BrandRule::for_brand(Brand::Schaeffler);

        let parsed = sheet(
            Brand::Schaeffler,
            vec![
                supplier("ABC123", Location::Imes, 4.0),
                supplier("ABC123", Location::Imes, 6.0),
                supplier("ABC123", Location::Bolu, 1.0),
            ],
        );

        let outcome = aggregator.aggregate_brand(rule, &parsed, &mut table);
        aggregator.finalize(&mut table);

        assert_eq!(outcome.status, BrandStatus::Processed);
        assert_eq!(outcome.matched_groups, 2);
        let record = &table.records[0];
        assert_eq!(record.location_balances.get(Location::Imes), 10.0);
        assert_eq!(record.location_balances.get(Location::Bolu), 1.0);
        assert_eq!(record.total_balance, 11.0);
    }

    #[test]
    fn aggregation_is_additive_across_runs() {
        let mut table = ColumnProjector::new(7).project(&primary_rows()).expect("project");
        let aggregator = Aggregator::new(DEFAULT_FUZZY_THRESHOLD);
        let rule = BrandRule::for_brand(Brand::Schaeffler);
        let parsed = sheet(
            Brand::Schaeffler,
            vec![supplier("ABC123", Location::Imes, 10.0)],
        );

        aggregator.aggregate_brand(rule, &parsed, &mut table);
        aggregator.aggregate_brand(rule, &parsed, &mut table);
        aggregator.finalize(&mut table);

        assert_eq!(table.records[0].location_balances.get(Location::Imes), 20.0);
        assert_eq!(table.records[0].total_balance, 20.0);
    }

    #[test]
    fn brand_filter_keeps_other_brands_rows_untouched() {
        let mut table = ColumnProjector::new(7).project(&primary_rows()).expect("project");
        let aggregator = Aggregator::new(DEFAULT_FUZZY_THRESHOLD);
        let rule = BrandRule::for_brand(Brand::Valeo);

        // code would exact-match the Schaeffler row, but that row's
        // CAT4 is not a Valeo alias
        let parsed = sheet(
            Brand::Valeo,
            vec![supplier("ABC123", Location::Imes, 5.0)],
        );
        let outcome = aggregator.aggregate_brand(rule, &parsed, &mut table);

        assert_eq!(outcome.unmatched_groups, 1);
        assert_eq!(table.records[0].location_balances.get(Location::Imes), 0.0);
    }

    #[test]
    fn missing_aliases_skip_brand_entirely() {
        let mut table = ColumnProjector::new(7).project(&primary_rows()).expect("project");
        let aggregator = Aggregator::new(DEFAULT_FUZZY_THRESHOLD);
        let rule = BrandRule::for_brand(Brand::Delphi);

        let parsed = sheet(
            Brand::Delphi,
            vec![supplier("ABC123", Location::Imes, 5.0)],
        );
        let outcome = aggregator.aggregate_brand(rule, &parsed, &mut table);

        assert_eq!(outcome.status, BrandStatus::NoCategoryRows);
        assert_eq!(table.records[0].location_balances.get(Location::Imes), 0.0);
    }

    #[test]
    fn unmatched_group_quantity_is_dropped() {
        let mut table = ColumnProjector::new(7).project(&primary_rows()).expect("project");
        let aggregator = Aggregator::new(DEFAULT_FUZZY_THRESHOLD);
        let rule = BrandRule::for_brand(Brand::Schaeffler);

        let parsed = sheet(
            Brand::Schaeffler,
            vec![supplier("TOTALLYDIFFERENT", Location::Imes, 42.0)],
        );
        let outcome = aggregator.aggregate_brand(rule, &parsed, &mut table);
        aggregator.finalize(&mut table);

        assert_eq!(outcome.unmatched_groups, 1);
        for record in &table.records {
            assert_eq!(record.location_balances.sum(), 0.0);
            assert_eq!(record.total_balance, 0.0);
        }
    }
}
