// ==========================================
// Siparis Converter - canonical product table
// ==========================================
// ProductRecord: one row of the standardized layout, created during
// projection, mutated only by the aggregator, dropped with the job.
// ==========================================

use crate::domain::schema::ColumnSpec;
use crate::domain::types::{Location, StockMovement};
use std::collections::BTreeMap;

// ==========================================
// LocationBalances - per-location accumulators
// ==========================================
// The five "Tedarikçi Bakiye" columns. Accumulating: repeated
// aggregation passes keep adding, they never overwrite.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationBalances {
    pub imes: f64,
    pub ankara: f64,
    pub bolu: f64,
    pub maslak: f64,
    pub ikitelli: f64,
}

impl LocationBalances {
    pub fn get(&self, location: Location) -> f64 {
        match location {
            Location::Imes => self.imes,
            Location::Ankara => self.ankara,
            Location::Bolu => self.bolu,
            Location::Maslak => self.maslak,
            Location::Ikitelli => self.ikitelli,
        }
    }

    pub fn add(&mut self, location: Location, quantity: f64) {
        let slot = match location {
            Location::Imes => &mut self.imes,
            Location::Ankara => &mut self.ankara,
            Location::Bolu => &mut self.bolu,
            Location::Maslak => &mut self.maslak,
            Location::Ikitelli => &mut self.ikitelli,
        };
        *slot += quantity;
    }

    /// Sum over the five locations, non-finite residue coerced to zero.
    pub fn sum(&self) -> f64 {
        Location::ALL
            .iter()
            .map(|loc| {
                let v = self.get(*loc);
                if v.is_finite() {
                    v
                } else {
                    0.0
                }
            })
            .sum()
    }
}

// ==========================================
// ProductRecord - one canonical row
// ==========================================
#[derive(Debug, Clone)]
pub struct ProductRecord {
    // ===== product codes =====
    pub raw_code: String,            // URUNKODU, immutable once projected
    pub adjusted_code: String,       // raw code minus the prefix before the first hyphen
    pub normalized_code: String,     // join key, derived once at projection
    pub normalized_adjusted: String, // join key on the adjusted code

    // ===== passthrough text fields =====
    pub description: String,       // ACIKLAMA
    pub manufacturer_code: String, // URETİCİKODU
    pub original_code: String,     // ORJİNAL
    pub old_code: String,          // ESKİKOD

    // ===== classification =====
    pub categories: [String; 7], // CAT1..CAT7; CAT4 carries the brand name

    // ===== depot stock movements =====
    // Mapped depot columns, values kept as loaded text; absent
    // combinations are filled with "0".
    pub depot_movements: BTreeMap<(Location, StockMovement), String>,

    // ===== balances =====
    pub location_balances: LocationBalances,
    pub total_balance: f64, // == location_balances.sum() at rest

    // ===== sales passthrough =====
    pub invoice_total: String,  // TOPL.FAT.ADT
    pub customer_count: String, // MÜŞT.SAY.
    pub sale_price: String,     // SATıŞ FIYATı
    pub currency: String,       // DÖVIZ CINSI (S)
}

impl ProductRecord {
    /// CAT4 value used for brand alias filtering.
    pub fn brand_category(&self) -> &str {
        &self.categories[3]
    }
}

// ==========================================
// CanonicalTable - projection output
// ==========================================
// Owns the final ordered column schema (duplicate headers are legal
// in the fixed layout) and the product rows. The only mutable shared
// structure of a job; aggregation over it is serialized.
#[derive(Debug, Clone)]
pub struct CanonicalTable {
    pub columns: Vec<ColumnSpec>,
    pub records: Vec<ProductRecord>,
}

impl CanonicalTable {
    /// Indices of rows whose CAT4 contains any of the given aliases
    /// (case-insensitive substring).
    pub fn brand_candidates(&self, aliases: &[&str]) -> Vec<usize> {
        let upper_aliases: Vec<String> = aliases.iter().map(|a| a.to_uppercase()).collect();
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| {
                let cat = r.brand_category().to_uppercase();
                upper_aliases.iter().any(|a| cat.contains(a.as_str()))
            })
            .map(|(i, _)| i)
            .collect()
    }

    /// Recompute every row's total as the sum of its five location
    /// balances. Run after each aggregation pass.
    pub fn recompute_totals(&mut self) {
        for record in &mut self.records {
            record.total_balance = record.location_balances.sum();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_cat4(cat4: &str) -> ProductRecord {
        ProductRecord {
            raw_code: String::new(),
            adjusted_code: String::new(),
            normalized_code: String::new(),
            normalized_adjusted: String::new(),
            description: String::new(),
            manufacturer_code: String::new(),
            original_code: String::new(),
            old_code: String::new(),
            categories: [
                String::new(),
                String::new(),
                String::new(),
                cat4.to_string(),
                String::new(),
                String::new(),
                String::new(),
            ],
            depot_movements: BTreeMap::new(),
            location_balances: LocationBalances::default(),
            total_balance: 0.0,
            invoice_total: String::new(),
            customer_count: String::new(),
            sale_price: String::new(),
            currency: String::new(),
        }
    }

    #[test]
    fn balances_accumulate_and_sum() {
        let mut balances = LocationBalances::default();
        balances.add(Location::Imes, 10.0);
        balances.add(Location::Imes, 5.0);
        balances.add(Location::Bolu, 2.5);
        assert_eq!(balances.get(Location::Imes), 15.0);
        assert_eq!(balances.sum(), 17.5);
    }

    #[test]
    fn sum_coerces_non_finite_to_zero() {
        let balances = LocationBalances {
            imes: f64::NAN,
            ankara: 3.0,
            ..Default::default()
        };
        assert_eq!(balances.sum(), 3.0);
    }

    #[test]
    fn brand_candidates_filter_is_case_insensitive() {
        let table = CanonicalTable {
            columns: Vec::new(),
            records: vec![
                record_with_cat4("SCHAEFFLER LUK"),
                record_with_cat4("Trw Otomotiv"),
                record_with_cat4("VALEO"),
            ],
        };
        assert_eq!(table.brand_candidates(&["TRW", "SACHS"]), vec![1]);
        assert_eq!(table.brand_candidates(&["schaeffler luk"]), vec![0]);
        assert!(table.brand_candidates(&["DELPHI"]).is_empty());
    }

    #[test]
    fn recompute_totals_matches_balance_sum() {
        let mut record = record_with_cat4("VALEO");
        record.location_balances.add(Location::Maslak, 7.0);
        record.location_balances.add(Location::Ankara, 3.0);
        let mut table = CanonicalTable {
            columns: Vec::new(),
            records: vec![record],
        };
        table.recompute_totals();
        assert_eq!(table.records[0].total_balance, 10.0);
    }
}
