// ==========================================
// Siparis Converter - supplier sheet records
// ==========================================
// Intermediate products of one matching pass; constructed per
// supplier sheet load, consumed by the aggregator, then discarded.
// ==========================================

use crate::domain::types::{Brand, Location};
use serde::{Deserialize, Serialize};

// ==========================================
// SupplierRecord - one parsed supplier row
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// Brand parser output run through the code normalizer; join key
    /// against the canonical table.
    pub normalized_code: String,
    /// Classified warehouse location. Rows classifying to none of the
    /// five ("Diğer") never become a SupplierRecord.
    pub location: Location,
    /// Quantity to accumulate; unparseable source values arrive here
    /// already coerced to zero.
    pub quantity: f64,
}

// ==========================================
// SupplierParseStats - per-sheet parse outcome
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SupplierParseStats {
    /// Rows in the source sheet.
    pub source_rows: usize,
    /// Rows excluded because the location text matched no pattern.
    pub unclassified_rows: usize,
    /// Rows skipped because the code field normalized to empty.
    pub empty_code_rows: usize,
    /// Quantity cells that failed numeric parsing and were coerced to 0.
    pub coerced_quantities: usize,
}

// ==========================================
// ParsedSupplierSheet - parse result for one brand file
// ==========================================
#[derive(Debug, Clone)]
pub struct ParsedSupplierSheet {
    pub brand: Brand,
    pub records: Vec<SupplierRecord>,
    pub stats: SupplierParseStats,
}
