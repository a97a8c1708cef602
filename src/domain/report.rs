// ==========================================
// Siparis Converter - conversion report
// ==========================================
// Responsibility: per-job outcome summary handed back to the caller.
// Per-row failures are best-effort and only counted here; they never
// abort the job.
// ==========================================

use crate::domain::types::Brand;
use serde::{Deserialize, Serialize};

// ==========================================
// BrandStatus - outcome of one brand's pass
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandStatus {
    /// Sheet parsed and aggregated.
    Processed,
    /// Required source columns absent; brand skipped.
    MissingColumns,
    /// The file could not be read or parsed; brand skipped.
    LoadFailed,
    /// No canonical row's CAT4 contains a brand alias; brand skipped.
    NoCategoryRows,
}

// ==========================================
// BrandOutcome - per-brand statistics
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandOutcome {
    pub brand: Brand,
    pub status: BrandStatus,
    /// Human-readable detail for skipped brands.
    pub detail: Option<String>,
    /// Rows in the supplier sheet.
    pub source_rows: usize,
    /// (location, code) groups that found at least one canonical row.
    pub matched_groups: usize,
    /// Groups dropped because no match cleared the threshold.
    pub unmatched_groups: usize,
    /// Rows excluded by location classification.
    pub unclassified_rows: usize,
    /// Rows whose code field normalized to empty.
    pub empty_code_rows: usize,
    /// Quantity cells coerced to zero.
    pub coerced_quantities: usize,
}

impl BrandOutcome {
    pub fn new(brand: Brand, status: BrandStatus) -> Self {
        Self {
            brand,
            status,
            detail: None,
            source_rows: 0,
            matched_groups: 0,
            unmatched_groups: 0,
            unclassified_rows: 0,
            empty_code_rows: 0,
            coerced_quantities: 0,
        }
    }

    pub fn skipped(brand: Brand, status: BrandStatus, detail: impl Into<String>) -> Self {
        let mut outcome = Self::new(brand, status);
        outcome.detail = Some(detail.into());
        outcome
    }
}

// ==========================================
// ConversionReport - whole-job summary
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Job identifier (UUID v4).
    pub job_id: String,
    /// Rows in the canonical table.
    pub total_products: usize,
    /// One entry per aggregated supplier sheet, in processing order.
    pub brands: Vec<BrandOutcome>,
    pub elapsed_ms: i64,
}

impl ConversionReport {
    pub fn new(job_id: String, total_products: usize) -> Self {
        Self {
            job_id,
            total_products,
            brands: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// Serialize the report for logging or caller display.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
