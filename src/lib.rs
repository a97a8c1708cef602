// ==========================================
// Siparis Converter - core library
// ==========================================
// Supplier order-balance matching engine: converts a vendor
// inventory sheet into the standardized layout, then enriches it
// with per-supplier order balances matched by product code.
// ==========================================

// ==========================================
// module declarations
// ==========================================

// domain layer - entities and closed type sets
pub mod domain;

// import layer - external tabular data
pub mod importer;

// engine layer - normalization, matching, aggregation
pub mod engine;

// export layer - rendered artifacts
pub mod exporter;

// configuration layer - job-scoped settings
pub mod config;

// error types
pub mod error;

// logging
pub mod logging;

// ==========================================
// core type re-exports
// ==========================================

// domain types
pub use domain::types::{Brand, Location, StockMovement};

// domain entities
pub use domain::{
    BrandOutcome, BrandStatus, CanonicalTable, ColumnKind, ColumnSpec, ConversionReport,
    LocationBalances, ParsedSupplierSheet, ProductRecord, SupplierRecord,
};

// engine
pub use engine::{
    adjusted_code, normalize_code, Aggregator, BrandRule, ColumnProjector, ConversionJob, Matcher,
};

// configuration
pub use config::{JobConfig, DEFAULT_FUZZY_THRESHOLD};

// export
pub use exporter::ExcelWriter;

// errors
pub use error::{ConvertError, ConvertResult};

// ==========================================
// constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Sipariş Dönüştürücü";
