// ==========================================
// Siparis Converter - domain layer
// ==========================================
// Entities and closed type sets; no behavior beyond accessors.
// ==========================================

pub mod product;
pub mod report;
pub mod schema;
pub mod supplier;
pub mod types;

pub use product::{CanonicalTable, LocationBalances, ProductRecord};
pub use report::{BrandOutcome, BrandStatus, ConversionReport};
pub use schema::{ColumnKind, ColumnSpec};
pub use supplier::{ParsedSupplierSheet, SupplierParseStats, SupplierRecord};
pub use types::{Brand, Location, StockMovement};
