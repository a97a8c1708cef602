// ==========================================
// Siparis Converter - output column schema
// ==========================================
// Responsibility: header names and column kinds of the standardized
// layout. The projector assembles the final ordered schema; the
// exporter renders it cell by cell.
// ==========================================

use crate::domain::types::{Location, StockMovement};
use serde::{Deserialize, Serialize};

// ===== primary sheet source headers =====
pub const COL_RAW_CODE: &str = "URUNKODU";
pub const COL_DESCRIPTION: &str = "ACIKLAMA";
pub const COL_MANUFACTURER_CODE: &str = "URETİCİKODU";
pub const COL_ORIGINAL_CODE: &str = "ORJİNAL";
pub const COL_OLD_CODE: &str = "ESKİKOD";
pub const COL_INVOICE_TOTAL: &str = "TOPL.FAT.ADT";
pub const COL_CUSTOMER_COUNT: &str = "MÜŞT.SAY.";
pub const COL_SALE_PRICE: &str = "SATıŞ FIYATı";
pub const COL_CURRENCY: &str = "DÖVIZ CINSI (S)";

// ===== derived output headers =====
pub const COL_ADJUSTED_CODE: &str = "Düzenlenmiş Ürün Kodu";
pub const COL_RAW_CODE_COPY: &str = "URUNKODU_3";
pub const COL_TOTAL_BALANCE: &str = "Toplam Depo Bakiye";

/// Depot prefix -> location mapping, in application order.
///
/// TD-E01- and E01- both feed İKİTELLİ; when both are present the
/// later prefix in this order wins.
pub const DEPOT_PREFIXES: [(&str, Location); 6] = [
    ("02-", Location::Maslak),
    ("D01-", Location::Imes),
    ("TD-E01-", Location::Ikitelli),
    ("E01-", Location::Ikitelli),
    ("04-", Location::Bolu),
    ("A01-", Location::Ankara),
];

/// Fixed placeholder headers appended after the depot block, value 0.
pub const PLACEHOLDER_TAIL: [&str; 9] = [
    "Kampanya Tipi",
    "not",
    "İSK",
    "PRİM",
    "BÜTÇE",
    "liste",
    "TD SF",
    "Toplam İsk",
    "Net Fiyat Kampanyası",
];

/// Turkish month names, January first.
pub const MONTH_NAMES_TR: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Names of the two calendar months following the run month.
///
/// December wraps to January: run month 12 yields (Ocak, Şubat).
pub fn upcoming_month_names(run_month: u32) -> (&'static str, &'static str) {
    let m = run_month as usize;
    (MONTH_NAMES_TR[m % 12], MONTH_NAMES_TR[(m + 1) % 12])
}

/// Balance column header for a location ("İmes Tedarikçi Bakiye").
pub fn supplier_balance_header(location: Location) -> String {
    format!("{} Tedarikçi Bakiye", location.display_name())
}

/// Warehouse balance placeholder header ("İmes Depo Bakiye").
pub fn depot_balance_header(location: Location) -> String {
    format!("{} Depo Bakiye", location.display_name())
}

/// Order quantity placeholder header ("İmes Sipariş").
pub fn order_header(location: Location) -> String {
    format!("{} Sipariş", location.display_name())
}

/// Mapped depot movement header ("İMES DEVIR").
pub fn depot_movement_header(location: Location, movement: StockMovement) -> String {
    format!("{} {}", location.depot_name(), movement.output_suffix())
}

// ==========================================
// ColumnKind - what a column renders per record
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// Raw product code (URUNKODU and its URUNKODU_3 copy).
    RawCode,
    /// Adjusted code; exported with a text number format to keep
    /// leading zeros.
    AdjustedCode,
    Description,
    ManufacturerCode,
    OriginalCode,
    OldCode,
    /// CAT1..CAT7, zero-based index.
    Category(usize),
    /// Mapped depot stock movement column, coerced numeric on export.
    DepotMovement(Location, StockMovement),
    /// Supplier balance accumulator for a location.
    LocationBalance(Location),
    /// Sum of the five location balances; exported as a =SUM formula.
    TotalBalance,
    InvoiceTotal,
    CustomerCount,
    SalePrice,
    Currency,
    /// Constant zero (notes, discounts, campaign fields, month columns).
    PlaceholderZero,
}

// ==========================================
// ColumnSpec - one column of the final layout
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    pub kind: ColumnKind,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            header: header.into(),
            kind,
        }
    }
}
