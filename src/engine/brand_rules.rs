// ==========================================
// Siparis Converter - brand extraction rules
// ==========================================
// Responsibility: per-brand source columns, code cleanup, location
// rule, quantity rule and canonical category aliases.
// Dispatch is a registry lookup; adding a brand means adding a row
// here, not another conditional chain.
// ==========================================

use crate::domain::supplier::{ParsedSupplierSheet, SupplierParseStats, SupplierRecord};
use crate::domain::types::{Brand, Location};
use crate::engine::location;
use crate::engine::normalizer::normalize_code;
use crate::importer::file_parser::RawRow;
use std::collections::HashSet;
use tracing::debug;

// ==========================================
// Source field selectors
// ==========================================
#[derive(Debug, Clone, Copy)]
pub enum CodeSource {
    /// A single named column.
    Column(&'static str),
    /// First present of a candidate list (Mann/Filtron exports vary).
    FirstPresent(&'static [&'static str]),
}

#[derive(Debug, Clone, Copy)]
pub enum QuantitySource {
    /// A single quantity column.
    Column(&'static str),
    /// Sum of two columns (ZF import: delivered + open quantity).
    SumOf(&'static str, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub enum LocationRule {
    /// Token rule on purchase-order style text.
    GenericTokens,
    /// Delphi branch-name rule.
    Branch,
    /// Mann/Filtron short-code rule.
    ShortCode,
}

// ==========================================
// BrandRule - one registry entry
// ==========================================
pub struct BrandRule {
    pub brand: Brand,
    pub code_source: CodeSource,
    /// Brand-specific cleanup applied before the code normalizer.
    pub code_cleanup: fn(&str) -> String,
    pub location_column: &'static str,
    pub location_rule: LocationRule,
    pub quantity_source: QuantitySource,
    /// Canonical rows participate only when CAT4 contains one of these
    /// (case-insensitive). ZF sells under its marque names, never "ZF".
    pub category_aliases: &'static [&'static str],
}

// ===== code cleanup rules =====

/// Pass-through cleanup: trim only.
fn trim_cleanup(raw: &str) -> String {
    raw.trim().to_string()
}

/// Schaeffler: drop one trailing zero when the character before it is
/// not a digit, then drop a LUK- prefix.
fn schaeffler_cleanup(raw: &str) -> String {
    let mut code = raw.trim().to_string();

    let chars: Vec<char> = code.chars().collect();
    if chars.len() > 1 && chars[chars.len() - 1] == '0' && !chars[chars.len() - 2].is_ascii_digit()
    {
        code.pop();
    }

    if let Some(rest) = code.strip_prefix("LUK-") {
        code = rest.to_string();
    }

    code
}

/// Valeo: drop a VALE- prefix.
fn valeo_cleanup(raw: &str) -> String {
    let code = raw.trim();
    match code.strip_prefix("VALE-") {
        Some(rest) => rest.to_string(),
        None => code.to_string(),
    }
}

/// ZF import material codes come in three shapes:
/// LF:/SX: prefixed -> the segment after the colon, spaces removed;
/// other colon forms -> the segment before the colon, trimmed;
/// plain -> spaces removed.
fn zf_import_cleanup(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("LF:").or_else(|| raw.strip_prefix("SX:")) {
        rest.split(':').next().unwrap_or(rest).replace(' ', "")
    } else if raw.contains(':') {
        raw.split(':').next().unwrap_or(raw).trim().to_string()
    } else {
        raw.replace(' ', "")
    }
}

// ===== registry =====

const MANN_FILTRON_CODE_COLUMNS: &[&str] = &[
    "Material Adı",
    "Material",
    "Material Name",
    "Ürün Kodu",
    "Product Code",
    "Material Kodu",
    "Malzeme Kodu",
    "Malzeme Adı",
];

const ZF_ALIASES: &[&str] = &["LEMFÖRDER", "LEMFORDER", "TRW", "SACHS"];

pub static REGISTRY: [BrandRule; 7] = [
    BrandRule {
        brand: Brand::Schaeffler,
        code_source: CodeSource::Column("Catalogue number"),
        code_cleanup: schaeffler_cleanup,
        location_column: "PO Number(L)",
        location_rule: LocationRule::GenericTokens,
        quantity_source: QuantitySource::Column("Ordered quantity"),
        category_aliases: &["SCHAEFFLER LUK"],
    },
    BrandRule {
        brand: Brand::ZfImport,
        code_source: CodeSource::Column("Material"),
        code_cleanup: zf_import_cleanup,
        location_column: "Purchase order no.",
        location_rule: LocationRule::GenericTokens,
        quantity_source: QuantitySource::SumOf("Qty.in Del.", "Open quantity"),
        category_aliases: ZF_ALIASES,
    },
    BrandRule {
        brand: Brand::Delphi,
        code_source: CodeSource::Column("Material"),
        code_cleanup: trim_cleanup,
        location_column: "Şube",
        location_rule: LocationRule::Branch,
        quantity_source: QuantitySource::Column("Cum.qty"),
        category_aliases: &["DELPHI"],
    },
    BrandRule {
        brand: Brand::ZfDomestic,
        code_source: CodeSource::Column("Basic No."),
        code_cleanup: trim_cleanup,
        location_column: "Ship-to Name",
        location_rule: LocationRule::GenericTokens,
        quantity_source: QuantitySource::Column("Outstanding Quantity"),
        category_aliases: ZF_ALIASES,
    },
    BrandRule {
        brand: Brand::Valeo,
        code_source: CodeSource::Column("Valeo Ref."),
        code_cleanup: valeo_cleanup,
        location_column: "Müşteri P/O No.",
        location_rule: LocationRule::GenericTokens,
        quantity_source: QuantitySource::Column("Sipariş Adeti"),
        category_aliases: &["VALEO"],
    },
    BrandRule {
        brand: Brand::Filtron,
        code_source: CodeSource::FirstPresent(MANN_FILTRON_CODE_COLUMNS),
        code_cleanup: trim_cleanup,
        location_column: "Müşteri SatınAlma No",
        location_rule: LocationRule::ShortCode,
        quantity_source: QuantitySource::Column("Açık Sipariş Adedi"),
        category_aliases: &["FILTRON"],
    },
    BrandRule {
        brand: Brand::Mann,
        code_source: CodeSource::FirstPresent(MANN_FILTRON_CODE_COLUMNS),
        code_cleanup: trim_cleanup,
        location_column: "Müşteri SatınAlma No",
        location_rule: LocationRule::ShortCode,
        quantity_source: QuantitySource::Column("Açık Sipariş Adedi"),
        category_aliases: &["MANN", "MANN FILTER", "MANN-FILTER", "MANNFILTER"],
    },
];

impl BrandRule {
    /// Registry lookup. The registry covers the closed brand set.
    pub fn for_brand(brand: Brand) -> &'static BrandRule {
        match brand {
            Brand::Schaeffler => &REGISTRY[0],
            Brand::ZfImport => &REGISTRY[1],
            Brand::Delphi => &REGISTRY[2],
            Brand::ZfDomestic => &REGISTRY[3],
            Brand::Valeo => &REGISTRY[4],
            Brand::Filtron => &REGISTRY[5],
            Brand::Mann => &REGISTRY[6],
        }
    }

    /// Required source columns absent from the sheet. A non-empty
    /// result skips the brand.
    pub fn missing_columns(&self, rows: &[RawRow]) -> Vec<&'static str> {
        let headers: HashSet<&str> = rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();

        let mut missing = Vec::new();

        match self.code_source {
            CodeSource::Column(name) => {
                if !headers.contains(name) {
                    missing.push(name);
                }
            }
            CodeSource::FirstPresent(candidates) => {
                if !candidates.iter().any(|c| headers.contains(c)) {
                    // report the preferred name
                    missing.push(candidates[0]);
                }
            }
        }

        if !headers.contains(self.location_column) {
            missing.push(self.location_column);
        }

        match self.quantity_source {
            QuantitySource::Column(name) => {
                if !headers.contains(name) {
                    missing.push(name);
                }
            }
            QuantitySource::SumOf(first, second) => {
                for name in [first, second] {
                    if !headers.contains(name) {
                        missing.push(name);
                    }
                }
            }
        }

        missing
    }

    /// Classify a location text with this brand's rule.
    pub fn classify(&self, text: &str) -> Option<Location> {
        match self.location_rule {
            LocationRule::GenericTokens => location::classify_generic(text),
            LocationRule::Branch => location::classify_branch(text),
            LocationRule::ShortCode => location::classify_short_code(text),
        }
    }

    /// Parse a supplier sheet into normalized (code, location, quantity)
    /// records. Per-row failures are counted, never fatal.
    pub fn parse_rows(&self, rows: &[RawRow]) -> ParsedSupplierSheet {
        let mut stats = SupplierParseStats {
            source_rows: rows.len(),
            ..Default::default()
        };
        let mut records = Vec::new();

        let code_column = self.resolve_code_column(rows);

        for row in rows {
            let raw_code = code_column
                .and_then(|column| row.get(column))
                .map(String::as_str)
                .unwrap_or("");
            let normalized_code = normalize_code(&(self.code_cleanup)(raw_code));
            if normalized_code.is_empty() {
                stats.empty_code_rows += 1;
                continue;
            }

            let location_text = row
                .get(self.location_column)
                .map(String::as_str)
                .unwrap_or("");
            let Some(location) = self.classify(location_text) else {
                debug!(brand = %self.brand, text = location_text, "row location unclassified");
                stats.unclassified_rows += 1;
                continue;
            };

            let quantity = match self.quantity_source {
                QuantitySource::Column(name) => parse_quantity(row.get(name), &mut stats),
                QuantitySource::SumOf(first, second) => {
                    parse_quantity(row.get(first), &mut stats)
                        + parse_quantity(row.get(second), &mut stats)
                }
            };

            records.push(SupplierRecord {
                normalized_code,
                location,
                quantity,
            });
        }

        ParsedSupplierSheet {
            brand: self.brand,
            records,
            stats,
        }
    }

    fn resolve_code_column(&self, rows: &[RawRow]) -> Option<&'static str> {
        match self.code_source {
            CodeSource::Column(name) => Some(name),
            CodeSource::FirstPresent(candidates) => candidates
                .iter()
                .find(|c| rows.iter().any(|row| row.contains_key(**c)))
                .copied(),
        }
    }
}

/// Parse a quantity cell; empty is zero, anything unparseable is
/// coerced to zero and counted.
fn parse_quantity(value: Option<&String>, stats: &mut SupplierParseStats) -> f64 {
    let Some(text) = value else { return 0.0 };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => {
            stats.coerced_quantities += 1;
            0.0
        }
    }
}
