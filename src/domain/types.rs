// ==========================================
// Siparis Converter - domain type definitions
// ==========================================
// Closed sets: warehouse locations, stock movement kinds,
// supported supplier brands. Not user-extensible.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Location - warehouse location
// ==========================================
// Fixed set of five. Supplier rows that classify to none of these
// ("Diğer") are excluded from aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Location {
    Imes,
    Ankara,
    Bolu,
    Maslak,
    Ikitelli,
}

impl Location {
    /// All locations, canonical declaration order.
    pub const ALL: [Location; 5] = [
        Location::Imes,
        Location::Ankara,
        Location::Bolu,
        Location::Maslak,
        Location::Ikitelli,
    ];

    /// Column-block order used by the output layout
    /// (İmes, İkitelli, Ankara, Maslak, Bolu).
    pub const OUTPUT_ORDER: [Location; 5] = [
        Location::Imes,
        Location::Ikitelli,
        Location::Ankara,
        Location::Maslak,
        Location::Bolu,
    ];

    /// Mixed-case Turkish name, as used in balance column headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Location::Imes => "İmes",
            Location::Ankara => "Ankara",
            Location::Bolu => "Bolu",
            Location::Maslak => "Maslak",
            Location::Ikitelli => "İkitelli",
        }
    }

    /// Upper-case Turkish name, as used in depot column headers.
    pub fn depot_name(&self) -> &'static str {
        match self {
            Location::Imes => "İMES",
            Location::Ankara => "ANKARA",
            Location::Bolu => "BOLU",
            Location::Maslak => "MASLAK",
            Location::Ikitelli => "İKİTELLİ",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ==========================================
// StockMovement - depot stock movement kind
// ==========================================
// Source headers use ALIS; the output layout renders ALIŞ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StockMovement {
    Devir,
    Alis,
    Satis,
    Stok,
}

impl StockMovement {
    pub const ALL: [StockMovement; 4] = [
        StockMovement::Devir,
        StockMovement::Alis,
        StockMovement::Satis,
        StockMovement::Stok,
    ];

    /// Suffix as it appears in the primary sheet's depot columns.
    pub fn source_suffix(&self) -> &'static str {
        match self {
            StockMovement::Devir => "DEVIR",
            StockMovement::Alis => "ALIS",
            StockMovement::Satis => "SATIS",
            StockMovement::Stok => "STOK",
        }
    }

    /// Suffix as rendered in the output layout.
    pub fn output_suffix(&self) -> &'static str {
        match self {
            StockMovement::Devir => "DEVIR",
            StockMovement::Alis => "ALIŞ",
            StockMovement::Satis => "SATIS",
            StockMovement::Stok => "STOK",
        }
    }
}

// ==========================================
// Brand - supported supplier sheet formats
// ==========================================
// Seven uploads; Mann and Filtron share parsing rules but carry
// distinct category alias lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Brand {
    Schaeffler,
    ZfImport,
    Delphi,
    ZfDomestic,
    Valeo,
    Filtron,
    Mann,
}

impl Brand {
    /// All brands, in the order supplier files are presented.
    pub const ALL: [Brand; 7] = [
        Brand::Schaeffler,
        Brand::ZfImport,
        Brand::Delphi,
        Brand::ZfDomestic,
        Brand::Valeo,
        Brand::Filtron,
        Brand::Mann,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Brand::Schaeffler => "Schaeffler Luk",
            Brand::ZfImport => "ZF İthal",
            Brand::Delphi => "Delphi",
            Brand::ZfDomestic => "ZF Yerli",
            Brand::Valeo => "Valeo",
            Brand::Filtron => "Filtron",
            Brand::Mann => "Mann",
        }
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_names() {
        assert_eq!(Location::Ikitelli.display_name(), "İkitelli");
        assert_eq!(Location::Ikitelli.depot_name(), "İKİTELLİ");
        assert_eq!(Location::ALL.len(), 5);
    }

    #[test]
    fn output_order_starts_with_imes() {
        assert_eq!(Location::OUTPUT_ORDER[0], Location::Imes);
        assert_eq!(Location::OUTPUT_ORDER[1], Location::Ikitelli);
    }

    #[test]
    fn movement_output_suffix_uses_turkish_alis() {
        assert_eq!(StockMovement::Alis.source_suffix(), "ALIS");
        assert_eq!(StockMovement::Alis.output_suffix(), "ALIŞ");
    }

    #[test]
    fn brand_display_names() {
        assert_eq!(Brand::ZfImport.to_string(), "ZF İthal");
        assert_eq!(Brand::ALL.len(), 7);
    }
}
