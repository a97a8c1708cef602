// ==========================================
// Siparis Converter - column projector
// ==========================================
// Responsibility: primary sheet rows -> canonical table.
// Selects the essential column allow-list, derives the adjusted code,
// maps depot-prefixed columns onto the five locations, appends
// placeholder and dynamic month columns, and assembles the fixed
// output column order.
// ==========================================

use crate::config::JobConfig;
use crate::domain::product::{CanonicalTable, LocationBalances, ProductRecord};
use crate::domain::schema::{
    self, ColumnKind, ColumnSpec, DEPOT_PREFIXES, PLACEHOLDER_TAIL,
};
use crate::domain::types::{Location, StockMovement};
use crate::engine::normalizer::{adjusted_code, normalize_code};
use crate::importer::file_parser::RawRow;
use crate::error::{ConvertError, ConvertResult};
use chrono::Datelike;
use std::collections::{BTreeMap, HashSet};
use tracing::{info, warn};

pub struct ColumnProjector {
    run_month: u32,
}

impl ColumnProjector {
    /// Projector for a fixed run month (1-12).
    pub fn new(run_month: u32) -> Self {
        Self { run_month }
    }

    /// Resolve the run month from the job config, falling back to the
    /// current local month.
    pub fn from_config(config: &JobConfig) -> Self {
        let run_month = config
            .run_month
            .unwrap_or_else(|| chrono::Local::now().month());
        Self::new(run_month)
    }

    /// Project the primary sheet into the canonical table.
    ///
    /// A sheet without the product-code column is a job-level error;
    /// every other absent column is simply omitted from the layout.
    pub fn project(&self, rows: &[RawRow]) -> ConvertResult<CanonicalTable> {
        if rows.is_empty() {
            return Err(ConvertError::EmptySheet);
        }

        let headers: HashSet<&str> = rows
            .iter()
            .flat_map(|row| row.keys().map(String::as_str))
            .collect();
        if !headers.contains(schema::COL_RAW_CODE) {
            return Err(ConvertError::MissingKeyColumn(
                schema::COL_RAW_CODE.to_string(),
            ));
        }

        // the İkitelli depot block is frequently absent in older
        // exports; its columns fill with zeros below
        if !self.has_depot_columns_for(Location::Ikitelli, &headers) {
            warn!("no İKİTELLİ depot columns found in the primary sheet");
        }

        let records: Vec<ProductRecord> = rows.iter().map(|row| self.project_row(row)).collect();
        let columns = self.build_columns(&headers);

        info!(
            rows = records.len(),
            columns = columns.len(),
            "primary sheet projected"
        );

        let mut table = CanonicalTable { columns, records };
        table.recompute_totals();
        Ok(table)
    }

    fn has_depot_columns_for(&self, location: Location, headers: &HashSet<&str>) -> bool {
        DEPOT_PREFIXES
            .iter()
            .filter(|(_, loc)| *loc == location)
            .any(|(prefix, _)| {
                StockMovement::ALL
                    .iter()
                    .any(|mv| headers.contains(format!("{}{}", prefix, mv.source_suffix()).as_str()))
            })
    }

    fn project_row(&self, row: &RawRow) -> ProductRecord {
        let get = |name: &str| -> String { row.get(name).cloned().unwrap_or_default() };

        let raw_code = get(schema::COL_RAW_CODE);
        let adjusted = adjusted_code(&raw_code);

        // depot movements: every combination starts at "0", then the
        // present prefixed columns overwrite in fixed prefix order
        // (E01- after TD-E01-, so the later prefix wins for İKİTELLİ)
        let mut depot_movements: BTreeMap<(Location, StockMovement), String> = BTreeMap::new();
        for location in Location::ALL {
            for movement in StockMovement::ALL {
                depot_movements.insert((location, movement), "0".to_string());
            }
        }
        for (prefix, location) in DEPOT_PREFIXES {
            for movement in StockMovement::ALL {
                let source = format!("{}{}", prefix, movement.source_suffix());
                if let Some(value) = row.get(&source) {
                    let value = if value.trim().is_empty() {
                        "0".to_string()
                    } else {
                        value.clone()
                    };
                    depot_movements.insert((location, movement), value);
                }
            }
        }

        let categories = [
            get("CAT1"),
            get("CAT2"),
            get("CAT3"),
            get("CAT4"),
            get("CAT5"),
            get("CAT6"),
            get("CAT7"),
        ];

        ProductRecord {
            normalized_code: normalize_code(&raw_code),
            normalized_adjusted: normalize_code(&adjusted),
            raw_code,
            adjusted_code: adjusted,
            description: get(schema::COL_DESCRIPTION),
            manufacturer_code: get(schema::COL_MANUFACTURER_CODE),
            original_code: get(schema::COL_ORIGINAL_CODE),
            old_code: get(schema::COL_OLD_CODE),
            categories,
            depot_movements,
            location_balances: LocationBalances::default(),
            total_balance: 0.0,
            invoice_total: get(schema::COL_INVOICE_TOTAL),
            customer_count: get(schema::COL_CUSTOMER_COUNT),
            sale_price: get(schema::COL_SALE_PRICE),
            currency: get(schema::COL_CURRENCY),
        }
    }

    /// Assemble the fixed output column order. Entries whose source
    /// column is absent from the primary sheet are omitted; the tail
    /// repeats three placeholder headers by design of the layout.
    fn build_columns(&self, headers: &HashSet<&str>) -> Vec<ColumnSpec> {
        let mut columns = Vec::new();
        let mut push = |header: String, kind: ColumnKind| {
            columns.push(ColumnSpec::new(header, kind));
        };

        push(schema::COL_RAW_CODE.to_string(), ColumnKind::RawCode);
        push(schema::COL_ADJUSTED_CODE.to_string(), ColumnKind::AdjustedCode);

        for (name, kind) in [
            (schema::COL_DESCRIPTION, ColumnKind::Description),
            (schema::COL_MANUFACTURER_CODE, ColumnKind::ManufacturerCode),
            (schema::COL_ORIGINAL_CODE, ColumnKind::OriginalCode),
            (schema::COL_OLD_CODE, ColumnKind::OldCode),
        ] {
            if headers.contains(name) {
                push(name.to_string(), kind);
            }
        }

        for idx in 0..7 {
            let name = format!("CAT{}", idx + 1);
            if headers.contains(name.as_str()) {
                push(name, ColumnKind::Category(idx));
            }
        }

        // depot block, output location order
        for location in Location::OUTPUT_ORDER {
            for movement in StockMovement::ALL {
                push(
                    schema::depot_movement_header(location, movement),
                    ColumnKind::DepotMovement(location, movement),
                );
            }
        }

        push("not".to_string(), ColumnKind::PlaceholderZero);

        for location in Location::OUTPUT_ORDER {
            push(
                schema::depot_balance_header(location),
                ColumnKind::PlaceholderZero,
            );
        }

        push("Kampanya Tipi".to_string(), ColumnKind::PlaceholderZero);
        push("Toplam İsk".to_string(), ColumnKind::PlaceholderZero);
        push(schema::COL_TOTAL_BALANCE.to_string(), ColumnKind::TotalBalance);

        for location in Location::OUTPUT_ORDER {
            push(
                schema::supplier_balance_header(location),
                ColumnKind::LocationBalance(location),
            );
        }

        push("Paket Adetleri".to_string(), ColumnKind::PlaceholderZero);

        for location in Location::OUTPUT_ORDER {
            push(schema::order_header(location), ColumnKind::PlaceholderZero);
        }

        // dynamic month columns: the two months after the run month,
        // five numbered columns each, interleaved
        let (first_month, second_month) = schema::upcoming_month_names(self.run_month);
        for n in 1..=5 {
            push(format!("{}_{}", first_month, n), ColumnKind::PlaceholderZero);
            push(format!("{}_{}", second_month, n), ColumnKind::PlaceholderZero);
        }

        for (name, kind) in [
            (schema::COL_INVOICE_TOTAL, ColumnKind::InvoiceTotal),
            (schema::COL_CUSTOMER_COUNT, ColumnKind::CustomerCount),
            (schema::COL_SALE_PRICE, ColumnKind::SalePrice),
            (schema::COL_CURRENCY, ColumnKind::Currency),
        ] {
            if headers.contains(name) {
                push(name.to_string(), kind);
            }
        }

        push(schema::COL_RAW_CODE_COPY.to_string(), ColumnKind::RawCode);

        for name in PLACEHOLDER_TAIL {
            push(name.to_string(), ColumnKind::PlaceholderZero);
        }

        columns
    }
}
