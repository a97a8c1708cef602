// ==========================================
// Siparis Converter - Excel exporter
// ==========================================
// Responsibility: render the canonical table as one .xlsx sheet.
// The adjusted-code column gets a text number format so leading
// zeros survive; the total-balance column is written as a per-row
// =SUM formula over the five supplier balance cells, so the output
// stays auditable in a spreadsheet viewer.
// ==========================================

use crate::domain::product::{CanonicalTable, ProductRecord};
use crate::domain::schema::ColumnKind;
use crate::error::{ConvertError, ConvertResult};
use std::path::Path;
use tracing::info;
use umya_spreadsheet::{NumberingFormat, Worksheet};

const SHEET_NAME: &str = "Sheet1";

/// What one cell renders as.
enum CellValue {
    Text(String),
    Number(f64),
    Formula(String),
}

pub struct ExcelWriter;

impl ExcelWriter {
    /// Write the table to an .xlsx file.
    pub fn write_to_file<P: AsRef<Path>>(table: &CanonicalTable, path: P) -> ConvertResult<()> {
        let mut book = umya_spreadsheet::new_file();
        let sheet = book
            .get_sheet_by_name_mut(SHEET_NAME)
            .ok_or_else(|| ConvertError::ExcelWriteError("default sheet missing".to_string()))?;

        Self::render(table, sheet);

        umya_spreadsheet::writer::xlsx::write(&book, path.as_ref())
            .map_err(|e| ConvertError::ExcelWriteError(e.to_string()))?;

        info!(
            path = %path.as_ref().display(),
            rows = table.records.len(),
            "workbook written"
        );
        Ok(())
    }

    fn render(table: &CanonicalTable, sheet: &mut Worksheet) {
        // header row
        for (col_idx, column) in table.columns.iter().enumerate() {
            sheet
                .get_cell_mut(((col_idx + 1) as u32, 1))
                .set_value(column.header.clone());
        }

        // the five balance cells the total formula references
        let balance_letters: Vec<String> = table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(c.kind, ColumnKind::LocationBalance(_)))
            .map(|(idx, _)| column_letter(idx + 1))
            .collect();

        for (row_idx, record) in table.records.iter().enumerate() {
            let excel_row = (row_idx + 2) as u32;
            for (col_idx, column) in table.columns.iter().enumerate() {
                let excel_col = (col_idx + 1) as u32;
                let cell = sheet.get_cell_mut((excel_col, excel_row));

                match cell_value(record, column.kind, &balance_letters, excel_row) {
                    CellValue::Text(text) => {
                        cell.set_value(text);
                    }
                    CellValue::Number(number) => {
                        cell.set_value_number(number);
                    }
                    CellValue::Formula(formula) => {
                        cell.set_formula(formula);
                    }
                }

                if matches!(column.kind, ColumnKind::AdjustedCode) {
                    sheet
                        .get_style_mut((excel_col, excel_row))
                        .get_number_format_mut()
                        .set_format_code(NumberingFormat::FORMAT_TEXT);
                }
            }
        }
    }
}

fn cell_value(
    record: &ProductRecord,
    kind: ColumnKind,
    balance_letters: &[String],
    excel_row: u32,
) -> CellValue {
    match kind {
        ColumnKind::RawCode => CellValue::Text(record.raw_code.clone()),
        ColumnKind::AdjustedCode => CellValue::Text(record.adjusted_code.clone()),
        ColumnKind::Description => CellValue::Text(record.description.clone()),
        ColumnKind::ManufacturerCode => CellValue::Text(record.manufacturer_code.clone()),
        ColumnKind::OriginalCode => CellValue::Text(record.original_code.clone()),
        ColumnKind::OldCode => CellValue::Text(record.old_code.clone()),
        ColumnKind::Category(idx) => CellValue::Text(record.categories[idx].clone()),
        ColumnKind::DepotMovement(location, movement) => {
            let raw = record
                .depot_movements
                .get(&(location, movement))
                .map(String::as_str)
                .unwrap_or("0");
            CellValue::Number(coerce_numeric(raw))
        }
        ColumnKind::LocationBalance(location) => {
            CellValue::Number(record.location_balances.get(location))
        }
        ColumnKind::TotalBalance => {
            if balance_letters.is_empty() {
                CellValue::Number(record.total_balance)
            } else {
                let refs: Vec<String> = balance_letters
                    .iter()
                    .map(|letter| format!("{}{}", letter, excel_row))
                    .collect();
                CellValue::Formula(format!("SUM({})", refs.join(",")))
            }
        }
        ColumnKind::InvoiceTotal => CellValue::Text(record.invoice_total.clone()),
        ColumnKind::CustomerCount => CellValue::Text(record.customer_count.clone()),
        ColumnKind::SalePrice => CellValue::Text(record.sale_price.clone()),
        ColumnKind::Currency => CellValue::Text(record.currency.clone()),
        ColumnKind::PlaceholderZero => CellValue::Number(0.0),
    }
}

/// Coerce depot movement text to a number; `-`, `nan`, `None` and
/// anything unparseable become zero.
fn coerce_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "-" || trimmed == "nan" || trimmed == "None" {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// 1-based column index to its Excel letter (1 -> A, 27 -> AA).
fn column_letter(mut index: usize) -> String {
    let mut letters = String::new();
    while index > 0 {
        let rem = (index - 1) % 26;
        letters.insert(0, (b'A' + rem as u8) as char);
        index = (index - 1) / 26;
    }
    letters
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_letters_cover_multi_letter_range() {
        assert_eq!(column_letter(1), "A");
        assert_eq!(column_letter(26), "Z");
        assert_eq!(column_letter(27), "AA");
        assert_eq!(column_letter(52), "AZ");
        assert_eq!(column_letter(53), "BA");
        assert_eq!(column_letter(702), "ZZ");
        assert_eq!(column_letter(703), "AAA");
    }

    #[test]
    fn residue_values_coerce_to_zero() {
        assert_eq!(coerce_numeric("-"), 0.0);
        assert_eq!(coerce_numeric("nan"), 0.0);
        assert_eq!(coerce_numeric("None"), 0.0);
        assert_eq!(coerce_numeric(""), 0.0);
        assert_eq!(coerce_numeric("junk"), 0.0);
        assert_eq!(coerce_numeric(" 12.5 "), 12.5);
    }
}
