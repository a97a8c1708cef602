// ==========================================
// Siparis Converter - file parser
// ==========================================
// Supports: Excel (.xlsx/.xls) / CSV (.csv)
// Output: one HashMap<header, cell text> per non-blank row
// ==========================================

use crate::error::{ConvertError, ConvertResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

/// One raw row, keyed by trimmed header name.
pub type RawRow = HashMap<String, String>;

// ==========================================
// FileParser trait
// ==========================================
pub trait FileParser: Send + Sync {
    /// Parse a file into raw row records.
    fn parse_to_raw_records(&self, file_path: &Path) -> ConvertResult<Vec<RawRow>>;
}

// ==========================================
// CSV parser
// ==========================================
pub struct CsvParser;

impl FileParser for CsvParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ConvertResult<Vec<RawRow>> {
        let path = file_path;

        if !path.exists() {
            return Err(ConvertError::FileNotFound(path.display().to_string()));
        }

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // tolerate ragged rows
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Excel parser
// ==========================================
pub struct ExcelParser;

impl FileParser for ExcelParser {
    fn parse_to_raw_records(&self, file_path: &Path) -> ConvertResult<Vec<RawRow>> {
        let path = file_path;

        if !path.exists() {
            return Err(ConvertError::FileNotFound(path.display().to_string()));
        }

        // open_workbook_auto picks the reader from the file content,
        // so legacy .xls workbooks parse too
        let mut workbook = open_workbook_auto(path)?;

        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ConvertError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ConvertError::ExcelParseError(e.to_string()))?;

        // first row is the header row
        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| ConvertError::ExcelParseError("workbook has no data rows".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut records = Vec::new();
        for data_row in rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    let value = cell.to_string().trim().to_string();
                    row_map.insert(header.clone(), value);
                }
            }

            // skip fully blank rows
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            records.push(row_map);
        }

        Ok(records)
    }
}

// ==========================================
// Universal parser (dispatch on extension)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ConvertResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse_to_raw_records(path),
            "xlsx" | "xls" => ExcelParser.parse_to_raw_records(path),
            _ => Err(ConvertError::UnsupportedFormat(ext)),
        }
    }
}
