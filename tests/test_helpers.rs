// ==========================================
// Siparis Converter - shared test fixtures
// ==========================================

use std::io::Write;
use tempfile::NamedTempFile;

/// Write a CSV fixture file with the given header and rows.
#[allow(dead_code)]
pub fn write_csv(header: &str, rows: &[&str]) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create csv fixture");
    writeln!(file, "{}", header).expect("write header");
    for row in rows {
        writeln!(file, "{}", row).expect("write row");
    }
    file.flush().expect("flush fixture");
    file
}

/// Primary sheet fixture covering one product per supported brand.
#[allow(dead_code)]
pub fn primary_sheet() -> NamedTempFile {
    write_csv(
        "URUNKODU,ACIKLAMA,CAT4,D01-DEVIR,D01-STOK",
        &[
            "D01-ABC123,DEBRİYAJ SETİ,SCHAEFFLER LUK,1,4",
            "TRW-55501,FREN BALATASI,TRW,0,2",
            "DEL-778899,ENJEKTÖR,DELPHI,0,0",
            "VAL-826704,ALTERNATÖR,VALEO,0,1",
            "MF-WK842,YAKIT FİLTRESİ,MANN FILTER,2,2",
            "FIL-OP520,YAĞ FİLTRESİ,FILTRON,0,5",
        ],
    )
}
