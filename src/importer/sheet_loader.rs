// ==========================================
// Siparis Converter - supplier sheet loader
// ==========================================
// Responsibility: load up to seven brand files concurrently.
// Loading shares no mutable state; aggregation happens afterwards,
// single-threaded over the canonical table.
// ==========================================

use crate::domain::types::Brand;
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

// ==========================================
// SheetSource trait
// ==========================================
// Seam for tests and embedders that hold sheets in memory.
#[async_trait]
pub trait SheetSource: Send + Sync {
    /// Load one supplier sheet. A failure is reported per brand and
    /// never aborts the job.
    async fn load(&self, brand: Brand, path: &Path) -> Result<Vec<RawRow>, String>;
}

// ==========================================
// FileSheetSource - filesystem-backed source
// ==========================================
pub struct FileSheetSource;

#[async_trait]
impl SheetSource for FileSheetSource {
    async fn load(&self, brand: Brand, path: &Path) -> Result<Vec<RawRow>, String> {
        let path = path.to_path_buf();
        // parsing is blocking work; keep it off the async workers
        let parsed = tokio::task::spawn_blocking(move || UniversalFileParser.parse(&path))
            .await
            .map_err(|e| format!("load task failed for {}: {}", brand, e))?;

        parsed.map_err(|e| format!("{} sheet load failed: {}", brand, e))
    }
}

// ==========================================
// SupplierSheetLoader - bounded parallel loads
// ==========================================
pub struct SupplierSheetLoader<S: SheetSource> {
    source: S,
    max_parallel: usize,
}

impl SupplierSheetLoader<FileSheetSource> {
    pub fn new(max_parallel: usize) -> Self {
        Self::with_source(FileSheetSource, max_parallel)
    }
}

impl<S: SheetSource> SupplierSheetLoader<S> {
    pub fn with_source(source: S, max_parallel: usize) -> Self {
        Self {
            source,
            max_parallel: max_parallel.max(1),
        }
    }

    /// Load all given supplier files with bounded concurrency.
    ///
    /// Results are returned in the input order; each entry carries
    /// either the parsed rows or a per-brand load error.
    pub async fn load_all(
        &self,
        files: Vec<(Brand, PathBuf)>,
    ) -> Vec<(Brand, Result<Vec<RawRow>, String>)> {
        info!(count = files.len(), "loading supplier sheets");

        let mut completed: Vec<(usize, Brand, Result<Vec<RawRow>, String>)> =
            stream::iter(files.into_iter().enumerate())
                .map(|(idx, (brand, path))| {
                    let source = &self.source;
                    async move {
                        let result = source.load(brand, &path).await;
                        match &result {
                            Ok(rows) => {
                                info!(brand = %brand, rows = rows.len(), "supplier sheet loaded")
                            }
                            Err(e) => warn!(brand = %brand, error = %e, "supplier sheet load failed"),
                        }
                        (idx, brand, result)
                    }
                })
                .buffer_unordered(self.max_parallel)
                .collect()
                .await;

        // restore input order for the serialized aggregation phase
        completed.sort_by_key(|(idx, _, _)| *idx);
        completed
            .into_iter()
            .map(|(_, brand, result)| (brand, result))
            .collect()
    }
}
