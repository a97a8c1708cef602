// ==========================================
// Siparis Converter - conversion job orchestrator
// ==========================================
// Responsibility: one synchronous pipeline per job.
// Flow: parse primary -> project -> load supplier sheets (bounded
// parallel) -> aggregate (serialized) -> report.
// All state is job-scoped; nothing survives the job.
// ==========================================

use crate::config::JobConfig;
use crate::domain::product::CanonicalTable;
use crate::domain::report::{BrandOutcome, BrandStatus, ConversionReport};
use crate::domain::types::Brand;
use crate::engine::aggregator::Aggregator;
use crate::engine::brand_rules::BrandRule;
use crate::engine::projector::ColumnProjector;
use crate::error::{ConvertError, ConvertResult};
use crate::importer::file_parser::{RawRow, UniversalFileParser};
use crate::importer::sheet_loader::SupplierSheetLoader;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument, warn};
use uuid::Uuid;

pub struct ConversionJob {
    config: JobConfig,
}

impl Default for ConversionJob {
    fn default() -> Self {
        Self::new(JobConfig::default())
    }
}

impl ConversionJob {
    pub fn new(config: JobConfig) -> Self {
        Self { config }
    }

    /// Run a whole conversion job from file paths.
    ///
    /// The primary sheet failing to load is a job-level error; a
    /// supplier sheet failing to load only skips that brand.
    #[instrument(skip_all)]
    pub async fn run<P: AsRef<Path>>(
        &self,
        primary_path: P,
        supplier_files: Vec<(Brand, PathBuf)>,
    ) -> ConvertResult<(CanonicalTable, ConversionReport)> {
        let start = Instant::now();
        let job_id = Uuid::new_v4().to_string();
        info!(
            job_id = %job_id,
            primary = %primary_path.as_ref().display(),
            suppliers = supplier_files.len(),
            "conversion job started"
        );

        // stage 1: primary sheet
        let primary = primary_path.as_ref().to_path_buf();
        let primary_rows =
            tokio::task::spawn_blocking(move || UniversalFileParser.parse(&primary))
                .await
                .map_err(|e| {
                    ConvertError::InternalError(format!("primary load task failed: {}", e))
                })??;
        info!(rows = primary_rows.len(), "primary sheet parsed");

        // stage 2: projection
        let projector = ColumnProjector::from_config(&self.config);
        let mut table = projector.project(&primary_rows)?;

        // stage 3: bounded parallel supplier loads
        let loader = SupplierSheetLoader::new(self.config.max_parallel_loads);
        let loaded = loader.load_all(supplier_files).await;

        // stage 4: serialized aggregation
        let mut report = ConversionReport::new(job_id, table.records.len());
        self.aggregate_loaded(&mut table, loaded, &mut report);

        report.elapsed_ms = start.elapsed().as_millis() as i64;
        info!(
            elapsed_ms = report.elapsed_ms,
            brands = report.brands.len(),
            "conversion job finished"
        );
        Ok((table, report))
    }

    /// Synchronous variant for callers that already hold parsed rows.
    pub fn run_on_rows(
        &self,
        primary_rows: &[RawRow],
        supplier_sheets: Vec<(Brand, Vec<RawRow>)>,
    ) -> ConvertResult<(CanonicalTable, ConversionReport)> {
        let start = Instant::now();
        let job_id = Uuid::new_v4().to_string();

        let projector = ColumnProjector::from_config(&self.config);
        let mut table = projector.project(primary_rows)?;

        let mut report = ConversionReport::new(job_id, table.records.len());
        let loaded = supplier_sheets
            .into_iter()
            .map(|(brand, rows)| (brand, Ok(rows)))
            .collect();
        self.aggregate_loaded(&mut table, loaded, &mut report);

        report.elapsed_ms = start.elapsed().as_millis() as i64;
        Ok((table, report))
    }

    /// Aggregate loaded supplier sheets into an existing table.
    ///
    /// Public so callers can run further passes against the same
    /// table; balances accumulate across passes by contract.
    pub fn aggregate_loaded(
        &self,
        table: &mut CanonicalTable,
        sheets: Vec<(Brand, Result<Vec<RawRow>, String>)>,
        report: &mut ConversionReport,
    ) {
        let aggregator = Aggregator::new(self.config.fuzzy_threshold);

        for (brand, result) in sheets {
            let rule = BrandRule::for_brand(brand);
            let outcome = match result {
                Err(error) => {
                    warn!(brand = %brand, error = %error, "brand skipped: load failed");
                    BrandOutcome::skipped(brand, BrandStatus::LoadFailed, error)
                }
                Ok(rows) => {
                    let missing = rule.missing_columns(&rows);
                    if missing.is_empty() {
                        let parsed = rule.parse_rows(&rows);
                        aggregator.aggregate_brand(rule, &parsed, table)
                    } else {
                        warn!(
                            brand = %brand,
                            columns = missing.join(", "),
                            "brand skipped: missing source columns"
                        );
                        BrandOutcome::skipped(
                            brand,
                            BrandStatus::MissingColumns,
                            format!("missing columns: {}", missing.join(", ")),
                        )
                    }
                }
            };
            report.brands.push(outcome);
        }

        aggregator.finalize(table);
    }
}
