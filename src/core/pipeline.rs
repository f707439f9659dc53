use crate::core::aggregate::aggregate_reader;
use crate::core::export::{errors_to_csv, summary_to_json};
use crate::core::report::format_report;
use crate::core::{ConfigProvider, Pipeline, RenderedReport, Statistics, Storage};
use crate::utils::error::{ReportError, Result};
use std::path::PathBuf;

pub struct ReportPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReportPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for ReportPipeline<S, C> {
    fn extract(&self) -> Result<Statistics> {
        let input = self.config.input_path();
        tracing::debug!(
            "Reading {} with delimiter {:?}",
            input.display(),
            self.config.delimiter()
        );

        let reader = self.storage.open_read(input)?;
        let stats = aggregate_reader(reader, self.config.delimiter()).map_err(|source| {
            ReportError::ReadError {
                path: input.display().to_string(),
                source,
            }
        })?;

        tracing::debug!(
            "Read {} lines ({} valid, {} invalid)",
            stats.total_records(),
            stats.valid_records(),
            stats.invalid_records()
        );
        Ok(stats)
    }

    fn transform(&self, stats: Statistics) -> Result<RenderedReport> {
        let text = format_report(&stats);
        Ok(RenderedReport {
            statistics: stats,
            text,
        })
    }

    fn load(&self, report: &RenderedReport) -> Result<PathBuf> {
        let output_path = self.config.output_path();

        tracing::debug!(
            "Writing report ({} bytes) to {}",
            report.text.len(),
            output_path.display()
        );
        self.storage.write_file(output_path, report.text.as_bytes())?;

        if let Some(csv_path) = self.config.errors_csv_path() {
            let data = errors_to_csv(report.statistics.errors())?;
            self.storage.write_file(csv_path, &data)?;
            tracing::info!(
                "📄 Exported {} rejected lines to {}",
                report.statistics.errors().len(),
                csv_path.display()
            );
        }

        if let Some(json_path) = self.config.summary_json_path() {
            let json = summary_to_json(&report.statistics)?;
            self.storage.write_file(json_path, json.as_bytes())?;
            tracing::info!("📄 Wrote JSON summary to {}", json_path.display());
        }

        Ok(output_path.to_path_buf())
    }
}
