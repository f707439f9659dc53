use crate::core::{Pipeline, RenderedReport};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::path::PathBuf;

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub report: RenderedReport,
    pub output_path: PathBuf,
}

pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
    monitor: SystemMonitor,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: SystemMonitor::new(monitor_enabled),
        }
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_with(|_| {})
    }

    /// Runs all stages, handing the rendered report to `present` before it is
    /// written, so a failed write still leaves the caller with the text.
    pub fn run_with<F>(&mut self, mut present: F) -> Result<RunSummary>
    where
        F: FnMut(&RenderedReport),
    {
        tracing::info!("Starting record validation");
        self.monitor.log_stats("Start");

        let stats = self.pipeline.extract()?;
        tracing::info!(
            "Processed {} records: {} valid, {} invalid",
            stats.total_records(),
            stats.valid_records(),
            stats.invalid_records()
        );
        self.monitor.log_stats("Validation");

        let report = self.pipeline.transform(stats)?;
        self.monitor.log_stats("Formatting");
        present(&report);

        let output_path = self.pipeline.load(&report)?;
        tracing::info!("Report written to {}", output_path.display());
        self.monitor.log_final_stats();

        Ok(RunSummary {
            report,
            output_path,
        })
    }
}
