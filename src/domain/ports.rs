use crate::domain::model::Statistics;
use crate::utils::error::Result;
use std::io::BufRead;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// Opens `path` for line-oriented reading. The reader owns the handle.
    fn open_read(&self, path: &Path) -> Result<Box<dyn BufRead>>;
    /// Creates or truncates `path` and writes `data` to it.
    fn write_file(&self, path: &Path, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self) -> &Path;
    fn delimiter(&self) -> &str;
    fn errors_csv_path(&self) -> Option<&Path>;
    fn summary_json_path(&self) -> Option<&Path>;
}

/// The text report together with the statistics it was rendered from.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub statistics: Statistics,
    pub text: String,
}

pub trait Pipeline {
    /// Reads and validates every input line, folding the outcome into statistics.
    fn extract(&self) -> Result<Statistics>;
    fn transform(&self, stats: Statistics) -> Result<RenderedReport>;
    /// Persists the report (and any configured exports); returns the report path.
    fn load(&self, report: &RenderedReport) -> Result<PathBuf>;
}
