#[cfg(feature = "cli")]
pub mod args;
pub mod prompt;
pub mod storage;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT_PATH: &str = "report.txt";
pub const DEFAULT_DELIMITER: &str = ",";
/// Typed as two characters, this stands for a TAB delimiter.
pub const TAB_ESCAPE: &str = "\\t";

/// Maps user input to the delimiter used for splitting.
pub fn resolve_delimiter(raw: &str) -> String {
    match raw {
        "" => DEFAULT_DELIMITER.to_string(),
        TAB_ESCAPE => "\t".to_string(),
        other => other.to_string(),
    }
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub delimiter: String,
    pub errors_csv_path: Option<PathBuf>,
    pub summary_json_path: Option<PathBuf>,
}

impl RunConfig {
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            delimiter: DEFAULT_DELIMITER.to_string(),
            errors_csv_path: None,
            summary_json_path: None,
        }
    }

    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn with_delimiter(mut self, raw: &str) -> Self {
        self.delimiter = resolve_delimiter(raw);
        self
    }

    pub fn with_errors_csv(mut self, path: Option<PathBuf>) -> Self {
        self.errors_csv_path = path;
        self
    }

    pub fn with_summary_json(mut self, path: Option<PathBuf>) -> Self {
        self.summary_json_path = path;
        self
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &Path {
        &self.input_path
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn errors_csv_path(&self) -> Option<&Path> {
        self.errors_csv_path.as_deref()
    }

    fn summary_json_path(&self) -> Option<&Path> {
        self.summary_json_path.as_deref()
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("input", &self.input_path.to_string_lossy())?;
        validation::validate_path("input", &self.input_path)?;
        validation::validate_path("output", &self.output_path)?;
        validation::validate_delimiter("delimiter", &self.delimiter)?;

        if let Some(path) = &self.errors_csv_path {
            validation::validate_path("errors_csv", path)?;
        }
        if let Some(path) = &self.summary_json_path {
            validation::validate_path("summary_json", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_delimiter() {
        assert_eq!(resolve_delimiter(""), ",");
        assert_eq!(resolve_delimiter("\\t"), "\t");
        assert_eq!(resolve_delimiter(";"), ";");
        assert_eq!(resolve_delimiter("||"), "||");
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::new("data.csv");
        assert_eq!(config.output_path(), Path::new("report.txt"));
        assert_eq!(config.delimiter(), ",");
        assert!(config.errors_csv_path().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(RunConfig::new("").validate().is_err());
        assert!(RunConfig::new("   ").validate().is_err());
    }

    #[test]
    fn test_tab_escape_via_builder() {
        let config = RunConfig::new("data.tsv").with_delimiter("\\t");
        assert_eq!(config.delimiter(), "\t");
    }
}
