use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Input file not found: {path}")]
    InputNotFoundError { path: String },

    #[error("Input path is not a regular file: {path}")]
    NotAFileError { path: String },

    #[error("No permission to read input file: {path}")]
    NotReadableError { path: String },

    #[error("Failed to read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required setting: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Configuration,
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::InputNotFoundError { .. }
            | ReportError::NotAFileError { .. }
            | ReportError::NotReadableError { .. }
            | ReportError::ReadError { .. } => ErrorCategory::Input,
            ReportError::IoError(_) | ReportError::WriteError { .. } => ErrorCategory::Output,
            ReportError::MissingConfigError { .. }
            | ReportError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ReportError::CsvError(_) | ReportError::SerializationError(_) => {
                ErrorCategory::Export
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Export => ErrorSeverity::Medium,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Short message shown on stderr, without the underlying OS error chain.
    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::InputNotFoundError { path } => format!("File not found: {}", path),
            ReportError::NotAFileError { path } => {
                format!("The given path is not a file: {}", path)
            }
            ReportError::NotReadableError { path } => {
                format!("No permission to read file: {}", path)
            }
            ReportError::ReadError { path, .. } => format!("Could not read input file: {}", path),
            ReportError::WriteError { path, .. } => format!("Could not write file: {}", path),
            ReportError::MissingConfigError { field } => {
                format!("A value for '{}' is required", field)
            }
            ReportError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            ReportError::IoError(e) => format!("I/O error: {}", e),
            ReportError::CsvError(_) => "Could not export rejected lines as CSV".to_string(),
            ReportError::SerializationError(_) => "Could not serialize the summary".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::InputNotFoundError { .. } => "Check the input path for typos",
            ReportError::NotAFileError { .. } => "Point the input path at a file, not a directory",
            ReportError::NotReadableError { .. } => "Adjust the file permissions and retry",
            ReportError::ReadError { .. } => "Make sure the file is not being modified or removed",
            ReportError::WriteError { .. } | ReportError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            ReportError::MissingConfigError { .. } => "Pass the value on the command line",
            ReportError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
            ReportError::CsvError(_) | ReportError::SerializationError(_) => {
                "Retry without the export option or choose another export path"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_failures_are_distinguishable() {
        let missing = ReportError::InputNotFoundError {
            path: "data.csv".to_string(),
        };
        let dir = ReportError::NotAFileError {
            path: "data".to_string(),
        };

        assert_eq!(missing.category(), ErrorCategory::Input);
        assert_eq!(dir.category(), ErrorCategory::Input);
        assert_ne!(missing.user_friendly_message(), dir.user_friendly_message());
        assert!(missing.user_friendly_message().contains("data.csv"));
    }

    #[test]
    fn write_failures_are_critical() {
        let err = ReportError::WriteError {
            path: "report.txt".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(err.to_string().contains("report.txt"));
    }

    #[test]
    fn every_category_maps_to_a_failing_severity() {
        let config = ReportError::MissingConfigError {
            field: "input".to_string(),
        };
        let input = ReportError::NotReadableError {
            path: "data.csv".to_string(),
        };
        let export = ReportError::CsvError(csv::Error::from(std::io::Error::new(
            std::io::ErrorKind::Other,
            "broken",
        )));
        let output = ReportError::IoError(std::io::Error::new(std::io::ErrorKind::Other, "full"));

        assert_eq!(config.severity(), ErrorSeverity::High);
        assert_eq!(input.severity(), ErrorSeverity::High);
        assert_eq!(export.severity(), ErrorSeverity::Medium);
        assert_eq!(output.severity(), ErrorSeverity::Critical);
        assert!(export.severity() < input.severity());
        assert!(input.severity() < output.severity());
    }
}
